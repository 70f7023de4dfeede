//! Daily target selection
//!
//! The target for a day is a pure function of the pool, the date and a fixed epoch:
//! `index = days_since_epoch mod len`. If yesterday's primary pick has the same identity
//! as today's, the pick advances by one so the same record is not served twice in a row.

use super::EngineError;
use crate::core::{CandidateRecord, Pool};
use chrono::NaiveDate;
use tracing::debug;

/// Reference date for daily selection
///
/// Changing it reshuffles every future pick, so it must stay fixed per deployment.
pub const DEFAULT_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(date) => date,
    None => panic!("invalid epoch"),
};

/// The record chosen for one calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySelection {
    pub record: CandidateRecord,
    pub date: NaiveDate,
    pub epoch: NaiveDate,
    pub days_since_epoch: i64,
    /// Position of `record` in the pool the selection was made from
    pub index: usize,
    /// Size of the pool the selection was made from
    pub pool_size: usize,
    /// Whether the anti-repeat rule moved the pick off its primary index
    pub adjusted: bool,
}

/// Whole calendar days from `epoch` to `today` (negative before the epoch)
#[must_use]
pub fn days_since_epoch(today: NaiveDate, epoch: NaiveDate) -> i64 {
    today.signed_duration_since(epoch).num_days()
}

/// Select the target for `today` from `pool`
///
/// # Errors
/// Returns `EngineError::EmptyPool` if `pool` is empty.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use fandle::core::CandidateRecord;
/// use fandle::engine::select_daily;
///
/// let pool: Vec<CandidateRecord> = ["AAA", "BBB", "CCC"]
///     .into_iter()
///     .map(|name| CandidateRecord::new(name, Vec::new()).unwrap())
///     .collect();
/// let epoch = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
///
/// let selection = select_daily(&pool, today, epoch).unwrap();
/// assert_eq!(selection.days_since_epoch, 4);
/// assert_eq!(selection.record.normalized_key(), "BBB");
/// ```
pub fn select_daily(
    pool: &[CandidateRecord],
    today: NaiveDate,
    epoch: NaiveDate,
) -> Result<DailySelection, EngineError> {
    if pool.is_empty() {
        return Err(EngineError::EmptyPool);
    }

    let len = pool.len() as i64;
    let days = days_since_epoch(today, epoch);
    let primary = days.rem_euclid(len) as usize;
    let previous = (days - 1).rem_euclid(len) as usize;

    let adjusted = pool.len() > 1 && pool[previous].same_identity(&pool[primary]);
    let index = if adjusted {
        (primary + 1) % pool.len()
    } else {
        primary
    };

    let record = pool[index].clone();
    debug!(
        %today,
        days,
        index,
        adjusted,
        key = record.normalized_key(),
        "daily selection"
    );

    Ok(DailySelection {
        record,
        date: today,
        epoch,
        days_since_epoch: days,
        index,
        pool_size: pool.len(),
        adjusted,
    })
}

/// Restrict `pool` to the player's favorites
///
/// Favorites are matched by identity, so `"rock lee"` selects `Rock Lee`. If nothing
/// matches (or no favorites are configured) the full pool is returned.
#[must_use]
pub fn restrict_to_favorites<S: AsRef<str>>(pool: &Pool, favorites: &[S]) -> Pool {
    let keys: Vec<String> = favorites
        .iter()
        .map(|name| crate::core::normalize_key(name.as_ref()))
        .filter(|key| !key.is_empty())
        .collect();

    let restricted = pool.restricted_to(keys.iter().map(String::as_str));
    if restricted.is_empty() {
        if !favorites.is_empty() {
            debug!("no favorites matched the pool, using the full pool");
        }
        return pool.clone();
    }

    restricted
}

/// Selections for `days` consecutive days starting at `from`
///
/// # Errors
/// Returns `EngineError::EmptyPool` if `pool` is empty.
pub fn schedule(
    pool: &[CandidateRecord],
    from: NaiveDate,
    days: usize,
    epoch: NaiveDate,
) -> Result<Vec<DailySelection>, EngineError> {
    from.iter_days()
        .take(days)
        .map(|date| select_daily(pool, date, epoch))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn records(names: &[&str]) -> Vec<CandidateRecord> {
        names
            .iter()
            .map(|name| CandidateRecord::new(*name, Vec::new()).unwrap())
            .collect()
    }

    fn pool(names: &[&str]) -> Pool {
        Pool::new(records(names)).0
    }

    #[test]
    fn empty_pool_is_an_error() {
        assert_eq!(
            select_daily(&[], date(2024, 3, 1), DEFAULT_EPOCH),
            Err(EngineError::EmptyPool)
        );
    }

    #[test]
    fn worked_example_day_four() {
        let pool = records(&["AAA", "BBB", "CCC"]);
        let selection = select_daily(&pool, date(2024, 1, 5), DEFAULT_EPOCH).unwrap();

        assert_eq!(selection.days_since_epoch, 4);
        assert_eq!(selection.index, 1);
        assert_eq!(selection.pool_size, 3);
        assert!(!selection.adjusted);
        assert_eq!(selection.record.normalized_key(), "BBB");
    }

    #[test]
    fn selection_is_deterministic() {
        let pool = records(&["Gaara", "Temari", "Kankuro", "Baki"]);
        let today = date(2025, 7, 14);
        let first = select_daily(&pool, today, DEFAULT_EPOCH).unwrap();
        let second = select_daily(&pool, today, DEFAULT_EPOCH).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn days_before_epoch_wrap_around() {
        let pool = records(&["AAA", "BBB", "CCC"]);
        // Day -1 maps to index 2
        let selection = select_daily(&pool, date(2023, 12, 31), DEFAULT_EPOCH).unwrap();
        assert_eq!(selection.days_since_epoch, -1);
        assert_eq!(selection.record.normalized_key(), "CCC");
    }

    #[test]
    fn single_record_pool_always_picks_it() {
        let pool = records(&["Haku"]);
        for offset in 0..5 {
            let day = DEFAULT_EPOCH + chrono::Days::new(offset);
            let selection = select_daily(&pool, day, DEFAULT_EPOCH).unwrap();
            assert_eq!(selection.record.normalized_key(), "HAKU");
            assert!(!selection.adjusted);
        }
    }

    #[test]
    fn repeat_of_yesterday_advances() {
        // Same identity at index 0 and 1: day 1 would repeat day 0
        let pool = records(&["Gaara", "GAARA", "Temari"]);
        let selection = select_daily(&pool, date(2024, 1, 2), DEFAULT_EPOCH).unwrap();
        assert!(selection.adjusted);
        assert_eq!(selection.index, 2);
        assert_eq!(selection.record.normalized_key(), "TEMARI");
    }

    #[test]
    fn unique_pool_never_repeats_consecutive_days() {
        let pool = pool(&["A", "B", "C", "D", "E", "F", "G"]);
        let picks = schedule(pool.records(), date(2023, 11, 1), 400, DEFAULT_EPOCH).unwrap();

        assert_eq!(picks.len(), 400);
        for pair in picks.windows(2) {
            assert!(!pair[0].record.same_identity(&pair[1].record));
        }
    }

    #[test]
    fn two_record_pool_alternates() {
        let pool = pool(&["Zabuza", "Haku"]);
        let picks = schedule(pool.records(), DEFAULT_EPOCH, 4, DEFAULT_EPOCH).unwrap();
        let keys: Vec<&str> = picks.iter().map(|p| p.record.normalized_key()).collect();
        assert_eq!(keys, ["ZABUZA", "HAKU", "ZABUZA", "HAKU"]);
    }

    #[test]
    fn favorites_restrict_the_pool() {
        let pool = pool(&["Naruto Uzumaki", "Sasuke Uchiha", "Sakura Haruno"]);
        let favorites = restrict_to_favorites(&pool, &["sakura haruno", "NARUTO-UZUMAKI"]);
        let keys: Vec<&str> = favorites
            .records()
            .iter()
            .map(CandidateRecord::normalized_key)
            .collect();
        assert_eq!(keys, ["NARUTOUZUMAKI", "SAKURAHARUNO"]);
    }

    #[test]
    fn unmatched_favorites_fall_back_to_full_pool() {
        let pool = pool(&["Naruto Uzumaki", "Sasuke Uchiha"]);
        assert_eq!(restrict_to_favorites(&pool, &["Luffy"]).len(), 2);
        assert_eq!(restrict_to_favorites::<&str>(&pool, &[]).len(), 2);
    }
}
