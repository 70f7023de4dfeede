//! Schedule audit
//!
//! Computes the daily pick for a long run of days and checks the properties players rely
//! on: no identity served two days in a row, and every record eventually served.

use crate::engine::{DailySelection, EngineError, Game, restrict_to_favorites, select_daily};
use chrono::{Days, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Statistics from auditing a run of days
#[derive(Debug)]
pub struct AuditReport {
    pub series: String,
    pub from: NaiveDate,
    pub days: usize,
    pub pool_size: usize,
    /// Pairs of consecutive dates that served the same identity
    pub repeats: Vec<(NaiveDate, String)>,
    /// Days on which the anti-repeat rule moved the pick
    pub adjusted: usize,
    /// How often each record was served, in pool order
    pub distribution: Vec<(String, usize)>,
    pub duration: Duration,
}

impl AuditReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.repeats.is_empty()
    }

    /// Records never served during the audited run
    #[must_use]
    pub fn unserved(&self) -> Vec<&str> {
        self.distribution
            .iter()
            .filter(|(_, count)| *count == 0)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Audit the picks for `days` consecutive days starting at `from`
///
/// Days are evaluated in parallel; each pick is independent of the others.
///
/// # Errors
///
/// Returns `EngineError::EmptyPool` if the series has no records.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_audit<S: AsRef<str>>(
    game: &Game,
    from: NaiveDate,
    days: usize,
    favorites: &[S],
) -> Result<AuditReport, EngineError> {
    let start = Instant::now();
    let pool = restrict_to_favorites(game.pool(), favorites);
    let epoch = game.epoch();

    let pb = ProgressBar::new(days as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} days ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let picks: Vec<DailySelection> = (0..days as u64)
        .into_par_iter()
        .map(|offset| {
            let date = from + Days::new(offset);
            let pick = select_daily(pool.records(), date, epoch);
            pb.inc(1);
            pick
        })
        .collect::<Result<_, _>>()?;

    pb.finish_and_clear();

    let repeats: Vec<(NaiveDate, String)> = picks
        .windows(2)
        .filter(|pair| pair[0].record.same_identity(&pair[1].record))
        .map(|pair| (pair[1].date, pair[1].record.display_name().to_string()))
        .collect();

    let mut served: FxHashMap<&str, usize> = FxHashMap::default();
    for pick in &picks {
        *served.entry(pick.record.normalized_key()).or_insert(0) += 1;
    }

    let distribution = pool
        .records()
        .iter()
        .map(|record| {
            (
                record.display_name().to_string(),
                served.get(record.normalized_key()).copied().unwrap_or(0),
            )
        })
        .collect();

    let report = AuditReport {
        series: game.name().to_string(),
        from,
        days,
        pool_size: pool.len(),
        repeats,
        adjusted: picks.iter().filter(|pick| pick.adjusted).count(),
        distribution,
        duration: start.elapsed(),
    };

    info!(
        series = %report.series,
        days,
        repeats = report.repeats.len(),
        adjusted = report.adjusted,
        "audit complete"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CandidateRecord, Pool};
    use crate::datasets::Series;
    use crate::engine::{DEFAULT_EPOCH, GameKind};

    #[test]
    fn builtin_series_pass() {
        for series in Series::ALL {
            let game = series.load().unwrap();
            let report = run_audit::<&str>(&game, DEFAULT_EPOCH, 365, &[]).unwrap();

            assert!(report.passed(), "{} repeats: {:?}", series.name(), report.repeats);
            assert_eq!(report.days, 365);
            assert_eq!(
                report.distribution.iter().map(|(_, n)| n).sum::<usize>(),
                365
            );
        }
    }

    #[test]
    fn full_cycle_serves_everyone() {
        let game = Series::Naruto.load().unwrap();
        let size = game.pool().len();
        let report = run_audit::<&str>(&game, DEFAULT_EPOCH, size, &[]).unwrap();

        assert!(report.unserved().is_empty());
        assert!(report.distribution.iter().all(|(_, n)| *n == 1));
        assert_eq!(report.adjusted, 0);
    }

    #[test]
    fn favorites_shrink_the_audited_pool() {
        let game = Series::Naruto.load().unwrap();
        let report = run_audit(&game, DEFAULT_EPOCH, 10, &["Gaara", "Temari"]).unwrap();
        assert_eq!(report.pool_size, 2);
        assert!(report.passed());
    }

    #[test]
    fn empty_series_fails() {
        let game = Game::new("empty", GameKind::Clues, Pool::default(), Vec::new());
        assert_eq!(
            run_audit::<&str>(&game, DEFAULT_EPOCH, 3, &[]).err(),
            Some(EngineError::EmptyPool)
        );
    }

    #[test]
    fn single_record_repeats_are_reported() {
        let record = CandidateRecord::new("Haku", Vec::new()).unwrap();
        let game = Game::new("solo", GameKind::Clues, Pool::new([record]).0, Vec::new());
        let report = run_audit::<&str>(&game, DEFAULT_EPOCH, 3, &[]).unwrap();

        assert!(!report.passed());
        assert_eq!(report.repeats.len(), 2);
    }
}
