//! Daily target commands
//!
//! Reports today's selection and the schedule of upcoming picks.

use crate::engine::{DailySelection, EngineError, Game, restrict_to_favorites, schedule};
use chrono::NaiveDate;

/// Selections for `days` consecutive days starting at `from`
///
/// Favorites restrict the pool the same way they do for the daily game.
///
/// # Errors
///
/// Returns `EngineError::EmptyPool` if the series has no records.
pub fn run_schedule<S: AsRef<str>>(
    game: &Game,
    from: NaiveDate,
    days: usize,
    favorites: &[S],
) -> Result<Vec<DailySelection>, EngineError> {
    let pool = restrict_to_favorites(game.pool(), favorites);
    schedule(pool.records(), from, days, game.epoch())
}
