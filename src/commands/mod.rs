//! Command implementations

pub mod audit;
pub mod check;
pub mod daily;
pub mod grid;
pub mod guess;
pub mod simple;

pub use audit::{AuditReport, run_audit};
pub use check::{CheckResult, check_bucket};
pub use daily::run_schedule;
pub use grid::run_grid;
pub use guess::{GuessReport, guess_once};
pub use simple::run_simple;
