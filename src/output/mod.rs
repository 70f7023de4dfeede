//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_audit_report, print_check_result, print_daily, print_grid, print_guess_report,
    print_schedule, print_series_list,
};
