//! Fandle
//!
//! Daily guessing games for fan communities: guess a character from attribute clues, or a
//! word from letter tiles. Every player gets the same target on the same calendar day.
//!
//! # Quick Start
//!
//! ```rust
//! use fandle::core::{AttributeSpec, Classification, classify};
//!
//! let rank = AttributeSpec::ordered("Rank", &["kage", "jonin", "chunin", "genin"]);
//! let age = AttributeSpec::numeric("Age");
//!
//! // Ordered scales compare list positions: "kage" (index 0) comes before "genin"
//! // (index 3), so that answer reads as Lower
//! assert_eq!(classify("genin", "kage", &rank), Classification::Lower);
//! assert_eq!(classify("17", "15-19", &age), Classification::ExactMatch);
//! ```

// Core domain types
pub mod core;

// Daily selection and game evaluation
pub mod engine;

// Series datasets
pub mod datasets;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
