//! Core domain types for the guessing games
//!
//! Records, attribute columns and the pure comparison logic that turns a guess into
//! per-attribute feedback. Nothing here performs I/O or holds state between calls.

mod attribute;
mod letters;
mod matcher;
mod range;
mod record;

pub use attribute::{AttributeSpec, Classification, ComparisonKind};
pub use letters::{LetterError, LetterMark, marks_to_emoji, score_letters};
pub use matcher::{classify, satisfies};
pub use range::{NumericTarget, parse_guess_number};
pub use record::{CandidateRecord, Pool, RecordError, SUGGESTION_LIMIT, normalize_key};
