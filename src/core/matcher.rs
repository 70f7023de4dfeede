//! Attribute matching
//!
//! Classifies one guessed attribute value against the target's value for the same
//! column. Classification is total: a value that cannot be read yields
//! [`Classification::Invalid`] rather than an error.

use super::{AttributeSpec, Classification, ComparisonKind, NumericTarget, parse_guess_number};

/// Classify `guess_value` against `target_value` for the column described by `spec`
///
/// # Polarity
/// On numeric columns `Higher` and `Lower` describe the target value relative to the
/// guess. On an ordered scale they follow position in the rank list (index 0 = highest
/// rank): a target listed after the guess yields `Higher`, one listed before it `Lower`.
///
/// # Examples
/// ```
/// use fandle::core::{AttributeSpec, Classification, classify};
///
/// let age = AttributeSpec::numeric("Age");
/// assert_eq!(classify("17", "15-19", &age), Classification::ExactMatch);
/// assert_eq!(classify("20", "15-19", &age), Classification::Lower);
///
/// let rank = AttributeSpec::ordered("Rank", &["kage", "jonin", "chunin", "genin"]);
/// assert_eq!(classify("genin", "kage", &rank), Classification::Lower);
/// assert_eq!(classify("kage", "genin", &rank), Classification::Higher);
/// ```
#[must_use]
pub fn classify(guess_value: &str, target_value: &str, spec: &AttributeSpec) -> Classification {
    match spec.kind() {
        ComparisonKind::Exact => classify_exact(guess_value, target_value),
        ComparisonKind::NumericRange => classify_numeric(guess_value, target_value),
        ComparisonKind::OrderedScale(_) => classify_ordered(guess_value, target_value, spec),
    }
}

/// Check whether `value` belongs to a grid bucket such as `15-19` or `Leaf`
///
/// # Examples
/// ```
/// use fandle::core::{AttributeSpec, satisfies};
///
/// let height = AttributeSpec::numeric("Height");
/// assert!(satisfies("192cm", "190cm+", &height));
/// assert!(!satisfies("unknown", "190cm+", &height));
/// ```
#[must_use]
pub fn satisfies(value: &str, bucket: &str, spec: &AttributeSpec) -> bool {
    classify(value, bucket, spec).is_match()
}

fn classify_exact(guess_value: &str, target_value: &str) -> Classification {
    if guess_value.trim().to_lowercase() == target_value.trim().to_lowercase() {
        Classification::ExactMatch
    } else {
        Classification::NoMatch
    }
}

fn classify_numeric(guess_value: &str, target_value: &str) -> Classification {
    match (
        parse_guess_number(guess_value),
        NumericTarget::parse(target_value),
    ) {
        (Some(guess), Some(target)) => target.compare(guess),
        _ => Classification::Invalid,
    }
}

fn classify_ordered(guess_value: &str, target_value: &str, spec: &AttributeSpec) -> Classification {
    let (Some(guess), Some(target)) = (spec.rank_of(guess_value), spec.rank_of(target_value))
    else {
        return Classification::Invalid;
    };

    match guess.cmp(&target) {
        std::cmp::Ordering::Equal => Classification::ExactMatch,
        // Target listed further down the scale
        std::cmp::Ordering::Less => Classification::Higher,
        std::cmp::Ordering::Greater => Classification::Lower,
    }
}
