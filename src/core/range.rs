//! Numeric values and ranges as they appear in datasets
//!
//! Targets are free text: `"15-19"`, `"- 49"`, `"50+"`, `"160-169cm"`, `"190cm+"` or a plain
//! value with a unit such as `"170cm"`. Whitespace is ignored and unit suffixes are
//! stripped before the numbers are read.

use super::Classification;

const UNKNOWN: &str = "unknown";

/// A parsed numeric target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericTarget {
    /// A single value
    Point(i64),
    /// Inclusive `MIN-MAX`
    Between(i64, i64),
    /// Open-low `-MAX`
    AtMost(i64),
    /// Open-high `MIN+`
    AtLeast(i64),
}

impl NumericTarget {
    /// Parse a target value
    ///
    /// Returns `None` for `unknown`, empty values, and anything without a usable number.
    /// A range whose lower bound exceeds its upper bound is rejected.
    ///
    /// # Examples
    /// ```
    /// use fandle::core::NumericTarget;
    ///
    /// assert_eq!(NumericTarget::parse("15-19"), Some(NumericTarget::Between(15, 19)));
    /// assert_eq!(NumericTarget::parse("- 49"), Some(NumericTarget::AtMost(49)));
    /// assert_eq!(NumericTarget::parse("190cm+"), Some(NumericTarget::AtLeast(190)));
    /// assert_eq!(NumericTarget::parse("170cm"), Some(NumericTarget::Point(170)));
    /// assert_eq!(NumericTarget::parse("Unknown"), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let compact: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        if compact.is_empty() || compact == UNKNOWN {
            return None;
        }

        if let Some(rest) = compact.strip_suffix('+') {
            return parse_bound(rest).map(Self::AtLeast);
        }

        if let Some(rest) = compact.strip_prefix('-') {
            return parse_bound(rest).map(Self::AtMost);
        }

        if let Some((low, high)) = compact.split_once('-') {
            let (low, high) = (parse_bound(low)?, parse_bound(high)?);
            return (low <= high).then_some(Self::Between(low, high));
        }

        first_integer(&compact).map(Self::Point)
    }

    /// Check whether `value` falls inside this target
    #[must_use]
    pub const fn contains(self, value: i64) -> bool {
        match self {
            Self::Point(point) => value == point,
            Self::Between(low, high) => low <= value && value <= high,
            Self::AtMost(max) => value <= max,
            Self::AtLeast(min) => value >= min,
        }
    }

    /// Classify a guessed number against this target
    #[must_use]
    pub const fn compare(self, guess: i64) -> Classification {
        if self.contains(guess) {
            return Classification::ExactMatch;
        }

        match self {
            Self::Point(point) if point > guess => Classification::Higher,
            Self::Between(low, _) if low > guess => Classification::Higher,
            Self::AtLeast(_) => Classification::Higher,
            _ => Classification::Lower,
        }
    }
}

/// Parse a guessed value into a single integer
///
/// Every character other than a digit or `-` is discarded before parsing, so `"170cm"`
/// reads as 170. `unknown` never parses.
///
/// # Examples
/// ```
/// use fandle::core::parse_guess_number;
///
/// assert_eq!(parse_guess_number("170cm"), Some(170));
/// assert_eq!(parse_guess_number(" 17 "), Some(17));
/// assert_eq!(parse_guess_number("UNKNOWN"), None);
/// assert_eq!(parse_guess_number("15-19"), None);
/// ```
#[must_use]
pub fn parse_guess_number(raw: &str) -> Option<i64> {
    if raw.trim().eq_ignore_ascii_case(UNKNOWN) {
        return None;
    }

    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();

    digits.parse().ok()
}

/// Read one range bound, dropping a trailing unit such as `cm`
fn parse_bound(raw: &str) -> Option<i64> {
    raw.trim_end_matches(char::is_alphabetic).parse().ok()
}

/// The first run of ASCII digits in `raw`
fn first_integer(raw: &str) -> Option<i64> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let run = &raw[start..];
    let end = run.find(|c: char| !c.is_ascii_digit()).unwrap_or(run.len());
    run[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_height_buckets() {
        assert_eq!(
            NumericTarget::parse("160-169cm"),
            Some(NumericTarget::Between(160, 169))
        );
        assert_eq!(
            NumericTarget::parse("180- 190cm"),
            Some(NumericTarget::Between(180, 190))
        );
        assert_eq!(
            NumericTarget::parse("190cm+"),
            Some(NumericTarget::AtLeast(190))
        );
    }

    #[test]
    fn parses_age_buckets() {
        assert_eq!(NumericTarget::parse("-49"), Some(NumericTarget::AtMost(49)));
        assert_eq!(NumericTarget::parse("50+"), Some(NumericTarget::AtLeast(50)));
        assert_eq!(NumericTarget::parse(" 17 "), Some(NumericTarget::Point(17)));
    }

    #[test]
    fn rejects_unparsable_targets() {
        assert_eq!(NumericTarget::parse(""), None);
        assert_eq!(NumericTarget::parse("unknown"), None);
        assert_eq!(NumericTarget::parse("tall"), None);
        assert_eq!(NumericTarget::parse("20-15"), None);
        assert_eq!(NumericTarget::parse("a-b"), None);
        assert_eq!(NumericTarget::parse("+"), None);
    }

    #[test]
    fn point_value_extracts_first_integer() {
        assert_eq!(NumericTarget::parse("approx170cm"), Some(NumericTarget::Point(170)));
        assert_eq!(
            NumericTarget::parse("99999999999999999999"),
            None,
            "overflow is not a number"
        );
    }

    #[test]
    fn compare_between() {
        let teen = NumericTarget::Between(15, 19);
        assert_eq!(teen.compare(15), Classification::ExactMatch);
        assert_eq!(teen.compare(19), Classification::ExactMatch);
        assert_eq!(teen.compare(14), Classification::Higher);
        assert_eq!(teen.compare(20), Classification::Lower);
    }

    #[test]
    fn compare_open_ranges() {
        assert_eq!(NumericTarget::AtMost(49).compare(45), Classification::ExactMatch);
        assert_eq!(NumericTarget::AtMost(49).compare(50), Classification::Lower);
        assert_eq!(NumericTarget::AtLeast(50).compare(55), Classification::ExactMatch);
        assert_eq!(NumericTarget::AtLeast(50).compare(49), Classification::Higher);
    }

    #[test]
    fn compare_point() {
        let point = NumericTarget::Point(170);
        assert_eq!(point.compare(170), Classification::ExactMatch);
        assert_eq!(point.compare(160), Classification::Higher);
        assert_eq!(point.compare(180), Classification::Lower);
    }

    #[test]
    fn guess_number_parsing() {
        assert_eq!(parse_guess_number("17"), Some(17));
        assert_eq!(parse_guess_number("1 7"), Some(17));
        assert_eq!(parse_guess_number("-3"), Some(-3));
        assert_eq!(parse_guess_number(""), None);
        assert_eq!(parse_guess_number("cm"), None);
        assert_eq!(parse_guess_number(" Unknown "), None);
    }
}
