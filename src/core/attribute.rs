//! Attribute columns and per-attribute feedback
//!
//! Every attribute column of a series is described by an [`AttributeSpec`], which fixes how
//! a guessed value is compared with the target's value for that column.

use std::fmt;

/// How values of one attribute column are compared
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonKind {
    /// Trimmed, case-insensitive string equality (villages, natures, affiliations)
    Exact,
    /// Integers against points or ranges such as `15-19`, `-49`, `50+` or `190cm+`
    NumericRange,
    /// A fixed total order, highest rank first
    OrderedScale(Vec<String>),
}

/// Describes one attribute column of a series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSpec {
    name: String,
    kind: ComparisonKind,
}

impl AttributeSpec {
    /// Exact-match column
    #[must_use]
    pub fn exact(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ComparisonKind::Exact,
        }
    }

    /// Numeric range column
    #[must_use]
    pub fn numeric(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ComparisonKind::NumericRange,
        }
    }

    /// Ordered-scale column
    ///
    /// `ranks` lists the tiers from highest to lowest. Entries are stored trimmed and
    /// lowercased so lookups are insensitive to dataset casing.
    ///
    /// # Panics
    /// Panics if `ranks` is empty; a scale without tiers cannot classify anything.
    #[must_use]
    pub fn ordered<S: AsRef<str>>(name: impl Into<String>, ranks: &[S]) -> Self {
        assert!(!ranks.is_empty(), "ordered scale needs at least one rank");

        Self {
            name: name.into(),
            kind: ComparisonKind::OrderedScale(
                ranks
                    .iter()
                    .map(|rank| rank.as_ref().trim().to_lowercase())
                    .collect(),
            ),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> &ComparisonKind {
        &self.kind
    }

    /// Position of a value on this column's scale (0 = highest)
    ///
    /// Always `None` for columns that are not ordered scales.
    #[must_use]
    pub fn rank_of(&self, value: &str) -> Option<usize> {
        match &self.kind {
            ComparisonKind::OrderedScale(ranks) => {
                let needle = value.trim().to_lowercase();
                ranks.iter().position(|rank| *rank == needle)
            }
            _ => None,
        }
    }
}

/// Feedback for a single guessed attribute value
///
/// `Higher` and `Lower` describe where the target lies relative to the guess. On numeric
/// columns that is numeric order. On ordered scales it is list position: a target listed
/// after the guess is `Higher`, one listed before it is `Lower`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Value equal, inside the target range, or same rank
    ExactMatch,
    /// The target is a larger number, or sits at a larger scale index
    Higher,
    /// The target is a smaller number, or sits at a smaller scale index
    Lower,
    /// A value could not be parsed or ranked
    Invalid,
    /// Exact-match column with different values
    NoMatch,
}

impl Classification {
    #[inline]
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::ExactMatch)
    }

    /// Short tile label used by the terminal renderers
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::ExactMatch => "✓",
            Self::Higher => "↑",
            Self::Lower => "↓",
            Self::Invalid => "?",
            Self::NoMatch => "✗",
        }
    }

    /// Emoji used in share strings
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::ExactMatch => '🟩',
            Self::Higher => '🔼',
            Self::Lower => '🔽',
            Self::Invalid | Self::NoMatch => '⬛',
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ExactMatch => "match",
            Self::Higher => "higher",
            Self::Lower => "lower",
            Self::Invalid => "invalid",
            Self::NoMatch => "no match",
        };
        f.write_str(label)
    }
}
