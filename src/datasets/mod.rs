//! Series datasets
//!
//! Each built-in series pairs an embedded dataset with its attribute columns. A series
//! can also be played against a custom file with the same layout.

mod embedded;
pub mod loader;

pub use embedded::{
    NARUTO, NARUTO_COUNT, NARUTO_GRID, NARUTO_GRID_COUNT, ONE_PIECE, ONE_PIECE_COUNT, WORDS,
    WORDS_COUNT,
};

use crate::core::{AttributeSpec, Pool};
use crate::engine::{Game, GameKind, GridLayout, GridRules};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for dataset loading
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Unknown series '{0}' (try: naruto, one-piece, words)")]
    UnknownSeries(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Dataset has no header row")]
    MissingHeader,

    #[error("Dataset columns {found:?} do not match the series columns {expected:?}")]
    ColumnMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
}

/// The built-in game variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Naruto,
    OnePiece,
    Words,
}

impl Series {
    pub const ALL: [Self; 3] = [Self::Naruto, Self::OnePiece, Self::Words];

    /// Look up a series by name
    ///
    /// Supported names: "naruto", "one-piece" (or "onepiece", "one_piece"), "words" (or "wordle")
    ///
    /// # Errors
    /// Returns `DatasetError::UnknownSeries` for any other name.
    pub fn from_name(name: &str) -> Result<Self, DatasetError> {
        match name.trim().to_lowercase().as_str() {
            "naruto" => Ok(Self::Naruto),
            "one-piece" | "onepiece" | "one_piece" => Ok(Self::OnePiece),
            "words" | "wordle" => Ok(Self::Words),
            other => Err(DatasetError::UnknownSeries(other.to_string())),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Naruto => "naruto",
            Self::OnePiece => "one-piece",
            Self::Words => "words",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Naruto => "Naruto Fandle",
            Self::OnePiece => "One Piece Fandle",
            Self::Words => "Super Fandle",
        }
    }

    #[must_use]
    pub const fn kind(self) -> GameKind {
        match self {
            Self::Naruto | Self::OnePiece => GameKind::Clues,
            Self::Words => GameKind::Letters,
        }
    }

    /// Attribute columns, in dataset column order
    #[must_use]
    pub fn specs(self) -> Vec<AttributeSpec> {
        match self {
            Self::Naruto => vec![
                AttributeSpec::numeric("Age"),
                AttributeSpec::numeric("Height"),
                AttributeSpec::ordered("Rank", &["kage", "jonin", "chunin", "genin"]),
                AttributeSpec::exact("Village"),
                AttributeSpec::exact("Nature"),
            ],
            Self::OnePiece => vec![
                AttributeSpec::numeric("Age"),
                AttributeSpec::numeric("Height"),
                AttributeSpec::exact("Affiliation"),
                AttributeSpec::exact("Origin"),
                AttributeSpec::ordered(
                    "Rank",
                    &[
                        "emperor",
                        "admiral",
                        "vice admiral",
                        "captain",
                        "first mate",
                        "officer",
                        "crew",
                    ],
                ),
            ],
            Self::Words => Vec::new(),
        }
    }

    /// Bucket lists for the category grid, if the series has one
    #[must_use]
    pub fn grid_rules(self) -> Option<GridRules> {
        match self {
            Self::Naruto => Some(loader::parse_grid_rules(NARUTO_GRID.iter().copied())),
            Self::OnePiece | Self::Words => None,
        }
    }

    /// Row and column categories for the category grid, if the series has one
    #[must_use]
    pub const fn grid_layout(self) -> Option<GridLayout> {
        match self {
            Self::Naruto => Some(GridLayout {
                rows: &["Age", "Nature"],
                columns: ["Height", "Rank", "Village"],
            }),
            Self::OnePiece | Self::Words => None,
        }
    }

    const fn embedded(self) -> &'static [&'static str] {
        match self {
            Self::Naruto => NARUTO,
            Self::OnePiece => ONE_PIECE,
            Self::Words => WORDS,
        }
    }

    /// Build a game from the embedded dataset
    ///
    /// # Errors
    /// Returns an error if the embedded table does not match the series columns.
    pub fn load(self) -> Result<Game, DatasetError> {
        let pool = self.parse(self.embedded().iter().copied())?;
        Ok(self.game(pool))
    }

    /// Build a game from a custom dataset file with this series' layout
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or its header does not match.
    pub fn load_from_file<P: AsRef<Path>>(self, path: P) -> Result<Game, DatasetError> {
        let pool = loader::load_from_file(path, |content| self.parse(content.lines()))?;
        Ok(self.game(pool))
    }

    fn parse<'a>(self, lines: impl IntoIterator<Item = &'a str>) -> Result<Pool, DatasetError> {
        match self.kind() {
            GameKind::Clues => loader::parse_table(lines, &self.specs()),
            GameKind::Letters => Ok(loader::parse_word_list(lines)),
        }
    }

    fn game(self, pool: Pool) -> Game {
        Game::new(self.title(), self.kind(), pool, self.specs())
    }
}
