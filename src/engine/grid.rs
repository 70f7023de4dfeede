//! Category grid puzzle
//!
//! A 3x3 board whose rows and columns each carry one bucket of an attribute category,
//! such as `Age: 16-17` or `Village: Leaf`. A character fills a cell only if its values
//! satisfy both the row bucket and the column bucket. Filling all nine cells wins.

use crate::core::{AttributeSpec, CandidateRecord, satisfies};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Rows and columns per side
pub const GRID_SIZE: usize = 3;

/// Error type for building and filling a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Grid rules have no buckets for '{0}'")]
    NoBuckets(String),

    #[error("'{0}' is not an attribute of this series")]
    UnknownCategory(String),

    #[error("Row and column must be between 1 and 3")]
    OutOfBounds { row: usize, col: usize },

    #[error("{name} does not fit {row} and {col}")]
    NoMatch {
        name: String,
        row: String,
        col: String,
    },

    #[error("The grid is already complete")]
    Complete,
}

/// Bucket lists per attribute category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridRules {
    categories: Vec<(String, Vec<String>)>,
}

impl GridRules {
    #[must_use]
    pub const fn new(categories: Vec<(String, Vec<String>)>) -> Self {
        Self { categories }
    }

    /// Buckets for `category` (case-insensitive); empty if the category has none
    #[must_use]
    pub fn buckets(&self, category: &str) -> &[String] {
        self.categories
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(category))
            .map(|(_, buckets)| buckets.as_slice())
            .unwrap_or_default()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(name, _)| name.as_str())
    }
}

/// Which categories may head rows and which head the columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Categories drawn (with repeats) for the three rows
    pub rows: &'static [&'static str],
    /// Fixed column categories, left to right
    pub columns: [&'static str; GRID_SIZE],
}

/// One row or column header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridAxis {
    spec: AttributeSpec,
    column: usize,
    bucket: String,
}

impl GridAxis {
    /// Header for `bucket` of the attribute named `category`
    ///
    /// # Errors
    /// Returns `GridError::UnknownCategory` if no spec is named `category`.
    pub fn new(specs: &[AttributeSpec], category: &str, bucket: &str) -> Result<Self, GridError> {
        let column = specs
            .iter()
            .position(|spec| spec.name().eq_ignore_ascii_case(category.trim()))
            .ok_or_else(|| GridError::UnknownCategory(category.trim().to_string()))?;

        if bucket.trim().is_empty() {
            return Err(GridError::NoBuckets(specs[column].name().to_string()));
        }

        Ok(Self {
            spec: specs[column].clone(),
            column,
            bucket: bucket.trim().to_string(),
        })
    }

    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        self.spec.name()
    }

    #[inline]
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Check whether `record` belongs to this header's bucket
    ///
    /// A blank value never belongs to any bucket.
    #[must_use]
    pub fn accepts(&self, record: &CandidateRecord) -> bool {
        let value = record.attribute(self.column);
        !value.trim().is_empty() && satisfies(value, &self.bucket, &self.spec)
    }
}

impl fmt::Display for GridAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category(), self.bucket)
    }
}

/// Pick the three row categories from `pool`
///
/// Every pool category appears at least once (up to three of them) and the remaining
/// rows repeat a random one, so a two-category pool always splits 2+1. The order is
/// shuffled.
pub fn select_row_categories<R: Rng + ?Sized>(pool: &[&str], rng: &mut R) -> Vec<String> {
    let mut distinct: Vec<&str> = pool.to_vec();
    distinct.shuffle(rng);

    let mut rows: Vec<&str> = distinct.into_iter().take(GRID_SIZE).collect();
    while rows.len() < GRID_SIZE {
        let Some(&extra) = pool.choose(rng) else {
            break;
        };
        rows.push(extra);
    }
    rows.shuffle(rng);

    rows.into_iter().map(str::to_string).collect()
}

/// A 3x3 board of headers and placed characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBoard {
    rows: Vec<GridAxis>,
    columns: Vec<GridAxis>,
    cells: [[Option<CandidateRecord>; GRID_SIZE]; GRID_SIZE],
}

impl GridBoard {
    /// Board with the given `(category, bucket)` headers
    ///
    /// # Errors
    /// Returns `GridError::UnknownCategory` for a category that is not in `specs`.
    pub fn new(
        specs: &[AttributeSpec],
        rows: [(&str, &str); GRID_SIZE],
        columns: [(&str, &str); GRID_SIZE],
    ) -> Result<Self, GridError> {
        let axes = |headers: [(&str, &str); GRID_SIZE]| {
            headers
                .into_iter()
                .map(|(category, bucket)| GridAxis::new(specs, category, bucket))
                .collect::<Result<Vec<_>, _>>()
        };

        Ok(Self {
            rows: axes(rows)?,
            columns: axes(columns)?,
            cells: Default::default(),
        })
    }

    /// Random board following `layout`, with buckets drawn from `rules`
    ///
    /// Row buckets are distinct from each other whenever the rules allow it.
    ///
    /// # Errors
    /// - `GridError::NoBuckets` if a chosen category has no buckets
    /// - `GridError::UnknownCategory` if a chosen category is not in `specs`
    ///
    /// # Examples
    /// ```
    /// use fandle::datasets::Series;
    /// use fandle::engine::GridBoard;
    ///
    /// let game = Series::Naruto.load().unwrap();
    /// let rules = Series::Naruto.grid_rules().unwrap();
    /// let layout = Series::Naruto.grid_layout().unwrap();
    ///
    /// let board = GridBoard::generate(game.specs(), &rules, &layout, &mut rand::rng()).unwrap();
    /// assert_eq!(board.columns()[1].category(), "Rank");
    /// assert_eq!(board.filled(), 0);
    /// ```
    pub fn generate<R: Rng + ?Sized>(
        specs: &[AttributeSpec],
        rules: &GridRules,
        layout: &GridLayout,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let mut rows = Vec::with_capacity(GRID_SIZE);
        let mut used: Vec<&str> = Vec::new();
        for category in select_row_categories(layout.rows, rng) {
            let buckets = rules.buckets(&category);
            let fresh: Vec<&str> = buckets
                .iter()
                .map(String::as_str)
                .filter(|bucket| !used.contains(bucket))
                .collect();

            let bucket = fresh
                .choose(rng)
                .copied()
                .or_else(|| buckets.choose(rng).map(String::as_str))
                .ok_or_else(|| GridError::NoBuckets(category.clone()))?;

            used.push(bucket);
            rows.push(GridAxis::new(specs, &category, bucket)?);
        }

        let mut columns = Vec::with_capacity(GRID_SIZE);
        for category in layout.columns {
            let bucket = rules
                .buckets(category)
                .choose(rng)
                .ok_or_else(|| GridError::NoBuckets(category.to_string()))?;
            columns.push(GridAxis::new(specs, category, bucket)?);
        }

        let headers: Vec<String> = rows.iter().chain(&columns).map(ToString::to_string).collect();
        debug!(?headers, "grid generated");

        Ok(Self {
            rows,
            columns,
            cells: Default::default(),
        })
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[GridAxis] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn columns(&self) -> &[GridAxis] {
        &self.columns
    }

    /// The character placed at `(row, col)`, zero-based
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&CandidateRecord> {
        self.cells.get(row)?.get(col)?.as_ref()
    }

    /// Check whether `record` fits both headers of `(row, col)`
    #[must_use]
    pub fn fits(&self, record: &CandidateRecord, row: usize, col: usize) -> bool {
        match (self.rows.get(row), self.columns.get(col)) {
            (Some(row), Some(col)) => row.accepts(record) && col.accepts(record),
            _ => false,
        }
    }

    /// Place `record` at `(row, col)`, zero-based
    ///
    /// A filled cell may be overwritten with another fitting character, and a character
    /// may fill more than one cell. Returns whether the board is now complete.
    ///
    /// # Errors
    /// - `GridError::Complete` once all nine cells are filled
    /// - `GridError::OutOfBounds` for a cell outside the board
    /// - `GridError::NoMatch` if `record` misses the row or column bucket
    pub fn place(
        &mut self,
        row: usize,
        col: usize,
        record: &CandidateRecord,
    ) -> Result<bool, GridError> {
        if self.is_complete() {
            return Err(GridError::Complete);
        }
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(GridError::OutOfBounds { row, col });
        }
        if !self.fits(record, row, col) {
            return Err(GridError::NoMatch {
                name: record.display_name().to_string(),
                row: self.rows[row].to_string(),
                col: self.columns[col].to_string(),
            });
        }

        self.cells[row][col] = Some(record.clone());
        debug!(row, col, name = record.display_name(), filled = self.filled(), "grid placement");
        Ok(self.is_complete())
    }

    /// Number of filled cells
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.filled() == GRID_SIZE * GRID_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::Series;
    use crate::engine::Game;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn naruto() -> Game {
        Series::Naruto.load().unwrap()
    }

    fn board(game: &Game) -> GridBoard {
        GridBoard::new(
            game.specs(),
            [("Age", "18-20"), ("Age", "21-35"), ("Nature", "Fire")],
            [("Height", "171-180cm"), ("Rank", "jonin"), ("Village", "Leaf")],
        )
        .unwrap()
    }

    fn named(game: &Game, name: &str) -> CandidateRecord {
        game.lookup(name).unwrap().clone()
    }

    #[test]
    fn rows_split_two_and_one() {
        let pool = ["Age", "Nature"];
        let mut splits = Vec::new();

        for seed in 0..64 {
            let rows = select_row_categories(&pool, &mut StdRng::seed_from_u64(seed));
            assert_eq!(rows.len(), GRID_SIZE);
            assert!(rows.iter().all(|row| pool.contains(&row.as_str())));

            let ages = rows.iter().filter(|row| *row == "Age").count();
            assert!(ages == 1 || ages == 2, "rows {rows:?}");
            splits.push(ages);
        }

        assert!(splits.contains(&1) && splits.contains(&2));
    }

    #[test]
    fn generated_board_follows_layout() {
        let game = naruto();
        let rules = Series::Naruto.grid_rules().unwrap();
        let layout = Series::Naruto.grid_layout().unwrap();

        for seed in 0..32 {
            let board = GridBoard::generate(
                game.specs(),
                &rules,
                &layout,
                &mut StdRng::seed_from_u64(seed),
            )
            .unwrap();

            let columns: Vec<&str> = board.columns().iter().map(GridAxis::category).collect();
            assert_eq!(columns, ["Height", "Rank", "Village"]);

            let buckets: Vec<&str> = board.rows().iter().map(GridAxis::bucket).collect();
            assert!(buckets[0] != buckets[1] && buckets[1] != buckets[2] && buckets[0] != buckets[2]);

            for axis in board.rows().iter().chain(board.columns()) {
                assert!(rules.buckets(axis.category()).contains(&axis.bucket().to_string()));
            }
        }
    }

    #[test]
    fn same_seed_same_board() {
        let game = naruto();
        let rules = Series::Naruto.grid_rules().unwrap();
        let layout = Series::Naruto.grid_layout().unwrap();
        let generate = || {
            GridBoard::generate(game.specs(), &rules, &layout, &mut StdRng::seed_from_u64(7))
                .unwrap()
        };
        assert_eq!(generate(), generate());
    }

    #[test]
    fn missing_buckets_are_an_error() {
        let game = naruto();
        let layout = Series::Naruto.grid_layout().unwrap();
        let rules = GridRules::new(vec![("Age".to_string(), vec!["16-17".to_string()])]);

        let result =
            GridBoard::generate(game.specs(), &rules, &layout, &mut StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(GridError::NoBuckets(_))));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let game = naruto();
        let result = GridBoard::new(
            game.specs(),
            [("Age", "16-17"), ("Chakra", "high"), ("Nature", "Fire")],
            [("Height", "171-180cm"), ("Rank", "jonin"), ("Village", "Leaf")],
        );
        assert_eq!(result, Err(GridError::UnknownCategory("Chakra".to_string())));
    }

    #[test]
    fn placement_needs_both_buckets() {
        let game = naruto();
        let mut board = board(&game);

        // 18, 179cm, jonin, Leaf, Fire
        let neji = named(&game, "Neji Hyuga");
        assert!(board.fits(&neji, 0, 0));
        assert_eq!(board.place(0, 2, &neji), Ok(false));
        assert_eq!(board.cell(0, 2), Some(&neji));

        // Right age, wrong village
        let temari = named(&game, "Temari");
        assert!(matches!(
            board.place(0, 2, &temari),
            Err(GridError::NoMatch { name, .. }) if name == "Temari"
        ));
        assert_eq!(board.cell(0, 2), Some(&neji));

        // Right village, wrong age
        let naruto = named(&game, "Naruto Uzumaki");
        assert!(!board.fits(&naruto, 0, 2));

        // Unknown age or nature fits no row
        let kurotsuchi = named(&game, "Kurotsuchi");
        assert!(!board.fits(&kurotsuchi, 1, 1));
        let lee = named(&game, "Rock Lee");
        assert!(!board.fits(&lee, 2, 2));
    }

    #[test]
    fn blank_value_never_fits() {
        let game = naruto();
        let board = board(&game);
        let drifter = CandidateRecord::new(
            "Drifter",
            vec!["30".into(), "175cm".into(), "jonin".into(), String::new(), "Fire".into()],
        )
        .unwrap();

        assert!(board.fits(&drifter, 1, 0));
        assert!(!board.fits(&drifter, 1, 2));
        assert!(!board.fits(&drifter, 2, 2));
    }

    #[test]
    fn placement_outside_board() {
        let game = naruto();
        let mut board = board(&game);
        let neji = named(&game, "Neji Hyuga");
        assert_eq!(
            board.place(3, 0, &neji),
            Err(GridError::OutOfBounds { row: 3, col: 0 })
        );
        assert!(!board.fits(&neji, 0, 5));
    }

    #[test]
    fn nine_cells_win() {
        let game = naruto();
        let mut board = board(&game);
        let solution = [
            ["Kankuro", "Neji Hyuga", "Neji Hyuga"],
            ["Mei Terumi", "Kakashi Hatake", "Might Guy"],
            ["Itachi Uchiha", "Jiraiya", "Shikamaru Nara"],
        ];

        for (row, names) in solution.iter().enumerate() {
            for (col, name) in names.iter().enumerate() {
                let last = row == GRID_SIZE - 1 && col == GRID_SIZE - 1;
                assert_eq!(board.place(row, col, &named(&game, name)), Ok(last), "{name}");
            }
        }

        assert!(board.is_complete());
        assert_eq!(board.filled(), 9);
        assert_eq!(
            board.place(0, 0, &named(&game, "Neji Hyuga")),
            Err(GridError::Complete)
        );
    }
}
