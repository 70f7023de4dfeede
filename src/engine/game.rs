//! Main game interface
//!
//! One parameterized engine serves every series: a `Game` is a pool, its attribute specs,
//! an epoch and an attempt budget. Front ends ask it for the daily target and submit
//! guesses through it.

use super::daily::{DEFAULT_EPOCH, DailySelection, restrict_to_favorites, select_daily};
use super::evaluator::{Feedback, GuessAttempt, Outcome, evaluate, evaluate_letters};
use super::session::{DEFAULT_BUDGET, SessionState};
use super::EngineError;
use crate::core::{AttributeSpec, CandidateRecord, Pool};
use chrono::NaiveDate;
use rand::prelude::IndexedRandom;

/// How guesses are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    /// Characters compared attribute by attribute
    Clues,
    /// Words compared letter by letter
    Letters,
}

/// A configured game for one series
#[derive(Debug, Clone)]
pub struct Game {
    name: String,
    kind: GameKind,
    pool: Pool,
    specs: Vec<AttributeSpec>,
    epoch: NaiveDate,
    budget: usize,
}

impl Game {
    /// Create a game with the default epoch and budget
    ///
    /// # Parameters
    /// - `name`: Series name shown to the player
    /// - `kind`: Whether guesses get attribute clues or letter tiles
    /// - `pool`: Guessable records (also the candidates for the daily target)
    /// - `specs`: One spec per attribute column, in column order
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: GameKind,
        pool: Pool,
        specs: Vec<AttributeSpec>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            pool,
            specs,
            epoch: DEFAULT_EPOCH,
            budget: DEFAULT_BUDGET,
        }
    }

    #[must_use]
    pub const fn with_epoch(mut self, epoch: NaiveDate) -> Self {
        self.epoch = epoch;
        self
    }

    #[must_use]
    pub const fn with_budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> GameKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn pool(&self) -> &Pool {
        &self.pool
    }

    #[inline]
    #[must_use]
    pub fn specs(&self) -> &[AttributeSpec] {
        &self.specs
    }

    #[inline]
    #[must_use]
    pub const fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    #[inline]
    #[must_use]
    pub const fn budget(&self) -> usize {
        self.budget
    }

    /// The target for `today`, optionally drawn from the player's favorites
    ///
    /// # Errors
    /// Returns `EngineError::EmptyPool` if the series has no records.
    pub fn daily<S: AsRef<str>>(
        &self,
        today: NaiveDate,
        favorites: &[S],
    ) -> Result<DailySelection, EngineError> {
        if favorites.is_empty() {
            return select_daily(self.pool.records(), today, self.epoch);
        }

        let pool = restrict_to_favorites(&self.pool, favorites);
        select_daily(pool.records(), today, self.epoch)
    }

    /// A random target for practice rounds
    ///
    /// # Errors
    /// Returns `EngineError::EmptyPool` if the series has no records.
    pub fn practice_target(&self) -> Result<CandidateRecord, EngineError> {
        self.pool
            .records()
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(EngineError::EmptyPool)
    }

    /// Resolve typed input to a guessable record
    ///
    /// Character series only accept names from the pool. Letter series accept any word
    /// made of letters; its length is checked when it is scored.
    ///
    /// # Errors
    /// Returns `EngineError::UnknownGuess` if the input names nothing guessable.
    pub fn resolve_guess(&self, input: &str) -> Result<CandidateRecord, EngineError> {
        if let Some(record) = self.lookup(input) {
            return Ok(record.clone());
        }

        match self.kind {
            GameKind::Letters => CandidateRecord::new(input.trim().to_uppercase(), Vec::new())
                .map_err(|_| EngineError::UnknownGuess(input.trim().to_string())),
            GameKind::Clues => Err(EngineError::UnknownGuess(input.trim().to_string())),
        }
    }

    /// Find a pool record by name (normalized)
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&CandidateRecord> {
        self.pool.lookup(name)
    }

    /// Autocomplete suggestions for partially typed input
    #[must_use]
    pub fn suggest(&self, fragment: &str) -> Vec<&CandidateRecord> {
        self.pool.suggest(fragment)
    }

    /// Evaluate `guess` against `target` and append it to `session`
    ///
    /// # Errors
    /// - `EngineError::SessionFinished` if the session is already won or lost
    /// - `EngineError::BudgetExceeded` if the session already holds `budget` guesses
    /// - `EngineError::Letters` if a word guess has the wrong length
    pub fn submit(
        &self,
        session: &mut SessionState,
        guess: &CandidateRecord,
        target: &CandidateRecord,
    ) -> Result<Outcome, EngineError> {
        if session.is_finished() {
            return Err(EngineError::SessionFinished);
        }

        let (feedback, outcome) = match self.kind {
            GameKind::Clues => {
                let evaluation = evaluate(guess, target, &self.specs, session.len(), self.budget)?;
                (
                    Feedback::Attributes(evaluation.classifications),
                    evaluation.outcome,
                )
            }
            GameKind::Letters => {
                let evaluation = evaluate_letters(guess, target, session.len(), self.budget)?;
                (Feedback::Letters(evaluation.marks), evaluation.outcome)
            }
        };

        session.record(
            GuessAttempt {
                guess: guess.clone(),
                feedback,
            },
            outcome,
        );

        Ok(outcome)
    }
}
