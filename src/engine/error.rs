//! Errors raised by the game engine

use crate::core::LetterError;
use thiserror::Error;

/// Error type for daily selection and guess evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Daily selection over an empty pool
    #[error("Data unavailable: there are no candidates to choose from")]
    EmptyPool,

    /// A guess was submitted after the attempt budget was used up
    #[error("Attempt budget exceeded: {history_len} of {budget} guesses already used")]
    BudgetExceeded { history_len: usize, budget: usize },

    /// A guess was submitted to a session that is already won or lost
    #[error("This game is already over")]
    SessionFinished,

    /// The guessed name is not part of the series
    #[error("'{0}' is not in this series")]
    UnknownGuess(String),

    #[error(transparent)]
    Letters(#[from] LetterError),
}
