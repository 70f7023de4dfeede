//! Daily selection and guess evaluation
//!
//! This module contains the game engine shared by every series.

pub mod daily;
mod error;
pub mod evaluator;
mod game;
pub mod grid;
pub mod session;

pub use daily::{DEFAULT_EPOCH, DailySelection, restrict_to_favorites, schedule, select_daily};
pub use error::EngineError;
pub use evaluator::{
    Evaluation, Feedback, GuessAttempt, LetterEvaluation, Outcome, evaluate, evaluate_letters,
};
pub use game::{Game, GameKind};
pub use grid::{GRID_SIZE, GridAxis, GridBoard, GridError, GridLayout, GridRules};
pub use session::{DEFAULT_BUDGET, SessionState, Status};
