//! Guess evaluation
//!
//! Applies the attribute matcher column by column and decides whether the game is won,
//! lost, or continues. Identity (normalized key) alone decides a win; attribute
//! classifications are presentation only.

use super::EngineError;
use crate::core::{AttributeSpec, CandidateRecord, Classification, LetterMark, classify, score_letters};
use tracing::debug;

/// State of the game after a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Continue,
    Won,
    Lost,
}

/// Result of evaluating a character guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// One classification per attribute spec, in spec order
    pub classifications: Vec<Classification>,
    pub outcome: Outcome,
}

/// Result of evaluating a word guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterEvaluation {
    /// One mark per letter, in letter order
    pub marks: Vec<LetterMark>,
    pub outcome: Outcome,
}

/// Feedback stored with a guess in the session history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Attributes(Vec<Classification>),
    Letters(Vec<LetterMark>),
}

/// One submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessAttempt {
    pub guess: CandidateRecord,
    pub feedback: Feedback,
}

impl GuessAttempt {
    /// Number of feedback cells that are exact hits
    #[must_use]
    pub fn hits(&self) -> usize {
        match &self.feedback {
            Feedback::Attributes(classes) => classes.iter().filter(|c| c.is_match()).count(),
            Feedback::Letters(marks) => marks
                .iter()
                .filter(|&&mark| mark == LetterMark::Correct)
                .count(),
        }
    }
}

/// Evaluate a character guess against the target
///
/// `history_len` is the number of guesses already made; the one being evaluated is
/// guess number `history_len + 1`.
///
/// # Errors
/// Returns `EngineError::BudgetExceeded` if `history_len >= budget`.
///
/// # Examples
/// ```
/// use fandle::core::{AttributeSpec, CandidateRecord, Classification};
/// use fandle::engine::{Outcome, evaluate};
///
/// let specs = [AttributeSpec::numeric("Age"), AttributeSpec::exact("Village")];
/// let guess = CandidateRecord::new("Temari", vec!["19".into(), "Sand".into()]).unwrap();
/// let target = CandidateRecord::new("Gaara", vec!["17".into(), "Sand".into()]).unwrap();
///
/// let evaluation = evaluate(&guess, &target, &specs, 0, 6).unwrap();
/// assert_eq!(
///     evaluation.classifications,
///     [Classification::Lower, Classification::ExactMatch]
/// );
/// assert_eq!(evaluation.outcome, Outcome::Continue);
/// ```
pub fn evaluate(
    guess: &CandidateRecord,
    target: &CandidateRecord,
    specs: &[AttributeSpec],
    history_len: usize,
    budget: usize,
) -> Result<Evaluation, EngineError> {
    check_budget(history_len, budget)?;

    let classifications: Vec<Classification> = specs
        .iter()
        .enumerate()
        .map(|(i, spec)| classify(guess.attribute(i), target.attribute(i), spec))
        .collect();

    let outcome = outcome_for(guess, target, history_len, budget);
    debug!(
        guess = guess.normalized_key(),
        attempt = history_len + 1,
        ?outcome,
        "evaluated guess"
    );

    Ok(Evaluation {
        classifications,
        outcome,
    })
}

/// Evaluate a word guess against the target word
///
/// # Errors
/// Returns `EngineError::BudgetExceeded` if `history_len >= budget`, or
/// `EngineError::Letters` if the words differ in length.
pub fn evaluate_letters(
    guess: &CandidateRecord,
    target: &CandidateRecord,
    history_len: usize,
    budget: usize,
) -> Result<LetterEvaluation, EngineError> {
    check_budget(history_len, budget)?;

    let marks = score_letters(guess.normalized_key(), target.normalized_key())?;
    let outcome = outcome_for(guess, target, history_len, budget);
    debug!(
        guess = guess.normalized_key(),
        attempt = history_len + 1,
        ?outcome,
        "evaluated word"
    );

    Ok(LetterEvaluation { marks, outcome })
}

fn check_budget(history_len: usize, budget: usize) -> Result<(), EngineError> {
    if history_len >= budget {
        return Err(EngineError::BudgetExceeded {
            history_len,
            budget,
        });
    }
    Ok(())
}

fn outcome_for(
    guess: &CandidateRecord,
    target: &CandidateRecord,
    history_len: usize,
    budget: usize,
) -> Outcome {
    if guess.same_identity(target) {
        Outcome::Won
    } else if history_len + 1 >= budget {
        Outcome::Lost
    } else {
        Outcome::Continue
    }
}
