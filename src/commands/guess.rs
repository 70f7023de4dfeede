//! Single guess command
//!
//! Evaluates one guess against a target as the first attempt of a fresh game.

use crate::core::CandidateRecord;
use crate::engine::{EngineError, Game, GuessAttempt, Outcome, SessionState};

/// Result of a one-off guess
pub struct GuessReport {
    pub attempt: GuessAttempt,
    pub outcome: Outcome,
    /// Target values, shown next to the feedback only once the guess has won
    pub target: CandidateRecord,
}

impl GuessReport {
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.outcome == Outcome::Won
    }
}

/// Evaluate `input` against `target`
///
/// # Errors
///
/// Returns an error if:
/// - The input does not name a record of the series
/// - A word guess has the wrong length
pub fn guess_once(game: &Game, input: &str, target: &CandidateRecord) -> Result<GuessReport, EngineError> {
    let guess = game.resolve_guess(input)?;
    let mut session = SessionState::new();
    let outcome = game.submit(&mut session, &guess, target)?;

    let attempt = session
        .attempts()
        .last()
        .cloned()
        .ok_or(EngineError::SessionFinished)?;

    Ok(GuessReport {
        attempt,
        outcome,
        target: target.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification;
    use crate::datasets::Series;
    use crate::engine::Feedback;

    #[test]
    fn guess_against_known_target() {
        let game = Series::Naruto.load().unwrap();
        let target = game.resolve_guess("Kakashi Hatake").unwrap();
        let report = guess_once(&game, "naruto uzumaki", &target).unwrap();

        assert!(!report.is_win());
        assert_eq!(report.attempt.guess.display_name(), "Naruto Uzumaki");
        assert_eq!(
            report.attempt.feedback,
            Feedback::Attributes(vec![
                Classification::Higher,
                Classification::Higher,
                Classification::Lower,
                Classification::ExactMatch,
                Classification::NoMatch,
            ])
        );
    }

    #[test]
    fn correct_guess_wins() {
        let game = Series::Words.load().unwrap();
        let target = game.resolve_guess("ninja").unwrap();
        let report = guess_once(&game, "NINJA", &target).unwrap();
        assert!(report.is_win());
        assert_eq!(report.attempt.hits(), 5);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let game = Series::Naruto.load().unwrap();
        let target = game.resolve_guess("Gaara").unwrap();
        assert!(matches!(
            guess_once(&game, "Monkey D. Luffy", &target),
            Err(EngineError::UnknownGuess(_))
        ));
    }
}
