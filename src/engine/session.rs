//! Per-player session state
//!
//! The session is an explicit value owned by the front end. The engine only appends to
//! it through [`Game::submit`](super::Game::submit).

use super::{GuessAttempt, Outcome};

/// Default number of guesses per game
pub const DEFAULT_BUDGET: usize = 6;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    InProgress,
    Won,
    Lost,
}

/// Append-only guess history for one game
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    attempts: Vec<GuessAttempt>,
    status: Status,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[GuessAttempt] {
        &self.attempts
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status != Status::InProgress
    }

    /// Check whether a record with this identity was already guessed
    #[must_use]
    pub fn has_guessed(&self, normalized_key: &str) -> bool {
        self.attempts
            .iter()
            .any(|attempt| attempt.guess.normalized_key() == normalized_key)
    }

    pub(crate) fn record(&mut self, attempt: GuessAttempt, outcome: Outcome) {
        self.attempts.push(attempt);
        self.status = match outcome {
            Outcome::Continue => Status::InProgress,
            Outcome::Won => Status::Won,
            Outcome::Lost => Status::Lost,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CandidateRecord;
    use crate::engine::Feedback;

    fn attempt(name: &str) -> GuessAttempt {
        GuessAttempt {
            guess: CandidateRecord::new(name, Vec::new()).unwrap(),
            feedback: Feedback::Attributes(Vec::new()),
        }
    }

    #[test]
    fn new_session_is_in_progress() {
        let session = SessionState::new();
        assert!(session.is_empty());
        assert_eq!(session.status(), Status::InProgress);
        assert!(!session.is_finished());
    }

    #[test]
    fn record_appends_and_updates_status() {
        let mut session = SessionState::new();
        session.record(attempt("Jiraiya"), Outcome::Continue);
        assert_eq!(session.len(), 1);
        assert!(!session.is_finished());

        session.record(attempt("Tsunade"), Outcome::Won);
        assert_eq!(session.status(), Status::Won);
        assert_eq!(session.attempts()[1].guess.display_name(), "Tsunade");
    }

    #[test]
    fn has_guessed_uses_identity() {
        let mut session = SessionState::new();
        session.record(attempt("Rock Lee"), Outcome::Continue);
        assert!(session.has_guessed("ROCKLEE"));
        assert!(!session.has_guessed("NEJIHYUGA"));
    }
}
