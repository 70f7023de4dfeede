//! Letter feedback for word-list series
//!
//! Implements the classic tile rules: letters in the right position are `Correct`,
//! letters present elsewhere in the answer are `Present`, everything else is `Absent`.
//! Duplicate letters are handed out greens first, then left to right.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Feedback for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterMark {
    /// Right letter, right position
    Correct,
    /// Letter occurs elsewhere in the answer
    Present,
    /// Letter not in the answer (or all its occurrences already used)
    Absent,
}

impl LetterMark {
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error type for guesses that cannot be scored against an answer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("Guess has {guess} letters, answer has {answer}")]
    LengthMismatch { guess: usize, answer: usize },
}

/// Score `guess` against `answer`
///
/// Both words are compared letter by letter as given; callers pass normalized keys.
///
/// # Errors
/// Returns `LetterError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use fandle::core::{LetterMark, score_letters};
///
/// let marks = score_letters("CRANE", "SLATE").unwrap();
/// assert_eq!(
///     marks,
///     [
///         LetterMark::Absent,
///         LetterMark::Absent,
///         LetterMark::Correct,
///         LetterMark::Absent,
///         LetterMark::Correct,
///     ]
/// );
/// ```
pub fn score_letters(guess: &str, answer: &str) -> Result<Vec<LetterMark>, LetterError> {
    let guess: Vec<char> = guess.chars().collect();
    let answer: Vec<char> = answer.chars().collect();

    if guess.len() != answer.len() {
        return Err(LetterError::LengthMismatch {
            guess: guess.len(),
            answer: answer.len(),
        });
    }

    let mut marks = vec![LetterMark::Absent; guess.len()];
    let mut available: FxHashMap<char, usize> = FxHashMap::default();
    for &letter in &answer {
        *available.entry(letter).or_insert(0) += 1;
    }

    // First pass: greens, removed from the available pool
    for (i, (g, a)) in guess.iter().zip(&answer).enumerate() {
        if g == a {
            marks[i] = LetterMark::Correct;
            if let Some(count) = available.get_mut(g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: yellows from whatever is left
    for (i, letter) in guess.iter().enumerate() {
        if marks[i] == LetterMark::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(letter)
            && *count > 0
        {
            marks[i] = LetterMark::Present;
            *count -= 1;
        }
    }

    Ok(marks)
}

/// Render marks as an emoji row such as `🟩🟨⬜⬜🟩`
#[must_use]
pub fn marks_to_emoji(marks: &[LetterMark]) -> String {
    marks.iter().map(|mark| mark.emoji()).collect()
}
