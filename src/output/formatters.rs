//! Formatting utilities for terminal output

use crate::core::{AttributeSpec, CandidateRecord, Classification, LetterMark, marks_to_emoji};
use crate::engine::{Feedback, GridAxis, GuessAttempt, SessionState, Status};
use colored::{ColoredString, Colorize};

/// Width of one clue cell in the text board
pub const CELL_WIDTH: usize = 14;

/// Width of one grid cell (and of the row header column)
pub const GRID_CELL_WIDTH: usize = 18;

/// Format a guessed value as a coloured clue tile, e.g. ` 17 ↑ `
#[must_use]
pub fn clue_tile(value: &str, classification: Classification) -> ColoredString {
    let label = format!(
        "{:^width$}",
        format!("{} {}", truncate(value, CELL_WIDTH - 3), classification.symbol()),
        width = CELL_WIDTH
    );

    match classification {
        Classification::ExactMatch => label.black().on_green().bold(),
        Classification::Higher | Classification::Lower => label.black().on_yellow(),
        Classification::Invalid | Classification::NoMatch => label.white().on_bright_black(),
    }
}

/// Format one letter as a coloured tile
#[must_use]
pub fn letter_tile(letter: char, mark: LetterMark) -> ColoredString {
    let label = format!(" {letter} ");
    match mark {
        LetterMark::Correct => label.black().on_green().bold(),
        LetterMark::Present => label.black().on_yellow().bold(),
        LetterMark::Absent => label.white().on_bright_black(),
    }
}

/// Column headings for a clue board
#[must_use]
pub fn header_row(specs: &[AttributeSpec]) -> String {
    let mut row = format!("{:<width$}", "Name", width = CELL_WIDTH + 2);
    for spec in specs {
        row.push_str(&format!("{:^width$}", spec.name(), width = CELL_WIDTH));
    }
    row
}

/// One board row for a submitted guess
#[must_use]
pub fn attempt_row(attempt: &GuessAttempt) -> String {
    match &attempt.feedback {
        Feedback::Attributes(classes) => {
            let mut row = format!(
                "{:<width$}",
                truncate(attempt.guess.display_name(), CELL_WIDTH),
                width = CELL_WIDTH + 2
            );
            for (i, &class) in classes.iter().enumerate() {
                row.push_str(&clue_tile(attempt.guess.attribute(i), class).to_string());
            }
            row
        }
        Feedback::Letters(marks) => attempt
            .guess
            .normalized_key()
            .chars()
            .zip(marks)
            .map(|(letter, &mark)| letter_tile(letter, mark).to_string())
            .collect(),
    }
}

/// Emoji summary of one guess, safe to share
#[must_use]
pub fn attempt_to_emoji(attempt: &GuessAttempt) -> String {
    match &attempt.feedback {
        Feedback::Attributes(classes) => classes.iter().map(|c| c.emoji()).collect(),
        Feedback::Letters(marks) => marks_to_emoji(marks),
    }
}

/// Spoiler-free result text, e.g. `Naruto Fandle 2025-10-19 3/6` followed by emoji rows
#[must_use]
pub fn share_text(title: &str, day_label: &str, session: &SessionState, budget: usize) -> String {
    let score = match session.status() {
        Status::Won => session.len().to_string(),
        Status::Lost | Status::InProgress => "X".to_string(),
    };

    let mut text = format!("{title} {day_label} {score}/{budget}");
    for attempt in session.attempts() {
        text.push('\n');
        text.push_str(&attempt_to_emoji(attempt));
    }
    text
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Grid column headings, indented past the row header column
#[must_use]
pub fn grid_header_row(columns: &[GridAxis]) -> String {
    let mut row = " ".repeat(GRID_CELL_WIDTH);
    for axis in columns {
        row.push_str(&format!(
            "{:^width$}",
            truncate(&axis.to_string(), GRID_CELL_WIDTH - 1),
            width = GRID_CELL_WIDTH
        ));
    }
    row
}

/// One grid cell: the placed name on green, or an empty slot
#[must_use]
pub fn grid_cell(record: Option<&CandidateRecord>) -> ColoredString {
    match record {
        Some(record) => format!(
            "{:^width$}",
            truncate(record.display_name(), GRID_CELL_WIDTH - 2),
            width = GRID_CELL_WIDTH
        )
        .black()
        .on_green()
        .bold(),
        None => format!("{:^width$}", "·", width = GRID_CELL_WIDTH).bright_black(),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    short.push('…');
    short
}
