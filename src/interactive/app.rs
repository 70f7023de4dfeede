//! TUI application state and logic

use crate::core::CandidateRecord;
use crate::engine::{EngineError, Game, GameKind, Outcome, SessionState};
use crate::output::formatters::share_text;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a> {
    pub game: &'a Game,
    pub target: CandidateRecord,
    /// `#n` for the daily round, "practice" otherwise
    pub day_label: String,
    pub session: SessionState,
    pub input_buffer: String,
    pub suggestions: Vec<String>,
    pub selected: Option<usize>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by number of guesses used
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: &'a Game, target: CandidateRecord, day_label: impl Into<String>) -> Self {
        let intro = match game.kind() {
            GameKind::Clues => "Type a character name. ↑/↓ pick a suggestion, Tab completes it.",
            GameKind::Letters => "Type a word and press Enter.",
        };

        Self {
            game,
            target,
            day_label: day_label.into(),
            session: SessionState::new(),
            input_buffer: String::new(),
            suggestions: Vec::new(),
            selected: None,
            messages: vec![
                Message {
                    text: format!("Welcome to {}!", game.name()),
                    style: MessageStyle::Info,
                },
                Message {
                    text: intro.to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                guess_distribution: vec![0; game.budget() + 1],
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    /// Refresh autocomplete suggestions from the input buffer
    pub fn update_suggestions(&mut self) {
        self.selected = None;
        self.suggestions = if self.game.kind() == GameKind::Clues {
            self.game
                .suggest(&self.input_buffer)
                .into_iter()
                .map(|record| record.display_name().to_string())
                .collect()
        } else {
            Vec::new()
        };
    }

    fn move_selection(&mut self, down: bool) {
        if self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.selected = Some(match (self.selected, down) {
            (None, true) => 0,
            (None, false) => last,
            (Some(i), true) => (i + 1).min(last),
            (Some(i), false) => i.saturating_sub(1),
        });
    }

    /// Copy the selected (or first) suggestion into the input
    pub fn complete_suggestion(&mut self) {
        let index = self.selected.unwrap_or(0);
        if let Some(name) = self.suggestions.get(index).cloned() {
            self.input_buffer = name;
            self.update_suggestions();
        }
    }

    /// Submit the selected suggestion, or the typed input
    pub fn submit_input(&mut self) {
        let input = match self.selected.and_then(|i| self.suggestions.get(i)) {
            Some(name) => name.clone(),
            None => self.input_buffer.trim().to_string(),
        };
        if input.is_empty() {
            return;
        }

        let guess = match self.game.resolve_guess(&input) {
            Ok(guess) => guess,
            Err(EngineError::UnknownGuess(name)) => {
                self.add_message(
                    &format!("'{name}' is not in this series"),
                    MessageStyle::Error,
                );
                return;
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        if self.session.has_guessed(guess.normalized_key()) {
            self.add_message(
                &format!("Already guessed {}", guess.display_name()),
                MessageStyle::Error,
            );
            return;
        }

        match self.game.submit(&mut self.session, &guess, &self.target) {
            Ok(Outcome::Continue) => {
                let left = self.game.budget() - self.session.len();
                self.add_message(
                    &format!("{left} guess(es) left"),
                    MessageStyle::Info,
                );
            }
            Ok(outcome) => self.finish(outcome),
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }

        self.input_buffer.clear();
        self.update_suggestions();
    }

    fn finish(&mut self, outcome: Outcome) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::Finished;

        if outcome == Outcome::Won {
            self.stats.games_won += 1;
            let guess_count = self.session.len();
            if let Some(slot) = self.stats.guess_distribution.get_mut(guess_count) {
                *slot += 1;
            }

            let celebration = match guess_count {
                1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                _ => "🎉 GOT IT! 🎉",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            self.add_message(
                &format!("Out of guesses! It was {}", self.target.display_name()),
                MessageStyle::Error,
            );
        }

        let won = outcome == Outcome::Won;
        debug!(
            target_name = self.target.display_name(),
            guesses = self.session.len(),
            won,
            "round finished"
        );
        self.add_message("Press 'n' for a practice round or 'q' to quit.", MessageStyle::Info);
    }

    /// Start a practice round against a random target
    pub fn new_practice_round(&mut self) {
        match self.game.practice_target() {
            Ok(target) => {
                self.target = target;
                self.day_label = "practice".to_string();
                self.session = SessionState::new();
                self.input_buffer.clear();
                self.update_suggestions();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New practice round started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Spoiler-free summary of the current round
    #[must_use]
    pub fn share(&self) -> String {
        share_text(
            self.game.name(),
            &self.day_label,
            &self.session,
            self.game.budget(),
        )
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn accepts_char(&self, c: char) -> bool {
        match self.game.kind() {
            GameKind::Clues => !c.is_control(),
            GameKind::Letters => {
                c.is_alphabetic()
                    && self.input_buffer.chars().count()
                        < self.target.normalized_key().chars().count()
            }
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Finished => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_practice_round(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => {
                    if self.accepts_char(c) {
                        self.input_buffer.push(c);
                        self.update_suggestions();
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                    self.update_suggestions();
                }
                KeyCode::Down => self.move_selection(true),
                KeyCode::Up => self.move_selection(false),
                KeyCode::Tab => self.complete_suggestion(),
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(Some(summary)) => println!("{summary}"),
        Ok(None) => {}
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

/// Returns the share text of the last round if one was played to the end
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok((app.input_mode == InputMode::Finished).then(|| app.share()))
}
