//! Simple interactive CLI mode
//!
//! Text-based game without TUI

use crate::core::CandidateRecord;
use crate::engine::{EngineError, Game, GameKind, Outcome, SessionState};
use crate::output::formatters::{attempt_row, header_row, share_text};
use chrono::NaiveDate;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// Starts on the daily target (or a random one when `practice` is set). After each
/// finished round the player may continue with practice rounds.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the series has no
/// records to play.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(
    game: &Game,
    today: NaiveDate,
    favorites: &[String],
    practice: bool,
) -> Result<(), String> {
    let title = format!("{} - Interactive Mode", game.name());
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║{title:^62}║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    match game.kind() {
        GameKind::Clues => {
            println!("Guess today's character by name. After each guess you'll see:\n");
            println!("  - ✓ the attribute matches");
            println!("  - ↑ the answer's value is higher, ↓ it is lower");
            println!("  - ✗ no match, ? the values cannot be compared\n");
        }
        GameKind::Letters => {
            println!("Guess today's word. After each guess you'll see:\n");
            println!("  - green: right letter, right spot");
            println!("  - yellow: letter is in the word elsewhere");
            println!("  - gray: letter is not in the word\n");
        }
    }
    println!("You have {} guesses.", game.budget());
    println!("Commands: 'quit' to exit, 'new' for a practice round\n");

    let (mut target, mut day_label) = if practice {
        (practice_target(game)?, "practice".to_string())
    } else {
        let selection = game
            .daily(today, favorites)
            .map_err(|e| e.to_string())?;
        (selection.record, format!("#{}", selection.days_since_epoch + 1))
    };
    let mut session = SessionState::new();

    loop {
        let prompt = format!("Guess {}/{}", session.len() + 1, game.budget());
        let input = get_user_input(&prompt)?;

        match input.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                target = practice_target(game)?;
                day_label = "practice".to_string();
                session = SessionState::new();
                println!("\n🔄 New practice round started!\n");
                continue;
            }
            _ => {}
        }

        let guess = match game.resolve_guess(&input) {
            Ok(guess) => guess,
            Err(EngineError::UnknownGuess(name)) => {
                println!("❌ '{name}' is not in this series.");
                let suggestions = game.suggest(&name);
                if !suggestions.is_empty() {
                    let names: Vec<&str> = suggestions
                        .iter()
                        .map(|record| record.display_name())
                        .collect();
                    println!("   Did you mean: {}?", names.join(", "));
                }
                println!();
                continue;
            }
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        if session.has_guessed(guess.normalized_key()) {
            println!("⚠ You already guessed {}.\n", guess.display_name());
            continue;
        }

        let outcome = match game.submit(&mut session, &guess, &target) {
            Ok(outcome) => outcome,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        if game.kind() == GameKind::Clues {
            println!("\n  {}", header_row(game.specs()).bright_black());
            for attempt in session.attempts() {
                println!("  {}", attempt_row(attempt));
            }
        } else if let Some(attempt) = session.attempts().last() {
            println!("\n  {}", attempt_row(attempt));
        }
        println!();

        if outcome == Outcome::Continue {
            continue;
        }

        print_result(game, &session, &target, &day_label, outcome);

        match get_user_input("Play a practice round? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => {
                target = practice_target(game)?;
                day_label = "practice".to_string();
                session = SessionState::new();
                println!("\n🔄 New practice round started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn practice_target(game: &Game) -> Result<CandidateRecord, String> {
    game.practice_target().map_err(|e| e.to_string())
}

fn print_result(
    game: &Game,
    session: &SessionState,
    target: &CandidateRecord,
    day_label: &str,
    outcome: Outcome,
) {
    println!("{}", "═".repeat(70).bright_cyan());
    if outcome == Outcome::Won {
        println!(
            "{}",
            "    🎉 🎊 ✨  Y O U   G O T   I T !  ✨ 🎊 🎉    "
                .bright_green()
                .bold()
        );

        let performance = match session.len() {
            1 => ("🏆 Perfect!", "First try!"),
            2 => ("⭐ Excellent!", "Outstanding performance!"),
            3 => ("💫 Great!", "Very well played!"),
            4 => ("✨ Good!", "Nice work!"),
            _ => ("👍 Solved!", "Got it!"),
        };
        println!("\n  {}", performance.0.bright_yellow().bold());
        println!("  {}", performance.1.bright_white());
    } else {
        println!("{}", "    Out of guesses!    ".bright_red().bold());
    }
    println!("{}", "═".repeat(70).bright_cyan());

    println!(
        "\n  The answer was {}",
        target.display_name().bright_white().bold()
    );
    println!("\n{}\n", share_text(game.name(), day_label, session, game.budget()));
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    // End of input behaves like 'quit'
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
