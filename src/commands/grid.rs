//! Category grid in text mode
//!
//! The player fills a 3x3 board by naming a character for each cell.

use crate::engine::{GRID_SIZE, Game, GridBoard, GridError, GridLayout, GridRules};
use crate::output::print_grid;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use tracing::debug;

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCommand {
    /// Fill the zero-based `(row, col)` with the named character
    Place { row: usize, col: usize, name: String },
    /// Start over with a fresh board
    New,
    Quit,
}

/// Parse `"<row> <col> <name>"` (one-based) or a `new`/`quit` command
///
/// # Examples
/// ```
/// use fandle::commands::grid::{GridCommand, parse_grid_input};
///
/// assert_eq!(
///     parse_grid_input("2 3 Rock Lee"),
///     Some(GridCommand::Place { row: 1, col: 2, name: "Rock Lee".to_string() })
/// );
/// assert_eq!(parse_grid_input("q"), Some(GridCommand::Quit));
/// assert_eq!(parse_grid_input("0 1 Gaara"), None);
/// ```
#[must_use]
pub fn parse_grid_input(input: &str) -> Option<GridCommand> {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => return Some(GridCommand::Quit),
        "new" | "n" => return Some(GridCommand::New),
        _ => {}
    }

    let (row, rest) = input.split_once(char::is_whitespace)?;
    let (col, name) = rest.trim_start().split_once(char::is_whitespace)?;
    let (row, col): (usize, usize) = (row.parse().ok()?, col.parse().ok()?);
    let name = name.trim();

    let in_range = |n: usize| (1..=GRID_SIZE).contains(&n);
    (in_range(row) && in_range(col) && !name.is_empty()).then(|| GridCommand::Place {
        row: row - 1,
        col: col - 1,
        name: name.to_string(),
    })
}

/// Play the category grid until it is complete or the player quits
///
/// `seed` makes the board reproducible.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or the grid rules do not
/// fit the series' columns.
pub fn run_grid(
    game: &Game,
    rules: &GridRules,
    layout: &GridLayout,
    seed: Option<u64>,
) -> Result<(), String> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let new_board = |rng: &mut StdRng| {
        GridBoard::generate(game.specs(), rules, layout, rng).map_err(|e| e.to_string())
    };

    let title = format!("{} - Grid", game.name());
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║{title:^62}║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Name a character who fits both the row and the column of a cell.");
    println!("Enter: <row> <col> <name>, e.g. '1 3 Gaara'");
    println!("Commands: 'quit' to exit, 'new' for a new grid\n");

    let mut board = new_board(&mut rng)?;
    print_grid(&board);

    loop {
        let input = get_user_input(&format!("Cell ({}/9 filled)", board.filled()))?;
        if input.is_empty() {
            continue;
        }

        let (row, col, name) = match parse_grid_input(&input) {
            Some(GridCommand::Quit) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Some(GridCommand::New) => {
                board = new_board(&mut rng)?;
                println!("\n🔄 New grid!\n");
                print_grid(&board);
                continue;
            }
            Some(GridCommand::Place { row, col, name }) => (row, col, name),
            None => {
                println!("❌ Use <row> <col> <name> with row and column from 1 to {GRID_SIZE}.\n");
                continue;
            }
        };

        let Some(record) = game.lookup(&name) else {
            println!("❌ '{name}' is not in this series.");
            let suggestions: Vec<&str> = game
                .suggest(&name)
                .into_iter()
                .map(|record| record.display_name())
                .collect();
            if !suggestions.is_empty() {
                println!("   Did you mean: {}?", suggestions.join(", "));
            }
            println!();
            continue;
        };

        match board.place(row, col, record) {
            Ok(complete) => {
                println!("{}\n", format!("✓ {}", record.display_name()).green());
                print_grid(&board);
                if complete {
                    debug!("grid complete");
                    println!("{}", "🎉 Grid complete! You won!".bright_green().bold());
                    return Ok(());
                }
            }
            Err(e @ GridError::NoMatch { .. }) => println!("{}\n", format!("✗ {e}").red()),
            Err(e) => println!("❌ {e}\n"),
        }
    }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_placements() {
        assert_eq!(
            parse_grid_input(" 1 1   Might Guy "),
            Some(GridCommand::Place {
                row: 0,
                col: 0,
                name: "Might Guy".to_string()
            })
        );
        assert_eq!(
            parse_grid_input("3  3 Gaara"),
            Some(GridCommand::Place {
                row: 2,
                col: 2,
                name: "Gaara".to_string()
            })
        );
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_grid_input("NEW"), Some(GridCommand::New));
        assert_eq!(parse_grid_input("exit"), Some(GridCommand::Quit));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_grid_input("4 1 Gaara"), None);
        assert_eq!(parse_grid_input("1 Gaara"), None);
        assert_eq!(parse_grid_input("1 2"), None);
        assert_eq!(parse_grid_input("Gaara"), None);
    }
}
