//! Display functions for command results

use super::formatters::{
    GRID_CELL_WIDTH, attempt_row, attempt_to_emoji, create_progress_bar, grid_cell,
    grid_header_row, header_row,
};
use crate::commands::{AuditReport, CheckResult, GuessReport};
use crate::datasets::Series;
use crate::engine::{DailySelection, GRID_SIZE, Game, GameKind, GridBoard};
use colored::Colorize;

/// Print the daily pick, hiding the answer unless `reveal` is set
pub fn print_daily(game: &Game, selection: &DailySelection, reveal: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} #{}  ({})",
        game.name().bright_yellow().bold(),
        selection.days_since_epoch + 1,
        selection.date
    );
    println!("{}", "─".repeat(60).cyan());
    println!(
        "  Days since epoch: {}  (epoch {})",
        selection.days_since_epoch, selection.epoch
    );
    println!(
        "  Pool index:       {} of {}",
        selection.index, selection.pool_size
    );

    if reveal {
        println!(
            "  Answer: {}",
            selection.record.display_name().bright_white().bold()
        );
        for (spec, value) in game.specs().iter().zip(selection.record.attributes()) {
            println!("  {:<12} {value}", spec.name().bright_black());
        }
        if selection.adjusted {
            println!("  {}", "(moved to avoid repeating yesterday)".bright_black());
        }
    } else {
        println!(
            "  {} candidates, {} guesses. Use --reveal to show the answer.",
            selection.pool_size,
            game.budget()
        );
    }
    println!();
}

/// Print upcoming daily picks as a table
pub fn print_schedule(game: &Game, picks: &[DailySelection]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} {} ", "SCHEDULE:".bright_cyan().bold(), game.name().bright_yellow());
    println!("{}", "═".repeat(60).cyan());
    println!("\n  {:<12} {:>6}  Answer", "Date", "Day");
    println!("  {}", "─".repeat(40).bright_black());

    for pick in picks {
        let marker = if pick.adjusted { " *".yellow() } else { "".normal() };
        println!(
            "  {:<12} {:>6}  {}{marker}",
            pick.date.to_string(),
            format!("#{}", pick.days_since_epoch + 1),
            pick.record.display_name().bright_white()
        );
    }

    if picks.iter().any(|pick| pick.adjusted) {
        println!("\n  {} moved to avoid repeating the previous day", "*".yellow());
    }
    println!();
}

/// Print feedback for a one-off guess
pub fn print_guess_report(game: &Game, report: &GuessReport) {
    println!();
    if game.kind() == GameKind::Clues {
        println!("  {}", header_row(game.specs()).bright_black());
    }
    println!("  {}", attempt_row(&report.attempt));
    println!("  {}", attempt_to_emoji(&report.attempt));
    println!();

    if report.is_win() {
        println!(
            "{}",
            format!("✅ Correct! The answer is {}", report.target.display_name())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not it ({} clue(s) matched)", report.attempt.hits())
                .red()
                .bold()
        );
    }
}

/// Print the outcome of a bucket check
pub fn print_check_result(result: &CheckResult) {
    let verdict = if result.satisfied {
        "✓ fits".green().bold()
    } else {
        "✗ does not fit".red().bold()
    };

    println!(
        "\n  {} {} = {}  →  {} {}\n",
        result.record.display_name().bright_white().bold(),
        result.attribute.bright_black(),
        if result.value.is_empty() { "(blank)" } else { result.value.as_str() },
        verdict,
        result.bucket.bright_yellow()
    );
}

/// Print the category grid with its headers and placed characters
pub fn print_grid(board: &GridBoard) {
    println!("  {}", grid_header_row(board.columns()).bright_cyan());
    for (row, axis) in board.rows().iter().enumerate() {
        let label = format!("{:<width$}", axis.to_string(), width = GRID_CELL_WIDTH - 2);
        let mut line = format!("  {} {}", row + 1, label.bright_yellow());
        for col in 0..GRID_SIZE {
            line.push_str(&grid_cell(board.cell(row, col)).to_string());
        }
        println!("{line}");
    }
    println!(
        "  {:width$}{}",
        "",
        (1..=GRID_SIZE)
            .map(|col| format!("{col:^width$}", width = GRID_CELL_WIDTH))
            .collect::<String>()
            .bright_black(),
        width = GRID_CELL_WIDTH
    );
    println!();
}

/// Print schedule audit statistics
pub fn print_audit_report(report: &AuditReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SCHEDULE AUDIT:".bright_cyan().bold(),
        report.series.bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n  Start:             {}", report.from);
    println!("  Days audited:      {}", report.days);
    println!("  Pool size:         {}", report.pool_size);
    println!("  Adjusted picks:    {}", report.adjusted);
    println!("  Time:              {:.2}s", report.duration.as_secs_f64());

    let busiest = report
        .distribution
        .iter()
        .map(|(_, count)| *count)
        .max()
        .unwrap_or(0);

    println!("\n  {}", "Distribution:".bright_cyan());
    for (name, count) in &report.distribution {
        let bar = create_progress_bar(*count as f64, busiest as f64, 30);
        println!("    {name:<24} {count:>4} {}", bar.bright_black());
    }

    let unserved = report.unserved();
    if !unserved.is_empty() {
        println!("\n  Never served: {}", unserved.join(", ").yellow());
    }

    println!();
    if report.passed() {
        println!("{}", "✅ No consecutive repeats".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} consecutive repeat(s)", report.repeats.len())
                .red()
                .bold()
        );
        for (date, name) in &report.repeats {
            println!("    {date}  {name}");
        }
    }
}

/// Print the built-in series
pub fn print_series_list() {
    println!("\n{}", "Available series:".bright_cyan().bold());
    for series in Series::ALL {
        println!(
            "  {:<10} {:<18} {}",
            series.name().bright_white().bold(),
            series.title(),
            series_detail(series).bright_black()
        );
    }
    println!();
}

/// One-line summary of what a series compares
fn series_detail(series: Series) -> String {
    match series.kind() {
        GameKind::Clues => {
            let specs = series.specs();
            let columns: Vec<&str> = specs.iter().map(|spec| spec.name()).collect();
            columns.join(", ")
        }
        GameKind::Letters => "letter tiles".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_detail_lists_columns() {
        assert_eq!(
            series_detail(Series::Naruto),
            "Age, Height, Rank, Village, Nature"
        );
        assert_eq!(series_detail(Series::Words), "letter tiles");
    }

    #[test]
    fn series_list_prints_every_series() {
        print_series_list();
    }

    #[test]
    fn grid_prints_partial_board() {
        let game = Series::Naruto.load().unwrap();
        let mut board = GridBoard::new(
            game.specs(),
            [("Age", "18-20"), ("Age", "21-35"), ("Nature", "Fire")],
            [("Height", "171-180cm"), ("Rank", "jonin"), ("Village", "Leaf")],
        )
        .unwrap();
        let neji = game.lookup("Neji Hyuga").unwrap();
        board.place(0, 1, neji).unwrap();
        print_grid(&board);
    }
}
