//! Fandle - CLI
//!
//! Daily character and word guessing games with TUI and CLI modes.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fandle::{
    commands::{check_bucket, guess_once, run_audit, run_grid, run_schedule, run_simple},
    datasets::Series,
    engine::Game,
    output::{
        print_audit_report, print_check_result, print_daily, print_guess_report, print_schedule,
        print_series_list,
    },
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fandle",
    about = "Guess the daily character (or word) from attribute clues",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Series: naruto (default), one-piece, words
    #[arg(short, long, global = true, default_value = "naruto")]
    series: String,

    /// Play against a custom dataset file with the series' columns
    #[arg(short = 'd', long, global = true)]
    dataset: Option<String>,

    /// Day to play, YYYY-MM-DD (default: today)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// First day of the rotation, YYYY-MM-DD
    #[arg(long, global = true)]
    epoch: Option<NaiveDate>,

    /// Comma-separated names the daily pick is drawn from
    #[arg(short, long, global = true, value_delimiter = ',')]
    favorites: Vec<String>,

    /// Number of guesses allowed
    #[arg(short, long, global = true)]
    budget: Option<usize>,

    /// Play against a random target instead of the daily one
    #[arg(short, long, global = true)]
    practice: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple CLI game (line by line, no TUI)
    Simple,

    /// Show today's pick
    Daily {
        /// Show the answer
        #[arg(short, long)]
        reveal: bool,
    },

    /// Evaluate one guess against today's target
    Guess {
        /// Character name or word
        name: String,
    },

    /// List upcoming daily picks
    Schedule {
        /// Number of days to list
        #[arg(short = 'n', long, default_value = "7")]
        days: usize,
    },

    /// Check the daily rotation for consecutive repeats
    Audit {
        /// Number of days to audit
        #[arg(short = 'n', long, default_value = "3650")]
        days: usize,
    },

    /// Check whether a character's value fits a grid bucket
    Check {
        /// Character name
        name: String,

        /// Attribute column, e.g. Age
        attribute: String,

        /// Bucket, e.g. 15-19, 190cm+, Leaf, jonin
        bucket: String,
    },

    /// Fill a 3x3 grid with characters that fit each row and column
    Grid {
        /// Seed for a reproducible board
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the built-in series
    Series,
}

/// Default log level for the given `-v` count
///
/// The TUI stays at `warn` whatever the count so debug output doesn't tear the screen.
const fn log_level(verbose: u8, tui: bool) -> &'static str {
    match (tui, verbose) {
        (true, _) | (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8, tui: bool) {
    let level = log_level(verbose, tui);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fandle={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the game from the --series, --dataset, --epoch and --budget flags
fn load_game(cli: &Cli) -> Result<Game> {
    let series = Series::from_name(&cli.series)?;

    let mut game = match &cli.dataset {
        Some(path) => series
            .load_from_file(path)
            .with_context(|| format!("loading {} dataset", series.name()))?,
        None => series.load()?,
    };

    if let Some(epoch) = cli.epoch {
        game = game.with_epoch(epoch);
    }
    if let Some(budget) = cli.budget {
        if budget == 0 {
            bail!("--budget must be at least 1");
        }
        game = game.with_budget(budget);
    }

    debug!(
        series = series.name(),
        records = game.pool().len(),
        epoch = %game.epoch(),
        budget = game.budget(),
        "game loaded"
    );
    Ok(game)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_tracing(cli.verbose, matches!(command, Commands::Play));

    if matches!(command, Commands::Series) {
        print_series_list();
        return Ok(());
    }

    let game = load_game(&cli)?;
    let today = cli
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    match command {
        Commands::Play => run_play_command(&game, today, &cli.favorites, cli.practice),
        Commands::Simple => run_simple(&game, today, &cli.favorites, cli.practice)
            .map_err(|e| anyhow::anyhow!(e)),
        Commands::Daily { reveal } => {
            let selection = game.daily(today, &cli.favorites)?;
            print_daily(&game, &selection, reveal);
            Ok(())
        }
        Commands::Guess { name } => run_guess_command(&game, &name, today, &cli),
        Commands::Schedule { days } => {
            let picks = run_schedule(&game, today, days, &cli.favorites)?;
            print_schedule(&game, &picks);
            Ok(())
        }
        Commands::Audit { days } => {
            println!("Auditing {days} days of {} from {today}...", game.name());
            let report = run_audit(&game, today, days, &cli.favorites)?;
            print_audit_report(&report);
            if !report.passed() {
                bail!("schedule audit failed");
            }
            Ok(())
        }
        Commands::Check {
            name,
            attribute,
            bucket,
        } => {
            let result =
                check_bucket(&game, &name, &attribute, &bucket).map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Grid { seed } => run_grid_command(&game, &cli, seed),
        Commands::Series => Ok(()),
    }
}

fn run_grid_command(game: &Game, cli: &Cli, seed: Option<u64>) -> Result<()> {
    let series = Series::from_name(&cli.series)?;
    let (Some(rules), Some(layout)) = (series.grid_rules(), series.grid_layout()) else {
        bail!("{} has no grid mode", series.name());
    };

    run_grid(game, &rules, &layout, seed).map_err(|e| anyhow::anyhow!(e))
}

fn run_guess_command(game: &Game, name: &str, today: NaiveDate, cli: &Cli) -> Result<()> {
    let target = if cli.practice {
        game.practice_target()?
    } else {
        game.daily(today, &cli.favorites)?.record
    };

    let report = guess_once(game, name, &target)?;
    print_guess_report(game, &report);
    Ok(())
}

fn run_play_command(
    game: &Game,
    today: NaiveDate,
    favorites: &[String],
    practice: bool,
) -> Result<()> {
    use fandle::interactive::{App, run_tui};

    let app = if practice {
        App::new(game, game.practice_target()?, "practice")
    } else {
        let selection = game.daily(today, favorites)?;
        App::new(
            game,
            selection.record,
            format!("#{}", selection.days_since_epoch + 1),
        )
    };
    run_tui(app)
}
