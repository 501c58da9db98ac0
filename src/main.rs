//! Wordle Clone - CLI
//!
//! Word-guessing game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use wordle_clone::{
    commands::{check_dictionaries, run_simple},
    core::EvaluationRule,
    game::{DEFAULT_GUESS_ALLOWANCE, DEFAULT_WORD_LENGTH, Engine, GameConfig},
    output::print_dictionary_report,
    wordlists::{DictionarySource, EmbeddedWords, WordDirectory},
};

#[derive(Parser)]
#[command(
    name = "wordle_clone",
    about = "Guess the hidden word: 4 to 7 letters, 2 to 7 tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word (4-7)
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Guesses per round (2-7)
    #[arg(short, long, global = true, default_value_t = DEFAULT_GUESS_ALLOWANCE)]
    guesses: usize,

    /// Directory with check_words/ and pick_words/ lists (default: embedded lists)
    #[arg(short, long, global = true)]
    words: Option<PathBuf>,

    /// Score repeated letters strictly, consuming each target letter once
    #[arg(long, global = true)]
    strict: bool,

    /// Seed for target selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write log output to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (one guess per line, no TUI)
    Simple,

    /// Check that word lists load for every supported length
    Check,
}

/// Initialise `env_logger`, defaulting to `warn` unless `RUST_LOG` is set
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let rule = if cli.strict {
        EvaluationRule::Strict
    } else {
        EvaluationRule::Membership
    };
    let config = GameConfig::new(cli.length, cli.guesses)
        .context("invalid game configuration")?
        .with_rule(rule);

    match cli.words {
        Some(dir) => dispatch(cli.command, WordDirectory::new(dir), config, cli.seed),
        None => dispatch(cli.command, EmbeddedWords, config, cli.seed),
    }
}

fn dispatch<S: DictionarySource>(
    command: Option<Commands>,
    source: S,
    config: GameConfig,
    seed: Option<u64>,
) -> Result<()> {
    log::info!("using {}", source.describe());

    // Default to Play mode if no command given
    match command.unwrap_or(Commands::Play) {
        Commands::Check => {
            run_check_command(&source);
            Ok(())
        }
        Commands::Simple => run_simple_command(new_engine(source, config, seed)),
        Commands::Play => run_play_command(new_engine(source, config, seed)),
    }
}

fn new_engine<S: DictionarySource>(source: S, config: GameConfig, seed: Option<u64>) -> Engine<S> {
    match seed {
        Some(seed) => Engine::with_seed(source, config, seed),
        None => Engine::new(source, config),
    }
}

fn run_check_command<S: DictionarySource>(source: &S) {
    let reports = check_dictionaries(source);
    print_dictionary_report(&source.describe(), &reports);
}

fn run_simple_command<S: DictionarySource>(mut engine: Engine<S>) -> Result<()> {
    let stdin = io::stdin();
    let stats = run_simple(&mut engine, stdin.lock(), io::stdout())
        .context("line-mode game failed")?;
    log::info!(
        "session over: {} games, {} won",
        stats.total_games,
        stats.games_won
    );
    Ok(())
}

fn run_play_command<S: DictionarySource>(engine: Engine<S>) -> Result<()> {
    use wordle_clone::interactive::{App, run_tui};

    let stats = run_tui(App::new(engine)).context("terminal interface failed")?;
    log::info!(
        "session over: {} games, {} won",
        stats.total_games,
        stats.games_won
    );
    Ok(())
}
