//! Wordle Hints - CLI
//!
//! Interactive assistant that narrows a dictionary from Wordle feedback,
//! with a line-oriented mode, a TUI, and a one-shot filter.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use wordle_hints::{
    commands::{run_filter, run_simple},
    output::{print_candidates, print_dictionary_info},
    wordlists::{Dictionary, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_hints",
    about = "Narrow down Wordle candidates from green/yellow/black hints",
    version,
    author
)]
struct Cli {
    /// Dictionary file, one word per line (only 5-letter words are used)
    dictionary: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-oriented session on stdin/stdout (default)
    Simple,

    /// Interactive TUI mode
    Play,

    /// Apply hints given as WORD:COLORS and print the remaining words
    Filter {
        /// Hints in order, e.g. crane:bbggb
        hints: Vec<String>,
    },

    /// Print dictionary statistics
    Info,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let dictionary = load_from_file(&cli.dictionary).with_context(|| {
        format!(
            "could not read dictionary file {}",
            cli.dictionary.display()
        )
    })?;

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => run_simple_command(&dictionary),
        Commands::Play => run_play_command(&dictionary),
        Commands::Filter { hints } => run_filter_command(&dictionary, &hints),
        Commands::Info => {
            print_dictionary_info(&mut io::stdout().lock(), &dictionary)?;
            Ok(())
        }
    }
}

fn run_simple_command(dictionary: &Dictionary) -> Result<()> {
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    run_simple(dictionary, stdin, &mut stdout, &mut stderr)?;
    Ok(())
}

fn run_play_command(dictionary: &Dictionary) -> Result<()> {
    use wordle_hints::interactive::{App, run_tui};

    let app = App::new(dictionary);
    run_tui(app)
}

fn run_filter_command(dictionary: &Dictionary, hints: &[String]) -> Result<()> {
    let solver = run_filter(dictionary, hints)?;

    let mut stdout = io::stdout().lock();
    print_candidates(&mut stdout, solver.candidates())?;
    stdout.flush()?;
    Ok(())
}
