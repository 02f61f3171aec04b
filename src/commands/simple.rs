//! Simple interactive CLI mode
//!
//! Line-oriented session: one command per line, results printed as text.

use super::command::Command;
use crate::output::{print_candidates, print_guess_result, print_help, print_session_info};
use crate::solver::Solver;
use crate::wordlists::Dictionary;
use colored::Colorize;
use log::debug;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "> ";

/// Run the line-oriented session until `quit` or end of input
///
/// Malformed commands are reported on `err` and skipped; they never change
/// the session.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out`/`err` fails.
///
/// # Examples
/// ```
/// use wordle_hints::commands::run_simple;
/// use wordle_hints::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_words(["chair", "giant", "crane"]);
/// let input = "hint crane bbggb\nlist\n";
/// let (mut out, mut err) = (Vec::new(), Vec::new());
///
/// run_simple(&dictionary, input.as_bytes(), &mut out, &mut err).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("1 options:\n  giant\n"));
/// ```
pub fn run_simple<R, W, E>(
    dictionary: &Dictionary,
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut solver = Solver::new(dictionary);

    print_help(out)?;
    writeln!(out, "\nEnter a command:")?;

    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(err, "{}", e.to_string().red())?;
                continue;
            }
        };
        debug!(target: "session", "command: {command:?}");

        match command {
            Command::Hint(guess) => {
                if !dictionary.contains(guess.word().text()) {
                    writeln!(
                        err,
                        "{}",
                        format!("note: '{}' is not in the dictionary", guess.word()).yellow()
                    )?;
                }
                let removed = solver.apply_guess(guess.clone());
                print_guess_result(out, &guess, removed, solver.candidates().len())?;
            }
            Command::List => print_candidates(out, solver.candidates())?,
            Command::Info => print_session_info(out, &solver)?,
            Command::New => {
                solver = Solver::new(dictionary);
                writeln!(
                    out,
                    "New session: {} candidates",
                    solver.candidates().len()
                )?;
            }
            Command::Help => print_help(out)?,
            Command::Quit => break,
        }
    }

    Ok(())
}
