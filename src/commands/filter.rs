//! One-shot filtering from command-line hints

use super::command::CommandError;
use crate::core::Guess;
use crate::solver::Solver;
use crate::wordlists::Dictionary;

/// Parse a `WORD:COLORS` hint argument
///
/// # Errors
/// Returns `CommandError` if the separator is missing or the guess is malformed.
///
/// # Examples
/// ```
/// use wordle_hints::commands::parse_hint_arg;
///
/// let guess = parse_hint_arg("crane:bbggb").unwrap();
/// assert_eq!(guess.word().text(), "crane");
/// assert!(parse_hint_arg("crane").is_err());
/// ```
pub fn parse_hint_arg(arg: &str) -> Result<Guess, CommandError> {
    let (word, colors) = arg.split_once(':').ok_or(CommandError::MissingArgument {
        command: "filter",
        argument: "colors",
    })?;
    Ok(Guess::parse(word, colors)?)
}

/// Apply every hint in order and return the surviving words
///
/// All arguments are validated before any hint is applied.
///
/// # Errors
/// Returns the first `CommandError` among the arguments.
pub fn run_filter<'a, S: AsRef<str>>(
    dictionary: &'a Dictionary,
    hints: &[S],
) -> Result<Solver<'a>, CommandError> {
    let guesses = hints
        .iter()
        .map(|h| parse_hint_arg(h.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut solver = Solver::new(dictionary);
    for guess in guesses {
        solver.apply_guess(guess);
    }
    Ok(solver)
}
