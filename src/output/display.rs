//! Display functions for command results

use super::formatters::{absent_letters, guess_tiles, known_pattern, present_letters};
use crate::commands::HELP;
use crate::core::{Guess, Word};
use crate::solver::Solver;
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::io::{self, Write};

/// Print the banner and command summary
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "Wordle Hints".bright_cyan().bold())?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    for (usage, description) in HELP {
        writeln!(out, "  {usage:<22} {description}")?;
    }
    Ok(())
}

/// Print the count and contents of the candidate list
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_candidates(out: &mut impl Write, candidates: &[&Word]) -> io::Result<()> {
    writeln!(out, "{} options:", candidates.len())?;
    for word in candidates {
        writeln!(out, "  {word}")?;
    }
    Ok(())
}

/// Print the outcome of applying one guess
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_guess_result(
    out: &mut impl Write,
    guess: &Guess,
    removed: usize,
    remaining: usize,
) -> io::Result<()> {
    let summary = format!("{remaining} candidates remaining ({removed} removed)");
    let summary = match remaining {
        0 => "No candidates remain - check the hints, or 'new' to start over"
            .red()
            .to_string(),
        1 => summary.green().bold().to_string(),
        _ => summary,
    };
    writeln!(out, "{}  {summary}", guess_tiles(guess))
}

/// Print dictionary statistics
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_dictionary_info(out: &mut impl Write, dictionary: &Dictionary) -> io::Result<()> {
    writeln!(out, "Dictionary size: {}", dictionary.len())
}

/// Print dictionary statistics, session progress and the known rules
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_session_info(out: &mut impl Write, solver: &Solver) -> io::Result<()> {
    print_dictionary_info(out, solver.dictionary())?;
    writeln!(out, "Candidates:      {}", solver.candidates().len())?;
    writeln!(out, "Guesses:         {}", solver.history().len())?;

    for (i, guess) in solver.history().iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, guess_tiles(guess))?;
    }

    if solver.rules().is_empty() {
        return Ok(());
    }

    writeln!(out, "Known:           {}", known_pattern(solver.rules()))?;
    let present = present_letters(solver.rules());
    if !present.is_empty() {
        writeln!(out, "Present:         {}", present.join(", "))?;
    }
    let absent = absent_letters(solver.rules());
    if !absent.is_empty() {
        writeln!(out, "Absent:          {absent}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn candidates_listing() {
        let dictionary = Dictionary::from_words(["crane", "slate"]);
        let words: Vec<&Word> = dictionary.words().iter().collect();

        let text = render(|out| print_candidates(out, &words));
        assert_eq!(text, "2 options:\n  crane\n  slate\n");
    }

    #[test]
    fn session_info_lists_rules() {
        let dictionary = Dictionary::from_words(["chair", "giant", "crane"]);
        let mut solver = Solver::new(&dictionary);
        solver.apply_guess(Guess::parse("crane", "bbggb").unwrap());

        let text = render(|out| print_session_info(out, &solver));
        assert!(text.contains("Dictionary size: 3"));
        assert!(text.contains("Candidates:      1"));
        assert!(text.contains("Known:           __AN_"));
        assert!(text.contains("Absent:          C E R"));
        assert!(!text.contains("Present:"));
    }

    #[test]
    fn empty_result_warns() {
        let guess = Guess::parse("crane", "ggggg").unwrap();
        let text = render(|out| print_guess_result(out, &guess, 4, 0));
        assert!(text.contains("No candidates remain"));
    }

    #[test]
    fn help_lists_every_command() {
        let text = render(|out| print_help(out));
        for keyword in ["hint", "list", "info", "new", "quit"] {
            assert!(text.contains(keyword), "missing {keyword}");
        }
    }
}
