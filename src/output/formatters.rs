//! Formatting utilities for terminal output

use crate::core::{Color, Guess, Positions, WORD_SIZE, letter_at};
use crate::solver::RuleStore;
use colored::Colorize;

/// Format a guess as colored letter tiles
#[must_use]
pub fn guess_tiles(guess: &Guess) -> String {
    guess
        .hints()
        .map(|(_, letter, color)| {
            let tile = format!(" {} ", letter.to_ascii_uppercase());
            match color {
                Color::Green => tile.black().on_green().bold().to_string(),
                Color::Yellow => tile.black().on_yellow().bold().to_string(),
                Color::Black => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Known letters by position, `_` where nothing is confirmed
///
/// A slot with more than one green letter (contradictory hints) shows `?`.
#[must_use]
pub fn known_pattern(rules: &RuleStore) -> String {
    let mut slots = ['_'; WORD_SIZE];
    for (i, rule) in rules.rules().iter().enumerate() {
        for p in rule.must_be_at.iter() {
            slots[p] = if slots[p] == '_' {
                letter_at(i).to_ascii_uppercase()
            } else {
                '?'
            };
        }
    }
    slots.iter().collect()
}

/// Letters known to be in the word, with the slots they are known not to use
///
/// e.g. `["R (not 1)", "S (not 2,4)"]`
#[must_use]
pub fn present_letters(rules: &RuleStore) -> Vec<String> {
    rules
        .constrained()
        .filter(|(_, rule)| !rule.is_excluded() && !rule.must_not_be_at.is_empty())
        .map(|(letter, rule)| {
            format!(
                "{} (not {})",
                letter.to_ascii_uppercase(),
                slots(rule.must_not_be_at)
            )
        })
        .collect()
}

/// Letters ruled out of the word entirely, e.g. `C E R`
#[must_use]
pub fn absent_letters(rules: &RuleStore) -> String {
    rules
        .constrained()
        .filter(|(_, rule)| rule.is_excluded())
        .map(|(letter, _)| letter.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn slots(positions: Positions) -> String {
    positions
        .iter()
        .map(|p| (p + 1).to_string())
        .collect::<Vec<_>>()
        .join(",")
}
