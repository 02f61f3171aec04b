//! Accumulated per-letter constraints
//!
//! Every hint narrows where one letter may or may not sit. The store keeps a
//! pair of position-sets per letter and only ever grows them: nothing here
//! detects contradictory hints, a later hint is simply unioned in.

use crate::core::{ALPHABET_SIZE, Color, Positions, WORD_SIZE, letter_at, letter_index};
use log::trace;
use std::fmt;

/// Constraints known about a single letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterRule {
    /// Positions confirmed to hold this letter (green hints)
    pub must_be_at: Positions,
    /// Positions confirmed not to hold this letter; `Positions::ALL` once the
    /// letter is known to be absent from the word (black hint)
    pub must_not_be_at: Positions,
}

impl LetterRule {
    /// True when the letter has been ruled out of the word entirely
    #[inline]
    #[must_use]
    pub const fn is_excluded(&self) -> bool {
        self.must_not_be_at.is_all()
    }

    /// True when the letter is known to occur somewhere in the word
    ///
    /// Either it has a green position, or yellow hints have excluded some but
    /// not all positions.
    #[inline]
    #[must_use]
    pub const fn is_required(&self) -> bool {
        !self.must_be_at.is_empty()
            || (!self.must_not_be_at.is_empty() && !self.must_not_be_at.is_all())
    }

    #[inline]
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.must_be_at.is_empty() && self.must_not_be_at.is_empty()
    }
}

/// Error for hints that cannot be recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintError {
    PositionOutOfRange(usize),
    InvalidLetter(char),
}

impl fmt::Display for HintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionOutOfRange(p) => {
                write!(f, "hint position {p} is out of range (0..{WORD_SIZE})")
            }
            Self::InvalidLetter(c) => write!(f, "hint letter {c:?} is not a letter a-z"),
        }
    }
}

impl std::error::Error for HintError {}

/// One `LetterRule` for every letter of the alphabet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleStore {
    rules: [LetterRule; ALPHABET_SIZE],
}

impl RuleStore {
    /// A store with no constraints
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record feedback for one letter of a guess
    ///
    /// - `Green`: `letter` is at `position`
    /// - `Yellow`: `letter` is in the word, but not at `position`
    /// - `Black`: `letter` is nowhere in the word
    ///
    /// # Errors
    /// Returns `HintError` if `position` is not below `WORD_SIZE` or `letter`
    /// is not an ASCII letter. The store is left unchanged in that case.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::{Color, Positions};
    /// use wordle_hints::solver::RuleStore;
    ///
    /// let mut rules = RuleStore::new();
    /// rules.add_hint(2, 'a', Color::Green).unwrap();
    /// rules.add_hint(0, 'c', Color::Black).unwrap();
    ///
    /// assert_eq!(rules.rule('a').unwrap().must_be_at, Positions::single(2));
    /// assert!(rules.rule('c').unwrap().is_excluded());
    /// assert!(rules.add_hint(5, 'a', Color::Green).is_err());
    /// ```
    pub fn add_hint(&mut self, position: usize, letter: char, color: Color) -> Result<(), HintError> {
        if position >= WORD_SIZE {
            return Err(HintError::PositionOutOfRange(position));
        }
        let index = letter_index(letter).ok_or(HintError::InvalidLetter(letter))?;
        let rule = &mut self.rules[index];

        match color {
            Color::Green => rule.must_be_at.insert(position),
            Color::Yellow => rule.must_not_be_at.insert(position),
            Color::Black => rule.must_not_be_at = Positions::ALL,
        }

        trace!(
            target: "rules",
            "{color} '{}' at {}: must_be_at={} must_not_be_at={}",
            letter_at(index),
            position + 1,
            rule.must_be_at,
            rule.must_not_be_at
        );
        Ok(())
    }

    /// Rule for a letter, or `None` if `letter` is not an ASCII letter
    #[must_use]
    pub fn rule(&self, letter: char) -> Option<&LetterRule> {
        letter_index(letter).map(|i| &self.rules[i])
    }

    /// Rules for every letter, indexed by `letter - 'a'`
    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &[LetterRule; ALPHABET_SIZE] {
        &self.rules
    }

    /// Letters that carry at least one constraint, in alphabetical order
    pub fn constrained(&self) -> impl Iterator<Item = (char, &LetterRule)> {
        self.rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| !rule.is_unconstrained())
            .map(|(i, rule)| (letter_at(i), rule))
    }

    /// True when no hint has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.iter().all(LetterRule::is_unconstrained)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let rules = RuleStore::new();
        assert!(rules.is_empty());
        assert_eq!(rules.constrained().count(), 0);
    }

    #[test]
    fn green_marks_single_position() {
        let mut rules = RuleStore::new();
        rules.add_hint(3, 'n', Color::Green).unwrap();

        let rule = rules.rule('n').unwrap();
        assert_eq!(rule.must_be_at, Positions::single(3));
        assert!(rule.must_not_be_at.is_empty());
        assert!(rule.is_required());
    }

    #[test]
    fn yellow_excludes_single_position() {
        let mut rules = RuleStore::new();
        rules.add_hint(1, 'r', Color::Yellow).unwrap();

        let rule = rules.rule('r').unwrap();
        assert!(rule.must_be_at.is_empty());
        assert_eq!(rule.must_not_be_at, Positions::single(1));
        assert!(rule.is_required());
        assert!(!rule.is_excluded());
    }

    #[test]
    fn black_excludes_every_position() {
        let mut rules = RuleStore::new();
        rules.add_hint(0, 'c', Color::Black).unwrap();

        let rule = rules.rule('c').unwrap();
        assert!(rule.is_excluded());
        assert!(!rule.is_required());
    }

    #[test]
    fn hints_accumulate_by_union() {
        let mut rules = RuleStore::new();
        rules.add_hint(0, 's', Color::Yellow).unwrap();
        rules.add_hint(3, 's', Color::Yellow).unwrap();
        rules.add_hint(4, 's', Color::Green).unwrap();
        rules.add_hint(1, 's', Color::Green).unwrap();

        let rule = rules.rule('s').unwrap();
        assert_eq!(rule.must_not_be_at, [0, 3].into_iter().collect::<Positions>());
        assert_eq!(rule.must_be_at, [1, 4].into_iter().collect::<Positions>());
    }

    #[test]
    fn green_is_never_unmarked() {
        let mut rules = RuleStore::new();
        rules.add_hint(2, 'a', Color::Green).unwrap();
        rules.add_hint(2, 'a', Color::Yellow).unwrap();
        rules.add_hint(0, 'a', Color::Black).unwrap();

        let rule = rules.rule('a').unwrap();
        assert_eq!(rule.must_be_at, Positions::single(2));
        assert!(rule.is_excluded());
    }

    #[test]
    fn letters_are_case_insensitive() {
        let mut rules = RuleStore::new();
        rules.add_hint(0, 'Q', Color::Green).unwrap();
        assert_eq!(rules.rule('q').unwrap().must_be_at, Positions::single(0));
    }

    #[test]
    fn invalid_input_is_rejected_without_change() {
        let mut rules = RuleStore::new();
        assert_eq!(
            rules.add_hint(WORD_SIZE, 'a', Color::Green),
            Err(HintError::PositionOutOfRange(WORD_SIZE))
        );
        assert_eq!(
            rules.add_hint(0, '7', Color::Green),
            Err(HintError::InvalidLetter('7'))
        );
        assert!(rules.is_empty());
        assert_eq!(rules.rule('7'), None);
    }

    #[test]
    fn constrained_lists_letters_alphabetically() {
        let mut rules = RuleStore::new();
        rules.add_hint(4, 'e', Color::Black).unwrap();
        rules.add_hint(0, 'c', Color::Yellow).unwrap();

        let letters: Vec<char> = rules.constrained().map(|(c, _)| c).collect();
        assert_eq!(letters, vec!['c', 'e']);
    }
}
