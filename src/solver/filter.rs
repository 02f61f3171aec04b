//! Candidate consistency check
//!
//! Decides whether a word could still be the answer given every hint so far.
//! The check is stateless; it is evaluated fresh for each word on every shrink.

use super::rules::RuleStore;
use crate::core::Word;

/// Check whether `word` satisfies every accumulated rule
///
/// For each letter, with `present` the positions the letter occupies in
/// `word`, the word is rejected when:
/// 1. a green position for the letter is not occupied by it,
/// 2. the letter sits at a position known to be wrong for it, or
/// 3. the letter is required somewhere (yellow) but is missing from `word`.
///
/// A black letter excludes every position, so rule 2 rejects any word that
/// contains it, while a word without the letter passes.
///
/// # Examples
/// ```
/// use wordle_hints::core::{Color, Word};
/// use wordle_hints::solver::{RuleStore, is_consistent};
///
/// let mut rules = RuleStore::new();
/// rules.add_hint(2, 'a', Color::Green).unwrap();
/// rules.add_hint(0, 'c', Color::Black).unwrap();
///
/// assert!(is_consistent(&Word::new("giant").unwrap(), &rules));
/// assert!(!is_consistent(&Word::new("chart").unwrap(), &rules));
/// ```
#[must_use]
pub fn is_consistent(word: &Word, rules: &RuleStore) -> bool {
    word.letter_positions()
        .iter()
        .zip(rules.rules())
        .all(|(&present, rule)| {
            // Known position not occupied by this letter
            if !rule.must_be_at.difference(present).is_empty() {
                return false;
            }

            // Letter sits at a known bad position
            if !present.intersection(rule.must_not_be_at).is_empty() {
                return false;
            }

            // Letter required at an unknown position, but missing
            !(present.is_empty()
                && !rule.must_not_be_at.is_empty()
                && !rule.must_not_be_at.is_all())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn rules_from(hints: &[(usize, char, Color)]) -> RuleStore {
        let mut rules = RuleStore::new();
        for &(p, c, color) in hints {
            rules.add_hint(p, c, color).unwrap();
        }
        rules
    }

    #[test]
    fn empty_rules_accept_everything() {
        let rules = RuleStore::new();
        for w in ["crane", "aaaaa", "zzzzz", "mossy"] {
            assert!(is_consistent(&word(w), &rules));
        }
    }

    #[test]
    fn green_requires_letter_at_position() {
        let rules = rules_from(&[(2, 'a', Color::Green)]);
        assert!(is_consistent(&word("crane"), &rules));
        assert!(is_consistent(&word("board"), &rules));
        assert!(!is_consistent(&word("tryst"), &rules));
        assert!(!is_consistent(&word("mossy"), &rules));
    }

    #[test]
    fn yellow_requires_letter_elsewhere() {
        let rules = rules_from(&[(0, 'r', Color::Yellow)]);
        assert!(is_consistent(&word("crane"), &rules));
        assert!(!is_consistent(&word("raise"), &rules)); // r at the wrong spot
        assert!(!is_consistent(&word("mossy"), &rules)); // no r at all
    }

    #[test]
    fn black_rejects_any_occurrence() {
        let rules = rules_from(&[(4, 'e', Color::Black)]);
        assert!(is_consistent(&word("chair"), &rules));
        assert!(!is_consistent(&word("crane"), &rules));
        assert!(!is_consistent(&word("eerie"), &rules));
    }

    #[test]
    fn yellow_on_every_position_no_longer_requires_letter() {
        let rules = rules_from(&[
            (0, 'x', Color::Yellow),
            (1, 'x', Color::Yellow),
            (2, 'x', Color::Yellow),
            (3, 'x', Color::Yellow),
            (4, 'x', Color::Yellow),
        ]);
        assert!(is_consistent(&word("crane"), &rules));
        assert!(!is_consistent(&word("xenon"), &rules));
    }

    #[test]
    fn repeated_letter_green_and_yellow() {
        // s is green at 4 and yellow at 3
        let rules = rules_from(&[(3, 's', Color::Yellow), (4, 's', Color::Green)]);
        assert!(is_consistent(&word("focus"), &rules));
        assert!(is_consistent(&word("sulks"), &rules));
        assert!(!is_consistent(&word("bless"), &rules));
        assert!(!is_consistent(&word("mossy"), &rules));
    }

    #[test]
    fn literal_black_overrides_other_occurrences() {
        // Registered one by one, a black hint is a global exclusion even if the
        // same letter was green elsewhere; nothing containing it survives.
        let rules = rules_from(&[(4, 's', Color::Green), (3, 's', Color::Black)]);
        assert!(!is_consistent(&word("focus"), &rules));
        assert!(!is_consistent(&word("crane"), &rules)); // green s still required
    }
}
