//! Main Wordle solver interface

use super::candidates::CandidateSet;
use super::rules::{HintError, RuleStore};
use crate::core::{Color, Guess, WORD_SIZE, Word};
use crate::wordlists::Dictionary;
use log::debug;

/// One solving session
///
/// Owns the accumulated rules and the surviving candidates. Both start from
/// scratch for every session; to start over, build a new `Solver` from the
/// same dictionary.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    rules: RuleStore,
    candidates: CandidateSet<'a>,
    history: Vec<Guess>,
}

impl<'a> Solver<'a> {
    /// Create a new session with every dictionary word as a candidate
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            rules: RuleStore::new(),
            candidates: CandidateSet::new(dictionary),
            history: Vec::new(),
        }
    }

    /// Record feedback for a single letter
    ///
    /// The candidates are not touched until [`Solver::shrink`] is called.
    ///
    /// # Errors
    /// Returns `HintError` for an out-of-range position or a non-letter.
    pub fn add_hint(&mut self, position: usize, letter: char, color: Color) -> Result<(), HintError> {
        self.rules.add_hint(position, letter, color)
    }

    /// Discard every candidate inconsistent with the current rules
    ///
    /// Returns the number of words removed. Calling it again without new
    /// hints removes nothing.
    pub fn shrink(&mut self) -> usize {
        let before = self.candidates.len();
        let removed = self.candidates.shrink(&self.rules);
        debug!(
            target: "solver",
            "shrink: {before} -> {} candidates ({removed} removed)",
            self.candidates.len()
        );
        removed
    }

    /// Register every letter of a guess, then shrink
    ///
    /// A letter marked black in one slot but green or yellow in another slot
    /// of the same guess only excludes the black slot: the answer holds fewer
    /// copies of the letter than were guessed, not zero.
    ///
    /// Returns the number of candidates removed.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::Guess;
    /// use wordle_hints::solver::Solver;
    /// use wordle_hints::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["chair", "chart", "giant", "crane"]);
    /// let mut solver = Solver::new(&dictionary);
    ///
    /// let removed = solver.apply_guess(Guess::parse("crane", "bbggb").unwrap());
    /// assert_eq!(removed, 3);
    /// assert_eq!(solver.candidates()[0].text(), "giant");
    /// ```
    pub fn apply_guess(&mut self, guess: Guess) -> usize {
        let word = guess.word();
        for (position, letter, color) in guess.hints() {
            let color = if color == Color::Black && confirmed_elsewhere(&guess, letter) {
                Color::Yellow
            } else {
                color
            };
            // Positions and letters of a validated guess are always in range
            let result = self.rules.add_hint(position, letter, color);
            debug_assert!(result.is_ok(), "hint from {word} rejected: {result:?}");
        }
        debug!(target: "solver", "applied guess {guess}");

        self.history.push(guess);
        self.shrink()
    }

    /// Current surviving candidates, in dictionary order
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        self.candidates.as_slice()
    }

    #[must_use]
    pub const fn rules(&self) -> &RuleStore {
        &self.rules
    }

    /// Guesses applied so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub fn dictionary_size(&self) -> usize {
        self.dictionary.len()
    }

    /// True once a guess came back all green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history.last().is_some_and(Guess::is_solved)
    }
}

/// Whether `letter` is green or yellow in some slot of `guess`
fn confirmed_elsewhere(guess: &Guess, letter: char) -> bool {
    (0..WORD_SIZE).any(|i| guess.word().char_at(i) == letter && guess.colors()[i] != Color::Black)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Positions;
    use crate::solver::is_consistent;

    fn guess(word: &str, colors: &str) -> Guess {
        Guess::parse(word, colors).unwrap()
    }

    fn texts(solver: &Solver) -> Vec<String> {
        solver
            .candidates()
            .iter()
            .map(|w| w.text().to_string())
            .collect()
    }

    #[test]
    fn new_session_has_every_word() {
        let dictionary = Dictionary::from_words(["crane", "slate", "irate"]);
        let solver = Solver::new(&dictionary);

        assert_eq!(solver.candidates().len(), 3);
        assert_eq!(solver.dictionary_size(), 3);
        assert!(solver.rules().is_empty());
        assert!(solver.history().is_empty());
    }

    #[test]
    fn crane_example_keeps_exact_membership() {
        let dictionary =
            Dictionary::from_words(["chair", "chart", "board", "crane", "grape", "giant", "scant"]);
        let mut solver = Solver::new(&dictionary);

        solver.apply_guess(guess("crane", "bbggb"));

        assert_eq!(texts(&solver), vec!["giant"]);
    }

    #[test]
    fn crane_example_from_the_original_five_words_is_empty() {
        let dictionary = Dictionary::from_words(["chair", "chart", "board", "crane", "grape"]);
        let mut solver = Solver::new(&dictionary);

        assert_eq!(solver.apply_guess(guess("crane", "bbggb")), 5);
        assert!(solver.candidates().is_empty());
    }

    #[test]
    fn repeated_letter_black_is_limited_to_its_slot() {
        let dictionary = Dictionary::from_words(["sassy", "mossy", "nutty", "focus", "bless"]);
        let mut solver = Solver::new(&dictionary);

        solver.apply_guess(guess("grass", "bbbyg"));

        // s at position 4, not at 3, and no g, r or a
        assert_eq!(texts(&solver), vec!["focus"]);
    }

    #[test]
    fn black_duplicate_keeps_single_copy_answers() {
        // Guessing "speed" against "abide": the first e is yellow, the second black
        let dictionary = Dictionary::from_words(["abide", "eerie", "cried", "tense"]);
        let mut solver = Solver::new(&dictionary);

        solver.apply_guess(guess("speed", "bbyby"));

        assert!(texts(&solver).contains(&"abide".to_string()));
        assert!(!texts(&solver).contains(&"cried".to_string())); // e at position 3
        assert!(!texts(&solver).contains(&"tense".to_string())); // s is black
    }

    #[test]
    fn add_hint_waits_for_shrink() {
        let dictionary = Dictionary::from_words(["crane", "slate"]);
        let mut solver = Solver::new(&dictionary);

        solver.add_hint(0, 'c', Color::Green).unwrap();
        assert_eq!(solver.candidates().len(), 2);

        assert_eq!(solver.shrink(), 1);
        assert_eq!(texts(&solver), vec!["crane"]);
    }

    #[test]
    fn add_hint_rejects_bad_input() {
        let dictionary = Dictionary::from_words(["crane"]);
        let mut solver = Solver::new(&dictionary);

        assert!(solver.add_hint(7, 'c', Color::Green).is_err());
        assert!(solver.add_hint(0, '#', Color::Green).is_err());
        assert!(solver.rules().is_empty());
    }

    #[test]
    fn shrink_is_idempotent() {
        let dictionary = Dictionary::from_words(["crane", "slate", "irate", "crate", "grate"]);
        let mut solver = Solver::new(&dictionary);

        solver.apply_guess(guess("crane", "bgggb"));
        let once = texts(&solver);
        assert_eq!(solver.shrink(), 0);
        assert_eq!(texts(&solver), once);
    }

    #[test]
    fn candidate_count_never_increases() {
        let dictionary = Dictionary::from_words([
            "crane", "slate", "irate", "crate", "grate", "trace", "react", "caret",
        ]);
        let mut solver = Solver::new(&dictionary);
        let mut last = solver.candidates().len();

        for (w, c) in [("slate", "bbgyg"), ("crane", "bgggb"), ("react", "ygyyb")] {
            solver.apply_guess(guess(w, c));
            assert!(solver.candidates().len() <= last);
            last = solver.candidates().len();
        }
    }

    #[test]
    fn survivors_are_consistent_and_consistent_words_survive() {
        let dictionary = Dictionary::from_words([
            "crane", "slate", "irate", "crate", "grate", "trace", "plate", "abide",
        ]);
        let mut solver = Solver::new(&dictionary);
        solver.apply_guess(guess("crane", "bbgbg"));
        solver.apply_guess(guess("plate", "bgggg"));

        for word in dictionary.words() {
            let kept = solver.candidates().iter().any(|w| w.text() == word.text());
            assert_eq!(kept, is_consistent(word, solver.rules()), "{word}");
        }
        assert_eq!(texts(&solver), vec!["slate"]);
    }

    #[test]
    fn history_tracks_solved_state() {
        let dictionary = Dictionary::from_words(["crane", "slate"]);
        let mut solver = Solver::new(&dictionary);

        solver.apply_guess(guess("slate", "bbgbg"));
        assert!(!solver.is_solved());

        solver.apply_guess(guess("crane", "ggggg"));
        assert!(solver.is_solved());
        assert_eq!(solver.history().len(), 2);
        assert_eq!(texts(&solver), vec!["crane"]);
    }

    #[test]
    fn apply_guess_records_every_slot() {
        let dictionary = Dictionary::from_words(["crane"]);
        let mut solver = Solver::new(&dictionary);

        solver.apply_guess(guess("grass", "bbbyg"));

        let rules = solver.rules();
        assert!(rules.rule('g').unwrap().is_excluded());
        assert!(rules.rule('r').unwrap().is_excluded());
        assert!(rules.rule('a').unwrap().is_excluded());
        let s = rules.rule('s').unwrap();
        assert_eq!(s.must_be_at, Positions::single(4));
        assert_eq!(s.must_not_be_at, Positions::single(3));
    }
}
