//! Immutable dictionary of candidate words

use crate::core::{WORD_SIZE, Word};
use rustc_hash::FxHashSet;

/// All usable words, in the order they were first seen
///
/// Built once and never modified; sessions borrow their candidates from it.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<[u8; WORD_SIZE]>,
}

impl Dictionary {
    /// Build a dictionary from in-memory strings
    ///
    /// Entries are trimmed and lower-cased; anything that is not a 5-letter
    /// word is skipped, as are repeats of a word already present.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["Crane", "slate", "toolong", "crane"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("crane"));
    /// ```
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    /// Add a raw entry; returns whether it was kept
    pub(crate) fn insert(&mut self, entry: &str) -> bool {
        let Ok(word) = Word::new(entry.trim()) else {
            return false;
        };
        if !self.index.insert(*word.chars()) {
            return false;
        }
        self.words.push(word);
        true
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `text` (any case) is a dictionary word
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|w| self.index.contains(w.chars()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_words_keeps_valid_words_in_order() {
        let dictionary = Dictionary::from_words(["crane", "slate", "irate"]);

        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn from_words_skips_invalid() {
        let dictionary = Dictionary::from_words(["crane", "toolong", "abc", "sl4te", "slate"]);

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("slate"));
        assert!(!dictionary.contains("sl4te"));
    }

    #[test]
    fn from_words_normalizes_and_dedups() {
        let dictionary = Dictionary::from_words(["CRANE", " crane ", "Crane\r", "slate"]);

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.words()[0].text(), "crane");
        assert!(dictionary.contains("CrAnE"));
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::from_words(Vec::<String>::new());
        assert!(dictionary.is_empty());
        assert!(!dictionary.contains("crane"));
    }
}
