//! The shrinking set of words that could still be the answer

use super::filter::is_consistent;
use super::rules::RuleStore;
use crate::core::Word;
use crate::wordlists::Dictionary;

/// Surviving candidate words, borrowed from a [`Dictionary`]
///
/// Starts as the whole dictionary and only ever shrinks. There is no way to
/// add words back; a fresh set has to be built from the dictionary instead.
#[derive(Debug, Clone)]
pub struct CandidateSet<'a> {
    words: Vec<&'a Word>,
}

impl<'a> CandidateSet<'a> {
    /// Every dictionary word, in dictionary order
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            words: dictionary.words().iter().collect(),
        }
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

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[&'a Word] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Word> + '_ {
        self.words.iter().copied()
    }

    /// Whether `text` is still a candidate
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.iter().any(|w| w.text() == text)
    }

    /// Drop every word inconsistent with `rules`, keeping the order of the rest
    ///
    /// Returns the number of words removed.
    pub(crate) fn shrink(&mut self, rules: &RuleStore) -> usize {
        let before = self.words.len();
        self.words.retain(|w| is_consistent(w, rules));
        before - self.words.len()
    }
}

impl<'a, 'b> IntoIterator for &'b CandidateSet<'a> {
    type Item = &'b &'a Word;
    type IntoIter = std::slice::Iter<'b, &'a Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
