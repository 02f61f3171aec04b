//! Wordle word representation
//!
//! A Word stores a 5-letter word along with the position-set of every letter,
//! computed once so candidate filtering never has to rescan the text.

use super::{ALPHABET_SIZE, Positions, WORD_SIZE, letter_index};
use std::fmt;

/// A 5-letter Wordle word with letter position tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; WORD_SIZE],
    letter_positions: [Positions; ALPHABET_SIZE],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "word must be exactly {WORD_SIZE} letters, got {len}")
            }
            Self::NonAscii => write!(f, "word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lower-cased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_SIZE {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; WORD_SIZE];
        chars.copy_from_slice(text.as_bytes());

        let mut letter_positions = [Positions::EMPTY; ALPHABET_SIZE];
        for (i, &ch) in chars.iter().enumerate() {
            letter_positions[usize::from(ch - b'a')].insert(i);
        }

        Ok(Self {
            text,
            chars,
            letter_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_SIZE] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position] as char
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        !self.positions_of(letter).is_empty()
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty set for letters that don't appear (or aren't letters).
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: char) -> Positions {
        letter_index(letter).map_or(Positions::EMPTY, |i| self.letter_positions[i])
    }

    /// Position-sets for every letter `a..=z`, indexed by `letter - 'a'`
    #[inline]
    #[must_use]
    pub const fn letter_positions(&self) -> &[Positions; ALPHABET_SIZE] {
        &self.letter_positions
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
