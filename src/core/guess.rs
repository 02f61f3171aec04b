//! A guessed word together with the feedback colors for each letter

use super::{Color, WORD_SIZE, Word, WordError};
use std::fmt;

const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Feedback for one complete guess
///
/// Both halves are validated up front, so a `Guess` can always be applied
/// in full; there is no way to end up with half of a guess registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    colors: [Color; WORD_SIZE],
}

/// Error type for malformed guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    Word(WordError),
    ColorsLength(usize),
    InvalidColor { position: usize, found: char },
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(e) => write!(f, "invalid hint word: {e}"),
            Self::ColorsLength(len) => {
                write!(f, "hint colors must be exactly {WORD_SIZE} characters, got {len}")
            }
            Self::InvalidColor { position, found } => write!(
                f,
                "hint color must be G, Y, or B (found {found:?} at position {})",
                position + 1
            ),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Word(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for GuessError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}

impl Guess {
    #[must_use]
    pub const fn new(word: Word, colors: [Color; WORD_SIZE]) -> Self {
        Self { word, colors }
    }

    /// Parse a guess from its word and color strings
    ///
    /// # Errors
    /// Returns `GuessError` if the word is not a valid 5-letter word, if the
    /// colors string is not exactly 5 characters, or if any color character
    /// is not one of G, Y, B (see [`Color::from_char`]).
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::{Color, Guess};
    ///
    /// let guess = Guess::parse("crane", "bbggb").unwrap();
    /// assert_eq!(guess.colors()[2], Color::Green);
    ///
    /// assert!(Guess::parse("crane", "bbgxb").is_err());
    /// ```
    pub fn parse(word: &str, colors: &str) -> Result<Self, GuessError> {
        let word = Word::new(word)?;

        // Pasted emoji squares often carry a variation selector
        let colors: Vec<char> = colors.chars().filter(|&c| c != VARIATION_SELECTOR).collect();
        if colors.len() != WORD_SIZE {
            return Err(GuessError::ColorsLength(colors.len()));
        }

        let mut parsed = [Color::Black; WORD_SIZE];
        for (position, (slot, &c)) in parsed.iter_mut().zip(&colors).enumerate() {
            *slot = Color::from_char(c).ok_or(GuessError::InvalidColor { position, found: c })?;
        }

        Ok(Self::new(word, parsed))
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; WORD_SIZE] {
        &self.colors
    }

    /// `(position, letter, color)` for every slot of the guess
    pub fn hints(&self) -> impl Iterator<Item = (usize, char, Color)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(|(i, &color)| (i, self.word.char_at(i), color))
    }

    /// True when every letter was green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.colors.iter().all(|&c| c == Color::Green)
    }

    /// Colors as a compact string such as `BBGGB`
    #[must_use]
    pub fn color_initials(&self) -> String {
        self.colors.iter().map(|c| c.initial()).collect()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.color_initials())
    }
}
