//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod color;
mod guess;
mod positions;
mod word;

pub use color::Color;
pub use guess::{Guess, GuessError};
pub use positions::Positions;
pub use word::{Word, WordError};

/// Number of letters in every puzzle word
pub const WORD_SIZE: usize = 5;

/// Number of letters in the alphabet (`a..=z`)
pub const ALPHABET_SIZE: usize = 26;

/// Index of an ASCII letter within the alphabet, ignoring case
#[inline]
#[must_use]
pub fn letter_index(letter: char) -> Option<usize> {
    let letter = letter.to_ascii_lowercase();
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter as u8 - b'a'))
}

/// Inverse of [`letter_index`]
///
/// # Panics
/// Panics in debug mode if `index >= ALPHABET_SIZE`
#[inline]
#[must_use]
pub const fn letter_at(index: usize) -> char {
    debug_assert!(index < ALPHABET_SIZE);
    (b'a' + index as u8) as char
}
