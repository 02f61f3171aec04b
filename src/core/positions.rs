//! Position sets within a word
//!
//! A `Positions` value is a set of letter slots `0..WORD_SIZE`, stored as a
//! bitmask so per-letter rules stay `Copy` and filtering never allocates.

use super::WORD_SIZE;
use std::fmt;

/// Set of positions within a word, bit `i` set means position `i` is a member
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Positions(u8);

const _: () = assert!(WORD_SIZE <= u8::BITS as usize);

impl Positions {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every position of a word
    pub const ALL: Self = Self(((1u16 << WORD_SIZE) - 1) as u8);

    /// Set containing a single position
    ///
    /// # Panics
    /// Panics in debug mode if `position >= WORD_SIZE`
    #[inline]
    #[must_use]
    pub const fn single(position: usize) -> Self {
        debug_assert!(position < WORD_SIZE, "position out of range");
        Self(1 << position)
    }

    #[inline]
    pub fn insert(&mut self, position: usize) {
        *self = self.union(Self::single(position));
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, position: usize) -> bool {
        position < WORD_SIZE && self.0 & (1 << position) != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Positions in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every position of the word is a member
    #[inline]
    #[must_use]
    pub const fn is_all(self) -> bool {
        self.0 == Self::ALL.0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Member positions in ascending order
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..WORD_SIZE).filter(move |&p| self.contains(p))
    }
}

impl FromIterator<usize> for Positions {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut positions = Self::EMPTY;
        for p in iter {
            positions.insert(p);
        }
        positions
    }
}

impl fmt::Display for Positions {
    /// Formats as 1-based slot numbers, e.g. `{1,4}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, p) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", p + 1)?;
        }
        write!(f, "}}")
    }
}
