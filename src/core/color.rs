//! Per-letter feedback colors

use std::fmt;

/// Feedback for one letter of a guessed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Correct letter in the correct position
    Green,
    /// Letter is in the word, but not at this position
    Yellow,
    /// Letter does not occur in the word
    Black,
}

impl Color {
    /// Parse a single feedback character
    ///
    /// Accepts `G`/`Y`/`B` in either case and the square emoji
    /// (🟩 green, 🟨 yellow, ⬛ or ⬜ black).
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::Color;
    ///
    /// assert_eq!(Color::from_char('g'), Some(Color::Green));
    /// assert_eq!(Color::from_char('🟨'), Some(Color::Yellow));
    /// assert_eq!(Color::from_char('x'), None);
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            'B' | 'b' | '⬛' | '⬜' => Some(Self::Black),
            _ => None,
        }
    }

    /// Upper-case initial used on the command line
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Black => 'B',
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Black => '⬛',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Black => "black",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_char_is_case_insensitive() {
        assert_eq!(Color::from_char('G'), Some(Color::Green));
        assert_eq!(Color::from_char('g'), Some(Color::Green));
        assert_eq!(Color::from_char('Y'), Some(Color::Yellow));
        assert_eq!(Color::from_char('y'), Some(Color::Yellow));
        assert_eq!(Color::from_char('B'), Some(Color::Black));
        assert_eq!(Color::from_char('b'), Some(Color::Black));
    }

    #[test]
    fn from_char_rejects_other_characters() {
        for c in ['-', '_', 'x', ' ', '0', 'r'] {
            assert_eq!(Color::from_char(c), None, "accepted {c:?}");
        }
    }

    #[test]
    fn initial_round_trips() {
        for color in [Color::Green, Color::Yellow, Color::Black] {
            assert_eq!(Color::from_char(color.initial()), Some(color));
            assert_eq!(Color::from_char(color.to_emoji()), Some(color));
        }
    }
}
