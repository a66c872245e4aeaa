use super::ALPHABET_LEN;
use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// One of the letters `A` .. `Z`.
///
/// Internally a letter is its index in the alphabet, so it can be used to index
/// per-letter tables (letter values, rack tallies) and as a bit in a
/// [`LetterSet`](crate::LetterSet).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from its index 0..26.
    /// ## Examples
    /// ```
    /// use crossplay_solver::Letter;
    /// assert_eq!(Letter::from_index(2).map(Letter::to_char), Some('C'));
    /// assert_eq!(Letter::from_index(26), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Letter> {
        if index < ALPHABET_LEN {
            Some(Letter(index as u8))
        } else {
            None
        }
    }

    /// Parse an ascii letter, case insensitive.
    pub fn from_char(ch: char) -> Option<Letter> {
        if ch.is_ascii_alphabetic() {
            Some(Letter(ch.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    /// The upper case character for this letter.
    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Index in the alphabet, 0 for `A`.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over the whole alphabet in order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN as u8).map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Letter::from_char(ch).ok_or(Error::InvalidTile(ch))
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.to_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Parse a word into letters.
/// ## Errors
/// If the word contains anything but ascii letters.
pub(crate) fn letters_of(word: &str) -> Result<Vec<Letter>, Error> {
    word.chars().map(Letter::try_from).collect()
}
