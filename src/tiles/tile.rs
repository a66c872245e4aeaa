use super::Letter;
use crate::error::Error;
use std::convert::TryFrom;
use std::fmt;

/// A tile on a rack: either a regular letter or a blank that can stand in for any letter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tile {
    Letter(Letter),
    Blank,
}

impl Default for Tile {
    fn default() -> Self {
        Tile::Blank
    }
}

impl Tile {
    /// Parse a rack character. Letters are case insensitive, and `?`, `*`, `_` and
    /// space all denote a blank.
    pub fn from_char(ch: char) -> Option<Tile> {
        match ch {
            '?' | '*' | '_' | ' ' => Some(Tile::Blank),
            _ => Letter::from_char(ch).map(Tile::Letter),
        }
    }

    /// Check if tile is a blank
    pub fn is_blank(self) -> bool {
        self == Tile::Blank
    }

    /// The letter on the tile, `None` for a blank.
    pub fn letter(self) -> Option<Letter> {
        match self {
            Tile::Letter(letter) => Some(letter),
            Tile::Blank => None,
        }
    }
}

impl TryFrom<char> for Tile {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Tile::from_char(ch).ok_or(Error::InvalidTile(ch))
    }
}

impl From<Letter> for Tile {
    fn from(letter: Letter) -> Self {
        Tile::Letter(letter)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Tile::Letter(letter) => write!(f, "{}", letter),
            Tile::Blank => write!(f, "?"),
        }
    }
}
