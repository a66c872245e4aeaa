use super::{Letter, Tile, ALPHABET_LEN};
use crate::error::Error;
use crate::labelset::LetterSet;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;
use tinyvec::TinyVec;

/// The ordered multiset of tiles available to the player making the move.
///
/// ## Examples
/// ```
/// use crossplay_solver::{Error, Rack};
/// let rack: Rack = "hel?o".parse()?;
/// assert_eq!(rack.len(), 5);
/// assert_eq!(rack.blanks(), 1);
/// assert_eq!(rack.to_string(), "HEL?O");
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack(TinyVec<[Tile; 8]>);

impl Rack {
    /// An empty rack
    pub fn new() -> Rack {
        Rack(TinyVec::new())
    }

    /// Number of tiles on the rack
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Add a tile at the end of the rack.
    pub fn push(&mut self, tile: Tile) {
        self.0.push(tile);
    }

    /// The tiles in rack order.
    pub fn tiles(&self) -> &[Tile] {
        &self.0
    }

    /// Number of blanks on the rack
    pub fn blanks(&self) -> usize {
        self.0.iter().filter(|tile| tile.is_blank()).count()
    }

    /// Number of copies of `letter` on the rack, blanks not included.
    pub fn count(&self, letter: Letter) -> usize {
        self.0.iter().filter(|&&tile| tile == Tile::Letter(letter)).count()
    }

    pub(crate) fn tally(&self) -> RackTally {
        let mut tally = RackTally::default();
        for &tile in self.0.iter() {
            match tile {
                Tile::Letter(letter) => tally.counts[letter.index()] += 1,
                Tile::Blank => tally.blanks += 1,
            }
        }
        tally
    }
}

impl FromStr for Rack {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().map(Tile::try_from).collect()
    }
}

impl TryFrom<&str> for Rack {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::iter::FromIterator<Tile> for Rack {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Rack(iter.into_iter().collect())
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for tile in self.0.iter() {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}

/// Per letter tile counts of a rack, consumed and restored while a placement is tried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RackTally {
    counts: [usize; ALPHABET_LEN],
    blanks: usize,
}

impl RackTally {
    /// Remove one `letter` tile, returns false if there is none left.
    pub fn take(&mut self, letter: Letter) -> bool {
        let count = &mut self.counts[letter.index()];
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    /// Remove one blank, returns false if there is none left.
    pub fn take_blank(&mut self) -> bool {
        if self.blanks == 0 {
            return false;
        }
        self.blanks -= 1;
        true
    }

    pub fn put_back(&mut self, tile: Tile) {
        match tile {
            Tile::Letter(letter) => self.counts[letter.index()] += 1,
            Tile::Blank => self.blanks += 1,
        }
    }

    pub fn has_blank(&self) -> bool {
        self.blanks > 0
    }

    /// Total number of tiles left, blanks included.
    pub fn len(&self) -> usize {
        self.counts.iter().sum::<usize>() + self.blanks
    }

    /// The distinct letters left, blanks not included.
    pub fn letters(&self) -> LetterSet {
        Letter::all()
            .filter(|letter| self.counts[letter.index()] > 0)
            .collect()
    }
}
