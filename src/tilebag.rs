use crate::board::Board;
use crate::tiles::{Letter, Rack, Tile};
use multiset::HashMultiSet;
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::Deref;
use std::ops::Sub;

/// Number of tiles of each letter `A` .. `Z` in the standard bag.
const DISTRIBUTION: [usize; 26] = [
    9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, 6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1,
];

/// Number of blanks in the standard bag.
const BLANKS: usize = 2;

/// The tiles that have not been played yet.
#[derive(Debug, Clone)]
pub struct TileBag(HashMultiSet<Tile>);

impl Deref for TileBag {
    type Target = HashMultiSet<Tile>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Sub for TileBag {
    type Output = Self;
    fn sub(self, other: Self) -> Self::Output {
        Self(self.0 - other.0)
    }
}

impl Default for TileBag {
    fn default() -> Self {
        TileBag::new()
    }
}

impl TileBag {
    /// An empty bag
    pub fn new() -> Self {
        Self(HashMultiSet::new())
    }

    /// The standard bag of 100 tiles, 2 of them blanks.
    pub fn standard() -> Self {
        let mut bag = HashMultiSet::new();
        for (letter, &count) in Letter::all().zip(DISTRIBUTION.iter()) {
            bag.insert_times(Tile::Letter(letter), count);
        }
        bag.insert_times(Tile::Blank, BLANKS);
        Self(bag)
    }

    /// Take the tiles on `board` out of the bag. Letters that are no longer in
    /// the bag are ignored.
    pub fn remove_board_tiles(&mut self, board: &Board) {
        for (_, _, letter) in board.tiles() {
            self.0.remove(&Tile::Letter(letter));
        }
    }

    /// Draw up to `n` random tiles. The result only depends on the state of
    /// the bag and of `rng`.
    pub fn draw<R: Rng>(&mut self, rng: &mut R, n: usize) -> Rack {
        let mut tiles: Vec<Tile> = self.0.iter().copied().collect();
        tiles.sort();
        let rack: Rack = tiles.choose_multiple(rng, n).copied().collect();
        for tile in rack.tiles() {
            self.0.remove(tile);
        }
        rack
    }
}

impl<T> From<T> for TileBag
where
    T: AsRef<[Tile]>,
{
    fn from(tiles: T) -> Self {
        let mut bag = HashMultiSet::new();
        for &tile in tiles.as_ref() {
            bag.insert(tile);
        }
        Self(bag)
    }
}
