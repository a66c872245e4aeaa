use crate::tiles::{Letter, ALPHABET_LEN};
#[cfg(feature = "bitintr")]
use bitintr::{Bzhi, Popcnt};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;

#[cfg(feature = "bitintr")]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.popcnt()
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.count_ones()
}

#[cfg(feature = "bitintr")]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n.bzhi(v)
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n & ((1 << v) - 1)
}

const ALL_BITS: u32 = (1 << ALPHABET_LEN) - 1;

/// A bitset of letters.
///
/// Used for the children of a [`WordIndex`](crate::WordIndex) node and for the
/// per-cell cross-sets.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub fn new() -> LetterSet {
        LetterSet(0)
    }

    /// The set of all 26 letters
    pub fn full() -> LetterSet {
        LetterSet(ALL_BITS)
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    /// Add `letter`, returns true if it was already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        let bit = 1 << letter.index();
        let r = (self.0 & bit) != 0;
        self.0 |= bit;
        r
    }

    pub fn len(&self) -> usize {
        count_ones(self.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_full(&self) -> bool {
        self.0 == ALL_BITS
    }

    /// Letters present in both sets
    pub fn intersection(self, other: LetterSet) -> LetterSet {
        LetterSet(self.0 & other.0)
    }

    /// Letters in `self` that are not in `other`
    pub fn difference(self, other: LetterSet) -> LetterSet {
        LetterSet(self.0 & !other.0)
    }

    /// Iterate over the letters in alphabetic order.
    pub fn iter(&self) -> IteratorLetterSet {
        IteratorLetterSet::new(self.0)
    }

    /// Return the rank of `letter` in the set if present: the number of
    /// members that sort before it.
    pub fn index_of(&self, letter: Letter) -> Option<usize> {
        if !self.contains(letter) {
            return None;
        }
        Some(self.rank(letter))
    }

    /// Number of members that sort before `letter`, whether or not `letter` is present.
    pub fn rank(&self, letter: Letter) -> usize {
        count_ones(zero_highbits(self.0, letter.index() as u32)) as usize
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.iter().map(Letter::to_char).collect();
        write!(f, "{{{}}}", s)
    }
}

pub struct IteratorLetterSet {
    value: u32,
}

impl IteratorLetterSet {
    pub fn new(value: u32) -> IteratorLetterSet {
        IteratorLetterSet { value }
    }
}

impl Iterator for IteratorLetterSet {
    type Item = Letter;
    fn next(&mut self) -> Option<Letter> {
        if self.value == 0 {
            return None;
        }
        let i = self.value.trailing_zeros();
        // clear lowest set bit
        self.value &= self.value - 1;
        Letter::from_index(i as usize)
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut c = LetterSet::new();
        for letter in iter {
            c.insert(letter);
        }
        c
    }
}

impl From<&str> for LetterSet {
    /// Collect the letters of `s`, skipping anything that is not an ascii letter.
    fn from(s: &str) -> Self {
        s.chars().filter_map(Letter::from_char).collect()
    }
}
