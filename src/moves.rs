use crate::board::Direction;
use crate::scorer::Scorer;
use crate::tiles::{letters_of, Letter};
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A word to be laid on the board, starting at (row, col) in `direction`.
///
/// Letters of the word may already be on the board; the rest come from the rack.
/// Two placements are the same move when word, start square and direction agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    pub word: Vec<Letter>,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Placement {
    /// ## Errors
    /// If `word` holds anything but letters.
    pub fn new(word: &str, row: usize, col: usize, direction: Direction) -> Result<Placement, Error> {
        Ok(Placement {
            word: letters_of(word)?,
            row,
            col,
            direction,
        })
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// The squares covered by the word as (row, col, letter).
    pub fn squares(&self) -> impl Iterator<Item = (usize, usize, Letter)> + '_ {
        let (dr, dc) = self.direction.delta();
        self.word
            .iter()
            .enumerate()
            .map(move |(i, &letter)| (self.row + i * dr, self.col + i * dc, letter))
    }

    /// The word in upper case.
    pub fn word_string(&self) -> String {
        self.word.iter().map(|letter| letter.to_char()).collect()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}) {}",
            self.word_string(),
            self.row,
            self.col,
            self.direction
        )
    }
}

/// A legal, scored move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    /// The complete main word, upper case, board letters included
    pub word: String,
    /// Row of the first letter
    pub row: usize,
    /// Column of the first letter
    pub col: usize,
    pub direction: Direction,
    pub score: u32,
}

impl Move {
    fn new(placement: &Placement, score: u32) -> Move {
        Move {
            word: placement.word_string(),
            row: placement.row,
            col: placement.col,
            direction: placement.direction,
            score,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:>4} {} ({}, {}) {}",
            self.score, self.word, self.row, self.col, self.direction
        )
    }
}

/// Collects the legal moves of one solve, each placement once.
///
/// The first time a placement is offered it is scored; later offers of the same
/// placement are ignored.
#[derive(Debug, Default)]
pub struct MoveCatalog {
    seen: HashSet<Placement>,
    moves: Vec<Move>,
}

impl MoveCatalog {
    pub fn new() -> MoveCatalog {
        MoveCatalog::default()
    }

    /// Score `placement` and keep it if it is legal.
    /// Returns false if the placement was offered before.
    pub fn offer(&mut self, placement: Placement, scorer: &Scorer) -> bool {
        if self.seen.contains(&placement) {
            return false;
        }
        if let Some(score) = scorer.score(&placement) {
            self.moves.push(Move::new(&placement, score));
        }
        self.seen.insert(placement);
        true
    }

    /// Number of distinct placements offered
    pub fn candidates(&self) -> usize {
        self.seen.len()
    }

    /// Number of legal moves
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The legal moves, highest score first.
    pub fn into_ranked(self) -> Vec<Move> {
        let mut moves = self.moves;
        moves.sort_by(|a, b| b.score.cmp(&a.score));
        moves
    }
}
