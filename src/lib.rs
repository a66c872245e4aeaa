//! A move generator for crossword tile-placement games in Rust.
//! <br>
//! Given a board, a rack and a ruleset, this crate finds every legal move and
//! scores it. Rulesets for CrossPlay, Scrabble and Words With Friends are built
//! in, and custom rulesets can be assembled from a multiplier grid and letter values.
//! It can use the `rayon` crate to solve several racks in parallel.
//!
//! # How to use `crossplay_solver`
//! Build a [`WordIndex`] from a word list, pick a [`Ruleset`], and hand both to a
//! [`Solver`]. The word list must be in utf-8 and contain one word per line;
//! words with anything but the letters `a` to `z` are skipped.
//!
//! # Basic usage
//! ```
//! use crossplay_solver::{Board, Direction, Error, Game, Rack, Ruleset, Solver, WordIndex};
//!
//! let index = WordIndex::from_words(&["rust", "rest", "rusts", "ta", "at"])?;
//! let ruleset = Ruleset::new(Game::CrossPlay);
//! let solver = Solver::new(&index, &ruleset);
//!
//! let mut board = Board::empty(ruleset.width(), ruleset.height());
//! let rack: Rack = "rusta".parse()?;
//! let moves = solver.solve(&board, &rack)?;
//! assert!(!moves.is_empty());
//! for mv in &moves {
//!     println!("{}", mv);
//! }
//! board.place_word("rust", 7, 7, Direction::Horizontal)?;
//! let moves = solver.solve(&board, &"s".parse()?)?;
//! assert_eq!(moves[0].word, "RUSTS");
//! # Ok::<(), Error>(())
//! ```
//!
//! # About implementation
//! Moves are generated one board line at a time by walking the word index,
//! with per-square cross-sets limiting the letters that may be placed.
//! Every candidate is checked and scored by the [`Scorer`], which also
//! explains scores on request.
mod anchors;
mod board;
mod crossset;
mod error;
mod grid;
mod labelset;
mod movegen;
mod moves;
mod ruleset;
mod scorer;
mod solver;
mod tilebag;
mod tiles;
mod wordlist;

#[cfg(test)]
mod testing;

pub use anchors::{AnchorScanner, AnchorSpan};
pub use board::{Board, Direction};
pub use crossset::CrossSets;
pub use error::Error;
pub use grid::{Bonus, Grid};
pub use labelset::LetterSet;
pub use movegen::MoveSearch;
pub use moves::{Move, MoveCatalog, Placement};
pub use ruleset::{Game, Ruleset, RACK_SIZE};
pub use scorer::{CrossWord, ScoreBreakdown, Scorer};
pub use solver::Solver;
pub use tilebag::TileBag;
pub use tiles::{Letter, Rack, Tile};
pub use wordlist::{NodeId, WordIndex};
