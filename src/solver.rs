use crate::board::Board;
use crate::movegen::MoveSearch;
use crate::moves::{Move, MoveCatalog, Placement};
use crate::ruleset::Ruleset;
use crate::scorer::{ScoreBreakdown, Scorer};
use crate::tiles::Rack;
use crate::wordlist::WordIndex;
use crate::Error;
use log::debug;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::time::Instant;

/// Finds and scores every legal move of a rack on a board.
///
/// The solver only borrows the word index and the ruleset, so one index can
/// serve many solvers and solves. A solve does not change any of its inputs.
///
/// ## Examples
/// ```
/// use crossplay_solver::{Board, Error, Game, Ruleset, Solver, WordIndex};
/// let index = WordIndex::from_words(&["the", "quick", "brown", "fox"])?;
/// let ruleset = Ruleset::new(Game::Scrabble);
/// let solver = Solver::new(&index, &ruleset);
/// let board = Board::empty(15, 15);
/// let moves = solver.solve(&board, &"bnorwx".parse()?)?;
/// assert_eq!(moves[0].word, "BROWN");
/// // five offsets through the center square, in both directions
/// assert_eq!(moves.len(), 10);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    index: &'a WordIndex,
    ruleset: &'a Ruleset,
}

impl<'a> Solver<'a> {
    pub fn new(index: &'a WordIndex, ruleset: &'a Ruleset) -> Solver<'a> {
        Solver { index, ruleset }
    }

    pub fn index(&self) -> &WordIndex {
        self.index
    }

    pub fn ruleset(&self) -> &Ruleset {
        self.ruleset
    }

    fn check(&self, board: &Board, rack: &Rack) -> Result<(), Error> {
        let dimensions = (self.ruleset.width(), self.ruleset.height());
        if (board.width(), board.height()) != dimensions {
            return Err(Error::DimensionMismatch {
                board: (board.width(), board.height()),
                ruleset: dimensions,
            });
        }
        if rack.len() > self.ruleset.rack_size() {
            return Err(Error::RackTooLarge {
                len: rack.len(),
                capacity: self.ruleset.rack_size(),
            });
        }
        Ok(())
    }

    /// All legal moves of `rack` on `board`, highest score first.
    /// Moves with the same score are in no particular order.
    /// ## Errors
    /// - If the board dimensions differ from the ruleset's.
    /// - If the rack holds more tiles than the ruleset allows.
    pub fn solve(&self, board: &Board, rack: &Rack) -> Result<Vec<Move>, Error> {
        self.check(board, rack)?;
        let now = Instant::now();
        let scorer = Scorer::new(board, self.ruleset, self.index, rack);
        let mut catalog = MoveCatalog::new();
        MoveSearch::new(board, self.index, rack, self.ruleset.center())
            .for_each_candidate(|placement| {
                catalog.offer(placement, &scorer);
            });
        debug!(
            "rack {}: {} candidates, {} moves in {:?}",
            rack,
            catalog.candidates(),
            catalog.len(),
            now.elapsed()
        );
        Ok(catalog.into_ranked())
    }

    /// The `n` best moves, see [`solve`](Solver::solve).
    /// ## Errors
    /// As for [`solve`](Solver::solve).
    pub fn best_moves(&self, board: &Board, rack: &Rack, n: usize) -> Result<Vec<Move>, Error> {
        let mut moves = self.solve(board, rack)?;
        moves.truncate(n);
        Ok(moves)
    }

    /// Solve several racks on the same board, in parallel if the `rayon`
    /// feature is enabled. Returns the moves of each rack in rack order.
    /// ## Errors
    /// As for [`solve`](Solver::solve); the first error is returned.
    pub fn solve_racks(&self, board: &Board, racks: &[Rack]) -> Result<Vec<Vec<Move>>, Error> {
        #[cfg(feature = "rayon")]
        {
            racks
                .par_iter()
                .map(|rack| self.solve(board, rack))
                .collect()
        }
        #[cfg(not(feature = "rayon"))]
        {
            racks.iter().map(|rack| self.solve(board, rack)).collect()
        }
    }

    /// Explain the score of a move of `rack` on `board`.
    /// Returns `None` if the move is not legal.
    /// ## Errors
    /// If the move's word holds anything but letters.
    pub fn explain(
        &self,
        board: &Board,
        rack: &Rack,
        mv: &Move,
    ) -> Result<Option<ScoreBreakdown>, Error> {
        let placement = Placement::new(&mv.word, mv.row, mv.col, mv.direction)?;
        let scorer = Scorer::new(board, self.ruleset, self.index, rack);
        Ok(scorer.explain(&placement))
    }
}
