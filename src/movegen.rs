//! Candidate placements: a backtracking walk over the word index, one board line at a time.
use crate::anchors::AnchorScanner;
use crate::board::{Board, Direction};
use crate::crossset::CrossSets;
use crate::moves::Placement;
use crate::tiles::{Letter, Rack, RackTally, Tile};
use crate::wordlist::{NodeId, WordIndex};
use log::trace;
use std::ops::{Deref, DerefMut};

/// Generates the candidate placements of a rack on a board.
///
/// Every candidate is a word of the index that fits the tiles on its line and
/// the cross-sets of the squares it fills, places at least one rack tile, and
/// starts close enough to an anchor to reach it. Candidates are not checked
/// for legality here; that is left to the [`Scorer`](crate::Scorer).
pub struct MoveSearch<'a> {
    board: &'a Board,
    index: &'a WordIndex,
    rack: &'a Rack,
    center: (usize, usize),
}

impl<'a> MoveSearch<'a> {
    pub fn new(
        board: &'a Board,
        index: &'a WordIndex,
        rack: &'a Rack,
        center: (usize, usize),
    ) -> MoveSearch<'a> {
        MoveSearch {
            board,
            index,
            rack,
            center,
        }
    }

    /// All candidates, horizontal lines first. The same placement can be found
    /// more than once.
    pub fn candidates(&self) -> Vec<Placement> {
        let mut found = Vec::new();
        self.for_each_candidate(|placement| found.push(placement));
        found
    }

    /// Call `emit` for every candidate, horizontal lines first.
    pub fn for_each_candidate<F: FnMut(Placement)>(&self, mut emit: F) {
        let scanner = AnchorScanner::new(self.board, self.center);
        for &direction in &Direction::BOTH {
            let cross_sets = CrossSets::compute(self.board, self.index, direction);
            for line in 0..self.board.line_count(direction) {
                let span = match scanner.span(direction, line) {
                    Some(span) => span,
                    None => continue,
                };
                let cells = self.board.line(direction, line);
                let mut context = SearchContext {
                    index: self.index,
                    direction,
                    line,
                    cells: &cells,
                    cross_sets: &cross_sets,
                    max_anchor: span.max,
                    rack: self.rack.tally(),
                    word: Vec::with_capacity(cells.len()),
                    placed: 0,
                    emit: &mut emit,
                };
                let mut starts = 0;
                for start in span.start_offsets(&cells, self.rack.len()) {
                    context.walk(start, self.index.root());
                    starts += 1;
                }
                trace!(
                    "{} line {}: anchors {}..={}, {} starts",
                    direction,
                    line,
                    span.min,
                    span.max,
                    starts
                );
            }
        }
    }
}

/// State of the walk along one line.
struct SearchContext<'a, 'e> {
    index: &'a WordIndex,
    direction: Direction,
    line: usize,
    cells: &'a [Option<Letter>],
    cross_sets: &'a CrossSets,
    max_anchor: usize,
    rack: RackTally,
    /// The word so far, ending right before the current square
    word: Vec<Letter>,
    /// Number of rack tiles in `word`
    placed: usize,
    emit: &'e mut dyn FnMut(Placement),
}

/// One letter appended to the word. Dropping the step removes the letter
/// again and returns its tile to the rack.
struct Step<'s, 'a, 'e> {
    context: &'s mut SearchContext<'a, 'e>,
    tile: Option<Tile>,
}

impl<'s, 'a, 'e> Step<'s, 'a, 'e> {
    /// Follow a letter that is on the board.
    fn board(context: &'s mut SearchContext<'a, 'e>, letter: Letter) -> Self {
        context.word.push(letter);
        Step {
            context,
            tile: None,
        }
    }

    /// Play `letter` with `tile` from the rack, `None` if the rack has no such tile.
    fn rack(context: &'s mut SearchContext<'a, 'e>, letter: Letter, tile: Tile) -> Option<Self> {
        let taken = match tile {
            Tile::Letter(letter) => context.rack.take(letter),
            Tile::Blank => context.rack.take_blank(),
        };
        if !taken {
            return None;
        }
        context.word.push(letter);
        context.placed += 1;
        Some(Step {
            context,
            tile: Some(tile),
        })
    }
}

impl<'s, 'a, 'e> Drop for Step<'s, 'a, 'e> {
    fn drop(&mut self) {
        self.context.word.pop();
        if let Some(tile) = self.tile {
            self.context.rack.put_back(tile);
            self.context.placed -= 1;
        }
    }
}

impl<'s, 'a, 'e> Deref for Step<'s, 'a, 'e> {
    type Target = SearchContext<'a, 'e>;
    fn deref(&self) -> &Self::Target {
        self.context
    }
}

impl<'s, 'a, 'e> DerefMut for Step<'s, 'a, 'e> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.context
    }
}

impl<'a, 'e> SearchContext<'a, 'e> {
    /// Extend the word from square `pos`, with `node` matching the word so far.
    fn walk(&mut self, pos: usize, node: NodeId) {
        let index = self.index;
        let len = self.cells.len();
        if index.is_terminal(node)
            && self.placed > 0
            && self.word.len() >= 2
            && (pos >= len || self.cells[pos].is_none())
        {
            let start = pos - self.word.len();
            let (row, col) = self.direction.coords(self.line, start);
            (self.emit)(Placement {
                word: self.word.clone(),
                row,
                col,
                direction: self.direction,
            });
        }
        if pos >= len {
            return;
        }
        let cell = self.cells[pos];
        match cell {
            Some(letter) => {
                if let Some(child) = index.child(node, letter) {
                    let mut step = Step::board(self, letter);
                    step.walk(pos + 1, child);
                }
            }
            None => {
                if self.placed == 0 && pos > self.max_anchor + self.rack.len() {
                    return;
                }
                let (row, col) = self.direction.coords(self.line, pos);
                let allowed = index
                    .child_letters(node)
                    .intersection(self.cross_sets.get(row, col));
                let rack_letters = self.rack.letters();
                for letter in allowed.intersection(rack_letters).iter() {
                    let child = match index.child(node, letter) {
                        Some(child) => child,
                        None => continue,
                    };
                    if let Some(mut step) = Step::rack(self, letter, Tile::Letter(letter)) {
                        step.walk(pos + 1, child);
                    }
                }
                // blanks are interchangeable, and letters on the rack were tried above
                if self.rack.has_blank() {
                    for letter in allowed.difference(rack_letters).iter() {
                        let child = match index.child(node, letter) {
                            Some(child) => child,
                            None => continue,
                        };
                        if let Some(mut step) = Step::rack(self, letter, Tile::Blank) {
                            step.walk(pos + 1, child);
                        }
                    }
                }
            }
        }
    }
}
