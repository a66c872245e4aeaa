//! Anchor squares: where a new word can connect to the tiles on the board.
use crate::board::{Board, Direction};
use crate::tiles::Letter;

/// The range of anchor offsets on one line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AnchorSpan {
    /// Smallest anchor offset
    pub min: usize,
    /// Largest anchor offset
    pub max: usize,
}

impl AnchorSpan {
    /// The offsets where a word on `cells` may start, for a rack of `rack_len` tiles.
    ///
    /// A word starts at most `rack_len` squares before the first anchor and at the
    /// latest on the last anchor. It never starts right after a tile, since that
    /// tile would become part of the word.
    pub fn start_offsets<'a>(
        &self,
        cells: &'a [Option<Letter>],
        rack_len: usize,
    ) -> impl Iterator<Item = usize> + 'a {
        let first = self.min.saturating_sub(rack_len);
        let last = self.max.min(cells.len().saturating_sub(1));
        (first..=last).filter(move |&start| start == 0 || cells[start - 1].is_none())
    }
}

/// Finds the anchors of each line of a board.
pub struct AnchorScanner<'a> {
    board: &'a Board,
    center: (usize, usize),
    board_is_empty: bool,
}

impl<'a> AnchorScanner<'a> {
    /// On an empty board the only anchor is `center`.
    pub fn new(board: &'a Board, center: (usize, usize)) -> AnchorScanner<'a> {
        AnchorScanner {
            board,
            center,
            board_is_empty: board.is_empty(),
        }
    }

    /// The anchor offsets of `line` in `direction`, in increasing order.
    ///
    /// Anchors are the tiles, the empty squares next to a tile along the line,
    /// and the empty squares with a tile on either side across the line.
    pub fn anchors(&self, direction: Direction, line: usize) -> Vec<usize> {
        if self.board_is_empty {
            let (center_line, center_offset) = direction.line_offset(self.center.0, self.center.1);
            return if center_line == line {
                vec![center_offset]
            } else {
                Vec::new()
            };
        }
        let cells = self.board.line(direction, line);
        (0..cells.len())
            .filter(|&i| {
                let (row, col) = direction.coords(line, i);
                cells[i].is_some()
                    || (i > 0 && cells[i - 1].is_some())
                    || cells.get(i + 1).map_or(false, Option::is_some)
                    || self.board.has_perpendicular_neighbor(row, col, direction)
            })
            .collect()
    }

    /// The anchor span of `line` in `direction`, `None` if the line has no anchors.
    pub fn span(&self, direction: Direction, line: usize) -> Option<AnchorSpan> {
        let anchors = self.anchors(direction, line);
        match (anchors.first(), anchors.last()) {
            (Some(&min), Some(&max)) => Some(AnchorSpan { min, max }),
            _ => None,
        }
    }
}
