//! Letters allowed on each empty square by the perpendicular words on the board.
use crate::board::{Board, Direction};
use crate::labelset::LetterSet;
use crate::tiles::Letter;
use crate::wordlist::WordIndex;

/// For words played in one direction, the letters each square accepts without
/// breaking the word that crosses it.
///
/// An empty square with a tile on either side across the play direction gets
/// exactly the letters `c` for which `prefix + c + suffix` is a word, where
/// prefix and suffix are the runs of tiles before and after it. Every other
/// square is unconstrained and gets the full alphabet.
#[derive(Debug, Clone)]
pub struct CrossSets {
    direction: Direction,
    width: usize,
    sets: Vec<LetterSet>,
}

impl CrossSets {
    /// Compute the cross-sets of all squares for words played in `direction`.
    pub fn compute(board: &Board, index: &WordIndex, direction: Direction) -> CrossSets {
        let width = board.width();
        let mut sets = vec![LetterSet::full(); width * board.height()];
        for row in 0..board.height() {
            for col in 0..width {
                if board.is_occupied(row, col)
                    || !board.has_perpendicular_neighbor(row, col, direction)
                {
                    continue;
                }
                sets[row * width + col] = cross_set(board, index, direction.perpendicular(), row, col);
            }
        }
        CrossSets {
            direction,
            width,
            sets,
        }
    }

    /// The direction of play these cross-sets apply to.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The letters allowed at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> LetterSet {
        self.sets[row * self.width + col]
    }
}

/// Collect the run of tiles that precedes (row, col) across `cross`, in reading order.
fn prefix_run(board: &Board, cross: Direction, row: usize, col: usize) -> Vec<Letter> {
    let (dr, dc) = cross.delta();
    let (mut r, mut c) = (row, col);
    let mut run = Vec::new();
    while r >= dr && c >= dc {
        match board.get(r - dr, c - dc) {
            Some(letter) => run.push(letter),
            None => break,
        }
        r -= dr;
        c -= dc;
    }
    run.reverse();
    run
}

/// Collect the run of tiles that follows (row, col) across `cross`.
fn suffix_run(board: &Board, cross: Direction, row: usize, col: usize) -> Vec<Letter> {
    let (dr, dc) = cross.delta();
    let (mut r, mut c) = (row + dr, col + dc);
    let mut run = Vec::new();
    while let Some(letter) = board.get(r, c) {
        run.push(letter);
        r += dr;
        c += dc;
    }
    run
}

fn cross_set(board: &Board, index: &WordIndex, cross: Direction, row: usize, col: usize) -> LetterSet {
    let prefix = prefix_run(board, cross, row, col);
    let suffix = suffix_run(board, cross, row, col);
    let node = match index.follow(index.root(), prefix) {
        Some(node) => node,
        None => return LetterSet::new(),
    };
    index
        .children(node)
        .filter(|&(_, child)| {
            index
                .follow(child, suffix.iter().copied())
                .map_or(false, |end| index.is_terminal(end))
        })
        .map(|(letter, _)| letter)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    fn setup() -> Result<(Board, WordIndex), Error> {
        let board = Board::from_strings(&[
            ".....", //
            ".....", //
            ".cat.", //
            ".....", //
            ".....", //
        ])?;
        let index = WordIndex::from_words(&["cat", "cats", "scat", "at", "ta", "ax", "as", "tax"])?;
        Ok((board, index))
    }

    #[test]
    fn test_unconstrained() -> Result<(), Error> {
        let (board, index) = setup()?;
        let sets = CrossSets::compute(&board, &index, Direction::Horizontal);
        assert!(sets.get(0, 0).is_full());
        assert!(sets.get(4, 2).is_full());
        Ok(())
    }

    #[test]
    fn test_horizontal_play() -> Result<(), Error> {
        let (board, index) = setup()?;
        // playing horizontally in row 3 forms vertical words below "cat"
        let sets = CrossSets::compute(&board, &index, Direction::Horizontal);
        assert_eq!(sets.direction(), Direction::Horizontal);
        assert!(sets.get(3, 1).is_empty());
        assert_eq!(sets.get(3, 2), LetterSet::from("stx"));
        assert_eq!(sets.get(1, 3), LetterSet::from("a"));
        assert!(sets.get(3, 0).is_full());
        Ok(())
    }

    #[test]
    fn test_vertical_play() -> Result<(), Error> {
        let (board, index) = setup()?;
        // playing vertically through column 0 or 4 extends "cat"
        let sets = CrossSets::compute(&board, &index, Direction::Vertical);
        assert_eq!(sets.get(2, 0), LetterSet::from("s"));
        assert_eq!(sets.get(2, 4), LetterSet::from("s"));
        assert!(sets.get(1, 2).is_full());
        assert!(sets.get(2, 4).contains(letter('S')));
        Ok(())
    }

    #[test]
    fn test_runs() -> Result<(), Error> {
        let (board, _) = setup()?;
        let prefix = prefix_run(&board, Direction::Horizontal, 2, 4);
        assert_eq!(prefix, vec![letter('c'), letter('a'), letter('t')]);
        assert!(suffix_run(&board, Direction::Horizontal, 2, 4).is_empty());
        assert_eq!(suffix_run(&board, Direction::Horizontal, 2, 0).len(), 3);
        assert!(prefix_run(&board, Direction::Vertical, 0, 2).is_empty());
        Ok(())
    }
}
