use crate::tiles::{letters_of, Letter};
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Play direction of a word.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub const BOTH: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    /// The direction of the cross words formed by a word played in this direction.
    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// Step (row, col) to the next square in this direction.
    pub fn delta(self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
        }
    }

    /// Board coordinates (row, col) of square `offset` on line `line`.
    /// Horizontal lines are rows, vertical lines are columns.
    #[inline]
    pub fn coords(self, line: usize, offset: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => (line, offset),
            Direction::Vertical => (offset, line),
        }
    }

    /// Inverse of [`coords`](Direction::coords): the (line, offset) of square (row, col).
    #[inline]
    pub fn line_offset(self, row: usize, col: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => (row, col),
            Direction::Vertical => (col, row),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "H"),
            Direction::Vertical => write!(f, "V"),
        }
    }
}

/// Snapshot of the tiles on the board, `height` rows of `width` squares.
///
/// ## Examples
/// ```
/// use crossplay_solver::{Board, Direction, Error};
/// let mut board = Board::empty(7, 5);
/// board.place_word("rust", 2, 1, Direction::Horizontal)?;
/// assert_eq!(board.to_string().lines().nth(2), Some(".RUST.."));
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Option<Letter>>,
}

/// Display the board as `height` lines of `width` squares.
/// Empty squares show as ".".
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|col| self.get(row, col).map_or('.', Letter::to_char))
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

fn parse_square(ch: char) -> Result<Option<Letter>, Error> {
    match ch {
        '.' | ' ' | '_' => Ok(None),
        _ => Letter::from_char(ch)
            .map(Some)
            .ok_or(Error::InvalidTile(ch)),
    }
}

impl Board {
    /// A board without tiles.
    pub fn empty(width: usize, height: usize) -> Board {
        Board {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Create a board from rows of squares. A letter (case insensitive) is a
    /// tile, `.`, `_` or space is an empty square.
    /// ## Errors
    /// If rows differ in length or hold anything else.
    /// ## Examples
    /// ```
    /// # use crossplay_solver::{Board, Error};
    /// let board = Board::from_strings(&[
    ///     "...",
    ///     "cat",
    ///     "...",
    /// ])?;
    /// assert_eq!(board.width(), 3);
    /// assert!(board.is_occupied(1, 2));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Board, Error> {
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        Board::empty(width, rows.len()).with_state_from_strings(rows)
    }

    /// Set the board state from rows of squares, see [`from_strings`](Board::from_strings).
    /// ## Errors
    /// If the rows do not match the board dimensions or hold invalid squares.
    pub fn with_state_from_strings<S: AsRef<str>>(mut self, rows: &[S]) -> Result<Board, Error> {
        if rows.len() != self.height {
            return Err(Error::InvalidRowCount(rows.len(), self.height));
        }
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != self.width {
                return Err(Error::InvalidRowLength(String::from(row), len, self.width));
            }
            for (j, ch) in row.chars().enumerate() {
                self.cells[i * self.width + j] = parse_square(ch)?;
            }
        }
        Ok(self)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The tile at (row, col), `None` for an empty square or outside the board.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Letter> {
        if row < self.height && col < self.width {
            self.cells[row * self.width + col]
        } else {
            None
        }
    }

    /// Check if the square at (row, col) holds a tile.
    #[inline]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    /// Returns true if no tile has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Number of tiles on the board
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterate over all tiles as (row, col, letter).
    pub fn tiles(&self) -> impl Iterator<Item = (usize, usize, Letter)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|letter| (i / width, i % width, letter)))
    }

    /// Number of lines in `direction`: rows for horizontal, columns for vertical.
    pub fn line_count(&self, direction: Direction) -> usize {
        match direction {
            Direction::Horizontal => self.height,
            Direction::Vertical => self.width,
        }
    }

    /// Number of squares on a line in `direction`.
    pub fn line_len(&self, direction: Direction) -> usize {
        match direction {
            Direction::Horizontal => self.width,
            Direction::Vertical => self.height,
        }
    }

    /// The squares of line `line` in `direction`.
    pub fn line(&self, direction: Direction, line: usize) -> Vec<Option<Letter>> {
        (0..self.line_len(direction))
            .map(|offset| {
                let (row, col) = direction.coords(line, offset);
                self.get(row, col)
            })
            .collect()
    }

    /// Returns true if a square next to (row, col) across `direction` holds a tile.
    pub fn has_perpendicular_neighbor(&self, row: usize, col: usize, direction: Direction) -> bool {
        let (dr, dc) = direction.perpendicular().delta();
        (row >= dr && col >= dc && self.is_occupied(row - dr, col - dc))
            || self.is_occupied(row + dr, col + dc)
    }

    /// Place `word` at (row, col) in `direction`. Squares that already hold the
    /// same letter are kept. Returns the number of new tiles.
    /// ## Errors
    /// - If `word` holds anything but letters.
    /// - If the word does not fit on the board.
    /// - If a square already holds a different letter. The board is unchanged then.
    pub fn place_word(
        &mut self,
        word: &str,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Result<usize, Error> {
        let letters = letters_of(word)?;
        let len = letters.len();
        let (line, start) = direction.line_offset(row, col);
        let fits = start
            .checked_add(len)
            .map_or(false, |end| end <= self.line_len(direction));
        if line >= self.line_count(direction) || !fits {
            return Err(Error::TilePlacementError {
                row,
                col,
                direction,
                len,
            });
        }
        for (i, &letter) in letters.iter().enumerate() {
            let (r, c) = direction.coords(line, start + i);
            if let Some(existing) = self.get(r, c) {
                if existing != letter {
                    return Err(Error::TileReplaceError { row: r, col: c });
                }
            }
        }
        let mut placed = 0;
        for (i, &letter) in letters.iter().enumerate() {
            let (r, c) = direction.coords(line, start + i);
            let cell = &mut self.cells[r * self.width + c];
            if cell.is_none() {
                *cell = Some(letter);
                placed += 1;
            }
        }
        Ok(placed)
    }

    /// All maximal runs of two or more tiles, rows first, then columns.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::new();
        for &direction in &Direction::BOTH {
            for line in 0..self.line_count(direction) {
                let mut run = String::new();
                for square in self.line(direction, line).into_iter().chain(Some(None)) {
                    match square {
                        Some(letter) => run.push(letter.to_char()),
                        None => {
                            if run.len() > 1 {
                                words.push(run.clone());
                            }
                            run.clear();
                        }
                    }
                }
            }
        }
        words
    }
}
