use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Board multiplier on a single square.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Bonus {
    NoBonus,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

use Bonus::{DoubleLetter, DoubleWord, NoBonus, TripleLetter, TripleWord};

impl Default for Bonus {
    fn default() -> Self {
        NoBonus
    }
}

impl Bonus {
    /// Factor applied to the value of the tile placed on this square.
    pub fn letter_multiplier(self) -> u32 {
        match self {
            DoubleLetter => 2,
            TripleLetter => 3,
            _ => 1,
        }
    }

    /// Factor applied to every word that a tile placed on this square is part of.
    pub fn word_multiplier(self) -> u32 {
        match self {
            DoubleWord => 2,
            TripleWord => 3,
            _ => 1,
        }
    }
}

impl fmt::Display for Bonus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NoBonus => write!(f, "--"),
            DoubleLetter => write!(f, "2l"),
            TripleLetter => write!(f, "3l"),
            DoubleWord => write!(f, "2w"),
            TripleWord => write!(f, "3w"),
        }
    }
}

/// A square code as written in a grid string. The start square carries no multiplier.
enum Square {
    Bonus(Bonus),
    Start,
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let square = match s.trim().to_ascii_lowercase().as_str() {
            "" | "--" | "." => Square::Bonus(NoBonus),
            "ss" | "st" | "stp" | "*" => Square::Start,
            "2l" | "dl" | "dls" => Square::Bonus(DoubleLetter),
            "3l" | "tl" | "tls" => Square::Bonus(TripleLetter),
            "2w" | "dw" | "dws" => Square::Bonus(DoubleWord),
            "3w" | "tw" | "tws" => Square::Bonus(TripleWord),
            _ => return Err(Error::GridParseError(String::from(s))),
        };
        Ok(square)
    }
}

impl FromStr for Bonus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Square>()? {
            Square::Bonus(bonus) => Ok(bonus),
            Square::Start => Ok(NoBonus),
        }
    }
}

/// Grid of board multipliers, `height` rows of `width` squares.
///
/// A grid can also mark the start square, the square that the first move
/// must cover.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Bonus>,
    start: Option<(usize, usize)>,
}

impl Index<(usize, usize)> for Grid {
    type Output = Bonus;
    /// Bonus at (row, col)
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[row * self.width + col]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Grid {
    /// Create a new grid without any bonus squares.
    pub fn empty(width: usize, height: usize) -> Grid {
        Grid {
            width,
            height,
            cells: vec![NoBonus; width * height],
            start: None,
        }
    }

    /// Create a symmetrical board by mirroring a quarter board horizontally and
    /// vertically. The quarter board has `(n + 1) / 2` rows and columns for an
    /// `n` x `n` board, `n` odd.
    /// ## Errors
    /// If a row has the wrong length or a square can not be parsed.
    pub fn from_quarter_board<S: AsRef<str>>(qb: &[S]) -> Result<Grid, Error> {
        let q = qb.len();
        if q == 0 {
            return Ok(Grid::empty(0, 0));
        }
        let n = 2 * q - 1;
        let mut grid = Grid::empty(n, n);
        for (i, row) in qb.iter().enumerate() {
            let row: Vec<&str> = row.as_ref().split_whitespace().collect();
            if row.len() != q {
                return Err(Error::InvalidRowLength(
                    row.join(" "),
                    row.len(),
                    q,
                ));
            }
            for (j, code) in row.iter().enumerate() {
                let bonus = match code.parse::<Square>()? {
                    Square::Bonus(bonus) => bonus,
                    Square::Start => {
                        grid.start = Some((i, j));
                        NoBonus
                    }
                };
                for &(r, c) in &[(i, j), (n - i - 1, j), (i, n - j - 1), (n - i - 1, n - j - 1)] {
                    grid.cells[r * n + c] = bonus;
                }
            }
        }
        Ok(grid)
    }

    /// Create a `Grid` from strings.
    /// Each row consists of the same number of square codes separated by spaces.
    ///
    /// ## Errors
    /// If `grid` has rows of different length, or elements can not be parsed as a `Bonus`.
    /// ## Examples
    /// ```
    /// # use crossplay_solver::{Bonus, Grid, Error};
    /// let grid = Grid::from_strings(&[
    ///     "3w -- 2l",
    ///     "-- ss --",
    ///     "2l -- 3w",
    /// ])?;
    /// assert_eq!(grid.width(), 3);
    /// assert_eq!(grid[(2, 2)], Bonus::TripleWord);
    /// assert_eq!(grid.start(), Some((1, 1)));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Grid, Error> {
        let height = grid.len();
        let width = grid
            .first()
            .map_or(0, |row| row.as_ref().split_whitespace().count());
        let mut result = Grid::empty(width, height);
        for (i, row) in grid.iter().enumerate() {
            let codes: Vec<&str> = row.as_ref().split_whitespace().collect();
            if codes.len() != width {
                return Err(Error::InvalidRowLength(
                    String::from(row.as_ref()),
                    codes.len(),
                    width,
                ));
            }
            for (j, code) in codes.iter().enumerate() {
                result.cells[i * width + j] = match code.parse::<Square>()? {
                    Square::Bonus(bonus) => bonus,
                    Square::Start => {
                        result.start = Some((i, j));
                        NoBonus
                    }
                };
            }
        }
        Ok(result)
    }

    /// Get grid rows as strings of space separated square codes
    pub fn to_strings(&self) -> Vec<String> {
        (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|col| {
                        if self.start == Some((row, col)) && self[(row, col)] == NoBonus {
                            String::from("ss")
                        } else {
                            self[(row, col)].to_string()
                        }
                    })
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The start square (row, col), if the grid marks one.
    pub fn start(&self) -> Option<(usize, usize)> {
        self.start
    }

    /// Bonus at (row, col), `NoBonus` outside the grid.
    pub fn bonus(&self, row: usize, col: usize) -> Bonus {
        if row < self.height && col < self.width {
            self[(row, col)]
        } else {
            NoBonus
        }
    }

    /// Set the bonus at (row, col).
    /// ## Panics
    /// If (row, col) is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, bonus: Bonus) {
        assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col] = bonus;
    }
}
