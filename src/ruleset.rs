use crate::grid::{Bonus, Grid};
use crate::tiles::{Letter, Tile, ALPHABET_LEN};
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

mod crossplay;
mod scrabble;
mod wwf;

/// Default number of tiles on a rack.
pub const RACK_SIZE: usize = 7;

/// These games are supported.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Game {
    /// CrossPlay
    CrossPlay,
    /// Scrabble
    Scrabble,
    /// Words With Friends
    WordsWithFriends,
}

impl Game {
    /// All supported games.
    pub const ALL: [Game; 3] = [Game::CrossPlay, Game::Scrabble, Game::WordsWithFriends];

    /// Display name of the game
    pub fn name(self) -> &'static str {
        match self {
            Game::CrossPlay => "CrossPlay",
            Game::Scrabble => "Scrabble",
            Game::WordsWithFriends => "Words With Friends",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Game {
    type Err = Error;

    /// Parse a game name, case insensitive. `wwf` is accepted for Words With Friends.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Game::ALL
            .iter()
            .copied()
            .find(|game| game.name().to_ascii_lowercase() == name)
            .or_else(|| match name.as_str() {
                "wwf" => Some(Game::WordsWithFriends),
                _ => None,
            })
            .ok_or_else(|| Error::UnknownGame(String::from(s)))
    }
}

/// The rules of a game: board dimensions, letter values, board multipliers,
/// bingo bonus, rack capacity and the start square.
///
/// The board dimensions are the dimensions of the multiplier grid, so the two
/// always match.
///
/// ## Examples
/// ```
/// use crossplay_solver::{Bonus, Game, Letter, Ruleset};
/// let rules = Ruleset::new(Game::Scrabble);
/// assert_eq!(rules.points(Letter::from_char('q').unwrap()), 10);
/// assert_eq!(rules.bonus(7, 7), Bonus::DoubleWord);
/// assert_eq!(rules.bingo_bonus(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ruleset {
    name: String,
    letter_values: [u32; ALPHABET_LEN],
    grid: Grid,
    bingo_bonus: u32,
    rack_size: usize,
    center: (usize, usize),
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::new(Game::CrossPlay)
    }
}

impl From<Game> for Ruleset {
    fn from(game: Game) -> Self {
        Ruleset::new(game)
    }
}

impl Ruleset {
    /// Return the ruleset for a supported game.
    pub fn new(game: Game) -> Ruleset {
        let (letter_values, quarter_board, bingo_bonus) = match game {
            Game::CrossPlay => (
                crossplay::LETTER_VALUES,
                crossplay::QUARTER_BOARD,
                crossplay::BINGO_BONUS,
            ),
            Game::Scrabble => (
                scrabble::LETTER_VALUES,
                scrabble::QUARTER_BOARD,
                scrabble::BINGO_BONUS,
            ),
            Game::WordsWithFriends => (wwf::LETTER_VALUES, wwf::QUARTER_BOARD, wwf::BINGO_BONUS),
        };
        // The preset boards are covered by tests, so it is safe to unwrap
        let grid = Grid::from_quarter_board(&quarter_board).unwrap();
        let center = (grid.height() / 2, grid.width() / 2);
        Ruleset {
            name: String::from(game.name()),
            letter_values,
            grid,
            bingo_bonus,
            rack_size: RACK_SIZE,
            center,
        }
    }

    /// A ruleset for a `width` x `height` board without bonus squares, with all
    /// letter values 0 and no bingo bonus. The center defaults to the middle square.
    pub fn custom(name: &str, width: usize, height: usize) -> Ruleset {
        Ruleset {
            name: String::from(name),
            letter_values: [0; ALPHABET_LEN],
            grid: Grid::empty(width, height),
            bingo_bonus: 0,
            rack_size: RACK_SIZE,
            center: (height / 2, width / 2),
        }
    }

    /// Replace the multiplier grid, and with it the board dimensions.
    /// If the grid marks a start square it becomes the center.
    /// ## Errors
    /// If the center is not on the new grid.
    pub fn with_grid(mut self, grid: Grid) -> Result<Ruleset, Error> {
        if let Some(center) = grid.start() {
            self.center = center;
        }
        self.grid = grid;
        let (row, col) = self.center;
        self.with_center(row, col)
    }

    /// Replace the multiplier grid by parsing `rows`, see [`Grid::from_strings`].
    /// ## Errors
    /// If the grid can not be parsed, or the center is not on the new grid.
    pub fn with_grid_from_strings<S: AsRef<str>>(self, rows: &[S]) -> Result<Ruleset, Error> {
        let grid = Grid::from_strings(rows)?;
        self.with_grid(grid)
    }

    /// Replace the letter value table. Letters that are not listed are worth 0.
    /// Blank markers are accepted and ignored, a blank is always worth 0.
    /// ## Errors
    /// If a key is neither a letter nor a blank marker.
    /// ## Examples
    /// ```
    /// # use crossplay_solver::{Error, Letter, Ruleset};
    /// let rules = Ruleset::custom("tiny", 5, 5).with_letter_values(&[('a', 1), ('?', 0), ('z', 10)])?;
    /// assert_eq!(rules.points(Letter::from_char('Z').unwrap()), 10);
    /// assert_eq!(rules.points(Letter::from_char('B').unwrap()), 0);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_letter_values(mut self, values: &[(char, u32)]) -> Result<Ruleset, Error> {
        let mut letter_values = [0; ALPHABET_LEN];
        for &(ch, points) in values {
            if let Tile::Letter(letter) = Tile::try_from(ch)? {
                letter_values[letter.index()] = points;
            }
        }
        self.letter_values = letter_values;
        Ok(self)
    }

    pub fn with_bingo_bonus(mut self, bingo_bonus: u32) -> Ruleset {
        self.bingo_bonus = bingo_bonus;
        self
    }

    pub fn with_rack_size(mut self, rack_size: usize) -> Ruleset {
        self.rack_size = rack_size;
        self
    }

    /// Set the start square.
    /// ## Errors
    /// If (row, col) is not on the board.
    pub fn with_center(mut self, row: usize, col: usize) -> Result<Ruleset, Error> {
        if row >= self.height() || col >= self.width() {
            return Err(Error::CenterOutOfBounds { row, col });
        }
        self.center = (row, col);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Return the face value of `letter`, 0 if the table has no value for it.
    #[inline]
    pub fn points(&self, letter: Letter) -> u32 {
        self.letter_values[letter.index()]
    }

    /// Return the bonus of the square at (row, col)
    #[inline]
    pub fn bonus(&self, row: usize, col: usize) -> Bonus {
        self.grid.bonus(row, col)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Extra points for a move that uses every slot of the rack.
    pub fn bingo_bonus(&self) -> u32 {
        self.bingo_bonus
    }

    /// Number of tiles a full rack holds.
    pub fn rack_size(&self) -> usize {
        self.rack_size
    }

    /// The start square (row, col) that the first move must cover.
    pub fn center(&self) -> (usize, usize) {
        self.center
    }
}
