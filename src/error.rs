use crate::board::Direction;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be deserialized")]
    WordfileDeserializeError(String),

    /// Error serializing the word index
    #[cfg(feature = "bincode")]
    #[error("Word index could not be serialized to {0}")]
    WordfileSerializeError(String),

    /// Character is neither a letter nor a blank marker
    #[error("Invalid tile '{0}'")]
    InvalidTile(char),

    /// The rack holds more tiles than the ruleset allows
    #[error("Rack has {len} tiles, capacity is {capacity}")]
    RackTooLarge { len: usize, capacity: usize },

    /// Board dimensions do not match the ruleset
    #[error("Board is {board:?} (width, height), ruleset expects {ruleset:?}")]
    DimensionMismatch {
        board: (usize, usize),
        ruleset: (usize, usize),
    },

    /// Error parsing board state or grid from strings
    #[error("Invalid number of rows {0} (expect {1})")]
    InvalidRowCount(usize, usize),

    /// Every row of a board or grid must have the same length
    #[error("Invalid row \"{0}\": length {1}, expect {2}")]
    InvalidRowLength(String, usize, usize),

    /// Error parsing bonus cell
    #[error("Invalid grid bonus cell: \"{0}\"")]
    GridParseError(String),

    /// The start square is not on the board
    #[error("Center square ({row}, {col}) is outside the board")]
    CenterOutOfBounds { row: usize, col: usize },

    /// Attempt to place (part of) a word outside the board
    #[error("Playing {len} tiles at row={row}, col={col} {direction} does not fit")]
    TilePlacementError {
        row: usize,
        col: usize,
        direction: Direction,
        len: usize,
    },

    /// Attempt to replace a tile already on the board
    #[error("Attempt to replace tile at row:{row}, col:{col}")]
    TileReplaceError { row: usize, col: usize },

    /// No ruleset is registered under this name
    #[error("Unknown game \"{0}\"")]
    UnknownGame(String),
}
