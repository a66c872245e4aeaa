//! Basic types for working with tiles: letters, rack tiles and racks.
mod letter;
mod rack;
mod tile;

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: usize = 26;

pub(crate) use letter::letters_of;
pub use letter::Letter;
pub(crate) use rack::RackTally;
pub use rack::Rack;
pub use tile::Tile;
