//! TMX to World Rally map converter
//!
//! Reads a Tiled map saved as TMX with a CSV tile layer and one object
//! layer, and writes the engine's map binary: the remapped 32x32 tile grid
//! followed by one 4-byte record per event object.

pub mod codec;
pub mod convert;
pub mod error;
pub mod tmx;

pub use error::{Error, ErrorKind, Result};
pub use codec::{
    Direction, Difficulty, EventFlags,
    EncodedEvent, MapFile,
    tile_value, write_map,
};
pub use tmx::{parse_tmx, TmxMap, TmxObject};
pub use convert::{convert, convert_files, ConvertSummary};
