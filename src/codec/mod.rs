pub mod reader;
pub mod writer;
pub mod types;
pub mod tile;
pub mod event;
pub mod map_file;

pub use reader::BinaryReader;
pub use writer::BinaryWriter;
pub use types::*;
pub use tile::{encode_tiles, tile_value};
pub use event::{checkpoint, EncodedEvent, Trigger, TRIGGER_BY_GID};
pub use map_file::{write_map, MapFile};
