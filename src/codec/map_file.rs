//! Engine map file.
//!
//! Header-less layout:
//! ```text
//! [1024 bytes] tiles, 32x32 row-major (see `tile::tile_value`)
//! [N * 4 bytes] event records in object order (see `event::EncodedEvent`)
//! ```
//! Readers derive N from the file length.

use std::io::Write;

use serde::Serialize;
use tracing::{debug, info};

use super::event::EncodedEvent;
use super::reader::BinaryReader;
use super::tile::encode_tiles;
use super::types::{EVENT_RECORD_SIZE, MAP_HEIGHT, MAP_WIDTH, MAX_EVENTS};
use super::BinaryWriter;
use crate::error::{Error, Result};
use crate::tmx::TmxMap;

/// Encode `map` and write it to `out`. Nothing is written if an object
/// cannot be encoded.
pub fn write_map<W: Write>(map: &TmxMap, mut out: W) -> Result<()> {
    let mut writer =
        BinaryWriter::with_capacity(map.tiles.len() + map.objects.len() * EVENT_RECORD_SIZE);

    writer.write_bytes(&encode_tiles(&map.tiles, map.first_tile_gid));

    for object in &map.objects {
        let event = EncodedEvent::from_object(object, map.first_object_gid)?;
        debug!(
            gid = object.gid,
            x = object.x,
            y = object.y,
            trigger = event.trigger_type,
            checkpoint = event.checkpoint,
            kind = event.kind,
            color = event.color,
            "event encoded"
        );
        event.write(&mut writer);
    }

    out.write_all(writer.as_slice())?;
    out.flush()?;
    info!(bytes = writer.len(), "map file written");
    Ok(())
}

/// A decoded engine map file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapFile {
    pub tiles: Vec<u8>,
    pub events: Vec<EncodedEvent>,
}

impl MapFile {
    pub const TILES_SIZE: usize = MAP_WIDTH * MAP_HEIGHT;

    pub fn read(data: &[u8]) -> Result<Self> {
        let mut reader = BinaryReader::new(data);
        let tiles = reader.read_bytes(Self::TILES_SIZE)?.to_vec();

        let remaining = reader.remaining();
        if remaining % EVENT_RECORD_SIZE != 0 {
            return Err(Error::InvalidMapFile(format!(
                "{remaining} event bytes is not a multiple of {EVENT_RECORD_SIZE}"
            )));
        }
        let count = remaining / EVENT_RECORD_SIZE;
        if count > MAX_EVENTS {
            return Err(Error::InvalidMapFile(format!(
                "{count} events (max {MAX_EVENTS})"
            )));
        }

        let mut events = Vec::with_capacity(count);
        for _ in 0..count {
            events.push(EncodedEvent {
                trigger_type: reader.read_u8()?,
                checkpoint: reader.read_u8()?,
                kind: reader.read_u8()?,
                color: reader.read_u8()?,
            });
        }

        Ok(Self { tiles, events })
    }

    pub fn row(&self, y: usize) -> &[u8] {
        &self.tiles[y * MAP_WIDTH..(y + 1) * MAP_WIDTH]
    }
}
