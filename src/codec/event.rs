//! Event record encoding.
//!
//! Record layout:
//! ```text
//! [1 byte] trigger type (direction in bits 0-2, special flags in bits 5-7)
//! [1 byte] checkpoint value
//! [1 byte] checkpoint type (local gid - 7, 0 for specials)
//! [1 byte] colour (difficulty group, 0 for specials)
//! ```

use serde::Serialize;

use super::types::{Difficulty, Direction, EventFlags, OBJECT_SCALE};
use super::types::Direction::{Left as L, Right as R, Up as U, UpLeft as UL, UpRight as UR};
use super::BinaryWriter;
use crate::error::{Error, Result};
use crate::tmx::TmxObject;

/// Local gids below this are finish, jump and skid markers
pub const SPECIAL_EVENTS: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub direction: Direction,
    pub flags: EventFlags,
}

impl Trigger {
    const fn new(direction: Direction, flags: EventFlags) -> Self {
        Self { direction, flags }
    }

    pub fn to_byte(self) -> u8 {
        self.direction as u8 | self.flags.bits()
    }
}

const fn plain(direction: Direction) -> Trigger {
    Trigger::new(direction, EventFlags::empty())
}

/// Trigger per object tileset local gid
pub const TRIGGER_BY_GID: [Trigger; 55] = [
    // 0: finish
    Trigger::new(U, EventFlags::FINISH),
    // 1..: jump
    Trigger::new(L, EventFlags::JUMP),
    Trigger::new(U, EventFlags::JUMP),
    Trigger::new(R, EventFlags::JUMP),
    // 4..: skid
    Trigger::new(L, EventFlags::SKID),
    Trigger::new(U, EventFlags::SKID),
    Trigger::new(R, EventFlags::SKID),
    // 7..: narrow
    plain(L), plain(L), plain(UL), plain(UL), plain(UL),
    plain(UR), plain(UR), plain(UR), plain(R), plain(R),
    // 17..: very easy
    plain(L), plain(L), plain(L), plain(L), plain(UL), plain(UL), plain(UL),
    plain(UL), plain(U), plain(U), plain(U), plain(U), plain(UR), plain(UR), plain(UR),
    plain(UR), plain(R), plain(R), plain(R), plain(R),
    // 37..: easy
    plain(UL), plain(UL), plain(UR), plain(UR),
    // 41..: medium
    plain(R),  // R-U-UR
    plain(L),  // L-R-UR
    plain(UL), // UL-UR-UL
    plain(UR), // UR-UL-UR
    plain(UR), // UR-L-UR
    plain(U), plain(U), plain(U), plain(U),
    // 50..: hard
    plain(UR), // UR-L-U
    plain(UR), // UR-R-U-UR
    plain(UR), // UR-R-UL-U
    plain(U),  // U-UL-R-UR
    plain(UR), // UR-U-R-U-R
];

/// One serialized event, in engine units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EncodedEvent {
    pub trigger_type: u8,
    pub checkpoint: u8,
    #[serde(rename = "type")]
    pub kind: u8,
    pub color: u8,
}

impl EncodedEvent {
    /// Build the event for a Tiled object.
    ///
    /// Fails with `UnknownObject` if the object's local gid is outside the trigger table.
    pub fn from_object(object: &TmxObject, first_gid: i32) -> Result<Self> {
        let local = object.gid - first_gid;
        let trigger = usize::try_from(local)
            .ok()
            .and_then(|i| TRIGGER_BY_GID.get(i))
            .ok_or(Error::UnknownObject {
                gid: object.gid,
                local,
                max: TRIGGER_BY_GID.len(),
            })?;
        let gid = local as u8;

        let x = (object.x / OBJECT_SCALE) as u8;
        let y = (object.y / OBJECT_SCALE) as u8;

        let (kind, color) = if gid < SPECIAL_EVENTS {
            (0, 0)
        } else {
            (gid - SPECIAL_EVENTS, Difficulty::from_local_gid(gid) as u8)
        };

        Ok(Self {
            trigger_type: trigger.to_byte(),
            checkpoint: checkpoint(trigger.direction, x, y),
            kind,
            color,
        })
    }

    pub fn direction(&self) -> Option<Direction> {
        Direction::from_u8(self.trigger_type)
    }

    pub fn flags(&self) -> EventFlags {
        EventFlags::from_bits_truncate(self.trigger_type)
    }

    pub fn write(&self, writer: &mut BinaryWriter) {
        writer.write_u8(self.trigger_type);
        writer.write_u8(self.checkpoint);
        writer.write_u8(self.kind);
        writer.write_u8(self.color);
    }
}

/// Progress value along the track for a trigger crossed from `direction`.
pub fn checkpoint(direction: Direction, x: u8, y: u8) -> u8 {
    match direction {
        Direction::Left | Direction::Right => x,
        Direction::Up => y,
        Direction::UpLeft => y.wrapping_add(x),
        Direction::UpRight => y.wrapping_sub(x),
    }
}
