use bitflags::bitflags;

/// Required map width in tiles
pub const MAP_WIDTH: usize = 32;
/// Required map height in tiles
pub const MAP_HEIGHT: usize = 32;
/// Number of non mirrored tiles
pub const MAX_TILES: i32 = 104;
/// Maximum number of events per map
pub const MAX_EVENTS: usize = 32;
/// Tiled object coordinates per engine grid unit
pub const OBJECT_SCALE: i32 = 2;
/// Size of a serialized event record
pub const EVENT_RECORD_SIZE: usize = 4;

/// Approach direction of an event trigger (low 3 bits of the trigger byte)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Left = 1,
    UpLeft = 2,
    Up = 3,
    UpRight = 4,
    Right = 5,
}

impl Direction {
    pub const MASK: u8 = 0x07;

    pub fn from_u8(v: u8) -> Option<Self> {
        match v & Self::MASK {
            1 => Some(Self::Left),
            2 => Some(Self::UpLeft),
            3 => Some(Self::Up),
            4 => Some(Self::UpRight),
            5 => Some(Self::Right),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "L",
            Self::UpLeft => "UL",
            Self::Up => "U",
            Self::UpRight => "UR",
            Self::Right => "R",
        }
    }
}

bitflags! {
    /// Special event markers (high bits of the trigger byte)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EventFlags: u8 {
        const FINISH = 0x80;
        const JUMP = 0x40;
        const SKID = 0x20;
    }
}

/// Checkpoint colour, by difficulty group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Difficulty {
    Narrow = 0,
    VeryEasy = 1,
    Easy = 2,
    Medium = 3,
    Hard = 4,
}

impl Difficulty {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Narrow),
            1 => Some(Self::VeryEasy),
            2 => Some(Self::Easy),
            3 => Some(Self::Medium),
            4 => Some(Self::Hard),
            _ => None,
        }
    }

    /// Difficulty group of an ordinary checkpoint's local gid (7 and above)
    pub fn from_local_gid(gid: u8) -> Self {
        match gid {
            0..=16 => Self::Narrow,
            17..=36 => Self::VeryEasy,
            37..=40 => Self::Easy,
            41..=49 => Self::Medium,
            _ => Self::Hard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_trigger_byte() {
        assert_eq!(Direction::from_u8(0x83), Some(Direction::Up));
        assert_eq!(Direction::from_u8(0x41), Some(Direction::Left));
        assert_eq!(Direction::from_u8(0x04), Some(Direction::UpRight));
        assert_eq!(Direction::from_u8(0x00), None);
        assert_eq!(Direction::from_u8(0x06), None);
    }

    #[test]
    fn test_difficulty_ranges() {
        assert_eq!(Difficulty::from_local_gid(7), Difficulty::Narrow);
        assert_eq!(Difficulty::from_local_gid(16), Difficulty::Narrow);
        assert_eq!(Difficulty::from_local_gid(17), Difficulty::VeryEasy);
        assert_eq!(Difficulty::from_local_gid(36), Difficulty::VeryEasy);
        assert_eq!(Difficulty::from_local_gid(37), Difficulty::Easy);
        assert_eq!(Difficulty::from_local_gid(41), Difficulty::Medium);
        assert_eq!(Difficulty::from_local_gid(49), Difficulty::Medium);
        assert_eq!(Difficulty::from_local_gid(50), Difficulty::Hard);
        assert_eq!(Difficulty::from_local_gid(54), Difficulty::Hard);
    }
}
