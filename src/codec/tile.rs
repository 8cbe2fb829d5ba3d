//! Tile index remapping.
//!
//! The engine tileset holds `MAX_TILES` plain tiles followed by a mirrored
//! strip, 8 tiles per row. Mirrored tiles are stored with their columns
//! reversed and the high bit set.

use super::types::MAX_TILES;

/// Encode a raw tile gid from the tile layer into its engine byte.
pub fn tile_value(raw: u8, first_gid: i32) -> u8 {
    let local = raw as i32 - first_gid;

    if local < MAX_TILES {
        return local as u8;
    }

    // Mirrored
    let m = local - MAX_TILES;
    let row = m / 8;
    let col = m % 8;
    (8 * row + (7 - col) + 128) as u8
}

/// Encode a whole row-major tile grid.
pub fn encode_tiles(tiles: &[u8], first_gid: i32) -> Vec<u8> {
    tiles.iter().map(|&raw| tile_value(raw, first_gid)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_region() {
        for k in 0..104u8 {
            assert_eq!(tile_value(k + 1, 1), k);
        }
    }

    #[test]
    fn test_mirrored_first_row() {
        // local 104: row 0, col 0 lands in the last column
        assert_eq!(tile_value(105, 1), 135);
        assert_eq!(tile_value(106, 1), 134);
        // local 111: row 0, col 7 lands in the first column
        assert_eq!(tile_value(112, 1), 128);
    }

    #[test]
    fn test_mirrored_row_is_reversed() {
        let row: Vec<u8> = (105..113).map(|raw| tile_value(raw, 1)).collect();
        assert_eq!(row, vec![135, 134, 133, 132, 131, 130, 129, 128]);
    }

    #[test]
    fn test_mirrored_second_row() {
        // local 112: row 1, col 0
        assert_eq!(tile_value(113, 1), 8 + 7 + 128);
        // local 119: row 1, col 7
        assert_eq!(tile_value(120, 1), 8 + 128);
    }

    #[test]
    fn test_empty_tile_wraps() {
        assert_eq!(tile_value(0, 1), 255);
    }

    #[test]
    fn test_encode_tiles() {
        assert_eq!(encode_tiles(&[1, 2, 105], 1), vec![0, 1, 135]);
    }
}
