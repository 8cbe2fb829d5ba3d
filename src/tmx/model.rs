/// A Tiled object from the object layer, in Tiled units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TmxObject {
    pub gid: i32,
    pub x: i32,
    pub y: i32,
}

/// The subset of a TMX map the engine needs
#[derive(Debug, Clone, Default)]
pub struct TmxMap {
    pub first_tile_gid: i32,
    pub first_object_gid: i32,
    pub width: usize,
    pub height: usize,
    /// Row-major tile gids, truncated to one byte
    pub tiles: Vec<u8>,
    pub objects: Vec<TmxObject>,
    /// Tiles whose gid did not fit in a byte
    pub overflowed_tiles: usize,
}
