//! Dungeon generation constants.

/// Smallest extent (in tiles) a BSP partition may have on either axis
pub const DUNGEON_MIN_ROOM_SIZE: i32 = 14;
/// A partition is split along its preferred axis only when that axis exceeds twice this
pub const DUNGEON_MAX_ROOM_SIZE: i32 = 16;
/// Minimum inset/shrink applied when carving a room out of its partition
pub const DUNGEON_ROOM_MARGIN: i32 = 2;
/// Thickness of a corridor strip, in tiles
pub const DUNGEON_CORRIDOR_WIDTH: i32 = 2;
/// Tile-grid offset of the root partition (leaves a padded background around the map)
pub const DUNGEON_ORIGIN: (i32, i32) = (20, 20);
/// Size of one tile in world pixels
pub const TILE_SIZE: f32 = 16.0;
