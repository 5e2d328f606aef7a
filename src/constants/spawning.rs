//! Enemy population and placement constants.

/// Room area (in tiles) that buys one point of enemy capacity
pub const TILES_PER_CAPACITY_POINT: i32 = 24;
/// Percent chance of rolling tiers 1..=3; tier 4 takes whatever remains
pub const ENEMY_TIER_CHANCES: [u32; 3] = [30, 30, 20];
/// Capacity points consumed by one enemy of each tier
pub const ENEMY_TIER_COSTS: [i32; 4] = [1, 2, 3, 3];
/// Health of each enemy tier
pub const ENEMY_TIER_HEALTH: [i32; 4] = [15, 25, 35, 35];
/// Movement speed of each enemy tier (pixels per second)
pub const ENEMY_TIER_SPEED: [f32; 4] = [49.0, 36.0, 25.0, 25.0];
/// Tiles kept clear between a spawn point and the room walls
pub const ENEMY_SPAWN_INSET: i32 = 1;
/// Enemies start chasing when the player is this many tiles away
pub const ENEMY_DETECT_RANGE_TILES: f32 = 7.0;
/// Range (seconds) an enemy keeps moving before it idles
pub const ENEMY_MOVE_TIME_SECS: (i32, i32) = (5, 20);
/// Range (seconds) an enemy idles before moving again
pub const ENEMY_IDLE_TIME_SECS: (i32, i32) = (0, 5);

/// Per-level boss health
pub const BOSS_HEALTH: [i32; 3] = [100, 150, 200];
/// Per-level boss speed (pixels per second)
pub const BOSS_SPEED: [f32; 3] = [36.0, 42.25, 49.0];
/// Per-level dungeon sizes (width, height) in tiles
pub const LEVEL_SIZES: [(i32, i32); 3] = [(40, 60), (60, 80), (80, 100)];
