//! Actor body sizes used for collision sampling.

/// Player sprite width in pixels
pub const PLAYER_BODY_WIDTH: f32 = 16.0;
/// Player sprite height in pixels
pub const PLAYER_BODY_HEIGHT: f32 = 28.0;
/// Regular enemy sprite width in pixels
pub const ENEMY_BODY_WIDTH: f32 = 16.0;
/// Regular enemy sprite height in pixels
pub const ENEMY_BODY_HEIGHT: f32 = 16.0;
/// Boss sprite width in pixels
pub const BOSS_BODY_WIDTH: f32 = 32.0;
/// Boss sprite height in pixels
pub const BOSS_BODY_HEIGHT: f32 = 36.0;

/// Player's starting health
pub const PLAYER_STARTING_HEALTH: i32 = 6;
/// Player movement speed in pixels per second
pub const PLAYER_SPEED: f32 = 64.0;

/// Fixed simulation step used by the headless runner (seconds)
pub const SIMULATION_DT: f32 = 1.0 / 60.0;
/// Default number of headless ticks per level
pub const SIMULATION_DEFAULT_TICKS: u32 = 120;
