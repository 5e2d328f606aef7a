//! Tunable parameters, loadable from a JSON file.
//!
//! Every field has a default from [`crate::constants`], so a config file only
//! needs to name the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ConfigError, DungeonError};

/// Parameters of the BSP generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    /// Smallest partition extent; also the lower bound of every cut
    pub min_room_size: i32,
    /// Preferred-axis split threshold is `2 * max_room_size`
    pub max_room_size: i32,
    /// Minimum inset and shrink when carving a room
    pub room_margin: i32,
    /// Corridor thickness in tiles
    pub corridor_width: i32,
    /// World pixels per tile
    pub tile_size: f32,
    /// Tile offset of the root partition
    pub origin: (i32, i32),
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            min_room_size: DUNGEON_MIN_ROOM_SIZE,
            max_room_size: DUNGEON_MAX_ROOM_SIZE,
            room_margin: DUNGEON_ROOM_MARGIN,
            corridor_width: DUNGEON_CORRIDOR_WIDTH,
            tile_size: TILE_SIZE,
            origin: DUNGEON_ORIGIN,
        }
    }
}

impl DungeonConfig {
    /// Reject configurations that could never carve a room from a minimum-size leaf.
    pub fn validate(&self) -> Result<(), DungeonError> {
        let invalid = |msg: String| Err(DungeonError::InvalidConfig(msg));

        if self.min_room_size <= 0 {
            return invalid(format!("min_room_size must be positive, got {}", self.min_room_size));
        }
        if self.max_room_size < self.min_room_size {
            return invalid(format!(
                "max_room_size ({}) is smaller than min_room_size ({})",
                self.max_room_size, self.min_room_size
            ));
        }
        if self.max_room_size.checked_mul(2).is_none() {
            return invalid(format!("max_room_size {} is too large", self.max_room_size));
        }
        if self.room_margin < 0 {
            return invalid(format!("room_margin must not be negative, got {}", self.room_margin));
        }
        if self.corridor_width <= 0 {
            return invalid(format!("corridor_width must be positive, got {}", self.corridor_width));
        }
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return invalid(format!("tile_size must be a positive number, got {}", self.tile_size));
        }

        // Offset step draws from [margin, leaf/3]; shrink step from [margin, rest/3]
        let offset_room = self.min_room_size / 3;
        let shrink_room = (self.min_room_size - offset_room) / 3;
        if offset_room < self.room_margin || shrink_room < self.room_margin {
            return invalid(format!(
                "room_margin {} leaves no room to carve inside a {}-tile leaf",
                self.room_margin, self.min_room_size
            ));
        }
        Ok(())
    }

    /// Split thresholds `(2 * min_room_size, 2 * max_room_size)`, saturating.
    pub fn split_thresholds(&self) -> (i32, i32) {
        (
            self.min_room_size.saturating_mul(2),
            self.max_room_size.saturating_mul(2),
        )
    }

    /// Whether a region of this size splits no matter which axis the coin prefers.
    pub fn root_always_splits(&self, width: i32, height: i32) -> bool {
        let (fallback, preferred) = self.split_thresholds();
        let horizontal_first = height > preferred || width > fallback;
        let vertical_first = width > preferred || height > fallback;
        horizontal_first && vertical_first
    }

    /// Reject dungeon sizes that cannot yield at least two carvable leaves.
    pub fn check_dimensions(&self, width: i32, height: i32) -> Result<(), DungeonError> {
        let fits = width >= self.min_room_size && height >= self.min_room_size;
        if fits && self.root_always_splits(width, height) {
            return Ok(());
        }
        Err(DungeonError::DimensionTooSmall {
            width,
            height,
            required_min: self.min_room_size,
            required_split: self.split_thresholds().1,
        })
    }
}

/// Enemy population and behaviour parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnRules {
    pub tiles_per_capacity_point: i32,
    /// Percent chances for tiers 1..=3; tier 4 takes the remainder
    pub tier_chances: [u32; 3],
    pub tier_costs: [i32; 4],
    pub tier_health: [i32; 4],
    pub tier_speed: [f32; 4],
    pub spawn_inset: i32,
    pub detect_range_tiles: f32,
    pub move_time_secs: (i32, i32),
    pub idle_time_secs: (i32, i32),
}

impl Default for SpawnRules {
    fn default() -> Self {
        Self {
            tiles_per_capacity_point: TILES_PER_CAPACITY_POINT,
            tier_chances: ENEMY_TIER_CHANCES,
            tier_costs: ENEMY_TIER_COSTS,
            tier_health: ENEMY_TIER_HEALTH,
            tier_speed: ENEMY_TIER_SPEED,
            spawn_inset: ENEMY_SPAWN_INSET,
            detect_range_tiles: ENEMY_DETECT_RANGE_TILES,
            move_time_secs: ENEMY_MOVE_TIME_SECS,
            idle_time_secs: ENEMY_IDLE_TIME_SECS,
        }
    }
}

impl SpawnRules {
    pub fn validate(&self) -> Result<(), DungeonError> {
        if self.tiles_per_capacity_point <= 0 {
            return Err(DungeonError::InvalidConfig(format!(
                "tiles_per_capacity_point must be positive, got {}",
                self.tiles_per_capacity_point
            )));
        }
        if self.tier_chances.iter().sum::<u32>() > 100 {
            return Err(DungeonError::InvalidConfig(format!(
                "tier_chances {:?} add up to more than 100",
                self.tier_chances
            )));
        }
        // A zero cost would make the population loop run forever
        if self.tier_costs.iter().any(|&c| c <= 0) {
            return Err(DungeonError::InvalidConfig(format!(
                "tier_costs must all be positive, got {:?}",
                self.tier_costs
            )));
        }
        if self.spawn_inset < 0 {
            return Err(DungeonError::InvalidConfig(format!(
                "spawn_inset must not be negative, got {}",
                self.spawn_inset
            )));
        }
        Ok(())
    }
}

/// One dungeon level: its size and its boss
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelPreset {
    pub width: i32,
    pub height: i32,
    pub boss_health: i32,
    pub boss_speed: f32,
}

impl LevelPreset {
    /// The built-in level list
    pub fn defaults() -> Vec<LevelPreset> {
        LEVEL_SIZES
            .iter()
            .zip(BOSS_HEALTH.iter().zip(BOSS_SPEED.iter()))
            .map(|(&(width, height), (&boss_health, &boss_speed))| LevelPreset {
                width,
                height,
                boss_health,
                boss_speed,
            })
            .collect()
    }
}

/// Top-level config file layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub dungeon: DungeonConfig,
    pub spawning: SpawnRules,
    pub levels: Vec<LevelPreset>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dungeon: DungeonConfig::default(),
            spawning: SpawnRules::default(),
            levels: LevelPreset::defaults(),
        }
    }
}

impl GameConfig {
    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&json_str).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON config held in memory
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse {
                path: "<inline>".into(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DungeonError> {
        self.dungeon.validate()?;
        self.spawning.validate()?;
        for level in &self.levels {
            self.dungeon.check_dimensions(level.width, level.height)?;
        }
        Ok(())
    }
}
