//! Procedural BSP dungeons with rectangle-based collision containment.
//!
//! | module | role |
//! |---|---|
//! | [`bsp`] | recursive partition tree, room carving, corridor collection |
//! | [`dungeon_gen`] | rooms, corridors, role assignment, the generator |
//! | [`spatial_index`] | traversable-region index and actor correction |
//! | [`geometry`] | tile and world rectangles, clamping |
//! | [`spawning`], [`systems`], [`level`] | hecs actors driven by a generated dungeon |
//! | [`grid`] | ASCII debug rendering |

pub mod bsp;
pub mod components;
pub mod config;
pub mod constants;
pub mod dungeon_gen;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod level;
pub mod rng;
pub mod spatial_index;
pub mod spawning;
pub mod systems;

pub use config::{DungeonConfig, GameConfig, LevelPreset, SpawnRules};
pub use dungeon_gen::{Corridor, CorridorOrientation, Dungeon, DungeonGenerator, Room, RoomId, RoomRole};
pub use error::{CollisionError, ConfigError, DungeonError, LevelError};
pub use geometry::{Rect, WorldRect};
pub use spatial_index::SpatialIndex;
