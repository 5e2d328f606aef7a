//! Error kinds for generation, collision and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a dungeon.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DungeonError {
    /// The requested area can never produce a split root or a carvable room.
    #[error(
        "dungeon of {width}x{height} tiles is too small: each side needs at least {required_min} \
         tiles and the root must be splittable (one side above {required_split})"
    )]
    DimensionTooSmall {
        width: i32,
        height: i32,
        required_min: i32,
        required_split: i32,
    },
    /// The generator configuration is self-contradictory.
    #[error("invalid dungeon configuration: {0}")]
    InvalidConfig(String),
}

/// Errors raised by the spatial index.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CollisionError {
    /// `resolve` was called before any dungeon geometry was loaded.
    #[error("spatial index queried before load()")]
    IndexNotLoaded,
    /// The index was loaded with zero rooms and zero corridors.
    #[error("spatial index holds no traversable regions")]
    NoTraversableRegions,
}

/// Errors raised while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Invalid(#[from] DungeonError),
}

/// Errors raised while building or ticking a level.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error(transparent)]
    Dungeon(#[from] DungeonError),
    #[error(transparent)]
    Collision(#[from] CollisionError),
}
