//! Tuning constants organized by domain.
//!
//! These are the defaults behind [`crate::config`]; a loaded config may override them.

mod collision;
mod dungeon;
mod spawning;

pub use collision::*;
pub use dungeon::*;
pub use spawning::*;
