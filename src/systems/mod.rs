//! Per-tick systems, run in order by [`crate::level::Level::tick`]:
//! - `seek`: enemies and the boss chase the player
//! - `collision`: everything with a body is kept inside rooms and corridors

pub mod collision;
pub mod seek;

pub use collision::confine_actors;
