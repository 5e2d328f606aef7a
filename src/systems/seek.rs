//! Seek-and-idle chasing for enemies and the boss.

use hecs::{Entity, World};

use crate::components::{Position, SeekIdle, Speed};
use crate::config::SpawnRules;

/// Move every seeking actor toward the player.
///
/// An actor moves only during the moving part of its [`SeekIdle`] cycle, and
/// only while the player is within the detection range. The step is
/// `speed * dt` along the normalised direction to the player.
pub fn update(world: &mut World, player: Entity, dt: f32, rules: &SpawnRules, tile_size: f32) {
    puffin::profile_function!();

    let Some(target) = world.get::<&Position>(player).ok().map(|p| p.to_vec2()) else {
        return;
    };
    let detect_range = rules.detect_range_tiles * tile_size;

    for (_, (pos, speed, timer)) in world.query_mut::<(&mut Position, &Speed, &mut SeekIdle)>() {
        if !timer.advance(dt) {
            continue;
        }

        let here = pos.to_vec2();
        let offset = target - here;
        let distance = offset.length();
        if distance > detect_range || distance == 0.0 {
            continue;
        }

        let step = offset.normalize() * speed.0 * dt;
        *pos = Position::from_vec2(here + step);
    }
}
