//! Data-driven actor placement.
//!
//! Placement is split in two: [`plan_spawns`] decides where everything goes
//! from the dungeon layout alone, and [`spawn_all`] turns a plan into hecs
//! entities. Plans can be inspected and tested without a world.

use glam::Vec2;
use hecs::{Entity, World};
use log::debug;

use crate::components::{Body, Boss, Chest, Enemy, Health, Player, Position, SeekIdle, Speed};
use crate::config::{LevelPreset, SpawnRules};
use crate::constants::*;
use crate::dungeon_gen::{Dungeon, Room};
use crate::rng::RandomRange;

/// A single enemy placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySpawn {
    /// 1-based tier
    pub tier: u8,
    pub position: Vec2,
}

/// Where every actor of a level starts, in world pixels
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnPlan {
    pub player: Vec2,
    pub boss: Vec2,
    pub enemies: Vec<EnemySpawn>,
    pub chests: Vec<Vec2>,
}

/// Random tile inside `room`, kept `inset` tiles off the top/left walls, scaled to pixels
fn interior_point<R: RandomRange + ?Sized>(
    room: &Room,
    inset: i32,
    tile_size: f32,
    rng: &mut R,
) -> Vec2 {
    let x = rng.range(room.x() + inset, room.x() + room.width() - inset);
    let y = rng.range(room.y() + inset, room.y() + room.height() - inset);
    Vec2::new(x as f32 * tile_size, y as f32 * tile_size)
}

/// Roll a 1-based enemy tier against the cumulative tier chances.
pub fn roll_tier<R: RandomRange + ?Sized>(rules: &SpawnRules, rng: &mut R) -> u8 {
    let roll = rng.range(0, 100) as u32;
    let mut threshold = 0;
    for (i, chance) in rules.tier_chances.iter().enumerate() {
        threshold += chance;
        if roll < threshold {
            return i as u8 + 1;
        }
    }
    rules.tier_chances.len() as u8 + 1
}

/// Enemy capacity of a room: one point per `tiles_per_capacity_point` tiles of floor
pub fn room_capacity(room: &Room, rules: &SpawnRules) -> i32 {
    room.rect().area() / rules.tiles_per_capacity_point
}

/// Decide where the player, the boss, the enemies and the chests go.
pub fn plan_spawns<R: RandomRange + ?Sized>(
    dungeon: &Dungeon,
    rules: &SpawnRules,
    tile_size: f32,
    rng: &mut R,
) -> SpawnPlan {
    puffin::profile_function!();

    let spawn_id = dungeon.spawn_room().id();
    let boss_room = dungeon.boss_room();

    let boss = interior_point(boss_room, rules.spawn_inset, tile_size, rng);

    let mut enemies = Vec::new();
    for room in dungeon.rooms() {
        if room.id() == spawn_id || room.id() == boss_room.id() {
            continue;
        }

        let capacity = room_capacity(room, rules);
        // Matches the population loop: stops only once the counter passes capacity
        let mut counter = 0;
        while counter <= capacity {
            let tier = roll_tier(rules, rng);
            counter += rules.tier_costs[usize::from(tier - 1)];
            let position = interior_point(room, rules.spawn_inset, tile_size, rng);
            enemies.push(EnemySpawn { tier, position });
        }
    }

    let chests = dungeon
        .chest_rooms()
        .iter()
        .map(|room| room.world_center(tile_size))
        .collect();

    debug!(
        "Planned {} enemies and {} chests",
        enemies.len(),
        dungeon.chest_rooms().len()
    );

    SpawnPlan {
        player: dungeon.starting_world_position(),
        boss,
        enemies,
        chests,
    }
}

fn random_seek_idle<R: RandomRange + ?Sized>(rules: &SpawnRules, rng: &mut R) -> SeekIdle {
    let (move_lo, move_hi) = rules.move_time_secs;
    let (idle_lo, idle_hi) = rules.idle_time_secs;
    SeekIdle::new(
        rng.range(move_lo, move_hi) as f32,
        rng.range(idle_lo, idle_hi) as f32,
    )
}

/// Create every planned actor in `world`. Returns the player entity.
pub fn spawn_all<R: RandomRange + ?Sized>(
    world: &mut World,
    plan: &SpawnPlan,
    rules: &SpawnRules,
    preset: &LevelPreset,
    rng: &mut R,
) -> Entity {
    let player = world.spawn((
        Position::from_vec2(plan.player),
        Body::new(PLAYER_BODY_WIDTH, PLAYER_BODY_HEIGHT),
        Player,
        Health::new(PLAYER_STARTING_HEALTH),
        Speed(PLAYER_SPEED),
    ));

    world.spawn((
        Position::from_vec2(plan.boss),
        Body::new(BOSS_BODY_WIDTH, BOSS_BODY_HEIGHT),
        Boss,
        Health::new(preset.boss_health),
        Speed(preset.boss_speed),
        random_seek_idle(rules, rng),
    ));

    for spawn in &plan.enemies {
        let tier_index = usize::from(spawn.tier - 1);
        world.spawn((
            Position::from_vec2(spawn.position),
            Body::new(ENEMY_BODY_WIDTH, ENEMY_BODY_HEIGHT),
            Enemy { tier: spawn.tier },
            Health::new(rules.tier_health[tier_index]),
            Speed(rules.tier_speed[tier_index]),
            random_seek_idle(rules, rng),
        ));
    }

    for &chest in &plan.chests {
        // Chests never move, so they carry no Body and are left out of confinement
        world.spawn((Position::from_vec2(chest), Chest));
    }

    player
}
