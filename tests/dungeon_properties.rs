//! Integration tests for the generation → collision pipeline.
//!
//! Exercises: DungeonGenerator → Dungeon → SpatialIndex → Level
//!
//! Everything runs headless through the public API.

use bsp_crawler::bsp::BspNode;
use bsp_crawler::config::{DungeonConfig, LevelPreset, SpawnRules};
use bsp_crawler::dungeon_gen::DungeonGenerator;
use bsp_crawler::error::{CollisionError, DungeonError};
use bsp_crawler::geometry::WorldRect;
use bsp_crawler::level::Level;
use bsp_crawler::spatial_index::SpatialIndex;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Helpers ────────────────────────────────────────────────────────────

const SIZES: [(i32, i32); 4] = [(40, 60), (60, 80), (80, 100), (30, 30)];

fn generator(seed: u64) -> DungeonGenerator {
    DungeonGenerator::with_seed(DungeonConfig::default(), seed)
}

fn assert_rooms_inside_partitions(node: &BspNode) {
    if let Some(room) = node.room() {
        let region = node.region();
        let rect = room.rect();
        assert!(rect.x >= region.x && rect.right() <= region.right());
        assert!(rect.y >= region.y && rect.bottom() <= region.bottom());
    }
    if let Some((left, right)) = node.children() {
        assert_rooms_inside_partitions(left);
        assert_rooms_inside_partitions(right);
    }
}

// ── Generation ─────────────────────────────────────────────────────────

#[test]
fn room_and_corridor_counts_follow_the_tree() {
    for seed in 0..100 {
        for (w, h) in SIZES {
            let mut gen = generator(seed);
            let dungeon = gen.generate(w, h).unwrap();
            let tree = dungeon.tree();
            assert_eq!(dungeon.rooms().len(), tree.leaf_count());
            assert_eq!(dungeon.corridors().len(), tree.internal_count());
            assert_eq!(dungeon.corridors().len(), dungeon.rooms().len() - 1);
        }
    }
}

#[test]
fn spawn_never_equals_boss() {
    for seed in 0..300 {
        for (w, h) in SIZES {
            let mut gen = generator(seed);
            let dungeon = gen.generate(w, h).unwrap();
            assert_ne!(dungeon.spawn_room().id(), dungeon.boss_room().id());
        }
    }
}

#[test]
fn rooms_stay_inside_their_partitions() {
    for seed in 0..100 {
        let mut gen = generator(seed);
        let dungeon = gen.generate(80, 100).unwrap();
        assert_rooms_inside_partitions(dungeon.tree());
    }
}

#[test]
fn chest_rooms_are_distinct_from_spawn_and_boss() {
    for seed in 0..300 {
        let mut gen = generator(seed);
        let dungeon = gen.generate(40, 60).unwrap();
        let chests = dungeon.chest_rooms();
        assert!(chests.len() <= 2);
        for chest in chests {
            assert_ne!(chest.id(), dungeon.spawn_room().id());
            assert_ne!(chest.id(), dungeon.boss_room().id());
        }
    }
}

#[test]
fn smallest_level_always_terminates_with_rooms() {
    for seed in 0..500 {
        let mut gen = generator(seed);
        let dungeon = gen.generate(40, 60).unwrap();
        assert!(!dungeon.rooms().is_empty());
    }
}

#[test]
fn too_small_dungeon_is_rejected_up_front() {
    let mut gen = generator(0);
    let err = gen.generate(13, 100).unwrap_err();
    assert!(matches!(err, DungeonError::DimensionTooSmall { width: 13, .. }));
}

#[test]
fn regeneration_leaves_no_stale_layout() {
    let mut gen = generator(99);
    gen.generate(80, 100).unwrap();
    let second_bounds = gen.generate(40, 60).unwrap().bounds();

    assert_eq!(gen.rooms().len(), gen.dungeon().unwrap().tree().leaf_count());
    for room in gen.rooms() {
        assert!(second_bounds.contains_rect(&room.rect()));
    }
    for corridor in gen.corridors() {
        assert!(second_bounds.contains_rect(&corridor.rect()));
    }
}

// ── Collision ──────────────────────────────────────────────────────────

#[test]
fn resolve_before_load_is_an_error() {
    let index = SpatialIndex::new();
    let bounds = WorldRect::new(0.0, 0.0, 10.0, 10.0);
    assert_eq!(
        index.resolve(Vec2::new(5.0, 10.0), &bounds),
        Err(CollisionError::IndexNotLoaded)
    );
}

#[test]
fn resolve_clamps_back_inside_single_region() {
    let mut index = SpatialIndex::new();
    index.load_regions(vec![WorldRect::new(0.0, 0.0, 100.0, 100.0)], Vec::new());
    let bounds = WorldRect::new(145.0, 45.0, 10.0, 10.0);
    assert_eq!(
        index.resolve(Vec2::new(150.0, 50.0), &bounds),
        Ok(Vec2::new(95.0, 50.0))
    );
}

#[test]
fn resolve_leaves_contained_actors_alone() {
    for seed in 0..30 {
        let mut gen = generator(seed);
        let dungeon = gen.generate(60, 80).unwrap();
        let index = SpatialIndex::from_dungeon(dungeon);
        for room in dungeon.rooms() {
            let centre = room.world_center(dungeon.tile_size());
            let bounds = WorldRect::new(centre.x - 8.0, centre.y - 16.0, 16.0, 16.0);
            assert_eq!(index.resolve(centre, &bounds), Ok(centre));
        }
    }
}

// ── Full level ─────────────────────────────────────────────────────────

#[test]
fn every_default_level_builds_and_ticks() {
    let mut gen = generator(2024);
    let mut rng = StdRng::seed_from_u64(2024);
    for preset in LevelPreset::defaults() {
        let mut level = Level::build(&mut gen, &preset, &SpawnRules::default(), &mut rng).unwrap();
        for _ in 0..60 {
            level.tick(1.0 / 60.0).unwrap();
        }
    }
}
