//! One playable level: the dungeon's collision index plus its actor world.
//!
//! A level is built from a [`DungeonGenerator`] and owns everything derived
//! from the generated layout. Rebuilding replaces all of it at once, so no
//! actor or region from a previous layout survives.

use hecs::{Entity, World};
use log::info;

use crate::config::{LevelPreset, SpawnRules};
use crate::dungeon_gen::DungeonGenerator;
use crate::error::LevelError;
use crate::rng::RandomRange;
use crate::spatial_index::SpatialIndex;
use crate::spawning::{self, SpawnPlan};
use crate::systems;

pub struct Level {
    pub world: World,
    pub player: Entity,
    pub index: SpatialIndex,
    pub plan: SpawnPlan,
    preset: LevelPreset,
    rules: SpawnRules,
    tile_size: f32,
}

impl Level {
    /// Generate a dungeon for `preset` and populate a fresh world from it.
    pub fn build<R: RandomRange + ?Sized>(
        generator: &mut DungeonGenerator,
        preset: &LevelPreset,
        rules: &SpawnRules,
        rng: &mut R,
    ) -> Result<Self, LevelError> {
        rules.validate()?;
        let tile_size = generator.config().tile_size;
        let dungeon = generator.generate(preset.width, preset.height)?;

        let index = SpatialIndex::from_dungeon(dungeon);
        let plan = spawning::plan_spawns(dungeon, rules, tile_size, rng);

        let mut world = World::new();
        let player = spawning::spawn_all(&mut world, &plan, rules, preset, rng);

        info!(
            "Level {}x{} ready: {} enemies, {} chests",
            preset.width,
            preset.height,
            plan.enemies.len(),
            plan.chests.len()
        );

        Ok(Self {
            world,
            player,
            index,
            plan,
            preset: preset.clone(),
            rules: rules.clone(),
            tile_size,
        })
    }

    /// Regenerate with the same preset, discarding every entity and region.
    pub fn rebuild<R: RandomRange + ?Sized>(
        &mut self,
        generator: &mut DungeonGenerator,
        rng: &mut R,
    ) -> Result<(), LevelError> {
        *self = Self::build(generator, &self.preset, &self.rules, rng)?;
        Ok(())
    }

    pub fn preset(&self) -> &LevelPreset {
        &self.preset
    }

    /// Advance the simulation: chase first, then containment.
    ///
    /// Returns how many actors had to be pulled back inside.
    pub fn tick(&mut self, dt: f32) -> Result<usize, LevelError> {
        puffin::profile_function!();

        systems::seek::update(&mut self.world, self.player, dt, &self.rules, self.tile_size);
        let corrected = systems::confine_actors(&mut self.world, &self.index)?;
        Ok(corrected)
    }
}
