//! Traversable-region index for keeping actors inside rooms and corridors.
//!
//! Holds the world-space rectangles of every room and corridor of the current
//! dungeon. It is rebuilt wholesale whenever a new dungeon is generated, never
//! patched.

use glam::Vec2;
use log::{debug, trace};

use crate::dungeon_gen::{Corridor, Dungeon, Room};
use crate::error::CollisionError;
use crate::geometry::{nearest_clamped, WorldRect};

/// One of the four sample points of an actor's footprint, in test order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FootprintPoint {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl FootprintPoint {
    pub const ALL: [FootprintPoint; 4] = [
        FootprintPoint::TopLeft,
        FootprintPoint::TopRight,
        FootprintPoint::BottomLeft,
        FootprintPoint::BottomRight,
    ];
}

/// Which traversable rectangle a correction snapped to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Room(usize),
    Corridor(usize),
}

/// Outcome of a containment query
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolution {
    /// Every footprint point is inside some region; position unchanged
    Contained(Vec2),
    /// The actor was pulled back into `region`
    Corrected {
        position: Vec2,
        trigger: FootprintPoint,
        region: Region,
    },
    /// A footprint point is outside, but the nearest clamp lands on the current
    /// position (the actor is larger than every region it could snap to)
    Unchanged { position: Vec2, trigger: FootprintPoint },
}

impl Resolution {
    pub fn position(&self) -> Vec2 {
        match *self {
            Resolution::Contained(position) => position,
            Resolution::Corrected { position, .. } => position,
            Resolution::Unchanged { position, .. } => position,
        }
    }

    pub fn is_corrected(&self) -> bool {
        matches!(self, Resolution::Corrected { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpatialIndex {
    /// Room rectangles in world pixels, in room order
    rooms: Vec<WorldRect>,
    /// Corridor rectangles in world pixels, in corridor order
    corridors: Vec<WorldRect>,
    loaded: bool,
}

impl SpatialIndex {
    /// An unloaded index; every query fails until [`load`](Self::load) is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a generated dungeon.
    pub fn from_dungeon(dungeon: &Dungeon) -> Self {
        let mut index = Self::new();
        index.rebuild_from_dungeon(dungeon);
        index
    }

    /// Replace the region set. Tile rectangles are scaled by `tile_size`.
    pub fn load(&mut self, rooms: &[Room], corridors: &[Corridor], tile_size: f32) {
        self.load_regions(
            rooms.iter().map(|room| room.rect().to_world(tile_size)).collect(),
            corridors.iter().map(|c| c.rect().to_world(tile_size)).collect(),
        );
    }

    /// Replace the region set with rectangles already in world pixels.
    pub fn load_regions(&mut self, rooms: Vec<WorldRect>, corridors: Vec<WorldRect>) {
        self.rooms = rooms;
        self.corridors = corridors;
        self.loaded = true;

        debug!(
            "Loaded spatial index: {} rooms, {} corridors",
            self.rooms.len(),
            self.corridors.len()
        );
    }

    /// Reload in place from a dungeon, dropping the previous region set.
    pub fn rebuild_from_dungeon(&mut self, dungeon: &Dungeon) {
        self.load(dungeon.rooms(), dungeon.corridors(), dungeon.tile_size());
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn rooms(&self) -> &[WorldRect] {
        &self.rooms
    }

    pub fn corridors(&self) -> &[WorldRect] {
        &self.corridors
    }

    fn ensure_usable(&self) -> Result<(), CollisionError> {
        if !self.loaded {
            return Err(CollisionError::IndexNotLoaded);
        }
        if self.rooms.is_empty() && self.corridors.is_empty() {
            return Err(CollisionError::NoTraversableRegions);
        }
        Ok(())
    }

    /// Whether a point lies in any region, rooms checked before corridors.
    pub fn is_traversable(&self, point: Vec2) -> bool {
        self.rooms
            .iter()
            .chain(self.corridors.iter())
            .any(|rect| rect.contains(point))
    }

    /// First footprint point of `bounds` that is outside every region, if any.
    pub fn check(&self, bounds: &WorldRect) -> Result<Option<FootprintPoint>, CollisionError> {
        self.ensure_usable()?;
        let points = bounds.footprint_points();
        Ok(FootprintPoint::ALL
            .into_iter()
            .zip(points)
            .find(|(_, point)| !self.is_traversable(*point))
            .map(|(which, _)| which))
    }

    /// Keep an actor at `position` with box `bounds` inside the traversable area.
    ///
    /// If any footprint point is outside, the actor snaps to the clamped
    /// position of whichever room or corridor is nearest.
    pub fn resolve_detailed(
        &self,
        position: Vec2,
        bounds: &WorldRect,
    ) -> Result<Resolution, CollisionError> {
        puffin::profile_function!();

        let Some(trigger) = self.check(bounds)? else {
            return Ok(Resolution::Contained(position));
        };

        let candidates = self.rooms.iter().chain(self.corridors.iter());
        let (i, corrected) = nearest_clamped(position, bounds, candidates)
            .ok_or(CollisionError::NoTraversableRegions)?;
        if corrected == position {
            trace!("Actor at {position} cannot be moved further inside ({trigger:?} is outside)");
            return Ok(Resolution::Unchanged { position, trigger });
        }

        let region = if i < self.rooms.len() {
            Region::Room(i)
        } else {
            Region::Corridor(i - self.rooms.len())
        };

        trace!("Corrected actor {position} -> {corrected} via {region:?} ({trigger:?} was outside)");

        Ok(Resolution::Corrected {
            position: corrected,
            trigger,
            region,
        })
    }

    /// Like [`resolve_detailed`](Self::resolve_detailed), returning only the position.
    pub fn resolve(&self, position: Vec2, bounds: &WorldRect) -> Result<Vec2, CollisionError> {
        self.resolve_detailed(position, bounds).map(|r| r.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DungeonConfig;
    use crate::dungeon_gen::{DungeonGenerator, RoomId};
    use crate::geometry::Rect;

    /// Box of the given size anchored bottom-centre at `pos`
    fn actor_box(pos: Vec2, w: f32, h: f32) -> WorldRect {
        WorldRect::new(pos.x - w / 2.0, pos.y - h, w, h)
    }

    fn single_room_index() -> SpatialIndex {
        let mut index = SpatialIndex::new();
        // 100x100 px at tile size 1
        index.load(&[Room::new(RoomId(0), Rect::new(0, 0, 100, 100))], &[], 1.0);
        index
    }

    #[test]
    fn test_unloaded_index_rejects_queries() {
        let index = SpatialIndex::new();
        let bounds = WorldRect::new(0.0, 0.0, 4.0, 4.0);
        assert_eq!(index.check(&bounds), Err(CollisionError::IndexNotLoaded));
        assert_eq!(
            index.resolve(Vec2::ZERO, &bounds),
            Err(CollisionError::IndexNotLoaded)
        );
    }

    #[test]
    fn test_empty_loaded_index_rejected() {
        let mut index = SpatialIndex::new();
        index.load(&[], &[], 16.0);
        assert!(index.is_loaded());
        let bounds = WorldRect::new(0.0, 0.0, 4.0, 4.0);
        assert_eq!(
            index.resolve(Vec2::ZERO, &bounds),
            Err(CollisionError::NoTraversableRegions)
        );
    }

    #[test]
    fn test_contained_actor_is_untouched() {
        let index = single_room_index();
        let pos = Vec2::new(50.0, 50.0);
        let bounds = actor_box(pos, 10.0, 10.0);
        assert_eq!(index.check(&bounds), Ok(None));
        assert_eq!(
            index.resolve_detailed(pos, &bounds),
            Ok(Resolution::Contained(pos))
        );
    }

    #[test]
    fn test_outside_right_clamps_to_edge() {
        let index = single_room_index();
        let pos = Vec2::new(150.0, 50.0);
        let bounds = WorldRect::new(145.0, 45.0, 10.0, 10.0);
        assert_eq!(index.resolve(pos, &bounds), Ok(Vec2::new(95.0, 50.0)));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let index = single_room_index();
        let first = index
            .resolve(Vec2::new(150.0, 50.0), &WorldRect::new(145.0, 45.0, 10.0, 10.0))
            .unwrap();
        let bounds = actor_box(first, 10.0, 10.0);
        assert_eq!(index.resolve(first, &bounds), Ok(first));
    }

    #[test]
    fn test_first_failing_point_is_reported() {
        let index = single_room_index();
        // Straddles the left wall only
        let left = actor_box(Vec2::new(2.0, 50.0), 10.0, 10.0);
        assert_eq!(index.check(&left), Ok(Some(FootprintPoint::TopLeft)));
        // Straddles the right wall only
        let right = actor_box(Vec2::new(98.0, 50.0), 10.0, 10.0);
        assert_eq!(index.check(&right), Ok(Some(FootprintPoint::TopRight)));
        // Feet below the floor, mid band still inside
        let low = WorldRect::new(40.0, 95.0, 10.0, 10.0);
        assert_eq!(index.check(&low), Ok(Some(FootprintPoint::BottomLeft)));
    }

    #[test]
    fn test_upper_half_may_overlap_walls() {
        let index = single_room_index();
        // Top edge above the room, mid band inside
        let bounds = WorldRect::new(40.0, -4.0, 10.0, 12.0);
        assert_eq!(index.check(&bounds), Ok(None));
    }

    #[test]
    fn test_corridor_joins_rooms() {
        let mut index = SpatialIndex::new();
        let rooms = [
            Room::new(RoomId(0), Rect::new(0, 0, 10, 10)),
            Room::new(RoomId(1), Rect::new(20, 0, 10, 10)),
        ];
        let corridors = [Corridor::between((5, 4), (25, 4), 2)];
        index.load(&rooms, &corridors, 1.0);

        // Standing in the corridor between the rooms
        let pos = Vec2::new(15.0, 6.0);
        let bounds = actor_box(pos, 2.0, 2.0);
        assert_eq!(index.check(&bounds), Ok(None));
    }

    #[test]
    fn test_nearest_region_may_be_a_corridor() {
        let mut index = SpatialIndex::new();
        let rooms = [
            Room::new(RoomId(0), Rect::new(0, 0, 10, 10)),
            Room::new(RoomId(1), Rect::new(40, 0, 10, 10)),
        ];
        let corridors = [Corridor::between((5, 4), (45, 4), 2)];
        index.load(&rooms, &corridors, 1.0);

        // Just below the corridor, far from both rooms
        let pos = Vec2::new(25.0, 9.0);
        let bounds = actor_box(pos, 1.0, 2.0);
        let resolution = index.resolve_detailed(pos, &bounds).unwrap();
        match resolution {
            Resolution::Corrected { position, region, .. } => {
                assert_eq!(region, Region::Corridor(0));
                assert_eq!(position, Vec2::new(25.0, 6.0));
            }
            other => panic!("expected correction, got {other:?}"),
        }
    }

    #[test]
    fn test_oversized_actor_is_reported_unchanged() {
        let mut index = SpatialIndex::new();
        index.load_regions(vec![WorldRect::new(0.0, 0.0, 10.0, 100.0)], Vec::new());

        // 20 px wide in a 10 px strip: the x clamp pins it to the strip's left bound
        let pos = Vec2::new(10.0, 50.0);
        let bounds = actor_box(pos, 20.0, 10.0);
        let resolution = index.resolve_detailed(pos, &bounds).unwrap();
        assert_eq!(
            resolution,
            Resolution::Unchanged {
                position: pos,
                trigger: FootprintPoint::TopRight,
            }
        );
        assert!(!resolution.is_corrected());
        assert_eq!(index.resolve(pos, &bounds), Ok(pos));
    }

    #[test]
    fn test_reload_replaces_regions() {
        let mut index = single_room_index();
        index.load(&[Room::new(RoomId(0), Rect::new(200, 200, 10, 10))], &[], 1.0);
        assert_eq!(index.rooms().len(), 1);
        assert!(!index.is_traversable(Vec2::new(50.0, 50.0)));
        assert!(index.is_traversable(Vec2::new(205.0, 205.0)));
    }

    #[test]
    fn test_spawn_position_is_contained_in_generated_dungeons() {
        for seed in 0..50 {
            let mut gen = DungeonGenerator::with_seed(DungeonConfig::default(), seed);
            let dungeon = gen.generate(40, 60).unwrap();
            let index = SpatialIndex::from_dungeon(dungeon);
            let start = dungeon.starting_world_position();
            let bounds = actor_box(start, 16.0, 28.0);
            assert_eq!(index.resolve(start, &bounds), Ok(start), "seed {seed}");
        }
    }
}
