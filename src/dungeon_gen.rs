//! BSP dungeon generation: rooms, corridors, and the spawn/boss/chest roles.

use glam::Vec2;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::bsp::BspNode;
use crate::config::DungeonConfig;
use crate::error::DungeonError;
use crate::geometry::Rect;
use crate::rng::RandomRange;

/// Index of a room within [`Dungeon::rooms`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RoomId(pub usize);

/// A rectangular room carved inside one BSP leaf
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Room {
    id: RoomId,
    rect: Rect,
}

impl Room {
    pub(crate) fn new(id: RoomId, rect: Rect) -> Self {
        Self { id, rect }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn x(&self) -> i32 {
        self.rect.x
    }

    pub fn y(&self) -> i32 {
        self.rect.y
    }

    pub fn width(&self) -> i32 {
        self.rect.width
    }

    pub fn height(&self) -> i32 {
        self.rect.height
    }

    /// Center of the room in world pixels (integer tile halving, then scaled)
    pub fn world_center(&self, tile_size: f32) -> Vec2 {
        let (cx, cy) = self.rect.center();
        Vec2::new(cx as f32 * tile_size, cy as f32 * tile_size)
    }
}

/// Special purpose assigned to a room after generation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RoomRole {
    Spawn,
    Boss,
    Chest,
}

/// Long axis of a corridor strip
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CorridorOrientation {
    Horizontal,
    Vertical,
}

/// A straight strip joining the centers of two sibling partitions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Corridor {
    start: (i32, i32),
    end: (i32, i32),
    orientation: CorridorOrientation,
    rect: Rect,
}

impl Corridor {
    /// Build the strip from `start` towards `end`.
    ///
    /// Orientation comes from the sign of `atan2(dy, dx)`: a positive angle gives
    /// a vertical strip. This is an approximation, but BSP siblings always sit
    /// right of or below each other, and in that case it agrees with axis dominance.
    pub fn between(start: (i32, i32), end: (i32, i32), corridor_width: i32) -> Self {
        let dx = (end.0 - start.0) as f32;
        let dy = (end.1 - start.1) as f32;
        let angle = dy.atan2(dx);
        let length = (dx * dx + dy * dy).sqrt() as i32;

        let (orientation, width, height) = if angle > 0.0 {
            (CorridorOrientation::Vertical, corridor_width, length)
        } else {
            (CorridorOrientation::Horizontal, length, corridor_width)
        };

        Self {
            start,
            end,
            orientation,
            rect: Rect::new(start.0, start.1, width, height),
        }
    }

    pub fn start(&self) -> (i32, i32) {
        self.start
    }

    pub fn end(&self) -> (i32, i32) {
        self.end
    }

    pub fn orientation(&self) -> CorridorOrientation {
        self.orientation
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// A fully generated level. Immutable once built.
#[derive(Debug)]
pub struct Dungeon {
    root: BspNode,
    rooms: Vec<Room>,
    corridors: Vec<Corridor>,
    spawn: RoomId,
    boss: RoomId,
    chests: Vec<RoomId>,
    tile_size: f32,
}

impl Dungeon {
    fn build<R: RandomRange + ?Sized>(
        config: &DungeonConfig,
        width: i32,
        height: i32,
        rng: &mut R,
    ) -> Result<Self, DungeonError> {
        let (ox, oy) = config.origin;
        let mut root = BspNode::new(Rect::new(ox, oy, width, height));

        root.split(config, rng);

        let mut next_id = 0;
        root.carve_rooms(config, rng, &mut next_id);

        let mut rooms = Vec::with_capacity(next_id);
        root.collect_rooms(&mut rooms);

        let mut corridors = Vec::with_capacity(next_id.saturating_sub(1));
        root.collect_corridors(config.corridor_width, &mut corridors);

        let too_small = || DungeonError::DimensionTooSmall {
            width,
            height,
            required_min: config.min_room_size,
            required_split: config.split_thresholds().1,
        };
        let (left, right) = root.children().ok_or_else(too_small)?;

        // Boss direction is drawn before the side assignment
        let pick_left = rng.coin();
        let (spawn_side, boss_side) = if rng.coin() {
            (left, right)
        } else {
            (right, left)
        };

        let spawn = spawn_side
            .descend_random(rng)
            .room()
            .map(Room::id)
            .ok_or_else(too_small)?;
        let boss = boss_side
            .descend_fixed(pick_left)
            .room()
            .map(Room::id)
            .ok_or_else(too_small)?;
        debug!("Picked spawn room {spawn:?}, boss room {boss:?} (boss descends left: {pick_left})");

        let mut chests = Vec::with_capacity(2);
        for (side, name) in [(left, "left"), (right, "right")] {
            match side.first_room_where(&|room| room.id() != spawn && room.id() != boss) {
                Some(room) => chests.push(room.id()),
                None => warn!("No chest room available in the {name} half"),
            }
        }

        Ok(Self {
            root,
            rooms,
            corridors,
            spawn,
            boss,
            chests,
            tile_size: config.tile_size,
        })
    }

    /// Rooms in depth-first leaf order; `rooms()[i].id() == RoomId(i)`
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Corridors in pre-order of their internal nodes
    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn spawn_room(&self) -> &Room {
        &self.rooms[self.spawn.0]
    }

    pub fn boss_room(&self) -> &Room {
        &self.rooms[self.boss.0]
    }

    pub fn chest_rooms(&self) -> Vec<&Room> {
        self.chests.iter().map(|id| &self.rooms[id.0]).collect()
    }

    pub fn role_of(&self, id: RoomId) -> Option<RoomRole> {
        if id == self.spawn {
            Some(RoomRole::Spawn)
        } else if id == self.boss {
            Some(RoomRole::Boss)
        } else if self.chests.contains(&id) {
            Some(RoomRole::Chest)
        } else {
            None
        }
    }

    /// The partition tree the rooms were carved from
    pub fn tree(&self) -> &BspNode {
        &self.root
    }

    /// Tile-grid area covered by the root partition
    pub fn bounds(&self) -> Rect {
        self.root.region()
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Where the player is placed: center of the spawn room, in world pixels
    pub fn starting_world_position(&self) -> Vec2 {
        self.spawn_room().world_center(self.tile_size)
    }

    /// Plain serializable snapshot of the layout
    pub fn summary(&self) -> DungeonSummary {
        DungeonSummary {
            bounds: self.bounds(),
            rooms: self.rooms.clone(),
            corridors: self.corridors.clone(),
            spawn: self.spawn,
            boss: self.boss,
            chests: self.chests.clone(),
            depth: self.root.depth(),
        }
    }
}

/// JSON-friendly view of a [`Dungeon`]
#[derive(Debug, Clone, Serialize)]
pub struct DungeonSummary {
    pub bounds: Rect,
    pub rooms: Vec<Room>,
    pub corridors: Vec<Corridor>,
    pub spawn: RoomId,
    pub boss: RoomId,
    pub chests: Vec<RoomId>,
    pub depth: usize,
}

/// Owns the configuration, the random source and the current dungeon.
///
/// Only one dungeon exists at a time: `generate` drops the previous one first.
pub struct DungeonGenerator {
    config: DungeonConfig,
    rng: StdRng,
    current: Option<Dungeon>,
}

impl DungeonGenerator {
    /// Generator seeded once from system entropy
    pub fn new(config: DungeonConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
            current: None,
        }
    }

    /// Generator with a fixed seed, for reproducible layouts
    pub fn with_seed(config: DungeonConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            current: None,
        }
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    /// Build a new `width` x `height` dungeon, replacing any previous one.
    ///
    /// On error no dungeon is held afterwards.
    pub fn generate(&mut self, width: i32, height: i32) -> Result<&Dungeon, DungeonError> {
        puffin::profile_function!();

        self.current = None;
        self.config.validate()?;
        self.config.check_dimensions(width, height)?;

        let dungeon = Dungeon::build(&self.config, width, height, &mut self.rng)?;
        info!(
            "Generated {}x{} dungeon: {} rooms, {} corridors, depth {}",
            width,
            height,
            dungeon.rooms.len(),
            dungeon.corridors.len(),
            dungeon.root.depth()
        );

        let dungeon: &Dungeon = self.current.insert(dungeon);
        Ok(dungeon)
    }

    pub fn dungeon(&self) -> Option<&Dungeon> {
        self.current.as_ref()
    }

    pub fn rooms(&self) -> &[Room] {
        self.current.as_ref().map(Dungeon::rooms).unwrap_or(&[])
    }

    pub fn corridors(&self) -> &[Corridor] {
        self.current.as_ref().map(Dungeon::corridors).unwrap_or(&[])
    }

    pub fn spawn_room(&self) -> Option<&Room> {
        self.current.as_ref().map(Dungeon::spawn_room)
    }

    pub fn boss_room(&self) -> Option<&Room> {
        self.current.as_ref().map(Dungeon::boss_room)
    }

    pub fn chest_rooms(&self) -> Vec<&Room> {
        self.current
            .as_ref()
            .map(Dungeon::chest_rooms)
            .unwrap_or_default()
    }

    pub fn starting_world_position(&self) -> Option<Vec2> {
        self.current.as_ref().map(Dungeon::starting_world_position)
    }
}
