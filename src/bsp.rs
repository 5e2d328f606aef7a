//! Binary space partition tree that the dungeon is carved from.
//!
//! Each node owns its children and, once carved, a leaf owns its [`Room`].
//! Dropping the root tears the whole tree down.

use crate::config::DungeonConfig;
use crate::dungeon_gen::{Corridor, Room, RoomId};
use crate::geometry::Rect;
use crate::rng::RandomRange;

/// Which way a node was cut
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitAxis {
    /// Cut across the height: children stacked top/bottom
    Horizontal,
    /// Cut across the width: children side by side
    Vertical,
}

/// A node in the BSP tree. Either a leaf (owns a room) or an internal node (has two children).
#[derive(Debug)]
pub struct BspNode {
    /// The region this node covers
    region: Rect,
    /// How this node was split, if it was
    axis: Option<SplitAxis>,
    /// The room carved in this region (leaves only)
    room: Option<Room>,
    /// Top or left child
    left: Option<Box<BspNode>>,
    /// Bottom or right child
    right: Option<Box<BspNode>>,
}

impl BspNode {
    pub fn new(region: Rect) -> Self {
        Self {
            region,
            axis: None,
            room: None,
            left: None,
            right: None,
        }
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    pub fn axis(&self) -> Option<SplitAxis> {
        self.axis
    }

    pub fn room(&self) -> Option<&Room> {
        self.room.as_ref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Both children, or `None` for a leaf
    pub fn children(&self) -> Option<(&BspNode, &BspNode)> {
        match (&self.left, &self.right) {
            (Some(left), Some(right)) => Some((&**left, &**right)),
            _ => None,
        }
    }

    /// Recursively split this node until neither axis has room for two partitions.
    ///
    /// The coin picks a preferred axis, which needs more than `2 * max_room_size`.
    /// Failing that, the other axis is tried against `2 * min_room_size`.
    /// Termination follows from every child being strictly smaller than its parent.
    pub fn split<R: RandomRange + ?Sized>(&mut self, config: &DungeonConfig, rng: &mut R) {
        let min = config.min_room_size;
        let (fallback, preferred) = config.split_thresholds();
        let Rect { width, height, .. } = self.region;

        let axis = if rng.coin() {
            if height > preferred {
                SplitAxis::Horizontal
            } else if width > fallback {
                SplitAxis::Vertical
            } else {
                return;
            }
        } else if width > preferred {
            SplitAxis::Vertical
        } else if height > fallback {
            SplitAxis::Horizontal
        } else {
            return;
        };

        let (first, second) = match axis {
            SplitAxis::Horizontal => {
                let h1 = rng.range(min, height - min);
                (
                    Rect::new(self.region.x, self.region.y, width, h1),
                    Rect::new(self.region.x, self.region.y + h1, width, height - h1),
                )
            }
            SplitAxis::Vertical => {
                let w1 = rng.range(min, width - min);
                (
                    Rect::new(self.region.x, self.region.y, w1, height),
                    Rect::new(self.region.x + w1, self.region.y, width - w1, height),
                )
            }
        };

        let mut left = BspNode::new(first);
        let mut right = BspNode::new(second);
        left.split(config, rng);
        right.split(config, rng);

        self.axis = Some(axis);
        self.left = Some(Box::new(left));
        self.right = Some(Box::new(right));
    }

    /// Carve one room into every leaf, numbering them in depth-first (left-first) order.
    pub fn carve_rooms<R: RandomRange + ?Sized>(
        &mut self,
        config: &DungeonConfig,
        rng: &mut R,
        next_id: &mut usize,
    ) {
        if self.is_leaf() {
            let rect = carve_room(self.region, config.room_margin, rng);
            self.room = Some(Room::new(RoomId(*next_id), rect));
            *next_id += 1;
            return;
        }

        if let Some(ref mut left) = self.left {
            left.carve_rooms(config, rng, next_id);
        }
        if let Some(ref mut right) = self.right {
            right.carve_rooms(config, rng, next_id);
        }
    }

    /// Collect all rooms in this subtree, in id order.
    pub fn collect_rooms(&self, rooms: &mut Vec<Room>) {
        if let Some(room) = self.room {
            rooms.push(room);
        }
        if let Some(ref left) = self.left {
            left.collect_rooms(rooms);
        }
        if let Some(ref right) = self.right {
            right.collect_rooms(rooms);
        }
    }

    /// Emit one corridor per internal node, joining the centers of its two children.
    /// Pre-order: a node's corridor precedes those of its subtrees.
    pub fn collect_corridors(&self, corridor_width: i32, corridors: &mut Vec<Corridor>) {
        let Some((left, right)) = self.children() else {
            return;
        };

        corridors.push(Corridor::between(
            left.region.center(),
            right.region.center(),
            corridor_width,
        ));

        left.collect_corridors(corridor_width, corridors);
        right.collect_corridors(corridor_width, corridors);
    }

    /// Walk to a leaf, flipping a fresh coin at every internal node.
    pub fn descend_random<R: RandomRange + ?Sized>(&self, rng: &mut R) -> &BspNode {
        let mut node = self;
        while let Some((left, right)) = node.children() {
            node = if rng.coin() { left } else { right };
        }
        node
    }

    /// Walk to a leaf, taking the same side at every level.
    pub fn descend_fixed(&self, pick_left: bool) -> &BspNode {
        let mut node = self;
        while let Some((left, right)) = node.children() {
            node = if pick_left { left } else { right };
        }
        node
    }

    /// First room in depth-first (left-first) order that satisfies `accept`.
    pub fn first_room_where(&self, accept: &dyn Fn(&Room) -> bool) -> Option<&Room> {
        if let Some(ref room) = self.room {
            if accept(room) {
                return Some(room);
            }
        }
        if let Some(ref left) = self.left {
            if let Some(room) = left.first_room_where(accept) {
                return Some(room);
            }
        }
        if let Some(ref right) = self.right {
            if let Some(room) = right.first_room_where(accept) {
                return Some(room);
            }
        }
        None
    }

    /// Every leaf in depth-first (left-first) order
    pub fn leaves(&self) -> Vec<&BspNode> {
        let mut out = Vec::new();
        self.push_leaves(&mut out);
        out
    }

    fn push_leaves<'a>(&'a self, out: &mut Vec<&'a BspNode>) {
        match self.children() {
            Some((left, right)) => {
                left.push_leaves(out);
                right.push_leaves(out);
            }
            None => out.push(self),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self.children() {
            Some((left, right)) => left.leaf_count() + right.leaf_count(),
            None => 1,
        }
    }

    pub fn internal_count(&self) -> usize {
        match self.children() {
            Some((left, right)) => 1 + left.internal_count() + right.internal_count(),
            None => 0,
        }
    }

    /// Number of edges on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        match self.children() {
            Some((left, right)) => 1 + left.depth().max(right.depth()),
            None => 0,
        }
    }
}

/// Place a room strictly inside `leaf`.
///
/// The top-left corner is pushed in by `[margin, side/3]`, then the remaining
/// extent is shrunk by `[margin, remaining/3]`, so a gap is always left on all sides.
fn carve_room<R: RandomRange + ?Sized>(leaf: Rect, margin: i32, rng: &mut R) -> Rect {
    let x = leaf.x + rng.range(margin, leaf.width / 3);
    let y = leaf.y + rng.range(margin, leaf.height / 3);

    let mut w = leaf.width - (x - leaf.x);
    let mut h = leaf.height - (y - leaf.y);
    w -= rng.range(margin, w / 3);
    h -= rng.range(margin, h / 3);

    Rect::new(x, y, w, h)
}
