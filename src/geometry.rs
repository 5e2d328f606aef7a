//! Rectangle helpers shared by the generator and the spatial index.
//!
//! Two coordinate spaces are in play:
//! - [`Rect`]: tile-grid units (`i32`), produced by the BSP generator.
//! - [`WorldRect`]: world pixels (`f32`), consumed by collision.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A rectangle in tile-grid units
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Center point, rounded down on both axes
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn area(&self) -> i32 {
        self.width * self.height
    }

    /// Check if `other` lies entirely within this rectangle (edges may touch)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Check if the two rectangles share any tile cell
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Convert to world pixels by scaling every component by the tile size
    pub fn to_world(&self, tile_size: f32) -> WorldRect {
        WorldRect::new(
            self.x as f32 * tile_size,
            self.y as f32 * tile_size,
            self.width as f32 * tile_size,
            self.height as f32 * tile_size,
        )
    }
}

/// An axis-aligned rectangle in world pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl WorldRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Point containment, closed on all four edges.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// The four collision sample points of an actor box, in test order:
    /// top-left-mid, top-right-mid, bottom-left, bottom-right.
    ///
    /// The "top" pair sits at mid-height; only the lower half of a sprite is
    /// its footprint.
    pub fn footprint_points(&self) -> [Vec2; 4] {
        let mid_y = self.top + self.height / 2.0;
        [
            Vec2::new(self.left, mid_y),
            Vec2::new(self.right(), mid_y),
            Vec2::new(self.left, self.bottom()),
            Vec2::new(self.right(), self.bottom()),
        ]
    }
}

/// Clamp that tolerates `lo > hi` (the lower bound wins).
fn clamp_axis(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}

/// Where an actor at `actor_pos` with box `actor_box` lands when pulled inside `target`.
///
/// X is inset by half the box width on both sides. Y is inset by half the box
/// height at the top only, so the actor's feet can reach the bottom edge.
pub fn clamped_position(actor_pos: Vec2, actor_box: &WorldRect, target: &WorldRect) -> Vec2 {
    let half = actor_box.half_extents();
    Vec2::new(
        clamp_axis(actor_pos.x, target.left + half.x, target.right() - half.x),
        clamp_axis(actor_pos.y, target.top + half.y, target.bottom()),
    )
}

/// Among `candidates`, find the one whose clamped position is closest to `actor_pos`.
///
/// Returns the candidate's index and the clamped position. Ties keep the
/// earliest candidate.
pub fn nearest_clamped<'a, I>(
    actor_pos: Vec2,
    actor_box: &WorldRect,
    candidates: I,
) -> Option<(usize, Vec2)>
where
    I: IntoIterator<Item = &'a WorldRect>,
{
    let mut best: Option<(usize, Vec2, f32)> = None;
    for (i, rect) in candidates.into_iter().enumerate() {
        let pos = clamped_position(actor_pos, actor_box, rect);
        let distance = actor_pos.distance(pos);
        match best {
            Some((_, _, d)) if distance >= d => {}
            _ => best = Some((i, pos, distance)),
        }
    }
    best.map(|(i, pos, _)| (i, pos))
}
