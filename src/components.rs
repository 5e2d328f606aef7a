use glam::Vec2;

use crate::geometry::WorldRect;

/// Position component - world pixels, anchored at the bottom-centre of the body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn from_vec2(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Body component - collision box size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub width: f32,
    pub height: f32,
}

impl Body {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Bounding box for a body standing at `pos`: `[x - w/2, x + w/2] x [y - h, y]`
    pub fn bounds_at(&self, pos: Vec2) -> WorldRect {
        WorldRect::new(
            pos.x - self.width / 2.0,
            pos.y - self.height,
            self.width,
            self.height,
        )
    }
}

/// Player marker component
#[derive(Debug, Clone, Copy)]
pub struct Player;

/// Regular enemy; `tier` is 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    pub tier: u8,
}

/// Boss marker component
#[derive(Debug, Clone, Copy)]
pub struct Boss;

/// Chest marker component
#[derive(Debug, Clone, Copy)]
pub struct Chest;

/// Health component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }
}

/// Movement speed in pixels per second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speed(pub f32);

/// Move-then-idle cycle for actors that chase the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekIdle {
    /// Seconds spent chasing per cycle
    pub move_time: f32,
    /// Seconds spent standing still after chasing
    pub idle_time: f32,
    /// Seconds into the current cycle
    pub elapsed: f32,
}

impl SeekIdle {
    pub fn new(move_time: f32, idle_time: f32) -> Self {
        Self {
            move_time,
            idle_time,
            elapsed: 0.0,
        }
    }

    /// Advance the cycle by `dt` and report whether the actor may move this tick
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed > self.move_time + self.idle_time {
            self.elapsed = 0.0;
        }
        self.elapsed <= self.move_time
    }
}
