use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::map::Aabb;

/// Which end of the field a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// True when a horizontal velocity points at this side
    pub fn is_approached_by(self, vx: f32) -> bool {
        match self {
            Side::Left => vx < 0.0,
            Side::Right => vx > 0.0,
        }
    }
}

/// Who moves a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Keyboard,
    Pointer,
    Ai,
}

/// Paddle component - vertical position at a fixed X
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            side,
            x,
            top,
            width,
            height,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_top_left(
            Vec2::new(self.x, self.top),
            Vec2::new(self.width, self.height),
        )
    }
}

/// Ball component - square, positioned by its top-left corner
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_top_left(self.pos, Vec2::splat(self.size))
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }
}

/// Keyboard movement intent for a paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub motion: f32, // signed units per second, positive = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
