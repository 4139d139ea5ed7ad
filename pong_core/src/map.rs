use glam::Vec2;

use crate::components::Side;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from a top-left corner and a size (screen coordinates, y grows down)
    pub fn from_top_left(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Rectangle intersection; boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Static play area bounded by a top and a bottom bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
    pub bar_thickness: f32,
    pub margin: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32, bar_thickness: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            bar_thickness,
            margin,
        }
    }

    /// Lower edge of the top bar
    pub fn inner_top(&self) -> f32 {
        self.bar_thickness + self.margin
    }

    /// Upper edge of the bottom bar
    pub fn inner_bottom(&self) -> f32 {
        self.height - self.bar_thickness - self.margin
    }

    /// Vertical room between the bars
    pub fn channel(&self) -> f32 {
        self.inner_bottom() - self.inner_top()
    }

    pub fn top_bar(&self) -> Aabb {
        Aabb::new(
            Vec2::new(0.0, self.margin),
            Vec2::new(self.width, self.inner_top()),
        )
    }

    pub fn bottom_bar(&self) -> Aabb {
        Aabb::new(
            Vec2::new(0.0, self.inner_bottom()),
            Vec2::new(self.width, self.height - self.margin),
        )
    }

    /// Fixed X (left edge) of the paddle on the given side
    pub fn paddle_x(&self, side: Side, paddle_width: f32) -> f32 {
        match side {
            Side::Left => self.margin,
            Side::Right => self.width - self.margin - paddle_width,
        }
    }

    /// Top-left position that centres a square of `size` in the field
    pub fn center_for(&self, size: f32) -> Vec2 {
        Vec2::new(self.width / 2.0 - size / 2.0, self.height / 2.0 - size / 2.0)
    }
}
