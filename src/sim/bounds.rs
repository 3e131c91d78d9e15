//! Playfield geometry: the four walls and the per-paddle collision bands
//!
//! Walls are axis-aligned rectangles given by a centre and half-extents. The
//! simulation only ever reads their centre lines; the extents are kept so a
//! renderer can draw them at the right size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle on the play plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Rect {
    pub const fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }
}

/// The four walls enclosing the playfield (70 x 40 play area)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub upper: Rect,
    pub lower: Rect,
    pub left: Rect,
    pub right: Rect,
}

impl Field {
    pub const STANDARD: Field = Field {
        upper: Rect::new(Vec2::new(0.0, 30.0), Vec2::new(35.0, 1.0)),
        lower: Rect::new(Vec2::new(0.0, -10.0), Vec2::new(35.0, 1.0)),
        left: Rect::new(Vec2::new(-36.0, 10.0), Vec2::new(1.0, 21.0)),
        right: Rect::new(Vec2::new(36.0, 10.0), Vec2::new(1.0, 21.0)),
    };

    /// Y of the upper wall centre line
    #[inline]
    pub fn top(&self) -> f32 {
        self.upper.center.y
    }

    /// Y of the lower wall centre line
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.lower.center.y
    }

    /// Highest y a paddle target may take
    pub fn paddle_max(&self) -> f32 {
        self.top() - crate::consts::PADDLE_WALL_MARGIN
    }

    /// Lowest y a paddle target may take
    pub fn paddle_min(&self) -> f32 {
        self.bottom() + crate::consts::PADDLE_WALL_MARGIN
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A collision zone derived from a paddle's current position
///
/// The x interval is open and the y interval is closed, so adjacent face and
/// edge bands never both claim a point on their shared x boundary, while a
/// ball exactly level with the paddle tip still counts as a hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Band {
    /// Band spanning `(x_min, x_max)` horizontally and `center_y ± half_height`
    pub fn new(x_min: f32, x_max: f32, center_y: f32, half_height: f32) -> Self {
        Self {
            x_min,
            x_max,
            y_min: center_y - half_height,
            y_max: center_y + half_height,
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x > self.x_min && p.x < self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }
}
