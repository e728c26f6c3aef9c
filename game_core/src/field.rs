use glam::Vec2;

use crate::params::Params;

/// Axis-aligned bounding box, stored as top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size * 0.5,
            size,
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap: touching edges do not count.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max().x
            && self.max().x > other.min.x
            && self.min.y < other.max().y
            && self.max().y > other.min.y
    }
}

/// The fixed play area
#[derive(Debug, Clone, Copy)]
pub struct Field;

impl Field {
    pub const WIDTH: f32 = Params::FIELD_WIDTH;
    pub const HEIGHT: f32 = Params::FIELD_HEIGHT;

    /// Wrap a horizontal centre once a body of `radius` is fully off an edge
    pub fn wrap_x(x: f32, radius: f32) -> f32 {
        if x < -radius {
            Self::WIDTH + radius
        } else if x > Self::WIDTH + radius {
            -radius
        } else {
            x
        }
    }

    /// Whether a body whose top edge is `y - radius` has dropped out of view
    pub fn below(y: f32, radius: f32) -> bool {
        y > Self::HEIGHT + radius
    }

    pub fn above(y: f32) -> bool {
        y < 0.0
    }
}
