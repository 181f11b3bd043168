use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world units. Positive y points down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict AABB overlap: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Whether any part of the rect falls inside the camera window.
    ///
    /// The window spans `[0, viewport_width)` in screen space; a rect whose
    /// left edge sits exactly at the right border is not yet visible, and one
    /// whose right edge sits exactly at the left border is no longer visible.
    pub fn is_visible(&self, camera_x: f32, viewport_width: f32) -> bool {
        self.x - camera_x < viewport_width && self.x - camera_x + self.w > 0.0
    }
}
