//! Surface geometry primitives.
//!
//! Values here are in target-surface units: whatever unit the consumer draws
//! in (preview pixels, output pixels). Nothing is clamped; crops larger than
//! the frame produce negative extents and consumers decide how to draw them.

use serde::{Deserialize, Serialize};

/// Canonical authoring frame width in pixels.
pub const CANONICAL_WIDTH: f64 = 1920.0;

/// Canonical authoring frame height in pixels.
pub const CANONICAL_HEIGHT: f64 = 1080.0;

/// Width and height of a rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// The canonical 1920x1080 frame.
    pub const CANONICAL: Size = Size {
        width: CANONICAL_WIDTH,
        height: CANONICAL_HEIGHT,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Horizontal factor from canonical pixels to this surface.
    pub fn scale_x(&self) -> f64 {
        self.width / CANONICAL_WIDTH
    }

    /// Vertical factor from canonical pixels to this surface.
    pub fn scale_y(&self) -> f64 {
        self.height / CANONICAL_HEIGHT
    }
}

/// An axis-aligned rectangle, origin at the top-left of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// True when both extents are strictly positive.
    pub fn has_area(&self) -> bool {
        self.w > 0.0 && self.h > 0.0
    }

    /// Multiply every coordinate by the per-axis factors.
    pub fn scaled(&self, sx: f64, sy: f64) -> Rect {
        Rect {
            x: self.x * sx,
            y: self.y * sy,
            w: self.w * sx,
            h: self.h * sy,
        }
    }

    /// Component-wise comparison within `eps`.
    pub fn approx_eq(&self, other: &Rect, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps
            && (self.y - other.y).abs() <= eps
            && (self.w - other.w).abs() <= eps
            && (self.h - other.h).abs() <= eps
    }
}

/// One edge of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}
