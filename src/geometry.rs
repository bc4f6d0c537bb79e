//! Canvas-space geometry primitives and clamping rules
//!
//! The canvas coordinate system has its origin at the top-left; all element
//! positions and sizes live in these units. Clamping keeps every element
//! inside the canvas and above the minimum size, no matter how degenerate the
//! pointer gesture that produced it.

use serde::{Deserialize, Serialize};

/// Minimum width and height of any element, in canvas units
pub const MIN_ELEMENT_SIZE: f64 = 20.0;

/// A 2D point in canvas space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in canvas units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle: position plus size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if this rectangle contains a point
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }
}

/// Clamp an element position so the element stays fully inside the canvas.
///
/// The position never goes negative, and `position + size` never exceeds the
/// canvas edge. When the element is larger than the canvas the position pins
/// to the origin.
pub fn clamp_position(position: Point, size: Size, canvas: Size) -> Point {
    let max_x = (canvas.width - size.width).max(0.0);
    let max_y = (canvas.height - size.height).max(0.0);
    Point {
        x: position.x.clamp(0.0, max_x),
        y: position.y.clamp(0.0, max_y),
    }
}

/// Clamp an element size to the minimum and to the canvas edges.
///
/// The size never drops below [`MIN_ELEMENT_SIZE`] on either axis, and an
/// element anchored at `position` never extends past the canvas right or
/// bottom edge.
pub fn clamp_size(size: Size, position: Point, canvas: Size) -> Size {
    let max_width = (canvas.width - position.x).max(MIN_ELEMENT_SIZE);
    let max_height = (canvas.height - position.y).max(MIN_ELEMENT_SIZE);
    Size {
        width: size.width.clamp(MIN_ELEMENT_SIZE, max_width),
        height: size.height.clamp(MIN_ELEMENT_SIZE, max_height),
    }
}
