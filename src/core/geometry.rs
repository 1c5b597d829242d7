use serde::{Deserialize, Serialize};

/// Axis along which an element's values run.
///
/// `Vertical` elements stand on the x axis and extend along y; `Horizontal`
/// elements are the transposed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in pixel space.
///
/// `top` is numerically smaller than `bottom` for well-formed pixel-space
/// input; no normalization is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementBounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ElementBounds {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// Grows the box by `padding` on every side.
    #[must_use]
    pub fn padded(self, padding: f64) -> Self {
        Self {
            left: self.left - padding,
            top: self.top - padding,
            right: self.right + padding,
            bottom: self.bottom + padding,
        }
    }

    #[must_use]
    pub fn contains_x(self, x: f64) -> bool {
        x >= self.left && x <= self.right
    }

    #[must_use]
    pub fn contains_y(self, y: f64) -> bool {
        y >= self.top && y <= self.bottom
    }

    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        self.contains_x(point.x) && self.contains_y(point.y)
    }
}
