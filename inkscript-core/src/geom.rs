//! Integer canvas-space geometry, used throughout the crate.
//!
//! Coordinates are signed and unbounded on purpose - the pen may wander off
//! the visible surface, and clipping is the canvas's job.

/// A point in canvas space.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangle, positioned by its top-left corner.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash)]
pub struct Rect {
    pub origin: Point,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(origin: Point, width: i32, height: i32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }
    /// The bounding square of side `2 * radius`, anchored at `origin`.
    #[must_use]
    pub const fn square(origin: Point, side: i32) -> Self {
        Self::new(origin, side, side)
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}x{}", self.origin, self.width, self.height)
    }
}
