//! # Drawing state
//!
//! The mutable pen/drawing state owned by one interpreter. There are no
//! discrete modes, just the fields below; every successfully dispatched
//! command mutates it in place.

use crate::{color::PenColor, geom::Point};

/// Where the pen starts, and where shape primitives are anchored.
pub const HOME: Point = Point::new(10, 10);

/// Pen position, pen color, fill mode, and last-circle bookkeeping.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DrawingState {
    pen_position: Point,
    pen_color: PenColor,
    fill_shapes: bool,
    last_circle_diameter: i32,
    circle_drawn: bool,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            pen_position: HOME,
            pen_color: PenColor::Black,
            fill_shapes: false,
            last_circle_diameter: 0,
            circle_drawn: false,
        }
    }
}

impl DrawingState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn pen_position(&self) -> Point {
        self.pen_position
    }
    #[must_use]
    pub fn pen_color(&self) -> PenColor {
        self.pen_color
    }
    #[must_use]
    pub fn fill_shapes(&self) -> bool {
        self.fill_shapes
    }
    /// Diameter of the most recently drawn circle, `0` if none yet.
    #[must_use]
    pub fn last_circle_diameter(&self) -> i32 {
        self.last_circle_diameter
    }
    #[must_use]
    pub fn circle_drawn(&self) -> bool {
        self.circle_drawn
    }

    pub(crate) fn set_pen_position(&mut self, position: Point) {
        self.pen_position = position;
    }
    pub(crate) fn set_pen_color(&mut self, color: PenColor) {
        self.pen_color = color;
    }
    pub(crate) fn set_fill_shapes(&mut self, fill: bool) {
        self.fill_shapes = fill;
    }
    pub(crate) fn record_circle(&mut self, diameter: i32) {
        self.circle_drawn = true;
        self.last_circle_diameter = diameter;
    }

    // Only the persistence loader writes through here; hosts go via `persist`.
    pub(crate) fn restore(
        &mut self,
        position: Option<Point>,
        color: Option<PenColor>,
        fill: Option<bool>,
    ) {
        if let Some(position) = position {
            self.pen_position = position;
        }
        if let Some(color) = color {
            self.pen_color = color;
        }
        if let Some(fill) = fill {
            self.fill_shapes = fill;
        }
    }
}
