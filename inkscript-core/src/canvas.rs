//! # Canvas and Notifier capabilities
//!
//! The two seams between the interpreter and its host. A [`Canvas`] turns
//! draw calls into something visible; a [`Notifier`] presents outcome
//! messages. The interpreter knows nothing about how either is rendered.

use crate::{color::PenColor, geom::Point, geom::Rect};

/// A failure reported by the drawing surface.
///
/// The interpreter treats this as recoverable: the error is surfaced to the
/// [`Notifier`] and returned to the caller, never propagated as a panic.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct CanvasError(String);

impl CanvasError {
    #[must_use]
    pub fn new(cause: impl Into<String>) -> Self {
        Self(cause.into())
    }
}

pub type DrawResult = Result<(), CanvasError>;

/// An abstract drawing surface, consumed by the interpreter.
///
/// Coordinates are integer canvas-space points; the interpreter applies no
/// scaling or transform, and never clips - out-of-bounds geometry is the
/// surface's problem.
pub trait Canvas {
    fn draw_line(&mut self, from: Point, to: Point, color: PenColor) -> DrawResult;
    fn draw_ellipse(&mut self, bounds: Rect, outline: PenColor) -> DrawResult;
    fn fill_ellipse(&mut self, bounds: Rect, fill: PenColor) -> DrawResult;
    fn draw_rectangle(&mut self, bounds: Rect, outline: PenColor) -> DrawResult;
    fn fill_rectangle(&mut self, bounds: Rect, fill: PenColor) -> DrawResult;
    fn draw_polygon(&mut self, points: &[Point], outline: PenColor) -> DrawResult;
    fn fill_polygon(&mut self, points: &[Point], fill: PenColor) -> DrawResult;
    /// Clear the whole surface back to its empty state.
    fn clear(&mut self) -> DrawResult;
}

/// An abstract message sink, produced to by the interpreter.
///
/// Receives the empty string to clear a previously shown message, an error
/// string on failure, and a fixed success string where the language reports
/// success explicitly.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// A notifier that drops every message. Handy for hosts that only care
/// about the returned `Result`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _message: &str) {}
}
