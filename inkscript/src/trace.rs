//! Headless canvas and notifier implementations for script runs.

use inkscript_core::{canvas::DrawResult, Canvas, Notifier, PenColor, Point, Rect};

/// A canvas that renders nothing: each draw call is logged and counted.
/// Lets a script run end-to-end with full interpreter semantics while the
/// actual rasterization stays out of scope.
#[derive(Debug, Default)]
pub struct TraceCanvas {
    operations: u64,
}

impl TraceCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// How many draw calls have been issued so far.
    #[must_use]
    pub fn operations(&self) -> u64 {
        self.operations
    }
    fn trace(&mut self, call: std::fmt::Arguments<'_>) -> DrawResult {
        self.operations += 1;
        log::info!("canvas: {call}");
        Ok(())
    }
}

impl Canvas for TraceCanvas {
    fn draw_line(&mut self, from: Point, to: Point, color: PenColor) -> DrawResult {
        self.trace(format_args!("line {from} -> {to} [{color}]"))
    }
    fn draw_ellipse(&mut self, bounds: Rect, outline: PenColor) -> DrawResult {
        self.trace(format_args!("ellipse {bounds} [{outline}]"))
    }
    fn fill_ellipse(&mut self, bounds: Rect, fill: PenColor) -> DrawResult {
        self.trace(format_args!("ellipse {bounds} [{fill}, filled]"))
    }
    fn draw_rectangle(&mut self, bounds: Rect, outline: PenColor) -> DrawResult {
        self.trace(format_args!("rectangle {bounds} [{outline}]"))
    }
    fn fill_rectangle(&mut self, bounds: Rect, fill: PenColor) -> DrawResult {
        self.trace(format_args!("rectangle {bounds} [{fill}, filled]"))
    }
    fn draw_polygon(&mut self, points: &[Point], outline: PenColor) -> DrawResult {
        self.trace(format_args!("polygon {points:?} [{outline}]"))
    }
    fn fill_polygon(&mut self, points: &[Point], fill: PenColor) -> DrawResult {
        self.trace(format_args!("polygon {points:?} [{fill}, filled]"))
    }
    fn clear(&mut self) -> DrawResult {
        self.trace(format_args!("clear"))
    }
}

/// Prints non-empty notifications to stdout. The empty "clear the message"
/// notification has nothing to clear on a terminal, so it is dropped.
#[derive(Debug, Default)]
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&mut self, message: &str) {
        if !message.is_empty() {
            println!("{message}");
        }
    }
}
