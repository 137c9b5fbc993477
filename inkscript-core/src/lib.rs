//! # inkscript-core
//!
//! The command interpreter for the inkscript drawing language: a line of
//! text moves a pen, draws primitives, changes color, or toggles fill mode.
//! Rendering and presentation are the host's concern, reached through the
//! [`canvas::Canvas`] and [`canvas::Notifier`] capabilities.

pub mod canvas;
pub mod color;
pub mod command;
pub mod geom;
pub mod interpreter;
pub mod persist;
pub mod state;
pub mod syntax;

pub use canvas::{Canvas, CanvasError, Notifier};
pub use color::PenColor;
pub use geom::{Point, Rect};
pub use interpreter::{InterpretError, Interpreter};
pub use state::DrawingState;
pub use syntax::{SyntaxChecker, SyntaxError};
