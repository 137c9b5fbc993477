//! # Command interpreter
//!
//! Validates a command line, resolves it, mutates the [`DrawingState`], and
//! issues draw calls to the host's [`Canvas`]. Every outcome - success,
//! syntax failure, draw failure - is reported through the [`Notifier`] *and*
//! returned as a `Result`, so the host decides how (or whether) to present
//! duplicates.

use crate::{
    canvas::{Canvas, Notifier},
    command::Command,
    geom::{Point, Rect},
    state::{DrawingState, HOME},
    syntax::{SyntaxChecker, SyntaxError},
};
use smallvec::SmallVec;

pub const CIRCLE_SUCCESS: &str = "Circle drawn successfully.";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpretError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// A canvas call failed mid-draw. Recoverable; whatever state mutations
    /// preceded the failure are kept (no rollback).
    #[error("Error: {0}")]
    Draw(#[source] crate::canvas::CanvasError),
}

/// The drawing language's execution engine. Owns the [`DrawingState`] for
/// one session; reusable across any number of commands.
#[derive(Debug, Default)]
pub struct Interpreter {
    checker: SyntaxChecker,
    state: DrawingState,
}

impl Interpreter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Start from a previously restored state (e.g. loaded settings).
    #[must_use]
    pub fn with_state(state: DrawingState) -> Self {
        Self {
            checker: SyntaxChecker::new(),
            state,
        }
    }
    #[must_use]
    pub fn state(&self) -> &DrawingState {
        &self.state
    }
    /// Hand the state to the persistence codec for load/save.
    pub fn state_mut(&mut self) -> &mut DrawingState {
        &mut self.state
    }

    /// Execute one command line.
    ///
    /// # Errors
    /// Any [`InterpretError`]; the same outcome is also sent to `notifier`
    /// as a human-readable message. On error the state keeps whatever
    /// mutations happened before the failing step.
    pub fn execute(
        &mut self,
        command: &str,
        canvas: &mut dyn Canvas,
        notifier: &mut dyn Notifier,
    ) -> Result<(), InterpretError> {
        self.execute_with_hook(command, canvas, notifier, None)
    }

    /// [`Self::execute`], with an observer invoked after the syntax check
    /// passes and before dispatch. Hosts use it for side effects outside
    /// this crate's concern (the original program refreshed its UI here).
    pub fn execute_with_hook(
        &mut self,
        command: &str,
        canvas: &mut dyn Canvas,
        notifier: &mut dyn Notifier,
        hook: Option<&mut dyn FnMut()>,
    ) -> Result<(), InterpretError> {
        if let Err(e) = self.checker.check(command) {
            notifier.notify(&e.to_string());
            return Err(e.into());
        }
        // Syntax passed: clear any previously shown message.
        notifier.notify("");
        if let Some(hook) = hook {
            hook();
        }
        match self.dispatch(command, canvas, notifier) {
            Ok(()) => Ok(()),
            Err(e) => {
                notifier.notify(&e.to_string());
                Err(e)
            }
        }
    }

    fn dispatch(
        &mut self,
        command: &str,
        canvas: &mut dyn Canvas,
        notifier: &mut dyn Notifier,
    ) -> Result<(), InterpretError> {
        let command = Command::resolve(command)?;
        match command {
            Command::MoveTo(x, y) => {
                self.state.set_pen_position(Point::new(x, y));
                Ok(())
            }
            Command::DrawTo(x, y) => {
                let to = Point::new(x, y);
                canvas
                    .draw_line(self.state.pen_position(), to, self.state.pen_color())
                    .map_err(InterpretError::Draw)?;
                self.state.set_pen_position(to);
                Ok(())
            }
            Command::Clear => canvas.clear().map_err(InterpretError::Draw),
            Command::Reset => {
                self.state.set_pen_position(HOME);
                Ok(())
            }
            Command::Circle(radius) => {
                // Saturate: an absurd radius clamps rather than overflowing.
                let diameter = radius.saturating_mul(2);
                let bounds = Rect::square(HOME, diameter);
                let drawn = if self.state.fill_shapes() {
                    canvas.fill_ellipse(bounds, self.state.pen_color())
                } else {
                    canvas.draw_ellipse(bounds, self.state.pen_color())
                };
                match drawn {
                    Ok(()) => {
                        self.state.record_circle(diameter);
                        notifier.notify(CIRCLE_SUCCESS);
                        Ok(())
                    }
                    Err(e) => {
                        log::warn!("circle draw failed: {e}");
                        Err(InterpretError::Draw(e))
                    }
                }
            }
            Command::Rectangle(width, height) => {
                let bounds = Rect::new(HOME, width, height);
                if self.state.fill_shapes() {
                    canvas.fill_rectangle(bounds, self.state.pen_color())
                } else {
                    canvas.draw_rectangle(bounds, self.state.pen_color())
                }
                .map_err(InterpretError::Draw)
            }
            Command::Triangle(side1, side2) => {
                // Saturating for the same reason as Circle: coordinates may
                // clamp at the extremes, but the interpreter must not panic.
                let base_y = HOME.y.saturating_add(side2);
                let points: SmallVec<[Point; 3]> = smallvec::smallvec![
                    Point::new(HOME.x, base_y),
                    Point::new(HOME.x.saturating_add(side1), base_y),
                    Point::new(HOME.x.saturating_add(side1 / 2), HOME.y),
                ];
                if self.state.fill_shapes() {
                    canvas.fill_polygon(&points, self.state.pen_color())
                } else {
                    canvas.draw_polygon(&points, self.state.pen_color())
                }
                .map_err(InterpretError::Draw)
            }
            Command::SetColor(color) => {
                self.state.set_pen_color(color);
                Ok(())
            }
            Command::Fill(Some(fill)) => {
                self.state.set_fill_shapes(fill);
                Ok(())
            }
            // Malformed `fill` argument: do nothing, report nothing.
            Command::Fill(None) => Ok(()),
        }
    }
}
