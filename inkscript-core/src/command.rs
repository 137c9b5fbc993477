//! # Commands
//!
//! The resolved in-memory form of one instruction: a verb plus its parsed
//! arguments. Resolution is the deep phase of validation - it re-tokenizes
//! text that already passed the [`crate::syntax`] checker and enforces the
//! arity/type rules the shallow phase skips for the shape verbs.

use crate::{color::PenColor, syntax::SyntaxError};

/// One drawing instruction, ready to apply.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    MoveTo(i32, i32),
    DrawTo(i32, i32),
    Clear,
    Reset,
    Circle(i32),
    Rectangle(i32, i32),
    Triangle(i32, i32),
    SetColor(PenColor),
    /// `fill on|off`. `None` means the argument was malformed; the
    /// interpreter treats that as a silent no-op (inherited permissive
    /// behavior).
    Fill(Option<bool>),
}

impl Command {
    /// Resolve a checked command line into a [`Command`].
    ///
    /// # Errors
    /// [`SyntaxError::InvalidArguments`] when a shape verb's arguments fail
    /// the arity/type rules deferred from the shallow phase, and for the
    /// defensive re-check of `moveTo`/`drawTo`.
    /// [`SyntaxError::UnknownCommand`] for verbs outside the known set -
    /// unreachable after a passing syntax check, but not silently ignored.
    pub fn resolve(command: &str) -> Result<Self, SyntaxError> {
        let tokens: Vec<&str> = command.split(' ').collect();
        match tokens[0] {
            "moveTo" => two_ints(&tokens, "moveTo").map(|(x, y)| Self::MoveTo(x, y)),
            "drawTo" => two_ints(&tokens, "drawTo").map(|(x, y)| Self::DrawTo(x, y)),
            "clear" => Ok(Self::Clear),
            "reset" => Ok(Self::Reset),
            "Circle" => one_int(&tokens, "Circle").map(Self::Circle),
            "Rectangle" => two_ints(&tokens, "Rectangle").map(|(w, h)| Self::Rectangle(w, h)),
            "Triangle" => two_ints(&tokens, "Triangle").map(|(a, b)| Self::Triangle(a, b)),
            "red" => Ok(Self::SetColor(PenColor::Red)),
            "green" => Ok(Self::SetColor(PenColor::Green)),
            "blue" => Ok(Self::SetColor(PenColor::Blue)),
            "fill" => Ok(Self::Fill(fill_arg(&tokens))),
            _ => Err(SyntaxError::UnknownCommand),
        }
    }
}

fn one_int(tokens: &[&str], verb: &'static str) -> Result<i32, SyntaxError> {
    match tokens {
        [_, arg] => arg
            .parse()
            .map_err(|_| SyntaxError::InvalidArguments(verb)),
        _ => Err(SyntaxError::InvalidArguments(verb)),
    }
}

fn two_ints(tokens: &[&str], verb: &'static str) -> Result<(i32, i32), SyntaxError> {
    match tokens {
        [_, a, b] => match (a.parse(), b.parse()) {
            (Ok(a), Ok(b)) => Ok((a, b)),
            _ => Err(SyntaxError::InvalidArguments(verb)),
        },
        _ => Err(SyntaxError::InvalidArguments(verb)),
    }
}

// `fill` never errors: wrong arity or an unrecognized argument both fall
// through to "do nothing".
fn fill_arg(tokens: &[&str]) -> Option<bool> {
    match tokens {
        [_, "on"] => Some(true),
        [_, "off"] => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::Command;
    use crate::{color::PenColor, syntax::SyntaxError};

    #[test]
    fn resolve_pen_movement() {
        assert_eq!(Command::resolve("moveTo 30 40"), Ok(Command::MoveTo(30, 40)));
        assert_eq!(Command::resolve("drawTo -1 -2"), Ok(Command::DrawTo(-1, -2)));
    }
    #[test]
    fn resolve_shapes() {
        assert_eq!(Command::resolve("Circle 8"), Ok(Command::Circle(8)));
        assert_eq!(
            Command::resolve("Rectangle 20 30"),
            Ok(Command::Rectangle(20, 30))
        );
        assert_eq!(
            Command::resolve("Triangle 15 25"),
            Ok(Command::Triangle(15, 25))
        );
    }
    #[test]
    fn resolve_colors() {
        assert_eq!(
            Command::resolve("red"),
            Ok(Command::SetColor(PenColor::Red))
        );
        assert_eq!(
            Command::resolve("green"),
            Ok(Command::SetColor(PenColor::Green))
        );
        assert_eq!(
            Command::resolve("blue"),
            Ok(Command::SetColor(PenColor::Blue))
        );
    }
    #[test]
    fn shape_arguments_checked_here() {
        // These all pass the shallow syntax phase; the deep phase rejects.
        assert_eq!(
            Command::resolve("Circle"),
            Err(SyntaxError::InvalidArguments("Circle"))
        );
        assert_eq!(
            Command::resolve("Circle big"),
            Err(SyntaxError::InvalidArguments("Circle"))
        );
        assert_eq!(
            Command::resolve("Rectangle 1"),
            Err(SyntaxError::InvalidArguments("Rectangle"))
        );
        assert_eq!(
            Command::resolve("Triangle 1 2 3"),
            Err(SyntaxError::InvalidArguments("Triangle"))
        );
    }
    #[test]
    fn fill_is_permissive() {
        assert_eq!(Command::resolve("fill on"), Ok(Command::Fill(Some(true))));
        assert_eq!(Command::resolve("fill off"), Ok(Command::Fill(Some(false))));
        assert_eq!(Command::resolve("fill maybe"), Ok(Command::Fill(None)));
        assert_eq!(Command::resolve("fill"), Ok(Command::Fill(None)));
        assert_eq!(Command::resolve("fill on off"), Ok(Command::Fill(None)));
    }
}
