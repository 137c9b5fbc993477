//! # Syntax checking
//!
//! Shallow lexical validation of a raw command line, run before dispatch.
//! The checker knows the verb set and the arity of `moveTo`/`drawTo`; the
//! other verbs' arguments are validated only when the command is resolved
//! (see [`crate::command`]). That asymmetry is inherited behavior: the two
//! phases must reject the same inputs they always have, in the same phase.

/// Every verb the language knows, shallow-checked ones first.
pub const KNOWN_VERBS: [&str; 11] = [
    "moveTo",
    "drawTo",
    "Rectangle",
    "Circle",
    "clear",
    "Triangle",
    "green",
    "reset",
    "red",
    "blue",
    "fill",
];

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Empty command. Please enter a valid command.")]
    Empty,
    #[error("Invalid command. Please enter a valid command.")]
    UnknownCommand,
    #[error("Invalid syntax for {0} command.")]
    InvalidArguments(&'static str),
}

/// Pure validator of command text. Stateless; one instance serves any
/// number of commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct SyntaxChecker;

impl SyntaxChecker {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate `command` against the grammar. No side effects.
    ///
    /// # Errors
    /// - [`SyntaxError::Empty`] for a blank line.
    /// - [`SyntaxError::UnknownCommand`] when the verb is not recognized.
    /// - [`SyntaxError::InvalidArguments`] when `moveTo`/`drawTo` are not
    ///   followed by exactly two integers.
    pub fn check(&self, command: &str) -> Result<(), SyntaxError> {
        // `"".split(' ')` still yields one (empty) token; catch the truly
        // blank line up front.
        if command.is_empty() {
            return Err(SyntaxError::Empty);
        }
        let tokens: Vec<&str> = command.split(' ').collect();
        let verb = tokens[0];
        if !KNOWN_VERBS.contains(&verb) {
            return Err(SyntaxError::UnknownCommand);
        }
        match verb {
            "moveTo" => check_two_ints(&tokens, "moveTo"),
            "drawTo" => check_two_ints(&tokens, "drawTo"),
            // Everything else passes the shallow phase with any arguments.
            _ => Ok(()),
        }
    }
}

fn check_two_ints(tokens: &[&str], verb: &'static str) -> Result<(), SyntaxError> {
    if tokens.len() == 3
        && tokens[1].parse::<i32>().is_ok()
        && tokens[2].parse::<i32>().is_ok()
    {
        Ok(())
    } else {
        Err(SyntaxError::InvalidArguments(verb))
    }
}

#[cfg(test)]
mod test {
    use super::{SyntaxChecker, SyntaxError};

    #[test]
    fn empty_command() {
        let checker = SyntaxChecker::new();
        assert_eq!(checker.check(""), Err(SyntaxError::Empty));
    }
    #[test]
    fn unknown_verb() {
        let checker = SyntaxChecker::new();
        assert_eq!(checker.check("bogus"), Err(SyntaxError::UnknownCommand));
        // Verbs are case-sensitive.
        assert_eq!(checker.check("moveto 1 2"), Err(SyntaxError::UnknownCommand));
        assert_eq!(checker.check("circle 5"), Err(SyntaxError::UnknownCommand));
        // A leading space makes the verb token empty, which is not a verb.
        assert_eq!(checker.check(" clear"), Err(SyntaxError::UnknownCommand));
        // Likewise all-space input: non-empty, but no verb. Only the truly
        // blank line is `Empty`.
        assert_eq!(checker.check("   "), Err(SyntaxError::UnknownCommand));
    }
    #[test]
    fn move_and_draw_arity() {
        let checker = SyntaxChecker::new();
        assert_eq!(checker.check("moveTo 10 20"), Ok(()));
        assert_eq!(checker.check("drawTo -5 60"), Ok(()));
        assert_eq!(
            checker.check("moveTo 10"),
            Err(SyntaxError::InvalidArguments("moveTo"))
        );
        assert_eq!(
            checker.check("moveTo ten twenty"),
            Err(SyntaxError::InvalidArguments("moveTo"))
        );
        assert_eq!(
            checker.check("drawTo 1 2 3"),
            Err(SyntaxError::InvalidArguments("drawTo"))
        );
    }
    #[test]
    fn shape_verbs_pass_shallow_phase() {
        // Inherited behavior: argument validation for these happens at
        // dispatch, not here.
        let checker = SyntaxChecker::new();
        assert_eq!(checker.check("Circle"), Ok(()));
        assert_eq!(checker.check("Circle banana"), Ok(()));
        assert_eq!(checker.check("Rectangle 1"), Ok(()));
        assert_eq!(checker.check("Triangle a b c"), Ok(()));
        assert_eq!(checker.check("fill sideways"), Ok(()));
    }
    #[test]
    fn bare_verbs() {
        let checker = SyntaxChecker::new();
        for verb in ["clear", "reset", "red", "green", "blue"] {
            assert_eq!(checker.check(verb), Ok(()), "{verb}");
        }
    }
    #[test]
    fn error_messages() {
        assert_eq!(
            SyntaxError::Empty.to_string(),
            "Empty command. Please enter a valid command."
        );
        assert_eq!(
            SyntaxError::UnknownCommand.to_string(),
            "Invalid command. Please enter a valid command."
        );
        assert_eq!(
            SyntaxError::InvalidArguments("moveTo").to_string(),
            "Invalid syntax for moveTo command."
        );
    }
}
