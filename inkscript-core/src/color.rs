//! # Pen colors
//!
//! The closed set of named colors a pen can take. Names round-trip through
//! the settings file, so `Display` and `FromStr` must agree - both are
//! derived from the variant names. Lookup is case-insensitive; the display
//! form is the canonical PascalCase name.

/// A named pen color.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum PenColor {
    #[default]
    Black,
    White,
    Gray,
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    Orange,
    Purple,
}

impl PenColor {
    /// Resolve a color by name, `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}
