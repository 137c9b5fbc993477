//! # Settings persistence
//!
//! A line-oriented text codec for the subset of [`DrawingState`] worth
//! keeping between sessions: pen position, pen color, fill flag. One
//! `key value...` directive per line, order-insensitive on read, with
//! malformed or unknown lines skipped rather than fatal - resilience wins
//! over strictness on this path.
//!
//! Keys are PascalCase (`PenPosition`, `PenColor`, `FillShapes`) for both
//! reader and writer.

use crate::{color::PenColor, geom::Point, state::DrawingState};
use std::{
    io::{BufRead, BufReader, Result as IoResult, Write},
    path::Path,
};

const KEY_PEN_POSITION: &str = "PenPosition";
const KEY_PEN_COLOR: &str = "PenColor";
const KEY_FILL_SHAPES: &str = "FillShapes";

/// Write the three settings directives, in fixed order.
///
/// # Errors
/// Forwarded from the sink.
pub fn save<W: Write>(state: &DrawingState, mut sink: W) -> IoResult<()> {
    let position = state.pen_position();
    writeln!(sink, "{KEY_PEN_POSITION} {} {}", position.x, position.y)?;
    writeln!(sink, "{KEY_PEN_COLOR} {}", state.pen_color())?;
    writeln!(sink, "{KEY_FILL_SHAPES} {}", state.fill_shapes())?;
    Ok(())
}

/// Read directives line-by-line, applying each recognized one to `state`.
/// Unknown keys, malformed arguments, and unknown color names are logged
/// and skipped.
///
/// # Errors
/// Forwarded from the source; never from file content.
pub fn load<R: BufRead>(state: &mut DrawingState, source: R) -> IoResult<()> {
    for line in source.lines() {
        let line = line?;
        let parts: Vec<&str> = line.split(' ').collect();
        match parts.as_slice() {
            [KEY_PEN_POSITION, x, y] => {
                if let (Ok(x), Ok(y)) = (x.parse(), y.parse()) {
                    state.restore(Some(Point::new(x, y)), None, None);
                } else {
                    log::warn!("skipping malformed pen position: {line:?}");
                }
            }
            [KEY_PEN_COLOR, name] => match PenColor::from_name(name) {
                Some(color) => state.restore(None, Some(color), None),
                None => log::warn!("skipping unknown pen color: {name:?}"),
            },
            [KEY_FILL_SHAPES, flag] => {
                if let Ok(fill) = flag.parse() {
                    state.restore(None, None, Some(fill));
                } else {
                    log::warn!("skipping malformed fill flag: {flag:?}");
                }
            }
            _ => log::warn!("skipping unrecognized settings line: {line:?}"),
        }
    }
    Ok(())
}

/// [`save`] to a file, created or truncated.
///
/// # Errors
/// Forwarded from file creation or writing.
pub fn save_path(state: &DrawingState, path: &Path) -> IoResult<()> {
    save(state, std::fs::File::create(path)?)
}

/// [`load`] from a file. A missing file is a no-op, not an error.
///
/// # Errors
/// Forwarded from opening (other than not-found) or reading.
pub fn load_path(state: &mut DrawingState, path: &Path) -> IoResult<()> {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };
    load(state, BufReader::new(file))
}
