//! Argument classification for pin clauses.
//!
//! Bare words in a pin clause are matched against the attribute keyword
//! tables one table at a time. Table order is part of the language
//! contract: direction, then function, then length, then visibility,
//! then orientation, and only then the swap level integer. The tables
//! share no keywords today, but the ordering is what guarantees a future
//! collision would resolve the same way in every build.

use platine_document::{PinDirection, PinFunction, PinLength, PinVisibility};
use platine_foundation::{Error, Result, to_millimeters};

/// An orientation keyword, decomposed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Orientation {
    /// Quadrant angle in degrees.
    pub degrees: f64,
    /// Whether the keyword carried the mirror prefix.
    pub mirrored: bool,
}

/// Orientation keywords in table order.
const ORIENTATIONS: [(&str, f64, bool); 8] = [
    ("R0", 0.0, false),
    ("R90", 90.0, false),
    ("R180", 180.0, false),
    ("R270", 270.0, false),
    ("MR0", 0.0, true),
    ("MR90", 90.0, true),
    ("MR180", 180.0, true),
    ("MR270", 270.0, true),
];

/// One classified pin argument.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PinArg {
    /// Electrical direction keyword.
    Direction(PinDirection),
    /// Edge decoration keyword.
    Function(PinFunction),
    /// Stem length keyword.
    Length(PinLength),
    /// Label visibility keyword.
    Visibility(PinVisibility),
    /// Orientation keyword.
    Orientation(Orientation),
    /// Swap level integer.
    SwapLevel(u8),
}

fn direction(token: &str) -> Option<PinArg> {
    PinDirection::from_code(token).map(PinArg::Direction)
}

fn function(token: &str) -> Option<PinArg> {
    PinFunction::from_code(token).map(PinArg::Function)
}

fn length(token: &str) -> Option<PinArg> {
    PinLength::from_code(token).map(PinArg::Length)
}

fn visibility(token: &str) -> Option<PinArg> {
    PinVisibility::from_code(token).map(PinArg::Visibility)
}

fn orientation(token: &str) -> Option<PinArg> {
    ORIENTATIONS
        .iter()
        .find(|(keyword, _, _)| *keyword == token)
        .map(|&(_, degrees, mirrored)| PinArg::Orientation(Orientation { degrees, mirrored }))
}

/// Keyword tables in precedence order.
const TABLES: [fn(&str) -> Option<PinArg>; 5] =
    [direction, function, length, visibility, orientation];

/// Classifies one bare word from a pin clause.
///
/// Returns `Ok(None)` for a token no table recognizes; only a numeric
/// token outside the swap level range is an error, because the author
/// plainly meant a swap level and got the one thing the model cannot
/// store.
pub fn classify(token: &str) -> Result<Option<PinArg>> {
    for table in TABLES {
        if let Some(arg) = table(token) {
            return Ok(Some(arg));
        }
    }
    swap_level(token)
}

/// The integer fallback. Range errors are fatal, parse failures are not.
fn swap_level(token: &str) -> Result<Option<PinArg>> {
    match token.parse::<i64>() {
        Ok(level) => match u8::try_from(level) {
            Ok(level) => Ok(Some(PinArg::SwapLevel(level))),
            Err(_) => Err(Error::swap_level_out_of_range(level)),
        },
        Err(_) => Ok(None),
    }
}

/// Parses a coordinate group body into an `(x, y)` pair of millimeters.
///
/// The body must hold exactly two magnitudes; each may carry a unit
/// suffix. Anything else is an invalid number error carrying the whole
/// group body.
pub fn parse_point(body: &str) -> Result<(f64, f64)> {
    let mut parts = body.split_whitespace();
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(Error::invalid_number(body));
    };
    Ok((to_millimeters(x)?, to_millimeters(y)?))
}
