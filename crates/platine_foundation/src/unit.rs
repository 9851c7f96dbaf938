//! Length units and conversions for coordinate input.
//!
//! Millimeters are the canonical internal unit. Every other unit is
//! described by how many of it fit into one millimeter, which makes
//! conversion a divide into canonical form and a multiply out of it.

use std::fmt;

use crate::error::{Error, Result};

/// A length unit recognized in command text.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    /// Thousandths of a millimeter.
    Micron,
    /// The canonical internal unit.
    Millimeter,
    /// Thousandths of an inch.
    Mil,
    /// Inches.
    Inch,
}

/// All units, in table order.
pub const UNITS: [Unit; 4] = [Unit::Micron, Unit::Millimeter, Unit::Mil, Unit::Inch];

/// Suffixes tried longest-first so `mil` is never shadowed by `mm` and
/// `mic` never swallows the start of `inch` input.
const SUFFIXES: [(&str, Unit); 4] = [
    ("inch", Unit::Inch),
    ("mic", Unit::Micron),
    ("mil", Unit::Mil),
    ("mm", Unit::Millimeter),
];

impl Unit {
    /// How many of this unit make up one millimeter.
    #[must_use]
    pub fn per_millimeter(self) -> f64 {
        match self {
            Self::Micron => 1000.0,
            Self::Millimeter => 1.0,
            Self::Mil => 1000.0 / 25.4,
            Self::Inch => 1.0 / 25.4,
        }
    }

    /// The keyword and suffix spelling of this unit.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Micron => "mic",
            Self::Millimeter => "mm",
            Self::Mil => "mil",
            Self::Inch => "inch",
        }
    }

    /// Looks a unit up by its exact keyword. Matching is case-sensitive.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        UNITS.iter().copied().find(|unit| unit.code() == code)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Converts a magnitude between units. Same-unit conversion is exact.
#[must_use]
pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    if from == to {
        return value;
    }
    value / from.per_millimeter() * to.per_millimeter()
}

/// Splits a trailing unit suffix off a token, longest suffix first.
///
/// Returns the numeric prefix and the unit, or `None` when the token
/// carries no recognized suffix.
#[must_use]
pub fn split_unit_suffix(token: &str) -> Option<(&str, Unit)> {
    SUFFIXES
        .iter()
        .find_map(|(suffix, unit)| token.strip_suffix(suffix).map(|prefix| (prefix, *unit)))
}

/// Parses a magnitude token into millimeters.
///
/// A recognized suffix selects the source unit; without one the token is
/// taken to be millimeters already. Text that fails to parse as a number,
/// with or without its suffix stripped, is an [`ErrorKind::InvalidNumber`]
/// error.
///
/// [`ErrorKind::InvalidNumber`]: crate::error::ErrorKind::InvalidNumber
pub fn to_millimeters(token: &str) -> Result<f64> {
    let (text, unit) = match split_unit_suffix(token) {
        Some((prefix, unit)) => (prefix, unit),
        None => (token, Unit::Millimeter),
    };
    let magnitude: f64 = text
        .parse()
        .map_err(|_| Error::invalid_number(token))?;
    Ok(magnitude / unit.per_millimeter())
}
