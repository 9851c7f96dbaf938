//! Wire segments.

use std::fmt;

use platine_foundation::{BoundedValue, CoordPair, ElementId};

/// Default stroke width in millimeters (6 mil).
pub const DEFAULT_WIDTH: f64 = 0.1524;

/// One straight segment of a wire.
///
/// A drawn polyline becomes one segment per consecutive point pair, each
/// with its own identity so undo can peel segments off individually.
#[derive(Debug)]
pub struct Wire {
    id: ElementId,
    from: CoordPair,
    to: CoordPair,
    width: BoundedValue,
}

impl Wire {
    /// Creates a segment between two points with the default width.
    #[must_use]
    pub fn new(id: ElementId, from: (f64, f64), to: (f64, f64)) -> Self {
        Self {
            id,
            from: CoordPair::at(from.0, from.1),
            to: CoordPair::at(to.0, to.1),
            width: BoundedValue::new(DEFAULT_WIDTH).with_bounds(0.0, f64::INFINITY),
        }
    }

    /// The identity handle this segment was created under.
    #[must_use]
    pub const fn id(&self) -> ElementId {
        self.id
    }

    /// Start point in millimeters.
    #[must_use]
    pub const fn from(&self) -> &CoordPair {
        &self.from
    }

    /// Mutable access to the start point.
    pub fn from_mut(&mut self) -> &mut CoordPair {
        &mut self.from
    }

    /// End point in millimeters.
    #[must_use]
    pub const fn to(&self) -> &CoordPair {
        &self.to
    }

    /// Mutable access to the end point.
    pub fn to_mut(&mut self) -> &mut CoordPair {
        &mut self.to
    }

    /// Stroke width in millimeters, clamped non-negative.
    #[must_use]
    pub const fn width(&self) -> &BoundedValue {
        &self.width
    }

    /// Sets the stroke width, reporting whether it changed.
    pub fn set_width(&mut self, width: f64) -> bool {
        self.width.set(width)
    }
}

impl fmt::Display for Wire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} width {}", self.from, self.to, self.width)
    }
}
