//! Grid settings and their restorable snapshot.

use std::fmt;

use platine_foundation::{BoundedValue, Unit, convert, format_fixed};

/// Smallest allowed grid pitch in millimeters.
pub const MIN_PITCH: f64 = 0.0001;

/// Default grid pitch in millimeters (0.1 inch).
pub const DEFAULT_PITCH: f64 = 2.54;

/// The document's snap grid.
///
/// The pitch is stored in millimeters regardless of the display unit;
/// the unit only controls how magnitudes are entered and echoed back.
#[derive(Debug)]
pub struct GridSettings {
    pitch: BoundedValue,
    unit: Unit,
    visible: bool,
}

impl GridSettings {
    /// Creates the default grid: 0.1 inch pitch, displayed in inches,
    /// visible.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pitch: BoundedValue::new(DEFAULT_PITCH).with_bounds(MIN_PITCH, f64::INFINITY),
            unit: Unit::Inch,
            visible: true,
        }
    }

    /// The pitch in millimeters.
    #[must_use]
    pub const fn pitch(&self) -> &BoundedValue {
        &self.pitch
    }

    /// Sets the pitch in millimeters, clamped to the minimum.
    pub fn set_pitch(&mut self, millimeters: f64) -> bool {
        self.pitch.set(millimeters)
    }

    /// The unit used for entering and echoing magnitudes.
    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Sets the display unit. The stored pitch does not move.
    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }

    /// The pitch expressed in the display unit.
    #[must_use]
    pub fn display_pitch(&self) -> f64 {
        convert(self.pitch.raw(), Unit::Millimeter, self.unit)
    }

    /// Whether the grid is drawn.
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the grid.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Captures the complete grid state for later restoration.
    #[must_use]
    pub fn snapshot(&self) -> GridState {
        GridState {
            pitch: self.pitch.raw(),
            unit: self.unit,
            visible: self.visible,
        }
    }

    /// Restores a previously captured state.
    pub fn restore(&mut self, state: GridState) {
        self.pitch.set(state.pitch);
        self.unit = state.unit;
        self.visible = state.visible;
    }
}

impl Default for GridSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GridSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.visible { "on" } else { "off" };
        let pitch = format_fixed(self.display_pitch(), self.pitch.precision());
        write!(f, "grid {pitch} {} {shown}", self.unit)
    }
}

/// A point-in-time copy of every grid attribute.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridState {
    /// Pitch in millimeters.
    pub pitch: f64,
    /// Display unit.
    pub unit: Unit,
    /// Whether the grid is drawn.
    pub visible: bool,
}
