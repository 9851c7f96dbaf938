//! Rotation state with optional quadrant snapping.

use std::fmt;

/// An angle in degrees with mirror/spin flags and optional snapping.
///
/// While `constrained` is set, every write is quantized to one of the
/// four quadrant angles. Toggling the constraint never moves the stored
/// angle: turning it on leaves an off-grid value in place until the next
/// write, and turning it off keeps whatever the snapped value was and
/// lets later writes through verbatim. The `allow_*` flags record which
/// transforms the owning element tolerates; they are carried as data and
/// not cross-checked against the mirror and spin state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rotation {
    degrees: f64,
    constrained: bool,
    mirror: bool,
    spin: bool,
    allow_mirror: bool,
    allow_spin: bool,
}

impl Rotation {
    /// Creates an unconstrained rotation at zero degrees.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            degrees: 0.0,
            constrained: false,
            mirror: false,
            spin: false,
            allow_mirror: false,
            allow_spin: false,
        }
    }

    /// Creates a quadrant-constrained rotation at zero degrees.
    #[must_use]
    pub const fn quadrant() -> Self {
        Self {
            constrained: true,
            ..Self::new()
        }
    }

    /// The stored angle in degrees.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Stores an angle, snapping it when the rotation is constrained.
    pub fn set_degrees(&mut self, degrees: f64) {
        self.degrees = if self.constrained {
            snap(degrees)
        } else {
            degrees
        };
    }

    /// Whether angles are being snapped to quadrants.
    #[must_use]
    pub const fn constrained(&self) -> bool {
        self.constrained
    }

    /// Toggles quadrant snapping.
    ///
    /// Enabling the constraint does not re-snap the stored angle; the
    /// next [`set_degrees`](Self::set_degrees) is the first write that
    /// snaps.
    pub fn set_constrained(&mut self, constrained: bool) {
        self.constrained = constrained;
    }

    /// Whether the element is mirrored.
    #[must_use]
    pub const fn mirror(&self) -> bool {
        self.mirror
    }

    /// Sets the mirror flag.
    pub fn set_mirror(&mut self, mirror: bool) {
        self.mirror = mirror;
    }

    /// Whether the element spins with its text.
    #[must_use]
    pub const fn spin(&self) -> bool {
        self.spin
    }

    /// Sets the spin flag.
    pub fn set_spin(&mut self, spin: bool) {
        self.spin = spin;
    }

    /// Whether mirroring is permitted for the owning element.
    #[must_use]
    pub const fn allow_mirror(&self) -> bool {
        self.allow_mirror
    }

    /// Sets the mirror permission flag.
    pub fn set_allow_mirror(&mut self, allow: bool) {
        self.allow_mirror = allow;
    }

    /// Whether spinning is permitted for the owning element.
    #[must_use]
    pub const fn allow_spin(&self) -> bool {
        self.allow_spin
    }

    /// Sets the spin permission flag.
    pub fn set_allow_spin(&mut self, allow: bool) {
        self.allow_spin = allow;
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Rotation {
    /// Renders in command keyword form, e.g. `R90` or `MR180`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.mirror { "MR" } else { "R" };
        write!(f, "{prefix}{}", self.degrees)
    }
}

/// Quantizes an angle to the nearest quadrant.
///
/// Bins are half-open and work on the raw input, so angles outside
/// `[0, 360)` that miss every bin fall back to zero.
fn snap(degrees: f64) -> f64 {
    if (45.0..135.0).contains(&degrees) {
        90.0
    } else if (135.0..225.0).contains(&degrees) {
        180.0
    } else if (225.0..315.0).contains(&degrees) {
        270.0
    } else {
        0.0
    }
}
