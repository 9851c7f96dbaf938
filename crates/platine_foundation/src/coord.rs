//! Composite coordinate built from two bounded values.

use std::fmt;

use crate::observe::{ListenerId, Listeners};
use crate::value::BoundedValue;

/// Which child of a [`CoordPair`] changed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Horizontal component.
    X,
    /// Vertical component.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// Callback type invoked after a [`CoordPair`] child changes.
pub type CoordListener = dyn FnMut(Axis, &BoundedValue);

/// An x/y coordinate whose components are [`BoundedValue`]s.
///
/// The pair owns its children and is the only way to mutate them, so every
/// child change surfaces as exactly one composite event carrying the axis
/// and the changed value. Writes that clamp to the current value emit
/// nothing, same as the underlying values.
pub struct CoordPair {
    x: BoundedValue,
    y: BoundedValue,
    listeners: Listeners<CoordListener>,
}

impl CoordPair {
    /// Creates a pair at the origin with unbounded children.
    #[must_use]
    pub fn new() -> Self {
        Self::at(0.0, 0.0)
    }

    /// Creates a pair at the given position.
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x: BoundedValue::new(x),
            y: BoundedValue::new(y),
            listeners: Listeners::new(),
        }
    }

    /// Same pair with both components rounding at the given precision.
    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.x = self.x.with_precision(precision);
        self.y = self.y.with_precision(precision);
        self
    }

    /// The horizontal component.
    #[must_use]
    pub const fn x(&self) -> &BoundedValue {
        &self.x
    }

    /// The vertical component.
    #[must_use]
    pub const fn y(&self) -> &BoundedValue {
        &self.y
    }

    /// Sets the horizontal component, reporting whether it changed.
    pub fn set_x(&mut self, value: f64) -> bool {
        let changed = self.x.set(value);
        if changed {
            self.emit(Axis::X);
        }
        changed
    }

    /// Sets the vertical component, reporting whether it changed.
    pub fn set_y(&mut self, value: f64) -> bool {
        let changed = self.y.set(value);
        if changed {
            self.emit(Axis::Y);
        }
        changed
    }

    /// Sets both components.
    ///
    /// Changes are reported per axis, so moving the pair diagonally emits
    /// two composite events, one for each child that actually moved.
    pub fn set(&mut self, x: f64, y: f64) -> bool {
        let moved_x = self.set_x(x);
        let moved_y = self.set_y(y);
        moved_x || moved_y
    }

    /// Registers a composite change listener.
    pub fn listen(&mut self, callback: impl FnMut(Axis, &BoundedValue) + 'static) -> ListenerId {
        self.listeners.insert(Box::new(callback))
    }

    /// Unsubscribes a composite listener. Unknown handles are ignored.
    pub fn ignore(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Renders as `"x y"` with both components at the given precision.
    #[must_use]
    pub fn format(&self, precision: u32) -> String {
        format!("{} {}", self.x.format(precision), self.y.format(precision))
    }

    fn emit(&mut self, axis: Axis) {
        let mut listeners = std::mem::take(&mut self.listeners);
        let child = match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        };
        for callback in listeners.callbacks_mut() {
            callback(axis, child);
        }
        self.listeners = listeners;
    }
}

impl Default for CoordPair {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CoordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoordPair")
            .field("x", &self.x.raw())
            .field("y", &self.y.raw())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl fmt::Display for CoordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.x, self.y)
    }
}

impl PartialEq for CoordPair {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::CoordPair;
    use crate::observe::Listeners;
    use crate::value::BoundedValue;
    use serde::de::{Deserialize, Deserializer};
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    impl Serialize for CoordPair {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("CoordPair", 2)?;
            state.serialize_field("x", self.x())?;
            state.serialize_field("y", self.y())?;
            state.end()
        }
    }

    #[derive(serde::Deserialize)]
    #[serde(rename = "CoordPair")]
    struct Packed {
        x: BoundedValue,
        y: BoundedValue,
    }

    impl<'de> Deserialize<'de> for CoordPair {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            // Child bounds and precision survive the round trip; listener
            // registrations do not.
            let packed = Packed::deserialize(deserializer)?;
            Ok(CoordPair {
                x: packed.x,
                y: packed.y,
                listeners: Listeners::new(),
            })
        }
    }
}
