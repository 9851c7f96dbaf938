//! Bounded, change-notifying numeric values.
//!
//! [`BoundedValue`] is the atom of the Platine data model: a single `f64`
//! that clamps every write into a closed range, rounds every read to a
//! configured display precision, and tells registered listeners when the
//! stored value actually changed. Mutation never fails; out-of-range input
//! is folded back to the nearest bound instead of rejected.

use std::fmt;

use crate::observe::{ListenerId, Listeners};

/// Callback type invoked after a [`BoundedValue`] changes.
pub type ValueListener = dyn FnMut(&BoundedValue);

/// Default number of decimal digits used for rounding on read.
pub const DEFAULT_PRECISION: u32 = 6;

/// A clamped `f64` with change notification.
///
/// Writes go through [`set`](Self::set), which clamps into `[min, max]`
/// and fires listeners only when the stored value differs from what was
/// there before. Reads come in two flavors: [`raw`](Self::raw) returns the
/// stored value untouched, [`get`](Self::get) rounds it to the configured
/// precision using half-up rounding (ties go away from zero).
pub struct BoundedValue {
    value: f64,
    previous: f64,
    min: f64,
    max: f64,
    precision: u32,
    listeners: Listeners<ValueListener>,
}

impl BoundedValue {
    /// Creates an unbounded value with the default precision.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            previous: value,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            precision: DEFAULT_PRECISION,
            listeners: Listeners::new(),
        }
    }

    /// Restricts the value to `[min, max]`, clamping the current value.
    ///
    /// `min` must not exceed `max`.
    #[must_use]
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        debug_assert!(min <= max, "bounds must be ordered");
        self.min = min;
        self.max = max;
        self.value = clamp(self.value, min, max);
        self.previous = self.value;
        self
    }

    /// Sets the number of decimal digits used by [`get`](Self::get).
    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Stores a new value, clamping it into bounds.
    ///
    /// Returns whether the stored value changed. Listeners fire only on
    /// change, after the value and its predecessor have both been updated,
    /// and receive the value itself as payload.
    pub fn set(&mut self, value: f64) -> bool {
        self.previous = self.value;
        self.value = clamp(value, self.min, self.max);
        let changed = self.value != self.previous;
        if changed {
            self.notify();
        }
        changed
    }

    /// The stored value rounded to the configured precision.
    #[must_use]
    pub fn get(&self) -> f64 {
        round_half_up(self.value, self.precision)
    }

    /// The stored value without rounding.
    #[must_use]
    pub const fn raw(&self) -> f64 {
        self.value
    }

    /// The stored value before the most recent change.
    #[must_use]
    pub const fn previous(&self) -> f64 {
        self.previous
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Decimal digits used for rounding on read.
    #[must_use]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Renders the value as fixed-point text at the requested precision.
    ///
    /// Trailing zeros are trimmed, but at least one fractional digit is
    /// always kept, so a whole number renders as `"2.0"` rather than `"2"`.
    #[must_use]
    pub fn format(&self, precision: u32) -> String {
        format_fixed(self.value, precision)
    }

    /// Registers a change listener; the handle unsubscribes it later.
    pub fn listen(&mut self, callback: impl FnMut(&BoundedValue) + 'static) -> ListenerId {
        self.listeners.insert(Box::new(callback))
    }

    /// Unsubscribes a listener. Unknown handles are ignored.
    pub fn ignore(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        // The registry is moved out for the duration of the pass so the
        // callbacks can borrow the value itself without aliasing it.
        let mut listeners = std::mem::take(&mut self.listeners);
        for callback in listeners.callbacks_mut() {
            callback(&*self);
        }
        self.listeners = listeners;
    }
}

impl Default for BoundedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl fmt::Debug for BoundedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedValue")
            .field("value", &self.value)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("precision", &self.precision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl fmt::Display for BoundedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(self.precision))
    }
}

impl PartialEq for BoundedValue {
    /// Listener registries are identity, not state; equality compares the
    /// numeric configuration only.
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
            && self.min == other.min
            && self.max == other.max
            && self.precision == other.precision
    }
}

/// Clamps without panicking on unordered or non-finite bounds.
fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Rounds to `digits` decimal places, ties away from zero.
fn round_half_up(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    (value * factor).round() / factor
}

/// Renders any `f64` as trimmed fixed-point text.
///
/// Same contract as [`BoundedValue::format`]: at least one fractional
/// digit survives the trim.
#[must_use]
pub fn format_fixed(value: f64, precision: u32) -> String {
    let digits = precision.max(1) as usize;
    let mut text = format!("{value:.digits$}");
    while text.ends_with('0') && !text.ends_with(".0") {
        text.pop();
    }
    text
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::BoundedValue;
    use serde::de::{Deserialize, Deserializer};
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    // Listener registries are runtime wiring and never cross a
    // serialization boundary.
    impl Serialize for BoundedValue {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("BoundedValue", 4)?;
            state.serialize_field("value", &self.raw())?;
            state.serialize_field("min", &self.min())?;
            state.serialize_field("max", &self.max())?;
            state.serialize_field("precision", &self.precision())?;
            state.end()
        }
    }

    #[derive(serde::Deserialize)]
    #[serde(rename = "BoundedValue")]
    struct Packed {
        value: f64,
        min: f64,
        max: f64,
        precision: u32,
    }

    impl<'de> Deserialize<'de> for BoundedValue {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let packed = Packed::deserialize(deserializer)?;
            Ok(BoundedValue::new(packed.value)
                .with_bounds(packed.min, packed.max)
                .with_precision(packed.precision))
        }
    }
}
