//! Core value model for Platine.
//!
//! This crate provides:
//! - [`BoundedValue`] - A clamped, change-notifying `f64`
//! - [`CoordPair`] - An x/y composite of two bounded values
//! - [`Rotation`] - An angle with optional quadrant snapping
//! - [`Unit`] - Length units and millimeter conversion
//! - [`ElementId`] - Identity handles for document elements
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coord;
pub mod element;
pub mod error;
pub mod observe;
pub mod rotation;
pub mod unit;
pub mod value;

pub use coord::{Axis, CoordListener, CoordPair};
pub use element::ElementId;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use observe::{ListenerId, Listeners};
pub use rotation::Rotation;
pub use unit::{Unit, UNITS, convert, split_unit_suffix, to_millimeters};
pub use value::{BoundedValue, DEFAULT_PRECISION, ValueListener, format_fixed};
