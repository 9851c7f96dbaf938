//! Document model for Platine.
//!
//! This crate provides:
//! - [`Document`] - Symbols plus grid state, with identity allocation
//! - [`Symbol`] - A named container of pins and wires
//! - [`Pin`] - A connection point and its keyword-coded attributes
//! - [`Wire`] - A straight segment with a bounded stroke width
//! - [`GridSettings`] - The snap grid and its restorable snapshot

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod document;
pub mod grid;
pub mod pin;
pub mod symbol;
pub mod wire;

pub use document::Document;
pub use grid::{DEFAULT_PITCH, GridSettings, GridState, MIN_PITCH};
pub use pin::{Pin, PinDirection, PinFunction, PinLength, PinVisibility};
pub use symbol::Symbol;
pub use wire::{DEFAULT_WIDTH, Wire};
