//! Integration tests for the foundation layer.
//!
//! Bounded values, coordinate pairs, the unit table, quantized rotation,
//! and error plumbing, exercised through the public crate surface.

mod rotation;
mod units;
mod values;
