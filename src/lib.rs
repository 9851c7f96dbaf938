//! Platine - Scriptable schematic symbol editor
//!
//! This crate re-exports all layers of the Platine system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: platine_runtime    - Shell, script runner, CLI
//! Layer 2: platine_command    - Tokenizer, argument tables, reversible commands
//! Layer 1: platine_document   - Symbols, pins, wires, grid state
//! Layer 0: platine_foundation - Bounded values, coordinates, rotation, units
//! ```

pub use platine_command as command;
pub use platine_document as document;
pub use platine_foundation as foundation;
pub use platine_runtime as runtime;
