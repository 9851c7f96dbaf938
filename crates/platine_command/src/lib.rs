//! Command language for Platine symbol editing.
//!
//! This crate turns lines of command text like `PIN 'VDD' (0 -2.54) pas`
//! into reversible edits against a document.
//!
//! # Architecture
//!
//! ```text
//! "PIN 'VDD' (0.0 -2.54) short pas ; ignored"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [Name("VDD"), Coord("0.0 -2.54"), Word("short"), Word("pas")]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ARGUMENT        │  → [Length(Short), Direction(Passive)]
//! │ TABLES          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → PinCommand { name, origin, attributes, ... }
//! │ CONSTRUCTION    │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ JOURNAL         │  → execute now, unexecute on UNDO
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Clause tokenization with quoted names and coordinate groups
//! - [`options`] - Precedence-ordered keyword tables for pin arguments
//! - [`command`] - The [`Command`] trait and the four editing commands
//! - [`journal`] - LIFO undo/redo over executed commands
//! - [`interpreter`] - Verb dispatch from a line of text to a directive

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod interpreter;
pub mod journal;
pub mod options;
pub mod tokenizer;

pub use command::{Command, GridCommand, NameCommand, PinCommand, WireCommand};
pub use interpreter::{Directive, VERBS, parse_line, split_verb};
pub use journal::Journal;
pub use options::{Orientation, PinArg, classify, parse_point};
pub use tokenizer::{Clause, ScriptToken};
