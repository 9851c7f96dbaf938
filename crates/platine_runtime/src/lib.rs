//! Interactive shell, script runner, and CLI for Platine.
//!
//! This crate provides:
//! - [`Session`] - one document, one journal, one active symbol
//! - [`Repl`] - the interactive read-interpret-print shell
//! - [`run_script`] - line-oriented command script execution
//!
//! # Modules
//!
//! - [`session`] - Verb dispatch and session-level commands
//! - [`script`] - Command script files with nesting and error attribution
//! - [`repl`] - The shell loop, banner, and output styling
//! - [`editor`] - Line editing behind the [`LineEditor`] trait

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
mod highlight;
pub mod repl;
pub mod script;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use script::{ScriptReport, run_script};
pub use session::{Outcome, SESSION_VERBS, Session, help_text};
