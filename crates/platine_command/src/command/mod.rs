//! Reversible editing commands.
//!
//! A command is built in two phases. Parsing reads the clause text and
//! either produces a fully qualified command or fails, so a command value
//! in hand is always executable. Execution applies the edit to a document
//! and stashes whatever the inverse needs (identities of created
//! elements, displaced names, grid snapshots); unexecution replays that
//! stash. Parse once, execute and unexecute as often as the journal asks.

use std::fmt;

use platine_document::Document;
use platine_foundation::Result;

mod grid;
mod name;
mod pin;
mod wire;

pub use grid::GridCommand;
pub use name::NameCommand;
pub use pin::PinCommand;
pub use wire::WireCommand;

/// A parsed, reversible edit.
pub trait Command: fmt::Debug {
    /// The verb this command answers to, upper-cased.
    fn verb(&self) -> &'static str;

    /// The raw argument text the command was parsed from.
    fn raw_args(&self) -> &str;

    /// Applies the edit to the document.
    fn execute(&mut self, document: &mut Document) -> Result<()>;

    /// Reverts the most recent [`execute`](Self::execute) exactly.
    fn unexecute(&mut self, document: &mut Document) -> Result<()>;

    /// Tokens from the clause that no table recognized.
    ///
    /// These are ignored by execution; the host surfaces them so the
    /// author can spot typos without losing the rest of the clause.
    fn unrecognized(&self) -> &[String] {
        &[]
    }
}
