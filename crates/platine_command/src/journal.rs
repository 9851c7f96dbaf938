//! Undo/redo bookkeeping for executed commands.

use platine_document::Document;
use platine_foundation::Result;
use tracing::debug;

use crate::command::Command;

/// LIFO history of executed commands.
///
/// Applying a new edit clears the redo stack; a branch abandoned by
/// editing after an undo is gone for good. Undo and redo move one
/// command between the stacks, unexecuting or re-executing it against
/// the document as it goes.
#[derive(Debug, Default)]
pub struct Journal {
    undo: Vec<Box<dyn Command>>,
    redo: Vec<Box<dyn Command>>,
}

impl Journal {
    /// Creates an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a command and records it for undo.
    ///
    /// On failure the document is untouched by the journal and nothing
    /// is recorded; a command that cannot execute has no place in
    /// history.
    pub fn apply(&mut self, mut command: Box<dyn Command>, document: &mut Document) -> Result<()> {
        command.execute(document)?;
        debug!(verb = command.verb(), "command applied");
        self.redo.clear();
        self.undo.push(command);
        Ok(())
    }

    /// Unexecutes the most recent command, if any.
    ///
    /// Returns the verb of the undone command, or `None` when the
    /// history is empty.
    pub fn undo(&mut self, document: &mut Document) -> Result<Option<&'static str>> {
        let Some(mut command) = self.undo.pop() else {
            return Ok(None);
        };
        match command.unexecute(document) {
            Ok(()) => {
                let verb = command.verb();
                debug!(verb, "command undone");
                self.redo.push(command);
                Ok(Some(verb))
            }
            Err(err) => {
                // Keep history coherent even on the impossible path.
                self.undo.push(command);
                Err(err)
            }
        }
    }

    /// Re-executes the most recently undone command, if any.
    pub fn redo(&mut self, document: &mut Document) -> Result<Option<&'static str>> {
        let Some(mut command) = self.redo.pop() else {
            return Ok(None);
        };
        match command.execute(document) {
            Ok(()) => {
                let verb = command.verb();
                debug!(verb, "command redone");
                self.undo.push(command);
                Ok(Some(verb))
            }
            Err(err) => {
                self.redo.push(command);
                Err(err)
            }
        }
    }

    /// Number of commands available to undo.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Number of commands available to redo.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}
