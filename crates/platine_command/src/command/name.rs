//! The NAME command: rename the active symbol.

use platine_document::Document;
use platine_foundation::{ElementId, Error, Result};
use tracing::warn;

use crate::command::Command;
use crate::tokenizer::Clause;

/// `NAME 'NEWNAME'`
///
/// The displaced name is the memento: unexecute puts it back.
#[derive(Debug)]
pub struct NameCommand {
    raw: String,
    target: ElementId,
    new_name: String,
    displaced: Option<String>,
    unrecognized: Vec<String>,
}

impl NameCommand {
    /// Parses a name clause against the symbol it will edit.
    pub fn parse(target: ElementId, args: &str) -> Result<Self> {
        let mut clause = Clause::tokenize(args)?;
        let new_name = clause.take_name().ok_or_else(Error::missing_name)?;

        let mut unrecognized = Vec::new();
        for token in clause.into_remaining() {
            warn!(%token, "unrecognized name argument ignored");
            unrecognized.push(token);
        }

        Ok(Self {
            raw: args.to_string(),
            target,
            new_name,
            displaced: None,
            unrecognized,
        })
    }
}

impl Command for NameCommand {
    fn verb(&self) -> &'static str {
        "NAME"
    }

    fn raw_args(&self) -> &str {
        &self.raw
    }

    fn execute(&mut self, document: &mut Document) -> Result<()> {
        let symbol = document
            .symbol_mut(self.target)
            .ok_or_else(|| Error::stale_element(self.target))?;
        self.displaced = Some(symbol.name().to_string());
        symbol.set_name(self.new_name.clone());
        Ok(())
    }

    fn unexecute(&mut self, document: &mut Document) -> Result<()> {
        let Some(displaced) = self.displaced.take() else {
            return Err(Error::internal("NAME unexecute without a prior execute"));
        };
        let symbol = document
            .symbol_mut(self.target)
            .ok_or_else(|| Error::stale_element(self.target))?;
        symbol.set_name(displaced);
        Ok(())
    }

    fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }
}
