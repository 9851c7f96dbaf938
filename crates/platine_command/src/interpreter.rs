//! Verb dispatch: one line of text to one directive.

use platine_foundation::{ElementId, Error, Result};
use tracing::warn;

use crate::command::{Command, GridCommand, NameCommand, PinCommand, WireCommand};

/// Editing verbs the interpreter understands, upper-cased.
pub const VERBS: [&str; 6] = ["PIN", "WIRE", "NAME", "GRID", "UNDO", "REDO"];

/// What one interpreted line asks the host to do.
#[derive(Debug)]
pub enum Directive {
    /// Execute this command and record it for undo.
    Edit(Box<dyn Command>),
    /// Unexecute the most recent command.
    Undo,
    /// Re-execute the most recently undone command.
    Redo,
}

/// Splits a clause into its verb and argument text.
///
/// The clause is truncated at the first `;` before splitting, so a verb
/// after a semicolon never runs. Verbs match case-insensitively and only
/// in full; there are no abbreviations.
#[must_use]
pub fn split_verb(line: &str) -> (&str, &str) {
    let clause = match line.split_once(';') {
        Some((head, _)) => head,
        None => line,
    };
    let clause = clause.trim();
    match clause.split_once(char::is_whitespace) {
        Some((verb, args)) => (verb, args.trim_start()),
        None => (clause, ""),
    }
}

/// Interprets one line of command text.
///
/// `active` is the symbol currently being edited; verbs that edit symbol
/// contents fail with [`ErrorKind::NoActiveSymbol`] when it is `None`.
///
/// [`ErrorKind::NoActiveSymbol`]: platine_foundation::ErrorKind::NoActiveSymbol
pub fn parse_line(line: &str, active: Option<ElementId>) -> Result<Directive> {
    let (verb, args) = split_verb(line);
    if verb.is_empty() {
        return Err(Error::empty_command());
    }

    match verb.to_ascii_uppercase().as_str() {
        "PIN" => Ok(Directive::Edit(Box::new(PinCommand::parse(
            require_active(active)?,
            args,
        )?))),
        "WIRE" => Ok(Directive::Edit(Box::new(WireCommand::parse(
            require_active(active)?,
            args,
        )?))),
        "NAME" => Ok(Directive::Edit(Box::new(NameCommand::parse(
            require_active(active)?,
            args,
        )?))),
        "GRID" => Ok(Directive::Edit(Box::new(GridCommand::parse(args)?))),
        "UNDO" => {
            ignore_trailing("UNDO", args);
            Ok(Directive::Undo)
        }
        "REDO" => {
            ignore_trailing("REDO", args);
            Ok(Directive::Redo)
        }
        _ => Err(Error::unknown_command(verb)),
    }
}

fn require_active(active: Option<ElementId>) -> Result<ElementId> {
    active.ok_or_else(Error::no_active_symbol)
}

fn ignore_trailing(verb: &str, args: &str) {
    if !args.trim().is_empty() {
        warn!(verb, args, "trailing arguments ignored");
    }
}
