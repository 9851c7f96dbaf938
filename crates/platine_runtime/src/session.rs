//! Session state for the interactive shell.
//!
//! The session owns the document being edited, the undo journal, and the
//! choice of which symbol the editing verbs apply to. It interprets one
//! line at a time and tells the host what, if anything, to show the user.

use std::fmt::Write as _;
use std::path::PathBuf;

use platine_command::{
    Clause, Command, Directive, GridCommand, Journal, ScriptToken, parse_line, split_verb,
};
use platine_document::{Document, Symbol};
use platine_foundation::{ElementId, Error, ErrorContext, Result};
use tracing::warn;

use crate::script;

/// Verbs handled by the session itself rather than the command
/// interpreter. None of them is journaled.
pub const SESSION_VERBS: [&str; 6] = ["EDIT", "INFO", "SCRIPT", "HELP", "QUIT", "EXIT"];

/// What the host should do after a line has been interpreted.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to report.
    Continue,
    /// Informational text to show.
    Message(String),
    /// A non-fatal complaint, typically ignored arguments.
    Warning(String),
    /// The session asked to terminate.
    Quit,
}

/// Interactive editing state.
///
/// All edits funnel through [`Session::run_line`]; the session routes
/// editing verbs through the interpreter and the journal, and answers
/// the session verbs (`EDIT`, `INFO`, `SCRIPT`, `HELP`, `QUIT`) itself.
pub struct Session {
    /// The document under edit.
    document: Document,

    /// Undo/redo journal for executed commands.
    journal: Journal,

    /// The symbol editing verbs currently apply to.
    active: Option<ElementId>,

    /// Current load path for relative script resolution.
    load_path: PathBuf,

    /// Nesting depth of the running scripts.
    script_depth: usize,
}

impl Session {
    /// Creates a session with an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::with_document(Document::new())
    }

    /// Creates a session around an existing document.
    #[must_use]
    pub fn with_document(document: Document) -> Self {
        Self {
            document,
            journal: Journal::new(),
            active: None,
            load_path: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            script_depth: 0,
        }
    }

    /// Returns a reference to the document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Returns a mutable reference to the document.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Returns a reference to the command journal.
    #[must_use]
    pub const fn journal(&self) -> &Journal {
        &self.journal
    }

    /// The symbol editing verbs currently apply to, if any.
    #[must_use]
    pub const fn active(&self) -> Option<ElementId> {
        self.active
    }

    /// Gets the current load path.
    #[must_use]
    pub fn load_path(&self) -> &PathBuf {
        &self.load_path
    }

    /// Sets the load path (used while running scripts).
    pub fn set_load_path(&mut self, path: PathBuf) {
        self.load_path = path;
    }

    /// Resolves a path relative to the current load path.
    #[must_use]
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let p = PathBuf::from(path);
        if p.is_absolute() {
            p
        } else {
            self.load_path.join(p)
        }
    }

    /// How deeply nested the currently running scripts are.
    #[must_use]
    pub const fn script_depth(&self) -> usize {
        self.script_depth
    }

    pub(crate) fn enter_script(&mut self) {
        self.script_depth += 1;
    }

    pub(crate) fn leave_script(&mut self) {
        self.script_depth -= 1;
    }

    /// Interprets one line of command text.
    ///
    /// Blank lines and pure comment trailers are accepted silently.
    ///
    /// # Errors
    ///
    /// Returns an error when the line fails to parse or a command refuses
    /// to execute. The document is never left partially edited; the error
    /// carries the offending clause as context.
    pub fn run_line(&mut self, line: &str) -> Result<Outcome> {
        let (verb, args) = split_verb(line);
        if verb.is_empty() {
            return Ok(Outcome::Continue);
        }

        let outcome = match verb.to_ascii_uppercase().as_str() {
            "EDIT" => self.open_symbol(args),
            "INFO" => Ok(self.describe(args)),
            "SCRIPT" => self.script_file(args),
            "HELP" => Ok(Outcome::Message(help_text().to_string())),
            "QUIT" | "EXIT" => Ok(Outcome::Quit),
            // A bare GRID is a query, so the grid verb cannot go straight
            // through the interpreter like the others.
            "GRID" => self.grid(args),
            _ => self.dispatch(line),
        };

        outcome.map_err(|error| attach_clause(error, line))
    }

    /// `EDIT name`: selects a symbol by name, creating it if necessary.
    fn open_symbol(&mut self, args: &str) -> Result<Outcome> {
        let name = single_argument(args)?;
        let existing = self.document.symbol_by_name(&name).map(Symbol::id);
        let id = match existing {
            Some(id) => id,
            None => self.document.add_symbol(name.clone()),
        };
        self.active = Some(id);
        Ok(Outcome::Message(format!("editing '{name}'")))
    }

    /// `INFO`: formats the grid and the active symbol's contents.
    fn describe(&self, args: &str) -> Outcome {
        if !args.is_empty() {
            warn!(args, "INFO takes no arguments");
        }

        let mut text = String::new();
        let _ = writeln!(text, "{}", self.document.grid());
        match self.active.and_then(|id| self.document.symbol(id)) {
            Some(symbol) => {
                let _ = writeln!(
                    text,
                    "symbol '{}': {} pins, {} wires",
                    symbol.name(),
                    symbol.pins().len(),
                    symbol.wires().len()
                );
                for pin in symbol.pins() {
                    let _ = writeln!(text, "  pin {pin}");
                }
                for wire in symbol.wires() {
                    let _ = writeln!(text, "  wire {wire}");
                }
            }
            None => {
                let _ = writeln!(text, "no symbol is being edited");
            }
        }
        text.truncate(text.trim_end().len());
        Outcome::Message(text)
    }

    /// `SCRIPT path`: runs a command file, aborting on its first error.
    fn script_file(&mut self, args: &str) -> Result<Outcome> {
        let path = single_argument(args)?;
        let report = script::run_script(self, &path)?;
        if report.quit {
            return Ok(Outcome::Quit);
        }
        let mut lines = report.output;
        lines.push(format!("{path}: {count} commands", count = report.executed));
        Ok(Outcome::Message(lines.join("\n")))
    }

    /// `GRID ...`: reports the settings when bare, edits them otherwise.
    fn grid(&mut self, args: &str) -> Result<Outcome> {
        let command = GridCommand::parse(args)?;
        if command.is_empty() {
            return Ok(Outcome::Message(self.document.grid().to_string()));
        }
        self.record(Box::new(command))
    }

    /// Routes a line through the interpreter and the journal.
    fn dispatch(&mut self, line: &str) -> Result<Outcome> {
        match parse_line(line, self.active)? {
            Directive::Edit(command) => self.record(command),
            Directive::Undo => Ok(match self.journal.undo(&mut self.document)? {
                Some(verb) => Outcome::Message(format!("undone: {verb}")),
                None => Outcome::Message("nothing to undo".to_string()),
            }),
            Directive::Redo => Ok(match self.journal.redo(&mut self.document)? {
                Some(verb) => Outcome::Message(format!("redone: {verb}")),
                None => Outcome::Message("nothing to redo".to_string()),
            }),
        }
    }

    /// Executes a command, journals it, and surfaces ignored arguments.
    fn record(&mut self, command: Box<dyn Command>) -> Result<Outcome> {
        let ignored = command.unrecognized().join(" ");
        self.journal.apply(command, &mut self.document)?;
        if ignored.is_empty() {
            Ok(Outcome::Continue)
        } else {
            Ok(Outcome::Warning(format!("ignored: {ignored}")))
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Pulls the single name-or-word argument the `EDIT` and `SCRIPT` verbs
/// take. Quotes are optional; anything other than exactly one token is
/// rejected.
fn single_argument(args: &str) -> Result<String> {
    let clause = Clause::tokenize(args)?;
    match clause.tokens() {
        [ScriptToken::Name(name)] => Ok(name.clone()),
        [ScriptToken::Word(word)] => Ok(word.clone()),
        _ => Err(Error::missing_name()),
    }
}

/// Fills in clause context on errors that do not already carry any, so
/// that the deepest frame (a nested script line, say) wins.
fn attach_clause(mut error: Error, line: &str) -> Error {
    if error.context.is_none() {
        error.context = Some(ErrorContext::new().with_clause(line.trim()));
    }
    error
}

/// One line per verb the session understands.
#[must_use]
pub fn help_text() -> &'static str {
    "\
EDIT name                open a symbol for editing, creating it if new
PIN 'name' [(x y)] ...   add a pin: direction, function, length,
                         visibility, R0..MR270, swap level 0-255
WIRE (x y) (x y) ...     add wire segments, optional width magnitude
NAME 'name'              rename the symbol being edited
GRID [pitch|unit|on|off] adjust the grid; bare GRID reports it
UNDO / REDO              walk the command journal
INFO                     describe the grid and the active symbol
SCRIPT path              run a command script
HELP                     this text
QUIT / EXIT              leave"
}
