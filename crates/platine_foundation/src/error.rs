//! Error types for the Platine system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::element::ElementId;

/// Convenience alias for results produced by Platine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Platine operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error, replacing any previous context.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a missing name error.
    #[must_use]
    pub fn missing_name() -> Self {
        Self::new(ErrorKind::MissingName)
    }

    /// Creates an unterminated coordinate error.
    #[must_use]
    pub fn unterminated_coordinate() -> Self {
        Self::new(ErrorKind::UnterminatedCoordinate)
    }

    /// Creates a swap level out of range error.
    #[must_use]
    pub fn swap_level_out_of_range(level: i64) -> Self {
        Self::new(ErrorKind::SwapLevelOutOfRange(level))
    }

    /// Creates an invalid number error from the offending text.
    #[must_use]
    pub fn invalid_number(text: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidNumber(text.into()))
    }

    /// Creates a too few points error.
    #[must_use]
    pub fn too_few_points() -> Self {
        Self::new(ErrorKind::TooFewPoints)
    }

    /// Creates an unknown command error.
    #[must_use]
    pub fn unknown_command(verb: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand(verb.into()))
    }

    /// Creates an empty command error.
    #[must_use]
    pub fn empty_command() -> Self {
        Self::new(ErrorKind::EmptyCommand)
    }

    /// Creates a no active symbol error.
    #[must_use]
    pub fn no_active_symbol() -> Self {
        Self::new(ErrorKind::NoActiveSymbol)
    }

    /// Creates an unknown symbol error.
    #[must_use]
    pub fn unknown_symbol(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownSymbol(name.into()))
    }

    /// Creates a stale element reference error.
    #[must_use]
    pub fn stale_element(id: ElementId) -> Self {
        Self::new(ErrorKind::StaleElement(id))
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            message: message.into(),
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A command that requires a quoted name was given none.
    #[error("a quoted name is required")]
    MissingName,

    /// A coordinate group was opened but never closed.
    #[error("unterminated coordinate group: missing ')'")]
    UnterminatedCoordinate,

    /// Swap level integer outside the storable range.
    #[error("swap level out of range: {0} (expected 0..=255)")]
    SwapLevelOutOfRange(i64),

    /// Text that looked numeric but could not be parsed.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// A wire needs at least two points to form a segment.
    #[error("too few points: a wire needs at least two")]
    TooFewPoints,

    /// Verb matched no known command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The clause contained no verb at all.
    #[error("empty command")]
    EmptyCommand,

    /// An editing command arrived while no symbol was open.
    #[error("no symbol is being edited")]
    NoActiveSymbol,

    /// Symbol lookup by name failed.
    #[error("no such symbol: {0}")]
    UnknownSymbol(String),

    /// Element reference no longer resolves in the document.
    #[error("element no longer in document: {0}")]
    StaleElement(ElementId),

    /// Filesystem problem while reading a script or document.
    #[error("cannot read {path}: {message}", path = .path.display())]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// Description from the underlying I/O layer.
        message: String,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// The clause text that was being interpreted.
    pub clause: Option<String>,
    /// Script file the clause came from, if any.
    pub script: Option<PathBuf>,
    /// Line number in the script (1-indexed).
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clause: None,
            script: None,
            line: None,
        }
    }

    /// Sets the clause text.
    #[must_use]
    pub fn with_clause(mut self, clause: impl Into<String>) -> Self {
        self.clause = Some(clause.into());
        self
    }

    /// Sets the script path and line number.
    #[must_use]
    pub fn with_script(mut self, script: impl Into<PathBuf>, line: usize) -> Self {
        self.script = Some(script.into());
        self.line = Some(line);
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(script) = &self.script {
            write!(f, "at {}", script.display())?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        if let Some(clause) = &self.clause {
            if self.script.is_some() {
                write!(f, " ")?;
            }
            write!(f, "in \"{clause}\"")?;
        }
        Ok(())
    }
}
