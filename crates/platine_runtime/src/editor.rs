//! Line editor abstraction for the interactive shell.
//!
//! This module provides a trait-based abstraction over line editing
//! libraries, allowing the shell to use rustyline while remaining
//! swappable.

use crate::highlight::PlatineHighlighter;
use crate::session::SESSION_VERBS;
use platine_command::{VERBS, split_verb};
use platine_document::{PinDirection, PinFunction, PinLength, PinVisibility};
use platine_foundation::{Error, Result, UNITS};
use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator as RLValidator};
use std::borrow::Cow;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
///
/// This trait allows swapping out the underlying line editor
/// implementation without changing the shell code.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set available completions for keywords.
    fn set_keywords(&mut self, keywords: Vec<String>);
}

/// Whether the text ends inside an unclosed coordinate group.
///
/// Quoted names hide parentheses, and a `;` ends the clause no matter
/// what follows it.
pub(crate) fn group_open(input: &str) -> bool {
    let clause = match input.split_once(';') {
        Some((head, _)) => head,
        None => input,
    };

    let mut depth = 0i32;
    let mut in_name = false;

    for c in clause.chars() {
        match c {
            '\'' => in_name = !in_name,
            '(' if !in_name => depth += 1,
            ')' if !in_name => depth -= 1,
            _ => {}
        }
    }

    depth > 0
}

/// The built-in completion vocabulary.
pub(crate) fn default_keywords() -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();

    // Verbs complete in upper case; entry itself is case-insensitive
    keywords.extend(VERBS.iter().map(|verb| (*verb).to_string()));
    keywords.extend(SESSION_VERBS.iter().map(|verb| (*verb).to_string()));

    // Pin attribute keyword tables, in table order
    keywords.extend(PinDirection::ALL.iter().map(|d| d.code().to_string()));
    keywords.extend(PinFunction::ALL.iter().map(|f| f.code().to_string()));
    keywords.extend(PinLength::ALL.iter().map(|l| l.code().to_string()));
    keywords.extend(PinVisibility::ALL.iter().map(|v| v.code().to_string()));
    for keyword in ["R0", "R90", "R180", "R270", "MR0", "MR90", "MR180", "MR270"] {
        keywords.push(keyword.to_string());
    }

    // Unit suffixes and grid switches
    keywords.extend(UNITS.iter().map(|u| u.code().to_string()));
    keywords.push("on".to_string());
    keywords.push("off".to_string());

    keywords
}

/// Helper for rustyline that provides completion, hints, highlighting,
/// and validation.
#[derive(Helper, Completer, Hinter, RLValidator)]
struct PlatineHelper {
    #[rustyline(Completer)]
    completer: PlatineCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    #[rustyline(Validator)]
    validator: GroupValidator,
    highlighter: PlatineHighlighter,
}

impl Highlighter for PlatineHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completer for command keywords and, after a `SCRIPT` verb, file
/// paths.
struct PlatineCompleter {
    file_completer: FilenameCompleter,
    keywords: Vec<String>,
}

impl PlatineCompleter {
    fn new() -> Self {
        Self {
            file_completer: FilenameCompleter::new(),
            keywords: default_keywords(),
        }
    }
}

impl Completer for PlatineCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let head = &line[..pos];

        // The argument of SCRIPT is a file path, not a keyword
        let (verb, _) = split_verb(head);
        if verb.eq_ignore_ascii_case("SCRIPT") && head.trim_start().len() > verb.len() {
            return self.file_completer.complete(line, pos, ctx);
        }

        // Find the start of the current word
        let start = head
            .rfind(|c: char| c.is_whitespace() || "()'".contains(c))
            .map_or(0, |i| i + 1);

        let word = &head[start..];

        let candidates: Vec<Pair> = self
            .keywords
            .iter()
            .filter(|keyword| keyword.starts_with(word))
            .map(|keyword| Pair {
                display: keyword.clone(),
                replacement: keyword.clone(),
            })
            .collect();

        Ok((start, candidates))
    }
}

/// Validator that reports a line with an open coordinate group as
/// incomplete, so the group can be finished on the next line.
#[derive(Default)]
struct GroupValidator;

impl Validator for GroupValidator {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if group_open(ctx.input()) {
            Ok(ValidationResult::Incomplete)
        } else {
            Ok(ValidationResult::Valid(None))
        }
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<PlatineHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    ///
    /// # Panics
    ///
    /// Panics if the history size configuration is invalid (should not
    /// happen with hardcoded valid values).
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .expect("valid history size")
            .build();

        let helper = PlatineHelper {
            completer: PlatineCompleter::new(),
            hinter: HistoryHinter::new(),
            validator: GroupValidator,
            highlighter: PlatineHighlighter::new(),
        };

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::internal(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::internal(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_keywords(&mut self, keywords: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.keywords = keywords;
        }
    }
}
