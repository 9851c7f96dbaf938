//! The interactive shell.

use crate::editor::{self, LineEditor, ReadResult, RustylineEditor};
use crate::script;
use crate::session::{Outcome, Session};
use platine_foundation::{Error, Result};
use std::io::{self, Write};

/// The interactive command shell.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (document, journal, active symbol).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Continuation prompt (for an open coordinate group).
    continuation_prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new shell with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new shell with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "platine> ".to_string(),
            continuation_prompt: ".. ".to_string(),
        }
    }

    /// Sets the session for this shell.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs a command script through the session, printing its output.
    ///
    /// Returns `false` when the script ended with QUIT.
    ///
    /// # Errors
    ///
    /// Returns an error if the script fails; the session stays usable.
    pub fn run_script(&mut self, path: &str) -> Result<bool> {
        let report = script::run_script(&mut self.session, path)?;
        for line in &report.output {
            println!("{line}");
        }

        self.refresh_keywords();
        Ok(!report.quit)
    }

    /// Runs the shell loop until EOF or QUIT.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally. Command errors
    /// are printed and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    self.print_error(&e);
                }
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-interpret-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let Some(input) = self.read_input()? else {
            return Ok(false); // EOF
        };

        // Skip empty lines
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }

        // Add to history
        self.editor.add_history(&input);

        match self.session.run_line(&input) {
            Ok(Outcome::Quit) => return Ok(false),
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Message(message)) => println!("{message}"),
            Ok(Outcome::Warning(warning)) => println!("\x1b[33m{warning}\x1b[0m"),
            Err(e) => {
                self.print_error(&e);
            }
        }

        // EDIT and NAME change the completion vocabulary
        self.refresh_keywords();

        Ok(true)
    }

    /// Reads one clause, pulling continuation lines while a coordinate
    /// group is open.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let mut first_line = true;

        loop {
            let prompt = if first_line {
                &self.prompt
            } else {
                &self.continuation_prompt
            };

            match self.editor.read_line(prompt)? {
                ReadResult::Line(line) => {
                    if first_line {
                        input = line;
                    } else {
                        input.push(' ');
                        input.push_str(&line);
                    }

                    if self.is_complete(&input) {
                        return Ok(Some(input));
                    }

                    first_line = false;
                }
                ReadResult::Interrupted => {
                    if first_line {
                        println!();
                        return Ok(Some(String::new()));
                    }
                    println!("\nInput cancelled.");
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof => {
                    if first_line {
                        return Ok(None);
                    }
                    return Err(Error::internal(
                        "unexpected EOF inside a coordinate group".to_string(),
                    ));
                }
            }
        }
    }

    /// Checks whether the input forms a complete clause (no open
    /// coordinate group).
    #[allow(clippy::unused_self)]
    fn is_complete(&self, input: &str) -> bool {
        !editor::group_open(input)
    }

    /// Keeps tab completion aware of the document's symbol names.
    fn refresh_keywords(&mut self) {
        let mut keywords = editor::default_keywords();
        keywords.extend(
            self.session
                .document()
                .symbols()
                .iter()
                .map(|symbol| symbol.name().to_string()),
        );
        self.editor.set_keywords(keywords);
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
        if let Some(context) = &error.context {
            eprintln!("\x1b[2m  {context}\x1b[0m");
        }
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36m");
        println!("        _       _   _            ");
        println!("  _ __ | | __ _| |_(_)_ __   ___ ");
        println!(" | '_ \\| |/ _` | __| | '_ \\ / _ \\");
        println!(" | |_) | | (_| | |_| | | | |  __/");
        println!(" | .__/|_|\\__,_|\\__|_|_| |_|\\___|");
        println!(" |_|                             ");
        println!("\x1b[0m");
        println!("Platine symbol editor v{}", env!("CARGO_PKG_VERSION"));
        println!("Type HELP for the command list. Use Ctrl+D to exit.\n");

        // Flush to ensure banner appears
        let _ = io::stdout().flush();
    }
}
