//! Line-oriented command scripts.
//!
//! A script is a plain text file of session lines, run in order. Blank
//! lines and lines starting with `#` are skipped. The first error stops
//! the script and comes back annotated with the file and line number.

use std::fs;
use std::path::Path;

use platine_foundation::{Error, Result};
use tracing::debug;

use crate::session::{Outcome, Session};

/// Scripts may invoke scripts; past this depth the run is abandoned.
const MAX_SCRIPT_DEPTH: usize = 16;

/// What happened while running a script file.
#[derive(Debug, Default)]
pub struct ScriptReport {
    /// Lines that were interpreted (blank and `#` lines excluded).
    pub executed: usize,
    /// Messages and warnings the lines produced, in order.
    pub output: Vec<String>,
    /// Whether the script asked the session to quit.
    pub quit: bool,
}

/// Runs a script file against the session.
///
/// The path is resolved relative to the session's load path, and the
/// load path is pointed at the script's directory for the duration so
/// nested `SCRIPT` lines resolve relative to their own file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, if scripts nest deeper
/// than [`MAX_SCRIPT_DEPTH`], or when a line fails; the error context
/// then names the script and the 1-based line number.
pub fn run_script(session: &mut Session, path: &str) -> Result<ScriptReport> {
    if session.script_depth() >= MAX_SCRIPT_DEPTH {
        return Err(Error::internal(format!(
            "scripts nested deeper than {MAX_SCRIPT_DEPTH} levels"
        )));
    }

    let resolved = session.resolve_path(path);
    let source =
        fs::read_to_string(&resolved).map_err(|error| Error::io(&resolved, error.to_string()))?;

    let saved = session.load_path().clone();
    if let Some(parent) = resolved.parent() {
        session.set_load_path(parent.to_path_buf());
    }

    session.enter_script();
    let result = run_source(session, &source, &resolved);
    session.leave_script();
    session.set_load_path(saved);

    result
}

fn run_source(session: &mut Session, source: &str, path: &Path) -> Result<ScriptReport> {
    let mut report = ScriptReport::default();

    for (index, line) in source.lines().enumerate() {
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        match session.run_line(text) {
            Ok(Outcome::Continue) => report.executed += 1,
            Ok(Outcome::Message(message)) => {
                report.executed += 1;
                report.output.push(message);
            }
            Ok(Outcome::Warning(warning)) => {
                report.executed += 1;
                report.output.push(format!("warning: {warning}"));
            }
            Ok(Outcome::Quit) => {
                report.executed += 1;
                report.quit = true;
                break;
            }
            Err(mut error) => {
                debug!(path = %path.display(), line = index + 1, "script aborted");
                let context = error.context.take().unwrap_or_default();
                // Leave the attribution alone when a nested script
                // already claimed the error.
                error.context = Some(if context.script.is_none() {
                    context.with_script(path, index + 1)
                } else {
                    context
                });
                return Err(error);
            }
        }
    }

    debug!(path = %path.display(), executed = report.executed, "script finished");
    Ok(report)
}
