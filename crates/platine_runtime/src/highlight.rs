//! Syntax highlighting for the interactive shell.

use crate::session::SESSION_VERBS;
use platine_command::VERBS;
use std::borrow::Cow;

/// Highlighter for the Platine command language.
pub struct PlatineHighlighter {}

impl PlatineHighlighter {
    /// Creates a new highlighter.
    pub const fn new() -> Self {
        Self {}
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let mut result = String::with_capacity(line.len() * 2);
        let mut chars = line.chars().peekable();
        let mut in_name = false;
        let mut in_comment = false;

        while let Some(c) = chars.next() {
            if in_comment {
                result.push(c);
                continue;
            }

            match c {
                // Trailing comment
                ';' if !in_name => {
                    in_comment = true;
                    result.push_str("\x1b[2;3m"); // dim italic
                    result.push(c);
                }

                // Quoted names
                '\'' => {
                    if in_name {
                        result.push(c);
                        result.push_str("\x1b[0m");
                        in_name = false;
                    } else {
                        result.push_str("\x1b[33m"); // yellow
                        result.push(c);
                        in_name = true;
                    }
                }

                // Numbers
                c if c.is_ascii_digit() && !in_name => {
                    result.push_str("\x1b[35m"); // magenta
                    result.push(c);
                    while let Some(&next) = chars.peek() {
                        if next.is_ascii_digit() || next == '.' {
                            result.push(chars.next().unwrap());
                        } else {
                            break;
                        }
                    }
                    result.push_str("\x1b[0m");
                }

                // Negative numbers
                '-' if !in_name => {
                    if let Some(&next) = chars.peek() {
                        if next.is_ascii_digit() {
                            result.push_str("\x1b[35m"); // magenta
                            result.push(c);
                            while let Some(&next) = chars.peek() {
                                if next.is_ascii_digit() || next == '.' {
                                    result.push(chars.next().unwrap());
                                } else {
                                    break;
                                }
                            }
                            result.push_str("\x1b[0m");
                        } else {
                            result.push(c);
                        }
                    } else {
                        result.push(c);
                    }
                }

                // Coordinate groups - bright
                '(' | ')' if !in_name => {
                    result.push_str("\x1b[1m"); // bold
                    result.push(c);
                    result.push_str("\x1b[0m");
                }

                // Verbs, units, and switches
                c if c.is_alphabetic() && !in_name => {
                    let mut word = String::new();
                    word.push(c);
                    while let Some(&next) = chars.peek() {
                        if next.is_alphanumeric() || next == '_' {
                            word.push(chars.next().unwrap());
                        } else {
                            break;
                        }
                    }

                    let color = word_color(&word);
                    if color.is_empty() {
                        result.push_str(&word);
                    } else {
                        result.push_str(color);
                        result.push_str(&word);
                        result.push_str("\x1b[0m");
                    }
                }

                // Everything inside a name or any other char
                _ => result.push(c),
            }
        }

        // Reset at end
        if in_comment || in_name {
            result.push_str("\x1b[0m");
        }

        Cow::Owned(result)
    }
}

impl Default for PlatineHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Color code for a bare word, or `""` to leave it unstyled.
fn word_color(word: &str) -> &'static str {
    // Command verbs are case-insensitive on entry
    let is_verb = VERBS
        .iter()
        .chain(SESSION_VERBS.iter())
        .any(|known| word.eq_ignore_ascii_case(known));
    if is_verb {
        return "\x1b[1;32m"; // bold green
    }

    match word {
        // Unit suffixes
        "mic" | "mm" | "mil" | "inch" => "\x1b[36m", // cyan

        // Grid visibility switches
        "on" | "off" => "\x1b[34m", // blue

        _ => "",
    }
}
