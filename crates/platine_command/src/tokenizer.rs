//! Clause tokenization.
//!
//! Converts the argument text of a command line into a stream of tokens.

use platine_foundation::{Error, Result};

/// A token from a command clause.
#[derive(Clone, Debug, PartialEq)]
pub enum ScriptToken {
    /// A quoted name (quotes stripped, contents preserved as-is)
    Name(String),
    /// A parenthesized coordinate group (parentheses stripped,
    /// inner whitespace normalized to single spaces)
    Coord(String),
    /// Any other bare word
    Word(String),
}

impl ScriptToken {
    /// Renders the token back in its source spelling.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Name(name) => format!("'{name}'"),
            Self::Coord(body) => format!("({body})"),
            Self::Word(word) => word.clone(),
        }
    }
}

/// One tokenized command clause with claiming accessors.
///
/// Parsers claim what they understand with [`take_name`](Self::take_name)
/// and [`take_coord`](Self::take_coord); whatever is left over is handed
/// back by [`into_remaining`](Self::into_remaining) so the caller can
/// decide what to do with tokens nothing claimed.
#[derive(Clone, Debug, PartialEq)]
pub struct Clause {
    tokens: Vec<ScriptToken>,
}

impl Clause {
    /// Tokenizes one clause of command text.
    ///
    /// - Truncates at the first `;` (the rest of the line is discarded)
    /// - Splits on whitespace
    /// - A token wrapped in single quotes becomes a [`ScriptToken::Name`]
    /// - A `(` opens a coordinate group that runs, merging tokens, to the
    ///   next token ending in `)`; an unclosed group is a hard error
    /// - Everything else is a [`ScriptToken::Word`]
    pub fn tokenize(text: &str) -> Result<Self> {
        let clause = match text.split_once(';') {
            Some((head, _)) => head,
            None => text,
        };
        let raw: Vec<&str> = clause.split_whitespace().collect();

        let mut tokens = Vec::new();
        let mut index = 0;
        while index < raw.len() {
            let token = raw[index];
            if token.len() >= 2 && token.starts_with('\'') && token.ends_with('\'') {
                tokens.push(ScriptToken::Name(token[1..token.len() - 1].to_string()));
                index += 1;
            } else if let Some(rest) = token.strip_prefix('(') {
                if let Some(body) = rest.strip_suffix(')') {
                    tokens.push(ScriptToken::Coord(body.to_string()));
                    index += 1;
                } else {
                    let (body, next) = Self::close_group(rest, &raw, index + 1)?;
                    tokens.push(ScriptToken::Coord(body));
                    index = next;
                }
            } else {
                tokens.push(ScriptToken::Word(token.to_string()));
                index += 1;
            }
        }
        Ok(Self { tokens })
    }

    /// Merges tokens into an open group until one closes it.
    fn close_group(first: &str, raw: &[&str], mut index: usize) -> Result<(String, usize)> {
        let mut parts: Vec<&str> = Vec::new();
        if !first.is_empty() {
            parts.push(first);
        }
        while index < raw.len() {
            let token = raw[index];
            index += 1;
            if let Some(last) = token.strip_suffix(')') {
                if !last.is_empty() {
                    parts.push(last);
                }
                return Ok((parts.join(" "), index));
            }
            parts.push(token);
        }
        Err(Error::unterminated_coordinate())
    }

    /// Claims the first name token, removing it from the clause.
    pub fn take_name(&mut self) -> Option<String> {
        let index = self
            .tokens
            .iter()
            .position(|token| matches!(token, ScriptToken::Name(_)))?;
        match self.tokens.remove(index) {
            ScriptToken::Name(name) => Some(name),
            _ => None,
        }
    }

    /// Claims the first coordinate group, removing it from the clause.
    pub fn take_coord(&mut self) -> Option<String> {
        let index = self
            .tokens
            .iter()
            .position(|token| matches!(token, ScriptToken::Coord(_)))?;
        match self.tokens.remove(index) {
            ScriptToken::Coord(body) => Some(body),
            _ => None,
        }
    }

    /// The tokens still unclaimed, in clause order.
    #[must_use]
    pub fn tokens(&self) -> &[ScriptToken] {
        &self.tokens
    }

    /// Consumes the clause, rendering every unclaimed token back to text.
    #[must_use]
    pub fn into_remaining(self) -> Vec<String> {
        self.tokens.iter().map(ScriptToken::render).collect()
    }

    /// Number of unclaimed tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether every token has been claimed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
