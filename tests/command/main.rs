//! Integration tests for the command language.
//!
//! Tokenization, verb dispatch, and undo/redo journaling, driven through
//! the same public API the session layer uses.

mod journal;
