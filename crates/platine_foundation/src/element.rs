//! Identity handles for document elements.

use std::fmt;

/// Identifier for a single element (pin, wire, symbol) in a document.
///
/// Ids are allocated monotonically by the owning document and are never
/// reused, so a held id either resolves to the same element it was minted
/// for or to nothing at all. Equality of elements with equal names is
/// still distinguished by id; this is what lets an undo remove exactly
/// the element its command created.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(u64);

impl ElementId {
    /// Creates an element id from a raw counter value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({})", self.0)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
