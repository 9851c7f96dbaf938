//! The top-level document: symbols plus grid, with identity allocation.

use platine_foundation::ElementId;
use tracing::debug;

use crate::grid::GridSettings;
use crate::symbol::Symbol;

/// A library document holding symbols under construction.
///
/// The document owns the identity counter. Ids count up and are never
/// reused, across symbols and element kinds alike, so any stashed
/// [`ElementId`] stays unambiguous for the life of the document.
#[derive(Debug, Default)]
pub struct Document {
    symbols: Vec<Symbol>,
    grid: GridSettings,
    next_id: u64,
}

impl Document {
    /// Creates an empty document with the default grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints the next identity handle.
    pub fn alloc_id(&mut self) -> ElementId {
        let id = ElementId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Creates an empty symbol and returns its identity.
    pub fn add_symbol(&mut self, name: impl Into<String>) -> ElementId {
        let id = self.alloc_id();
        let name = name.into();
        debug!(symbol = %id, name = %name, "symbol created");
        self.symbols.push(Symbol::new(id, name));
        id
    }

    /// The symbols, in creation order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Looks a symbol up by identity.
    #[must_use]
    pub fn symbol(&self, id: ElementId) -> Option<&Symbol> {
        self.symbols.iter().find(|symbol| symbol.id() == id)
    }

    /// Mutable symbol lookup by identity.
    pub fn symbol_mut(&mut self, id: ElementId) -> Option<&mut Symbol> {
        self.symbols.iter_mut().find(|symbol| symbol.id() == id)
    }

    /// Looks a symbol up by name. Names are matched exactly.
    #[must_use]
    pub fn symbol_by_name(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|symbol| symbol.name() == name)
    }

    /// The snap grid.
    #[must_use]
    pub const fn grid(&self) -> &GridSettings {
        &self.grid
    }

    /// Mutable access to the snap grid.
    pub fn grid_mut(&mut self) -> &mut GridSettings {
        &mut self.grid
    }
}
