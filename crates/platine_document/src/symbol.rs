//! Symbols: named containers of pins and wires.

use platine_foundation::ElementId;
use tracing::debug;

use crate::pin::Pin;
use crate::wire::Wire;

/// A schematic symbol under construction.
///
/// Pins and wires are kept in insertion order. Removal is by identity
/// handle and preserves the order of everything else, so undoing the
/// creation of one element leaves its siblings exactly as they were.
#[derive(Debug)]
pub struct Symbol {
    id: ElementId,
    name: String,
    pins: Vec<Pin>,
    wires: Vec<Wire>,
}

impl Symbol {
    /// Creates an empty symbol.
    #[must_use]
    pub fn new(id: ElementId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            pins: Vec::new(),
            wires: Vec::new(),
        }
    }

    /// The identity handle this symbol was created under.
    #[must_use]
    pub const fn id(&self) -> ElementId {
        self.id
    }

    /// The symbol name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the symbol.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug!(symbol = %self.id, from = %self.name, to = %name, "symbol renamed");
        self.name = name;
    }

    /// The pins, in insertion order.
    #[must_use]
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// The wire segments, in insertion order.
    #[must_use]
    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    /// Appends a pin.
    pub fn add_pin(&mut self, pin: Pin) {
        debug!(symbol = %self.id, pin = %pin.name(), id = %pin.id(), "pin added");
        self.pins.push(pin);
    }

    /// Removes the pin with the given identity, preserving sibling order.
    pub fn remove_pin(&mut self, id: ElementId) -> Option<Pin> {
        let index = self.pins.iter().position(|pin| pin.id() == id)?;
        let pin = self.pins.remove(index);
        debug!(symbol = %self.id, pin = %pin.name(), id = %id, "pin removed");
        Some(pin)
    }

    /// Looks a pin up by identity.
    #[must_use]
    pub fn pin(&self, id: ElementId) -> Option<&Pin> {
        self.pins.iter().find(|pin| pin.id() == id)
    }

    /// Mutable pin lookup by identity.
    pub fn pin_mut(&mut self, id: ElementId) -> Option<&mut Pin> {
        self.pins.iter_mut().find(|pin| pin.id() == id)
    }

    /// Appends a wire segment.
    pub fn add_wire(&mut self, wire: Wire) {
        debug!(symbol = %self.id, id = %wire.id(), "wire segment added");
        self.wires.push(wire);
    }

    /// Removes the wire segment with the given identity.
    pub fn remove_wire(&mut self, id: ElementId) -> Option<Wire> {
        let index = self.wires.iter().position(|wire| wire.id() == id)?;
        let wire = self.wires.remove(index);
        debug!(symbol = %self.id, id = %id, "wire segment removed");
        Some(wire)
    }

    /// Looks a wire segment up by identity.
    #[must_use]
    pub fn wire(&self, id: ElementId) -> Option<&Wire> {
        self.wires.iter().find(|wire| wire.id() == id)
    }

    /// Mutable wire lookup by identity.
    pub fn wire_mut(&mut self, id: ElementId) -> Option<&mut Wire> {
        self.wires.iter_mut().find(|wire| wire.id() == id)
    }
}
