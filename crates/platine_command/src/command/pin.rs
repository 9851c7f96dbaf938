//! The PIN command: append a named pin to the active symbol.

use platine_document::{Document, Pin, PinDirection, PinFunction, PinLength, PinVisibility};
use platine_foundation::{ElementId, Error, Result};
use tracing::warn;

use crate::command::Command;
use crate::options::{Orientation, PinArg, classify, parse_point};
use crate::tokenizer::Clause;

/// `PIN 'NAME' (X Y) [options...]`
///
/// The name is required; everything else defaults. Attribute keywords may
/// appear in any order, and when one repeats the last occurrence wins,
/// same as typing the command twice would leave the later state.
#[derive(Debug)]
pub struct PinCommand {
    raw: String,
    target: ElementId,
    name: String,
    origin: (f64, f64),
    direction: PinDirection,
    function: PinFunction,
    length: PinLength,
    visibility: PinVisibility,
    orientation: Orientation,
    swap_level: u8,
    unrecognized: Vec<String>,
    created: Option<ElementId>,
}

impl PinCommand {
    /// Parses a pin clause against the symbol it will edit.
    pub fn parse(target: ElementId, args: &str) -> Result<Self> {
        let mut clause = Clause::tokenize(args)?;
        let name = clause.take_name().ok_or_else(Error::missing_name)?;
        let origin = match clause.take_coord() {
            Some(body) => parse_point(&body)?,
            None => (0.0, 0.0),
        };

        let mut command = Self {
            raw: args.to_string(),
            target,
            name,
            origin,
            direction: PinDirection::default(),
            function: PinFunction::default(),
            length: PinLength::default(),
            visibility: PinVisibility::default(),
            orientation: Orientation {
                degrees: 0.0,
                mirrored: false,
            },
            swap_level: 0,
            unrecognized: Vec::new(),
            created: None,
        };

        for token in clause.into_remaining() {
            match classify(&token)? {
                Some(arg) => command.absorb(arg),
                None => {
                    warn!(%token, "unrecognized pin argument ignored");
                    command.unrecognized.push(token);
                }
            }
        }
        Ok(command)
    }

    /// The identity of the pin created by the last execute, if any.
    #[must_use]
    pub const fn created(&self) -> Option<ElementId> {
        self.created
    }

    fn absorb(&mut self, arg: PinArg) {
        match arg {
            PinArg::Direction(direction) => self.direction = direction,
            PinArg::Function(function) => self.function = function,
            PinArg::Length(length) => self.length = length,
            PinArg::Visibility(visibility) => self.visibility = visibility,
            PinArg::Orientation(orientation) => self.orientation = orientation,
            PinArg::SwapLevel(level) => self.swap_level = level,
        }
    }
}

impl Command for PinCommand {
    fn verb(&self) -> &'static str {
        "PIN"
    }

    fn raw_args(&self) -> &str {
        &self.raw
    }

    fn execute(&mut self, document: &mut Document) -> Result<()> {
        let id = document.alloc_id();
        let symbol = document
            .symbol_mut(self.target)
            .ok_or_else(|| Error::stale_element(self.target))?;

        let mut pin = Pin::new(id, self.name.clone());
        pin.origin_mut().set(self.origin.0, self.origin.1);
        pin.set_direction(self.direction);
        pin.set_function(self.function);
        pin.set_length(self.length);
        pin.set_visibility(self.visibility);
        pin.rotation_mut().set_mirror(self.orientation.mirrored);
        pin.rotation_mut().set_degrees(self.orientation.degrees);
        pin.set_swap_level(self.swap_level);

        symbol.add_pin(pin);
        self.created = Some(id);
        Ok(())
    }

    fn unexecute(&mut self, document: &mut Document) -> Result<()> {
        let Some(id) = self.created.take() else {
            return Err(Error::internal("PIN unexecute without a prior execute"));
        };
        let symbol = document
            .symbol_mut(self.target)
            .ok_or_else(|| Error::stale_element(self.target))?;
        symbol
            .remove_pin(id)
            .map(|_| ())
            .ok_or_else(|| Error::stale_element(id))
    }

    fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }
}
