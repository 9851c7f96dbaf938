//! The WIRE command: draw a polyline of segments.

use platine_document::{Document, Wire};
use platine_foundation::{ElementId, Error, Result, to_millimeters};
use tracing::warn;

use crate::command::Command;
use crate::options::parse_point;
use crate::tokenizer::Clause;

/// `WIRE [width] (X1 Y1) (X2 Y2) [(X3 Y3)...]`
///
/// Each consecutive point pair becomes one segment with its own identity.
/// A bare magnitude anywhere in the clause sets the stroke width for all
/// segments; the last one wins.
#[derive(Debug)]
pub struct WireCommand {
    raw: String,
    target: ElementId,
    width: Option<f64>,
    points: Vec<(f64, f64)>,
    unrecognized: Vec<String>,
    created: Vec<ElementId>,
}

impl WireCommand {
    /// Parses a wire clause against the symbol it will edit.
    pub fn parse(target: ElementId, args: &str) -> Result<Self> {
        let mut clause = Clause::tokenize(args)?;

        let mut points = Vec::new();
        while let Some(body) = clause.take_coord() {
            points.push(parse_point(&body)?);
        }
        if points.len() < 2 {
            return Err(Error::too_few_points());
        }

        let mut width = None;
        let mut unrecognized = Vec::new();
        for token in clause.into_remaining() {
            if let Ok(millimeters) = to_millimeters(&token) {
                width = Some(millimeters);
            } else {
                warn!(%token, "unrecognized wire argument ignored");
                unrecognized.push(token);
            }
        }

        Ok(Self {
            raw: args.to_string(),
            target,
            width,
            points,
            unrecognized,
            created: Vec::new(),
        })
    }

    /// Identities of the segments created by the last execute.
    #[must_use]
    pub fn created(&self) -> &[ElementId] {
        &self.created
    }
}

impl Command for WireCommand {
    fn verb(&self) -> &'static str {
        "WIRE"
    }

    fn raw_args(&self) -> &str {
        &self.raw
    }

    fn execute(&mut self, document: &mut Document) -> Result<()> {
        let segments = self.points.len() - 1;
        let ids: Vec<ElementId> = (0..segments).map(|_| document.alloc_id()).collect();
        let symbol = document
            .symbol_mut(self.target)
            .ok_or_else(|| Error::stale_element(self.target))?;

        for (id, window) in ids.iter().zip(self.points.windows(2)) {
            let mut wire = Wire::new(*id, window[0], window[1]);
            if let Some(width) = self.width {
                wire.set_width(width);
            }
            symbol.add_wire(wire);
        }
        self.created = ids;
        Ok(())
    }

    fn unexecute(&mut self, document: &mut Document) -> Result<()> {
        if self.created.is_empty() {
            return Err(Error::internal("WIRE unexecute without a prior execute"));
        }
        let symbol = document
            .symbol_mut(self.target)
            .ok_or_else(|| Error::stale_element(self.target))?;
        // Newest first, mirroring creation order.
        for id in self.created.drain(..).rev() {
            symbol
                .remove_wire(id)
                .ok_or_else(|| Error::stale_element(id))?;
        }
        Ok(())
    }

    fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }
}
