//! The GRID command: adjust the document grid.

use platine_document::{Document, GridState};
use platine_foundation::{Error, Result, Unit, convert, split_unit_suffix};
use tracing::warn;

use crate::command::Command;
use crate::tokenizer::{Clause, ScriptToken};

/// How a pitch magnitude was spelled.
#[derive(Copy, Clone, Debug, PartialEq)]
enum PitchArg {
    /// Bare number, interpreted in the display unit.
    Display(f64),
    /// Suffixed number, already converted to millimeters.
    Absolute(f64),
}

/// `GRID [unit] [pitch] [on|off]`
///
/// Options may appear in any order and each one is optional; duplicates
/// resolve last-wins. A unit keyword, wherever it sits in the clause,
/// takes effect before a bare pitch magnitude, so `GRID 5 mm` and
/// `GRID mm 5` both mean five millimeters. A suffixed magnitude like
/// `100mil` bypasses the display unit entirely.
///
/// The memento is a full grid snapshot, so undo restores pitch, unit,
/// and visibility together no matter which of them the clause touched.
#[derive(Debug)]
pub struct GridCommand {
    raw: String,
    unit: Option<Unit>,
    pitch: Option<PitchArg>,
    visible: Option<bool>,
    unrecognized: Vec<String>,
    displaced: Option<GridState>,
}

impl GridCommand {
    /// Parses a grid clause.
    pub fn parse(args: &str) -> Result<Self> {
        let clause = Clause::tokenize(args)?;

        let mut unit = None;
        let mut pitch = None;
        let mut visible = None;
        let mut unrecognized = Vec::new();

        for token in clause.tokens() {
            let word = match token {
                ScriptToken::Word(word) => word.as_str(),
                other => {
                    let rendered = other.render();
                    warn!(token = %rendered, "unrecognized grid argument ignored");
                    unrecognized.push(rendered);
                    continue;
                }
            };

            if let Some(keyword_unit) = Unit::from_code(word) {
                unit = Some(keyword_unit);
            } else if word == "on" {
                visible = Some(true);
            } else if word == "off" {
                visible = Some(false);
            } else if let Some((magnitude, suffix_unit)) = split_unit_suffix(word) {
                // An explicit suffix declares numeric intent, so a bad
                // magnitude here is fatal rather than ignorable.
                let magnitude: f64 = magnitude
                    .parse()
                    .map_err(|_| Error::invalid_number(word))?;
                pitch = Some(PitchArg::Absolute(
                    convert(magnitude, suffix_unit, Unit::Millimeter),
                ));
            } else if let Ok(magnitude) = word.parse::<f64>() {
                pitch = Some(PitchArg::Display(magnitude));
            } else {
                warn!(token = %word, "unrecognized grid argument ignored");
                unrecognized.push(word.to_string());
            }
        }

        Ok(Self {
            raw: args.to_string(),
            unit,
            pitch,
            visible,
            unrecognized,
            displaced: None,
        })
    }

    /// Whether the clause requested no change at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.unit.is_none() && self.pitch.is_none() && self.visible.is_none()
    }
}

impl Command for GridCommand {
    fn verb(&self) -> &'static str {
        "GRID"
    }

    fn raw_args(&self) -> &str {
        &self.raw
    }

    fn execute(&mut self, document: &mut Document) -> Result<()> {
        self.displaced = Some(document.grid().snapshot());
        let grid = document.grid_mut();

        if let Some(unit) = self.unit {
            grid.set_unit(unit);
        }
        match self.pitch {
            Some(PitchArg::Display(magnitude)) => {
                let millimeters = convert(magnitude, grid.unit(), Unit::Millimeter);
                grid.set_pitch(millimeters);
            }
            Some(PitchArg::Absolute(millimeters)) => {
                grid.set_pitch(millimeters);
            }
            None => {}
        }
        if let Some(visible) = self.visible {
            grid.set_visible(visible);
        }
        Ok(())
    }

    fn unexecute(&mut self, document: &mut Document) -> Result<()> {
        let Some(displaced) = self.displaced.take() else {
            return Err(Error::internal("GRID unexecute without a prior execute"));
        };
        document.grid_mut().restore(displaced);
        Ok(())
    }

    fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }
}
