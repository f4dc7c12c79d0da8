//! Graphic primitives: `^GB` box and `^GC` circle.

use serde::{Deserialize, Serialize};

use super::Encode;
use crate::emit::CommandWriter;
use crate::error::BuildError;
use crate::tokens::LineColor;
use crate::validate::{Constraint, Param, check_range};

const COLOR: Param = Param::new("color", Constraint::OneOf(LineColor::TOKENS));

/// Graphic box (`^GB`). Also draws horizontal and vertical lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphicBox {
    /// Box width in dots, border thickness to 32000.
    pub width: Option<u32>,
    /// Box height in dots, border thickness to 32000.
    pub height: Option<u32>,
    /// Border thickness in dots, 1–32000.
    pub border: Option<u32>,
    /// Line color.
    pub color: Option<LineColor>,
    /// Corner rounding, 0 (square) to 8 (heaviest).
    pub rounding: Option<u8>,
}

impl Encode for GraphicBox {
    const OPCODE: &'static str = "^GB";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        const BORDER: Param = Param::new("border", Constraint::range(1, 32000));
        const ROUNDING: Param = Param::new("rounding", Constraint::range(0, 8));

        // Width and height may not be thinner than the border.
        let min = self.border.filter(|b| *b > 0).map_or(1, i64::from);
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if let Some(v) = w.accept(value) {
                let v = check_range(field, i64::from(v), min, 32000)?;
                w.emit(v.to_string());
            }
        }
        w.param(&BORDER, self.border)?
            .param(&COLOR, self.color)?
            .param(&ROUNDING, self.rounding)?;
        Ok(())
    }
}

/// Graphic circle (`^GC`).
///
/// Out-of-range diameter and border are pulled to the nearest bound instead
/// of being rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphicCircle {
    /// Diameter in dots, saturated to 3–4095.
    pub diameter: Option<u32>,
    /// Border thickness in dots, saturated to 1–4095.
    pub border: Option<u32>,
    /// Line color.
    pub color: Option<LineColor>,
}

impl Encode for GraphicCircle {
    const OPCODE: &'static str = "^GC";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        const DIAMETER: Param = Param::new("diameter", Constraint::clamped(3, 4095));
        const BORDER: Param = Param::new("border", Constraint::clamped(1, 4095));

        w.param(&DIAMETER, self.diameter)?
            .param(&BORDER, self.border)?
            .param(&COLOR, self.color)?;
        Ok(())
    }
}
