//! Label and field positioning: `^LH`, `^FO`, `^FB`.

use serde::{Deserialize, Serialize};

use super::Encode;
use crate::emit::CommandWriter;
use crate::error::BuildError;
use crate::tokens::{Justification, TextJustification};
use crate::validate::{Constraint, Param};

const X: Param = Param::new("x", Constraint::range(0, 32000));
const Y: Param = Param::new("y", Constraint::range(0, 32000));

/// Label home (`^LH`): origin that every later field origin is offset from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelHome {
    /// Dots from the left edge, 0–32000.
    pub x: Option<u32>,
    /// Dots from the top edge, 0–32000.
    pub y: Option<u32>,
}

impl Encode for LabelHome {
    const OPCODE: &'static str = "^LH";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        w.param(&X, self.x)?.param(&Y, self.y)?;
        Ok(())
    }
}

/// Field origin (`^FO`): top-left corner of the next field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldOrigin {
    /// Dots from label home, 0–32000.
    pub x: Option<u32>,
    /// Dots from label home, 0–32000.
    pub y: Option<u32>,
    /// Field justification.
    pub justification: Option<Justification>,
}

impl Encode for FieldOrigin {
    const OPCODE: &'static str = "^FO";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        const JUSTIFICATION: Param =
            Param::new("justification", Constraint::OneOf(Justification::TOKENS));
        w.param(&X, self.x)?
            .param(&Y, self.y)?
            .param(&JUSTIFICATION, self.justification)?;
        Ok(())
    }
}

/// Field block (`^FB`): wraps the next text field into a block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldBlock {
    /// Block width in dots.
    pub width: Option<i32>,
    /// Maximum number of lines, 1–9999.
    pub max_lines: Option<u32>,
    /// Extra dots between lines, -9999–9999.
    pub line_spacing: Option<i32>,
    /// Text justification within the block.
    pub text_justification: Option<TextJustification>,
    /// Hanging indent of the second and later lines, 0–9999.
    pub hanging_indent: Option<u32>,
}

impl Encode for FieldBlock {
    const OPCODE: &'static str = "^FB";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        const WIDTH: Param = Param::new("width", Constraint::Integer);
        const MAX_LINES: Param = Param::new("max_lines", Constraint::range(1, 9999));
        const LINE_SPACING: Param = Param::new("line_spacing", Constraint::range(-9999, 9999));
        const TEXT_JUSTIFICATION: Param = Param::new(
            "text_justification",
            Constraint::OneOf(TextJustification::TOKENS),
        );
        const HANGING_INDENT: Param = Param::new("hanging_indent", Constraint::range(0, 9999));

        w.param(&WIDTH, self.width)?
            .param(&MAX_LINES, self.max_lines)?
            .param(&LINE_SPACING, self.line_spacing)?
            .param(&TEXT_JUSTIFICATION, self.text_justification)?
            .param(&HANGING_INDENT, self.hanging_indent)?;
        Ok(())
    }
}
