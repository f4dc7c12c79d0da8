//! Barcode commands.
//!
//! Most linear symbologies share one layout: orientation, height, then the
//! interpretation line flags. Two-dimensional symbologies each have their
//! own parameter list. Payloads go through [`BarcodeData`](crate::BarcodeData),
//! not through these commands.

mod linear;
mod matrix;

pub use linear::{
    AnsiCodabar, Code11, Code128, Code39, Code49, Code93, Ean13, Ean8, Industrial2Of5,
    Interleaved2Of5, Logmars, Msi, Planet, Plessey, Postal, Standard2Of5, UpcA, UpcE,
    UpcEanExtension,
};
pub use matrix::{
    Aztec, Codablock, DataMatrix, Gs1Databar, MaxiCode, MicroPdf417, Pdf417, Qr, Tlc39,
};

use serde::{Deserialize, Serialize};

use super::Encode;
use crate::emit::CommandWriter;
use crate::error::BuildError;
use crate::tokens::Orientation;
use crate::validate::{Constraint, Param};

pub(crate) const ORIENTATION: Param =
    Param::new("orientation", Constraint::OneOf(Orientation::TOKENS));
pub(crate) const HEIGHT: Param = Param::new("height", Constraint::range(1, 32000));
pub(crate) const PRINT_TEXT: Param = Param::new("print_text", Constraint::Flag);
pub(crate) const TEXT_ABOVE: Param = Param::new("text_above", Constraint::Flag);
pub(crate) const CHECK_DIGIT: Param = Param::new("check_digit", Constraint::Flag);

/// Barcode field defaults (`^BY`), in effect until the next `^BY`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BarcodeDefaults {
    /// Narrow bar width in dots, 1–10.
    pub module_width: Option<u32>,
    /// Wide to narrow bar ratio, 2.0–3.0 in 0.1 steps.
    pub ratio: Option<f64>,
    /// Bar height in dots, 1–200.
    pub height: Option<u32>,
}

impl Encode for BarcodeDefaults {
    const OPCODE: &'static str = "^BY";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        const MODULE_WIDTH: Param = Param::new("module_width", Constraint::range(1, 10));
        const RATIO: Param = Param::new("ratio", Constraint::decimal(2.0, 3.0));
        const DEFAULT_HEIGHT: Param = Param::new("height", Constraint::range(1, 200));

        w.param(&MODULE_WIDTH, self.module_width)?
            .param(&RATIO, self.ratio)?
            .param(&DEFAULT_HEIGHT, self.height)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LabelBuilder;

    #[test]
    fn defaults_write_each_field_once() {
        let mut label = LabelBuilder::new();
        label
            .add(&BarcodeDefaults {
                module_width: Some(2),
                ratio: Some(3.0),
                height: Some(10),
            })
            .unwrap();
        assert_eq!(label.render_text(), "^XA\n^BY2,3.0,10\n^XZ");
    }

    #[test]
    fn defaults_ratio_rounds_and_height_caps_at_200() {
        let mut label = LabelBuilder::new();
        label
            .add(&BarcodeDefaults {
                module_width: Some(1),
                ratio: Some(2.54),
                height: None,
            })
            .unwrap();
        assert_eq!(label.render_text(), "^XA\n^BY1,2.5\n^XZ");

        let err = LabelBuilder::new()
            .add(&BarcodeDefaults {
                module_width: Some(1),
                ratio: Some(2.0),
                height: Some(201),
            })
            .unwrap_err();
        assert_eq!(err.as_validation().unwrap().field, "height");
    }

    #[test]
    fn defaults_ratio_out_of_range() {
        let err = LabelBuilder::new()
            .add(&BarcodeDefaults {
                module_width: Some(1),
                ratio: Some(3.5),
                height: None,
            })
            .unwrap_err();
        assert_eq!(err.as_validation().unwrap().field, "ratio");
    }
}
