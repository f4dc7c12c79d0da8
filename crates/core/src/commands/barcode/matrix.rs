//! Two-dimensional and stacked barcode commands.

use serde::{Deserialize, Serialize};

use super::{HEIGHT, ORIENTATION};
use crate::commands::Encode;
use crate::emit::CommandWriter;
use crate::error::{BuildError, ValidationError, Violation};
use crate::tokens::{CodablockMode, Orientation, QrErrorCorrection, YesNo};
use crate::validate::{Constraint, Param, check_range};

const MAGNIFICATION: Param = Param::new("magnification", Constraint::range(1, 10));

/// Aztec (`^B0`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Aztec {
    /// Barcode rotation.
    pub orientation: Option<Orientation>,
    /// Magnification factor, 1–10.
    pub magnification: Option<u32>,
    /// Data contains ECICs.
    pub ecic: Option<YesNo>,
    /// 0 default, 1–99 error correction percent, 101–104 compact layers,
    /// 201–232 full-range layers, 300 Aztec Rune.
    pub ec_symbol_size: Option<u16>,
    /// Menu (reader initialization) symbol.
    pub menu_symbol: Option<YesNo>,
    /// Symbols in a structured append, 1–26.
    pub symbol_count: Option<u32>,
    /// Structured append ID, at most 24 characters.
    pub structured_id: Option<String>,
}

impl Encode for Aztec {
    const OPCODE: &'static str = "^B0";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        const ECIC: Param = Param::new("ecic", Constraint::Flag);
        const MENU_SYMBOL: Param = Param::new("menu_symbol", Constraint::Flag);
        const SYMBOL_COUNT: Param = Param::new("symbol_count", Constraint::range(1, 26));
        const STRUCTURED_ID: Param =
            Param::new("structured_id", Constraint::Text { max_len: Some(24) });

        w.param(&ORIENTATION, self.orientation)?
            .param(&MAGNIFICATION, self.magnification)?
            .param(&ECIC, self.ecic)?;
        if let Some(size) = w.accept(self.ec_symbol_size) {
            w.emit(aztec_symbol_size(size)?);
        }
        w.param(&MENU_SYMBOL, self.menu_symbol)?
            .param(&SYMBOL_COUNT, self.symbol_count)?
            .param(&STRUCTURED_ID, self.structured_id.as_ref())?;
        Ok(())
    }
}

fn aztec_symbol_size(size: u16) -> Result<String, ValidationError> {
    match size {
        1..=9 => Ok(format!("{size:02}")),
        0..=99 | 101..=104 | 201..=232 | 300 => Ok(size.to_string()),
        _ => Err(ValidationError::new(
            "ec_symbol_size",
            Violation::Rule("must be 0, 1-99, 101-104, 201-232, or 300"),
        )),
    }
}

/// PDF417 (`^B7`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Pdf417 {
    /// Barcode rotation.
    pub orientation: Option<Orientation>,
    /// Row height in dots.
    pub height: Option<i32>,
    /// 0 error detection only, 1–8 error correction level.
    pub security_level: Option<u8>,
    /// Data columns, 1–30.
    pub columns: Option<u32>,
    /// Rows, 3–90.
    pub rows: Option<u32>,
    /// Truncate the right row indicators and stop pattern.
    pub truncate: Option<YesNo>,
}

impl Encode for Pdf417 {
    const OPCODE: &'static str = "^B7";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        const ROW_HEIGHT: Param = Param::new("height", Constraint::Integer);
        const SECURITY_LEVEL: Param = Param::new("security_level", Constraint::range(0, 8));
        const COLUMNS: Param = Param::new("columns", Constraint::range(1, 30));
        const ROWS: Param = Param::new("rows", Constraint::range(3, 90));
        const TRUNCATE: Param = Param::new("truncate", Constraint::Flag);

        w.param(&ORIENTATION, self.orientation)?
            .param(&ROW_HEIGHT, self.height)?
            .param(&SECURITY_LEVEL, self.security_level)?
            .param(&COLUMNS, self.columns)?
            .param(&ROWS, self.rows)?
            .param(&TRUNCATE, self.truncate)?;
        Ok(())
    }
}

/// CODABLOCK (`^BB`).
///
/// The mode is always written once the chain reaches it and defaults to
/// `F`. It also selects the row count bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Codablock {
    /// Barcode rotation.
    pub orientation: Option<Orientation>,
    /// Row height in dots, 2–32000.
    pub height: Option<u32>,
    /// Security level on or off.
    pub security_level: Option<YesNo>,
    /// Characters per row, 2–62.
    pub characters_per_row: Option<u32>,
    /// Rows: 1–22 for mode `A`, 2–4 for modes `E` and `F`.
    pub row_count: Option<u32>,
    /// Encoding mode.
    pub mode: CodablockMode,
}

impl Encode for Codablock {
    const OPCODE: &'static str = "^BB";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        const ROW_HEIGHT: Param = Param::new("height", Constraint::range(2, 32000));
        const SECURITY_LEVEL: Param = Param::new("security_level", Constraint::Flag);
        const CHARACTERS_PER_ROW: Param =
            Param::new("characters_per_row", Constraint::range(2, 62));
        const MODE: Param = Param::new("mode", Constraint::OneOf(CodablockMode::TOKENS));

        w.param(&ORIENTATION, self.orientation)?
            .param(&ROW_HEIGHT, self.height)?
            .param(&SECURITY_LEVEL, self.security_level)?
            .param(&CHARACTERS_PER_ROW, self.characters_per_row)?;
        if let Some(rows) = w.accept(self.row_count) {
            let (min, max) = match self.mode {
                CodablockMode::Code39 => (1, 22),
                CodablockMode::Code128Fnc1 | CodablockMode::Code128 => (2, 4),
            };
            let rows = check_range("row_count", i64::from(rows), min, max)?;
            w.emit(rows.to_string());
        }
        w.param(&MODE, Some(self.mode))?;
        Ok(())
    }
}

/// UPS MaxiCode (`^BD`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaxiCode {
    /// Symbol mode, 2–6.
    pub mode: Option<u8>,
    /// Position of this symbol in a structured append, 1–8.
    pub symbol_number: Option<u8>,
    /// Total symbols in the structured append, 1–8.
    pub symbol_count: Option<u8>,
}

impl Encode for MaxiCode {
    const OPCODE: &'static str = "^BD";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        const MODE: Param = Param::new("mode", Constraint::range(2, 6));
        const SYMBOL_NUMBER: Param = Param::new("symbol_number", Constraint::range(1, 8));
        const SYMBOL_COUNT: Param = Param::new("symbol_count", Constraint::range(1, 8));

        w.param(&MODE, self.mode)?
            .param(&SYMBOL_NUMBER, self.symbol_number)?
            .param(&SYMBOL_COUNT, self.symbol_count)?;
        Ok(())
    }
}

/// MicroPDF417 (`^BF`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MicroPdf417 {
    /// Barcode rotation.
    pub orientation: Option<Orientation>,
    /// Row height in dots, 1–9999.
    pub height: Option<u32>,
    /// Columns, rows and error correction preset, 0–33.
    pub mode: Option<u8>,
}

impl Encode for MicroPdf417 {
    const OPCODE: &'static str = "^BF";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        const ROW_HEIGHT: Param = Param::new("height", Constraint::range(1, 9999));
        const MODE: Param = Param::new("mode", Constraint::range(0, 33));

        w.param(&ORIENTATION, self.orientation)?
            .param(&ROW_HEIGHT, self.height)?
            .param(&MODE, self.mode)?;
        Ok(())
    }
}

/// QR code (`^BQ`). Orientation is fixed to `N`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Qr {
    /// Model 1 (original) or 2 (enhanced).
    pub model: Option<u8>,
    /// Magnification factor, 1–10.
    pub magnification: Option<u32>,
    /// Error correction level.
    pub error_correction: Option<QrErrorCorrection>,
    /// Mask pattern, 0–7.
    pub mask: Option<u8>,
}

impl Encode for Qr {
    const OPCODE: &'static str = "^BQ";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        const MODEL: Param = Param::new("model", Constraint::OneOf(&["1", "2"]));
        const ERROR_CORRECTION: Param = Param::new(
            "error_correction",
            Constraint::OneOf(QrErrorCorrection::TOKENS),
        );
        const MASK: Param = Param::new("mask", Constraint::range(0, 7));

        w.fixed(Orientation::Normal.token());
        w.param(&MODEL, self.model)?
            .param(&MAGNIFICATION, self.magnification)?
            .param(&ERROR_CORRECTION, self.error_correction)?
            .param(&MASK, self.mask)?;
        Ok(())
    }
}

/// GS1 DataBar (`^BR`).
///
/// `width` only applies to GS1 DataBar Expanded (symbology 6) and is
/// silently dropped for every other symbology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Gs1Databar {
    /// Barcode rotation.
    pub orientation: Option<Orientation>,
    /// Symbology type, 1–12.
    pub symbology: Option<u8>,
    /// Magnification factor, 1–10.
    pub magnification: Option<u32>,
    /// Separator height, 1 or 2.
    pub separator_height: Option<u8>,
    /// Bar height in dots, 1–32000.
    pub height: Option<u32>,
    /// Segment width, even, 2–22.
    pub width: Option<u32>,
}

/// GS1 DataBar Expanded, the only symbology that takes a segment width.
const DATABAR_EXPANDED: u8 = 6;

impl Encode for Gs1Databar {
    const OPCODE: &'static str = "^BR";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        const SYMBOLOGY: Param = Param::new("symbology", Constraint::range(1, 12));
        const SEPARATOR_HEIGHT: Param = Param::new("separator_height", Constraint::OneOf(&["1", "2"]));

        w.param(&ORIENTATION, self.orientation)?
            .param(&SYMBOLOGY, self.symbology)?
            .param(&MAGNIFICATION, self.magnification)?
            .param(&SEPARATOR_HEIGHT, self.separator_height)?
            .param(&HEIGHT, self.height)?;
        if let Some(width) = w.accept(self.width)
            && self.symbology == Some(DATABAR_EXPANDED)
        {
            if width % 2 != 0 {
                return Err(ValidationError::new(
                    "width",
                    Violation::Parity {
                        even: true,
                        reason: "for GS1 DataBar Expanded",
                    },
                )
                .into());
            }
            let width = check_range("width", i64::from(width), 2, 22)?;
            w.emit(width.to_string());
        }
        Ok(())
    }
}

/// TLC39 (`^BT`): a Code 39 ECI number with a MicroPDF417 trailer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tlc39 {
    /// Barcode rotation.
    pub orientation: Option<Orientation>,
    /// Code 39 narrow bar width in dots, 1–10.
    pub code39_width: Option<u32>,
    /// Code 39 wide to narrow ratio, 2.0–3.0.
    pub code39_ratio: Option<f64>,
    /// Code 39 height in dots, 1–9999.
    pub code39_height: Option<u32>,
    /// MicroPDF417 row height in dots, 1–255.
    pub micropdf_height: Option<u32>,
    /// MicroPDF417 narrow bar width in dots, 1–10.
    pub micropdf_width: Option<u32>,
}

impl Encode for Tlc39 {
    const OPCODE: &'static str = "^BT";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        const CODE39_WIDTH: Param = Param::new("code39_width", Constraint::range(1, 10));
        const CODE39_RATIO: Param = Param::new("code39_ratio", Constraint::decimal(2.0, 3.0));
        const CODE39_HEIGHT: Param = Param::new("code39_height", Constraint::range(1, 9999));
        const MICROPDF_HEIGHT: Param = Param::new("micropdf_height", Constraint::range(1, 255));
        const MICROPDF_WIDTH: Param = Param::new("micropdf_width", Constraint::range(1, 10));

        w.param(&ORIENTATION, self.orientation)?
            .param(&CODE39_WIDTH, self.code39_width)?
            .param(&CODE39_RATIO, self.code39_ratio)?
            .param(&CODE39_HEIGHT, self.code39_height)?
            .param(&MICROPDF_HEIGHT, self.micropdf_height)?
            .param(&MICROPDF_WIDTH, self.micropdf_width)?;
        Ok(())
    }
}

/// Data Matrix (`^BX`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataMatrix {
    /// Barcode rotation.
    pub orientation: Option<Orientation>,
    /// Module height in dots, 1–32000.
    pub height: Option<u32>,
    /// Quality level: 0, 50, 80, 100, 140 or 200 (ECC 200).
    pub quality: Option<u16>,
    /// Columns, 9–49. Even for quality 200, odd otherwise.
    pub columns: Option<u32>,
    /// Rows, 9–49.
    pub rows: Option<u32>,
    /// Format ID, 1–6.
    pub format_id: Option<u8>,
    /// Escape control character, a single character.
    pub escape_character: Option<String>,
    /// Aspect ratio: 1 square, 2 rectangular.
    pub aspect_ratio: Option<u8>,
}

/// Data Matrix quality level using ECC 200 error correction.
const ECC_200: u16 = 200;

impl Encode for DataMatrix {
    const OPCODE: &'static str = "^BX";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        const QUALITY: Param = Param::new(
            "quality",
            Constraint::OneOf(&["0", "50", "80", "100", "140", "200"]),
        );
        const ROWS: Param = Param::new("rows", Constraint::range(9, 49));
        const FORMAT_ID: Param = Param::new("format_id", Constraint::range(1, 6));
        const ESCAPE_CHARACTER: Param = Param::new("escape_character", Constraint::Char);
        const ASPECT_RATIO: Param = Param::new("aspect_ratio", Constraint::range(1, 2));

        w.param(&ORIENTATION, self.orientation)?
            .param(&HEIGHT, self.height)?
            .param(&QUALITY, self.quality)?;
        if let Some(columns) = w.accept(self.columns) {
            let ecc200 = self.quality == Some(ECC_200);
            if (columns % 2 == 0) != ecc200 {
                let reason = if ecc200 {
                    "for quality 200"
                } else {
                    "for quality 0, 50, 80, 100 and 140"
                };
                return Err(ValidationError::new(
                    "columns",
                    Violation::Parity {
                        even: ecc200,
                        reason,
                    },
                )
                .into());
            }
            let columns = check_range("columns", i64::from(columns), 9, 49)?;
            w.emit(columns.to_string());
        }
        w.param(&ROWS, self.rows)?
            .param(&FORMAT_ID, self.format_id)?
            .param(&ESCAPE_CHARACTER, self.escape_character.as_ref())?
            .param(&ASPECT_RATIO, self.aspect_ratio)?;
        Ok(())
    }
}
