//! Linear (one-dimensional) barcode commands.

use serde::{Deserialize, Serialize};

use super::{CHECK_DIGIT, HEIGHT, ORIENTATION, PRINT_TEXT, TEXT_ABOVE};
use crate::commands::Encode;
use crate::emit::CommandWriter;
use crate::error::BuildError;
use crate::tokens::{CodabarStartStop, Code49StartingMode, MsiCheckDigit, Orientation, YesNo};
use crate::validate::{Constraint, Param};

/// Declares a linear barcode with the shared parameter layout.
///
/// * no suffix: orientation, height, print_text, text_above
/// * `trailing_check`: the same, then check_digit
/// * `leading_check`: orientation, check_digit, height, print_text,
///   text_above, where an absent check digit is skipped rather than
///   halting the command
macro_rules! linear_barcode {
    ($(#[$meta:meta])* $name:ident, $opcode:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $name {
            /// Barcode rotation.
            pub orientation: Option<Orientation>,
            /// Bar height in dots, 1–32000.
            pub height: Option<u32>,
            /// Print the interpretation line.
            pub print_text: Option<YesNo>,
            /// Print the interpretation line above the code.
            pub text_above: Option<YesNo>,
        }

        impl Encode for $name {
            const OPCODE: &'static str = $opcode;

            fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
                w.param(&ORIENTATION, self.orientation)?
                    .param(&HEIGHT, self.height)?
                    .param(&PRINT_TEXT, self.print_text)?
                    .param(&TEXT_ABOVE, self.text_above)?;
                Ok(())
            }
        }
    };
    ($(#[$meta:meta])* $name:ident, $opcode:literal, trailing_check) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $name {
            /// Barcode rotation.
            pub orientation: Option<Orientation>,
            /// Bar height in dots, 1–32000.
            pub height: Option<u32>,
            /// Print the interpretation line.
            pub print_text: Option<YesNo>,
            /// Print the interpretation line above the code.
            pub text_above: Option<YesNo>,
            /// Calculate and print a check digit.
            pub check_digit: Option<YesNo>,
        }

        impl Encode for $name {
            const OPCODE: &'static str = $opcode;

            fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
                w.param(&ORIENTATION, self.orientation)?
                    .param(&HEIGHT, self.height)?
                    .param(&PRINT_TEXT, self.print_text)?
                    .param(&TEXT_ABOVE, self.text_above)?
                    .param(&CHECK_DIGIT, self.check_digit)?;
                Ok(())
            }
        }
    };
    ($(#[$meta:meta])* $name:ident, $opcode:literal, leading_check) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $name {
            /// Barcode rotation.
            pub orientation: Option<Orientation>,
            /// Check digit flag. Skipped when absent; later fields still
            /// follow.
            pub check_digit: Option<YesNo>,
            /// Bar height in dots, 1–32000.
            pub height: Option<u32>,
            /// Print the interpretation line.
            pub print_text: Option<YesNo>,
            /// Print the interpretation line above the code.
            pub text_above: Option<YesNo>,
        }

        impl Encode for $name {
            const OPCODE: &'static str = $opcode;

            fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
                w.param(&ORIENTATION, self.orientation)?
                    .optional(&CHECK_DIGIT, self.check_digit)?
                    .param(&HEIGHT, self.height)?
                    .param(&PRINT_TEXT, self.print_text)?
                    .param(&TEXT_ABOVE, self.text_above)?;
                Ok(())
            }
        }
    };
}

linear_barcode! {
    /// Code 11 (`^B1`). `check_digit`: `Y` for one digit, `N` for two.
    Code11, "^B1", leading_check
}

linear_barcode! {
    /// Interleaved 2 of 5 (`^B2`). `check_digit` adds a Mod 10 digit.
    Interleaved2Of5, "^B2", trailing_check
}

linear_barcode! {
    /// Code 39 (`^B3`). `check_digit` adds a Mod 43 digit.
    Code39, "^B3", leading_check
}

linear_barcode! {
    /// Planet Code (`^B5`).
    Planet, "^B5"
}

linear_barcode! {
    /// EAN-8 (`^B8`).
    Ean8, "^B8"
}

linear_barcode! {
    /// UPC-E (`^B9`).
    UpcE, "^B9", trailing_check
}

linear_barcode! {
    /// Code 93 (`^BA`).
    Code93, "^BA", trailing_check
}

linear_barcode! {
    /// Code 128 (`^BC`). `check_digit` adds a UCC Mod 10 digit.
    Code128, "^BC", trailing_check
}

linear_barcode! {
    /// EAN-13 (`^BE`).
    Ean13, "^BE"
}

linear_barcode! {
    /// Industrial 2 of 5 (`^BI`).
    Industrial2Of5, "^BI"
}

linear_barcode! {
    /// Standard 2 of 5 (`^BJ`).
    Standard2Of5, "^BJ"
}

linear_barcode! {
    /// Plessey (`^BP`).
    Plessey, "^BP", leading_check
}

linear_barcode! {
    /// UPC/EAN two- or five-digit extension (`^BS`).
    UpcEanExtension, "^BS"
}

linear_barcode! {
    /// UPC-A (`^BU`).
    UpcA, "^BU", trailing_check
}

/// Code 49 (`^B4`).
///
/// The interpretation line is written as a single token derived from
/// `print_text` and `text_above`: `A` (above), `B` (below) or `N` (none).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Code49 {
    /// Barcode rotation.
    pub orientation: Option<Orientation>,
    /// Row height multiplier.
    pub height_multiplier: Option<i32>,
    /// Print the interpretation line.
    pub print_text: Option<YesNo>,
    /// Print the interpretation line above the code. Only consulted when
    /// `print_text` is `Y`.
    pub text_above: Option<YesNo>,
    /// Starting mode.
    pub starting_mode: Option<Code49StartingMode>,
}

impl Encode for Code49 {
    const OPCODE: &'static str = "^B4";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        const HEIGHT_MULTIPLIER: Param = Param::new("height_multiplier", Constraint::Integer);
        const STARTING_MODE: Param =
            Param::new("starting_mode", Constraint::OneOf(Code49StartingMode::TOKENS));

        w.param(&ORIENTATION, self.orientation)?
            .param(&HEIGHT_MULTIPLIER, self.height_multiplier)?;
        if let Some(print_text) = w.accept(self.print_text) {
            let line = match (print_text, self.text_above) {
                (YesNo::Yes, Some(YesNo::Yes)) => "A",
                (YesNo::Yes, _) => "B",
                (YesNo::No, _) => "N",
            };
            w.emit(line);
        }
        w.param(&STARTING_MODE, self.starting_mode)?;
        Ok(())
    }
}

/// ANSI Codabar (`^BK`).
///
/// The check digit position is always `N`; it is written right after the
/// orientation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnsiCodabar {
    /// Barcode rotation.
    pub orientation: Option<Orientation>,
    /// Bar height in dots, 1–32000.
    pub height: Option<u32>,
    /// Print the interpretation line.
    pub print_text: Option<YesNo>,
    /// Print the interpretation line above the code.
    pub text_above: Option<YesNo>,
    /// Start character.
    pub start_character: Option<CodabarStartStop>,
    /// Stop character.
    pub stop_character: Option<CodabarStartStop>,
}

impl Encode for AnsiCodabar {
    const OPCODE: &'static str = "^BK";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        const START: Param =
            Param::new("start_character", Constraint::OneOf(CodabarStartStop::TOKENS));
        const STOP: Param =
            Param::new("stop_character", Constraint::OneOf(CodabarStartStop::TOKENS));

        w.param(&ORIENTATION, self.orientation)?;
        w.fixed(YesNo::No.token());
        w.param(&HEIGHT, self.height)?
            .param(&PRINT_TEXT, self.print_text)?
            .param(&TEXT_ABOVE, self.text_above)?
            .param(&START, self.start_character)?
            .param(&STOP, self.stop_character)?;
        Ok(())
    }
}

/// LOGMARS (`^BL`). The interpretation line, when printed, is always
/// below unless `text_above` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Logmars {
    /// Barcode rotation.
    pub orientation: Option<Orientation>,
    /// Bar height in dots, 1–32000.
    pub height: Option<u32>,
    /// Print the interpretation line above the code.
    pub text_above: Option<YesNo>,
}

impl Encode for Logmars {
    const OPCODE: &'static str = "^BL";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        w.param(&ORIENTATION, self.orientation)?
            .param(&HEIGHT, self.height)?
            .param(&TEXT_ABOVE, self.text_above)?;
        Ok(())
    }
}

/// MSI (`^BM`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Msi {
    /// Barcode rotation.
    pub orientation: Option<Orientation>,
    /// Check digit scheme.
    pub check_digit: Option<MsiCheckDigit>,
    /// Bar height in dots, 1–32000.
    pub height: Option<u32>,
    /// Print the interpretation line.
    pub print_text: Option<YesNo>,
    /// Print the interpretation line above the code.
    pub text_above: Option<YesNo>,
    /// Include the check digit in the interpretation line.
    pub insert_check_digit: Option<YesNo>,
}

impl Encode for Msi {
    const OPCODE: &'static str = "^BM";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        const MSI_CHECK_DIGIT: Param =
            Param::new("check_digit", Constraint::OneOf(MsiCheckDigit::TOKENS));
        const INSERT_CHECK_DIGIT: Param = Param::new("insert_check_digit", Constraint::Flag);

        w.param(&ORIENTATION, self.orientation)?
            .param(&MSI_CHECK_DIGIT, self.check_digit)?
            .param(&HEIGHT, self.height)?
            .param(&PRINT_TEXT, self.print_text)?
            .param(&TEXT_ABOVE, self.text_above)?
            .param(&INSERT_CHECK_DIGIT, self.insert_check_digit)?;
        Ok(())
    }
}

/// Postal (`^BZ`): POSTNET, PLANET and USPS Intelligent Mail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Postal {
    /// Barcode rotation.
    pub orientation: Option<Orientation>,
    /// Bar height in dots, 1–32000.
    pub height: Option<u32>,
    /// Print the interpretation line.
    pub print_text: Option<YesNo>,
    /// Print the interpretation line above the code.
    pub text_above: Option<YesNo>,
    /// 0 POSTNET, 1 PLANET, 2 reserved, 3 USPS Intelligent Mail.
    pub code_type: Option<u8>,
}

impl Encode for Postal {
    const OPCODE: &'static str = "^BZ";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        const CODE_TYPE: Param = Param::new("code_type", Constraint::range(0, 3));

        w.param(&ORIENTATION, self.orientation)?
            .param(&HEIGHT, self.height)?
            .param(&PRINT_TEXT, self.print_text)?
            .param(&TEXT_ABOVE, self.text_above)?
            .param(&CODE_TYPE, self.code_type)?;
        Ok(())
    }
}
