//! Serializable label jobs.
//!
//! A [`Job`] is an ordered command list in JSON form:
//!
//! ```json
//! { "commands": [
//!     { "command": "field_origin", "x": 50, "y": 100 },
//!     { "command": "font", "name": "0", "orientation": "N", "character_height": 30 },
//!     { "command": "field_data", "data": "Hello" }
//! ] }
//! ```
//!
//! Replaying a job goes through [`LabelBuilder`], so the same validation
//! applies as for direct API use.

use serde::{Deserialize, Serialize};

use crate::commands::barcode::{
    AnsiCodabar, Aztec, BarcodeDefaults, Codablock, Code11, Code128, Code39, Code49, Code93,
    DataMatrix, Ean13, Ean8, Gs1Databar, Industrial2Of5, Interleaved2Of5, Logmars, MaxiCode,
    MicroPdf417, Msi, Pdf417, Planet, Plessey, Postal, Qr, Standard2Of5, Tlc39, UpcA, UpcE,
    UpcEanExtension,
};
use crate::commands::{
    Comment, FieldBlock, FieldData, FieldOrigin, Font, GraphicBox, GraphicCircle, LabelBuilder,
    LabelHome, PrintQuantity,
};
use crate::error::BuildError;
use crate::field_data::BarcodeData;

/// Errors from loading or replaying a [`Job`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum JobError {
    /// The job document is not valid JSON or does not match the schema.
    #[error("invalid job: {0}")]
    Parse(#[from] serde_json::Error),

    /// A command was rejected while building.
    #[error("command {index} ({command}): {source}")]
    Command {
        /// Zero-based position of the failing command.
        index: usize,
        /// Name of the failing command, as written in the job.
        command: &'static str,
        /// The underlying failure.
        #[source]
        source: BuildError,
    },
}

macro_rules! commands {
    ($($(#[$meta:meta])* $variant:ident($ty:ty) => $name:literal, via $apply:ident;)+) => {
        /// One job entry, tagged by `"command"`.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "command")]
        #[non_exhaustive]
        pub enum Command {
            $(
                $(#[$meta])*
                #[serde(rename = $name)]
                $variant($ty),
            )+
        }

        impl Command {
            /// Tag used for this command in job documents.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Command::$variant(_) => $name,)+
                }
            }

            /// Append this command to `label`.
            pub fn apply(&self, label: &mut LabelBuilder) -> Result<(), BuildError> {
                match self {
                    $(Command::$variant(cmd) => label.$apply(cmd).map(|_| ()),)+
                }
            }
        }
    };
}

commands! {
    /// `^A`
    Font(Font) => "font", via add;
    /// `^LH`
    LabelHome(LabelHome) => "label_home", via add;
    /// `^FO`
    FieldOrigin(FieldOrigin) => "field_origin", via add;
    /// `^FB`
    FieldBlock(FieldBlock) => "field_block", via add;
    /// `^FD`
    FieldData(FieldData) => "field_data", via add;
    /// `^FD` with a symbology payload check.
    BarcodeData(BarcodeData) => "barcode_data", via barcode_data;
    /// `^FX`
    Comment(Comment) => "comment", via add;
    /// `^PQ`
    PrintQuantity(PrintQuantity) => "print_quantity", via add;
    /// `^GB`
    GraphicBox(GraphicBox) => "graphic_box", via add;
    /// `^GC`
    GraphicCircle(GraphicCircle) => "graphic_circle", via add;
    /// `^BY`
    BarcodeDefaults(BarcodeDefaults) => "barcode_defaults", via add;
    /// `^B0`
    Aztec(Aztec) => "aztec", via add;
    /// `^B1`
    Code11(Code11) => "code_11", via add;
    /// `^B2`
    Interleaved2Of5(Interleaved2Of5) => "interleaved_2_of_5", via add;
    /// `^B3`
    Code39(Code39) => "code_39", via add;
    /// `^B4`
    Code49(Code49) => "code_49", via add;
    /// `^B5`
    Planet(Planet) => "planet", via add;
    /// `^B7`
    Pdf417(Pdf417) => "pdf417", via add;
    /// `^B8`
    Ean8(Ean8) => "ean_8", via add;
    /// `^B9`
    UpcE(UpcE) => "upc_e", via add;
    /// `^BA`
    Code93(Code93) => "code_93", via add;
    /// `^BB`
    Codablock(Codablock) => "codablock", via add;
    /// `^BC`
    Code128(Code128) => "code_128", via add;
    /// `^BD`
    MaxiCode(MaxiCode) => "maxicode", via add;
    /// `^BE`
    Ean13(Ean13) => "ean_13", via add;
    /// `^BF`
    MicroPdf417(MicroPdf417) => "micropdf417", via add;
    /// `^BI`
    Industrial2Of5(Industrial2Of5) => "industrial_2_of_5", via add;
    /// `^BJ`
    Standard2Of5(Standard2Of5) => "standard_2_of_5", via add;
    /// `^BK`
    AnsiCodabar(AnsiCodabar) => "ansi_codabar", via add;
    /// `^BL`
    Logmars(Logmars) => "logmars", via add;
    /// `^BM`
    Msi(Msi) => "msi", via add;
    /// `^BP`
    Plessey(Plessey) => "plessey", via add;
    /// `^BQ`
    Qr(Qr) => "qr", via add;
    /// `^BR`
    Gs1Databar(Gs1Databar) => "gs1_databar", via add;
    /// `^BS`
    UpcEanExtension(UpcEanExtension) => "upc_ean_extension", via add;
    /// `^BT`
    Tlc39(Tlc39) => "tlc39", via add;
    /// `^BU`
    UpcA(UpcA) => "upc_a", via add;
    /// `^BX`
    DataMatrix(DataMatrix) => "data_matrix", via add;
    /// `^BZ`
    Postal(Postal) => "postal", via add;
}

/// An ordered list of commands making up one label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Job {
    /// Commands, in document order.
    pub commands: Vec<Command>,
}

impl Job {
    /// Parse a job from JSON text.
    pub fn from_json(input: &str) -> Result<Self, JobError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Replay every command into a fresh [`LabelBuilder`].
    ///
    /// Stops at the first rejected command.
    pub fn build(&self) -> Result<LabelBuilder, JobError> {
        let mut label = LabelBuilder::new();
        for (index, cmd) in self.commands.iter().enumerate() {
            cmd.apply(&mut label).map_err(|source| JobError::Command {
                index,
                command: cmd.name(),
                source,
            })?;
        }
        tracing::debug!(commands = self.commands.len(), "job built");
        Ok(label)
    }
}
