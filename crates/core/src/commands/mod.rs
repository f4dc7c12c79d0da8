//! Command encoders and the label builder that drives them.
//!
//! Every command implements [`Encode`]: the builder pushes the opcode, hands
//! the encoder a [`CommandWriter`] to write its parameters in declaration
//! order, and appends exactly one newline once the encoder succeeds.

pub mod barcode;
mod graphics;
mod position;
mod print;
mod text;

pub use graphics::{GraphicBox, GraphicCircle};
pub use position::{FieldBlock, FieldOrigin, LabelHome};
pub use print::PrintQuantity;
pub use text::{Comment, FieldData, Font};

use std::fmt;

use crate::emit::{CommandWriter, TokenStream, render_bytes, render_text};
use crate::error::BuildError;
use crate::field_data::BarcodeData;

/// A command that can be appended to a label.
pub trait Encode {
    /// Fixed opcode written before any parameter (e.g. `"^FO"`).
    const OPCODE: &'static str;

    /// Write this command's parameters.
    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError>;
}

/// Builds one ZPL II document.
///
/// ```
/// use zpl_builder_core::{LabelBuilder, FieldOrigin, FieldData};
///
/// let mut label = LabelBuilder::new();
/// label
///     .add(&FieldOrigin { x: Some(50), y: Some(100), ..Default::default() })?
///     .add(&FieldData::text("Hello"))?;
/// assert_eq!(label.render_text(), "^XA\n^FO50,100\n^FDHello^FS\n^XZ");
/// # Ok::<(), zpl_builder_core::BuildError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelBuilder {
    stream: TokenStream,
}

impl LabelBuilder {
    /// An empty document holding only the start sentinel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one command followed by a newline.
    ///
    /// On error the newline is not written, and fragments already written
    /// for earlier parameters of this command stay in the stream.
    pub fn add<C: Encode + ?Sized>(&mut self, cmd: &C) -> Result<&mut Self, BuildError> {
        let mut w = CommandWriter::open(&mut self.stream, C::OPCODE);
        if let Err(e) = cmd.encode(&mut w) {
            tracing::debug!(opcode = C::OPCODE, error = %e, "command rejected");
            return Err(e);
        }
        let fragments = w.finish();
        tracing::trace!(opcode = C::OPCODE, fragments, "command encoded");
        Ok(self)
    }

    /// Validate a symbology payload and append it as field data.
    ///
    /// The payload is fully prepared before anything is written, so a
    /// rejected payload leaves the stream untouched.
    pub fn barcode_data(&mut self, data: &BarcodeData) -> Result<&mut Self, BuildError> {
        let field = data.prepare().inspect_err(|e| {
            tracing::debug!(symbology = data.symbology(), error = %e, "barcode data rejected");
        })?;
        self.add(&field)
    }

    /// The underlying token stream.
    pub fn stream(&self) -> &TokenStream {
        &self.stream
    }

    /// Render the document, end sentinel included, as text.
    pub fn render_text(&self) -> String {
        render_text(&self.stream)
    }

    /// Render the document as UTF-8 bytes.
    pub fn render_bytes(&self) -> Vec<u8> {
        render_bytes(&self.stream)
    }
}

impl fmt::Display for LabelBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_text())
    }
}
