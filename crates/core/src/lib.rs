//! ZPL II label builder core library.
//!
//! Builds ZPL (Zebra Programming Language) documents from validated
//! commands. The main entry point is [`LabelBuilder`]: append commands with
//! [`LabelBuilder::add`], barcode payloads with [`LabelBuilder::barcode_data`],
//! then render with [`LabelBuilder::render_text`] or
//! [`LabelBuilder::render_bytes`]. [`Job`] offers the same through a JSON
//! command list.
//!
//! Every command follows one emission rule: parameters are written in
//! declaration order and the first unset parameter ends the command.

/// Command encoders and the label builder.
pub mod commands;
/// Token stream, sequential parameter writer, and document rendering.
pub mod emit;
/// Typed error types.
pub mod error;
/// Symbology-specific field data preparation.
pub mod field_data;
/// Serializable command lists.
pub mod job;
/// Letter- and digit-coded parameter values.
pub mod tokens;
/// Field validators and constraint descriptors.
pub mod validate;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available for less common types.

// Builder
pub use commands::{Encode, LabelBuilder};

// Commands
pub use commands::barcode::BarcodeDefaults;
pub use commands::{
    Comment, FieldBlock, FieldData, FieldOrigin, Font, GraphicBox, GraphicCircle, LabelHome,
    PrintQuantity,
};

// Payloads
pub use field_data::BarcodeData;

// Errors
pub use error::{BuildError, ValidationError, Violation};

// Jobs
pub use job::{Command, Job, JobError};

// Tokens
pub use tokens::{Justification, LineColor, Orientation, TextJustification, YesNo};
