//! Shared test helpers for `zpl_builder_core` integration tests.

#![allow(unreachable_pub)]

use zpl_builder_core::{BuildError, Encode, LabelBuilder};

/// Rendered document without the `^XA\n` prefix and `^XZ` suffix.
#[allow(dead_code)]
pub fn body(label: &LabelBuilder) -> String {
    let text = label.render_text();
    text.strip_prefix("^XA\n")
        .and_then(|t| t.strip_suffix("^XZ"))
        .unwrap_or_else(|| panic!("missing sentinels: {text:?}"))
        .to_string()
}

/// Render a single command into a fresh label and return its body.
#[allow(dead_code)]
pub fn render_one<C: Encode>(cmd: &C) -> Result<String, BuildError> {
    let mut label = LabelBuilder::new();
    label.add(cmd)?;
    Ok(body(&label))
}

/// Field name of a validation failure.
#[allow(dead_code)]
pub fn failed_field(err: &BuildError) -> String {
    err.as_validation()
        .unwrap_or_else(|| panic!("expected a validation error, got {err}"))
        .field
        .to_string()
}
