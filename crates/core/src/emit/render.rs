//! Document rendering: pure concatenation of the stream plus the end
//! sentinel. No validation happens here.

use super::stream::{END, TokenStream};

/// Render the document as text.
///
/// Idempotent; the stream is not modified.
pub fn render_text(stream: &TokenStream) -> String {
    let mut out = String::with_capacity(stream.text_len());
    for fragment in stream.fragments() {
        out.push_str(fragment);
    }
    out.push_str(END);
    out
}

/// Render the document as UTF-8 bytes, ready to send to a printer.
pub fn render_bytes(stream: &TokenStream) -> Vec<u8> {
    render_text(stream).into_bytes()
}
