//! Token stream, command writer, and document renderer.

mod render;
mod stream;
mod writer;

pub use render::{render_bytes, render_text};
pub use stream::{END, NEWLINE, START, TokenStream};
pub use writer::{CommandWriter, SEPARATOR};
