//! ZPL Preview Client: render ZPL documents to PNG images.
//!
//! Talks to the Labelary HTTP API (or any service exposing the same
//! `/v1/printers/{dpmm}dpmm/labels/{w}x{h}/{index}/` endpoint). The API is
//! synchronous; no async runtime is required.
mod config;
mod error;
mod labelary;
mod request;

pub use config::{DEFAULT_BASE_URL, PreviewConfig, PreviewTimeouts};
pub use error::PreviewError;
pub use labelary::LabelaryClient;
pub use request::PreviewRequest;

// ── Traits ──────────────────────────────────────────────────────────────

/// Turn a finished ZPL document into an image.
pub trait LabelRenderer {
    /// Render `zpl` and return the image bytes.
    fn render(&self, zpl: &str, request: &PreviewRequest) -> Result<Vec<u8>, PreviewError>;
}
