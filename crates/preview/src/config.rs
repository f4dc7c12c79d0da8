//! Configuration types for the preview client.

use std::time::Duration;

/// Public Labelary endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://api.labelary.com";

/// Complete preview client configuration: endpoint + timeouts.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Base URL of the rendering service, without the `/v1/...` path.
    pub base_url: String,
    /// Network timeout settings.
    pub timeouts: PreviewTimeouts,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeouts: PreviewTimeouts::default(),
        }
    }
}

/// Timeout settings for preview requests.
///
/// Defaults:
/// - `connect`: 5s
/// - `request`: 30s (large labels with embedded graphics render slowly)
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct PreviewTimeouts {
    /// Maximum time to wait for the connection to establish.
    pub connect: Duration,
    /// Maximum time for the whole request, response body included.
    pub request: Duration,
}

impl Default for PreviewTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(5),
            request: Duration::from_secs(30),
        }
    }
}
