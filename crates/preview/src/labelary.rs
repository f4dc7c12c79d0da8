//! Blocking HTTP client for Labelary-compatible rendering services.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use crate::{LabelRenderer, PreviewConfig, PreviewError, PreviewRequest};

/// Renders labels by POSTing the document text to a Labelary-compatible
/// service. One attempt per call; failures are returned, never retried.
#[derive(Debug, Clone)]
pub struct LabelaryClient {
    client: Client,
    base_url: String,
}

impl LabelaryClient {
    /// Build a client from configuration.
    pub fn new(config: &PreviewConfig) -> Result<Self, PreviewError> {
        let client = Client::builder()
            .connect_timeout(config.timeouts.connect)
            .timeout(config.timeouts.request)
            .build()
            .map_err(PreviewError::Http)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Full URL a request is sent to.
    pub fn url(&self, request: &PreviewRequest) -> String {
        format!("{}{}", self.base_url, request.path())
    }
}

impl LabelRenderer for LabelaryClient {
    fn render(&self, zpl: &str, request: &PreviewRequest) -> Result<Vec<u8>, PreviewError> {
        request.validate()?;
        let url = self.url(request);
        tracing::debug!(%url, bytes = zpl.len(), "requesting label preview");

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "image/png")
            .body(zpl.to_owned())
            .send()
            .map_err(|source| PreviewError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response.bytes().map_err(PreviewError::Http)?.to_vec();
        if status != StatusCode::OK {
            tracing::warn!(%url, status = status.as_u16(), "preview service refused label");
            return Err(PreviewError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(%url, bytes = body.len(), "received label preview");
        Ok(body)
    }
}
