//! Preview request parameters.

use zpl_builder_profile::{LabelProfile, SUPPORTED_DPMM};

use crate::PreviewError;

/// What to render: physical label size, density, and which label of the
/// document to return.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRequest {
    /// Label width in inches.
    pub width_in: f64,
    /// Label height in inches.
    pub height_in: f64,
    /// Print density in dots per millimetre.
    pub dpmm: u32,
    /// Zero-based label index within the document.
    pub index: u32,
}

impl Default for PreviewRequest {
    /// A 4x6 inch label at 8 dpmm, first label.
    fn default() -> Self {
        Self {
            width_in: 4.0,
            height_in: 6.0,
            dpmm: 8,
            index: 0,
        }
    }
}

impl From<&LabelProfile> for PreviewRequest {
    fn from(profile: &LabelProfile) -> Self {
        Self {
            width_in: profile.width_in,
            height_in: profile.height_in,
            dpmm: profile.dpmm,
            index: profile.index.unwrap_or(0),
        }
    }
}

impl PreviewRequest {
    /// Reject requests the service cannot render.
    pub fn validate(&self) -> Result<(), PreviewError> {
        if !SUPPORTED_DPMM.contains(&self.dpmm) {
            return Err(PreviewError::InvalidRequest(format!(
                "dpmm {} is not one of {SUPPORTED_DPMM:?}",
                self.dpmm
            )));
        }
        for (name, value) in [("width", self.width_in), ("height", self.height_in)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PreviewError::InvalidRequest(format!(
                    "{name} must be a positive number of inches, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// The `/v1/printers/...` path for this request.
    pub fn path(&self) -> String {
        format!(
            "/v1/printers/{}dpmm/labels/{}x{}/{}/",
            self.dpmm, self.width_in, self.height_in, self.index
        )
    }
}
