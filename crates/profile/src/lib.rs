//! Label profile definitions and validation for the ZPL builder.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Print densities, in dots per millimetre, that the preview service renders.
pub const SUPPORTED_DPMM: [u32; 4] = [6, 8, 12, 24];

/// Largest label edge accepted, in inches.
pub const MAX_LABEL_INCHES: f64 = 15.0;

const MM_PER_INCH: f64 = 25.4;

/// Errors that can occur when loading or validating a label profile.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProfileError {
    /// JSON deserialization failed.
    #[error("invalid profile JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A field value is out of its valid range.
    #[error("invalid {field}: {reason}")]
    InvalidField {
        /// The name of the field that failed validation.
        field: String,
        /// A human-readable explanation of why the field value is invalid.
        reason: String,
    },

    /// The profile file could not be read.
    #[error("failed to read profile: {0}")]
    Io(#[from] std::io::Error),
}

/// Physical description of a label stock and the printer density it is
/// printed at.
///
/// Sizes preview renders, and gives the label's extent in dots for laying
/// out command positions.
///
/// # Example
/// ```
/// let profile = zpl_builder_profile::LabelProfile {
///     id: "shipping-4x6".into(),
///     schema_version: "1.0.0".into(),
///     width_in: 4.0,
///     height_in: 6.0,
///     dpmm: 8,
///     index: None,
///     preview: None,
/// };
/// assert_eq!(profile.width_dots(), 813);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LabelProfile {
    /// Unique profile identifier (e.g., `"shipping-4x6"`).
    pub id: String,
    /// Profile schema version for forward compatibility (e.g., `"1.0.0"`).
    pub schema_version: String,
    /// Label width in inches.
    pub width_in: f64,
    /// Label height in inches.
    pub height_in: f64,
    /// Print density in dots per millimetre (6, 8, 12 or 24).
    pub dpmm: u32,
    /// Label index within a multi-label document to preview (defaults to 0).
    #[serde(default)]
    pub index: Option<u32>,
    /// Preview service settings.
    #[serde(default)]
    pub preview: Option<PreviewEndpoint>,
}

/// Where preview renders are requested from.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PreviewEndpoint {
    /// Base URL of a Labelary-compatible rendering service.
    pub base_url: Option<String>,
}

impl LabelProfile {
    /// Label width in dots at this profile's density.
    pub fn width_dots(&self) -> u32 {
        inches_to_dots(self.width_in, self.dpmm)
    }

    /// Label height in dots at this profile's density.
    pub fn height_dots(&self) -> u32 {
        inches_to_dots(self.height_in, self.dpmm)
    }

    /// Configured preview base URL, if any.
    pub fn base_url(&self) -> Option<&str> {
        self.preview.as_ref().and_then(|p| p.base_url.as_deref())
    }
}

/// Convert a physical length to dots, rounding to the nearest dot.
pub fn inches_to_dots(inches: f64, dpmm: u32) -> u32 {
    (inches * MM_PER_INCH * f64::from(dpmm)).round().max(0.0) as u32
}

fn invalid(field: &str, reason: impl Into<String>) -> ProfileError {
    ProfileError::InvalidField {
        field: field.into(),
        reason: reason.into(),
    }
}

/// Check one label dimension: positive, finite, at most [`MAX_LABEL_INCHES`].
pub fn validate_dimension(field: &str, inches: f64) -> Result<(), ProfileError> {
    if !inches.is_finite() || inches <= 0.0 {
        return Err(invalid(field, format!("{inches} must be > 0")));
    }
    if inches > MAX_LABEL_INCHES {
        return Err(invalid(
            field,
            format!("{inches} exceeds maximum label size ({MAX_LABEL_INCHES} in)"),
        ));
    }
    Ok(())
}

/// Check a print density against [`SUPPORTED_DPMM`].
pub fn validate_dpmm(dpmm: u32) -> Result<(), ProfileError> {
    if SUPPORTED_DPMM.contains(&dpmm) {
        Ok(())
    } else {
        Err(invalid(
            "dpmm",
            format!("{dpmm} is not one of {SUPPORTED_DPMM:?}"),
        ))
    }
}

/// Check that a base URL uses the `http` or `https` scheme.
pub fn validate_base_url(url: &str) -> Result<(), ProfileError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(invalid(
            "preview.base_url",
            format!("{url:?} must start with http:// or https://"),
        ))
    }
}

/// Load and validate a [`LabelProfile`] from a JSON string.
///
/// The `id`, `schema_version`, `width_in`, `height_in`, and `dpmm` fields are
/// required; deserialization fails if any of them is missing.
///
/// Performs structural validation after deserialization:
/// - `id` and `schema_version` must be non-empty
/// - `width_in` and `height_in` must be > 0 and <= 15
/// - `dpmm` must be one of 6, 8, 12, 24
/// - `preview.base_url` must start with `http://` or `https://` (if present)
pub fn load_profile_from_str(s: &str) -> Result<LabelProfile, ProfileError> {
    let profile: LabelProfile = serde_json::from_str(s)?;

    // -- Required string field validation --
    if profile.id.trim().is_empty() {
        return Err(invalid("id", "must not be empty"));
    }
    if profile.schema_version.trim().is_empty() {
        return Err(invalid("schema_version", "must not be empty"));
    }

    // -- Dimension validation --
    validate_dimension("width_in", profile.width_in)?;
    validate_dimension("height_in", profile.height_in)?;

    // -- Density validation --
    validate_dpmm(profile.dpmm)?;

    // -- Preview endpoint validation --
    if let Some(url) = profile.base_url() {
        validate_base_url(url)?;
    }

    Ok(profile)
}

/// Read and validate a [`LabelProfile`] from a JSON file.
pub fn load_profile_from_path(path: impl AsRef<Path>) -> Result<LabelProfile, ProfileError> {
    let text = std::fs::read_to_string(path)?;
    load_profile_from_str(&text)
}
