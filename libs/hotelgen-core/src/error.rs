//! # Error Taxonomy
//!
//! Three non-overlapping error categories, kept distinct so a boundary layer
//! can map them deterministically (bad request vs. server-side geometry bug
//! vs. quality-gate failure). No category is ever swallowed silently.

use hotelgen_solid::GeometryError;
use thiserror::Error;

/// Generation pipeline error.
#[derive(Debug, Error)]
pub enum GenError {
    /// Malformed or out-of-range caller input. Always caller-caused; never
    /// retried; the offending value is named in the message.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// An internal construction step produced degenerate geometry where a
    /// non-empty result was required. Server-side bug or unsupported
    /// parameter combination; logged with context before surfacing.
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// A post-generation quality gate failed.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl GenError {
    /// Creates an invalid-parameters error.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams(message.into())
    }

    /// Creates a validation-failure error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
