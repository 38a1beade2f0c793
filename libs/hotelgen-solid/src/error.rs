//! # Geometry Errors
//!
//! Error type for solid construction and boolean operations.

use thiserror::Error;

/// Errors raised by primitives, transforms, and boolean operations.
///
/// Every public kernel operation either returns a valid [`crate::Solid`], an
/// explicitly empty one, or one of these errors — never a partially
/// constructed or self-intersecting solid.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A dimensional input that must be positive was not
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// Inputs describe degenerate geometry (too few points, zero area, ...)
    #[error("degenerate geometry: {message}")]
    Degenerate { message: String },

    /// Subtracting from an empty base is a caller bug, not a degenerate case
    #[error("cannot subtract from an empty base solid")]
    EmptyBase,

    /// A construction step that requires a non-empty result produced none
    #[error("{stage} produced an empty solid")]
    EmptyResult { stage: String },

    /// An unknown shape or unsupported variant was requested
    #[error("unsupported: {message}")]
    Unsupported { message: String },
}

impl GeometryError {
    /// Creates a degenerate-geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::Degenerate {
            message: message.into(),
        }
    }

    /// Creates an empty-result error for a named construction stage.
    pub fn empty_result(stage: impl Into<String>) -> Self {
        Self::EmptyResult {
            stage: stage.into(),
        }
    }

    /// Creates an unsupported-operation error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }
}

/// Returns an error if `value` is not strictly positive.
pub(crate) fn check_positive(value: f64, name: &'static str) -> Result<(), GeometryError> {
    if value <= 0.0 {
        return Err(GeometryError::NonPositive { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_positive_accepts_positive() {
        assert!(check_positive(0.1, "width").is_ok());
    }

    #[test]
    fn test_check_positive_rejects_zero_and_negative() {
        assert!(check_positive(0.0, "width").is_err());
        assert!(check_positive(-1.0, "depth").is_err());
    }

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = check_positive(-2.0, "radius").unwrap_err();
        assert!(err.to_string().contains("radius"));
        assert!(err.to_string().contains("-2"));
    }
}
