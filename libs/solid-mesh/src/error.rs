//! # Shape Errors
//!
//! Error types for solid and pipe mesh generation.

use polygon_tess::TessellationError;
use thiserror::Error;

/// Errors that can occur while building a shape mesh.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// A shape parameter is outside its valid range.
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Field name of the parameter.
        name: &'static str,
        /// Accepted range and the rejected value.
        message: String,
    },

    /// A pipe contour cannot be swept.
    #[error("Invalid contour: {message}")]
    InvalidContour {
        /// Why the contour was rejected.
        message: String,
    },

    /// An end cap could not be tessellated.
    #[error("Cap tessellation failed: {0}")]
    Tessellation(#[from] TessellationError),
}

impl ShapeError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }

    /// Creates an invalid contour error.
    pub fn invalid_contour(message: impl Into<String>) -> Self {
        Self::InvalidContour {
            message: message.into(),
        }
    }
}

/// Result type alias for shape operations.
pub type Result<T> = std::result::Result<T, ShapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShapeError::invalid_parameter("sector_count", "must be >= 3, got 2");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'sector_count': must be >= 3, got 2"
        );
    }

    #[test]
    fn test_invalid_contour_keeps_message() {
        let err = ShapeError::invalid_contour("no contour at 3");
        assert_eq!(
            err,
            ShapeError::InvalidContour {
                message: "no contour at 3".to_string()
            }
        );
    }

    #[test]
    fn test_from_tessellation_error() {
        let err: ShapeError = TessellationError::SelfIntersection.into();
        assert!(err.to_string().contains("Self-intersecting"));
    }
}
