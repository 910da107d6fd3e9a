//! # Tessellation Errors
//!
//! Error types for polygon tessellation and primitive post-processing.
//!
//! ## Error Policy
//!
//! - Malformed input is rejected before any geometry processing
//! - Self-intersection is reported, never resolved
//! - A failure is never reported as an empty success

use thiserror::Error;

use crate::primitive::PrimitiveKind;

/// Errors that can occur during tessellation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TessellationError {
    /// A ring has too few distinct points (ring 0 is the outer ring).
    #[error("Malformed ring {ring}: {message}")]
    MalformedRing {
        /// Index of the ring in [`Polygon::rings`](crate::Polygon::rings) order.
        ring: usize,
        /// What is wrong with the ring.
        message: String,
    },

    /// The polygon (or one of its rings) encloses no area.
    #[error("Degenerate polygon: {message}")]
    DegeneratePolygon {
        /// Which ring collapsed.
        message: String,
    },

    /// Edges cross or touch; vertex combination is not supported.
    #[error("Self-intersecting polygons are not supported")]
    SelfIntersection,

    /// The post-processor met a primitive that is not a triangle kind.
    #[error("Unsupported primitive type: {kind:?}")]
    UnsupportedPrimitive {
        /// The rejected kind.
        kind: PrimitiveKind,
    },

    /// A triangle primitive does not hold a usable vertex count.
    #[error("Malformed primitive: {message}")]
    MalformedPrimitive {
        /// Details of the bad vertex count.
        message: String,
    },

    /// The fill step failed or left part of the polygon uncovered.
    #[error("Tessellation failed: {message}")]
    Internal {
        /// Failure reported by the fill step.
        message: String,
    },
}

impl TessellationError {
    /// Creates a malformed ring error.
    pub fn malformed_ring(ring: usize, message: impl Into<String>) -> Self {
        Self::MalformedRing {
            ring,
            message: message.into(),
        }
    }

    /// Creates a degenerate polygon error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegeneratePolygon {
            message: message.into(),
        }
    }

    /// Creates a malformed primitive error.
    pub fn malformed_primitive(message: impl Into<String>) -> Self {
        Self::MalformedPrimitive {
            message: message.into(),
        }
    }

    /// Creates an internal tessellation error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Result type alias for tessellation operations.
pub type Result<T> = std::result::Result<T, TessellationError>;
