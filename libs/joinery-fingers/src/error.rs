//! # Finger Layout Errors
//!
//! Error types for finger-joint generation.

use thiserror::Error;

/// Errors that can occur while laying out a finger joint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FingerError {
    /// The mandatory boundary segments do not fit in the edge.
    #[error("Insufficient length: boundary segments need {required}, edge is {available}")]
    InsufficientLength {
        /// Length taken by the start, end and alternation segments.
        required: f64,
        /// Total edge length.
        available: f64,
    },

    /// A length argument is zero, negative or not finite.
    #[error("Invalid {name}: {value} (expected a finite positive length)")]
    InvalidLength {
        /// Argument name.
        name: &'static str,
        /// Value as supplied.
        value: f64,
    },

    /// Unknown boundary keyword.
    #[error("Invalid boundary: {0} (expected finger, space, half_finger or half_space)")]
    InvalidBoundary(String),

    /// Unknown rounding keyword.
    #[error("Invalid rounding: {0}")]
    InvalidRounding(String),

    /// A shrink policy left a segment with no length.
    #[error("Degenerate layout: {kind} length would be {length}")]
    Degenerate {
        /// Segment type that collapsed.
        kind: &'static str,
        /// Length after rounding compensation.
        length: f64,
    },
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FingerError::InsufficientLength {
            required: 30.0,
            available: 20.0,
        };
        assert!(err.to_string().contains("Insufficient length"));
        assert!(FingerError::InvalidBoundary("tab".into())
            .to_string()
            .contains("tab"));
    }
}
