//! # Interval Errors
//!
//! Error types for interval classification.

use thiserror::Error;

/// Errors that can occur while classifying intervals.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntervalError {
    /// Interval bounds are not finite or not strictly increasing.
    #[error("Invalid interval [{low}, {high}]: expected finite bounds with low < high")]
    InvalidInterval {
        /// Lower bound as supplied.
        low: f64,
        /// Upper bound as supplied.
        high: f64,
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
        let err = IntervalError::InvalidInterval { low: 5.0, high: 1.0 };
        let text = err.to_string();
        assert!(text.contains("Invalid interval"));
        assert!(text.contains("[5, 1]"));
    }
}
