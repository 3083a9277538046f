//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_rounding_scale_matches_digits() {
    assert_eq!(ROUNDING_SCALE, 10f64.powi(ROUNDING_DIGITS));
}

#[test]
fn test_round_to_digits_removes_noise() {
    assert_eq!(round_to_digits(0.1 + 0.2), 0.3);
    assert_eq!(round_to_digits(1.0 - 1e-15), 1.0);
}

#[test]
fn test_round_to_digits_keeps_twelve_digits() {
    assert_eq!(round_to_digits(0.123456789012), 0.123456789012);
    assert_eq!(round_to_digits(0.1234567890124), 0.123456789012);
}

#[test]
fn test_round_to_digits_negative() {
    assert_eq!(round_to_digits(-2.5000000000000004), -2.5);
}

// =============================================================================
// JOINERY TESTS
// =============================================================================

#[test]
fn test_default_finger_is_twice_thickness() {
    assert_eq!(DEFAULT_FINGER_LENGTH, 2.0 * DEFAULT_THICKNESS);
    assert_eq!(DEFAULT_SPACE_LENGTH, 2.0 * DEFAULT_THICKNESS);
}

/// Ensures default constants are sane and positive.
#[test]
fn test_default_config_is_valid() {
    let cfg = JoineryConfig::default();
    assert!(cfg.finger_length > 0.0);
    assert!(cfg.space_length > 0.0);
    assert_eq!(JoineryConfig::new(cfg.finger_length, cfg.space_length), Ok(cfg));
}

/// Validates the builder rejects invalid values.
#[test]
fn test_new_validates_inputs() {
    assert_eq!(
        JoineryConfig::new(0.0, 4.0).unwrap_err(),
        ConfigError::InvalidFingerLength(0.0)
    );
    assert_eq!(
        JoineryConfig::new(4.0, -1.0).unwrap_err(),
        ConfigError::InvalidSpaceLength(-1.0)
    );
    assert!(JoineryConfig::new(f64::NAN, 4.0).is_err());
}
