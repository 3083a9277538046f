//! # Configuration Constants
//!
//! Centralized constants for the panel joinery pipeline. Precision values,
//! material defaults and finger-joint defaults are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Rounding applied to every emitted coordinate
//! - **Material**: Default sheet thickness
//! - **Joinery**: Default finger and space lengths

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Number of decimal digits kept on emitted coordinates.
///
/// Interval intersections and finger segments are rounded to this many
/// digits to suppress floating-point noise such as `0.30000000000000004`.
///
/// # Example
///
/// ```rust
/// use config::constants::ROUNDING_DIGITS;
///
/// assert_eq!(ROUNDING_DIGITS, 12);
/// ```
pub const ROUNDING_DIGITS: i32 = 12;

/// Scale factor matching [`ROUNDING_DIGITS`] (`10^ROUNDING_DIGITS`).
pub const ROUNDING_SCALE: f64 = 1e12;

// =============================================================================
// MATERIAL CONSTANTS
// =============================================================================

/// Default sheet thickness (mm) for laser-cut panels.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_THICKNESS;
///
/// let user_thickness: Option<f64> = None;
/// let thickness = user_thickness.unwrap_or(DEFAULT_THICKNESS);
/// assert_eq!(thickness, 4.3);
/// ```
pub const DEFAULT_THICKNESS: f64 = 4.3;

// =============================================================================
// JOINERY CONSTANTS
// =============================================================================

/// Default finger length (mm), twice the default sheet thickness.
pub const DEFAULT_FINGER_LENGTH: f64 = DEFAULT_THICKNESS * 2.0;

/// Default space length (mm) between two fingers.
pub const DEFAULT_SPACE_LENGTH: f64 = DEFAULT_THICKNESS * 2.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Rounds a value to [`ROUNDING_DIGITS`] decimal digits.
///
/// # Example
///
/// ```rust
/// use config::constants::round_to_digits;
///
/// assert_eq!(round_to_digits(0.1 + 0.2), 0.3);
/// assert_eq!(round_to_digits(100.0), 100.0);
/// ```
#[inline]
pub fn round_to_digits(value: f64) -> f64 {
    (value * ROUNDING_SCALE).round() / ROUNDING_SCALE
}

// =============================================================================
// JOINERY CONFIG
// =============================================================================

/// Immutable snapshot of the finger-joint settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::JoineryConfig;
/// let config = JoineryConfig::default();
/// assert!(config.finger_length > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoineryConfig {
    /// Nominal length of one finger along the joint edge.
    pub finger_length: f64,
    /// Nominal length of one space along the joint edge.
    pub space_length: f64,
}

impl JoineryConfig {
    /// Builds a configuration, rejecting non-positive lengths.
    ///
    /// # Examples
    /// ```
    /// use config::constants::JoineryConfig;
    /// let cfg = JoineryConfig::new(6.0, 4.0).expect("valid config");
    /// assert_eq!(cfg.space_length, 4.0);
    /// ```
    pub fn new(finger_length: f64, space_length: f64) -> Result<Self, ConfigError> {
        if !(finger_length.is_finite() && finger_length > 0.0) {
            return Err(ConfigError::InvalidFingerLength(finger_length));
        }
        if !(space_length.is_finite() && space_length > 0.0) {
            return Err(ConfigError::InvalidSpaceLength(space_length));
        }
        Ok(Self {
            finger_length,
            space_length,
        })
    }
}

impl Default for JoineryConfig {
    fn default() -> Self {
        Self {
            finger_length: DEFAULT_FINGER_LENGTH,
            space_length: DEFAULT_SPACE_LENGTH,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the finger length is zero, negative or not finite.
    InvalidFingerLength(f64),
    /// Raised when the space length is zero, negative or not finite.
    InvalidSpaceLength(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFingerLength(value) => {
                write!(f, "finger_length must be positive: {value}")
            }
            ConfigError::InvalidSpaceLength(value) => {
                write!(f, "space_length must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
