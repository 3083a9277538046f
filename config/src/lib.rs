//! # Config Crate
//!
//! Centralized configuration constants for the panel joinery pipeline.
//! Rounding precision, default material thickness and finger-joint
//! dimensions live here so that the interval classifier, the layout model
//! and the finger generator agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{round_to_digits, DEFAULT_FINGER_LENGTH};
//!
//! // Suppress floating point noise the same way every crate does
//! assert_eq!(round_to_digits(0.1 + 0.2), 0.3);
//!
//! // Fingers default to twice the default material thickness
//! assert!(DEFAULT_FINGER_LENGTH > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Deterministic**: Rounding is applied identically across crates

pub mod constants;

#[cfg(test)]
mod tests;
