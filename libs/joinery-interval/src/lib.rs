//! # Joinery Interval
//!
//! Interval-intersection classification for panel bounding volumes.
//!
//! ## Architecture
//!
//! ```text
//! joinery-layout (resolved bounds) → joinery-interval (Intersection) → collisions / joint roles
//! ```
//!
//! ## Example
//!
//! ```rust
//! use joinery_interval::{classify, Positioning};
//!
//! let hit = classify((0.0, 10.0), (0.0, 4.3)).unwrap();
//! assert_eq!(hit.positioning, Positioning::AStartsWithB);
//! ```

pub mod classify;
pub mod error;
pub mod spatial;

// Re-export public API
pub use classify::{classify, Contact, Intersection, IntersectionRange, Interval, Positioning};
pub use error::IntervalError;
pub use spatial::{
    classify_2d, classify_3d, overlaps_3d, summarize_2d, summarize_3d, Bounds2, Bounds3,
    Contact2d, Contact3d,
};
