//! # Joinery Fingers
//!
//! Finger-joint (box joint) layout generation for laser-cut panel edges.
//!
//! ## Architecture
//!
//! ```text
//! joinery-layout (JointEdge length) → joinery-fingers (Vec<Segment>) → renderer
//! ```
//!
//! Renderers treat [`SegmentKind::Finger`] as material present and
//! [`SegmentKind::Space`] as cut away; [`swap`] gives the complementary edge.
//!
//! ## Example
//!
//! ```rust
//! use joinery_fingers::{generate, swap, Boundary, Rounding, SegmentKind};
//!
//! let edge = generate(60.0, 8.6, 8.6, Boundary::Space, Boundary::Space, Rounding::GrowBoth).unwrap();
//! let mate = swap(&edge);
//! assert_eq!(mate[0].kind, SegmentKind::Finger);
//! ```

pub mod error;
pub mod generator;
pub mod segment;
pub mod transform;

// Re-export public API
pub use error::FingerError;
pub use generator::generate;
pub use segment::{Boundary, Rounding, Segment, SegmentKind};
pub use transform::{flip, swap};
