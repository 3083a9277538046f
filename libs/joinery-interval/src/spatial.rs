//! # 2D/3D Classification
//!
//! Axis-aligned boxes are classified by running the 1D classifier on each
//! axis independently. A box is given as one `(low, high)` interval per axis.
//!
//! ## Example
//!
//! ```rust
//! use joinery_interval::{classify_3d, overlaps_3d, summarize_3d, Contact3d};
//!
//! let a = [(0.0, 10.0), (0.0, 10.0), (0.0, 10.0)];
//! let b = [(10.0, 20.0), (2.0, 8.0), (0.0, 10.0)];
//!
//! let axes = classify_3d(&a, &b).unwrap();
//! assert_eq!(summarize_3d(&axes), Contact3d::TouchArea);
//! assert!(!overlaps_3d(&a, &b).unwrap());
//! ```

use serde::{Deserialize, Serialize};

use crate::classify::{classify, Contact, Intersection, Interval};
use crate::error::IntervalError;

/// Bounds of a rectangle, `[x, y]`.
pub type Bounds2 = [Interval; 2];

/// Bounds of a box, `[x, y, z]`.
pub type Bounds3 = [Interval; 3];

// =============================================================================
// PER-AXIS CLASSIFICATION
// =============================================================================

/// Classifies two rectangles axis by axis.
pub fn classify_2d(a: &Bounds2, b: &Bounds2) -> Result<[Intersection; 2], IntervalError> {
    Ok([classify(a[0], b[0])?, classify(a[1], b[1])?])
}

/// Classifies two boxes axis by axis.
pub fn classify_3d(a: &Bounds3, b: &Bounds3) -> Result<[Intersection; 3], IntervalError> {
    Ok([
        classify(a[0], b[0])?,
        classify(a[1], b[1])?,
        classify(a[2], b[2])?,
    ])
}

/// True when the boxes share a volume of positive size.
///
/// Every axis must report a proper span; touching faces, edges or corners do
/// not count.
pub fn overlaps_3d(a: &Bounds3, b: &Bounds3) -> Result<bool, IntervalError> {
    Ok(classify_3d(a, b)?.iter().all(Intersection::is_proper))
}

// =============================================================================
// CONTACT SUMMARIES
// =============================================================================

/// Coarse description of how two rectangles meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Contact2d {
    /// At least one axis is disjoint.
    Separate,
    /// Corners touch.
    TouchPoint,
    /// Edges touch along a segment.
    TouchLine,
    /// The rectangles share an area.
    Intersect,
}

/// Coarse description of how two boxes meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Contact3d {
    /// At least one axis is disjoint.
    Separate,
    /// Corners touch.
    TouchPoint,
    /// Edges touch along a segment.
    TouchLine,
    /// Faces touch over an area.
    TouchArea,
    /// The boxes share a volume.
    Intersect,
}

fn proper_axes(axes: &[Intersection]) -> Option<usize> {
    if axes.iter().any(|axis| axis.contact == Contact::Disjoint) {
        return None;
    }
    Some(axes.iter().filter(|axis| axis.is_proper()).count())
}

/// Summarizes a 2D classification.
pub fn summarize_2d(axes: &[Intersection; 2]) -> Contact2d {
    match proper_axes(axes) {
        None => Contact2d::Separate,
        Some(0) => Contact2d::TouchPoint,
        Some(1) => Contact2d::TouchLine,
        Some(_) => Contact2d::Intersect,
    }
}

/// Summarizes a 3D classification.
pub fn summarize_3d(axes: &[Intersection; 3]) -> Contact3d {
    match proper_axes(axes) {
        None => Contact3d::Separate,
        Some(0) => Contact3d::TouchPoint,
        Some(1) => Contact3d::TouchLine,
        Some(2) => Contact3d::TouchArea,
        Some(_) => Contact3d::Intersect,
    }
}
