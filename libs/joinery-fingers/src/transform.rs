//! # Layout Transforms
//!
//! Views of an existing layout from the mating side of the joint.

use config::constants::round_to_digits;

use crate::segment::Segment;

/// Reverses a layout, as seen from the other end of the edge.
///
/// Positions are mirrored about the end of the last segment and time fields
/// about `1.0`.
///
/// ```rust
/// use joinery_fingers::{flip, generate, Boundary, Rounding, SegmentKind};
///
/// let layout = generate(50.0, 10.0, 10.0, Boundary::Finger, Boundary::HalfSpace, Rounding::GrowBoth).unwrap();
/// let flipped = flip(&layout);
/// assert_eq!(flipped[0].kind, SegmentKind::Space);
/// assert_eq!(flipped[0].start, 0.0);
/// ```
pub fn flip(segments: &[Segment]) -> Vec<Segment> {
    let Some(total) = segments.last().map(|segment| segment.end) else {
        return Vec::new();
    };
    segments
        .iter()
        .rev()
        .map(|segment| Segment {
            start: round_to_digits(total - segment.end),
            end: round_to_digits(total - segment.start),
            start_time: round_to_digits(1.0 - segment.end_time),
            end_time: round_to_digits(1.0 - segment.start_time),
            ..*segment
        })
        .collect()
}

/// Toggles every segment between finger and space.
///
/// Turns the layout of one panel into the layout its mating panel needs.
pub fn swap(segments: &[Segment]) -> Vec<Segment> {
    segments
        .iter()
        .map(|segment| Segment {
            kind: segment.kind.opposite(),
            ..*segment
        })
        .collect()
}

#[cfg(test)]
mod tests;
