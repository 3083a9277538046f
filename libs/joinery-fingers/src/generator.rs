//! # Finger Layout Generator
//!
//! Splits an edge of `total_length` into alternating fingers and spaces.
//!
//! ## Algorithm
//!
//! 1. Account for the start and end boundary segments.
//! 2. If both boundaries have the same kind, insert one full segment of the
//!    opposite kind right after the start so the sequence keeps alternating.
//! 3. Fill the remaining length with whole finger + space pairs (floor for
//!    grow policies, ceil for shrink policies).
//! 4. Spread the leftover onto finger and/or space lengths per [`Rounding`].
//! 5. Emit segments, rounding every field to twelve digits.
//!
//! ## Example
//!
//! ```rust
//! use joinery_fingers::{generate, Boundary, Rounding, SegmentKind};
//!
//! let segments = generate(100.0, 10.0, 10.0, Boundary::Finger, Boundary::Finger, Rounding::GrowBoth).unwrap();
//! assert_eq!(segments.first().unwrap().kind, SegmentKind::Finger);
//! assert_eq!(segments[1].kind, SegmentKind::Space);
//! assert_eq!(segments.last().unwrap().end, 100.0);
//! ```

use config::constants::round_to_digits;
use tracing::debug;

use crate::error::FingerError;
use crate::segment::{Boundary, Rounding, Segment, SegmentKind};

// =============================================================================
// TALLY
// =============================================================================

/// Running totals per segment kind.
#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    fingers_length: f64,
    finger_count: f64,
    spaces_length: f64,
    space_count: f64,
}

impl Tally {
    fn add(&mut self, kind: SegmentKind, length: f64, units: f64) {
        match kind {
            SegmentKind::Finger => {
                self.fingers_length += length;
                self.finger_count += units;
            }
            SegmentKind::Space => {
                self.spaces_length += length;
                self.space_count += units;
            }
        }
    }

    fn total_length(&self) -> f64 {
        self.fingers_length + self.spaces_length
    }
}

/// Nominal lengths of one finger and one space.
#[derive(Debug, Clone, Copy)]
struct Pitch {
    finger: f64,
    space: f64,
}

impl Pitch {
    fn full(&self, kind: SegmentKind) -> f64 {
        match kind {
            SegmentKind::Finger => self.finger,
            SegmentKind::Space => self.space,
        }
    }

    fn boundary(&self, boundary: Boundary) -> f64 {
        self.full(boundary.kind()) * boundary.units()
    }
}

fn check_length(name: &'static str, value: f64) -> Result<(), FingerError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FingerError::InvalidLength { name, value })
    }
}

// =============================================================================
// GENERATE
// =============================================================================

/// Lays out fingers and spaces along an edge.
///
/// ## Parameters
///
/// - `total_length`: edge length to fill exactly
/// - `finger_length`, `space_length`: nominal segment lengths
/// - `start_with`, `end_with`: boundary segments
/// - `rounding`: leftover distribution policy
///
/// ## Errors
///
/// - [`FingerError::InvalidLength`] for non-positive or non-finite lengths
/// - [`FingerError::InsufficientLength`] when the boundary segments alone
///   exceed `total_length`
/// - [`FingerError::Degenerate`] when a shrink policy collapses a segment
pub fn generate(
    total_length: f64,
    finger_length: f64,
    space_length: f64,
    start_with: Boundary,
    end_with: Boundary,
    rounding: Rounding,
) -> Result<Vec<Segment>, FingerError> {
    check_length("total_length", total_length)?;
    check_length("finger_length", finger_length)?;
    check_length("space_length", space_length)?;

    let mut pitch = Pitch {
        finger: finger_length,
        space: space_length,
    };
    let mut tally = Tally::default();

    tally.add(start_with.kind(), pitch.boundary(start_with), start_with.units());
    tally.add(end_with.kind(), pitch.boundary(end_with), end_with.units());

    let filler = (start_with.kind() == end_with.kind()).then(|| start_with.kind().opposite());
    if let Some(kind) = filler {
        tally.add(kind, pitch.full(kind), 1.0);
    }

    let required = tally.total_length();
    let remaining = total_length - required;
    if remaining < 0.0 {
        return Err(FingerError::InsufficientLength {
            required,
            available: total_length,
        });
    }

    let raw_pairs = remaining / (pitch.finger + pitch.space);
    let pairs = if rounding.grows() {
        raw_pairs.floor()
    } else {
        raw_pairs.ceil()
    };

    tally.add(SegmentKind::Finger, pairs * pitch.finger, pairs);
    tally.add(SegmentKind::Space, pairs * pitch.space, pairs);

    let consumed = tally.total_length();
    let delta = (total_length - consumed).abs();
    let finger_share = delta / consumed * tally.fingers_length / tally.finger_count;
    let space_share = delta / consumed * tally.spaces_length / tally.space_count;

    match rounding {
        Rounding::GrowFinger => pitch.finger += delta / tally.finger_count,
        Rounding::GrowSpace => pitch.space += delta / tally.space_count,
        Rounding::GrowBoth => {
            pitch.finger += finger_share;
            pitch.space += space_share;
        }
        Rounding::ShrinkFinger => pitch.finger -= delta / tally.finger_count,
        Rounding::ShrinkSpace => pitch.space -= delta / tally.space_count,
        Rounding::ShrinkBoth => {
            pitch.finger -= finger_share;
            pitch.space -= space_share;
        }
    }

    if pitch.finger <= 0.0 {
        return Err(FingerError::Degenerate {
            kind: SegmentKind::Finger.as_str(),
            length: pitch.finger,
        });
    }
    if pitch.space <= 0.0 {
        return Err(FingerError::Degenerate {
            kind: SegmentKind::Space.as_str(),
            length: pitch.space,
        });
    }

    // `pairs` is a finite non-negative whole number.
    let pair_count = pairs as usize;
    debug!(
        total_length,
        pairs = pair_count,
        finger = pitch.finger,
        space = pitch.space,
        ?rounding,
        "finger layout"
    );

    let mut parts: Vec<(SegmentKind, f64)> = Vec::with_capacity(pair_count * 2 + 3);
    parts.push((start_with.kind(), pitch.boundary(start_with)));
    if let Some(kind) = filler {
        parts.push((kind, pitch.full(kind)));
    }
    for _ in 0..pair_count {
        let first = match parts.last() {
            Some((SegmentKind::Finger, _)) => SegmentKind::Space,
            _ => SegmentKind::Finger,
        };
        parts.push((first, pitch.full(first)));
        parts.push((first.opposite(), pitch.full(first.opposite())));
    }
    parts.push((end_with.kind(), pitch.boundary(end_with)));

    let mut position = 0.0;
    let segments = parts
        .into_iter()
        .map(|(kind, length)| {
            let start = position;
            position += length;
            Segment {
                kind,
                length: round_to_digits(length),
                start: round_to_digits(start),
                end: round_to_digits(position),
                portion: round_to_digits(length / total_length),
                start_time: round_to_digits(start / total_length),
                end_time: round_to_digits(position / total_length),
            }
        })
        .collect();

    Ok(segments)
}
