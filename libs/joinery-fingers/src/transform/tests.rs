//! # Tests for Layout Transforms

use approx::assert_relative_eq;

use super::*;
use crate::generator::generate;
use crate::segment::{Boundary, Rounding, SegmentKind};

fn layout() -> Vec<Segment> {
    generate(
        77.0,
        8.6,
        6.0,
        Boundary::HalfFinger,
        Boundary::Space,
        Rounding::GrowBoth,
    )
    .unwrap()
}

#[test]
fn test_swap_toggles_kinds() {
    let original = layout();
    let swapped = swap(&original);
    for (before, after) in original.iter().zip(&swapped) {
        assert_eq!(after.kind, before.kind.opposite());
        assert_eq!(after.start, before.start);
        assert_eq!(after.length, before.length);
    }
}

#[test]
fn test_swap_twice_is_identity() {
    let original = layout();
    assert_eq!(swap(&swap(&original)), original);
}

/// Flipping mirrors positions about the edge end.
#[test]
fn test_flip_mirrors_positions() {
    let original = layout();
    let flipped = flip(&original);
    let total = original.last().unwrap().end;

    assert_eq!(flipped.len(), original.len());
    assert_eq!(flipped[0].kind, SegmentKind::Space);
    assert_eq!(flipped.last().unwrap().kind, SegmentKind::Finger);
    assert_eq!(flipped[0].start, 0.0);
    assert_relative_eq!(flipped.last().unwrap().end, total, epsilon = 1e-9);
    assert_relative_eq!(flipped[0].end, original.last().unwrap().length, epsilon = 1e-9);
    assert_relative_eq!(flipped[0].end_time, original.last().unwrap().portion, epsilon = 1e-9);
}

#[test]
fn test_flip_twice_is_identity() {
    let original = layout();
    let restored = flip(&flip(&original));
    for (a, b) in original.iter().zip(&restored) {
        assert_eq!(a.kind, b.kind);
        assert_relative_eq!(a.start, b.start, epsilon = 1e-9);
        assert_relative_eq!(a.end, b.end, epsilon = 1e-9);
        assert_relative_eq!(a.start_time, b.start_time, epsilon = 1e-9);
        assert_relative_eq!(a.end_time, b.end_time, epsilon = 1e-9);
    }
}

#[test]
fn test_flip_empty() {
    assert!(flip(&[]).is_empty());
}
