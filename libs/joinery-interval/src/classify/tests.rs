//! # Tests for 1D Classification

use super::*;

fn tag(a: Interval, b: Interval) -> Positioning {
    classify(a, b).unwrap().positioning
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Reversed bounds are rejected.
#[test]
fn test_rejects_reversed_interval() {
    let err = classify((5.0, 1.0), (0.0, 10.0)).unwrap_err();
    assert_eq!(err, IntervalError::InvalidInterval { low: 5.0, high: 1.0 });
}

/// Zero-length intervals are rejected on either side.
#[test]
fn test_rejects_degenerate_interval() {
    assert!(classify((0.0, 10.0), (3.0, 3.0)).is_err());
    assert!(classify((3.0, 3.0), (0.0, 10.0)).is_err());
}

#[test]
fn test_rejects_non_finite_interval() {
    assert!(classify((0.0, f64::NAN), (0.0, 1.0)).is_err());
    assert!(classify((0.0, 1.0), (f64::NEG_INFINITY, 1.0)).is_err());
}

// =============================================================================
// DISJOINT AND TOUCHING
// =============================================================================

#[test]
fn test_disjoint() {
    let hit = classify((0.0, 5.0), (10.0, 15.0)).unwrap();
    assert_eq!(hit.range, IntersectionRange::Empty);
    assert_eq!(hit.contact, Contact::Disjoint);
    assert_eq!(hit.status(), -1);
    assert_eq!(hit.positioning, Positioning::ABeforeB);
    assert_eq!(tag((10.0, 15.0), (0.0, 5.0)), Positioning::BBeforeA);
}

/// Touching intervals classify by which one starts first.
#[test]
fn test_touching() {
    let hit = classify((0.0, 5.0), (5.0, 10.0)).unwrap();
    assert_eq!(hit.range, IntersectionRange::Point(5.0));
    assert_eq!(hit.status(), 0);
    assert_eq!(hit.positioning, Positioning::ABeforeB);

    let hit = classify((5.0, 10.0), (0.0, 5.0)).unwrap();
    assert_eq!(hit.range, IntersectionRange::Point(5.0));
    assert_eq!(hit.positioning, Positioning::BBeforeA);
}

// =============================================================================
// OVERLAPPING
// =============================================================================

#[test]
fn test_contains() {
    let hit = classify((0.0, 10.0), (2.0, 8.0)).unwrap();
    assert_eq!(hit.range, IntersectionRange::Span(2.0, 8.0));
    assert_eq!(hit.status(), 1);
    assert!(hit.is_proper());
    assert_eq!(hit.positioning, Positioning::AContainsB);
    assert_eq!(tag((2.0, 8.0), (0.0, 10.0)), Positioning::BContainsA);
}

#[test]
fn test_equals() {
    let hit = classify((0.0, 10.0), (0.0, 10.0)).unwrap();
    assert_eq!(hit.range, IntersectionRange::Span(0.0, 10.0));
    assert_eq!(hit.positioning, Positioning::AEqualsB);
}

/// Partial overlaps are tagged by the interval that starts first.
#[test]
fn test_partial_overlap() {
    let hit = classify((0.0, 6.0), (4.0, 10.0)).unwrap();
    assert_eq!(hit.range, IntersectionRange::Span(4.0, 6.0));
    assert_eq!(hit.contact, Contact::Overlapping);
    assert_eq!(hit.positioning, Positioning::ABeforeB);
    assert_eq!(tag((4.0, 10.0), (0.0, 6.0)), Positioning::BBeforeA);
}

#[test]
fn test_starts_with() {
    assert_eq!(tag((0.0, 10.0), (0.0, 5.0)), Positioning::AStartsWithB);
    assert_eq!(tag((0.0, 5.0), (0.0, 10.0)), Positioning::BStartsWithA);
}

#[test]
fn test_ends_with() {
    assert_eq!(tag((0.0, 10.0), (5.0, 10.0)), Positioning::AEndsWithB);
    assert_eq!(tag((5.0, 10.0), (0.0, 10.0)), Positioning::BEndsWithA);
}

/// Intersection coordinates are rounded to twelve digits.
#[test]
fn test_range_is_rounded() {
    let hit = classify((0.1 + 0.2, 1.0), (0.0, 0.7)).unwrap();
    assert_eq!(hit.range, IntersectionRange::Span(0.3, 0.7));
}

// =============================================================================
// TAG HELPERS
// =============================================================================

#[test]
fn test_tag_predicates() {
    assert!(Positioning::AContainsB.is_contains());
    assert!(!Positioning::AEqualsB.is_contains());
    assert!(Positioning::BEndsWithA.is_edge_flush());
    assert!(!Positioning::Overlap.is_edge_flush());
    assert!(Positioning::BBeforeA.is_before());
    assert!(!Positioning::AStartsWithB.is_before());
}

#[test]
fn test_tag_display() {
    assert_eq!(Positioning::AStartsWithB.to_string(), "A_STARTS_WITH_B");
    assert_eq!(Positioning::Overlap.to_string(), "OVERLAP");
}

#[test]
fn test_range_len() {
    assert_eq!(IntersectionRange::Empty.len(), 0);
    assert!(IntersectionRange::Empty.is_empty());
    assert_eq!(IntersectionRange::Point(1.0).len(), 1);
    assert_eq!(IntersectionRange::Span(1.0, 2.0).as_span(), Some((1.0, 2.0)));
    assert_eq!(IntersectionRange::Point(1.0).as_span(), None);
}
