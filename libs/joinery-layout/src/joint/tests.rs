//! Tests for joint roles, placements and finger layouts.

use joinery_fingers::SegmentKind;
use joinery_interval::classify;

use super::*;

fn hit(a: Interval, b: Interval) -> Intersection {
    classify(a, b).unwrap()
}

// =============================================================================
// ROLE INFERENCE
// =============================================================================

/// Flush along the first compared axis: the first panel is outer.
#[test]
fn test_first_axis_flush_is_outer() {
    let first = hit((0.0, 10.0), (0.0, 4.0));
    let contained = hit((0.0, 10.0), (2.0, 8.0));
    assert_eq!(
        infer_roles(&first, &contained, &contained),
        Some((FingerRole::Outer, FingerRole::Inner))
    );
}

#[test]
fn test_second_axis_before_is_inner() {
    let first = hit((0.0, 10.0), (2.0, 8.0));
    let second = hit((0.0, 5.0), (3.0, 10.0));
    assert_eq!(second.positioning, Positioning::ABeforeB);
    assert_eq!(
        infer_roles(&first, &second, &first),
        Some((FingerRole::Inner, FingerRole::Outer))
    );
}

/// Panels crossing mid-way with one nested in the other cannot be joined.
#[test]
fn test_contained_third_axis_is_invalid() {
    let contained = hit((0.0, 10.0), (2.0, 8.0));
    let inside = hit((2.0, 8.0), (0.0, 10.0));
    assert_eq!(infer_roles(&contained, &contained, &inside), None);
    assert_eq!(infer_roles(&contained, &contained, &contained), None);
}

#[test]
fn test_half_lap_orientation() {
    let crossing = hit((0.0, 10.0), (2.0, 8.0));

    let lower = hit((0.0, 6.0), (4.0, 10.0));
    assert_eq!(
        infer_roles(&crossing, &crossing, &lower),
        Some((FingerRole::HalfBottom, FingerRole::HalfUp))
    );

    let shares_start = hit((0.0, 6.0), (0.0, 10.0));
    assert_eq!(shares_start.positioning, Positioning::BStartsWithA);
    assert_eq!(
        infer_roles(&crossing, &crossing, &shares_start),
        Some((FingerRole::HalfBottom, FingerRole::HalfUp))
    );

    let upper = hit((4.0, 10.0), (0.0, 6.0));
    assert_eq!(
        infer_roles(&crossing, &crossing, &upper),
        Some((FingerRole::HalfUp, FingerRole::HalfBottom))
    );

    let equal = hit((0.0, 10.0), (0.0, 10.0));
    assert_eq!(
        infer_roles(&crossing, &crossing, &equal),
        Some((FingerRole::HalfUp, FingerRole::HalfBottom))
    );
}

// =============================================================================
// PAIRINGS
// =============================================================================

#[test]
fn test_pairing_table() {
    let front_side = Pairing::for_faces(Face::Front, Face::Side).unwrap();
    assert_eq!(front_side.compared, [Axis::X, Axis::Y, Axis::Z]);
    assert_eq!(front_side.second.along, Axis::Y);
    assert_eq!(front_side.second.direction, Direction::Vertical);

    let front_top = Pairing::for_faces(Face::Front, Face::Top).unwrap();
    assert_eq!(front_top.compared, [Axis::Z, Axis::Y, Axis::X]);

    let side_top = Pairing::for_faces(Face::Side, Face::Top).unwrap();
    assert_eq!(side_top.compared, [Axis::Z, Axis::X, Axis::Y]);
    assert_eq!(side_top.first.direction, Direction::Horizontal);
    assert_eq!(side_top.second.direction, Direction::Vertical);
}

/// Edges lie on the plane of their own panel.
#[test]
fn test_placements_match_face_planes() {
    for (first, second) in [
        (Face::Front, Face::Side),
        (Face::Front, Face::Top),
        (Face::Side, Face::Top),
    ] {
        let pairing = Pairing::for_faces(first, second).unwrap();
        assert_eq!([pairing.first.along, pairing.first.across], first.plane_axes());
        assert_eq!([pairing.second.along, pairing.second.across], second.plane_axes());
    }
}

#[test]
fn test_unordered_or_parallel_faces_have_no_pairing() {
    assert!(Pairing::for_faces(Face::Side, Face::Front).is_none());
    assert!(Pairing::for_faces(Face::Top, Face::Top).is_none());
}

// =============================================================================
// EDGES
// =============================================================================

fn eights() -> FingerParams {
    FingerParams {
        finger_length: 8.0,
        space_length: 8.0,
        rounding: Rounding::GrowBoth,
    }
}

fn edge(direction: Direction, role: FingerRole) -> JointEdge {
    JointEdge {
        panel: PanelId(0),
        along: (10.0, 30.0),
        across: (0.0, 56.0),
        direction,
        role,
    }
}

#[test]
fn test_edge_length_follows_direction() {
    assert_eq!(edge(Direction::Horizontal, FingerRole::Outer).length(), 20.0);
    assert_eq!(edge(Direction::Vertical, FingerRole::Outer).length(), 56.0);
}

/// Outer edges start and end with spaces.
#[test]
fn test_outer_layout() {
    let segments = edge(Direction::Vertical, FingerRole::Outer)
        .layout(&eights())
        .unwrap()
        .unwrap();
    assert_eq!(segments.len(), 7);
    assert_eq!(segments[0].kind, SegmentKind::Space);
    assert_eq!(segments[1].kind, SegmentKind::Finger);
    assert_eq!(segments[6].kind, SegmentKind::Space);
    assert_eq!(segments[6].end, 56.0);
    assert!(segments.iter().all(|segment| segment.length == 8.0));
}

#[test]
fn test_inner_layout() {
    let segments = edge(Direction::Vertical, FingerRole::Inner)
        .layout(&eights())
        .unwrap()
        .unwrap();
    assert_eq!(segments.len(), 7);
    assert_eq!(segments.first().unwrap().kind, SegmentKind::Finger);
    assert_eq!(segments[1].kind, SegmentKind::Space);
    assert_eq!(segments.last().unwrap().kind, SegmentKind::Finger);
}

#[test]
fn test_half_lap_has_no_layout() {
    let layout = edge(Direction::Horizontal, FingerRole::HalfUp).layout(&FingerParams::default());
    assert_eq!(layout, Ok(None));
}

/// A joint line shorter than its boundary segments is reported.
#[test]
fn test_short_edge_layout_fails() {
    let params = FingerParams {
        finger_length: 50.0,
        ..FingerParams::default()
    };
    let result = edge(Direction::Horizontal, FingerRole::Inner).layout(&params);
    assert!(matches!(result, Err(LayoutError::Finger(_))));
}

#[test]
fn test_finger_params_from_config() {
    let params = FingerParams::default();
    let config = JoineryConfig::default();
    assert_eq!(params.finger_length, config.finger_length);
    assert_eq!(params.space_length, config.space_length);
    assert_eq!(params.rounding, Rounding::GrowBoth);

    let shrinking = FingerParams::new(config, Rounding::ShrinkSpace);
    assert_eq!(shrinking.rounding, Rounding::ShrinkSpace);
}

#[test]
fn test_joint_edge_lookup() {
    let joint = Joint {
        first: edge(Direction::Vertical, FingerRole::Outer),
        second: JointEdge {
            panel: PanelId(4),
            ..edge(Direction::Vertical, FingerRole::Inner)
        },
    };
    assert_eq!(joint.panels(), (PanelId(0), PanelId(4)));
    assert_eq!(joint.edge(PanelId(4)).map(|edge| edge.role), Some(FingerRole::Inner));
    assert!(joint.edge(PanelId(2)).is_none());
}
