//! Tests for axes, slots, quantities and faces.

use super::*;

/// Every quantity maps back to the axis and slot it was built from.
#[test]
fn test_quantity_axis_slot_roundtrip() {
    for axis in Axis::ALL {
        for slot in Slot::ALL {
            let quantity = Quantity::new(axis, slot);
            assert_eq!(quantity.axis(), axis);
            assert_eq!(quantity.slot(), slot);
        }
    }
}

#[test]
fn test_quantity_table() {
    assert_eq!(Quantity::new(Axis::X, Slot::Low), Quantity::Left);
    assert_eq!(Quantity::new(Axis::X, Slot::Extent), Quantity::Width);
    assert_eq!(Quantity::new(Axis::Y, Slot::Low), Quantity::Front);
    assert_eq!(Quantity::new(Axis::Y, Slot::Extent), Quantity::Depth);
    assert_eq!(Quantity::new(Axis::Z, Slot::High), Quantity::Top);
    assert_eq!(Quantity::new(Axis::Z, Slot::Center), Quantity::CenterZ);
}

#[test]
fn test_quantity_names() {
    assert_eq!(Quantity::CenterY.to_string(), "center_y");
    assert_eq!(Quantity::Height.as_str(), "height");
}

/// Extents are applied first, centers last.
#[test]
fn test_application_rank() {
    assert!(Slot::Extent.application_rank() < Slot::Low.application_rank());
    assert_eq!(Slot::Low.application_rank(), Slot::High.application_rank());
    assert!(Slot::High.application_rank() < Slot::Center.application_rank());
}

#[test]
fn test_face_axes() {
    assert_eq!(Face::Side.thin_axis(), Axis::X);
    assert_eq!(Face::Front.thin_axis(), Axis::Y);
    assert_eq!(Face::Top.thin_axis(), Axis::Z);

    assert_eq!(Face::Side.plane_axes(), [Axis::Y, Axis::Z]);
    assert_eq!(Face::Top.plane_axes(), [Axis::X, Axis::Y]);
    assert_eq!(Face::Front.plane_axes(), [Axis::X, Axis::Z]);
}

/// The thin axis never spans the face.
#[test]
fn test_plane_axes_exclude_thin_axis() {
    for face in [Face::Side, Face::Front, Face::Top] {
        assert!(!face.plane_axes().contains(&face.thin_axis()));
    }
}

#[test]
fn test_face_from_str() {
    assert_eq!("top".parse::<Face>(), Ok(Face::Top));
    assert_eq!(
        "back".parse::<Face>(),
        Err(ParseFaceError("back".to_string()))
    );
}

#[test]
fn test_face_precedence() {
    assert!(Face::Front.precedence() < Face::Side.precedence());
    assert!(Face::Side.precedence() < Face::Top.precedence());
}
