use approx::assert_relative_eq;
use joinery_fingers::{swap, SegmentKind};
use joinery_layout::{Assembly, Axis, Face, FingerParams, FingerRole, LayoutError, PanelId, PanelSpec, Quantity};

const T: f64 = 4.3;

/// Back, two sides, a kick plate and a bottom shelf.
fn cabinet() -> Result<(Assembly, [PanelId; 5]), LayoutError> {
    let mut assembly = Assembly::new();

    let c1 = assembly.add(
        PanelSpec::new("c1", T, Face::Front)
            .center_x(0.0)
            .center_y(0.0)
            .center_z(0.0)
            .width(800.0)
            .height(600.0),
    )?;
    let c2 = assembly.add(
        PanelSpec::new("c2", T, Face::Side)
            .left(c1.left())
            .back(c1.back())
            .top(c1.top())
            .bottom(c1.bottom()),
    )?;
    let c3 = assembly.add(
        PanelSpec::new("c3", T, Face::Side)
            .right(c1.right())
            .back(c1.back())
            .top(c1.top())
            .bottom(c1.bottom()),
    )?;
    let c4 = assembly.add(
        PanelSpec::new("c4", T, Face::Front)
            .left(c1.left())
            .right(c1.right())
            .height(60.0)
            .back(c1.front())
            .bottom(c1.bottom()),
    )?;
    let c5 = assembly.add(
        PanelSpec::new("c5", T, Face::Top)
            .left(c2.left())
            .right(c3.right())
            .bottom(c4.bottom())
            .front(c4.front())
            .back(c1.back()),
    )?;

    assembly.panel_mut(c4)?.move_up(10.0);
    assembly.panel_mut(c4)?.move_forward(130.0);

    assembly.set(c2, Quantity::Front, c4.front())?;
    assembly.set(c3, Quantity::Front, c4.front())?;

    for side in [c2, c3] {
        let panel = assembly.panel_mut(side)?;
        panel.grow_back(5.0)?;
        panel.grow_front(5.0)?;
    }

    assembly.panel_mut(c5)?.move_up(10.0);

    Ok((assembly, [c1, c2, c3, c4, c5]))
}

#[test]
fn every_panel_resolves() {
    let (assembly, ids) = cabinet().unwrap();
    for id in ids {
        assert!(assembly.panel(id).unwrap().is_well_defined());
        assert!(assembly.is_resolved_well_defined(id).unwrap());
    }
}

#[test]
fn sides_follow_the_back_panel() {
    let (assembly, [c1, c2, c3, ..]) = cabinet().unwrap();

    assert_eq!(assembly.bounds_on_axis(c1, Axis::X).unwrap(), Some((-400.0, 400.0)));
    assert_relative_eq!(assembly.value(c2, Quantity::Right).unwrap().unwrap(), -395.7, epsilon = 1e-9);
    assert_relative_eq!(assembly.value(c3, Quantity::Left).unwrap().unwrap(), 395.7, epsilon = 1e-9);

    let [front, back] = [Quantity::Front, Quantity::Back].map(|q| assembly.value(c2, q).unwrap().unwrap());
    assert_relative_eq!(front, -141.45, epsilon = 1e-9);
    assert_relative_eq!(back, 7.15, epsilon = 1e-9);
}

#[test]
fn moves_carry_through_references() {
    let (assembly, [_, _, _, c4, c5]) = cabinet().unwrap();

    assert_eq!(assembly.value(c4, Quantity::Bottom).unwrap(), Some(-290.0));
    assert_eq!(assembly.value(c5, Quantity::Bottom).unwrap(), Some(-280.0));
    assert_relative_eq!(assembly.value(c4, Quantity::Front).unwrap().unwrap(), -136.45, epsilon = 1e-9);
    assert_eq!(
        assembly.value(c5, Quantity::Front).unwrap(),
        assembly.value(c4, Quantity::Front).unwrap()
    );
}

#[test]
fn cabinet_validates_with_eight_joints() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let (assembly, [c1, c2, c3, c4, c5]) = cabinet().unwrap();

    let joints = assembly.validate().unwrap();
    let summary: Vec<_> = joints
        .iter()
        .map(|joint| (joint.first.panel, joint.first.role, joint.second.panel, joint.second.role))
        .collect();

    use FingerRole::{Inner, Outer};
    assert_eq!(
        summary,
        vec![
            (c1, Outer, c2, Inner),
            (c1, Outer, c3, Inner),
            (c1, Inner, c5, Outer),
            (c4, Outer, c2, Inner),
            (c2, Inner, c5, Outer),
            (c4, Outer, c3, Inner),
            (c3, Inner, c5, Outer),
            (c4, Inner, c5, Outer),
        ]
    );
}

#[test]
fn back_to_side_fingers_interlock() {
    let (assembly, [c1, c2, ..]) = cabinet().unwrap();
    let joint = assembly.joint(c2, c1).unwrap().unwrap();
    let params = FingerParams::default();

    assert_eq!(joint.first.across, (-300.0, 300.0));
    assert_eq!(joint.first.length(), 600.0);
    assert_eq!(joint.second.length(), 600.0);

    let outer = joint.first.layout(&params).unwrap().unwrap();
    let inner = joint.second.layout(&params).unwrap().unwrap();
    assert_eq!(outer.len(), 69);
    assert_eq!(outer.first().unwrap().kind, SegmentKind::Space);
    assert_relative_eq!(outer.last().unwrap().end, 600.0, epsilon = 1e-9);

    let mate: Vec<_> = swap(&outer).iter().map(|segment| segment.kind).collect();
    let kinds: Vec<_> = inner.iter().map(|segment| segment.kind).collect();
    assert_eq!(mate, kinds);
}

#[test]
fn previews_every_panel() {
    let (assembly, [c1, ..]) = cabinet().unwrap();
    assert_eq!(
        assembly.to_scad(c1).unwrap(),
        "translate([0, 0, 0]) cube([800, 4.3, 600], center=true);"
    );
}

#[test]
fn over_constraining_is_rejected() {
    let (mut assembly, [c1, ..]) = cabinet().unwrap();
    let err = assembly.set(c1, Quantity::Left, 0.0).unwrap_err();
    assert_eq!(
        err,
        LayoutError::OverDefined {
            label: "c1".to_string(),
            axis: Axis::X,
        }
    );
    assert_eq!(assembly.bounds_on_axis(c1, Axis::X).unwrap(), Some((-400.0, 400.0)));
}

#[test]
fn shifting_the_kick_plate_into_the_back_collides() {
    let (mut assembly, [_, _, _, c4, _]) = cabinet().unwrap();
    assembly.panel_mut(c4).unwrap().move_backward(132.0);
    assert_eq!(
        assembly.validate().unwrap_err(),
        LayoutError::Collision {
            first: "c1".to_string(),
            second: "c4".to_string(),
        }
    );
}
