//! Rotate Flow Integration Tests

use crate::helpers::{TestElementBuilder, drag_through, names, press};
use dragresize::{ContainerRect, GestureEvent, HandleId, PointerEvent, PointerTarget};

const ROTATE: PointerTarget = PointerTarget::Handle(HandleId::Rotate);

fn angle_of(event: &GestureEvent) -> f64 {
    match event {
        GestureEvent::Rotating { angle } | GestureEvent::RotateStop { angle } => *angle,
        other => panic!("not a rotation event: {other:?}"),
    }
}

#[test]
fn test_quarter_turn_around_center() {
    let mut element = TestElementBuilder::new().config(|c| c.rotatable = true).build();
    // Center is (50, 50); sweep from due right to due down
    let events = drag_through(&mut element, ROTATE, (100.0, 50.0), &[(50.0, 100.0)]);

    assert_eq!(names(&events), vec!["activated", "rotating", "rotatestop"]);
    assert!((angle_of(&events[1]) - 90.0).abs() < 1e-9);
    assert!((element.geometry().rotate - 90.0).abs() < 1e-9);

    let g = element.geometry();
    assert_eq!((g.left, g.top, g.width, g.height), (0.0, 0.0, 100.0, 100.0));
}

#[test]
fn test_rotation_wraps_into_range() {
    let mut element = TestElementBuilder::new()
        .config(|c| {
            c.rotatable = true;
            c.rotate = 350.0;
        })
        .build();
    drag_through(&mut element, ROTATE, (100.0, 50.0), &[(50.0, 100.0)]);

    let rotate = element.geometry().rotate;
    assert!((rotate - 80.0).abs() < 1e-9, "rotate {rotate}");
}

#[test]
fn test_pivot_accounts_for_container_origin_and_zoom() {
    let mut element = TestElementBuilder::new()
        .at(10.0, 10.0)
        .in_parent_rect(ContainerRect {
            x: 100.0,
            y: 200.0,
            width: 500.0,
            height: 500.0,
        })
        .config(|c| {
            c.rotatable = true;
            c.scale_ratio = 2.0;
        })
        .build();

    // Center (60, 60) in element pixels is (220, 320) on the page
    press(&mut element, ROTATE, 220.0, 220.0);
    let events = element.pointer_move(PointerEvent::mouse(320.0, 320.0));
    assert!((angle_of(&events[0]) - 90.0).abs() < 1e-9);
}

#[test]
fn test_corners_follow_rotation() {
    let mut element = TestElementBuilder::new().config(|c| c.rotatable = true).build();
    drag_through(&mut element, ROTATE, (100.0, 50.0), &[(50.0, 100.0)]);

    let tl = element.geometry().corners.tl;
    assert!((tl.x - 100.0).abs() < 1e-9 && tl.y.abs() < 1e-9, "{tl:?}");
}

#[test]
fn test_rotate_handle_needs_rotatable() {
    let mut element = TestElementBuilder::new().build();
    let events = press(&mut element, ROTATE, 56.0, -30.0);

    assert_eq!(events, vec![GestureEvent::Activated]);
    assert!(!element.is_rotating());
}

#[test]
fn test_rotating_does_not_resize_or_move() {
    let mut element = TestElementBuilder::new()
        .at(5.0, 5.0)
        .config(|c| c.rotatable = true)
        .build();
    press(&mut element, ROTATE, 55.0, 0.0);
    assert!(element.is_rotating() && !element.is_dragging() && !element.is_resizing());

    element.pointer_move(PointerEvent::mouse(300.0, -40.0));
    let g = element.geometry();
    assert_eq!((g.left, g.top, g.width, g.height), (5.0, 5.0, 100.0, 100.0));
}
