//! Unit tests for rotation math, cursors and hit testing.

use dragresize::geometry::{HandleLayout, angle_between, cursor_for, hit_test, rotation_from_drag};
use dragresize::{GeometryState, HandleId, PointerTarget, ResizeCursor};
use kurbo::Point;

#[test]
fn test_cursor_follows_rotation() {
    assert_eq!(cursor_for(HandleId::TopLeft, 0.0), Some(ResizeCursor::NwResize));
    assert_eq!(cursor_for(HandleId::TopLeft, 50.0), Some(ResizeCursor::NResize));
    assert_eq!(cursor_for(HandleId::TopLeft, 89.0), Some(ResizeCursor::NeResize));
    assert_ne!(cursor_for(HandleId::TopLeft, 90.0), cursor_for(HandleId::TopLeft, 0.0));
    assert_eq!(cursor_for(HandleId::MiddleRight, 180.0), Some(ResizeCursor::WResize));
    assert_eq!(cursor_for(HandleId::Rotate, 0.0), None);
}

#[test]
fn test_cursor_wraps_after_full_turn() {
    for handle in HandleId::ALL {
        assert_eq!(cursor_for(handle, 10.0), cursor_for(handle, 370.0));
        assert_eq!(cursor_for(handle, 200.0), cursor_for(handle, -160.0));
    }
}

#[test]
fn test_angles_are_screen_clockwise() {
    let c = Point::new(0.0, 0.0);
    assert_eq!(angle_between(c, Point::new(10.0, 0.0)), 0.0);
    assert!((angle_between(c, Point::new(0.0, 10.0)) - 90.0).abs() < 1e-9);
    assert!((angle_between(c, Point::new(0.0, -10.0)) - 270.0).abs() < 1e-9);
}

#[test]
fn test_rotation_accumulates_from_start() {
    let c = Point::new(50.0, 50.0);
    let r = rotation_from_drag(300.0, c, Point::new(100.0, 50.0), Point::new(50.0, 0.0));
    assert!((r - 210.0).abs() < 1e-9);
}

#[test]
fn test_hit_test_sees_rotated_handles() {
    let mut geometry = GeometryState::new(0.0, 0.0, 100.0, 100.0, 90.0);
    geometry.refresh_corners();
    let layout = HandleLayout { size: 12.0, offset: -6.0 };
    let handles = [HandleId::TopLeft, HandleId::TopRight];

    // Rotated a quarter turn clockwise, the top-left corner sits at the top right
    assert_eq!(
        hit_test(&geometry, Point::new(100.0, 0.0), 1.0, layout, &handles),
        PointerTarget::Handle(HandleId::TopLeft)
    );
    assert_eq!(hit_test(&geometry, Point::new(50.0, 50.0), 1.0, layout, &handles), PointerTarget::Body);
    assert_eq!(hit_test(&geometry, Point::new(200.0, 50.0), 1.0, layout, &handles), PointerTarget::Outside);
}
