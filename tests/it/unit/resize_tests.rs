//! Unit tests for the per-handle resize algorithm.

use dragresize::geometry::{ResizeLimits, apply_resize};
use dragresize::{GeometryState, HandleId};
use kurbo::Vec2;

fn square() -> GeometryState {
    GeometryState::new(0.0, 0.0, 100.0, 100.0, 0.0)
}

#[test]
fn test_bottom_right_grows_in_place() {
    let r = apply_resize(HandleId::BottomRight, Vec2::new(10.0, 10.0), &square(), 1.0, ResizeLimits::default());
    assert_eq!((r.left, r.top, r.width, r.height), (0.0, 0.0, 110.0, 110.0));
}

#[test]
fn test_top_left_shrinks_toward_bottom_right() {
    let r = apply_resize(HandleId::TopLeft, Vec2::new(10.0, 10.0), &square(), 1.0, ResizeLimits::default());
    assert_eq!((r.left, r.top, r.width, r.height), (10.0, 10.0, 90.0, 90.0));
    assert_eq!((r.left + r.width, r.top + r.height), (100.0, 100.0));
}

#[test]
fn test_bottom_right_collapse_stops_at_minimum() {
    let r = apply_resize(HandleId::BottomRight, Vec2::new(-1000.0, -1000.0), &square(), 1.0, ResizeLimits::default());
    assert_eq!((r.left, r.top, r.width, r.height), (0.0, 0.0, 20.0, 20.0));
}

#[test]
fn test_anchor_never_moves_for_any_handle_or_delta() {
    let start = square();
    for handle in HandleId::ALL.into_iter().filter(|h| h.is_resize()) {
        for (dx, dy) in [(-500.0, -500.0), (-12.0, 7.0), (33.0, -4.0), (900.0, 900.0)] {
            let r = apply_resize(handle, Vec2::new(dx, dy), &start, 1.0, ResizeLimits::default());
            let (ax, ay) = handle.anchor();
            // The edge opposite the one being dragged stays where it was
            if ax == 0.0 {
                assert_eq!(r.left + r.width, 100.0, "{handle:?} {dx},{dy}");
            } else {
                assert_eq!(r.left, 0.0, "{handle:?} {dx},{dy}");
            }
            if ay == 0.0 {
                assert_eq!(r.top + r.height, 100.0, "{handle:?} {dx},{dy}");
            } else {
                assert_eq!(r.top, 0.0, "{handle:?} {dx},{dy}");
            }
            assert!(r.width >= 20.0 && r.height >= 20.0);
        }
    }
}

#[test]
fn test_zoomed_delta_is_scaled_down() {
    let r = apply_resize(HandleId::MiddleRight, Vec2::new(50.0, 0.0), &square(), 2.5, ResizeLimits::default());
    assert_eq!(r.width, 120.0);
}
