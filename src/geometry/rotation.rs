//! Rotation math: angles, rotated corners, rotation-aware cursors and
//! handle hit-testing.
//!
//! All angles are in degrees. Coordinates are screen-style (y grows
//! downwards), so a positive angle turns clockwise on screen, the same
//! direction as a CSS `rotate()`.

use crate::constants::{RESIZE_HANDLE_COUNT, ROTATE_HANDLE_LIFT, ROTATE_STEP};
use crate::types::{Corners, GeometryState, HandleId, PointerTarget, ResizeCursor};
use kurbo::{Point, Vec2};

/// Wrap any angle into `[0, 360)`
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Direction of the vector `center -> point`, in `[0, 360)`.
/// `0` points right, `90` points down.
pub fn angle_between(center: Point, point: Point) -> f64 {
    let v = point - center;
    normalize_degrees(v.y.atan2(v.x).to_degrees())
}

/// Rotate `point` around `center` by `degrees`
pub fn rotated_point(center: Point, point: Point, degrees: f64) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let d = point - center;
    center + Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

/// Live rotation while the rotate handle is dragged: the start rotation
/// plus the angle swept by the pointer around `center`.
pub fn rotation_from_drag(start_rotate: f64, center: Point, pointer_start: Point, pointer: Point) -> f64 {
    normalize_degrees(start_rotate + angle_between(center, pointer) - angle_between(center, pointer_start))
}

/// The four corners of `geometry` after applying its rotation, parent-relative
pub fn corners(geometry: &GeometryState) -> Corners {
    let center = geometry.center();
    let (hw, hh) = (geometry.width / 2.0, geometry.height / 2.0);
    let corner = |dx: f64, dy: f64| rotated_point(center, center + Vec2::new(dx, dy), geometry.rotate);
    Corners {
        tl: corner(-hw, -hh),
        tr: corner(hw, -hh),
        bl: corner(-hw, hh),
        br: corner(hw, hh),
    }
}

/// Resize cursor for `handle` on an element rotated by `rotate` degrees.
///
/// Cursors advance one clockwise step per 45 degrees of rotation, switching
/// at the half-step (22.5, 67.5, ...) so each cursor covers the angles it
/// visually points along. The rotate handle has no resize cursor.
pub fn cursor_for(handle: HandleId, rotate: f64) -> Option<ResizeCursor> {
    let base = handle.clockwise_index()?;
    let bucket = ((rotate + ROTATE_STEP / 2.0) / ROTATE_STEP).floor() as i64;
    let index = (base as i64 + bucket).rem_euclid(RESIZE_HANDLE_COUNT as i64) as usize;
    Some(ResizeCursor::CLOCKWISE[index])
}

// ============================================================================
// Hit Testing
// ============================================================================

/// On-screen handle box: `size` pixels square, pushed `offset` pixels from
/// the edge it sits on (negative values straddle the edge).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleLayout {
    pub size: f64,
    pub offset: f64,
}

/// Center of `handle` in the element's unrotated, parent-relative frame.
/// `size`/`offset` must already be in element pixels.
fn handle_center(geometry: &GeometryState, handle: HandleId, size: f64, offset: f64) -> Point {
    let (ax, ay) = handle.anchor();
    if handle == HandleId::Rotate {
        // The box's left edge sits on the horizontal center
        return Point::new(
            geometry.left + ax * geometry.width + size / 2.0,
            geometry.top - ROTATE_HANDLE_LIFT * size + size / 2.0,
        );
    }
    // A positive `offset` pushes a box inwards from its edge
    let shift = offset + size / 2.0;
    Point::new(
        geometry.left + ax * geometry.width + (1.0 - 2.0 * ax) * shift,
        geometry.top + ay * geometry.height + (1.0 - 2.0 * ay) * shift,
    )
}

/// Resolve what a page-space `point` lands on.
///
/// The point is mapped into the element's unrotated frame, then `handles`
/// are tested in order (callers list the rotate handle first so it wins
/// over an overlapping resize handle), then the body.
pub fn hit_test(
    geometry: &GeometryState,
    point: Point,
    zoom: f64,
    layout: HandleLayout,
    handles: &[HandleId],
) -> PointerTarget {
    let origin = geometry
        .parent
        .map(|p| Point::new(p.x, p.y))
        .unwrap_or(Point::ZERO);
    let local = Point::new((point.x - origin.x) / zoom, (point.y - origin.y) / zoom);
    let local = rotated_point(geometry.center(), local, -geometry.rotate);

    let size = layout.size / zoom;
    let offset = layout.offset / zoom;
    let half = size / 2.0;
    for &handle in handles {
        let c = handle_center(geometry, handle, size, offset);
        if (local.x - c.x).abs() <= half && (local.y - c.y).abs() <= half {
            return PointerTarget::Handle(handle);
        }
    }

    let inside = local.x >= geometry.left
        && local.x <= geometry.left + geometry.width
        && local.y >= geometry.top
        && local.y <= geometry.top + geometry.height;
    if inside {
        PointerTarget::Body
    } else {
        PointerTarget::Outside
    }
}
