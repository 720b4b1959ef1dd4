//! Grid snapping for drag deltas.

use kurbo::Vec2;

/// Snap an on-screen delta so that the movement it produces in element
/// pixels is a whole number of grid steps. Returns the snapped delta in
/// screen pixels, ready to be fed to [`restrict`](super::clamp::restrict).
pub fn snap_delta(grid: [f64; 2], raw: Vec2, zoom: f64) -> Vec2 {
    let [gx, gy] = grid;
    let snap = |delta: f64, step: f64| ((delta / zoom) / step).round() * step * zoom;
    Vec2::new(snap(raw.x, gx), snap(raw.y, gy))
}
