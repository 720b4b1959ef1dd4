//! Drag envelope computed once at gesture start.

use crate::types::{Bounds, GeometryState};

/// Compute the movement envelope for a gesture starting from `geometry`.
///
/// Without a container every side is disabled. With rotation enabled the
/// envelope is relaxed by half the element size on each side, since a
/// rotated element's corners can legitimately leave the naive box. Otherwise
/// the limits are quantized to `grid` relative to the current offsets, so a
/// snapped drag can only reach positions on the element's own lattice.
///
/// `grid` steps must be positive; the config layer guarantees this.
pub fn compute_drag_bounds(geometry: &GeometryState, grid: [f64; 2], rotation_mode: bool) -> Bounds {
    let Some(parent) = geometry.parent else {
        return Bounds::unbounded();
    };
    let GeometryState {
        left,
        top,
        right,
        bottom,
        width,
        height,
        ..
    } = *geometry;

    if rotation_mode {
        return Bounds {
            min_left: Some(-width / 2.0),
            max_left: Some(parent.width - width / 2.0),
            min_right: Some(width / 2.0),
            max_right: Some(parent.width + width / 2.0),
            min_top: Some(-height / 2.0),
            max_top: Some(parent.height - height / 2.0),
            min_bottom: Some(height / 2.0),
            max_bottom: Some(parent.height + height / 2.0),
        };
    }

    let [gx, gy] = grid;
    // `%` on f64 is the truncated remainder, matching the lattice anchor below
    let lattice_max = |span: f64, offset: f64, step: f64| (span / step).floor() * step + offset;

    Bounds {
        min_left: Some(left % gx),
        max_left: Some(lattice_max(parent.width - width - left, left, gx)),
        min_right: Some(right % gx),
        max_right: Some(lattice_max(parent.width - width - right, right, gx)),
        min_top: Some(top % gy),
        max_top: Some(lattice_max(parent.height - height - top, top, gy)),
        min_bottom: Some(bottom % gy),
        max_bottom: Some(lattice_max(parent.height - height - bottom, bottom, gy)),
    }
}
