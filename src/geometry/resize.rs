//! Per-handle resize algorithm.
//!
//! Every handle moves zero, one or two edges of the element. An edge on the
//! low-coordinate side (left/top) is "inverted": a positive pointer delta
//! shrinks the element and the offset follows the edge. An edge on the high
//! side only changes the dimension. The edges a handle does not touch stay
//! where they were; that is what keeps the opposite corner anchored.
//!
//! | handle | x edge | y edge |
//! |--------|--------|--------|
//! | tl     | low    | low    |
//! | tm     | -      | low    |
//! | tr     | high   | low    |
//! | mr     | high   | -      |
//! | br     | high   | high   |
//! | bm     | -      | high   |
//! | bl     | low    | high   |
//! | ml     | low    | -      |

use super::clamp::restrict;
use crate::constants::{MAX_DISTANCE, MIN_DISTANCE};
use crate::types::{GeometryState, HandleId};
use kurbo::Vec2;

/// Which edge of one axis a handle drags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Low,
    High,
    Untouched,
}

fn edges(handle: HandleId) -> (Edge, Edge) {
    use Edge::*;
    match handle {
        HandleId::TopLeft => (Low, Low),
        HandleId::TopMiddle => (Untouched, Low),
        HandleId::TopRight => (High, Low),
        HandleId::MiddleRight => (High, Untouched),
        HandleId::BottomRight => (High, High),
        HandleId::BottomMiddle => (Untouched, High),
        HandleId::BottomLeft => (Low, High),
        HandleId::MiddleLeft => (Low, Untouched),
        HandleId::Rotate => (Untouched, Untouched),
    }
}

/// Size limits for one resize gesture, in element pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeLimits {
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
}

impl Default for ResizeLimits {
    fn default() -> Self {
        Self {
            min_width: MIN_DISTANCE,
            max_width: MAX_DISTANCE,
            min_height: MIN_DISTANCE,
            max_height: MAX_DISTANCE,
        }
    }
}

impl ResizeLimits {
    /// Tighten the default limits with configured ones. A `None` pair (or
    /// one the config layer rejected) leaves the defaults in place.
    pub fn with_configured(width: Option<(f64, f64)>, height: Option<(f64, f64)>) -> Self {
        let mut limits = Self::default();
        if let Some((min, max)) = width {
            limits.min_width = limits.min_width.max(min);
            limits.max_width = limits.max_width.min(max);
        }
        if let Some((min, max)) = height {
            limits.min_height = limits.min_height.max(min);
            limits.max_height = limits.max_height.min(max);
        }
        limits
    }

    /// Stop the dragged edges at the container walls. Elements without a
    /// container are returned unchanged.
    ///
    /// A wall never forces a shrink: if the element already overhangs its
    /// container, the cap is its starting size (or the minimum).
    pub fn within_container(self, start: &GeometryState, handle: HandleId) -> Self {
        let (x, y) = edges(handle);
        self.cap_edges(start, x, y)
    }

    /// Like [`within_container`](Self::within_container), but also walls the
    /// axis that aspect locking derives. A derived dimension grows towards
    /// the high side, as [`lock_aspect`] anchors its low edge.
    pub fn within_container_locked(self, start: &GeometryState, handle: HandleId) -> Self {
        let derived = |edge: Edge| match edge {
            Edge::Untouched => Edge::High,
            moved => moved,
        };
        let (x, y) = edges(handle);
        if (x, y) == (Edge::Untouched, Edge::Untouched) {
            return self;
        }
        self.cap_edges(start, derived(x), derived(y))
    }

    fn cap_edges(mut self, start: &GeometryState, x: Edge, y: Edge) -> Self {
        let Some(parent) = start.parent else {
            return self;
        };
        let wall = |edge: Edge, offset: f64, dimension: f64, span: f64, min: f64| match edge {
            Edge::Low => Some((offset + dimension).max(dimension.max(min))),
            Edge::High => Some((span - offset).max(dimension.max(min))),
            Edge::Untouched => None,
        };
        if let Some(cap) = wall(x, start.left, start.width, parent.width, self.min_width) {
            self.max_width = self.max_width.min(cap);
        }
        if let Some(cap) = wall(y, start.top, start.height, parent.height, self.min_height) {
            self.max_height = self.max_height.min(cap);
        }
        self
    }
}

/// New box produced by one resize step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeResult {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Pointer delta (screen pixels) that actually moved an edge, per axis
    pub applied: Vec2,
}

/// Resize one axis. Returns `(offset, dimension, applied_delta)`.
fn resize_axis(edge: Edge, offset: f64, dimension: f64, raw: f64, zoom: f64, min: f64, max: f64) -> (f64, f64, f64) {
    match edge {
        Edge::Untouched => (offset, dimension, 0.0),
        Edge::High => {
            let r = restrict(dimension, Some(min), Some(max), raw, zoom);
            (offset, r.value.floor(), r.delta)
        }
        Edge::Low => {
            // Growing from the low side is a negative pointer delta
            let r = restrict(dimension, Some(min), Some(max), -raw, zoom);
            let moved = -r.delta;
            (offset + moved / zoom, r.value.floor(), moved)
        }
    }
}

/// Apply the pointer `delta` (screen pixels, measured from the gesture
/// start) to `start` as if `handle` was dragged.
///
/// Dimensions are floored to whole pixels. Offsets move by the clamped
/// delta, so once a dimension hits a limit its anchor stops too.
pub fn apply_resize(handle: HandleId, delta: Vec2, start: &GeometryState, zoom: f64, limits: ResizeLimits) -> ResizeResult {
    let (x_edge, y_edge) = edges(handle);
    let (left, width, applied_x) = resize_axis(
        x_edge,
        start.left,
        start.width,
        delta.x,
        zoom,
        limits.min_width,
        limits.max_width,
    );
    let (top, height, applied_y) = resize_axis(
        y_edge,
        start.top,
        start.height,
        delta.y,
        zoom,
        limits.min_height,
        limits.max_height,
    );
    ResizeResult {
        left,
        top,
        width,
        height,
        applied: Vec2::new(applied_x, applied_y),
    }
}

/// Re-derive the dependent dimension of `result` from `aspect` (width /
/// height) and move the offsets so the handle's anchor edges stay put.
///
/// Edge handles drive the dimension they move; corner handles follow the
/// width. If the derived dimension breaks its limits it is clamped and the
/// other dimension is derived back from it.
pub fn lock_aspect(
    result: ResizeResult,
    handle: HandleId,
    start: &GeometryState,
    aspect: f64,
    limits: ResizeLimits,
) -> ResizeResult {
    let (x_edge, y_edge) = edges(handle);
    if aspect <= 0.0 || !aspect.is_finite() {
        return result;
    }

    let (mut width, mut height) = (result.width, result.height);
    match (x_edge, y_edge) {
        (Edge::Untouched, Edge::Untouched) => return result,
        (Edge::Untouched, _) => width = height * aspect,
        _ => height = width / aspect,
    }

    if height < limits.min_height || height > limits.max_height {
        height = height.clamp(limits.min_height, limits.max_height.max(limits.min_height));
        width = height * aspect;
    }
    if width < limits.min_width || width > limits.max_width {
        width = width.clamp(limits.min_width, limits.max_width.max(limits.min_width));
        height = width / aspect;
    }
    let (width, height) = (width.floor(), height.floor());

    let left = match x_edge {
        Edge::Low => start.left + start.width - width,
        _ => start.left,
    };
    let top = match y_edge {
        Edge::Low => start.top + start.height - height,
        _ => start.top,
    };
    ResizeResult {
        left,
        top,
        width,
        height,
        applied: result.applied,
    }
}
