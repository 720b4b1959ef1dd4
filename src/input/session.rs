//! One live gesture: the snapshot taken at pointer-down and the math that
//! turns every later pointer position into a new geometry.
//!
//! A session always computes from its start snapshot and the total pointer
//! delta, never from the previous step, so dropped or vetoed steps cannot
//! accumulate error.

use crate::geometry::{
    ResizeLimits, apply_resize, compute_drag_bounds, lock_aspect, restrict, rotation_from_drag, snap_delta,
};
use crate::input::host::PointerCapture;
use crate::types::{Axis, Bounds, EventFamily, GeometryState, HandleId};
use kurbo::Point;
use std::fmt;
use std::rc::Rc;

/// Kind of an active gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Resize(HandleId),
    Rotate,
}

/// Holds the document-level move/end listeners for one gesture.
///
/// Acquired in [`ListenerGuard::acquire`], released when dropped. Every way
/// a session can end (pointer-up, deselect, deactivation, the element being
/// dropped) drops the session and therefore the guard.
pub struct ListenerGuard {
    capture: Rc<dyn PointerCapture>,
    family: EventFamily,
}

impl ListenerGuard {
    pub fn acquire(capture: Rc<dyn PointerCapture>, family: EventFamily) -> Self {
        capture.acquire(family);
        Self { capture, family }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.capture.release(self.family);
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("family", &self.family).finish_non_exhaustive()
    }
}

/// Per-gesture parameters fixed at pointer-down
#[derive(Debug, Clone, Copy)]
pub struct SessionParams {
    pub zoom: f64,
    pub grid: [f64; 2],
    pub axis: Axis,
    pub rotation_mode: bool,
    pub limits: ResizeLimits,
    /// Width/height ratio to hold during resizes, if locked
    pub aspect_lock: Option<f64>,
}

/// A single active drag, resize or rotate interaction
#[derive(Debug)]
pub struct GestureSession {
    pub kind: GestureKind,
    pub pointer_start: Point,
    pub geometry_start: GeometryState,
    pub family: EventFamily,
    pub zoom: f64,
    /// Envelope captured at start; a container resize mid-gesture is not re-read
    pub bounds: Bounds,
    grid: [f64; 2],
    axis: Axis,
    limits: ResizeLimits,
    aspect_lock: Option<f64>,
    /// Rotation pivot in page coordinates
    pivot: Point,
    _listeners: ListenerGuard,
}

impl GestureSession {
    /// Snapshot `geometry`, compute the gesture envelope and acquire the
    /// pointer listeners for `family`.
    pub fn start(
        kind: GestureKind,
        pointer_start: Point,
        family: EventFamily,
        geometry: &GeometryState,
        params: SessionParams,
        capture: Rc<dyn PointerCapture>,
    ) -> Self {
        let bounds = compute_drag_bounds(geometry, params.grid, params.rotation_mode);
        let limits = match kind {
            GestureKind::Resize(handle) if !params.rotation_mode => match params.aspect_lock {
                Some(_) => params.limits.within_container_locked(geometry, handle),
                None => params.limits.within_container(geometry, handle),
            },
            _ => params.limits,
        };
        let origin = geometry
            .parent
            .map(|p| Point::new(p.x, p.y))
            .unwrap_or(Point::ZERO);
        let center = geometry.center();
        let pivot = Point::new(origin.x + center.x * params.zoom, origin.y + center.y * params.zoom);

        Self {
            kind,
            pointer_start,
            geometry_start: geometry.clone(),
            family,
            zoom: params.zoom,
            bounds,
            grid: params.grid,
            axis: params.axis,
            limits,
            aspect_lock: params.aspect_lock,
            pivot,
            _listeners: ListenerGuard::acquire(capture, family),
        }
    }

    /// Geometry after dragging the body to `pointer`
    pub fn drag_to(&self, pointer: Point) -> GeometryState {
        let start = &self.geometry_start;
        let raw = self.axis.restrict(pointer - self.pointer_start);
        let delta = snap_delta(self.grid, raw, self.zoom);

        let left = restrict(start.left, self.bounds.min_left, self.bounds.max_left, delta.x, self.zoom);
        let top = restrict(start.top, self.bounds.min_top, self.bounds.max_top, delta.y, self.zoom);

        let mut next = start.clone();
        next.left = left.value;
        next.top = top.value;
        next.settle();
        next
    }

    /// Geometry after dragging `handle` to `pointer`
    pub fn resize_to(&self, handle: HandleId, pointer: Point) -> GeometryState {
        let start = &self.geometry_start;
        let delta = pointer - self.pointer_start;
        let mut result = apply_resize(handle, delta, start, self.zoom, self.limits);
        if let Some(aspect) = self.aspect_lock {
            result = lock_aspect(result, handle, start, aspect, self.limits);
        }

        let mut next = start.clone();
        next.left = result.left;
        next.top = result.top;
        next.width = result.width;
        next.height = result.height;
        next.settle();
        next
    }

    /// Geometry after dragging the rotate handle to `pointer`
    pub fn rotate_to(&self, pointer: Point) -> GeometryState {
        let start = &self.geometry_start;
        let mut next = start.clone();
        next.rotate = rotation_from_drag(start.rotate, self.pivot, self.pointer_start, pointer);
        next.refresh_corners();
        next
    }

    /// Geometry for `pointer` according to this session's kind
    pub fn step(&self, pointer: Point) -> GeometryState {
        match self.kind {
            GestureKind::Drag => self.drag_to(pointer),
            GestureKind::Resize(handle) => self.resize_to(handle, pointer),
            GestureKind::Rotate => self.rotate_to(pointer),
        }
    }
}
