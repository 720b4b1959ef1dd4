//! Seams to the hosting UI layer.
//!
//! The engine never touches a real document. Instead the host implements:
//!
//! - [`LayoutProvider`] - measures the container and the element's content
//! - [`PointerCapture`] - subscribes/unsubscribes the document-level
//!   move/end listeners for the duration of a gesture
//! - [`GestureHooks`] - optional veto points before and during gestures

use crate::types::{ContainerRect, EventFamily, HandleId, PointerEvent};
use std::collections::HashMap;

/// Measures the surroundings of an element
pub trait LayoutProvider {
    /// Bounding box of the element's direct parent, if it has one
    fn parent_rect(&self) -> Option<ContainerRect>;

    /// Bounding box of the container matched by `selector`
    fn query(&self, _selector: &str) -> Option<ContainerRect> {
        None
    }

    /// Natural size of the element's content, used for `auto` width/height
    fn intrinsic_size(&self) -> Option<(f64, f64)> {
        None
    }
}

/// Layout with fixed answers; useful for headless hosts and tests
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    pub parent: Option<ContainerRect>,
    pub selectors: HashMap<String, ContainerRect>,
    pub intrinsic: Option<(f64, f64)>,
}

impl StaticLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent(mut self, width: f64, height: f64) -> Self {
        self.parent = Some(ContainerRect {
            x: 0.0,
            y: 0.0,
            width,
            height,
        });
        self
    }

    pub fn with_parent_rect(mut self, rect: ContainerRect) -> Self {
        self.parent = Some(rect);
        self
    }

    pub fn with_selector(mut self, selector: impl Into<String>, rect: ContainerRect) -> Self {
        self.selectors.insert(selector.into(), rect);
        self
    }

    pub fn with_intrinsic_size(mut self, width: f64, height: f64) -> Self {
        self.intrinsic = Some((width, height));
        self
    }
}

impl LayoutProvider for StaticLayout {
    fn parent_rect(&self) -> Option<ContainerRect> {
        self.parent
    }

    fn query(&self, selector: &str) -> Option<ContainerRect> {
        self.selectors.get(selector).copied()
    }

    fn intrinsic_size(&self) -> Option<(f64, f64)> {
        self.intrinsic
    }
}

/// Document-level pointer listener registration.
///
/// `acquire` is called when a gesture starts and `release` exactly once
/// when it ends, however it ends. Methods take `&self` because the host
/// shares the capture between elements; use interior mutability.
pub trait PointerCapture {
    fn acquire(&self, family: EventFamily);
    fn release(&self, family: EventFamily);
}

/// Capture for hosts that route every pointer event to the element anyway
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCapture;

impl PointerCapture for NoCapture {
    fn acquire(&self, _family: EventFamily) {}
    fn release(&self, _family: EventFamily) {}
}

/// Veto points. Returning `false` from a `*_start` hook ignores the
/// pointer-down entirely; returning `false` from a per-step hook drops that
/// one step and keeps the previous geometry.
pub trait GestureHooks {
    fn on_drag_start(&mut self, _event: &PointerEvent) -> bool {
        true
    }

    fn on_drag(&mut self, _left: f64, _top: f64) -> bool {
        true
    }

    fn on_resize_start(&mut self, _handle: HandleId, _event: &PointerEvent) -> bool {
        true
    }

    fn on_resize(&mut self, _handle: HandleId, _left: f64, _top: f64, _width: f64, _height: f64) -> bool {
        true
    }

    fn on_rotate_start(&mut self, _event: &PointerEvent) -> bool {
        true
    }

    fn on_rotate(&mut self, _angle: f64) -> bool {
        true
    }
}

/// Hooks that allow everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl GestureHooks for NoHooks {}
