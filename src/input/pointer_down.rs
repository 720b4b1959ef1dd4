//! Pointer-down handling - deselect, activation, gesture start.
//!
//! The host resolves what was pressed (see [`Element::target_at`]) and passes
//! it in as a [`PointerTarget`]. Presses outside the element deselect it;
//! presses on the element may activate it and start a drag, resize or
//! rotate session.

use super::element::Element;
use super::events::GestureEvent;
use super::session::{GestureKind, GestureSession, SessionParams};
use crate::types::{HandleId, PointerButton, PointerEvent, PointerTarget};
use tracing::debug;

impl Element {
    pub fn pointer_down(&mut self, event: PointerEvent, target: PointerTarget) -> Vec<GestureEvent> {
        if target == PointerTarget::Outside {
            return self.deselect();
        }

        if !self.state.is_idle() {
            debug!("[dragresize] Ignoring press on {:?}: a gesture is already running", target);
            return Vec::new();
        }

        if event.button != PointerButton::Primary {
            debug!("[dragresize] Ignoring {:?} button press", event.button);
            return Vec::new();
        }

        match target {
            PointerTarget::Body | PointerTarget::DragHandle => self.press_body(event, target),
            PointerTarget::DragCancel => {
                debug!("[dragresize] Press on drag-cancel region ignored");
                Vec::new()
            }
            PointerTarget::Handle(HandleId::Rotate) => self.press_rotate_handle(event),
            PointerTarget::Handle(handle) => self.press_resize_handle(event, handle),
            PointerTarget::Outside => Vec::new(),
        }
    }

    /// Press outside the element: end any gesture and deactivate unless the
    /// configuration keeps the element active. No stop event is emitted.
    fn deselect(&mut self) -> Vec<GestureEvent> {
        if !self.state.is_idle() {
            debug!("[dragresize] Gesture cancelled by outside press");
        }
        self.state.reset();

        if self.geometry.enabled && !self.config.prevent_deactivation {
            self.geometry.enabled = false;
            debug!("[dragresize] Deactivated by outside press");
            return vec![GestureEvent::Deactivated];
        }
        Vec::new()
    }

    fn press_body(&mut self, event: PointerEvent, target: PointerTarget) -> Vec<GestureEvent> {
        if !self.hooks.on_drag_start(&event) {
            debug!("[dragresize] Drag start vetoed");
            return Vec::new();
        }
        if self.config.require_drag_handle && target != PointerTarget::DragHandle {
            debug!("[dragresize] Press outside the drag handle ignored");
            return Vec::new();
        }

        let events = self.activate();
        if self.config.draggable {
            self.begin(GestureKind::Drag, event);
        }
        events
    }

    fn press_resize_handle(&mut self, event: PointerEvent, handle: HandleId) -> Vec<GestureEvent> {
        if !self.config.handles.contains(&handle) {
            debug!("[dragresize] Press on disabled handle {} ignored", handle.as_str());
            return Vec::new();
        }
        if !self.hooks.on_resize_start(handle, &event) {
            debug!("[dragresize] Resize start vetoed");
            return Vec::new();
        }

        let events = self.activate();
        if self.config.resizable {
            self.begin(GestureKind::Resize(handle), event);
        }
        events
    }

    fn press_rotate_handle(&mut self, event: PointerEvent) -> Vec<GestureEvent> {
        if !self.config.handles.contains(&HandleId::Rotate) {
            debug!("[dragresize] Press on disabled rotate handle ignored");
            return Vec::new();
        }
        if !self.hooks.on_rotate_start(&event) {
            debug!("[dragresize] Rotate start vetoed");
            return Vec::new();
        }

        let events = self.activate();
        if self.config.rotatable {
            self.begin(GestureKind::Rotate, event);
        }
        events
    }

    fn activate(&mut self) -> Vec<GestureEvent> {
        if self.geometry.enabled {
            return Vec::new();
        }
        self.geometry.enabled = true;
        debug!("[dragresize] Activated");
        vec![GestureEvent::Activated]
    }

    fn begin(&mut self, kind: GestureKind, event: PointerEvent) {
        let params = SessionParams {
            zoom: self.zoom,
            grid: self.config.grid,
            axis: self.config.axis,
            rotation_mode: self.config.rotatable,
            limits: self.config.resize_limits(),
            aspect_lock: self
                .config
                .lock_aspect_ratio
                .then_some(self.geometry.aspect_factor),
        };
        let session = GestureSession::start(
            kind,
            event.position,
            event.family,
            &self.geometry,
            params,
            self.capture.clone(),
        );
        debug!("[dragresize] {:?} started with bounds {:?}", kind, session.bounds);
        self.state.start(session);
    }
}
