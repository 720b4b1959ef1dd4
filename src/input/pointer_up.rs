//! Pointer-up handling - finalize the running gesture.

use super::element::Element;
use super::events::GestureEvent;
use super::session::GestureKind;
use crate::types::PointerEvent;
use tracing::{debug, trace};

impl Element {
    /// End the running gesture and report where it left the element. The
    /// session (and its listener registration) is dropped here.
    pub fn pointer_up(&mut self, event: PointerEvent) -> Vec<GestureEvent> {
        let Some(session) = self.state.session() else {
            return Vec::new();
        };
        if session.family != event.family {
            trace!("[dragresize] Ignoring {:?} end during {:?} gesture", event.family, session.family);
            return Vec::new();
        }

        let Some(session) = self.state.finish() else {
            return Vec::new();
        };
        let g = &self.geometry;
        let stop = match session.kind {
            GestureKind::Drag => GestureEvent::DragStop { left: g.left, top: g.top },
            GestureKind::Resize(_) => GestureEvent::ResizeStop {
                left: g.left,
                top: g.top,
                width: g.width,
                height: g.height,
            },
            GestureKind::Rotate => GestureEvent::RotateStop { angle: g.rotate },
        };
        drop(session);

        debug!("[dragresize] {}", stop.name());
        vec![stop]
    }
}
