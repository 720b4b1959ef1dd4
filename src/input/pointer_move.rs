//! Pointer-move handling - drag, resize and rotate steps.
//!
//! ## Performance Notes
//!
//! Moves arrive at pointer rate (60+ per second). Each step is computed
//! from the session's start snapshot, so the work is constant per event:
//! - Early exit when idle or for the wrong event family
//! - No allocation beyond the returned event list
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::element::Element;
use super::events::GestureEvent;
use super::session::GestureKind;
use crate::profile_scope;
use crate::types::PointerEvent;
use tracing::{debug, trace};

impl Element {
    pub fn pointer_move(&mut self, event: PointerEvent) -> Vec<GestureEvent> {
        profile_scope!("pointer_move");

        let Some(session) = self.state.session() else {
            return Vec::new();
        };
        if session.family != event.family {
            trace!("[dragresize] Ignoring {:?} move during {:?} gesture", event.family, session.family);
            return Vec::new();
        }

        let kind = session.kind;
        let next = session.step(event.position);

        let allowed = match kind {
            GestureKind::Drag => self.hooks.on_drag(next.left, next.top),
            GestureKind::Resize(handle) => self.hooks.on_resize(handle, next.left, next.top, next.width, next.height),
            GestureKind::Rotate => self.hooks.on_rotate(next.rotate),
        };
        if !allowed {
            debug!("[dragresize] {:?} step vetoed", kind);
            return Vec::new();
        }

        let g = &mut self.geometry;
        g.left = next.left;
        g.top = next.top;
        g.width = next.width;
        g.height = next.height;
        g.rotate = next.rotate;
        g.settle();

        trace!(
            "[dragresize] {:?} -> left {} top {} {}x{} rotate {}",
            kind, g.left, g.top, g.width, g.height, g.rotate
        );

        let notification = match kind {
            GestureKind::Drag => GestureEvent::Dragging { left: g.left, top: g.top },
            GestureKind::Resize(_) => GestureEvent::Resizing {
                left: g.left,
                top: g.top,
                width: g.width,
                height: g.height,
            },
            GestureKind::Rotate => GestureEvent::Rotating { angle: g.rotate },
        };
        vec![notification]
    }
}
