//! Gesture state machine for one element.
//!
//! A single enum holds whatever gesture is in progress, so an element can
//! never be dragging and resizing at the same time, and dropping the state
//! back to `Idle` also drops the session's pointer listeners.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Active(Drag)          (primary press on the body or drag handle)
//! Idle -> Active(Resize(h))     (primary press on resize handle h)
//! Idle -> Active(Rotate)        (primary press on the rotate handle)
//!
//! Active -> Idle                (pointer up, deselect, deactivation)
//! ```

use super::session::{GestureKind, GestureSession};
use crate::types::HandleId;

/// Gesture state of one element
#[derive(Debug, Default)]
pub enum GestureState {
    /// No gesture in progress
    #[default]
    Idle,

    /// A drag, resize or rotate is running
    Active(GestureSession),
}

impl GestureState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Kind of the running gesture, if any
    pub fn kind(&self) -> Option<GestureKind> {
        match self {
            Self::Active(session) => Some(session.kind),
            Self::Idle => None,
        }
    }

    pub fn session(&self) -> Option<&GestureSession> {
        match self {
            Self::Active(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Returns true if the body is being dragged
    pub fn is_dragging(&self) -> bool {
        self.kind() == Some(GestureKind::Drag)
    }

    /// Returns true if any resize handle is being dragged
    pub fn is_resizing(&self) -> bool {
        matches!(self.kind(), Some(GestureKind::Resize(_)))
    }

    /// Returns true if the rotate handle is being dragged
    pub fn is_rotating(&self) -> bool {
        self.kind() == Some(GestureKind::Rotate)
    }

    /// Handle being dragged by a resize, if any
    pub fn resize_handle(&self) -> Option<HandleId> {
        match self.kind() {
            Some(GestureKind::Resize(handle)) => Some(handle),
            _ => None,
        }
    }

    /// Begin a gesture, replacing whatever was running
    pub fn start(&mut self, session: GestureSession) {
        *self = Self::Active(session);
    }

    /// Take the running session out, leaving `Idle`
    pub fn finish(&mut self) -> Option<GestureSession> {
        match std::mem::take(self) {
            Self::Active(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Reset to Idle state, releasing any held listeners
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
