//! Lifecycle notifications returned to the host.

/// What happened during one call into the element. Entry points return a
/// list because one pointer-down can both activate the element and start
/// a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Activated,
    Deactivated,
    Dragging { left: f64, top: f64 },
    Resizing { left: f64, top: f64, width: f64, height: f64 },
    Rotating { angle: f64 },
    DragStop { left: f64, top: f64 },
    ResizeStop { left: f64, top: f64, width: f64, height: f64 },
    RotateStop { angle: f64 },
}

impl GestureEvent {
    /// Event name as emitted by the component (`"dragging"`, `"resizestop"`, ...)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Activated => "activated",
            Self::Deactivated => "deactivated",
            Self::Dragging { .. } => "dragging",
            Self::Resizing { .. } => "resizing",
            Self::Rotating { .. } => "rotating",
            Self::DragStop { .. } => "dragstop",
            Self::ResizeStop { .. } => "resizestop",
            Self::RotateStop { .. } => "rotatestop",
        }
    }

    /// Returns true for the three end-of-gesture notifications
    pub fn is_stop(&self) -> bool {
        matches!(
            self,
            Self::DragStop { .. } | Self::ResizeStop { .. } | Self::RotateStop { .. }
        )
    }
}
