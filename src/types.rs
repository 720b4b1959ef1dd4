//! Core types for the interaction engine.
//!
//! This module defines the data shared by the geometry engines and the
//! gesture session: the element's [`GeometryState`], the per-gesture
//! [`Bounds`] snapshot, the nine handle identifiers, and the primitive
//! pointer event the host feeds in.

use crate::geometry::rotation;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

// ============================================================================
// Handles and Cursors
// ============================================================================

/// One of the nine interactive handles around an element.
///
/// The first eight resize; [`HandleId::Rotate`] rotates around the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleId {
    #[serde(rename = "tl")]
    TopLeft,
    #[serde(rename = "tm")]
    TopMiddle,
    #[serde(rename = "tr")]
    TopRight,
    #[serde(rename = "mr")]
    MiddleRight,
    #[serde(rename = "br")]
    BottomRight,
    #[serde(rename = "bm")]
    BottomMiddle,
    #[serde(rename = "bl")]
    BottomLeft,
    #[serde(rename = "ml")]
    MiddleLeft,
    #[serde(rename = "rot")]
    Rotate,
}

impl HandleId {
    /// All handles, clockwise from top-left, rotate handle last
    pub const ALL: [HandleId; 9] = [
        Self::TopLeft,
        Self::TopMiddle,
        Self::TopRight,
        Self::MiddleRight,
        Self::BottomRight,
        Self::BottomMiddle,
        Self::BottomLeft,
        Self::MiddleLeft,
        Self::Rotate,
    ];

    /// Short name used in configuration (`"tl"`, `"mr"`, `"rot"`, ...)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "tl",
            Self::TopMiddle => "tm",
            Self::TopRight => "tr",
            Self::MiddleRight => "mr",
            Self::BottomRight => "br",
            Self::BottomMiddle => "bm",
            Self::BottomLeft => "bl",
            Self::MiddleLeft => "ml",
            Self::Rotate => "rot",
        }
    }

    /// Position in the clockwise resize order, `None` for the rotate handle
    pub fn clockwise_index(self) -> Option<usize> {
        match self {
            Self::TopLeft => Some(0),
            Self::TopMiddle => Some(1),
            Self::TopRight => Some(2),
            Self::MiddleRight => Some(3),
            Self::BottomRight => Some(4),
            Self::BottomMiddle => Some(5),
            Self::BottomLeft => Some(6),
            Self::MiddleLeft => Some(7),
            Self::Rotate => None,
        }
    }

    /// Returns true for the eight resize handles
    pub fn is_resize(self) -> bool {
        !matches!(self, Self::Rotate)
    }

    /// Handle position on the unrotated unit box, `(0,0)` top-left to `(1,1)`
    /// bottom-right. The rotate handle sits above the top edge.
    pub fn anchor(self) -> (f64, f64) {
        match self {
            Self::TopLeft => (0.0, 0.0),
            Self::TopMiddle | Self::Rotate => (0.5, 0.0),
            Self::TopRight => (1.0, 0.0),
            Self::MiddleRight => (1.0, 0.5),
            Self::BottomRight => (1.0, 1.0),
            Self::BottomMiddle => (0.5, 1.0),
            Self::BottomLeft => (0.0, 1.0),
            Self::MiddleLeft => (0.0, 0.5),
        }
    }
}

/// CSS resize cursor, in clockwise order starting at north-west
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeCursor {
    NwResize,
    NResize,
    NeResize,
    EResize,
    SeResize,
    SResize,
    SwResize,
    WResize,
}

impl ResizeCursor {
    pub const CLOCKWISE: [ResizeCursor; 8] = [
        Self::NwResize,
        Self::NResize,
        Self::NeResize,
        Self::EResize,
        Self::SeResize,
        Self::SResize,
        Self::SwResize,
        Self::WResize,
    ];

    pub fn as_css(self) -> &'static str {
        match self {
            Self::NwResize => "nw-resize",
            Self::NResize => "n-resize",
            Self::NeResize => "ne-resize",
            Self::EResize => "e-resize",
            Self::SeResize => "se-resize",
            Self::SResize => "s-resize",
            Self::SwResize => "sw-resize",
            Self::WResize => "w-resize",
        }
    }
}

// ============================================================================
// Pointer Input
// ============================================================================

/// Which event pair (move/end) a gesture listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventFamily {
    #[default]
    Mouse,
    Touch,
}

/// Pressed pointer button. Touch contacts always report `Primary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// A pointer sample in page coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub button: PointerButton,
    pub family: EventFamily,
}

impl PointerEvent {
    /// Primary-button mouse sample
    pub fn mouse(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            button: PointerButton::Primary,
            family: EventFamily::Mouse,
        }
    }

    /// Single-contact touch sample
    pub fn touch(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            button: PointerButton::Primary,
            family: EventFamily::Touch,
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}

/// What a pointer-down landed on, as resolved by the host (or by
/// [`Element::target_at`](crate::Element::target_at)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The element body
    Body,
    /// A region of the body designated as the drag handle
    DragHandle,
    /// A region of the body that must never start a drag
    DragCancel,
    /// One of the nine handles
    Handle(HandleId),
    /// Anywhere outside the element
    Outside,
}

/// Axis restriction for drag gestures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    #[default]
    Both,
}

impl Axis {
    /// Zero out the components of `delta` this axis does not allow
    pub fn restrict(self, delta: Vec2) -> Vec2 {
        match self {
            Self::X => Vec2::new(delta.x, 0.0),
            Self::Y => Vec2::new(0.0, delta.y),
            Self::Both => delta,
        }
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Stacking order of the element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZIndex {
    #[default]
    Auto,
    #[serde(untagged)]
    Level(u32),
}

/// Last-observed container geometry. `x`/`y` is the container origin in
/// page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The four corners of the element after rotation, parent-relative
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Corners {
    pub tl: Point,
    pub tr: Point,
    pub bl: Point,
    pub br: Point,
}

/// Movement envelope captured at gesture start. `None` disables a side.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub min_left: Option<f64>,
    pub max_left: Option<f64>,
    pub min_right: Option<f64>,
    pub max_right: Option<f64>,
    pub min_top: Option<f64>,
    pub max_top: Option<f64>,
    pub min_bottom: Option<f64>,
    pub max_bottom: Option<f64>,
}

impl Bounds {
    /// Bounds with every side disabled
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        *self == Self::unbounded()
    }
}

/// Mutable geometry of one element, owned by the host element.
///
/// `dragging`/`resizing`/`rotating` are not stored here; they are derived
/// from the element's single gesture state so they can never overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryState {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees in `[0, 360)`
    pub rotate: f64,
    /// Width/height ratio consulted by aspect-locked resizes
    pub aspect_factor: f64,
    pub z_index: ZIndex,
    /// `None` when the element is not contained by a parent
    pub parent: Option<ContainerRect>,
    pub corners: Corners,
    pub enabled: bool,
}

impl GeometryState {
    /// Create a geometry at `(left, top)` with the given size and rotation.
    pub fn new(left: f64, top: f64, width: f64, height: f64, rotate: f64) -> Self {
        let mut geometry = Self {
            left,
            top,
            right: 0.0,
            bottom: 0.0,
            width,
            height,
            rotate: rotation::normalize_degrees(rotate),
            aspect_factor: if height > 0.0 { width / height } else { 1.0 },
            z_index: ZIndex::Auto,
            parent: None,
            corners: Corners::default(),
            enabled: false,
        };
        geometry.refresh_corners();
        geometry
    }

    /// Attach a container and recompute `right`/`bottom`
    pub fn with_parent(mut self, parent: ContainerRect) -> Self {
        self.set_parent(Some(parent));
        self
    }

    pub fn set_parent(&mut self, parent: Option<ContainerRect>) {
        self.parent = parent;
        self.sync_complements();
    }

    /// Element center, parent-relative
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Recompute `right`/`bottom` from the container, if any
    pub fn sync_complements(&mut self) {
        if let Some(parent) = self.parent {
            self.right = parent.width - self.width - self.left;
            self.bottom = parent.height - self.height - self.top;
        }
    }

    /// Recompute the rotated corner points
    pub fn refresh_corners(&mut self) {
        self.corners = rotation::corners(self);
    }

    /// Bring every derived field back in line after `left/top/width/height/rotate` changed
    pub fn settle(&mut self) {
        self.sync_complements();
        self.refresh_corners();
    }
}
