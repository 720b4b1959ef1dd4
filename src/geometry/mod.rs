//! Pure geometry engines used by the gesture session.
//!
//! Nothing in here holds state; every function takes a snapshot and returns
//! a new value, which keeps the numeric policies testable in isolation.
//!
//! ## Modules
//!
//! - `clamp` - zoom-aware clamping that reports the consumed delta
//! - `bounds` - drag envelope computed at gesture start
//! - `grid` - grid snapping of drag deltas
//! - `resize` - per-handle resize algorithm and aspect lock
//! - `rotation` - angles, rotated corners, cursors and hit-testing

pub mod bounds;
pub mod clamp;
pub mod grid;
pub mod resize;
pub mod rotation;

pub use bounds::compute_drag_bounds;
pub use clamp::{Restricted, restrict};
pub use grid::snap_delta;
pub use resize::{ResizeLimits, ResizeResult, apply_resize, lock_aspect};
pub use rotation::{
    HandleLayout, angle_between, corners, cursor_for, hit_test, normalize_degrees, rotated_point,
    rotation_from_drag,
};
