//! Engine-wide constants.
//!
//! Centralizes the numeric policies of the interaction engine so the
//! geometry modules and the gesture session agree on them.

// ============================================================================
// Resize Limits
// ============================================================================

/// Smallest width or height a resize can produce, in element pixels
pub const MIN_DISTANCE: f64 = 20.0;

/// Largest width or height a resize can produce, in element pixels
pub const MAX_DISTANCE: f64 = 2000.0;

// ============================================================================
// Rotation
// ============================================================================

/// Angular width of one cursor bucket in degrees
pub const ROTATE_STEP: f64 = 45.0;

/// Number of resize handles (and resize cursors)
pub const RESIZE_HANDLE_COUNT: usize = 8;

/// The rotate handle sits this many handle-sizes above the top edge
pub const ROTATE_HANDLE_LIFT: f64 = 3.0;

// ============================================================================
// Element Defaults
// ============================================================================

/// Default element width and height
pub const DEFAULT_SIZE: f64 = 200.0;

/// Default on-screen handle size in pixels
pub const DEFAULT_HANDLE_SIZE: f64 = 12.0;

/// Default handle offset from the element edge in pixels
pub const DEFAULT_HANDLE_OFFSET: f64 = -6.0;

/// Default grid step (no snapping)
pub const DEFAULT_GRID: [f64; 2] = [1.0, 1.0];

/// Default zoom/scale ratio
pub const DEFAULT_ZOOM: f64 = 1.0;

// ============================================================================
// Profiling
// ============================================================================

/// Budget for a single pointer-move step at 60 FPS
pub const STEP_BUDGET_MS: f64 = 16.67;
