//! Pointer input handling for one element.
//!
//! This module turns a stream of pointer samples into geometry changes:
//! press, then moves, then release.
//!
//! ## Architecture
//!
//! The element keeps an explicit state machine ([`GestureState`]) holding at
//! most one [`GestureSession`]. The session owns the listener registration,
//! so ending the gesture in any way also unsubscribes.
//!
//! ## Modules
//!
//! - `element` - The element facade: mount, activation, container refresh
//! - `host` - Traits the hosting UI implements (layout, capture, hooks)
//! - `events` - Notifications returned from every entry point
//! - `state` - Gesture state machine enum
//! - `session` - Start snapshot and per-step drag/resize/rotate math
//! - `pointer_down` - Deselect, activation, gesture start
//! - `pointer_move` - Drag, resize and rotate steps
//! - `pointer_up` - Finalize the gesture

mod element;
mod events;
pub mod host;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod session;
mod state;

pub use element::{Element, ElementBuilder};
pub use events::GestureEvent;
pub use host::{GestureHooks, LayoutProvider, NoCapture, NoHooks, PointerCapture, StaticLayout};
pub use session::{GestureKind, GestureSession, ListenerGuard, SessionParams};
pub use state::GestureState;
