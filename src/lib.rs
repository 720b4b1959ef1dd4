//! Geometric interaction engine for on-screen rectangular elements.
//!
//! An [`Element`] is moved by dragging its body, resized from eight edge
//! and corner handles, and rotated around its center from a ninth handle.
//! Movement respects an optional container, a grid, an axis restriction,
//! aspect locking and a surface zoom factor.
//!
//! The crate does no rendering and never touches a document. The host feeds
//! primitive pointer samples in and reads back [`GeometryState`] plus a list
//! of [`GestureEvent`]s:
//!
//! ```ignore
//! let mut element = Element::builder(ElementConfig::from_json(r#"{ "parent": true }"#)?)
//!     .layout(StaticLayout::new().with_parent(800.0, 600.0))
//!     .mount()?;
//!
//! let target = element.target_at(press.position);
//! element.pointer_down(press, target);
//! element.pointer_move(PointerEvent::mouse(130.0, 115.0));
//! element.pointer_up(PointerEvent::mouse(130.0, 115.0));
//! ```
//!
//! ## Modules
//!
//! - `geometry` - Pure clamp, bounds, grid, resize and rotation math
//! - `input` - Element facade, gesture state machine, host traits
//! - `config` - Serde configuration and validation
//! - `types` - Geometry, handles, pointer samples
//! - `error` - Configuration errors and warnings
//! - `perf` - Step timing behind the `profiling` feature

pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod perf;
pub mod types;

pub use config::{Containment, Dimension, ElementConfig, HandleInfo};
pub use error::{ConfigError, ConfigResult, ConfigWarning};
pub use input::{
    Element, ElementBuilder, GestureEvent, GestureHooks, GestureKind, LayoutProvider, NoCapture, NoHooks,
    PointerCapture, StaticLayout,
};
pub use types::{
    Axis, Bounds, ContainerRect, Corners, EventFamily, GeometryState, HandleId, PointerButton, PointerEvent,
    PointerTarget, ResizeCursor, ZIndex,
};
