//! Snapshot tests using the insta crate.
//!
//! Snapshots pin composite results (envelopes, per-handle tables, event
//! sequences) that are tedious to assert field by field.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```
//!
//! Or review changes interactively:
//! ```sh
//! cargo insta review
//! ```

use crate::helpers::{TestElementBuilder, drag_through};
use dragresize::geometry::{ResizeLimits, apply_resize, compute_drag_bounds};
use dragresize::{ContainerRect, GeometryState, HandleId, PointerTarget};
use kurbo::Vec2;

// ============================================================================
// Geometry Tables
// ============================================================================

#[test]
fn snapshot_drag_bounds_on_grid() {
    let geometry = GeometryState::new(23.0, 7.0, 50.0, 50.0, 0.0).with_parent(ContainerRect {
        x: 0.0,
        y: 0.0,
        width: 300.0,
        height: 200.0,
    });
    let bounds = compute_drag_bounds(&geometry, [10.0, 10.0], false);
    insta::assert_debug_snapshot!("drag_bounds_on_grid", bounds);
}

#[allow(dead_code)]
#[derive(Debug)]
struct HandleBox {
    handle: &'static str,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

#[test]
fn snapshot_resize_every_handle() {
    let start = GeometryState::new(0.0, 0.0, 100.0, 100.0, 0.0);
    let table: Vec<HandleBox> = HandleId::ALL
        .into_iter()
        .filter(|h| h.is_resize())
        .map(|handle| {
            let r = apply_resize(handle, Vec2::new(10.0, 10.0), &start, 1.0, ResizeLimits::default());
            HandleBox {
                handle: handle.as_str(),
                left: r.left,
                top: r.top,
                width: r.width,
                height: r.height,
            }
        })
        .collect();
    insta::assert_debug_snapshot!("resize_every_handle", table);
}

// ============================================================================
// Event Sequences
// ============================================================================

#[test]
fn snapshot_drag_events() {
    let mut element = TestElementBuilder::new().build();
    let events = drag_through(&mut element, PointerTarget::Body, (100.0, 100.0), &[(130.0, 115.0)]);
    insta::assert_debug_snapshot!("drag_events", events);
}
