//! The host-facing element: mount, activation and container tracking.
//!
//! Pointer handling lives in `pointer_down`, `pointer_move` and
//! `pointer_up`, each adding an `impl Element` block.

use super::host::{GestureHooks, LayoutProvider, NoCapture, NoHooks, PointerCapture, StaticLayout};
use super::session::GestureKind;
use super::state::GestureState;
use super::events::GestureEvent;
use crate::config::{Containment, Dimension, ElementConfig};
use crate::error::{ConfigError, ConfigResult, ConfigWarning};
use crate::geometry::{HandleLayout, cursor_for, hit_test};
use crate::types::{ContainerRect, GeometryState, HandleId, PointerTarget, ResizeCursor};
use kurbo::Point;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, warn};

/// Builder returned by [`Element::builder`]
pub struct ElementBuilder {
    config: ElementConfig,
    layout: Box<dyn LayoutProvider>,
    capture: Rc<dyn PointerCapture>,
    hooks: Box<dyn GestureHooks>,
}

impl ElementBuilder {
    pub fn layout(mut self, layout: impl LayoutProvider + 'static) -> Self {
        self.layout = Box::new(layout);
        self
    }

    pub fn capture(mut self, capture: Rc<dyn PointerCapture>) -> Self {
        self.capture = capture;
        self
    }

    pub fn hooks(mut self, hooks: impl GestureHooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    /// Validate the configuration, measure the container and content, and
    /// create the element's geometry.
    pub fn mount(self) -> ConfigResult<Element> {
        let Self {
            mut config,
            layout,
            capture,
            hooks,
        } = self;

        let warnings = config.validate()?;
        let parent = resolve_parent(&config.parent, layout.as_ref())?;

        let (width, height) = match (config.width, config.height) {
            (Dimension::Px(w), Dimension::Px(h)) => (w, h),
            (w, h) => {
                let axis = if w == Dimension::Auto { "width" } else { "height" };
                let (iw, ih) = layout.intrinsic_size().ok_or(ConfigError::UnmeasuredAutoSize(axis))?;
                let pick = |dimension: Dimension, intrinsic: f64| match dimension {
                    Dimension::Px(value) => value,
                    Dimension::Auto => intrinsic,
                };
                (pick(w, iw), pick(h, ih))
            }
        };

        let mut geometry = GeometryState::new(config.x, config.y, width, height, config.rotate);
        if let Some(ratio) = config.outside_aspect_ratio.filter(|r| *r > 0.0) {
            geometry.aspect_factor = ratio;
        }
        geometry.z_index = config.z_index;
        geometry.enabled = config.active;
        geometry.set_parent(parent);

        debug!(
            "[dragresize] Mounted {}x{} at ({}, {}), contained: {}",
            width,
            height,
            config.x,
            config.y,
            parent.is_some()
        );

        Ok(Element {
            zoom: config.scale_ratio,
            config,
            geometry,
            state: GestureState::Idle,
            warnings,
            layout,
            capture,
            hooks,
        })
    }
}

/// Resolve the containment mode to a container rect.
///
/// A direct parent is measured with its size rounded to whole pixels. A
/// selector that matches nothing is an error; a missing direct parent only
/// disables containment.
fn resolve_parent(containment: &Containment, layout: &dyn LayoutProvider) -> ConfigResult<Option<ContainerRect>> {
    match containment {
        Containment::None => Ok(None),
        Containment::Parent => {
            let rect = layout.parent_rect().map(|rect| ContainerRect {
                width: rect.width.round(),
                height: rect.height.round(),
                ..rect
            });
            if rect.is_none() {
                warn!("[dragresize] Parent containment requested but the element has no parent");
            }
            Ok(rect)
        }
        Containment::Selector(selector) => layout
            .query(selector)
            .map(Some)
            .ok_or_else(|| ConfigError::UnknownParentSelector(selector.clone())),
    }
}

/// One draggable, resizable, rotatable element
pub struct Element {
    pub(super) config: ElementConfig,
    pub(super) geometry: GeometryState,
    pub(super) state: GestureState,
    pub(super) zoom: f64,
    warnings: Vec<ConfigWarning>,
    layout: Box<dyn LayoutProvider>,
    pub(super) capture: Rc<dyn PointerCapture>,
    pub(super) hooks: Box<dyn GestureHooks>,
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("geometry", &self.geometry)
            .field("state", &self.state)
            .field("zoom", &self.zoom)
            .finish_non_exhaustive()
    }
}

impl Element {
    /// Start building an element with a static empty layout, no capture and
    /// no hooks.
    pub fn builder(config: ElementConfig) -> ElementBuilder {
        ElementBuilder {
            config,
            layout: Box::new(StaticLayout::new()),
            capture: Rc::new(NoCapture),
            hooks: Box::new(NoHooks),
        }
    }

    /// Tear the element down. Any running gesture releases its listeners.
    pub fn unmount(mut self) -> GeometryState {
        self.state.reset();
        debug!("[dragresize] Unmounted");
        self.geometry
    }

    pub fn geometry(&self) -> &GeometryState {
        &self.geometry
    }

    pub fn config(&self) -> &ElementConfig {
        &self.config
    }

    /// Warnings produced while validating the configuration
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    pub fn is_enabled(&self) -> bool {
        self.geometry.enabled
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn is_resizing(&self) -> bool {
        self.state.is_resizing()
    }

    pub fn is_rotating(&self) -> bool {
        self.state.is_rotating()
    }

    pub fn gesture(&self) -> Option<GestureKind> {
        self.state.kind()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Change the surface zoom. A running gesture keeps the zoom it started with.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom > 0.0 && zoom.is_finite() {
            self.zoom = zoom;
        } else {
            debug!("[dragresize] Ignoring invalid zoom {}", zoom);
        }
    }

    /// Handles to draw, in configured order
    pub fn visible_handles(&self) -> Vec<HandleId> {
        self.config
            .handles
            .iter()
            .copied()
            .filter(|handle| {
                if handle.is_resize() {
                    self.config.resizable
                } else {
                    self.config.rotatable
                }
            })
            .collect()
    }

    /// Resize cursor for `handle` at the current rotation
    pub fn handle_cursor(&self, handle: HandleId) -> Option<ResizeCursor> {
        cursor_for(handle, self.geometry.rotate)
    }

    /// Resolve what a page-space point hits. Handles only exist while the
    /// element is active; the rotate handle is tested first.
    pub fn target_at(&self, point: Point) -> PointerTarget {
        let handles: Vec<HandleId> = if self.geometry.enabled {
            let mut visible = self.visible_handles();
            visible.sort_by_key(|handle| handle.is_resize());
            visible
        } else {
            Vec::new()
        };
        let layout = HandleLayout::from(self.config.handle_info);
        hit_test(&self.geometry, point, self.zoom, layout, &handles)
    }

    /// Activate or deactivate the element. Deactivation ends a running
    /// gesture without a stop event.
    pub fn set_active(&mut self, active: bool) -> Vec<GestureEvent> {
        if active == self.geometry.enabled {
            return Vec::new();
        }
        self.geometry.enabled = active;
        if active {
            debug!("[dragresize] Activated");
            vec![GestureEvent::Activated]
        } else {
            self.state.reset();
            debug!("[dragresize] Deactivated");
            vec![GestureEvent::Deactivated]
        }
    }

    /// Re-measure the container after it changed size and recompute
    /// `right`/`bottom`. Does nothing for uncontained elements.
    pub fn refresh_parent_size(&mut self) -> ConfigResult<()> {
        if self.config.parent == Containment::None {
            return Ok(());
        }
        let parent = resolve_parent(&self.config.parent, self.layout.as_ref())?;
        self.geometry.set_parent(parent);
        Ok(())
    }

    /// Replace the layout provider, typically followed by
    /// [`refresh_parent_size`](Self::refresh_parent_size)
    pub fn set_layout(&mut self, layout: impl LayoutProvider + 'static) {
        self.layout = Box::new(layout);
    }
}
