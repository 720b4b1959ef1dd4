//! Element configuration.
//!
//! [`ElementConfig`] carries everything a host supplies when mounting an
//! element. Every field has a default, so a JSON document only needs the
//! values it changes:
//!
//! ```json
//! { "x": 40, "y": 40, "width": 320, "height": "auto", "grid": [10, 10], "parent": true }
//! ```
//!
//! [`ElementConfig::validate`] runs once at mount. It rejects values the
//! engine cannot work with and repairs the rest, logging a warning for each
//! repair.

use crate::constants::{DEFAULT_GRID, DEFAULT_HANDLE_OFFSET, DEFAULT_HANDLE_SIZE, DEFAULT_SIZE, DEFAULT_ZOOM};
use crate::error::{ConfigError, ConfigResult, ConfigWarning};
use crate::geometry::{HandleLayout, ResizeLimits};
use crate::types::{Axis, HandleId, ZIndex};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Width or height: a fixed pixel value or measured from content
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Auto,
    #[serde(untagged)]
    Px(f64),
}

/// Which container, if any, the element is kept inside.
///
/// In JSON: `false` (none), `true` (the element's parent) or a selector string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawContainment", into = "RawContainment")]
pub enum Containment {
    #[default]
    None,
    Parent,
    Selector(String),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawContainment {
    Flag(bool),
    Selector(String),
}

impl From<RawContainment> for Containment {
    fn from(raw: RawContainment) -> Self {
        match raw {
            RawContainment::Flag(false) => Self::None,
            RawContainment::Flag(true) => Self::Parent,
            RawContainment::Selector(selector) => Self::Selector(selector),
        }
    }
}

impl From<Containment> for RawContainment {
    fn from(containment: Containment) -> Self {
        match containment {
            Containment::None => Self::Flag(false),
            Containment::Parent => Self::Flag(true),
            Containment::Selector(selector) => Self::Selector(selector),
        }
    }
}

/// On-screen handle size and edge offset, in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleInfo {
    pub size: f64,
    pub offset: f64,
}

impl Default for HandleInfo {
    fn default() -> Self {
        Self {
            size: DEFAULT_HANDLE_SIZE,
            offset: DEFAULT_HANDLE_OFFSET,
        }
    }
}

impl From<HandleInfo> for HandleLayout {
    fn from(info: HandleInfo) -> Self {
        Self {
            size: info.size,
            offset: info.offset,
        }
    }
}

/// Initial geometry and behavior of one element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementConfig {
    pub x: f64,
    pub y: f64,
    pub width: Dimension,
    pub height: Dimension,
    pub z_index: ZIndex,
    /// Initial rotation in degrees
    pub rotate: f64,

    pub min_width: f64,
    /// `None` means unlimited (up to the engine's hard cap)
    pub max_width: Option<f64>,
    pub min_height: f64,
    pub max_height: Option<f64>,

    /// Grid step `[x, y]` in element pixels
    pub grid: [f64; 2],
    pub axis: Axis,
    /// Zoom of the surface the element is drawn on
    pub scale_ratio: f64,

    pub lock_aspect_ratio: bool,
    /// Width/height ratio to lock to instead of the initial size's
    pub outside_aspect_ratio: Option<f64>,

    pub draggable: bool,
    pub resizable: bool,
    pub rotatable: bool,
    /// Keep the element active when the user presses outside it
    pub prevent_deactivation: bool,
    /// Start active
    pub active: bool,
    /// Only [`PointerTarget::DragHandle`](crate::PointerTarget::DragHandle) presses start a drag
    pub require_drag_handle: bool,

    pub handles: Vec<HandleId>,
    pub handle_info: HandleInfo,
    pub parent: Containment,
}

impl Default for ElementConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: Dimension::Px(DEFAULT_SIZE),
            height: Dimension::Px(DEFAULT_SIZE),
            z_index: ZIndex::Auto,
            rotate: 0.0,
            min_width: 0.0,
            max_width: None,
            min_height: 0.0,
            max_height: None,
            grid: DEFAULT_GRID,
            axis: Axis::Both,
            scale_ratio: DEFAULT_ZOOM,
            lock_aspect_ratio: false,
            outside_aspect_ratio: None,
            draggable: true,
            resizable: true,
            rotatable: false,
            prevent_deactivation: false,
            active: false,
            require_drag_handle: false,
            handles: HandleId::ALL.to_vec(),
            handle_info: HandleInfo::default(),
            parent: Containment::None,
        }
    }
}

impl ElementConfig {
    /// Parse a JSON configuration; missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check and repair the configuration.
    ///
    /// Non-positive explicit sizes are fatal. Inconsistent min/max pairs are
    /// kept but ignored by [`resize_limits`](Self::resize_limits); bad grid
    /// steps and scale ratios fall back to 1; duplicate handles are dropped.
    /// Every repair is logged and returned.
    pub fn validate(&mut self) -> ConfigResult<Vec<ConfigWarning>> {
        for (axis, dimension) in [("width", self.width), ("height", self.height)] {
            if let Dimension::Px(value) = dimension {
                if !(value > 0.0) {
                    return Err(ConfigError::InvalidDimension { axis, value });
                }
            }
        }

        let mut warnings = Vec::new();

        if let Some(max) = self.max_width {
            if self.min_width > max {
                warnings.push(ConfigWarning::MinWidthExceedsMax { min: self.min_width, max });
            }
        }
        if let Some(max) = self.max_height {
            if self.min_height > max {
                warnings.push(ConfigWarning::MinHeightExceedsMax { min: self.min_height, max });
            }
        }

        for (axis, step) in ["x", "y"].into_iter().zip(self.grid.iter_mut()) {
            if !(*step > 0.0) || !step.is_finite() {
                warnings.push(ConfigWarning::InvalidGridStep { axis, value: *step });
                *step = 1.0;
            }
        }

        if !(self.scale_ratio > 0.0) || !self.scale_ratio.is_finite() {
            warnings.push(ConfigWarning::InvalidScaleRatio(self.scale_ratio));
            self.scale_ratio = DEFAULT_ZOOM;
        }

        let mut seen = Vec::with_capacity(self.handles.len());
        for handle in self.handles.drain(..) {
            if seen.contains(&handle) {
                warnings.push(ConfigWarning::DuplicateHandle(handle.as_str()));
            } else {
                seen.push(handle);
            }
        }
        self.handles = seen;

        for warning in &warnings {
            warn!("[dragresize] Invalid config: {}", warning);
        }
        Ok(warnings)
    }

    /// Resize limits: the engine's defaults tightened by any consistent
    /// configured min/max pair.
    pub fn resize_limits(&self) -> ResizeLimits {
        let pair = |min: f64, max: Option<f64>| {
            let max = max.unwrap_or(f64::INFINITY);
            (min <= max).then_some((min, max))
        };
        ResizeLimits::with_configured(
            pair(self.min_width, self.max_width),
            pair(self.min_height, self.max_height),
        )
    }
}
