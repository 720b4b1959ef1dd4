//! Error types for element configuration
//!
//! Configuration problems are detected once, at mount. Fatal ones abort the
//! mount with a [`ConfigError`]; recoverable ones are logged and collected as
//! [`ConfigWarning`]s while the element falls back to a best-effort value.
//! Pointer handling itself never fails: a bad gesture degrades to a no-op.

use std::fmt;
use thiserror::Error;

/// Errors that prevent an element from being mounted
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configured parent selector matched no container
    #[error("The selector {0} does not match any element")]
    UnknownParentSelector(String),

    /// An explicit width or height was zero or negative
    #[error("Invalid {axis}: {value} (must be greater than 0)")]
    InvalidDimension { axis: &'static str, value: f64 },

    /// `auto` sizing was requested but the host could not measure the element
    #[error("Cannot resolve auto {0}: the element has no intrinsic size")]
    UnmeasuredAutoSize(&'static str),

    /// JSON configuration could not be parsed
    #[error("JSON config error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Non-fatal configuration problems
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// `min_width > max_width`; the configured width limits are ignored
    MinWidthExceedsMax { min: f64, max: f64 },
    /// `min_height > max_height`; the configured height limits are ignored
    MinHeightExceedsMax { min: f64, max: f64 },
    /// A grid step was zero or negative and has been replaced by 1
    InvalidGridStep { axis: &'static str, value: f64 },
    /// The scale ratio was zero, negative or not finite and has been replaced by 1
    InvalidScaleRatio(f64),
    /// A handle appeared more than once in the handle list
    DuplicateHandle(&'static str),
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinWidthExceedsMax { min, max } => {
                write!(f, "minWidth ({min}) cannot be greater than maxWidth ({max})")
            }
            Self::MinHeightExceedsMax { min, max } => {
                write!(f, "minHeight ({min}) cannot be greater than maxHeight ({max})")
            }
            Self::InvalidGridStep { axis, value } => {
                write!(f, "grid step {axis} must be positive, got {value}; using 1")
            }
            Self::InvalidScaleRatio(value) => {
                write!(f, "scaleRatio must be positive, got {value}; using 1")
            }
            Self::DuplicateHandle(handle) => write!(f, "handle {handle} listed more than once"),
        }
    }
}
