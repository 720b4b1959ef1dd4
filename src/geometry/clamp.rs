//! Zoom-aware clamping of a coordinate moved by a pointer delta.

/// Outcome of [`restrict`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Restricted {
    /// The moved value, inside the limits
    pub value: f64,
    /// The part of the raw (on-screen) delta that was consumed before a limit was hit
    pub delta: f64,
}

/// Move `value` by `raw_delta / zoom` and clamp the result to `[min, max]`.
///
/// `raw_delta` is in screen pixels, `value` and the limits in element pixels.
/// When a limit is hit, the returned delta is shrunk to the movement that
/// actually happened; callers must use it (not `raw_delta`) for any
/// coordinate that follows this one, otherwise an anchor keeps moving after
/// the clamped edge has stopped.
pub fn restrict(
    value: f64,
    min: Option<f64>,
    max: Option<f64>,
    raw_delta: f64,
    zoom: f64,
) -> Restricted {
    let candidate = value + raw_delta / zoom;

    if let Some(min) = min {
        if candidate < min {
            return Restricted {
                value: min,
                delta: raw_delta - (candidate - min) * zoom,
            };
        }
    }
    if let Some(max) = max {
        if candidate > max {
            return Restricted {
                value: max,
                delta: raw_delta - (candidate - max) * zoom,
            };
        }
    }

    Restricted {
        value: candidate,
        delta: raw_delta,
    }
}
