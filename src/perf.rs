//! Gesture-step timing.
//!
//! A pointer-move step must finish well inside one frame, otherwise the
//! element visibly lags the pointer. This module offers an RAII timer that
//! logs steps exceeding a budget, and a macro that compiles the timer in
//! only with the `profiling` feature:
//!
//! ```toml
//! [dependencies]
//! dragresize = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn pointer_move(&mut self, event: PointerEvent) {
//!     profile_scope!("pointer_move");
//!     // ... geometry work ...
//! }
//! ```

use crate::constants::STEP_BUDGET_MS;
use std::time::Instant;
use tracing::{trace, warn};

/// Time a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_step($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use crate::profile_scope;

/// Logs the lifetime of a scope when it is dropped.
///
/// Scopes over `threshold_ms` are reported with `warn!`, all others with
/// `trace!`.
#[derive(Debug)]
pub struct ScopedTimer {
    name: &'static str,
    threshold_ms: f64,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            threshold_ms,
            start: Instant::now(),
        }
    }

    /// Timer using the one-frame budget
    pub fn for_step(name: &'static str) -> Self {
        Self::new(name, STEP_BUDGET_MS)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Milliseconds since the timer started
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name(),
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow gesture step"
            );
        } else {
            trace!(operation = self.name(), elapsed_ms, "Gesture step");
        }
    }
}
