#![forbid(unsafe_code)]

//! Loop timing diagnostics on stderr.
//!
//! Setting `WEFT_DEBUG_TRACE=1` makes the event loop report how long each
//! dispatched task waited in the queue and ran, and a summary of pump
//! iteration times when the loop stops. These are wall-clock measurements
//! that the `tracing` events do not carry. When the variable is unset no
//! clock is read: [`stamp`] returns `None` after one static bool load.
//!
//! ```ignore
//! use weft_runtime::debug_trace;
//! debug_trace!("pump iteration {}", count);
//! ```

use std::sync::LazyLock;
use std::time::{Duration, Instant};

static DEBUG_TRACE_ENABLED: LazyLock<bool> = LazyLock::new(|| {
    std::env::var("WEFT_DEBUG_TRACE")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Check if debug tracing is enabled.
#[inline]
pub fn is_enabled() -> bool {
    *DEBUG_TRACE_ENABLED
}

/// Milliseconds since the first trace call.
#[inline]
pub fn elapsed_ms() -> u64 {
    START_TIME.elapsed().as_millis() as u64
}

/// Start of a timed section, or `None` when tracing is off.
#[inline]
pub fn stamp() -> Option<Instant> {
    stamp_if(is_enabled())
}

fn stamp_if(enabled: bool) -> Option<Instant> {
    enabled.then(Instant::now)
}

/// Running statistics over repeated timed sections.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub count: u64,
    pub total: Duration,
    pub slowest: Duration,
}

impl Timings {
    /// Add one section that started at `started`, if it was timed.
    pub fn record_since(&mut self, started: Option<Instant>) {
        if let Some(started) = started {
            self.record(started.elapsed());
        }
    }

    /// Add one section of length `elapsed`.
    pub fn record(&mut self, elapsed: Duration) {
        self.count += 1;
        self.total += elapsed;
        self.slowest = self.slowest.max(elapsed);
    }

    /// Mean section length, zero when nothing was recorded.
    pub fn mean(&self) -> Duration {
        match u32::try_from(self.count) {
            Ok(0) => Duration::ZERO,
            Ok(n) => self.total / n,
            Err(_) => Duration::from_secs_f64(self.total.as_secs_f64() / self.count as f64),
        }
    }
}

/// Print a timestamped line to stderr when `WEFT_DEBUG_TRACE` is set.
#[macro_export]
macro_rules! debug_trace {
    ($($arg:tt)*) => {
        if $crate::debug_trace::is_enabled() {
            eprintln!(
                "[WEFT {:>8}ms] {}",
                $crate::debug_trace::elapsed_ms(),
                format_args!($($arg)*)
            );
        }
    };
}
