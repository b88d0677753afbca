#![forbid(unsafe_code)]

//! Core: device-independent lengths, 2-D geometry and display density.

pub mod density;
pub mod geometry;
pub mod logging;

pub use density::Density;
pub use geometry::{Length, PixelPoint, PixelRect, PixelSize, Point, Rectangle, Size};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span, warn};
