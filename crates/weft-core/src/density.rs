#![forbid(unsafe_code)]

//! Display density.
//!
//! Geometry conversions take a [`Density`] argument. Platform code that
//! tracks the active display publishes the current value with
//! [`set_global`]; everything else reads it with [`global`] and passes it on.
//!
//! The initial global value comes from `WEFT_DPI` (`"144"` or `"144,96"`),
//! falling back to 96 dots per inch on both axes.

use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Dots per inch along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Density {
    pub x: u32,
    pub y: u32,
}

impl Density {
    /// The nominal density: 96 dots per inch, one pixel per DIP.
    pub const NOMINAL: Self = Self { x: 96, y: 96 };

    /// Create a density. Zero resolutions are raised to one.
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self {
            x: if x == 0 { 1 } else { x },
            y: if y == 0 { 1 } else { y },
        }
    }

    /// Same resolution on both axes.
    #[inline]
    pub const fn uniform(dpi: u32) -> Self {
        Self::new(dpi, dpi)
    }

    /// Horizontal scale factor relative to nominal.
    pub fn scale_factor_x(&self) -> f64 {
        f64::from(self.x) / 96.0
    }

    /// Vertical scale factor relative to nominal.
    pub fn scale_factor_y(&self) -> f64 {
        f64::from(self.y) / 96.0
    }

    /// Parse `"N"` or `"X,Y"`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split(',').map(str::trim);
        let x: u32 = parts.next()?.parse().ok()?;
        let y: u32 = match parts.next() {
            Some(p) => p.parse().ok()?,
            None => x,
        };
        if parts.next().is_some() || x == 0 || y == 0 {
            return None;
        }
        Some(Self::new(x, y))
    }

    /// Density from `WEFT_DPI`, if set and valid.
    pub fn from_env() -> Option<Self> {
        std::env::var("WEFT_DPI").ok().and_then(|v| Self::parse(&v))
    }

    const fn pack(self) -> u64 {
        ((self.x as u64) << 32) | self.y as u64
    }

    const fn unpack(v: u64) -> Self {
        Self::new((v >> 32) as u32, v as u32)
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::NOMINAL
    }
}

static GLOBAL: LazyLock<AtomicU64> =
    LazyLock::new(|| AtomicU64::new(Density::from_env().unwrap_or_default().pack()));

/// The process-wide density.
pub fn global() -> Density {
    Density::unpack(GLOBAL.load(Ordering::Acquire))
}

/// Publish a new process-wide density.
pub fn set_global(density: Density) {
    let previous = Density::unpack(GLOBAL.swap(density.pack(), Ordering::AcqRel));
    if previous != density {
        crate::debug!(
            x = density.x,
            y = density.y,
            "display density changed"
        );
    }
}
