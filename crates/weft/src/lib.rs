#![forbid(unsafe_code)]

//! Weft public facade crate.
//!
//! Re-exports the geometry, layout, widget and runtime types applications
//! use day to day, a unified [`Error`], and a [`prelude`].

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use weft_core::{Density, Length, PixelRect, Point, Rectangle, Size};

// --- Layout re-exports -----------------------------------------------------

pub use weft_layout::{Constraints, Insets};

// --- Widget re-exports -----------------------------------------------------

pub use weft_widgets::{
    Control, Element, HeadlessSurface, Kind, NativeControl, NativeHandle, NilElement, NilWidget,
    Padding, Surface, Widget, diff_child, diff_children, mount,
};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use weft_runtime::{
    Backend, BackendFeatures, EventLoop, InlineBackend, PanicError, QueueBackend,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for weft apps.
#[derive(Debug)]
pub enum Error {
    /// Mounting or updating an element failed.
    Widget(weft_widgets::Error),
    /// The event loop refused or failed a request.
    #[cfg(feature = "runtime")]
    Runtime(weft_runtime::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Widget(err) => write!(f, "{err}"),
            #[cfg(feature = "runtime")]
            Self::Runtime(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Widget(err) => Some(err),
            #[cfg(feature = "runtime")]
            Self::Runtime(err) => Some(err),
        }
    }
}

impl From<weft_widgets::Error> for Error {
    fn from(err: weft_widgets::Error) -> Self {
        Self::Widget(err)
    }
}

#[cfg(feature = "runtime")]
impl From<weft_runtime::Error> for Error {
    fn from(err: weft_runtime::Error) -> Self {
        Self::Runtime(err)
    }
}

/// Standard result type for weft APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Constraints, Control, Element, Error, Insets, Kind, Length, Point, Rectangle, Result,
        Size, Widget, diff_child, diff_children,
    };
    #[cfg(feature = "runtime")]
    pub use crate::{EventLoop, QueueBackend};

    pub use crate::{core, layout, widgets};
    #[cfg(feature = "runtime")]
    pub use crate::runtime;
}

pub use weft_core as core;
pub use weft_layout as layout;
#[cfg(feature = "runtime")]
pub use weft_runtime as runtime;
pub use weft_widgets as widgets;
