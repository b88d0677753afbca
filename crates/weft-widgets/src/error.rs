#![forbid(unsafe_code)]

//! Errors from mounting and updating elements.

use std::fmt;

/// Failure while mounting, updating or binding an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The native backend could not allocate resources for a new element.
    Mount {
        kind: &'static str,
        message: String,
    },
    /// An element could not apply new properties.
    Update {
        kind: &'static str,
        message: String,
    },
    /// A native binding call failed.
    Native(String),
    /// An element was handed a widget of a different kind.
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl Error {
    /// A mount failure for `kind`.
    pub fn mount(kind: &crate::Kind, message: impl Into<String>) -> Self {
        Self::Mount {
            kind: kind.name(),
            message: message.into(),
        }
    }

    /// An update failure for `kind`.
    pub fn update(kind: &crate::Kind, message: impl Into<String>) -> Self {
        Self::Update {
            kind: kind.name(),
            message: message.into(),
        }
    }

    /// Whether this came from mounting.
    pub fn is_mount(&self) -> bool {
        matches!(self, Self::Mount { .. } | Self::Native(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Mount { kind, message } => write!(f, "failed to mount {kind}: {message}"),
            Error::Update { kind, message } => write!(f, "failed to update {kind}: {message}"),
            Error::Native(msg) => write!(f, "native backend error: {msg}"),
            Error::KindMismatch { expected, found } => {
                write!(f, "kind mismatch: expected {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Standard result type for widget operations.
pub type Result<T> = std::result::Result<T, Error>;
