#![forbid(unsafe_code)]

//! Event loop errors.

use std::fmt;

use crate::nopanic::PanicError;

/// Boxed error returned by user actions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors from running the event loop or dispatching to it.
///
/// Match on the variant to tell conditions apart; messages are for humans.
#[derive(Debug)]
pub enum Error {
    /// The event loop is not running.
    NotRunning,
    /// The event loop is already running.
    AlreadyRunning,
    /// The backend pins the loop to a thread, and this is not that thread.
    ThreadMismatch,
    /// The native backend failed.
    Backend(String),
    /// A user action returned an error.
    Action(BoxError),
    /// A dispatched action panicked on the GUI thread.
    Panicked(PanicError),
}

impl Error {
    /// Re-raise a captured panic on the current thread; otherwise return the error.
    pub fn resume_panic(self) -> Self {
        match self {
            Error::Panicked(panic) => panic.resume(),
            other => other,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotRunning => f.write_str("GUI event loop is not running"),
            Error::AlreadyRunning => f.write_str("GUI event loop is already running"),
            Error::ThreadMismatch => {
                f.write_str("GUI event loop must run on the thread that first started it")
            }
            Error::Backend(msg) => write!(f, "event loop backend error: {msg}"),
            Error::Action(err) => write!(f, "action failed: {err}"),
            Error::Panicked(panic) => write!(f, "action panicked: {panic}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Action(err) => Some(&**err),
            Error::Panicked(panic) => Some(panic),
            _ => None,
        }
    }
}

impl From<PanicError> for Error {
    fn from(panic: PanicError) -> Self {
        Error::Panicked(panic)
    }
}

/// Standard result type for event loop operations.
pub type Result<T> = std::result::Result<T, Error>;
