#![forbid(unsafe_code)]

//! Panics captured on one thread and re-raised on another.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, PoisonError};
use std::thread;

type Payload = Box<dyn Any + Send + 'static>;

/// A panic caught while running an action.
///
/// Keeps the original payload so that [`resume`](Self::resume) re-raises
/// exactly what was thrown.
pub struct PanicError {
    message: String,
    thread: Option<String>,
    payload: Mutex<Option<Payload>>,
}

impl PanicError {
    fn new(payload: Payload) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Box<dyn Any>".to_string()
        };
        Self {
            message,
            thread: thread::current().name().map(str::to_string),
            payload: Mutex::new(Some(payload)),
        }
    }

    /// The panic message, when the payload was a string.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Name of the thread that panicked.
    pub fn thread(&self) -> Option<&str> {
        self.thread.as_deref()
    }

    /// Re-raise the panic on the current thread.
    pub fn resume(self) -> ! {
        let payload = self
            .payload
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        match payload {
            Some(payload) => panic::resume_unwind(payload),
            None => panic::resume_unwind(Box::new(self.message)),
        }
    }
}

impl fmt::Debug for PanicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanicError")
            .field("message", &self.message)
            .field("thread", &self.thread)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for PanicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.thread {
            Some(name) => write!(f, "panic on thread '{name}': {}", self.message),
            None => write!(f, "panic: {}", self.message),
        }
    }
}

impl std::error::Error for PanicError {}

/// Run `f`, converting a panic into a [`PanicError`].
pub fn capture<F, T>(f: F) -> Result<T, PanicError>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(PanicError::new)
}
