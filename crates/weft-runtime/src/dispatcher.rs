#![forbid(unsafe_code)]

//! The GUI event loop and cross-thread dispatch.
//!
//! Exactly one thread runs the loop at a time. [`EventLoop::run`] claims the
//! loop with a non-blocking compare-and-swap, so a second caller fails with
//! [`Error::AlreadyRunning`] instead of waiting. Other threads reach the GUI
//! thread through [`EventLoop::dispatch`], which blocks until the action has
//! run there.
//!
//! The loop stays alive while the lock count, the number of open top-level
//! roots, is positive. Windows call [`EventLoop::add_lock_count`] as they
//! open and close; when the count returns to zero the backend is asked to
//! stop.
//!
//! # Caller contract
//!
//! `dispatch` must not be called from the GUI thread with a queueing
//! backend: the action waits behind the caller and the two deadlock.
//!
//! An action posted while the loop is shutting down may never run. Its
//! caller receives [`Error::NotRunning`].

use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{OnceLock, mpsc};
use std::thread::{self, ThreadId};

use std::time::Instant;

use crate::backend::{Backend, Pump, QueueBackend};
use crate::debug_trace::{self, Timings};
use crate::error::{BoxError, Error};
use crate::nopanic;

/// A single-threaded GUI event loop over a [`Backend`].
pub struct EventLoop {
    backend: Box<dyn Backend>,
    running: AtomicBool,
    lock_count: AtomicI32,
    gui_thread: OnceLock<ThreadId>,
}

struct ClearOnDrop<'a>(&'a AtomicBool);

impl Drop for ClearOnDrop<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

struct TerminateOnDrop<'a>(&'a dyn Backend);

impl Drop for TerminateOnDrop<'_> {
    fn drop(&mut self) {
        self.0.terminate();
    }
}

struct ReleaseOnDrop<'a>(&'a AtomicI32);

impl Drop for ReleaseOnDrop<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

impl EventLoop {
    /// An idle event loop over `backend`.
    pub fn new(backend: impl Backend + 'static) -> Self {
        Self::with_backend(Box::new(backend))
    }

    /// An idle event loop over a boxed backend.
    pub fn with_backend(backend: Box<dyn Backend>) -> Self {
        Self {
            backend,
            running: AtomicBool::new(false),
            lock_count: AtomicI32::new(0),
            gui_thread: OnceLock::new(),
        }
    }

    /// Name of the backend.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Whether the loop is running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Current lock count.
    pub fn lock_count(&self) -> i32 {
        self.lock_count.load(Ordering::Acquire)
    }

    /// Run the event loop on the calling thread.
    ///
    /// `init` runs first, on this thread, while the lock count is held one
    /// above its real value, so roots opened and closed during `init` do not
    /// end the loop early. If `init` fails the loop is never entered. If no
    /// roots remain open after `init`, `run` returns at once. Otherwise it
    /// pumps the backend until the lock count drops to zero.
    pub fn run<F>(&self, init: F) -> Result<(), Error>
    where
        F: FnOnce() -> Result<(), BoxError>,
    {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(Error::AlreadyRunning);
        }
        let _running = ClearOnDrop(&self.running);

        if self.backend.features().pinned_thread {
            let current = thread::current().id();
            if *self.gui_thread.get_or_init(|| current) != current {
                return Err(Error::ThreadMismatch);
            }
        }

        let backend = self.backend.name();
        self.backend.init()?;
        let _terminate = TerminateOnDrop(&*self.backend);
        tracing::debug!(backend, "event loop started");

        {
            self.lock_count.fetch_add(1, Ordering::AcqRel);
            let _hold = ReleaseOnDrop(&self.lock_count);
            init().map_err(Error::Action)?;
        }

        let lock_count = self.lock_count();
        if lock_count <= 0 {
            tracing::debug!(backend, lock_count, "no roots open after init");
            return Ok(());
        }

        let mut pumped: u64 = 0;
        let mut timings = Timings::default();
        loop {
            let started = debug_trace::stamp();
            let step = self.backend.pump();
            timings.record_since(started);
            if step == Pump::Exit {
                break;
            }
            pumped += 1;
        }
        tracing::debug!(backend, pumped, "event loop stopped");
        if timings.count > 0 {
            crate::debug_trace!(
                "pump timings: iterations={} slowest={:?} mean={:?}",
                timings.count,
                timings.slowest,
                timings.mean()
            );
        }
        Ok(())
    }

    /// Run `action` on the GUI thread and wait for its result.
    ///
    /// A panic inside `action` is caught on the GUI thread and returned as
    /// [`Error::Panicked`]; call [`PanicError::resume`](crate::PanicError::resume)
    /// (or [`Error::resume_panic`]) to re-raise it here.
    pub fn dispatch<F, T>(&self, action: F) -> Result<T, Error>
    where
        F: FnOnce() -> Result<T, BoxError> + Send + 'static,
        T: Send + 'static,
    {
        if !self.is_running() {
            return Err(Error::NotRunning);
        }

        let (reply, outcome) = mpsc::sync_channel(1);
        let posted = debug_trace::stamp();
        self.backend.post(Box::new(move || {
            let started = posted.map(|posted| (posted.elapsed(), Instant::now()));
            let result = nopanic::capture(action);
            if let Some((queued, started)) = started {
                crate::debug_trace!("task: queued={:?} ran={:?}", queued, started.elapsed());
            }
            // The caller may have given up waiting.
            let _ = reply.send(result);
        }))?;

        match outcome.recv() {
            Ok(Ok(result)) => result.map_err(Error::Action),
            Ok(Err(panic)) => {
                tracing::warn!(
                    backend = self.backend.name(),
                    panic = panic.message(),
                    "dispatched action panicked"
                );
                Err(Error::Panicked(panic))
            }
            Err(_) => {
                tracing::debug!(
                    backend = self.backend.name(),
                    "dispatched action dropped by shutdown"
                );
                Err(Error::NotRunning)
            }
        }
    }

    /// Adjust the lock count by `delta`.
    ///
    /// When the count reaches zero the backend is asked to stop.
    ///
    /// # Panics
    ///
    /// Panics if the loop is not running.
    pub fn add_lock_count(&self, delta: i32) {
        if !self.is_running() {
            panic!("add_lock_count({delta}): {}", Error::NotRunning);
        }
        let lock_count = self.lock_count.fetch_add(delta, Ordering::AcqRel) + delta;
        tracing::trace!(delta, lock_count, "lock count changed");
        if lock_count == 0 && self.is_running() {
            self.backend.stop();
        }
    }
}

impl std::fmt::Debug for EventLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLoop")
            .field("backend", &self.backend.name())
            .field("running", &self.is_running())
            .field("lock_count", &self.lock_count())
            .finish()
    }
}

// ============================================================================
// Process-wide loop
// ============================================================================

static GLOBAL: OnceLock<EventLoop> = OnceLock::new();

/// The process-wide event loop, created with a [`QueueBackend`] on first use.
pub fn global() -> &'static EventLoop {
    GLOBAL.get_or_init(|| EventLoop::new(QueueBackend::new()))
}

/// Install `backend` as the process-wide event loop.
///
/// Must happen before the first use of [`global`]; fails with
/// [`Error::Backend`] once a global loop exists.
pub fn install_global(backend: impl Backend + 'static) -> Result<&'static EventLoop, Error> {
    let mut installed = false;
    let event_loop = GLOBAL.get_or_init(|| {
        installed = true;
        EventLoop::new(backend)
    });
    if installed {
        Ok(event_loop)
    } else {
        Err(Error::Backend(format!(
            "global event loop already uses the {} backend",
            event_loop.backend_name()
        )))
    }
}

/// [`EventLoop::run`] on the [`global`] loop.
pub fn run<F>(init: F) -> Result<(), Error>
where
    F: FnOnce() -> Result<(), BoxError>,
{
    global().run(init)
}

/// [`EventLoop::dispatch`] on the [`global`] loop.
pub fn dispatch<F, T>(action: F) -> Result<T, Error>
where
    F: FnOnce() -> Result<T, BoxError> + Send + 'static,
    T: Send + 'static,
{
    global().dispatch(action)
}

/// [`EventLoop::add_lock_count`] on the [`global`] loop.
pub fn add_lock_count(delta: i32) {
    global().add_lock_count(delta);
}

/// [`EventLoop::lock_count`] on the [`global`] loop.
pub fn lock_count() -> i32 {
    global().lock_count()
}

/// [`EventLoop::is_running`] on the [`global`] loop.
pub fn is_running() -> bool {
    global().is_running()
}
