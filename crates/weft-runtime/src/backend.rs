#![forbid(unsafe_code)]

//! Native event loop bindings.
//!
//! A [`Backend`] is the part of the platform toolkit the dispatcher needs:
//! one-time setup and teardown, pumping the native queue, scheduling a task
//! on the GUI thread and asking the queue to stop.
//!
//! Two implementations ship with the crate:
//!
//! - [`QueueBackend`]: a channel drained by the GUI thread. Tasks posted from
//!   other threads wake the loop.
//! - [`InlineBackend`]: a cooperative backend. Posted tasks run immediately
//!   on the posting thread, and pumping just waits for `stop`.

use std::fmt;
use std::sync::mpsc;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use crate::Error;

/// A unit of work scheduled on the GUI thread.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Outcome of one [`Backend::pump`] iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pump {
    /// Keep pumping.
    Continue,
    /// The queue was asked to stop or shut down.
    Exit,
}

/// Capabilities and requirements of a backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackendFeatures {
    /// The loop must always run on the thread that first ran it.
    pub pinned_thread: bool,
}

impl BackendFeatures {
    /// No special requirements.
    pub const fn new() -> Self {
        Self {
            pinned_thread: false,
        }
    }

    /// Set whether the loop is pinned to its first thread.
    #[must_use]
    pub const fn pinned_thread(mut self, pinned: bool) -> Self {
        self.pinned_thread = pinned;
        self
    }
}

/// Platform event loop binding.
///
/// `init`, `pump` and `terminate` are only called on the GUI thread, from
/// inside [`EventLoop::run`](crate::EventLoop::run). `post` and `stop` may be
/// called from any thread.
pub trait Backend: Send + Sync {
    /// Backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Capabilities and requirements.
    fn features(&self) -> BackendFeatures {
        BackendFeatures::default()
    }

    /// Prepare the native queue. Called once per `run`.
    fn init(&self) -> Result<(), Error>;

    /// Process one event, blocking until one is available.
    fn pump(&self) -> Pump;

    /// Schedule `task` on the GUI thread.
    ///
    /// Fails with [`Error::NotRunning`] when the queue is not accepting work.
    fn post(&self, task: Task) -> Result<(), Error>;

    /// Ask the queue to stop once the current event has been processed.
    fn stop(&self);

    /// Release the native queue. Tasks not yet run are dropped.
    fn terminate(&self);
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// QueueBackend
// ============================================================================

enum Msg {
    Task(Task),
    Quit,
}

/// Channel-backed event queue.
pub struct QueueBackend {
    features: BackendFeatures,
    sender: Mutex<Option<mpsc::Sender<Msg>>>,
    receiver: Mutex<Option<mpsc::Receiver<Msg>>>,
}

impl QueueBackend {
    /// A queue with default features.
    pub fn new() -> Self {
        Self::with_features(BackendFeatures::default())
    }

    /// A queue advertising `features`.
    pub fn with_features(features: BackendFeatures) -> Self {
        Self {
            features,
            sender: Mutex::new(None),
            receiver: Mutex::new(None),
        }
    }
}

impl Default for QueueBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for QueueBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueBackend")
            .field("features", &self.features)
            .field("open", &lock(&self.sender).is_some())
            .finish()
    }
}

impl Backend for QueueBackend {
    fn name(&self) -> &'static str {
        "queue"
    }

    fn features(&self) -> BackendFeatures {
        self.features
    }

    fn init(&self) -> Result<(), Error> {
        let (tx, rx) = mpsc::channel();
        *lock(&self.sender) = Some(tx);
        *lock(&self.receiver) = Some(rx);
        Ok(())
    }

    fn pump(&self) -> Pump {
        let msg = {
            let receiver = lock(&self.receiver);
            match receiver.as_ref() {
                Some(rx) => rx.recv(),
                None => return Pump::Exit,
            }
        };
        match msg {
            Ok(Msg::Task(task)) => {
                task();
                Pump::Continue
            }
            Ok(Msg::Quit) | Err(_) => Pump::Exit,
        }
    }

    fn post(&self, task: Task) -> Result<(), Error> {
        let sender = lock(&self.sender);
        let Some(tx) = sender.as_ref() else {
            return Err(Error::NotRunning);
        };
        tx.send(Msg::Task(task)).map_err(|_| Error::NotRunning)
    }

    fn stop(&self) {
        if let Some(tx) = lock(&self.sender).as_ref() {
            // A closed channel already means stopped.
            let _ = tx.send(Msg::Quit);
        }
    }

    fn terminate(&self) {
        let pending = lock(&self.sender).take();
        drop(pending);
        let receiver = lock(&self.receiver).take();
        if let Some(rx) = receiver {
            let dropped = rx.try_iter().filter(|m| matches!(m, Msg::Task(_))).count();
            if dropped > 0 {
                tracing::debug!(dropped, "queued actions dropped at shutdown");
            }
        }
    }
}

// ============================================================================
// InlineBackend
// ============================================================================

/// Cooperative backend: tasks run on the thread that posts them.
#[derive(Debug, Default)]
pub struct InlineBackend {
    features: BackendFeatures,
    stopped: Mutex<bool>,
    wake: Condvar,
}

impl InlineBackend {
    /// A new inline backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// An inline backend advertising `features`.
    pub fn with_features(features: BackendFeatures) -> Self {
        Self {
            features,
            ..Self::default()
        }
    }
}

impl Backend for InlineBackend {
    fn name(&self) -> &'static str {
        "inline"
    }

    fn features(&self) -> BackendFeatures {
        self.features
    }

    fn init(&self) -> Result<(), Error> {
        *lock(&self.stopped) = false;
        Ok(())
    }

    fn pump(&self) -> Pump {
        let mut stopped = lock(&self.stopped);
        while !*stopped {
            stopped = self
                .wake
                .wait(stopped)
                .unwrap_or_else(PoisonError::into_inner);
        }
        Pump::Exit
    }

    fn post(&self, task: Task) -> Result<(), Error> {
        task();
        Ok(())
    }

    fn stop(&self) {
        *lock(&self.stopped) = true;
        self.wake.notify_all();
    }

    fn terminate(&self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    // --- QueueBackend ---

    #[test]
    fn queue_rejects_posts_before_init() {
        let backend = QueueBackend::new();
        assert!(matches!(backend.post(Box::new(|| {})), Err(Error::NotRunning)));
        assert_eq!(backend.pump(), Pump::Exit);
    }

    #[test]
    fn queue_runs_tasks_in_order_until_stop() {
        let backend = QueueBackend::new();
        backend.init().unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        for i in 0..3 {
            let seen = Arc::clone(&seen);
            backend
                .post(Box::new(move || seen.lock().unwrap().push(i)))
                .unwrap();
        }
        backend.stop();
        while backend.pump() == Pump::Continue {}
        assert_eq!(*seen.lock().unwrap(), [0, 1, 2]);
        backend.terminate();
    }

    #[test]
    fn queue_terminate_drops_pending_tasks() {
        let backend = QueueBackend::new();
        backend.init().unwrap();
        let (tx, rx) = mpsc::sync_channel::<()>(1);
        backend.stop();
        backend
            .post(Box::new(move || {
                let _ = tx.send(());
            }))
            .unwrap();
        assert_eq!(backend.pump(), Pump::Exit);
        backend.terminate();
        assert!(rx.recv().is_err());
        assert!(matches!(backend.post(Box::new(|| {})), Err(Error::NotRunning)));
    }

    #[test]
    fn queue_wakes_on_cross_thread_post() {
        let backend = Arc::new(QueueBackend::new());
        backend.init().unwrap();
        let ran = Arc::new(AtomicUsize::new(0));
        let poster = {
            let backend = Arc::clone(&backend);
            let ran = Arc::clone(&ran);
            thread::spawn(move || {
                backend
                    .post(Box::new(move || {
                        ran.fetch_add(1, Ordering::SeqCst);
                    }))
                    .unwrap();
                backend.stop();
            })
        };
        while backend.pump() == Pump::Continue {}
        poster.join().unwrap();
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }

    // --- InlineBackend ---

    #[test]
    fn inline_runs_on_posting_thread() {
        let backend = InlineBackend::new();
        backend.init().unwrap();
        let me = thread::current().id();
        let (tx, rx) = mpsc::channel();
        backend
            .post(Box::new(move || tx.send(thread::current().id()).unwrap()))
            .unwrap();
        assert_eq!(rx.recv().unwrap(), me);
    }

    #[test]
    fn inline_pump_returns_after_stop() {
        let backend = Arc::new(InlineBackend::new());
        backend.init().unwrap();
        let stopper = {
            let backend = Arc::clone(&backend);
            thread::spawn(move || backend.stop())
        };
        assert_eq!(backend.pump(), Pump::Exit);
        stopper.join().unwrap();
    }

    #[test]
    fn features_builder() {
        let f = BackendFeatures::new().pinned_thread(true);
        assert!(f.pinned_thread);
        assert!(QueueBackend::with_features(f).features().pinned_thread);
        assert!(!InlineBackend::new().features().pinned_thread);
    }
}
