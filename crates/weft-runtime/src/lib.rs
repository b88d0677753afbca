#![forbid(unsafe_code)]

//! Weft Runtime
//!
//! The single GUI-thread execution model.
//!
//! # Key Components
//!
//! - [`EventLoop`] - claims the GUI thread, pumps the native queue and
//!   accepts work from other threads
//! - [`Backend`] - the native queue binding, with [`QueueBackend`] and
//!   [`InlineBackend`] implementations
//! - [`PanicError`] - a panic carried from the GUI thread back to the caller
//!
//! Most applications use the process-wide loop through the free functions
//! [`run`], [`dispatch`] and [`add_lock_count`].
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//! use weft_runtime::{EventLoop, QueueBackend};
//!
//! let event_loop = Arc::new(EventLoop::new(QueueBackend::new()));
//! let (ready_tx, ready_rx) = std::sync::mpsc::channel();
//!
//! let gui = {
//!     let event_loop = Arc::clone(&event_loop);
//!     thread::spawn(move || {
//!         event_loop.run(|| {
//!             event_loop.add_lock_count(1); // a window opened
//!             ready_tx.send(()).unwrap();
//!             Ok(())
//!         })
//!     })
//! };
//!
//! ready_rx.recv().unwrap();
//! let worker_loop = Arc::clone(&event_loop);
//! let answer = event_loop
//!     .dispatch(move || {
//!         worker_loop.add_lock_count(-1); // the window closed
//!         Ok(42)
//!     })
//!     .unwrap();
//! assert_eq!(answer, 42);
//! gui.join().unwrap().unwrap();
//! ```

pub mod backend;
pub mod debug_trace;
pub mod dispatcher;
pub mod error;
pub mod nopanic;

pub use backend::{Backend, BackendFeatures, InlineBackend, Pump, QueueBackend, Task};
pub use dispatcher::{
    EventLoop, add_lock_count, dispatch, global, install_global, is_running, lock_count, run,
};
pub use error::{BoxError, Error, Result};
pub use nopanic::PanicError;
