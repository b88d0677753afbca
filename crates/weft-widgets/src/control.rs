#![forbid(unsafe_code)]

//! Native bindings.
//!
//! A [`Surface`] is the platform's widget toolkit as seen by elements: it
//! creates child controls under a parent, positions them in pixels and
//! destroys them. Elements reach it through the [`Control`] handed to
//! [`Widget::mount`](crate::Widget::mount), and hold the controls they
//! create in a [`NativeControl`], which destroys its handle exactly once.
//!
//! Surfaces are GUI-thread objects. `Control` holds an `Rc`, so elements
//! built on it are neither `Send` nor `Sync`.

use std::fmt;
use std::rc::Rc;

use weft_core::{Density, PixelRect, Rectangle};

use crate::Error;

/// Opaque identifier of a native control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NativeHandle(u64);

impl NativeHandle {
    /// Wrap a backend-specific identifier.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The backend-specific identifier.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A platform widget toolkit.
pub trait Surface: fmt::Debug {
    /// Backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Create a control of `class` under `parent`.
    fn create(&self, parent: NativeHandle, class: &'static str) -> Result<NativeHandle, Error>;

    /// Destroy a control and release its resources.
    fn destroy(&self, handle: NativeHandle);

    /// Position a control, in pixels relative to its parent.
    fn set_bounds(&self, handle: NativeHandle, bounds: PixelRect);

    /// Density used to convert lengths for this surface.
    fn density(&self) -> Density {
        weft_core::density::global()
    }
}

/// A parent under which elements create their native controls.
#[derive(Clone)]
pub struct Control {
    handle: NativeHandle,
    surface: Rc<dyn Surface>,
}

impl Control {
    /// A parent for `handle` on `surface`.
    pub fn new(surface: Rc<dyn Surface>, handle: NativeHandle) -> Self {
        Self { handle, surface }
    }

    /// Native handle of the parent.
    pub fn handle(&self) -> NativeHandle {
        self.handle
    }

    /// Density of the underlying surface.
    pub fn density(&self) -> Density {
        self.surface.density()
    }

    /// Create a child control of `class`.
    pub fn create_child(&self, class: &'static str) -> Result<NativeControl, Error> {
        let handle = self.surface.create(self.handle, class)?;
        weft_core::trace!(parent = %self.handle, child = %handle, class, "native control created");
        Ok(NativeControl {
            handle: Some(handle),
            surface: Rc::clone(&self.surface),
        })
    }
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("handle", &self.handle)
            .field("surface", &self.surface.name())
            .finish()
    }
}

/// An owned native control.
///
/// Destroyed on [`close`](Self::close) or on drop, whichever comes first.
pub struct NativeControl {
    handle: Option<NativeHandle>,
    surface: Rc<dyn Surface>,
}

impl NativeControl {
    /// Handle of the control, or `None` once closed.
    pub fn handle(&self) -> Option<NativeHandle> {
        self.handle
    }

    /// Whether the control has been destroyed.
    pub fn is_closed(&self) -> bool {
        self.handle.is_none()
    }

    /// This control as a parent for further children.
    pub fn as_parent(&self) -> Option<Control> {
        self.handle.map(|handle| Control {
            handle,
            surface: Rc::clone(&self.surface),
        })
    }

    /// Position the control. No-op once closed.
    pub fn set_bounds(&self, bounds: Rectangle) {
        if let Some(handle) = self.handle {
            let px = bounds.pixels(self.surface.density());
            self.surface.set_bounds(handle, px);
        }
    }

    /// Destroy the control. Later calls do nothing.
    pub fn close(&mut self) {
        if let Some(handle) = self.handle.take() {
            weft_core::trace!(handle = %handle, "native control destroyed");
            self.surface.destroy(handle);
        }
    }
}

impl Drop for NativeControl {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for NativeControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeControl")
            .field("handle", &self.handle)
            .field("surface", &self.surface.name())
            .finish()
    }
}
