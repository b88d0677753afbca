#![forbid(unsafe_code)]

//! The widget/element protocol.
//!
//! A [`Widget`] is an immutable description of a piece of UI. Mounting it
//! under a [`Control`] produces an [`Element`], the live, stateful
//! counterpart that owns native resources until it is closed.
//!
//! # Element lifecycle
//!
//! 1. Created by [`Widget::mount`].
//! 2. Any number of [`Element::layout`], [`Element::set_bounds`] and
//!    [`Element::update_props`] calls. `update_props` only ever receives a
//!    widget whose [`Widget::kind`] equals the element's [`Element::kind`].
//! 3. [`Element::close`], after which nothing else is called. `close` must
//!    tolerate being called more than once.

use std::any::Any;
use std::fmt;

use weft_core::{Length, Rectangle, Size};
use weft_layout::Constraints;

use crate::Error;
use crate::control::Control;
use crate::kind::Kind;
use crate::nil::{NilElement, NilWidget};

/// Upcast to [`Any`] for downcasting trait objects.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Immutable description of UI.
pub trait Widget: AsAny + fmt::Debug {
    /// Kind shared with the elements this widget mounts.
    fn kind(&self) -> &'static Kind;

    /// Create a live element under `parent`.
    fn mount(&self, parent: &Control) -> Result<Box<dyn Element>, Error>;
}

impl dyn Widget + '_ {
    /// Downcast to a concrete widget type.
    pub fn downcast_ref<W: Widget + 'static>(&self) -> Option<&W> {
        AsAny::as_any(self).downcast_ref::<W>()
    }

    /// Downcast to a concrete widget type, failing with
    /// [`Error::KindMismatch`] when the type differs.
    pub fn props<W: Widget + 'static>(&self, expected: &'static Kind) -> Result<&W, Error> {
        self.downcast_ref::<W>().ok_or(Error::KindMismatch {
            expected: expected.name(),
            found: self.kind().name(),
        })
    }
}

/// Live counterpart of a widget.
pub trait Element: AsAny + fmt::Debug {
    /// Kind of the widget this element was mounted from.
    fn kind(&self) -> &'static Kind;

    /// Compute a size satisfying `bc`.
    ///
    /// The returned size must satisfy `bc` whenever `bc` is normalized.
    fn layout(&mut self, bc: Constraints) -> Size;

    /// Smallest width at which the element can be drawn at `height`.
    fn min_intrinsic_width(&self, height: Length) -> Length;

    /// Smallest height at which the element can be drawn at `width`.
    fn min_intrinsic_height(&self, width: Length) -> Length;

    /// Position the element, relative to its native parent.
    fn set_bounds(&mut self, bounds: Rectangle);

    /// Apply the properties of `widget`, whose kind equals [`Self::kind`].
    fn update_props(&mut self, widget: &dyn Widget) -> Result<(), Error>;

    /// Release native resources. Idempotent.
    fn close(&mut self);

    /// Child elements, for inspection.
    fn children(&self) -> Vec<&dyn Element> {
        Vec::new()
    }
}

impl dyn Element + '_ {
    /// Downcast to a concrete element type.
    pub fn downcast_ref<E: Element + 'static>(&self) -> Option<&E> {
        AsAny::as_any(self).downcast_ref::<E>()
    }
}

/// Mount `widget`, or the nil element when there is none.
pub fn mount(parent: &Control, widget: Option<&dyn Widget>) -> Result<Box<dyn Element>, Error> {
    match widget {
        Some(widget) => widget.mount(parent),
        None => NilWidget.mount(parent),
    }
}

/// A boxed nil element.
pub fn nil_element() -> Box<dyn Element> {
    Box::new(NilElement)
}
