#![forbid(unsafe_code)]

//! Widgets, elements and reconciliation.
//!
//! Application code describes its UI as a tree of [`Widget`]s. Mounting a
//! widget under a native parent produces an [`Element`] that owns the
//! native resources. When a new description arrives, [`diff_child`] and
//! [`diff_children`] bring the existing elements up to date, reusing them
//! where the [`Kind`] matches and replacing them where it does not.
//!
//! # Example
//!
//! ```
//! use weft_core::{Length, Size};
//! use weft_layout::{Constraints, Insets};
//! use weft_widgets::{diff_child, HeadlessSurface, Padding, Widget};
//!
//! let surface = HeadlessSurface::new();
//! let root = surface.root();
//!
//! let first = Padding::empty(Insets::uniform(Length::from_dip(4)));
//! let mut slot = None;
//! diff_child(&root, &mut slot, Some(&first as &dyn Widget)).unwrap();
//!
//! let element = slot.as_mut().unwrap();
//! let size = element.layout(Constraints::unconstrained());
//! assert_eq!(size, Size::new(Length::from_dip(8), Length::from_dip(8)));
//!
//! diff_child(&root, &mut slot, None).unwrap();
//! assert!(slot.is_none());
//! ```

pub mod control;
pub mod diff;
pub mod error;
pub mod headless;
pub mod kind;
pub mod nil;
pub mod padding;
pub mod widget;

#[cfg(test)]
mod testing;

pub use control::{Control, NativeControl, NativeHandle, Surface};
pub use diff::{diff_child, diff_child_or_nil, diff_children};
pub use error::{Error, Result};
pub use headless::HeadlessSurface;
pub use kind::Kind;
pub use nil::{NilElement, NilWidget, nil_kind};
pub use padding::{Padding, PaddingElement};
pub use widget::{AsAny, Element, Widget, mount, nil_element};
