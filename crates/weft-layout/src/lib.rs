#![forbid(unsafe_code)]

//! Layout primitives: box constraints and insets.
//!
//! - [`Constraints`] - minimum and maximum size handed from parent to child
//! - [`Insets`] - padding reserved around a child
//!
//! # The layout contract
//!
//! Every size returned by an element's `layout(c)` satisfies
//! `c.is_satisfied_by(size)`. A container reserves its own padding with
//! [`Constraints::inset`] before laying out a child and never hands a child a
//! looser constraint than it received.
//!
//! ```
//! use weft_core::geometry::{Length, Size};
//! use weft_layout::{Constraints, Insets};
//!
//! let outer = Constraints::loose(Size::new(Length::from_dip(200), Length::from_dip(100)));
//! let pad = Insets::default_insets();
//! let inner = outer.inset(pad.dx(), pad.dy());
//! assert_eq!(inner.max.width, Length::from_dip(178));
//! ```

pub mod constraints;
pub mod insets;

pub use constraints::Constraints;
pub use insets::Insets;
pub use weft_core::geometry::{Length, Point, Rectangle, Size};
