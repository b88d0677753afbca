#![forbid(unsafe_code)]

//! The nil widget/element pair.
//!
//! Stands in for an absent child so that containers can always hold an
//! element. It owns nothing and takes up as little room as allowed.

use weft_core::{Length, Rectangle, Size};
use weft_layout::Constraints;

use crate::Error;
use crate::control::Control;
use crate::kind::Kind;
use crate::widget::{Element, Widget};

static NIL_KIND: Kind = Kind::new("weft.Nil");

/// Kind of [`NilWidget`] and [`NilElement`].
pub fn nil_kind() -> &'static Kind {
    &NIL_KIND
}

/// Widget that mounts a [`NilElement`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NilWidget;

impl Widget for NilWidget {
    fn kind(&self) -> &'static Kind {
        &NIL_KIND
    }

    fn mount(&self, _parent: &Control) -> Result<Box<dyn Element>, Error> {
        Ok(Box::new(NilElement))
    }
}

/// Element with no content and no native resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct NilElement;

impl Element for NilElement {
    fn kind(&self) -> &'static Kind {
        &NIL_KIND
    }

    fn layout(&mut self, bc: Constraints) -> Size {
        bc.constrain(Size::ZERO)
    }

    fn min_intrinsic_width(&self, _height: Length) -> Length {
        Length::ZERO
    }

    fn min_intrinsic_height(&self, _width: Length) -> Length {
        Length::ZERO
    }

    fn set_bounds(&mut self, _bounds: Rectangle) {}

    fn update_props(&mut self, widget: &dyn Widget) -> Result<(), Error> {
        if widget.kind() == &NIL_KIND {
            Ok(())
        } else {
            Err(Error::KindMismatch {
                expected: NIL_KIND.name(),
                found: widget.kind().name(),
            })
        }
    }

    fn close(&mut self) {}
}
