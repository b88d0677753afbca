#![forbid(unsafe_code)]

//! Padding container widget.
//!
//! Surrounds a single child with [`Insets`]. The child is laid out with the
//! incoming constraints shrunk by the insets, and is positioned inside the
//! bounds shrunk by the same amount. With no child, the padding still
//! occupies the insets.

use weft_core::{Length, Rectangle, Size};
use weft_layout::{Constraints, Insets};

use crate::Error;
use crate::control::Control;
use crate::diff::diff_child_or_nil;
use crate::kind::Kind;
use crate::widget::{Element, Widget, mount};

static PADDING_KIND: Kind = Kind::new("weft.Padding");

/// A widget that applies insets around an optional child.
#[derive(Debug, Default)]
pub struct Padding {
    pub insets: Insets,
    pub child: Option<Box<dyn Widget>>,
}

impl Padding {
    /// Padding of `insets` around `child`.
    pub fn new(insets: Insets, child: impl Widget + 'static) -> Self {
        Self {
            insets,
            child: Some(Box::new(child)),
        }
    }

    /// Empty padding of `insets`.
    pub fn empty(insets: Insets) -> Self {
        Self {
            insets,
            child: None,
        }
    }

    /// Replace the child (builder-style).
    #[must_use]
    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.child = Some(Box::new(child));
        self
    }
}

impl Widget for Padding {
    fn kind(&self) -> &'static Kind {
        &PADDING_KIND
    }

    fn mount(&self, parent: &Control) -> Result<Box<dyn Element>, Error> {
        let child = mount(parent, self.child.as_deref())?;
        Ok(Box::new(PaddingElement {
            parent: parent.clone(),
            child,
            insets: self.insets,
            child_size: Size::ZERO,
        }))
    }
}

/// Live element for [`Padding`].
#[derive(Debug)]
pub struct PaddingElement {
    parent: Control,
    child: Box<dyn Element>,
    insets: Insets,
    child_size: Size,
}

impl PaddingElement {
    /// Current insets.
    pub fn insets(&self) -> Insets {
        self.insets
    }

    /// Size the child chose in the last layout.
    pub fn child_size(&self) -> Size {
        self.child_size
    }
}

impl Element for PaddingElement {
    fn kind(&self) -> &'static Kind {
        &PADDING_KIND
    }

    fn layout(&mut self, bc: Constraints) -> Size {
        let hinset = self.insets.dx();
        let vinset = self.insets.dy();

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("padding_layout", constraints = %bc).entered();

        if bc.max.width < hinset || bc.max.height < vinset {
            weft_core::debug!(constraints = %bc, "insets exceed available space");
            self.child_size = self.child.layout(Constraints::tight(Size::ZERO));
            return bc.constrain(Size::new(hinset, vinset));
        }

        self.child_size = self.child.layout(bc.inset(hinset, vinset));
        Size::new(
            self.child_size.width + hinset,
            self.child_size.height + vinset,
        )
    }

    fn min_intrinsic_width(&self, height: Length) -> Length {
        self.child.min_intrinsic_width(height) + self.insets.dx()
    }

    fn min_intrinsic_height(&self, width: Length) -> Length {
        self.child.min_intrinsic_height(width) + self.insets.dy()
    }

    fn set_bounds(&mut self, bounds: Rectangle) {
        self.child.set_bounds(self.insets.shrink(bounds));
    }

    fn update_props(&mut self, widget: &dyn Widget) -> Result<(), Error> {
        let data = widget.props::<Padding>(&PADDING_KIND)?;
        self.insets = data.insets;
        diff_child_or_nil(&self.parent, &mut self.child, data.child.as_deref())
    }

    fn close(&mut self) {
        self.child.close();
        self.child = crate::widget::nil_element();
    }

    fn children(&self) -> Vec<&dyn Element> {
        vec![&*self.child]
    }
}
