#![forbid(unsafe_code)]

//! Property-based tests for the element layout contract.
//!
//! For every normalised constraint set, every element returns a size the
//! constraints accept. Covered elements:
//!
//! 1. The nil element.
//! 2. Padding without a child.
//! 3. Padding around a leaf with a natural size.
//! 4. Padding nested inside padding.
//!
//! Insets range over zero, negative and larger-than-available values, and
//! the constraints include unbounded and expanding axes.

use proptest::prelude::*;
use weft_core::{Length, Rectangle, Size};
use weft_layout::{Constraints, Insets};
use weft_widgets::{Control, Element, Error, HeadlessSurface, Kind, NilWidget, Padding, Widget};

// ============================================================================
// Leaf widget
// ============================================================================

static BOX: Kind = Kind::new("demo.Box");

/// A leaf that asks for a fixed size.
#[derive(Debug, Clone)]
struct SizedBox {
    natural: Size,
}

impl Widget for SizedBox {
    fn kind(&self) -> &'static Kind {
        &BOX
    }

    fn mount(&self, _parent: &Control) -> Result<Box<dyn Element>, Error> {
        Ok(Box::new(SizedBoxElement {
            natural: self.natural,
        }))
    }
}

#[derive(Debug)]
struct SizedBoxElement {
    natural: Size,
}

impl Element for SizedBoxElement {
    fn kind(&self) -> &'static Kind {
        &BOX
    }

    fn layout(&mut self, bc: Constraints) -> Size {
        bc.constrain(self.natural)
    }

    fn min_intrinsic_width(&self, _height: Length) -> Length {
        self.natural.width
    }

    fn min_intrinsic_height(&self, _width: Length) -> Length {
        self.natural.height
    }

    fn set_bounds(&mut self, _bounds: Rectangle) {}

    fn update_props(&mut self, widget: &dyn Widget) -> Result<(), Error> {
        self.natural = widget.props::<SizedBox>(&BOX)?.natural;
        Ok(())
    }

    fn close(&mut self) {}
}

// ============================================================================
// Strategies
// ============================================================================

fn dip(n: i64) -> Length {
    Length::from_dip(n)
}

fn length() -> impl Strategy<Value = Length> {
    (0i64..=2_000).prop_map(dip)
}

fn normalised() -> impl Strategy<Value = Constraints> {
    (length(), length(), length(), length(), any::<bool>(), any::<bool>()).prop_map(
        |(a, b, c, d, unbounded_w, unbounded_h)| {
            let (min_w, mut max_w) = if a <= b { (a, b) } else { (b, a) };
            let (min_h, mut max_h) = if c <= d { (c, d) } else { (d, c) };
            if unbounded_w {
                max_w = Length::UNBOUNDED;
            }
            if unbounded_h {
                max_h = Length::UNBOUNDED;
            }
            Constraints::new(Size::new(min_w, min_h), Size::new(max_w, max_h))
        },
    )
}

fn constraints() -> impl Strategy<Value = Constraints> {
    prop_oneof![
        4 => normalised(),
        1 => Just(Constraints::expand()),
        1 => Just(Constraints::unconstrained()),
        1 => length().prop_map(Constraints::expand_width),
        1 => length().prop_map(Constraints::expand_height),
        1 => length().prop_map(Constraints::tight_width),
        1 => length().prop_map(Constraints::tight_height),
        1 => (length(), length()).prop_map(|(w, h)| Constraints::tight(Size::new(w, h))),
    ]
}

fn side() -> impl Strategy<Value = Length> {
    prop_oneof![
        1 => Just(Length::ZERO),
        2 => (-300i64..=0).prop_map(dip),
        4 => (0i64..=3_000).prop_map(dip),
    ]
}

fn insets() -> impl Strategy<Value = Insets> {
    (side(), side(), side(), side()).prop_map(|(t, r, b, l)| Insets::new(t, r, b, l))
}

fn natural() -> impl Strategy<Value = Size> {
    ((0i64..=4_000), (0i64..=4_000)).prop_map(|(w, h)| Size::new(dip(w), dip(h)))
}

fn check(widget: &dyn Widget, bc: Constraints) -> Result<(), TestCaseError> {
    prop_assert!(bc.is_normalized(), "generated {bc} is not normalised");
    let surface = HeadlessSurface::new();
    let mut elem = widget
        .mount(&surface.root())
        .map_err(|e| TestCaseError::fail(e.to_string()))?;
    let size = elem.layout(bc);
    prop_assert!(bc.is_satisfied_by(size), "{bc} rejected {size} from {widget:?}");
    elem.close();
    Ok(())
}

// ============================================================================
// Layout contract
// ============================================================================

proptest! {
    #[test]
    fn nil_satisfies_constraints(bc in constraints()) {
        check(&NilWidget, bc)?;
    }

    #[test]
    fn empty_padding_satisfies_constraints(bc in constraints(), ins in insets()) {
        check(&Padding::empty(ins), bc)?;
    }

    #[test]
    fn padded_leaf_satisfies_constraints(
        bc in constraints(),
        ins in insets(),
        natural in natural(),
    ) {
        check(&Padding::new(ins, SizedBox { natural }), bc)?;
    }

    #[test]
    fn nested_padding_satisfies_constraints(
        bc in constraints(),
        outer in insets(),
        inner in insets(),
        natural in natural(),
    ) {
        let widget = Padding::new(outer, Padding::new(inner, SizedBox { natural }));
        check(&widget, bc)?;
    }

    #[test]
    fn relayout_after_update_satisfies_constraints(
        bc in constraints(),
        first in insets(),
        second in insets(),
        natural in natural(),
    ) {
        let surface = HeadlessSurface::new();
        let mut elem = Padding::empty(first).mount(&surface.root()).unwrap();
        elem.layout(bc);
        elem.update_props(&Padding::new(second, SizedBox { natural })).unwrap();
        let size = elem.layout(bc);
        prop_assert!(bc.is_satisfied_by(size), "{bc} rejected {size}");
    }
}
