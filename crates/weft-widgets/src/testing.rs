//! Mock widgets for unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use weft_core::{Length, Rectangle, Size};
use weft_layout::Constraints;

use crate::Error;
use crate::control::Control;
use crate::kind::Kind;
use crate::widget::{Element, Widget};

pub static KIND_A: Kind = Kind::new("test.A");
pub static KIND_B: Kind = Kind::new("test.B");

/// Shared record of lifecycle calls, in order.
pub type Log = Rc<RefCell<Vec<String>>>;

pub fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

#[derive(Debug, Clone)]
pub struct Leaf {
    pub kind: &'static Kind,
    pub label: &'static str,
    pub log: Log,
    pub fail_mount: bool,
    pub fail_update: bool,
}

impl Leaf {
    pub fn a(label: &'static str, log: &Log) -> Self {
        Self::new(&KIND_A, label, log)
    }

    pub fn b(label: &'static str, log: &Log) -> Self {
        Self::new(&KIND_B, label, log)
    }

    fn new(kind: &'static Kind, label: &'static str, log: &Log) -> Self {
        Self {
            kind,
            label,
            log: Rc::clone(log),
            fail_mount: false,
            fail_update: false,
        }
    }

    pub fn failing_mount(mut self) -> Self {
        self.fail_mount = true;
        self
    }

    pub fn failing_update(mut self) -> Self {
        self.fail_update = true;
        self
    }

    pub fn boxed(self) -> Box<dyn Widget> {
        Box::new(self)
    }
}

impl Widget for Leaf {
    fn kind(&self) -> &'static Kind {
        self.kind
    }

    fn mount(&self, _parent: &Control) -> Result<Box<dyn Element>, Error> {
        if self.fail_mount {
            return Err(Error::mount(self.kind, self.label));
        }
        self.log.borrow_mut().push(format!("mount {}", self.label));
        Ok(Box::new(LeafElement {
            kind: self.kind,
            label: self.label,
            log: Rc::clone(&self.log),
            closed: false,
        }))
    }
}

#[derive(Debug)]
pub struct LeafElement {
    kind: &'static Kind,
    pub label: &'static str,
    log: Log,
    closed: bool,
}

impl Element for LeafElement {
    fn kind(&self) -> &'static Kind {
        self.kind
    }

    fn layout(&mut self, bc: Constraints) -> Size {
        bc.constrain(Size::new(Length::from_dip(10), Length::from_dip(10)))
    }

    fn min_intrinsic_width(&self, _height: Length) -> Length {
        Length::from_dip(10)
    }

    fn min_intrinsic_height(&self, _width: Length) -> Length {
        Length::from_dip(10)
    }

    fn set_bounds(&mut self, _bounds: Rectangle) {}

    fn update_props(&mut self, widget: &dyn Widget) -> Result<(), Error> {
        let data = widget.props::<Leaf>(self.kind)?;
        if data.fail_update {
            return Err(Error::update(self.kind, data.label));
        }
        self.log
            .borrow_mut()
            .push(format!("update {} -> {}", self.label, data.label));
        self.label = data.label;
        Ok(())
    }

    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.log.borrow_mut().push(format!("close {}", self.label));
        }
    }
}

/// Labels of the leaf elements in `elements`, `"-"` for anything else.
pub fn labels(elements: &[Box<dyn Element>]) -> Vec<&'static str> {
    elements
        .iter()
        .map(|e| e.downcast_ref::<LeafElement>().map_or("-", |leaf| leaf.label))
        .collect()
}
