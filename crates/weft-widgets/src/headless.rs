#![forbid(unsafe_code)]

//! In-memory [`Surface`] that records every native call.
//!
//! Used by tests and by tools that want to inspect a mounted tree without a
//! display server.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use weft_core::{Density, PixelRect};

use crate::Error;
use crate::control::{Control, NativeHandle, Surface};

#[derive(Debug, Clone)]
struct Node {
    parent: NativeHandle,
    class: &'static str,
    bounds: Option<PixelRect>,
}

#[derive(Debug, Default)]
struct State {
    next: u64,
    live: BTreeMap<NativeHandle, Node>,
    destroyed: BTreeMap<NativeHandle, usize>,
    failing: Vec<&'static str>,
    created: usize,
}

/// Recording surface.
#[derive(Debug)]
pub struct HeadlessSurface {
    state: RefCell<State>,
    density: Cell<Density>,
}

impl HeadlessSurface {
    /// Handle of the implicit root window.
    pub const ROOT: NativeHandle = NativeHandle::from_raw(0);

    /// A new surface at nominal density.
    pub fn new() -> Rc<Self> {
        Self::with_density(Density::NOMINAL)
    }

    /// A new surface at `density`.
    pub fn with_density(density: Density) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(State {
                next: 1,
                ..State::default()
            }),
            density: Cell::new(density),
        })
    }

    /// The root window as a parent.
    pub fn root(self: &Rc<Self>) -> Control {
        let surface: Rc<dyn Surface> = Rc::clone(self) as Rc<dyn Surface>;
        Control::new(surface, Self::ROOT)
    }

    /// Change the density reported to elements.
    pub fn set_density(&self, density: Density) {
        self.density.set(density);
    }

    /// Make every later `create` of `class` fail.
    pub fn fail_creation_of(&self, class: &'static str) {
        self.state.borrow_mut().failing.push(class);
    }

    /// Stop failing creations.
    pub fn clear_failures(&self) {
        self.state.borrow_mut().failing.clear();
    }

    /// Number of live controls, excluding the root.
    pub fn live_count(&self) -> usize {
        self.state.borrow().live.len()
    }

    /// Total controls ever created.
    pub fn created_count(&self) -> usize {
        self.state.borrow().created
    }

    /// Whether `handle` exists and has not been destroyed.
    pub fn is_live(&self, handle: NativeHandle) -> bool {
        handle == Self::ROOT || self.state.borrow().live.contains_key(&handle)
    }

    /// How many times `handle` was destroyed.
    pub fn destroy_count(&self, handle: NativeHandle) -> usize {
        self.state
            .borrow()
            .destroyed
            .get(&handle)
            .copied()
            .unwrap_or(0)
    }

    /// Last bounds set on a live control.
    pub fn bounds_of(&self, handle: NativeHandle) -> Option<PixelRect> {
        self.state.borrow().live.get(&handle).and_then(|n| n.bounds)
    }

    /// Parent of a live control.
    pub fn parent_of(&self, handle: NativeHandle) -> Option<NativeHandle> {
        self.state.borrow().live.get(&handle).map(|n| n.parent)
    }

    /// Class of a live control.
    pub fn class_of(&self, handle: NativeHandle) -> Option<&'static str> {
        self.state.borrow().live.get(&handle).map(|n| n.class)
    }

    /// Live controls in creation order.
    pub fn live_handles(&self) -> Vec<NativeHandle> {
        self.state.borrow().live.keys().copied().collect()
    }
}

impl Surface for HeadlessSurface {
    fn name(&self) -> &'static str {
        "headless"
    }

    fn create(&self, parent: NativeHandle, class: &'static str) -> Result<NativeHandle, Error> {
        let mut state = self.state.borrow_mut();
        if state.failing.contains(&class) {
            return Err(Error::Native(format!("cannot create {class}")));
        }
        if parent != Self::ROOT && !state.live.contains_key(&parent) {
            return Err(Error::Native(format!("parent {parent} does not exist")));
        }
        let handle = NativeHandle::from_raw(state.next);
        state.next += 1;
        state.created += 1;
        state.live.insert(
            handle,
            Node {
                parent,
                class,
                bounds: None,
            },
        );
        Ok(handle)
    }

    fn destroy(&self, handle: NativeHandle) {
        let mut state = self.state.borrow_mut();
        if state.live.remove(&handle).is_none() {
            weft_core::warn!(handle = %handle, "destroy of unknown native control");
        }
        *state.destroyed.entry(handle).or_insert(0) += 1;
    }

    fn set_bounds(&self, handle: NativeHandle, bounds: PixelRect) {
        if let Some(node) = self.state.borrow_mut().live.get_mut(&handle) {
            node.bounds = Some(bounds);
        }
    }

    fn density(&self) -> Density {
        self.density.get()
    }
}
