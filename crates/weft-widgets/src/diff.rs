#![forbid(unsafe_code)]

//! Reconciliation of live elements against new widgets.
//!
//! Elements are reused when the kinds match and replaced otherwise. Lists
//! are matched by position. Replaced and surplus elements are closed
//! exactly once; newly mounted ones are created under `parent`.
//!
//! On error the slot or list keeps whatever state it had reached: elements
//! already updated, mounted or closed stay that way, and nothing that is
//! still held has been closed.

use crate::Error;
use crate::control::Control;
use crate::nil::NilWidget;
use crate::widget::{Element, Widget};

/// Reconcile a single optional child.
///
/// | `slot`  | `widget` | result                                          |
/// |---------|----------|-------------------------------------------------|
/// | any     | `None`   | old element closed, slot emptied                |
/// | `None`  | `Some`   | widget mounted into the slot                    |
/// | `Some`  | `Some`   | updated in place if kinds match, else replaced  |
///
/// If mounting a replacement fails, the old element stays in the slot,
/// still open.
pub fn diff_child(
    parent: &Control,
    slot: &mut Option<Box<dyn Element>>,
    widget: Option<&dyn Widget>,
) -> Result<(), Error> {
    let Some(widget) = widget else {
        if let Some(mut old) = slot.take() {
            weft_core::trace!(kind = %old.kind(), "closing child");
            old.close();
        }
        return Ok(());
    };

    match slot {
        Some(element) => reconcile(parent, element, widget),
        None => {
            *slot = Some(widget.mount(parent)?);
            Ok(())
        }
    }
}

/// Reconcile a child slot that always holds an element.
///
/// `None` is treated as the nil widget, so the slot ends up holding a nil
/// element instead of being emptied.
pub fn diff_child_or_nil(
    parent: &Control,
    element: &mut Box<dyn Element>,
    widget: Option<&dyn Widget>,
) -> Result<(), Error> {
    reconcile(parent, element, widget.unwrap_or(&NilWidget))
}

/// Reconcile a list of children, matching elements to widgets by position.
///
/// Surplus elements are closed before anything else happens; new elements
/// are appended in widget order. The first error stops the walk.
pub fn diff_children(
    parent: &Control,
    elements: &mut Vec<Box<dyn Element>>,
    widgets: &[Box<dyn Widget>],
) -> Result<(), Error> {
    let _span = weft_core::debug_span!(
        "reconcile",
        elements = elements.len(),
        widgets = widgets.len()
    )
    .entered();

    if widgets.is_empty() {
        for mut old in elements.drain(..) {
            old.close();
        }
        return Ok(());
    }

    if elements.is_empty() {
        elements.reserve(widgets.len());
        for widget in widgets {
            elements.push(widget.mount(parent)?);
        }
        return Ok(());
    }

    if elements.len() > widgets.len() {
        for mut old in elements.drain(widgets.len()..) {
            old.close();
        }
    }

    let overlap = elements.len();
    for (element, widget) in elements.iter_mut().zip(widgets) {
        reconcile(parent, element, &**widget)?;
    }
    for widget in &widgets[overlap..] {
        elements.push(widget.mount(parent)?);
    }
    Ok(())
}

fn reconcile(
    parent: &Control,
    element: &mut Box<dyn Element>,
    widget: &dyn Widget,
) -> Result<(), Error> {
    if element.kind() == widget.kind() {
        return element.update_props(widget);
    }

    weft_core::trace!(from = %element.kind(), to = %widget.kind(), "replacing element");
    let replacement = widget.mount(parent)?;
    let mut old = std::mem::replace(element, replacement);
    old.close();
    Ok(())
}
