#![forbid(unsafe_code)]

//! Type identity for reconciliation.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;

/// Identifies a widget/element type.
///
/// Each widget type declares one `static` `Kind`. Kinds compare by address,
/// so two kinds are equal only when they are the same static, regardless of
/// name. An element may be updated in place by a widget only when their
/// kinds are equal.
///
/// ```
/// use weft_widgets::Kind;
///
/// static LABEL: Kind = Kind::new("example.Label");
/// static BUTTON: Kind = Kind::new("example.Button");
///
/// assert_eq!(&LABEL, &LABEL);
/// assert_ne!(&LABEL, &BUTTON);
/// assert_eq!(LABEL.to_string(), "example.Label");
/// ```
pub struct Kind {
    name: &'static str,
}

impl Kind {
    /// Declare a kind. Store the result in a `static`.
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Diagnostic name.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl Eq for Kind {}

impl Hash for Kind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self, state);
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kind({})", self.name)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
