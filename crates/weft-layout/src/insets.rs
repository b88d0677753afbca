#![forbid(unsafe_code)]

//! Space reserved around a child.

use weft_core::geometry::{Length, Rectangle};

/// Padding on each edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Insets {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl Insets {
    /// Create insets with explicit edges.
    pub const fn new(top: Length, right: Length, bottom: Length, left: Length) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same padding on all four edges.
    pub const fn uniform(l: Length) -> Self {
        Self::new(l, l, l, l)
    }

    /// Default padding between a top-level window and its content.
    pub const fn default_insets() -> Self {
        Self::uniform(Length::from_dip(11))
    }

    /// Total horizontal padding.
    #[inline]
    pub fn dx(&self) -> Length {
        self.left + self.right
    }

    /// Total vertical padding.
    #[inline]
    pub fn dy(&self) -> Length {
        self.top + self.bottom
    }

    /// Shrink `bounds` by the insets.
    pub fn shrink(&self, bounds: Rectangle) -> Rectangle {
        let mut inner = bounds;
        inner.min.x += self.left;
        inner.min.y += self.top;
        inner.max.x -= self.right;
        inner.max.y -= self.bottom;
        inner
    }
}

impl From<Length> for Insets {
    fn from(l: Length) -> Self {
        Self::uniform(l)
    }
}
