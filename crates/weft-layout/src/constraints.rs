#![forbid(unsafe_code)]

//! Box constraints.
//!
//! A parent hands each child a [`Constraints`] value describing the sizes it
//! will accept. The child answers from `layout` with a size that satisfies
//! those constraints. Containers derive narrower constraints for their
//! children (for example with [`Constraints::inset`]) and never pass on a
//! looser constraint than they themselves received.

use std::fmt;
use weft_core::geometry::{Length, Size};

/// Minimum and maximum size along both axes.
///
/// Valid constraints have `min <= max` componentwise. An axis whose maximum
/// is [`Length::UNBOUNDED`] is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraints {
    pub min: Size,
    pub max: Size,
}

impl Constraints {
    /// Create constraints from explicit bounds.
    #[inline]
    pub const fn new(min: Size, max: Size) -> Self {
        Self { min, max }
    }

    /// Only `size` is acceptable.
    #[inline]
    pub const fn tight(size: Size) -> Self {
        Self::new(size, size)
    }

    /// Anything from zero up to `size`.
    #[inline]
    pub const fn loose(size: Size) -> Self {
        Self::new(Size::ZERO, size)
    }

    /// Any size at all.
    #[inline]
    pub const fn unconstrained() -> Self {
        Self::new(Size::ZERO, Size::UNBOUNDED)
    }

    /// Both axes must expand to fill an unbounded space.
    #[inline]
    pub const fn expand() -> Self {
        Self::new(Size::UNBOUNDED, Size::UNBOUNDED)
    }

    /// Width expands to fill, height is fixed.
    #[inline]
    pub const fn expand_width(height: Length) -> Self {
        Self::new(
            Size::new(Length::UNBOUNDED, height),
            Size::new(Length::UNBOUNDED, height),
        )
    }

    /// Height expands to fill, width is fixed.
    #[inline]
    pub const fn expand_height(width: Length) -> Self {
        Self::new(
            Size::new(width, Length::UNBOUNDED),
            Size::new(width, Length::UNBOUNDED),
        )
    }

    /// Width is fixed, height is unconstrained.
    #[inline]
    pub const fn tight_width(width: Length) -> Self {
        Self::new(
            Size::new(width, Length::ZERO),
            Size::new(width, Length::UNBOUNDED),
        )
    }

    /// Height is fixed, width is unconstrained.
    #[inline]
    pub const fn tight_height(height: Length) -> Self {
        Self::new(
            Size::new(Length::ZERO, height),
            Size::new(Length::UNBOUNDED, height),
        )
    }

    /// Clamp `size` componentwise into `[min, max]`.
    #[inline]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(self.constrain_width(size.width), self.constrain_height(size.height))
    }

    /// Clamp a width into the horizontal bounds.
    #[inline]
    pub fn constrain_width(&self, width: Length) -> Length {
        width.clamp(self.min.width, self.max.width)
    }

    /// Clamp a height into the vertical bounds.
    #[inline]
    pub fn constrain_height(&self, height: Length) -> Length {
        height.clamp(self.min.height, self.max.height)
    }

    /// Constrain `size`, scaling the free axis to keep the aspect ratio
    /// where the bounds allow it.
    pub fn constrain_and_attempt_to_preserve_aspect_ratio(&self, size: Size) -> Size {
        if self.is_tight() {
            return self.min;
        }
        if size.width == Length::ZERO
            || size.height == Length::ZERO
            || size.width.is_unbounded()
            || size.height.is_unbounded()
        {
            return self.constrain(size);
        }

        let (w, h) = (size.width.raw(), size.height.raw());
        let mut width = size.width;
        let mut height = size.height;

        if width > self.max.width {
            width = self.max.width;
            height = width.scale(h, w);
        }
        if height > self.max.height {
            height = self.max.height;
            width = height.scale(w, h);
        }
        if width < self.min.width {
            width = self.min.width;
            height = width.scale(h, w);
        }
        if height < self.min.height {
            height = self.min.height;
            width = height.scale(w, h);
        }

        self.constrain(Size::new(width, height))
    }

    /// Restrict these constraints to lie within `outer`.
    pub fn enforce(&self, outer: Constraints) -> Constraints {
        Constraints::new(
            Size::new(
                outer.constrain_width(self.min.width),
                outer.constrain_height(self.min.height),
            ),
            Size::new(
                outer.constrain_width(self.max.width),
                outer.constrain_height(self.max.height),
            ),
        )
    }

    /// Whether both axes have a finite maximum.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.has_bounded_width() && self.has_bounded_height()
    }

    /// Whether the horizontal maximum is finite.
    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max.width.is_bounded()
    }

    /// Whether the vertical maximum is finite.
    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        self.max.height.is_bounded()
    }

    /// Whether exactly one size satisfies the constraints.
    #[inline]
    pub fn is_tight(&self) -> bool {
        self.has_tight_width() && self.has_tight_height()
    }

    /// Whether only one width is acceptable.
    #[inline]
    pub fn has_tight_width(&self) -> bool {
        self.min.width >= self.max.width
    }

    /// Whether only one height is acceptable.
    #[inline]
    pub fn has_tight_height(&self) -> bool {
        self.min.height >= self.max.height
    }

    /// Whether `min <= max` and `min >= 0` along both axes.
    pub fn is_normalized(&self) -> bool {
        self.min.width >= Length::ZERO
            && self.min.width <= self.max.width
            && self.min.height >= Length::ZERO
            && self.min.height <= self.max.height
    }

    /// Whether the only acceptable size is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.max.is_zero()
    }

    /// Whether `size` is acceptable.
    #[inline]
    pub fn is_satisfied_by(&self, size: Size) -> bool {
        self.min.width <= size.width
            && size.width <= self.max.width
            && self.min.height <= size.height
            && size.height <= self.max.height
    }

    /// Reserve `width` and `height` of insets, shrinking both bounds.
    ///
    /// Minimums bottom out at zero. Maximums must be large enough to hold the
    /// insets; callers check the available space first. Debug builds assert
    /// on violation, release builds clamp the maximum to zero and log.
    pub fn inset(&self, width: Length, height: Length) -> Constraints {
        Constraints::new(
            Size::new(
                (self.min.width - width).max(Length::ZERO),
                (self.min.height - height).max(Length::ZERO),
            ),
            Size::new(
                shrink_max(self.max.width, width),
                shrink_max(self.max.height, height),
            ),
        )
    }

    /// Drop the minimum on both axes.
    #[inline]
    pub fn loosen(&self) -> Constraints {
        Constraints::new(Size::ZERO, self.max)
    }

    /// Drop the horizontal minimum.
    #[inline]
    pub fn loosen_width(&self) -> Constraints {
        Constraints::new(Size::new(Length::ZERO, self.min.height), self.max)
    }

    /// Drop the vertical minimum.
    #[inline]
    pub fn loosen_height(&self) -> Constraints {
        Constraints::new(Size::new(self.min.width, Length::ZERO), self.max)
    }

    /// Fix the width, constrained to the current horizontal bounds.
    pub fn tighten_width(&self, width: Length) -> Constraints {
        let width = self.constrain_width(width);
        Constraints::new(
            Size::new(width, self.min.height),
            Size::new(width, self.max.height),
        )
    }

    /// Fix the height, constrained to the current vertical bounds.
    pub fn tighten_height(&self, height: Length) -> Constraints {
        let height = self.constrain_height(height);
        Constraints::new(
            Size::new(self.min.width, height),
            Size::new(self.max.width, height),
        )
    }
}

fn shrink_max(max: Length, inset: Length) -> Length {
    if max.is_unbounded() {
        return max;
    }
    debug_assert!(
        max >= inset,
        "inset {inset} exceeds available space {max}; check space before insetting"
    );
    if max < inset {
        weft_core::warn!(
            max = %max,
            inset = %inset,
            "inset exceeds available space, clamping to zero"
        );
        return Length::ZERO;
    }
    max - inset
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unconstrained()
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}
