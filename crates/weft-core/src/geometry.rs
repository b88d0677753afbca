#![forbid(unsafe_code)]

//! Geometric primitives measured in device-independent lengths.
//!
//! All distances are [`Length`] values: fixed-point integers with 192 sub-units
//! per device-independent pixel (DIP). There are 96 DIP per inch, which makes
//! points (72 per inch), picas (6 per inch) and inches exact multiples of the
//! base unit, so unit conversions never round.
//!
//! Conversion to device pixels needs a [`Density`]. The density is passed
//! explicitly so every conversion in this module is a pure function.

use crate::density::Density;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Sub-units per device-independent pixel.
const PER_DIP: i64 = 192;

/// Sub-units per inch.
const PER_INCH: i64 = PER_DIP * 96;

/// Largest finite magnitude. `i64::MAX` is reserved for [`Length::UNBOUNDED`].
const FINITE_MAX: i64 = i64::MAX - 1;

/// A device-independent distance.
///
/// `Length` supports exact ratio arithmetic among DIP, points, picas and
/// inches. The distinguished [`Length::UNBOUNDED`] value behaves like
/// infinity: it absorbs addition and dominates `max`, and any arithmetic that
/// would overflow the representable range saturates to it.
///
/// # Example
///
/// ```
/// use weft_core::geometry::Length;
///
/// assert_eq!(Length::DIP * 96, Length::PC * 6);
/// assert_eq!(Length::INCH, Length::PT * 72);
/// assert!((Length::from_dip(10) + Length::UNBOUNDED).is_unbounded());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Length(i64);

impl Length {
    /// Zero length.
    pub const ZERO: Self = Self(0);
    /// One device-independent pixel (1/96 inch).
    pub const DIP: Self = Self(PER_DIP);
    /// One typographic point (1/72 inch).
    pub const PT: Self = Self(PER_INCH / 72);
    /// One pica (1/6 inch).
    pub const PC: Self = Self(PER_INCH / 6);
    /// One inch.
    pub const INCH: Self = Self(PER_INCH);
    /// Sentinel for an axis without an upper bound.
    pub const UNBOUNDED: Self = Self(i64::MAX);

    /// Build a length from raw sub-units.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw sub-unit count.
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// A length of `n` device-independent pixels.
    #[inline]
    pub const fn from_dip(n: i64) -> Self {
        saturate(n as i128 * PER_DIP as i128)
    }

    /// A length of `n` points.
    #[inline]
    pub const fn from_pt(n: i64) -> Self {
        saturate(n as i128 * Self::PT.0 as i128)
    }

    /// A length of `n` picas.
    #[inline]
    pub const fn from_pc(n: i64) -> Self {
        saturate(n as i128 * Self::PC.0 as i128)
    }

    /// A length of `n` inches.
    #[inline]
    pub const fn from_inch(n: i64) -> Self {
        saturate(n as i128 * PER_INCH as i128)
    }

    /// Whether this is the unbounded sentinel.
    #[inline]
    pub const fn is_unbounded(self) -> bool {
        self.0 == i64::MAX
    }

    /// Whether this is a finite length.
    #[inline]
    pub const fn is_bounded(self) -> bool {
        !self.is_unbounded()
    }

    /// Length in device-independent pixels.
    pub fn dip(self) -> f64 {
        self.in_units(PER_DIP)
    }

    /// Length in points.
    pub fn pt(self) -> f64 {
        self.in_units(Self::PT.0)
    }

    /// Length in picas.
    pub fn pc(self) -> f64 {
        self.in_units(Self::PC.0)
    }

    /// Length in inches.
    pub fn inch(self) -> f64 {
        self.in_units(PER_INCH)
    }

    fn in_units(self, unit: i64) -> f64 {
        if self.is_unbounded() {
            f64::INFINITY
        } else {
            self.0 as f64 / unit as f64
        }
    }

    /// Compute `self * num / den` without intermediate overflow.
    ///
    /// The result truncates toward zero. An unbounded length follows the sign
    /// of the factor: a positive ratio keeps it unbounded, a zero ratio gives
    /// zero and a negative ratio gives the most negative finite length.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    pub fn scale(self, num: i64, den: i64) -> Self {
        assert!(den != 0, "Length::scale called with a zero denominator");
        if self.is_unbounded() {
            return scaled_unbounded(num.signum() * den.signum());
        }
        saturate(self.0 as i128 * num as i128 / den as i128)
    }

    /// Bound the length to `[min, max]`.
    ///
    /// When `min > max`, `min` wins: the upper bound is applied first and the
    /// lower bound second.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        let mut v = self;
        if v > max {
            v = max;
        }
        if v < min {
            v = min;
        }
        v
    }

    /// Convert to device pixels at `dpi` dots per inch, rounding to nearest.
    ///
    /// An unbounded length converts to `i32::MAX`.
    pub fn to_pixels(self, dpi: u32) -> i32 {
        if self.is_unbounded() {
            return i32::MAX;
        }
        let pixels = div_round(self.0 as i128 * dpi as i128, PER_INCH as i128);
        pixels.clamp(i32::MIN as i128, i32::MAX as i128) as i32
    }

    /// Convert device pixels at `dpi` dots per inch into a length.
    pub fn from_pixels(pixels: i32, dpi: u32) -> Self {
        let dpi = dpi.max(1);
        saturate(div_round(pixels as i128 * PER_INCH as i128, dpi as i128))
    }

    /// Convert a horizontal pixel count using the density's X resolution.
    #[inline]
    pub fn from_pixels_x(pixels: i32, density: Density) -> Self {
        Self::from_pixels(pixels, density.x)
    }

    /// Convert a vertical pixel count using the density's Y resolution.
    #[inline]
    pub fn from_pixels_y(pixels: i32, density: Density) -> Self {
        Self::from_pixels(pixels, density.y)
    }
}

/// Clamp a wide intermediate into the representable range.
const fn saturate(v: i128) -> Length {
    if v > FINITE_MAX as i128 {
        Length::UNBOUNDED
    } else if v < -(FINITE_MAX as i128) {
        Length(-FINITE_MAX)
    } else {
        Length(v as i64)
    }
}

/// `UNBOUNDED` multiplied by a factor of the given sign.
const fn scaled_unbounded(sign: i64) -> Length {
    match sign {
        0 => Length::ZERO,
        s if s > 0 => Length::UNBOUNDED,
        _ => Length(-FINITE_MAX),
    }
}

/// Integer division rounding half away from zero.
fn div_round(n: i128, d: i128) -> i128 {
    let half = d / 2;
    if n >= 0 { (n + half) / d } else { (n - half) / d }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbounded() {
            f.write_str("inf")
        } else {
            write!(f, "{:.2}", self.dip())
        }
    }
}

impl Add for Length {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        if self.is_unbounded() || rhs.is_unbounded() {
            return Self::UNBOUNDED;
        }
        saturate(self.0 as i128 + rhs.0 as i128)
    }
}

impl Sub for Length {
    type Output = Self;

    /// Subtracting from an unbounded length leaves it unbounded. Subtracting
    /// an unbounded length from a finite one saturates to the most negative
    /// finite length.
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        if self.is_unbounded() {
            return Self::UNBOUNDED;
        }
        if rhs.is_unbounded() {
            return Self(-FINITE_MAX);
        }
        saturate(self.0 as i128 - rhs.0 as i128)
    }
}

impl AddAssign for Length {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Length {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Length {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        saturate(-(self.0 as i128))
    }
}

impl Mul<i64> for Length {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i64) -> Self {
        if self.is_unbounded() {
            return scaled_unbounded(rhs.signum());
        }
        saturate(self.0 as i128 * rhs as i128)
    }
}

impl Mul<Length> for i64 {
    type Output = Length;

    #[inline]
    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}

impl Div<i64> for Length {
    type Output = Self;

    #[inline]
    fn div(self, rhs: i64) -> Self {
        if self.is_unbounded() {
            return scaled_unbounded(rhs.signum());
        }
        saturate(self.0 as i128 / rhs as i128)
    }
}

impl Div for Length {
    type Output = i64;

    /// Integer ratio of two lengths.
    #[inline]
    fn div(self, rhs: Self) -> i64 {
        self.0 / rhs.0
    }
}

impl Sum for Length {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// A position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: Length,
    pub y: Length,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(Length::ZERO, Length::ZERO);

    /// Create a new point.
    #[inline]
    pub const fn new(x: Length, y: Length) -> Self {
        Self { x, y }
    }

    /// Convert to device pixels.
    pub fn pixels(&self, density: Density) -> PixelPoint {
        PixelPoint {
            x: self.x.to_pixels(density.x),
            y: self.y.to_pixels(density.y),
        }
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: Length,
    pub height: Length,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self::new(Length::ZERO, Length::ZERO);
    /// Unbounded along both axes.
    pub const UNBOUNDED: Self = Self::new(Length::UNBOUNDED, Length::UNBOUNDED);

    /// Create a new size.
    #[inline]
    pub const fn new(width: Length, height: Length) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.width.0 == 0 && self.height.0 == 0
    }

    /// Build a size from device pixels.
    pub fn from_pixels(width: i32, height: i32, density: Density) -> Self {
        Self::new(
            Length::from_pixels_x(width, density),
            Length::from_pixels_y(height, density),
        )
    }

    /// Convert to device pixels.
    pub fn pixels(&self, density: Density) -> PixelSize {
        PixelSize {
            width: self.width.to_pixels(density.x),
            height: self.height.to_pixels(density.y),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}x{})", self.width, self.height)
    }
}

/// An axis-aligned rectangle, `min` inclusive and `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    pub min: Point,
    pub max: Point,
}

impl Rectangle {
    /// Create a rectangle from its corners as given, without normalising.
    #[inline]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from two arbitrary corners.
    ///
    /// The result is normalised so that `min <= max` componentwise.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Shorthand for [`Rectangle::from_corners`] with scalar coordinates.
    pub fn rect(x0: Length, y0: Length, x1: Length, y1: Length) -> Self {
        Self::from_corners(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Horizontal extent.
    #[inline]
    pub fn dx(&self) -> Length {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    #[inline]
    pub fn dy(&self) -> Length {
        self.max.y - self.min.y
    }

    /// Extent along both axes.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.dx(), self.dy())
    }

    /// Whether the rectangle has no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` lies inside the rectangle.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Move the rectangle by `offset`.
    #[inline]
    pub fn translate(&self, offset: Point) -> Self {
        Self::new(self.min + offset, self.max + offset)
    }

    /// Convert to device pixels.
    pub fn pixels(&self, density: Density) -> PixelRect {
        PixelRect {
            min: self.min.pixels(density),
            max: self.max.pixels(density),
        }
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// A position in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

/// A size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelSize {
    pub width: i32,
    pub height: i32,
}

/// A rectangle in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelRect {
    pub min: PixelPoint,
    pub max: PixelPoint,
}

impl PixelRect {
    /// Width in pixels.
    #[inline]
    pub const fn dx(&self) -> i32 {
        self.max.x.saturating_sub(self.min.x)
    }

    /// Height in pixels.
    #[inline]
    pub const fn dy(&self) -> i32 {
        self.max.y.saturating_sub(self.min.y)
    }
}
