//! Property-based invariant tests for lengths and rectangles.
//!
//! 1. Unit round-trips are exact: `(n * unit).as_unit() == n`.
//! 2. The unbounded sentinel absorbs addition with any finite length, and
//!    subtracting it from a finite length gives the most negative length.
//! 3. Addition of small finite lengths is commutative and invertible.
//! 4. `clamp` stays inside `[min, max]` whenever `min <= max`.
//! 5. Rectangles built from swapped corners are identical and normalised.
//! 6. Pixel conversion at nominal density is exact for whole DIP.

use proptest::prelude::*;
use weft_core::geometry::{Length, Point, Rectangle};
use weft_core::Density;

fn small_length() -> impl Strategy<Value = Length> {
    (-1_000_000i64..=1_000_000).prop_map(Length::from_raw)
}

fn small_point() -> impl Strategy<Value = Point> {
    (small_length(), small_length()).prop_map(|(x, y)| Point::new(x, y))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Unit round-trips
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unit_round_trips_are_exact(n in -100_000i64..=100_000) {
        prop_assert_eq!(Length::from_dip(n).dip(), n as f64);
        prop_assert_eq!(Length::from_pt(n).pt(), n as f64);
        prop_assert_eq!(Length::from_pc(n).pc(), n as f64);
        prop_assert_eq!(Length::from_inch(n).inch(), n as f64);
        prop_assert_eq!(Length::DIP * n, Length::from_dip(n));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Unbounded absorbs addition
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unbounded_absorbs(x in any::<i64>().prop_filter("finite", |v| *v != i64::MAX)) {
        let x = Length::from_raw(x);
        prop_assert!((Length::UNBOUNDED + x).is_unbounded());
        prop_assert!((x + Length::UNBOUNDED).is_unbounded());
        prop_assert!(Length::UNBOUNDED.max(x).is_unbounded());
        prop_assert!((Length::UNBOUNDED - x).is_unbounded());
        prop_assert_eq!(x - Length::UNBOUNDED, -Length::UNBOUNDED);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Finite addition
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn addition_commutes_and_inverts(a in small_length(), b in small_length()) {
        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!(a + b - b, a);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Clamp bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn clamp_within_bounds(v in small_length(), a in small_length(), b in small_length()) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let out = v.clamp(min, max);
        prop_assert!(out >= min && out <= max);
    }

    #[test]
    fn clamp_inverted_bounds_yields_min(v in small_length(), a in small_length(), b in small_length()) {
        prop_assume!(a > b);
        prop_assert_eq!(v.clamp(a, b), a);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Rectangle normalisation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rectangle_corner_order_irrelevant(a in small_point(), b in small_point()) {
        let r1 = Rectangle::from_corners(a, b);
        let r2 = Rectangle::from_corners(b, a);
        prop_assert_eq!(r1, r2);
        prop_assert!(r1.min.x <= r1.max.x && r1.min.y <= r1.max.y);
        prop_assert!(r1.dx() >= Length::ZERO && r1.dy() >= Length::ZERO);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Nominal density pixels
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn nominal_pixels_match_dip(n in -10_000i64..=10_000) {
        let px = Length::from_dip(n).to_pixels(Density::NOMINAL.x);
        prop_assert_eq!(i64::from(px), n);
        prop_assert_eq!(Length::from_pixels_x(px, Density::NOMINAL), Length::from_dip(n));
    }
}
