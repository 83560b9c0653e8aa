// Copyright 2025 Lars Brubaker
// License: MIT
//
// Points, coordinate domains and the two geometric predicates used by the
// triangulator.
//
// Every predicate is evaluated in the coordinate type's `Wide` companion.
// For integer coordinates this is i128, and all values are translated to
// the query point before lifting, so each term of the in-circle
// determinant is bounded by 2^(4b+6) for inputs of magnitude 2^b. With
// |x|, |y| <= 2^29 the three-term sum stays below 2^127 and the predicates
// are exact. Floating coordinates are evaluated in f64 and carry the usual
// rounding limits near degenerate configurations. Their magnitude is capped
// at MAX_FLOAT_COORD: with |x|, |y| <= B every in-circle term is at most
// 64 B^4, so the sum stays finite while 192 B^4 < f64::MAX.

use core::cmp::Ordering;
use core::fmt;

use num_traits::{Num, Zero};

/// Largest absolute integer coordinate for which the predicates are exact.
pub const MAX_EXACT_COORD: i64 = 1 << 29;

/// Largest absolute float coordinate for which the predicates stay finite.
pub const MAX_FLOAT_COORD: f64 = 1e75;

/// A numeric coordinate type the triangulator can work with.
pub trait Coord: Copy + PartialEq + PartialOrd + fmt::Debug {
    /// Intermediate type for cross products and lifted distances.
    type Wide: Num + Copy + PartialOrd + fmt::Debug;

    fn widen(self) -> Self::Wide;

    /// Whether this value lies in the domain the predicates handle.
    fn is_representable(self) -> bool;
}

macro_rules! impl_int_coord {
    ($($t:ty),*) => {$(
        impl Coord for $t {
            type Wide = i128;

            #[inline]
            fn widen(self) -> i128 {
                self as i128
            }

            #[inline]
            fn is_representable(self) -> bool {
                (self as i64).unsigned_abs() <= MAX_EXACT_COORD as u64
            }
        }
    )*};
}

macro_rules! impl_float_coord {
    ($($t:ty),*) => {$(
        impl Coord for $t {
            type Wide = f64;

            #[inline]
            fn widen(self) -> f64 {
                self as f64
            }

            #[inline]
            fn is_representable(self) -> bool {
                // NaN fails the comparison.
                (self as f64).abs() <= MAX_FLOAT_COORD
            }
        }
    )*};
}

impl_int_coord!(i32, i64);
impl_float_coord!(f32, f64);

/// A point in the plane.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: Coord> Point<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    /// Lexicographic order: x first, then y.
    ///
    /// Incomparable floats (NaN) compare equal; callers reject them up front.
    pub fn lex_cmp(&self, other: &Self) -> Ordering {
        match self.x.partial_cmp(&other.x) {
            Some(Ordering::Equal) | None => {
                self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal)
            }
            Some(ord) => ord,
        }
    }

    #[inline]
    pub fn is_representable(&self) -> bool {
        self.x.is_representable() && self.y.is_representable()
    }
}

/// Sign of a cross product.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

impl Orientation {
    pub fn from_value<W: Num + PartialOrd>(value: W) -> Self {
        let zero = W::zero();
        if value > zero {
            Orientation::CounterClockwise
        } else if value < zero {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }
}

/// Cross product of (a - o) and (b - o), in the wide type.
#[inline]
pub fn cross<T: Coord>(o: Point<T>, a: Point<T>, b: Point<T>) -> T::Wide {
    let (ox, oy) = (o.x.widen(), o.y.widen());
    let (ax, ay) = (a.x.widen() - ox, a.y.widen() - oy);
    let (bx, by) = (b.x.widen() - ox, b.y.widen() - oy);
    ax * by - ay * bx
}

/// Orientation of the triangle (a, b, c).
#[inline]
pub fn orientation<T: Coord>(a: Point<T>, b: Point<T>, c: Point<T>) -> Orientation {
    Orientation::from_value(cross(a, b, c))
}

/// Returns true iff p lies strictly inside the circle through a, b, c.
/// a, b, c must be in counter-clockwise order; points exactly on the circle
/// are reported as outside.
pub fn in_circle<T: Coord>(p: Point<T>, a: Point<T>, b: Point<T>, c: Point<T>) -> bool {
    let (px, py) = (p.x.widen(), p.y.widen());
    let adx = a.x.widen() - px;
    let ady = a.y.widen() - py;
    let bdx = b.x.widen() - px;
    let bdy = b.y.widen() - py;
    let cdx = c.x.widen() - px;
    let cdy = c.y.widen() - py;

    let ab_det = adx * bdy - bdx * ady;
    let bc_det = bdx * cdy - cdx * bdy;
    let ca_det = cdx * ady - adx * cdy;

    let a_lift = adx * adx + ady * ady;
    let b_lift = bdx * bdx + bdy * bdy;
    let c_lift = cdx * cdx + cdy * cdy;

    a_lift * bc_det + b_lift * ca_det + c_lift * ab_det > T::Wide::zero()
}
