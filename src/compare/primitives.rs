//! Total orderings for primitive values.
//!
//! The integer comparisons are the natural order. The floating-point
//! comparisons are total: `-0.0` sorts before `0.0`, and every NaN compares
//! equal to every other NaN and greater than positive infinity.

use std::cmp::Ordering;

/// Compares two 32-bit integers.
#[inline]
#[must_use]
pub fn compare_ints(left: i32, right: i32) -> Ordering {
    left.cmp(&right)
}

/// Compares two 64-bit integers.
#[inline]
#[must_use]
pub fn compare_longs(left: i64, right: i64) -> Ordering {
    left.cmp(&right)
}

/// Compares two 16-bit integers.
#[inline]
#[must_use]
pub fn compare_shorts(left: i16, right: i16) -> Ordering {
    left.cmp(&right)
}

/// Compares two characters by scalar value.
#[inline]
#[must_use]
pub fn compare_chars(left: char, right: char) -> Ordering {
    left.cmp(&right)
}

/// Compares two booleans; `false` sorts before `true`.
#[inline]
#[must_use]
pub fn compare_booleans(left: bool, right: bool) -> Ordering {
    left.cmp(&right)
}

/// Compares two `f32` values in the total order described in the module
/// documentation.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use setwise::compare::compare_floats;
///
/// assert_eq!(compare_floats(-0.0, 0.0), Ordering::Less);
/// assert_eq!(compare_floats(f32::NAN, f32::INFINITY), Ordering::Greater);
/// assert_eq!(compare_floats(f32::NAN, -f32::NAN), Ordering::Equal);
/// ```
#[must_use]
pub fn compare_floats(left: f32, right: f32) -> Ordering {
    match (left.is_nan(), right.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => left.total_cmp(&right),
    }
}

/// Compares two `f64` values in the total order described in the module
/// documentation.
#[must_use]
pub fn compare_doubles(left: f64, right: f64) -> Ordering {
    match (left.is_nan(), right.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => left.total_cmp(&right),
    }
}
