//! Binary and unary operator helpers
//!
//! Plain functions wrapping the standard operators so they can be passed by
//! name to [`mat_mul`](crate::mat_mul) and friends, or called from inside an
//! [`element_wise`](crate::element_wise) closure.
//!
//! ```
//! use matrso_core::functional::{multiplies, plus};
//! use matrso_core::{mat_mul, Matrix};
//!
//! let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
//! let p: Matrix<i32> = mat_mul(plus, multiplies, &a, &a);
//! assert_eq!(p.to_vec(), vec![7, 10, 15, 22]);
//! ```
//!
//! `min` and `max` keep the left operand on ties; [`min_by`] and [`max_by`]
//! take a strict "less than" predicate instead of `PartialOrd`.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};

#[inline]
pub fn plus<T: Add<U>, U>(lhs: T, rhs: U) -> T::Output {
    lhs + rhs
}

#[inline]
pub fn minus<T: Sub<U>, U>(lhs: T, rhs: U) -> T::Output {
    lhs - rhs
}

#[inline]
pub fn multiplies<T: Mul<U>, U>(lhs: T, rhs: U) -> T::Output {
    lhs * rhs
}

#[inline]
pub fn divides<T: Div<U>, U>(lhs: T, rhs: U) -> T::Output {
    lhs / rhs
}

#[inline]
pub fn modulus<T: Rem<U>, U>(lhs: T, rhs: U) -> T::Output {
    lhs % rhs
}

#[inline]
pub fn negate<T: Neg>(value: T) -> T::Output {
    -value
}

#[inline]
pub fn bit_and<T: BitAnd<U>, U>(lhs: T, rhs: U) -> T::Output {
    lhs & rhs
}

#[inline]
pub fn bit_or<T: BitOr<U>, U>(lhs: T, rhs: U) -> T::Output {
    lhs | rhs
}

#[inline]
pub fn bit_xor<T: BitXor<U>, U>(lhs: T, rhs: U) -> T::Output {
    lhs ^ rhs
}

/// Bitwise complement for integers, logical negation for `bool`
#[inline]
pub fn bit_not<T: Not>(value: T) -> T::Output {
    !value
}

#[inline]
pub fn left_shift<T: Shl<U>, U>(lhs: T, rhs: U) -> T::Output {
    lhs << rhs
}

#[inline]
pub fn right_shift<T: Shr<U>, U>(lhs: T, rhs: U) -> T::Output {
    lhs >> rhs
}

#[inline]
pub fn logical_and(lhs: bool, rhs: bool) -> bool {
    lhs && rhs
}

#[inline]
pub fn logical_or(lhs: bool, rhs: bool) -> bool {
    lhs || rhs
}

#[inline]
pub fn logical_not(value: bool) -> bool {
    !value
}

#[inline]
pub fn equal_to<T: PartialEq<U>, U>(lhs: T, rhs: U) -> bool {
    lhs == rhs
}

#[inline]
pub fn not_equal_to<T: PartialEq<U>, U>(lhs: T, rhs: U) -> bool {
    lhs != rhs
}

#[inline]
pub fn greater<T: PartialOrd<U>, U>(lhs: T, rhs: U) -> bool {
    lhs > rhs
}

#[inline]
pub fn less<T: PartialOrd<U>, U>(lhs: T, rhs: U) -> bool {
    lhs < rhs
}

#[inline]
pub fn greater_equal<T: PartialOrd<U>, U>(lhs: T, rhs: U) -> bool {
    lhs >= rhs
}

#[inline]
pub fn less_equal<T: PartialOrd<U>, U>(lhs: T, rhs: U) -> bool {
    lhs <= rhs
}

/// Smaller of two values, `lhs` on ties
#[inline]
pub fn min<T: PartialOrd>(lhs: T, rhs: T) -> T {
    if rhs < lhs {
        rhs
    } else {
        lhs
    }
}

/// Larger of two values, `lhs` on ties
#[inline]
pub fn max<T: PartialOrd>(lhs: T, rhs: T) -> T {
    if lhs < rhs {
        rhs
    } else {
        lhs
    }
}

/// [`min`] under a custom strict ordering
///
/// ```
/// use matrso_core::functional::min_by;
///
/// let closest_to_zero = min_by(|a: &i32, b: &i32| a.abs() < b.abs());
/// assert_eq!(closest_to_zero(-3, 2), 2);
/// assert_eq!(closest_to_zero(-2, 2), -2);
/// ```
pub fn min_by<T, C>(less: C) -> impl Fn(T, T) -> T
where
    C: Fn(&T, &T) -> bool,
{
    move |lhs, rhs| if less(&rhs, &lhs) { rhs } else { lhs }
}

/// [`max`] under a custom strict ordering
pub fn max_by<T, C>(less: C) -> impl Fn(T, T) -> T
where
    C: Fn(&T, &T) -> bool,
{
    move |lhs, rhs| if less(&lhs, &rhs) { rhs } else { lhs }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        assert_eq!(plus(2, 3), 5);
        assert_eq!(minus(2.5, 0.5), 2.0);
        assert_eq!(multiplies(4u8, 3u8), 12);
        assert_eq!(divides(7, 2), 3);
        assert_eq!(modulus(7, 3), 1);
        assert_eq!(negate(5i64), -5);
    }

    #[test]
    fn test_bitwise_and_shifts() {
        assert_eq!(bit_and(0b1100, 0b1010), 0b1000);
        assert_eq!(bit_or(0b1100, 0b1010), 0b1110);
        assert_eq!(bit_xor(0b1100, 0b1010), 0b0110);
        assert_eq!(bit_not(0u8), 255);
        assert!(bit_not(false));
        assert_eq!(left_shift(1u32, 4u32), 16);
        assert_eq!(right_shift(-16i32, 2), -4);
    }

    #[test]
    fn test_logical_and_comparisons() {
        assert!(logical_and(true, true));
        assert!(!logical_or(false, false));
        assert!(logical_not(false));
        assert!(equal_to(1, 1));
        assert!(not_equal_to('a', 'b'));
        assert!(greater(2, 1) && less(1, 2));
        assert!(greater_equal(2, 2) && less_equal(2, 2));
    }

    #[test]
    fn test_min_max_prefer_lhs_on_ties() {
        assert_eq!(min(3, 1), 1);
        assert_eq!(max(3, 1), 3);

        let by_key = |a: &(i32, char), b: &(i32, char)| a.0 < b.0;
        assert_eq!(min_by(by_key)((1, 'l'), (1, 'r')), (1, 'l'));
        assert_eq!(max_by(by_key)((1, 'l'), (1, 'r')), (1, 'l'));
        assert_eq!(max_by(by_key)((1, 'l'), (2, 'r')), (2, 'r'));
    }
}
