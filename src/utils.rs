//! Saturating conversions and exactly-reduced trigonometric helpers.

use crate::algo::constants::{LN_2, PI};
use crate::machine::{ExtendedFloat, SpecialFloat};
use crate::types::{SpecialResult, Status};
use num_traits::Float;

/// Replace an infinity by the overflow sentinel `±MACH_HUGE` of the same sign.
///
/// Finite values and NaN pass through unchanged.
#[inline]
pub(crate) fn saturate<E: ExtendedFloat>(x: E) -> E {
    if x.is_infinite() {
        E::MACH_HUGE.copysign(x)
    } else {
        x
    }
}

/// Overflow-safe narrowing from the extended type to a standard type.
///
/// Returns `x` rounded to `T` when it is in range, otherwise `±T::MACH_HUGE`
/// with the sign of `x` and [`Status::Overflow`]. The extended sentinel
/// `±E::MACH_HUGE` always maps to `±T::MACH_HUGE`.
#[inline]
pub(crate) fn narrow_saturating<T: SpecialFloat>(x: T::Extended) -> SpecialResult<T> {
    if x.is_nan() {
        return SpecialResult::new(T::nan(), Status::Normal);
    }
    let y = T::narrow(x);
    if y.is_infinite() || x.abs() >= T::MACH_HUGE.widen() {
        SpecialResult::new(T::MACH_HUGE.copysign(y), Status::Overflow)
    } else {
        SpecialResult::new(y, Status::Normal)
    }
}

/// `f(s) = f*(s) + 1`, leaving the overflow sentinel untouched.
#[inline]
pub(crate) fn unstar<E: ExtendedFloat>(star: E) -> E {
    if star.abs() >= E::MACH_HUGE {
        star
    } else {
        star + E::one()
    }
}

/// `f*(s) = f(s) - 1`, leaving the overflow sentinel untouched.
#[inline]
pub(crate) fn restar<E: ExtendedFloat>(value: E) -> E {
    if value.abs() >= E::MACH_HUGE {
        value
    } else {
        value - E::one()
    }
}

/// Integer value of `s`, if `s` is an integer representable as `i32`.
#[inline]
pub(crate) fn integer_argument<E: ExtendedFloat>(s: E) -> Option<i32> {
    if s.is_finite() && s.floor() == s {
        s.to_i32()
    } else {
        None
    }
}

/// `2^x - 1` without cancellation near `x = 0`.
#[inline]
pub(crate) fn exp2_m1<E: ExtendedFloat>(x: E) -> E {
    (x * E::from_f64(LN_2)).exp_m1()
}

/// `(sin(πr), cos(πr))` for `r` in `[0, 1/2]`.
///
/// Above `r = 1/4` the complementary angle is used so that neither result
/// is taken from the flat part of its curve.
#[inline]
fn sincospi_kernel<E: ExtendedFloat>(r: E) -> (E, E) {
    let pi = E::from_f64(PI);
    let quarter = E::from_f64(0.25);
    let half = E::from_f64(0.5);
    if r <= quarter {
        let a = r * pi;
        (a.sin(), a.cos())
    } else {
        let a = (half - r) * pi;
        (a.cos(), a.sin())
    }
}

/// Compute sin(π·x) with exact values at integers and half-integers.
///
/// Reduces the argument modulo 2 first, so `sinpi(n)` is exactly 0 for any
/// integer `n`, and `sinpi(n + 0.5)` is exactly ±1.
#[inline]
pub(crate) fn sinpi<E: ExtendedFloat>(x: E) -> E {
    let zero = E::zero();
    let one = E::one();
    let two = E::from_f64(2.0);
    let half = E::from_f64(0.5);
    let one_half = E::from_f64(1.5);

    // sinpi is odd: sinpi(-x) = -sinpi(x)
    let (ax, sign) = if x < zero { (-x, -one) } else { (x, one) };

    // Reduce to [0, 2): r = ax mod 2
    let r = ax % two;

    if r == zero || r == one {
        return zero;
    }
    if r == half {
        return sign;
    }
    if r == one_half {
        return -sign;
    }

    let s = if r < half {
        sincospi_kernel(r).0
    } else if r < one {
        sincospi_kernel(one - r).0
    } else if r < one_half {
        -sincospi_kernel(r - one).0
    } else {
        -sincospi_kernel(two - r).0
    };

    sign * s
}

/// Compute cos(π·x) with exact values at integers and half-integers.
///
/// Reduces the argument modulo 2 first, so `cospi(n + 0.5)` is exactly 0 for
/// any integer `n`, and `cospi(n)` is exactly ±1. Close to a zero the result
/// keeps full relative accuracy.
#[inline]
pub(crate) fn cospi<E: ExtendedFloat>(x: E) -> E {
    let zero = E::zero();
    let one = E::one();
    let two = E::from_f64(2.0);
    let half = E::from_f64(0.5);
    let one_half = E::from_f64(1.5);

    // cospi is even: cospi(-x) = cospi(x)
    let r = x.abs() % two;

    if r == zero {
        return one;
    }
    if r == half || r == one_half {
        return zero;
    }
    if r == one {
        return -one;
    }

    if r < half {
        sincospi_kernel(r).1
    } else if r < one {
        -sincospi_kernel(one - r).1
    } else if r < one_half {
        -sincospi_kernel(r - one).1
    } else {
        sincospi_kernel(two - r).1
    }
}
