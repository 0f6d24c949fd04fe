//! Riemann zeta family and Bernoulli/Euler numbers for real arguments.
//!
//! This crate evaluates the Riemann zeta function ζ, the Dirichlet eta (η),
//! lambda (λ) and beta (β) functions, their "star" forms f*(s) = f(s) - 1,
//! and the Bernoulli and Euler numbers, to near machine precision over the
//! whole real line.
//!
//! Every public function is generic over [`SpecialFloat`] (`f32`, `f64`). The
//! computation runs in the associated [`ExtendedFloat`] and the result is
//! narrowed with saturation: values outside the range of the output type come
//! back as `±MACH_HUGE` with the correct sign, and the pole at s = 1 returns
//! `+MACH_HUGE`. The `_raw` variants report which of these happened through
//! [`Status`]; the engine-level functions are available in [`extended`].
//!
//! # Example
//!
//! ```
//! use zeta_family::{bernoulli_number, riemann_zeta, riemann_zeta_raw, Status};
//!
//! let z: f64 = riemann_zeta(2.0);
//! assert!((z - core::f64::consts::PI.powi(2) / 6.0).abs() < 1e-15);
//!
//! let pole = riemann_zeta_raw(1.0_f64);
//! assert_eq!(pole.status, Status::Pole);
//! assert_eq!(pole.value, f64::MAX);
//!
//! assert_eq!(bernoulli_number::<f64>(3), 0.0);
//! ```
//!
//! # Features
//!
//! - `std` (default): implies `alloc`.
//! - `alloc`: enables the `_seq` functions returning `Vec`.
//!
//! Without `std` the crate is `no_std`; transcendental functions come from
//! `libm` through `num-traits`. Both configurations are expected to build:
//!
//! ```text
//! cargo build --no-default-features
//! cargo build --no-default-features --features alloc
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

mod algo;
mod bernoulli;
mod beta;
mod eta;
mod euler;
mod lambda;
pub mod machine;
pub mod types;
mod utils;
mod zeta;

pub use machine::{ExtendedFloat, SpecialFloat};
pub use types::{Error, SpecialResult, Status};

use crate::utils::narrow_saturating;

/// Engine-level functions, generic over [`ExtendedFloat`].
///
/// Results are already saturated to `±E::MACH_HUGE`; no narrowing is applied.
pub mod extended {
    pub use crate::bernoulli::bernoulli_number;
    pub use crate::beta::{catalan_beta, catalan_beta_int, catalan_beta_star, catalan_beta_star_int};
    pub use crate::eta::{dirichlet_eta, dirichlet_eta_int, dirichlet_eta_star, dirichlet_eta_star_int};
    pub use crate::euler::euler_number;
    pub use crate::lambda::{
        dirichlet_lambda, dirichlet_lambda_int, dirichlet_lambda_star, dirichlet_lambda_star_int,
    };
    pub use crate::zeta::{riemann_zeta, riemann_zeta_int, riemann_zeta_star, riemann_zeta_star_int};
}

/// Narrow an extended result, reporting `Status::Pole` when `pole` is set.
#[inline]
fn finish<T: SpecialFloat>(x: T::Extended, pole: bool) -> SpecialResult<T> {
    let result = narrow_saturating::<T>(x);
    if pole {
        SpecialResult::new(result.value, Status::Pole)
    } else {
        result
    }
}

// ── Bernoulli and Euler numbers ──

/// Bernoulli number B(n).
///
/// B(1) = -1/2 and B(n) = 0 for odd n > 1.
pub fn bernoulli_number<T: SpecialFloat>(n: usize) -> T {
    bernoulli_number_raw(n).value
}

/// Bernoulli number B(n) with overflow status.
pub fn bernoulli_number_raw<T: SpecialFloat>(n: usize) -> SpecialResult<T> {
    finish(bernoulli::bernoulli_number(n), false)
}

/// Euler number E(n). E(n) = 0 for odd n.
pub fn euler_number<T: SpecialFloat>(n: usize) -> T {
    euler_number_raw(n).value
}

/// Euler number E(n) with overflow status.
pub fn euler_number_raw<T: SpecialFloat>(n: usize) -> SpecialResult<T> {
    finish(euler::euler_number(n), false)
}

/// Compute B(start + j) for j = 0, 1, ..., count-1.
///
/// # Errors
///
/// [`Error::InvalidInput`] if `count` is zero or `start + count` overflows.
#[cfg(feature = "alloc")]
pub fn bernoulli_number_seq<T: SpecialFloat>(start: usize, count: usize) -> Result<Vec<T>, Error> {
    let end = sequence_end(start, count)?;
    Ok((start..end).map(bernoulli_number::<T>).collect())
}

/// Compute E(start + j) for j = 0, 1, ..., count-1.
///
/// # Errors
///
/// [`Error::InvalidInput`] if `count` is zero or `start + count` overflows.
#[cfg(feature = "alloc")]
pub fn euler_number_seq<T: SpecialFloat>(start: usize, count: usize) -> Result<Vec<T>, Error> {
    let end = sequence_end(start, count)?;
    Ok((start..end).map(euler_number::<T>).collect())
}

#[cfg(feature = "alloc")]
fn sequence_end(start: usize, count: usize) -> Result<usize, Error> {
    if count == 0 {
        return Err(Error::InvalidInput);
    }
    start.checked_add(count).ok_or(Error::InvalidInput)
}

// ── Riemann zeta ──

/// Riemann zeta function ζ(s). Returns `MACH_HUGE` at the pole s = 1.
pub fn riemann_zeta<T: SpecialFloat>(s: T) -> T {
    riemann_zeta_raw(s).value
}

/// ζ(s) with pole/overflow status.
pub fn riemann_zeta_raw<T: SpecialFloat>(s: T) -> SpecialResult<T> {
    finish(zeta::riemann_zeta(s.widen()), s == T::one())
}

/// ζ*(s) = ζ(s) - 1.
pub fn riemann_zeta_star<T: SpecialFloat>(s: T) -> T {
    riemann_zeta_star_raw(s).value
}

/// ζ*(s) with pole/overflow status.
pub fn riemann_zeta_star_raw<T: SpecialFloat>(s: T) -> SpecialResult<T> {
    finish(zeta::riemann_zeta_star(s.widen()), s == T::one())
}

/// ζ(n) for integer n.
pub fn riemann_zeta_int<T: SpecialFloat>(n: i32) -> T {
    riemann_zeta_int_raw(n).value
}

/// ζ(n) for integer n, with pole/overflow status.
pub fn riemann_zeta_int_raw<T: SpecialFloat>(n: i32) -> SpecialResult<T> {
    finish(zeta::riemann_zeta_int(n), n == 1)
}

/// ζ*(n) = ζ(n) - 1 for integer n.
pub fn riemann_zeta_star_int<T: SpecialFloat>(n: i32) -> T {
    riemann_zeta_star_int_raw(n).value
}

/// ζ*(n) for integer n, with pole/overflow status.
pub fn riemann_zeta_star_int_raw<T: SpecialFloat>(n: i32) -> SpecialResult<T> {
    finish(zeta::riemann_zeta_star_int(n), n == 1)
}

// ── Dirichlet eta ──

/// Dirichlet eta function η(s).
pub fn dirichlet_eta<T: SpecialFloat>(s: T) -> T {
    dirichlet_eta_raw(s).value
}

/// η(s) with overflow status.
pub fn dirichlet_eta_raw<T: SpecialFloat>(s: T) -> SpecialResult<T> {
    finish(eta::dirichlet_eta(s.widen()), false)
}

/// η*(s) = η(s) - 1.
pub fn dirichlet_eta_star<T: SpecialFloat>(s: T) -> T {
    dirichlet_eta_star_raw(s).value
}

/// η*(s) with overflow status.
pub fn dirichlet_eta_star_raw<T: SpecialFloat>(s: T) -> SpecialResult<T> {
    finish(eta::dirichlet_eta_star(s.widen()), false)
}

/// η(n) for integer n.
pub fn dirichlet_eta_int<T: SpecialFloat>(n: i32) -> T {
    dirichlet_eta_int_raw(n).value
}

/// η(n) for integer n, with overflow status.
pub fn dirichlet_eta_int_raw<T: SpecialFloat>(n: i32) -> SpecialResult<T> {
    finish(eta::dirichlet_eta_int(n), false)
}

/// η*(n) = η(n) - 1 for integer n.
pub fn dirichlet_eta_star_int<T: SpecialFloat>(n: i32) -> T {
    dirichlet_eta_star_int_raw(n).value
}

/// η*(n) for integer n, with overflow status.
pub fn dirichlet_eta_star_int_raw<T: SpecialFloat>(n: i32) -> SpecialResult<T> {
    finish(eta::dirichlet_eta_star_int(n), false)
}

// ── Dirichlet lambda ──

/// Dirichlet lambda function λ(s). Returns `MACH_HUGE` at the pole s = 1.
pub fn dirichlet_lambda<T: SpecialFloat>(s: T) -> T {
    dirichlet_lambda_raw(s).value
}

/// λ(s) with pole/overflow status.
pub fn dirichlet_lambda_raw<T: SpecialFloat>(s: T) -> SpecialResult<T> {
    finish(lambda::dirichlet_lambda(s.widen()), s == T::one())
}

/// λ*(s) = λ(s) - 1.
pub fn dirichlet_lambda_star<T: SpecialFloat>(s: T) -> T {
    dirichlet_lambda_star_raw(s).value
}

/// λ*(s) with pole/overflow status.
pub fn dirichlet_lambda_star_raw<T: SpecialFloat>(s: T) -> SpecialResult<T> {
    finish(lambda::dirichlet_lambda_star(s.widen()), s == T::one())
}

/// λ(n) for integer n.
pub fn dirichlet_lambda_int<T: SpecialFloat>(n: i32) -> T {
    dirichlet_lambda_int_raw(n).value
}

/// λ(n) for integer n, with pole/overflow status.
pub fn dirichlet_lambda_int_raw<T: SpecialFloat>(n: i32) -> SpecialResult<T> {
    finish(lambda::dirichlet_lambda_int(n), n == 1)
}

/// λ*(n) = λ(n) - 1 for integer n.
pub fn dirichlet_lambda_star_int<T: SpecialFloat>(n: i32) -> T {
    dirichlet_lambda_star_int_raw(n).value
}

/// λ*(n) for integer n, with pole/overflow status.
pub fn dirichlet_lambda_star_int_raw<T: SpecialFloat>(n: i32) -> SpecialResult<T> {
    finish(lambda::dirichlet_lambda_star_int(n), n == 1)
}

// ── Dirichlet (Catalan) beta ──

/// Dirichlet beta function β(s); β(2) is Catalan's constant.
pub fn catalan_beta<T: SpecialFloat>(s: T) -> T {
    catalan_beta_raw(s).value
}

/// β(s) with overflow status.
pub fn catalan_beta_raw<T: SpecialFloat>(s: T) -> SpecialResult<T> {
    finish(beta::catalan_beta(s.widen()), false)
}

/// β*(s) = β(s) - 1.
pub fn catalan_beta_star<T: SpecialFloat>(s: T) -> T {
    catalan_beta_star_raw(s).value
}

/// β*(s) with overflow status.
pub fn catalan_beta_star_raw<T: SpecialFloat>(s: T) -> SpecialResult<T> {
    finish(beta::catalan_beta_star(s.widen()), false)
}

/// β(n) for integer n.
pub fn catalan_beta_int<T: SpecialFloat>(n: i32) -> T {
    catalan_beta_int_raw(n).value
}

/// β(n) for integer n, with overflow status.
pub fn catalan_beta_int_raw<T: SpecialFloat>(n: i32) -> SpecialResult<T> {
    finish(beta::catalan_beta_int(n), false)
}

/// β*(n) = β(n) - 1 for integer n.
pub fn catalan_beta_star_int<T: SpecialFloat>(n: i32) -> T {
    catalan_beta_star_int_raw(n).value
}

/// β*(n) for integer n, with overflow status.
pub fn catalan_beta_star_int_raw<T: SpecialFloat>(n: i32) -> SpecialResult<T> {
    finish(beta::catalan_beta_star_int(n), false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    // ── closed forms ──

    #[test]
    fn closed_form_values() {
        let pi = core::f64::consts::PI;
        assert!((riemann_zeta_star(2.0_f64) - 0.6449340668482264).abs() < 1e-16);
        assert_eq!(catalan_beta(1.0_f64), core::f64::consts::FRAC_PI_4);
        assert_eq!(dirichlet_eta(1.0_f64), core::f64::consts::LN_2);
        assert!(rel(dirichlet_lambda(2.0_f64), pi * pi / 8.0) < 1e-15);
        assert_eq!(bernoulli_number::<f64>(0), 1.0);
        assert_eq!(bernoulli_number::<f64>(1), -0.5);
        assert_eq!(bernoulli_number::<f64>(2), 1.0 / 6.0);
        assert_eq!(bernoulli_number::<f64>(3), 0.0);
        assert_eq!(euler_number::<f64>(0), 1.0);
        assert_eq!(euler_number::<f64>(2), -1.0);
    }

    #[test]
    fn integer_and_real_entry_points_agree() {
        for n in [-9_i32, -4, -1, 0, 2, 5, 17, 40, 70] {
            let s = f64::from(n);
            assert_eq!(riemann_zeta::<f64>(s), riemann_zeta_int::<f64>(n));
            assert_eq!(dirichlet_eta_star::<f64>(s), dirichlet_eta_star_int::<f64>(n));
            assert_eq!(dirichlet_lambda::<f64>(s), dirichlet_lambda_int::<f64>(n));
            assert_eq!(catalan_beta_star::<f64>(s), catalan_beta_star_int::<f64>(n));
        }
    }

    // ── cross-family identities ──

    #[test]
    fn zeta_from_eta() {
        let mut s = -30.15_f64;
        while s < 60.0 {
            let z = riemann_zeta(s);
            let via_eta = dirichlet_eta(s) / -(((1.0 - s) * core::f64::consts::LN_2).exp_m1());
            assert!(rel(via_eta, z) < 1e-13, "s = {s}: {via_eta} vs {z}");
            s += 0.3;
        }
    }

    #[test]
    fn lambda_from_zeta() {
        for s in [-11.5_f64, -3.3, 0.4, 1.7, 6.0, 15.5, 33.3] {
            let expected = (1.0 - 2.0_f64.powf(-s)) * riemann_zeta(s);
            assert!(rel(dirichlet_lambda(s), expected) < 1e-13, "s = {s}");
        }
    }

    #[test]
    fn star_and_full_agree() {
        for s in [-5.5_f64, -0.25, 0.5, 3.5, 25.0] {
            assert!((riemann_zeta_star(s) + 1.0 - riemann_zeta(s)).abs() < 1e-14 * riemann_zeta(s).abs().max(1.0));
            assert!((dirichlet_eta_star(s) + 1.0 - dirichlet_eta(s)).abs() < 1e-14 * dirichlet_eta(s).abs().max(1.0));
            assert!((catalan_beta_star(s) + 1.0 - catalan_beta(s)).abs() < 1e-14 * catalan_beta(s).abs().max(1.0));
            assert!((dirichlet_lambda_star(s) + 1.0 - dirichlet_lambda(s)).abs() < 1e-14 * dirichlet_lambda(s).abs().max(1.0));
        }
    }

    // ── regime boundaries ──

    fn boundary_ratio(f: fn(f64) -> f64, t: f64) -> f64 {
        let d = 1.0e-6;
        (f(t + d) - f(t)) / (f(t) - f(t - d))
    }

    #[test]
    fn continuous_across_regime_boundaries() {
        let cases: [(fn(f64) -> f64, f64); 5] = [
            (riemann_zeta_star::<f64>, 18.0),
            (riemann_zeta_star::<f64>, 64.0),
            (dirichlet_eta_star::<f64>, 18.0),
            (catalan_beta_star::<f64>, 10.0),
            (dirichlet_lambda_star::<f64>, 10.0),
        ];
        for (f, t) in cases {
            let ratio = boundary_ratio(f, t);
            assert!((ratio - 1.0).abs() < 1e-4, "threshold {t}: ratio {ratio}");
        }
    }

    #[test]
    fn continuous_across_zero() {
        for f in [riemann_zeta::<f64>, dirichlet_eta::<f64>, catalan_beta::<f64>] {
            let left = f(-1.0e-9);
            let right = f(1.0e-9);
            assert!((left - right).abs() < 1e-8);
            assert!((f(-1.0e-20) - f(0.0)).abs() < 1e-15);
        }
    }

    // ── poles and saturation ──

    #[test]
    fn pole_status() {
        for r in [
            riemann_zeta_raw(1.0_f64),
            riemann_zeta_star_raw(1.0_f64),
            dirichlet_lambda_raw(1.0_f64),
            dirichlet_lambda_star_raw(1.0_f64),
            riemann_zeta_int_raw(1),
            dirichlet_lambda_star_int_raw(1),
        ] {
            assert_eq!(r.status, Status::Pole);
            assert_eq!(r.value, f64::MAX);
        }
        let r = riemann_zeta_raw(1.0_f32);
        assert_eq!(r.status, Status::Pole);
        assert_eq!(r.value, f32::MAX);

        let r = dirichlet_eta_raw(1.0_f64);
        assert_eq!(r.status, Status::Normal);
    }

    #[test]
    fn overflow_status() {
        let r = dirichlet_eta_raw(-250.5_f64);
        assert_eq!(r.value, -f64::MAX);
        assert_eq!(r.status, Status::Overflow);

        let r = riemann_zeta_raw(-250.5_f64);
        assert_eq!(r.status, Status::Normal);
        assert!(rel(r.value, 1.3106450149434267e+293) < 1e-12);

        let r = catalan_beta_raw(-40.5_f32);
        assert_eq!(r.value, f32::MAX);
        assert_eq!(r.status, Status::Overflow);
    }

    #[test]
    fn bernoulli_saturation_alternates() {
        for n in (260..400).step_by(2) {
            let r = bernoulli_number_raw::<f64>(n);
            assert_eq!(r.status, Status::Overflow);
            let expected = if n % 4 == 0 { -f64::MAX } else { f64::MAX };
            assert_eq!(r.value, expected, "n = {n}");
        }
        assert_eq!(bernoulli_number_raw::<f64>(258).status, Status::Normal);
        assert_eq!(bernoulli_number::<f64>(1_000_001), 0.0);
    }

    #[test]
    fn euler_saturation_alternates() {
        for n in (188..400).step_by(2) {
            let expected = if n % 4 == 0 { f64::MAX } else { -f64::MAX };
            assert_eq!(euler_number::<f64>(n), expected, "n = {n}");
        }
        assert_eq!(euler_number_raw::<f64>(186).status, Status::Normal);
    }

    // ── f32 ──

    #[test]
    fn f32_entry_points() {
        assert!((riemann_zeta(2.0_f32) - 1.644934_f32).abs() < 1e-6);
        assert!((catalan_beta(2.0_f32) - 0.9159656_f32).abs() < 1e-6);
        assert!((dirichlet_eta(0.5_f32) - 0.6048986_f32).abs() < 1e-6);
        assert!((dirichlet_lambda(-0.5_f32) - 0.08610929_f32).abs() < 1e-7);
        assert_eq!(bernoulli_number::<f32>(2), 1.0 / 6.0);

        let r = bernoulli_number_raw::<f32>(70);
        assert_eq!(r.value, f32::MAX);
        assert_eq!(r.status, Status::Overflow);
        assert_eq!(bernoulli_number::<f32>(72), -f32::MAX);
        assert_eq!(euler_number::<f32>(60), f32::MAX);
    }

    #[test]
    fn nan_argument() {
        let r = riemann_zeta_raw(f64::NAN);
        assert!(r.value.is_nan());
        assert_eq!(r.status, Status::Normal);
        assert!(dirichlet_lambda(f32::NAN).is_nan());
        assert!(catalan_beta_star(f64::NAN).is_nan());
    }

    #[test]
    fn infinite_argument() {
        assert_eq!(riemann_zeta(f64::INFINITY), 1.0);
        assert_eq!(dirichlet_eta_star(f64::INFINITY), 0.0);
        assert_eq!(catalan_beta(f64::INFINITY), 1.0);
        assert_eq!(dirichlet_lambda_star(f64::INFINITY), 0.0);
    }

    // ── sequences ──

    #[cfg(feature = "alloc")]
    #[test]
    fn sequences_match_single_values() {
        let b = bernoulli_number_seq::<f64>(0, 80).unwrap();
        for (n, v) in b.iter().enumerate() {
            assert_eq!(*v, bernoulli_number::<f64>(n));
        }
        let e = euler_number_seq::<f32>(180, 12).unwrap();
        assert_eq!(e.len(), 12);
        assert_eq!(e[1], 0.0);
        assert_eq!(e[10], euler_number::<f32>(190));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn sequence_input_validation() {
        assert_eq!(bernoulli_number_seq::<f64>(0, 0), Err(Error::InvalidInput));
        assert_eq!(euler_number_seq::<f64>(usize::MAX, 2), Err(Error::InvalidInput));
        assert!(euler_number_seq::<f64>(usize::MAX - 1, 1).is_ok());
    }
}
