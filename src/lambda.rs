//! Dirichlet lambda function λ(s) = Σ_{k≥0} (2k+1)^-s = (1 - 2^-s)·ζ(s).

use crate::algo::constants::LAMBDA_DIRECT_LIMIT;
use crate::algo::direct::direct_tail;
use crate::algo::lattice::Lattice;
use crate::eta::eta_star_real;
use crate::machine::ExtendedFloat;
use crate::utils::{exp2_m1, integer_argument, restar, saturate, unstar};
use crate::zeta::{riemann_zeta_int, zeta_real, zeta_star_real};

/// λ(s) in extended precision.
///
/// Returns `E::MACH_HUGE` at the pole s = 1.
pub fn dirichlet_lambda<E: ExtendedFloat>(s: E) -> E {
    match integer_argument(s) {
        Some(n) => dirichlet_lambda_int(n),
        None => lambda_real(s),
    }
}

/// λ*(s) = λ(s) - 1 in extended precision.
pub fn dirichlet_lambda_star<E: ExtendedFloat>(s: E) -> E {
    match integer_argument(s) {
        Some(n) => dirichlet_lambda_star_int(n),
        None => lambda_star_real(s),
    }
}

/// λ(n) for integer n.
pub fn dirichlet_lambda_int<E: ExtendedFloat>(n: i32) -> E {
    match n {
        n if n < 0 => from_zeta(E::from_f64(f64::from(n)), riemann_zeta_int(n)),
        0 => E::zero(),
        1 => E::MACH_HUGE,
        n => lambda_real(E::from_f64(f64::from(n))),
    }
}

/// λ*(n) = λ(n) - 1 for integer n.
pub fn dirichlet_lambda_star_int<E: ExtendedFloat>(n: i32) -> E {
    match n {
        1 => E::MACH_HUGE,
        n if n >= 2 => lambda_star_real(E::from_f64(f64::from(n))),
        n => restar(dirichlet_lambda_int(n)),
    }
}

pub(crate) fn lambda_star_real<E: ExtendedFloat>(s: E) -> E {
    if s.is_nan() {
        return s;
    }
    if s == E::one() {
        return E::MACH_HUGE;
    }

    if s >= E::from_f64(LAMBDA_DIRECT_LIMIT) {
        direct_tail(s, Lattice::Odd)
    } else if s >= E::zero() {
        saturate((zeta_star_real(s) + eta_star_real(s)) * E::from_f64(0.5))
    } else {
        restar(lambda_real(s))
    }
}

pub(crate) fn lambda_real<E: ExtendedFloat>(s: E) -> E {
    if s == E::one() {
        E::MACH_HUGE
    } else if s > E::one() {
        unstar(lambda_star_real(s))
    } else {
        from_zeta(s, zeta_real(s))
    }
}

/// (1 - 2^-s)·ζ(s), saturated.
///
/// The factor is negative for s < 0, so a saturated ζ flips sign there.
fn from_zeta<E: ExtendedFloat>(s: E, zeta: E) -> E {
    if zeta == E::zero() {
        return E::zero();
    }
    if zeta.abs() >= E::MACH_HUGE {
        return if s < E::zero() { -zeta } else { zeta };
    }
    saturate(-exp2_m1(-s) * zeta)
}
