//! Dirichlet beta function β(s) = Σ_{k≥0} (-1)^k (2k+1)^-s.
//!
//! β(1) = π/4 and β(2) is Catalan's constant. At non-positive integers
//! β(-m) = E(m)/2.

use crate::algo::accel::alternating_star;
use crate::algo::constants::{BETA_ACCELERATOR_LIMIT, FRAC_PI_4};
use crate::algo::direct::alternating_tail;
use crate::algo::lattice::Lattice;
use crate::algo::reflect::{Family, Reflection};
use crate::euler::euler_number;
use crate::machine::ExtendedFloat;
use crate::utils::{integer_argument, restar, unstar};

/// β(s) in extended precision.
pub fn catalan_beta<E: ExtendedFloat>(s: E) -> E {
    match integer_argument(s) {
        Some(n) => catalan_beta_int(n),
        None => beta_real(s),
    }
}

/// β*(s) = β(s) - 1 in extended precision.
pub fn catalan_beta_star<E: ExtendedFloat>(s: E) -> E {
    match integer_argument(s) {
        Some(n) => catalan_beta_star_int(n),
        None => beta_star_real(s),
    }
}

/// β(n) for integer n.
pub fn catalan_beta_int<E: ExtendedFloat>(n: i32) -> E {
    match n {
        n if n < 0 => {
            let e = euler_number::<E>(n.unsigned_abs() as usize);
            if e.abs() >= E::MACH_HUGE {
                e
            } else {
                e * E::from_f64(0.5)
            }
        }
        0 => E::from_f64(0.5),
        1 => E::from_f64(FRAC_PI_4),
        n => beta_real(E::from_f64(f64::from(n))),
    }
}

/// β*(n) = β(n) - 1 for integer n.
pub fn catalan_beta_star_int<E: ExtendedFloat>(n: i32) -> E {
    if n >= 2 {
        beta_star_real(E::from_f64(f64::from(n)))
    } else {
        restar(catalan_beta_int(n))
    }
}

pub(crate) fn beta_star_real<E: ExtendedFloat>(s: E) -> E {
    if s.is_nan() {
        return s;
    }
    if s >= E::from_f64(BETA_ACCELERATOR_LIMIT) {
        alternating_tail(s, Lattice::Odd)
    } else if s >= -E::MACH_EPSILON {
        alternating_star(s, Lattice::Odd)
    } else {
        let u = E::one() - s;
        Reflection::new(Family::Beta, u).apply_star(beta_star_real(u))
    }
}

pub(crate) fn beta_real<E: ExtendedFloat>(s: E) -> E {
    if s < -E::MACH_EPSILON {
        let u = E::one() - s;
        Reflection::new(Family::Beta, u).apply_full(beta_star_real(u))
    } else {
        unstar(beta_star_real(s))
    }
}
