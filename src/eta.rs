//! Dirichlet eta function η(s) = Σ_{k≥1} (-1)^(k+1) k^-s.
//!
//! | argument | method |
//! |---|---|
//! | s ≥ 18 | [`alternating_tail`] |
//! | -ε ≤ s < 18 | [`alternating_star`] |
//! | s < -ε | reflection through η(1-s) |
//! | integer s ≤ 0 | (2^(1-s) - 1)·B(1-s)/(1-s) |

use crate::algo::accel::alternating_star;
use crate::algo::constants::{ETA_ACCELERATOR_LIMIT, LN_2};
use crate::algo::direct::alternating_tail;
use crate::algo::lattice::Lattice;
use crate::algo::reflect::{Family, Reflection};
use crate::bernoulli::bernoulli_number;
use crate::machine::ExtendedFloat;
use crate::utils::{exp2_m1, integer_argument, restar, saturate, unstar};

/// η(s) in extended precision.
pub fn dirichlet_eta<E: ExtendedFloat>(s: E) -> E {
    match integer_argument(s) {
        Some(n) => dirichlet_eta_int(n),
        None => eta_real(s),
    }
}

/// η*(s) = η(s) - 1 in extended precision.
pub fn dirichlet_eta_star<E: ExtendedFloat>(s: E) -> E {
    match integer_argument(s) {
        Some(n) => dirichlet_eta_star_int(n),
        None => eta_star_real(s),
    }
}

/// η(n) for integer n.
pub fn dirichlet_eta_int<E: ExtendedFloat>(n: i32) -> E {
    match n {
        n if n < 0 => {
            let k = n.unsigned_abs() as usize + 1;
            if k % 2 == 0 && k > E::BERNOULLI_MAX_INDEX {
                return eta_real(E::from_f64(f64::from(n)));
            }
            let kf = E::from_f64(k as f64);
            saturate(exp2_m1(kf) * (bernoulli_number::<E>(k) / kf))
        }
        0 => E::from_f64(0.5),
        1 => E::from_f64(LN_2),
        n => eta_real(E::from_f64(f64::from(n))),
    }
}

/// η*(n) = η(n) - 1 for integer n.
pub fn dirichlet_eta_star_int<E: ExtendedFloat>(n: i32) -> E {
    if n >= 2 {
        eta_star_real(E::from_f64(f64::from(n)))
    } else {
        restar(dirichlet_eta_int(n))
    }
}

pub(crate) fn eta_star_real<E: ExtendedFloat>(s: E) -> E {
    if s.is_nan() {
        return s;
    }
    if s >= E::from_f64(ETA_ACCELERATOR_LIMIT) {
        alternating_tail(s, Lattice::Natural)
    } else if s >= -E::MACH_EPSILON {
        alternating_star(s, Lattice::Natural)
    } else {
        let u = E::one() - s;
        Reflection::new(Family::Eta, u).apply_star(eta_star_real(u))
    }
}

pub(crate) fn eta_real<E: ExtendedFloat>(s: E) -> E {
    if s < -E::MACH_EPSILON {
        let u = E::one() - s;
        Reflection::new(Family::Eta, u).apply_full(eta_star_real(u))
    } else {
        unstar(eta_star_real(s))
    }
}
