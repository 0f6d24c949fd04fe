//! Riemann zeta function ζ(s) = Σ_{k≥1} k^-s.
//!
//! Below s = 64, ζ* is obtained from η* through
//! ζ*(s) = (2^(s-1)·η*(s) + 1) / (2^(s-1) - 1); above it two or three terms
//! of the series suffice. Negative arguments are reflected to 1 - s, and
//! non-positive integers come from the Bernoulli numbers.

#![allow(clippy::excessive_precision)]

use crate::algo::constants::{ZETA_DIRECT_LIMIT, ZETA_TABLE_CUTOFF};
use crate::algo::direct::direct_tail;
use crate::algo::lattice::Lattice;
use crate::algo::reflect::{Family, Reflection};
use crate::bernoulli::bernoulli_number;
use crate::eta::eta_star_real;
use crate::machine::ExtendedFloat;
use crate::utils::{exp2_m1, integer_argument, restar, saturate, unstar};

/// ζ(n) - 1 for n = 2, 3, ..., 65.
#[rustfmt::skip]
const ZETA_STAR_TABLE: [f64; 64] = [
     6.4493406684822643647e-01,   2.0205690315959428540e-01,
     8.2323233711138191516e-02,   3.6927755143369926331e-02,
     1.7343061984449139715e-02,   8.3492773819228268398e-03,
     4.0773561979443393787e-03,   2.0083928260822144179e-03,
     9.9457512781808533715e-04,   4.9418860411946455870e-04,
     2.4608655330804829864e-04,   1.2271334757848914675e-04,
     6.1248135058704829259e-05,   3.0588236307020493552e-05,
     1.5282259408651871733e-05,   7.6371976378997622736e-06,
     3.8172932649998398565e-06,   1.9082127165539389257e-06,
     9.5396203387279611315e-07,   4.7693298678780646312e-07,
     2.3845050272773299000e-07,   1.1921992596531107307e-07,
     5.9608189051259479612e-08,   2.9803503514652280186e-08,
     1.4901554828365041235e-08,   7.4507117898354294920e-09,
     3.7253340247884570548e-09,   1.8626597235130490064e-09,
     9.3132743241966818287e-10,   4.6566290650337840730e-10,
     2.3283118336765054920e-10,   1.1641550172700519776e-10,
     5.8207720879027008892e-11,   2.9103850444970996869e-11,
     1.4551921891041984236e-11,   7.2759598350574810145e-12,
     3.6379795473786511902e-12,   1.8189896503070659476e-12,
     9.0949478402638892825e-13,   4.5474737830421540268e-13,
     2.2737368458246525152e-13,   1.1368684076802278493e-13,
     5.6843419876275856093e-14,   2.8421709768893018555e-14,
     1.4210854828031606770e-14,   7.1054273952108527129e-15,
     3.5527136913371136733e-15,   1.7763568435791203275e-15,
     8.8817842109308159031e-16,   4.4408921031438133642e-16,
     2.2204460507980419840e-16,   1.1102230251410661337e-16,
     5.5511151248454812437e-17,   2.7755575621361241726e-17,
     1.3877787809725232763e-17,   6.9388939045441536974e-18,
     3.4694469521659226247e-18,   1.7347234760475765720e-18,
     8.6736173801199337283e-19,   4.3368086900206504875e-19,
     2.1684043449972197850e-19,   1.0842021724942414063e-19,
     5.4210108624566454109e-20,   2.7105054312234688320e-20,
];

/// ζ(s) in extended precision.
///
/// Returns `E::MACH_HUGE` at the pole s = 1.
pub fn riemann_zeta<E: ExtendedFloat>(s: E) -> E {
    match integer_argument(s) {
        Some(n) => riemann_zeta_int(n),
        None => zeta_real(s),
    }
}

/// ζ*(s) = ζ(s) - 1 in extended precision.
pub fn riemann_zeta_star<E: ExtendedFloat>(s: E) -> E {
    match integer_argument(s) {
        Some(n) => riemann_zeta_star_int(n),
        None => zeta_star_real(s),
    }
}

/// ζ(n) for integer n.
///
/// ζ(1-k) = -B(k)/k for k ≥ 2, which is exact at the trivial zeros.
pub fn riemann_zeta_int<E: ExtendedFloat>(n: i32) -> E {
    match n {
        n if n < 0 => {
            let k = n.unsigned_abs() as usize + 1;
            if k % 2 == 0 && k > E::BERNOULLI_MAX_INDEX {
                // B(k) overflows but B(k)/k may not.
                return zeta_real(E::from_f64(f64::from(n)));
            }
            -bernoulli_number::<E>(k) / E::from_f64(k as f64)
        }
        0 => E::from_f64(-0.5),
        1 => E::MACH_HUGE,
        n => unstar(riemann_zeta_star_int(n)),
    }
}

/// ζ*(n) = ζ(n) - 1 for integer n.
pub fn riemann_zeta_star_int<E: ExtendedFloat>(n: i32) -> E {
    match n {
        n if n < 0 => restar(riemann_zeta_int(n)),
        0 => E::from_f64(-1.5),
        1 => E::MACH_HUGE,
        n if n < ZETA_TABLE_CUTOFF => E::from_f64(ZETA_STAR_TABLE[(n - 2) as usize]),
        n => direct_tail(E::from_f64(f64::from(n)), Lattice::Natural),
    }
}

pub(crate) fn zeta_star_real<E: ExtendedFloat>(s: E) -> E {
    if s.is_nan() {
        return s;
    }
    let one = E::one();
    if s == one {
        return E::MACH_HUGE;
    }

    if s >= E::from_f64(ZETA_DIRECT_LIMIT) {
        direct_tail(s, Lattice::Natural)
    } else if s >= -E::MACH_EPSILON {
        let sm1 = s - one;
        let scale = sm1.exp2();
        saturate((scale * eta_star_real(s) + one) / exp2_m1(sm1))
    } else {
        let u = one - s;
        Reflection::new(Family::Zeta, u).apply_star(zeta_star_real(u))
    }
}

pub(crate) fn zeta_real<E: ExtendedFloat>(s: E) -> E {
    if s < -E::MACH_EPSILON {
        let u = E::one() - s;
        Reflection::new(Family::Zeta, u).apply_full(zeta_star_real(u))
    } else {
        unstar(zeta_star_real(s))
    }
}
