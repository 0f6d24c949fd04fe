//! Euler numbers E(n).
//!
//! E(n) = 0 for odd n. Even indices come from the sparse table in
//! [`crate::algo::recurrence`]; past [`ExtendedFloat::EULER_MAX_INDEX`] the
//! result saturates to `+MACH_HUGE` for n ≡ 0 (mod 4) and `-MACH_HUGE` for
//! n ≡ 2 (mod 4), the sign of (-1)^(n/2) in the asymptotic formula.

#![allow(clippy::excessive_precision)]

use crate::algo::constants::PI_OVER_2_SQUARED;
use crate::algo::recurrence::SparseSequence;
use crate::machine::ExtendedFloat;
use crate::utils::saturate;

/// E(n) for n = 0, 2, 4, ..., 60.
#[rustfmt::skip]
const EULER_DENSE: [f64; 31] = [
     1.0000000000000000000e+00,  -1.0000000000000000000e+00,
     5.0000000000000000000e+00,  -6.1000000000000000000e+01,
     1.3850000000000000000e+03,  -5.0521000000000000000e+04,
     2.7027650000000000000e+06,  -1.9936098100000000000e+08,
     1.9391512145000000000e+10,  -2.4048796754410000000e+12,
     3.7037118823752500000e+14,  -6.9348874393137901000e+16,
     1.5514534163557086905e+19,  -4.0870725092931238924e+21,
     1.2522596414036298655e+24,  -4.4154389324902310455e+26,
     1.7751939157953928944e+29,  -8.0723299235887898062e+31,
     4.1222060339517702122e+34,  -2.3489580527043108252e+37,
     1.4851150718114980018e+40,  -1.0364622733519612119e+43,
     7.9475794225975927036e+45,  -6.6675375166855449774e+48,
     6.0962786455685421587e+51,  -6.0532852481886218963e+54,
     6.5061624866846088477e+57,  -7.5466599390087390981e+60,
     9.4203218964202412042e+63,  -1.2622019251806218720e+67,
     1.8108911496579230497e+70,
];

/// E(n) for n = 80, 100, ..., 180.
#[rustfmt::skip]
const EULER_SPARSE: [f64; 6] = [
     1.8622915758412697044e+103,
     2.9035283466610974971e+138,
     2.4883915747829871632e+175,
     5.9873869042159547806e+213,
     2.5071830005737144960e+253,
     1.2773316636719806421e+294,
];

pub(crate) static EULER: SparseSequence = SparseSequence {
    dense: &EULER_DENSE,
    sparse: &EULER_SPARSE,
    ratio_scale: PI_OVER_2_SQUARED,
    negative_residue: 2,
};

/// E(n) in extended precision.
///
/// Returns `±E::MACH_HUGE` when |E(n)| is not representable.
pub fn euler_number<E: ExtendedFloat>(n: usize) -> E {
    if n % 2 == 1 {
        return E::zero();
    }
    saturate(EULER.value(n, E::EULER_MAX_INDEX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn leading_values() {
        assert_eq!(euler_number::<f64>(0), 1.0);
        assert_eq!(euler_number::<f64>(1), 0.0);
        assert_eq!(euler_number::<f64>(2), -1.0);
        assert_eq!(euler_number::<f64>(4), 5.0);
        assert_eq!(euler_number::<f64>(6), -61.0);
        assert_eq!(euler_number::<f64>(10), -50521.0);
    }

    #[test]
    fn odd_indices_vanish() {
        for n in (1..500).step_by(2) {
            assert_eq!(euler_number::<f64>(n), 0.0);
        }
    }

    #[test]
    fn dense_range_is_table_lookup() {
        for n in (0..=60).step_by(2) {
            assert_eq!(euler_number::<f64>(n), EULER_DENSE[n / 2]);
        }
        assert_eq!(euler_number::<f64>(60), 1.810891149657923e+70);
    }

    #[test]
    fn recurrence_values() {
        let cases = [
            (62, -2.7757101702071582e+73),
            (100, 2.9035283466610976e+138),
            (150, -2.778574047804574e+233),
            (186, -3.245547458389247e+306),
        ];
        for (n, expected) in cases {
            let e = euler_number::<f64>(n);
            assert!(rel(e, expected) < 8.0 * f64::EPSILON, "E({n}) = {e}, expected {expected}");
        }
    }

    #[test]
    fn signs_alternate_over_even_indices() {
        for n in (0..=186).step_by(2) {
            let e = euler_number::<f64>(n);
            let positive = n % 4 == 0;
            assert_eq!(e > 0.0, positive, "E({n}) = {e}");
        }
    }

    #[test]
    fn saturation_past_max_index() {
        assert_eq!(euler_number::<f64>(188), f64::MAX);
        assert_eq!(euler_number::<f64>(190), -f64::MAX);
        assert_eq!(euler_number::<f64>(2000), f64::MAX);
        assert_eq!(euler_number::<f64>(2002), -f64::MAX);
    }
}
