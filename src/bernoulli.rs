//! Bernoulli numbers B(n).
//!
//! B(0) = 1, B(1) = -1/2, B(n) = 0 for odd n > 1. Even indices come from the
//! sparse table in [`crate::algo::recurrence`]; past
//! [`ExtendedFloat::BERNOULLI_MAX_INDEX`] the result saturates to
//! `-MACH_HUGE` for n ≡ 0 (mod 4) and `+MACH_HUGE` for n ≡ 2 (mod 4), the
//! sign of (-1)^(n/2+1) in the asymptotic formula.

#![allow(clippy::excessive_precision)]

use crate::algo::constants::TWO_PI_SQUARED;
use crate::algo::recurrence::SparseSequence;
use crate::machine::ExtendedFloat;
use crate::utils::saturate;

/// B(n) for n = 0, 2, 4, ..., 60.
#[rustfmt::skip]
const BERNOULLI_DENSE: [f64; 31] = [
     1.0000000000000000000e+00,   1.6666666666666666667e-01,
    -3.3333333333333333333e-02,   2.3809523809523809524e-02,
    -3.3333333333333333333e-02,   7.5757575757575757576e-02,
    -2.5311355311355311355e-01,   1.1666666666666666667e+00,
    -7.0921568627450980392e+00,   5.4971177944862155388e+01,
    -5.2912424242424242424e+02,   6.1921231884057971014e+03,
    -8.6580253113553113553e+04,   1.4255171666666666667e+06,
    -2.7298231067816091954e+07,   6.0158087390064236838e+08,
    -1.5116315767092156863e+10,   4.2961464306116666667e+11,
    -1.3711655205088332772e+13,   4.8833231897359316667e+14,
    -1.9296579341940068149e+16,   8.4169304757368261500e+17,
    -4.0338071854059455413e+19,   2.1150748638081991606e+21,
    -1.2086626522296525935e+23,   7.5008667460769643669e+24,
    -5.0387781014810689141e+26,   3.6528776484818123335e+28,
    -2.8498769302450882226e+30,   2.3865427499683627645e+32,
    -2.1399949257225333666e+34,
];

/// B(n) for n = 80, 100, ..., 240.
#[rustfmt::skip]
const BERNOULLI_SPARSE: [f64; 9] = [
    -2.0015583233248370275e+55,
    -2.8382249570693706959e+78,
    -2.2122776912707834942e+103,
    -4.8412600798208880509e+129,
    -1.8437723552033869728e+157,
    -8.5432893578833707719e+185,
    -3.6470772645191354362e+215,
    -1.1484933873465183994e+246,
    -2.2244891682179834668e+277,
];

pub(crate) static BERNOULLI: SparseSequence = SparseSequence {
    dense: &BERNOULLI_DENSE,
    sparse: &BERNOULLI_SPARSE,
    ratio_scale: TWO_PI_SQUARED,
    negative_residue: 0,
};

/// B(n) in extended precision.
///
/// Returns `±E::MACH_HUGE` when |B(n)| is not representable.
pub fn bernoulli_number<E: ExtendedFloat>(n: usize) -> E {
    match n {
        1 => E::from_f64(-0.5),
        n if n % 2 == 1 => E::zero(),
        n => saturate(BERNOULLI.value(n, E::BERNOULLI_MAX_INDEX)),
    }
}

/// B(n) from the dense table, for even n ≤ 60.
#[inline]
pub(crate) fn dense_bernoulli(n: usize) -> f64 {
    BERNOULLI_DENSE[n / 2]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn leading_values() {
        assert_eq!(bernoulli_number::<f64>(0), 1.0);
        assert_eq!(bernoulli_number::<f64>(1), -0.5);
        assert_eq!(bernoulli_number::<f64>(2), 1.0 / 6.0);
        assert_eq!(bernoulli_number::<f64>(3), 0.0);
        assert_eq!(bernoulli_number::<f64>(4), -1.0 / 30.0);
        assert_eq!(bernoulli_number::<f64>(12), -0.2531135531135531);
    }

    #[test]
    fn odd_indices_vanish() {
        for n in (3..600).step_by(2) {
            assert_eq!(bernoulli_number::<f64>(n), 0.0);
        }
    }

    #[test]
    fn dense_range_is_table_lookup() {
        for n in (0..=60).step_by(2) {
            assert_eq!(bernoulli_number::<f64>(n), BERNOULLI_DENSE[n / 2]);
        }
        assert_eq!(bernoulli_number::<f64>(60), -2.1399949257225335e+34);
    }

    #[test]
    fn sparse_anchors_are_exact() {
        assert_eq!(bernoulli_number::<f64>(100), -2.8382249570693707e+78);
        for (j, v) in BERNOULLI_SPARSE.iter().enumerate() {
            assert_eq!(bernoulli_number::<f64>(80 + 20 * j), *v);
        }
    }

    #[test]
    fn recurrence_values() {
        let cases = [
            (62, 2.0500975723478097e+36),
            (70, 3.212508210271803e+44),
            (90, 4.3328896986641194e+66),
            (150, 2.142610125066529e+143),
            (246, 7.534957120083251e+286),
            (258, 1.3352784187354634e+306),
        ];
        for (n, expected) in cases {
            let b = bernoulli_number::<f64>(n);
            assert!(rel(b, expected) < 8.0 * f64::EPSILON, "B({n}) = {b}, expected {expected}");
        }
    }

    #[test]
    fn signs_alternate_over_even_indices() {
        for n in (2..=258).step_by(2) {
            let b = bernoulli_number::<f64>(n);
            let positive = n % 4 == 2;
            assert_eq!(b > 0.0, positive, "B({n}) = {b}");
        }
    }

    #[test]
    fn saturation_past_max_index() {
        assert_eq!(bernoulli_number::<f64>(260), -f64::MAX);
        assert_eq!(bernoulli_number::<f64>(262), f64::MAX);
        assert_eq!(bernoulli_number::<f64>(1000), -f64::MAX);
        assert_eq!(bernoulli_number::<f64>(1002), f64::MAX);
        assert_eq!(bernoulli_number::<f64>(1001), 0.0);
    }
}
