//! Convergence acceleration for alternating Dirichlet series.
//!
//! Borwein's algorithm 2: with the shifted Chebyshev partial sums
//!
//! ```text
//! d(k) = n · Σ_{i=0}^{k} (n+i-1)! 4^i / ((n-i)! (2i)!),     d(n) = d(28)
//! ```
//!
//! the alternating sum Σ_{k≥0} (-1)^k a(k) is approximated by
//!
//! ```text
//! (1/d(n)) · Σ_{k=0}^{n-1} (-1)^k (d(n) - d(k)) a(k)
//! ```
//!
//! with relative error below 3·(3+√8)^-n ≈ 1e-21 for the monotone
//! sequences a(k) = point(k)^-s, s ≥ 0. Since d(0) = 1, the k = 0 term
//! contributes `1 - 1/d(n)` and the star function keeps only `-1/d(n)` of it.

#![allow(clippy::excessive_precision)]

use crate::algo::lattice::Lattice;
use crate::machine::ExtendedFloat;

/// Number of accelerated terms.
pub(crate) const ACCELERATOR_TERMS: usize = 28;

/// `WEIGHTS[0] = d(n)`, `WEIGHTS[k] = d(n) - d(k)` for k = 1, ..., n-1.
#[rustfmt::skip]
const WEIGHTS: [f64; ACCELERATOR_TERMS] = [
     1.3627255016508873068e+21,   1.3627255016508873052e+21,
     1.3627255016508868960e+21,   1.3627255016508443342e+21,
     1.3627255016484882350e+21,   1.3627255015680667156e+21,
     1.3627254997183717704e+21,   1.3627254693101999227e+21,
     1.3627250968100947886e+21,   1.3627215909267523502e+21,
     1.3626956473900183060e+21,   1.3625420077439050056e+21,
     1.3618038694440998011e+21,   1.3588967401402516111e+21,
     1.3494370336753487708e+21,   1.3238632065426459197e+21,
     1.2662189752233681224e+21,   1.1577121868576687391e+21,
     9.8720151942585542246e+20,   7.6405811396743685734e+20,
     5.2203334343176749056e+20,   3.0615062128148401357e+20,
     1.4960141684692326810e+20,   5.8848254855873560576e+19,
     1.7816240125877682176e+19,   3.8821028787933675520e+18,
     5.4043195528445952000e+17,   3.6028797018963968000e+16,
];

/// Star value Σ_{k≥1} (-1)^k point(k)^-s of an alternating series.
///
/// Gives η*(s) on [`Lattice::Natural`] and β*(s) on [`Lattice::Odd`].
/// Cost is a fixed 27 powers regardless of `s`.
pub(crate) fn alternating_star<E: ExtendedFloat>(s: E, lattice: Lattice) -> E {
    let mut sum = E::zero();
    // Smallest weights and terms first.
    for k in (1..ACCELERATOR_TERMS).rev() {
        let t = E::from_f64(WEIGHTS[k]) * lattice.term(k, s);
        sum = if k % 2 == 1 { sum - t } else { sum + t };
    }
    (sum - E::one()) / E::from_f64(WEIGHTS[0])
}
