//! Direct summation of Dirichlet series for large arguments.
//!
//! Terms are generated largest first until the next one no longer changes
//! the partial sum, then added back smallest first.

use crate::algo::lattice::Lattice;
use crate::machine::ExtendedFloat;

/// Maximum number of (negative, positive) term pairs in an alternating tail.
pub(crate) const ALTERNATING_PAIRS: usize = 32;

/// Maximum number of terms in a positive tail.
pub(crate) const DIRECT_TERMS: usize = 64;

/// Σ_{k≥1} (-1)^k point(k)^-s by pairs.
///
/// After each pair the partial sum has moved down by the negative term and
/// back up by the positive one; once the pair no longer moves it the tail
/// has converged.
pub(crate) fn alternating_tail<E: ExtendedFloat>(s: E, lattice: Lattice) -> E {
    let mut terms = [E::zero(); 2 * ALTERNATING_PAIRS];
    let mut len = 0;
    let mut upper = E::zero();

    for p in 0..ALTERNATING_PAIRS {
        let neg = lattice.term(2 * p + 1, s);
        terms[len] = -neg;
        let lower = upper - neg;

        let pos = lattice.term(2 * p + 2, s);
        terms[len + 1] = pos;
        upper = lower + pos;
        len += 2;

        if upper == lower {
            break;
        }
    }

    terms[..len].iter().rev().fold(E::zero(), |acc, &t| acc + t)
}

/// Σ_{k≥1} point(k)^-s.
///
/// Gives ζ*(s) on [`Lattice::Natural`] and λ*(s) on [`Lattice::Odd`].
pub(crate) fn direct_tail<E: ExtendedFloat>(s: E, lattice: Lattice) -> E {
    let mut terms = [E::zero(); DIRECT_TERMS];
    let mut len = 0;
    let mut sum = E::zero();

    for k in 1..=DIRECT_TERMS {
        let t = lattice.term(k, s);
        terms[len] = t;
        len += 1;
        if sum + t == sum {
            break;
        }
        sum = sum + t;
    }

    terms[..len].iter().rev().fold(E::zero(), |acc, &t| acc + t)
}
