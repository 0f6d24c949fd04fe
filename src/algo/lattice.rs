//! Points at which the Dirichlet series of the family are sampled.

use crate::machine::ExtendedFloat;

/// Summation lattice of a Dirichlet series Σ χ(k)·k^-s.
///
/// The star functions drop lattice point 0 (which is always 1), so every
/// kernel in [`crate::algo`] starts at point 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lattice {
    /// k = 1, 2, 3, ... (ζ, η)
    Natural,
    /// k = 1, 3, 5, ... (λ, β)
    Odd,
}

impl Lattice {
    /// The `k`-th lattice point, counting from 0.
    #[inline]
    pub(crate) fn point<E: ExtendedFloat>(self, k: usize) -> E {
        match self {
            Lattice::Natural => E::from_f64((k + 1) as f64),
            Lattice::Odd => E::from_f64((2 * k + 1) as f64),
        }
    }

    /// `point(k)^-s`
    #[inline]
    pub(crate) fn term<E: ExtendedFloat>(self, k: usize, s: E) -> E {
        self.point::<E>(k).powf(-s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_points() {
        assert_eq!(Lattice::Natural.point::<f64>(0), 1.0);
        assert_eq!(Lattice::Natural.point::<f64>(4), 5.0);
        assert_eq!(Lattice::Odd.point::<f64>(0), 1.0);
        assert_eq!(Lattice::Odd.point::<f64>(4), 9.0);
    }

    #[test]
    fn terms_are_negative_powers() {
        assert_eq!(Lattice::Natural.term(1, 2.0_f64), 0.25);
        assert_eq!(Lattice::Odd.term(1, 2.0_f64), 1.0 / 9.0);
        assert_eq!(Lattice::Odd.term(2, 0.0_f64), 1.0);
    }
}
