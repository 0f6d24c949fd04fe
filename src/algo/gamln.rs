//! Natural logarithm of the Gamma function.
//!
//! Stirling's asymptotic expansion with upward recursion for small arguments.
//! The expansion coefficients are B(2k) / (2k·(2k-1)), taken from the dense
//! Bernoulli table.

use core::f64::consts::LOG10_2;

use crate::algo::constants::LN_2PI;
use crate::bernoulli::dense_bernoulli;
use crate::machine::ExtendedFloat;
use crate::types::Error;


/// Number of Stirling correction terms, B(2)..B(44).
const STIRLING_TERMS: usize = 22;

/// Compute ln(Γ(z)) for z > 0.
///
/// Algorithm:
/// 1. If z is below the convergence threshold ZMIN, shift it upward with
///    Γ(z+n) = z(z+1)...(z+n-1)·Γ(z).
/// 2. Evaluate Stirling's series, truncated once a term drops below the
///    working tolerance.
pub(crate) fn ln_gamma<E: ExtendedFloat>(z: E) -> Result<E, Error> {
    let zero = E::zero();
    let one = E::one();
    let half = E::from_f64(0.5);

    if z.is_nan() || z <= zero {
        return Err(Error::InvalidInput);
    }

    let wdtol = (E::from_f64(2.0) * E::MACH_EPSILON).max(E::from_f64(0.5e-18));

    let zmin = shift_threshold::<E>();
    let zdmy = if z < zmin { z + (zmin - z.floor()) } else { z };

    // S(z) = Σ_{k=1}^{22} B(2k)/(2k(2k-1)) · z^{-(2k-1)}
    let zp_init = one / zdmy;
    let t1 = stirling_coefficient::<E>(1) * zp_init;
    let mut s = t1;

    if zp_init >= wdtol {
        let zsq = zp_init * zp_init;
        let tst = t1 * wdtol;
        let mut zp = zp_init;
        for k in 2..=STIRLING_TERMS {
            zp = zp * zsq;
            let trm = stirling_coefficient::<E>(k) * zp;
            if trm.abs() < tst {
                break;
            }
            s = s + trm;
        }
    }

    // ln Γ(z) = z(ln z - 1) + 0.5(ln(2π) - ln z) + S(z)
    let con = E::from_f64(LN_2PI);
    if zdmy == z {
        let tlg = z.ln();
        return Ok(z * (tlg - one) + half * (con - tlg) + s);
    }

    // Undo the shift: ln Γ(z) = ln Γ(zdmy) - ln(z·(z+1)·…·(zdmy-1))
    let mut product = one;
    let mut t = z;
    while t < zdmy - half {
        product = product * t;
        t = t + one;
    }
    let tlg = zdmy.ln();
    Ok(zdmy * (tlg - one) - product.ln() + half * (con - tlg) + s)
}

/// Minimum argument for which the truncated series reaches the working
/// tolerance. Smaller arguments are shifted up to it.
fn shift_threshold<E: ExtendedFloat>() -> E {
    let rln = E::from_f64(LOG10_2 * f64::from(E::MACH_DIGITS));
    let fln = rln.max(E::from_f64(3.0)).min(E::from_f64(20.0)) - E::from_f64(3.0);
    let zm = E::from_f64(1.8) + E::from_f64(0.3875) * fln;
    zm.floor() + E::one()
}

/// B(2k) / (2k·(2k-1)).
#[inline]
fn stirling_coefficient<E: ExtendedFloat>(k: usize) -> E {
    let n = 2 * k;
    E::from_f64(dense_bernoulli(n) / (n * (n - 1)) as f64)
}
