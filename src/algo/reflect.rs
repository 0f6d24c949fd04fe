//! Functional-equation continuation to negative arguments.
//!
//! For u = 1 - s each family satisfies f(s) = R(u) · f(u) with
//!
//! ```text
//! ζ:  R(u) = 2 (2π)^-u Γ(u) cos(πu/2)
//! η:  R(u) = -(2^u - 1) / (1 - 2^(1-u)) · 2 (2π)^-u Γ(u) cos(πu/2)
//! β:  R(u) = (2/π)^u Γ(u) sin(πu/2)
//! ```
//!
//! R is carried as `(ln |R|, sign)` because Γ(u) overflows long before the
//! product does. The star form is `f*(s) = R·f*(u) + (R - 1)`.

use crate::algo::constants::{LN_2, LN_2PI, LN_2_OVER_PI, REFLECTION_ZERO_ULPS};
use crate::algo::gamln::ln_gamma;
use crate::machine::ExtendedFloat;
use crate::utils::{cospi, saturate, sinpi};

/// Which functional equation to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Family {
    Zeta,
    Eta,
    Beta,
}

/// Reflection coefficient R(u) in logarithmic form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Reflection<E> {
    /// ln |R|; meaningless when `sign` is zero.
    ln_magnitude: E,
    /// -1, 0 or +1.
    sign: E,
}

impl<E: ExtendedFloat> Reflection<E> {
    /// Coefficient for the reflected argument `u = 1 - s > 1`.
    pub(crate) fn new(family: Family, u: E) -> Self {
        let eps = E::MACH_EPSILON;
        let half_u = u * E::from_f64(0.5);
        let trig = match family {
            Family::Zeta | Family::Eta => cospi(half_u),
            Family::Beta => sinpi(half_u),
        };
        if trig.abs() < E::from_f64(REFLECTION_ZERO_ULPS) * eps {
            return Reflection {
                ln_magnitude: E::neg_infinity(),
                sign: E::zero(),
            };
        }

        let ln_gamma_u = ln_gamma(u).unwrap_or_else(|_| E::nan());
        let ln_trig = trig.abs().ln();
        let sign = E::one().copysign(trig);
        let ln2 = E::from_f64(LN_2);

        match family {
            Family::Zeta => Reflection {
                ln_magnitude: ln2 - u * E::from_f64(LN_2PI) + ln_gamma_u + ln_trig,
                sign,
            },
            Family::Eta => {
                // ln(2^u - 1) - ln(1 - 2^(1-u))
                let numerator = u * ln2 + (-(-u * ln2).exp()).ln_1p();
                let denominator = (-((E::one() - u) * ln2).exp_m1()).ln();
                Reflection {
                    ln_magnitude: ln2 - u * E::from_f64(LN_2PI)
                        + ln_gamma_u
                        + ln_trig
                        + numerator
                        - denominator,
                    sign: -sign,
                }
            }
            Family::Beta => Reflection {
                ln_magnitude: u * E::from_f64(LN_2_OVER_PI) + ln_gamma_u + ln_trig,
                sign,
            },
        }
    }

    /// Whether R(u) is an exact zero (a trivial zero of f).
    #[inline]
    pub(crate) fn is_zero(&self) -> bool {
        self.sign == E::zero()
    }

    /// f*(s) from f*(u), saturated.
    pub(crate) fn apply_star(&self, star_u: E) -> E {
        if self.is_zero() {
            return -E::one();
        }
        if self.ln_magnitude > E::LN_MACH_HUGE {
            return self.sign * E::MACH_HUGE;
        }
        let r = self.sign * self.ln_magnitude.exp();
        saturate(r * star_u + (r - E::one()))
    }

    /// f(s) from f*(u), saturated.
    pub(crate) fn apply_full(&self, star_u: E) -> E {
        if self.is_zero() {
            return E::zero();
        }
        let ln_value = self.ln_magnitude + star_u.ln_1p();
        if ln_value > E::LN_MACH_HUGE {
            return self.sign * E::MACH_HUGE;
        }
        saturate(self.sign * ln_value.exp())
    }
}
