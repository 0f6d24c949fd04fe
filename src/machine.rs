//! Machine constants and the precision traits.
//!
//! Every public routine is evaluated in an [`ExtendedFloat`] and narrowed to the
//! caller's [`SpecialFloat`] with saturation (see [`crate::utils::narrow_saturating`]).

use num_traits::Float;

/// Floating-point type the evaluation engine runs in.
///
/// Implemented for `f64`. The Bernoulli/Euler tables and the index bounds below
/// are tied to the range of the implementing type: indices past
/// `BERNOULLI_MAX_INDEX` / `EULER_MAX_INDEX` overflow it.
pub trait ExtendedFloat: Float + core::fmt::Debug + 'static {
    /// Machine epsilon.
    const MACH_EPSILON: Self;
    /// Largest representable number; the overflow sentinel.
    const MACH_HUGE: Self;
    /// ln(MACH_HUGE), the largest exponent `exp` can take without overflowing.
    const LN_MACH_HUGE: Self;
    /// Number of binary digits in the mantissa.
    const MACH_DIGITS: i32;
    /// Largest even index whose Bernoulli number is representable.
    const BERNOULLI_MAX_INDEX: usize;
    /// Largest even index whose Euler number is representable.
    const EULER_MAX_INDEX: usize;

    /// Infallible conversion from f64.
    ///
    /// Table entries and constants are written as f64 literals.
    fn from_f64(x: f64) -> Self;
}

#[allow(clippy::excessive_precision)]
impl ExtendedFloat for f64 {
    const MACH_EPSILON: f64 = 2.220446049250313e-16;
    const MACH_HUGE: f64 = 1.7976931348623157e+308;
    const LN_MACH_HUGE: f64 = 7.09782712893383996728e+02;
    const MACH_DIGITS: i32 = 53;
    const BERNOULLI_MAX_INDEX: usize = 258; // |B(260)| ~ 2.3e309
    const EULER_MAX_INDEX: usize = 186; // |E(188)| ~ 4.6e310

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }
}

/// Floating-point type of the public ("standard precision") entry points.
///
/// Implemented for `f64` and `f32`. Each implementation names the extended type
/// it delegates to; results are clamped to `±MACH_HUGE` on the way back.
pub trait SpecialFloat: Float + core::fmt::Debug + 'static {
    /// Type the computation is carried out in.
    type Extended: ExtendedFloat;

    /// Largest representable number; the overflow sentinel.
    const MACH_HUGE: Self;

    /// Exact conversion into the extended type.
    fn widen(self) -> Self::Extended;

    /// Rounding conversion from the extended type. May produce an infinity;
    /// saturation is applied by the caller.
    fn narrow(x: Self::Extended) -> Self;
}

impl SpecialFloat for f64 {
    type Extended = f64;

    const MACH_HUGE: f64 = 1.7976931348623157e+308;

    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn narrow(x: f64) -> f64 {
        x
    }
}

impl SpecialFloat for f32 {
    type Extended = f64;

    const MACH_HUGE: f32 = 3.4028235e+38;

    #[inline]
    fn widen(self) -> f64 {
        self as f64
    }

    #[inline]
    fn narrow(x: f64) -> f32 {
        x as f32
    }
}
