//! Result and error types.

use core::fmt;

/// How the returned value relates to the true function value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Value is the function value to working precision.
    Normal,
    /// Argument is the pole `s = 1`; the value is `+MACH_HUGE`.
    Pole,
    /// True value lies outside the representable range; the value is
    /// `±MACH_HUGE` with the sign of the true value.
    Overflow,
}

/// Result of a computation, returned by `_raw` functions
/// (e.g., [`riemann_zeta_raw`](crate::riemann_zeta_raw)).
///
/// Plain entry points (`riemann_zeta`, `bernoulli_number`, …) return only the
/// value; the sentinel can still be recognised by comparing against `MACH_HUGE`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecialResult<T> {
    /// Computed (possibly saturated) value.
    pub value: T,
    /// Classification of `value`.
    pub status: Status,
}

impl<T> SpecialResult<T> {
    #[inline]
    pub(crate) fn new(value: T, status: Status) -> Self {
        SpecialResult { value, status }
    }
}

/// Error type for the fallible entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Invalid input (e.g., empty sequence, index range overflowing `usize`).
    InvalidInput,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput => write!(f, "invalid input: check argument constraints"),
        }
    }
}

impl core::error::Error for Error {}
