//! Shared mathematical constants and the domain partition.
//!
//! Module-specific tables remain in their respective files.

#![allow(clippy::excessive_precision)]
#![allow(clippy::approx_constant)]

/// π
pub(crate) const PI: f64 = 3.14159265358979323846e+00;

/// π/4 = β(1)
pub(crate) const FRAC_PI_4: f64 = 7.85398163397448309616e-01;

/// ln 2 = η(1)
pub(crate) const LN_2: f64 = 6.93147180559945309417e-01;

/// ln(2π)
pub(crate) const LN_2PI: f64 = 1.83787706640934548356e+00;

/// ln(2/π)
pub(crate) const LN_2_OVER_PI: f64 = -4.51582705289454864726e-01;

/// (2π)², ratio scale of consecutive Bernoulli numbers
pub(crate) const TWO_PI_SQUARED: f64 = 3.94784176043574344753e+01;

/// (π/2)², ratio scale of consecutive Euler numbers
pub(crate) const PI_OVER_2_SQUARED: f64 = 2.46740110027233965471e+00;

// ── Domain partition ──
//
// Each threshold is where the cheaper representation reaches full f64
// accuracy. They are fixed; nothing adjusts them at runtime.

/// η*, ζ*: convergence accelerator below, reverse-order summation at or above.
pub(crate) const ETA_ACCELERATOR_LIMIT: f64 = 18.0;

/// β*: convergence accelerator below, reverse-order summation at or above.
///
/// The accelerator's absolute truncation error (~1e-21) is measured against
/// β* ≈ -3^-s, which shrinks faster than η* ≈ -2^-s.
pub(crate) const BETA_ACCELERATOR_LIMIT: f64 = 10.0;

/// λ*: (ζ* + η*)/2 below, direct summation over odd k at or above.
pub(crate) const LAMBDA_DIRECT_LIMIT: f64 = 10.0;

/// ζ*: conversion from η* below, direct summation over k ≥ 2 at or above.
pub(crate) const ZETA_DIRECT_LIMIT: f64 = 64.0;

/// Integer ζ*: table lookup for 2 ≤ n < cutoff, direct summation beyond.
pub(crate) const ZETA_TABLE_CUTOFF: i32 = 66;

/// A cosine or sine factor smaller than this many machine epsilons makes
/// the reflection coefficient an exact zero.
pub(crate) const REFLECTION_ZERO_ULPS: f64 = 1.8;
