//! Sparse table + multiplicative recurrence for even-indexed sequences.
//!
//! Bernoulli and Euler numbers obey
//!
//! ```text
//! B(2m) = (-1)^(m+1) · 2 · (2m)! · ζ(2m)   / (2π)^(2m)
//! E(2m) = (-1)^m · 2^(2m+2) · (2m)! · β(2m+1) / π^(2m+1)
//! ```
//!
//! so past index 60 the ratio of consecutive even terms is
//! `-(k+2)(k+1) / scale` with `scale = (2π)²` or `(π/2)²` to within
//! 2^-60. Values are stored exactly at every even index up to 60 and at
//! every 20th index beyond; anything in between is reached from the nearest
//! stored anchor in at most five steps.

use crate::machine::ExtendedFloat;

/// Largest index held in the dense table.
pub(crate) const DENSE_TABLE_MAX: usize = 60;

/// Index of the first sparse-table entry.
pub(crate) const SPARSE_START: usize = 80;

/// Index spacing of the sparse table.
pub(crate) const SPARSE_STEP: usize = 20;

/// An even-indexed sequence stored as a dense prefix and a sparse tail.
pub(crate) struct SparseSequence {
    /// Values at indices 0, 2, ..., DENSE_TABLE_MAX.
    pub(crate) dense: &'static [f64],
    /// Values at indices SPARSE_START, SPARSE_START + SPARSE_STEP, ...
    pub(crate) sparse: &'static [f64],
    /// Denominator of the step ratio.
    pub(crate) ratio_scale: f64,
    /// `n mod 4` for which the sequence is negative.
    pub(crate) negative_residue: usize,
}

impl SparseSequence {
    /// Value at even index `n`, saturated to `±E::MACH_HUGE` past `max_index`.
    pub(crate) fn value<E: ExtendedFloat>(&self, n: usize, max_index: usize) -> E {
        debug_assert!(n % 2 == 0);

        if n > max_index {
            return if n % 4 == self.negative_residue {
                -E::MACH_HUGE
            } else {
                E::MACH_HUGE
            };
        }
        if n <= DENSE_TABLE_MAX {
            return E::from_f64(self.dense[n / 2]);
        }

        let anchor = self.nearest_anchor(n);
        self.propagate(self.anchor_value(anchor), anchor, n)
    }

    /// Stored index closest to `n` (ties go up), for `n > DENSE_TABLE_MAX`.
    fn nearest_anchor(&self, n: usize) -> usize {
        let last = SPARSE_START + SPARSE_STEP * (self.sparse.len() - 1);
        let rounded = (n + SPARSE_STEP / 2) / SPARSE_STEP * SPARSE_STEP;
        rounded.clamp(DENSE_TABLE_MAX, last)
    }

    fn anchor_value<E: ExtendedFloat>(&self, anchor: usize) -> E {
        if anchor <= DENSE_TABLE_MAX {
            E::from_f64(self.dense[anchor / 2])
        } else {
            E::from_f64(self.sparse[(anchor - SPARSE_START) / SPARSE_STEP])
        }
    }

    /// Carry the value at even index `from` to even index `to`.
    pub(crate) fn propagate<E: ExtendedFloat>(&self, value: E, from: usize, to: usize) -> E {
        let scale = E::from_f64(self.ratio_scale);
        let mut value = value;
        let mut k = from;
        while k < to {
            value = value * step_up_ratio::<E>(k, scale);
            k += 2;
        }
        while k > to {
            value = value * step_down_ratio::<E>(k, scale);
            k -= 2;
        }
        value
    }
}

/// Ratio a(k+2) / a(k) = -(k+2)(k+1) / scale.
#[inline]
fn step_up_ratio<E: ExtendedFloat>(k: usize, scale: E) -> E {
    let k = E::from_f64(k as f64);
    let one = E::one();
    let two = E::from_f64(2.0);
    -((k + two) * (k + one)) / scale
}

/// Ratio a(k-2) / a(k) = -scale / (k(k-1)).
#[inline]
fn step_down_ratio<E: ExtendedFloat>(k: usize, scale: E) -> E {
    let k = E::from_f64(k as f64);
    -scale / (k * (k - E::one()))
}
