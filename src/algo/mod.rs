//! Internal evaluation kernels for the zeta family.
//!
//! All functions are `pub(crate)`; the family modules (`zeta`, `eta`,
//! `lambda`, `beta`) compose them into the public API.
//!
//! # Return value convention
//!
//! Kernels return star values f*(s) = f(s) - 1 in the extended type. Values
//! that leave the representable range come back as `±E::MACH_HUGE`, never as
//! an infinity; NaN arguments propagate.
//!
//! # Clippy suppressions
//!
//! Table modules carry `#![allow(clippy::excessive_precision)]`: entries are
//! printed with 20 significant digits so that they round correctly to any
//! extended type, and letting clippy shorten them would lose that.

pub(crate) mod constants;
pub(crate) mod gamln;
pub(crate) mod lattice;

// Even-indexed sequences
pub(crate) mod recurrence;

// Series kernels
pub(crate) mod accel;
pub(crate) mod direct;

// Negative arguments
pub(crate) mod reflect;
