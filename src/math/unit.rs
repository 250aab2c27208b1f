//! Unit-vector construction.
//!
//! Public constructors validate; the unchecked path is reserved for callers
//! inside the crate that have already established the invariant.

use crate::error::{GeometryError, Result};

use super::tolerance::ZERO_LENGTH_TOLERANCE;
use super::{UnitVector, Vector};

/// Largest deviation of `|v|` from 1.0 accepted by [`ensure_unit`].
const UNIT_NORM_TOLERANCE: f64 = 1e-12;

/// Normalizes `v`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `v` is shorter than
/// [`ZERO_LENGTH_TOLERANCE`] (or not finite), since its direction is undefined.
pub fn checked_unit<const D: usize>(v: Vector<D>) -> Result<UnitVector<D>> {
    let norm = v.norm();
    if !norm.is_finite() || norm < ZERO_LENGTH_TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(unit_unchecked(v / norm))
}

/// Accepts a vector that is claimed to be unit length already.
///
/// # Errors
///
/// Returns [`GeometryError::NotNormalized`] if `|v|` differs from 1.0 by more
/// than `1e-12`.
pub fn ensure_unit<const D: usize>(v: Vector<D>) -> Result<UnitVector<D>> {
    let norm = v.norm();
    if (norm - 1.0).abs() > UNIT_NORM_TOLERANCE || norm.is_nan() {
        return Err(GeometryError::NotNormalized { norm }.into());
    }
    Ok(UnitVector::new_unchecked(v))
}

/// Wraps `v` without validation. The caller guarantees `|v| == 1`.
pub(crate) fn unit_unchecked<const D: usize>(v: Vector<D>) -> UnitVector<D> {
    debug_assert!(
        (v.norm() - 1.0).abs() <= 1e-9,
        "unit_unchecked called with |v| = {}",
        v.norm()
    );
    UnitVector::new_unchecked(v)
}
