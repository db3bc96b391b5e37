// crates/sigcurve-core/src/signal/export.rs
//
// Hand-off to consumers that keep numbers in IEEE doubles (charting, JSON).

use crate::error::{CurveError, Result};

/// Largest integer an `f64` represents exactly together with all its neighbours.
pub const MAX_SAFE_INTEGER: u64 = (1u64 << 53) - 1;

/// Convert one index to `f64`, failing instead of rounding.
#[inline]
pub fn to_f64_exact(index: u64) -> Result<f64> {
    if index > MAX_SAFE_INTEGER {
        return Err(CurveError::Overflow(index));
    }
    Ok(index as f64)
}

/// Convert a whole index sequence. All-or-nothing: the first index above
/// [`MAX_SAFE_INTEGER`] aborts the conversion.
pub fn indices_to_f64(indices: &[u64]) -> Result<Vec<f64>> {
    indices.iter().map(|&v| to_f64_exact(v)).collect()
}
