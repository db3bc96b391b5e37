//! Coordinate-to-scalar codecs for multi-signal time series.
//!
//! Each sample is a tuple of `D` quantized, non-negative coordinates. The
//! Morton and Hilbert encoders map it to a single `u64` index so a batch of
//! samples can be laid out on one axis while keeping nearby samples close.
//! `D * B <= 64` is enforced before any encoding starts.

pub mod error;
pub mod validate;

pub mod curve;
pub mod signal;

pub use crate::curve::Codec;
pub use crate::error::{CurveError, Result};
pub use crate::signal::matrix::CoordMatrix;
pub use crate::validate::{BitWidth, EncodeConfig};

/// Morton (Z-order) indices for `rows`, one per row, in input order.
pub fn encode_morton<R: AsRef<[u64]>>(rows: &[R], bits: u32) -> Result<Vec<u64>> {
    let m = CoordMatrix::from_rows(rows)?;
    curve::morton::encode_matrix(&m, bits)
}

/// Hilbert-curve indices for `rows`, one per row, in input order.
pub fn encode_hilbert<R: AsRef<[u64]>>(rows: &[R], bits: u32) -> Result<Vec<u64>> {
    let m = CoordMatrix::from_rows(rows)?;
    curve::hilbert::encode_matrix(&m, bits)
}
