// crates/sigcurve-core/src/curve/morton.rs

use crate::error::{CurveError, Result};
use crate::signal::matrix::CoordMatrix;
use crate::validate::EncodeConfig;

/// Z-order index of one sample.
///
/// Bit `j` of coordinate `i` lands at output bit `i + j * D` (bit 0 is the
/// least significant), so dimension 0 owns bits `0, D, 2D, ...`. Only the low
/// `B` bits of each coordinate are read.
pub(crate) fn morton_index(coords: &[u64], cfg: &EncodeConfig) -> u64 {
    let dims = cfg.dims();
    let bits = cfg.bits() as usize;
    debug_assert_eq!(coords.len(), dims);

    let mut out: u64 = 0;
    for (i, &v) in coords.iter().enumerate() {
        for j in 0..bits {
            let bit = (v >> j) & 1;
            out |= bit << (i + j * dims);
        }
    }
    out
}

/// Morton-encode every sample of `m`, preserving sample order.
pub fn encode_matrix(m: &CoordMatrix, bits: u32) -> Result<Vec<u64>> {
    let cfg = EncodeConfig::new(m.dims(), bits)?;
    tracing::debug!(
        codec = "morton",
        dims = cfg.dims(),
        bits = cfg.bits(),
        samples = m.len(),
        "encode batch"
    );
    Ok(m.rows().map(|row| morton_index(row, &cfg)).collect())
}

/// Morton-encode a single sample, validating its width against `cfg`.
pub fn encode_one(coords: &[u64], cfg: &EncodeConfig) -> Result<u64> {
    if coords.len() != cfg.dims() {
        return Err(CurveError::Shape(format!(
            "sample has {} coordinates, expected {}",
            coords.len(),
            cfg.dims()
        )));
    }
    Ok(morton_index(coords, cfg))
}
