// crates/sigcurve-core/src/curve/hilbert.rs
//
// Axes -> Hilbert distance by the iterative bit-level skew transform.
//
// Conventions (fixed, fixtures depend on them):
// - each coordinate is read as a row of its low B bits, MSB-first;
// - dimension 0 is the reference axis that absorbs reflections;
// - the transformed rows are read out bit-plane-major, dimension-minor,
//   giving a Gray-coded distance that is decoded and packed MSB-first.

use crate::error::{CurveError, Result};
use crate::signal::bitpack::{gray_to_binary, low_bits_msb_first, pack_msb_first};
use crate::signal::matrix::CoordMatrix;
use crate::validate::{EncodeConfig, INDEX_BITS};

const CELLS: usize = INDEX_BITS as usize;

/// Per-sample working state: one MSB-first bit row per dimension, packed
/// back to back in a fixed arena. `dims * bits <= 64` always fits.
struct BitRows {
    bits: usize,
    cells: [bool; CELLS],
}

impl BitRows {
    fn load(coords: &[u64], bits: usize) -> Self {
        let mut cells = [false; CELLS];
        for (dim, &v) in coords.iter().enumerate() {
            low_bits_msb_first(v, &mut cells[dim * bits..(dim + 1) * bits]);
        }
        Self { bits, cells }
    }

    #[inline]
    fn get(&self, dim: usize, pos: usize) -> bool {
        self.cells[dim * self.bits + pos]
    }

    #[inline]
    fn flip(&mut self, dim: usize, pos: usize, by: bool) {
        self.cells[dim * self.bits + pos] ^= by;
    }
}

/// Hilbert index of one sample.
pub(crate) fn hilbert_index(coords: &[u64], cfg: &EncodeConfig) -> Result<u64> {
    let dims = cfg.dims();
    let bits = cfg.bits() as usize;
    let total = dims * bits;
    if total > CELLS {
        return Err(CurveError::Range {
            dims,
            bits: cfg.bits(),
            total: total as u64,
        });
    }
    debug_assert_eq!(coords.len(), dims);

    let mut rows = BitRows::load(coords, bits);

    // Order matters: every step reads bits written by the previous ones.
    for bit in 0..bits {
        for dim in 0..dims {
            let mask = rows.get(dim, bit);
            for b in (bit + 1)..bits {
                if mask {
                    // reflect
                    rows.flip(0, b, true);
                } else {
                    // exchange with the reference axis
                    let to_flip = rows.get(0, b) ^ rows.get(dim, b);
                    rows.flip(dim, b, to_flip);
                    rows.flip(0, b, to_flip);
                }
            }
        }
    }

    // Leading 64 - D*B slots stay zero.
    let mut seq = [false; CELLS];
    let offset = CELLS - total;
    for b in 0..bits {
        for dim in 0..dims {
            seq[offset + b * dims + dim] = rows.get(dim, b);
        }
    }
    gray_to_binary(&mut seq[offset..]);

    pack_msb_first(&seq)
}

/// Hilbert-encode every sample of `m`, preserving sample order.
pub fn encode_matrix(m: &CoordMatrix, bits: u32) -> Result<Vec<u64>> {
    let cfg = EncodeConfig::new(m.dims(), bits)?;
    tracing::debug!(
        codec = "hilbert",
        dims = cfg.dims(),
        bits = cfg.bits(),
        samples = m.len(),
        "encode batch"
    );
    m.rows().map(|row| hilbert_index(row, &cfg)).collect()
}

/// Hilbert-encode a single sample, validating its width against `cfg`.
pub fn encode_one(coords: &[u64], cfg: &EncodeConfig) -> Result<u64> {
    if coords.len() != cfg.dims() {
        return Err(CurveError::Shape(format!(
            "sample has {} coordinates, expected {}",
            coords.len(),
            cfg.dims()
        )));
    }
    hilbert_index(coords, cfg)
}
