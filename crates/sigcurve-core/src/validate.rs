use crate::error::{CurveError, Result};

/// Width of every encoded index, in bits.
pub const INDEX_BITS: u32 = 64;

/// Number of low-order bits of each coordinate that take part in encoding.
///
/// Always in `1..=64`. Values wider than this are truncated by the encoders,
/// never rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitWidth(u32);

impl BitWidth {
    pub fn new(bits: u32) -> Result<Self> {
        if bits == 0 {
            return Err(CurveError::Config(
                "bits per dimension must be positive, got 0".into(),
            ));
        }
        if bits > INDEX_BITS {
            return Err(CurveError::Config(format!(
                "bits per dimension must be <= {}, got {}",
                INDEX_BITS, bits
            )));
        }
        Ok(Self(bits))
    }

    /// Accept a bit width that arrived as a plain number (text field, JSON, ...).
    ///
    /// Rejects NaN/infinite values, fractional values, and anything <= 0.
    /// No rounding is applied: `2.5` is an error, not `2`.
    pub fn from_f64(raw: f64) -> Result<Self> {
        if !raw.is_finite() {
            return Err(CurveError::Config(format!(
                "invalid bits per dimension: {raw} is not finite"
            )));
        }
        if raw.fract() != 0.0 {
            return Err(CurveError::Config(format!(
                "invalid bits per dimension: {raw} is not an integer"
            )));
        }
        if raw <= 0.0 {
            return Err(CurveError::Config(format!(
                "invalid bits per dimension: {raw} must be positive"
            )));
        }
        if raw > INDEX_BITS as f64 {
            return Err(CurveError::Config(format!(
                "invalid bits per dimension: {raw} must be <= {INDEX_BITS}"
            )));
        }
        Self::new(raw as u32)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

/// Validated `(D, B)` pair for one encode call. `dims * bits <= 64` holds for
/// every value of this type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EncodeConfig {
    dims: usize,
    bits: BitWidth,
}

impl EncodeConfig {
    pub fn new(dims: usize, bits: u32) -> Result<Self> {
        let bits = BitWidth::new(bits)?;
        validate_budget(dims, bits)?;
        Ok(Self { dims, bits })
    }

    pub fn with_width(dims: usize, bits: BitWidth) -> Result<Self> {
        validate_budget(dims, bits)?;
        Ok(Self { dims, bits })
    }

    #[inline]
    pub fn dims(&self) -> usize {
        self.dims
    }

    #[inline]
    pub fn bits(&self) -> u32 {
        self.bits.get()
    }

    /// Number of meaningful bits in each encoded index (`D * B`).
    #[inline]
    pub fn total_bits(&self) -> u32 {
        // fits: checked against INDEX_BITS at construction
        self.dims as u32 * self.bits.get()
    }
}

/// Check the fixed-width bit budget `dims * bits <= 64`.
pub fn validate_budget(dims: usize, bits: BitWidth) -> Result<()> {
    if dims == 0 {
        return Err(CurveError::Config("dimension count must be >= 1".into()));
    }
    let total = (dims as u64).saturating_mul(bits.get() as u64);
    if total > INDEX_BITS as u64 {
        return Err(CurveError::Range {
            dims,
            bits: bits.get(),
            total,
        });
    }
    Ok(())
}
