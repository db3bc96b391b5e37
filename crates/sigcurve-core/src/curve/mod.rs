// crates/sigcurve-core/src/curve/mod.rs

pub mod hilbert;
pub mod morton;

use std::fmt;
use std::str::FromStr;

use crate::error::{CurveError, Result};
use crate::signal::matrix::CoordMatrix;

/// Which space-filling curve linearizes the samples.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Codec {
    Morton,
    Hilbert,
}

impl Codec {
    pub const ALL: [Codec; 2] = [Codec::Morton, Codec::Hilbert];

    pub fn name(self) -> &'static str {
        match self {
            Codec::Morton => "morton",
            Codec::Hilbert => "hilbert",
        }
    }

    /// Stable one-byte tag for containers.
    pub fn id(self) -> u8 {
        match self {
            Codec::Morton => 0,
            Codec::Hilbert => 1,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Codec::Morton),
            1 => Some(Codec::Hilbert),
            _ => None,
        }
    }

    /// Encode every sample of `m`. One index per sample, in input order.
    pub fn encode(self, m: &CoordMatrix, bits: u32) -> Result<Vec<u64>> {
        match self {
            Codec::Morton => morton::encode_matrix(m, bits),
            Codec::Hilbert => hilbert::encode_matrix(m, bits),
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Codec {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morton" | "z-order" | "zorder" => Ok(Codec::Morton),
            "hilbert" => Ok(Codec::Hilbert),
            other => Err(CurveError::Config(format!("unknown codec: {other}"))),
        }
    }
}
