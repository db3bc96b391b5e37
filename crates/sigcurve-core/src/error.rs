use thiserror::Error;

pub type Result<T> = std::result::Result<T, CurveError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("config error: {0}")]
    Config(String),

    #[error("range error: {dims} dims * {bits} bits = {total}, exceeds 64")]
    Range { dims: usize, bits: u32, total: u64 },

    #[error("shape error: {0}")]
    Shape(String),

    #[error("overflow error: value {0} exceeds safe integer limit")]
    Overflow(u64),
}
