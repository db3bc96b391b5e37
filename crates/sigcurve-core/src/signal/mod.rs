// crates/sigcurve-core/src/signal/mod.rs

pub mod bitpack;
pub mod export;
pub mod matrix;
