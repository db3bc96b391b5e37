// crates/sigcurve-cli/src/io/mod.rs

pub mod sfc;
pub mod table;
