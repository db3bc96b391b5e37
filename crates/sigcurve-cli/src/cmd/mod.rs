// crates/sigcurve-cli/src/cmd/mod.rs

pub mod encode;
pub mod inspect;
