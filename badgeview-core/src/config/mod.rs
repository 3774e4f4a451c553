//! Runtime settings
//!
//! All tunable timings and thresholds. The firmware overrides the
//! defaults from `badge.toml` at build time.

pub mod settings;

pub use settings::*;
