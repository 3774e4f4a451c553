//! Firmware configuration and persistence
//!
//! Settings come from `badge.toml`, validated and turned into a
//! constant by the build script. Gallery state and the badge profile
//! live in the flash key-value partition.

pub mod settings;
pub mod store;

pub use settings::load_settings;
pub use store::FlashStore;
