//! RP2040-specific HAL for the Badger 2040 badge
//!
//! - Flash storage driver (implements `badgeview_hal::FlashStorage`)
//! - Board pin map and the power hold line

#![no_std]

pub mod flash;
pub mod pins;

pub use badgeview_hal::{FlashStorage as FlashStorageTrait, StorageKey};
