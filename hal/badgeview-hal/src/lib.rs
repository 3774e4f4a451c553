//! Badgeview Hardware Abstraction Layer
//!
//! Persistent key-value storage traits implemented by chip-specific
//! HALs. Everything else (pins, SPI, ADC) goes through `embedded-hal`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  badgeview-firmware                     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  badgeview-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!          ┌────────────────────┐
//!          │ badgeview-hal-     │
//!          │     rp2040         │
//!          └────────────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod flash;

pub use flash::{FlashError, FlashStorage, StorageKey};
