//! Hardware driver implementations
//!
//! Concrete implementations of the collaborator traits defined in
//! badgeview-core:
//!
//! - Battery monitor (divided battery line plus switched 1.24 V reference)
//! - GPIO buttons (active high)

#![no_std]
#![deny(unsafe_code)]

pub mod input;
pub mod sensor;
