//! Board-agnostic core logic for the e-ink badge firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (renderer, buttons, storage, images, battery, clock)
//! - Gallery navigation state machine with autoscroll
//! - Badge profile parsing and text fitting
//! - Button debouncing and edge detection
//! - Battery guard
//! - Top-level mode controller
//! - Runtime settings

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod badge;
pub mod config;
pub mod controller;
pub mod gallery;
pub mod input;
pub mod safety;
pub mod state;
pub mod traits;
