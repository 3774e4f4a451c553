//! Mode controller
//!
//! Single cooperative loop that gives the display to one screen at a
//! time: battery check, badge, gallery, and around again. All hardware
//! is reached through the [`Board`] the controller owns.

mod badge;
mod board;
mod gallery;
mod runner;

#[cfg(test)]
mod mock;

pub use board::Board;
pub use runner::{Halt, ModeController, BATTERY_LOW_MESSAGE, NO_IMAGES_MESSAGE};
