//! Top-level screen sequencing
//!
//! Which screen owns the display is a function of the current mode and
//! the event that ended the previous one.

pub mod events;
pub mod mode;

pub use events::ModeEvent;
pub use mode::Mode;
