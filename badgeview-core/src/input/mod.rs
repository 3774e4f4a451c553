//! Button handling
//!
//! Raw samples from a [`ButtonSource`](crate::traits::ButtonSource) are
//! debounced into stable states, then turned into press edges and
//! finally into per-screen actions.

pub mod actions;
pub mod buttons;
pub mod tracker;

pub use actions::{badge_dismissed, GalleryAction, GalleryInput};
pub use buttons::{Button, ButtonSet};
pub use tracker::{ButtonEdges, ButtonTracker};
