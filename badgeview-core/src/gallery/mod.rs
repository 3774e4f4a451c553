//! Image gallery
//!
//! Navigation state, autoscroll timing, the per-session catalog, the
//! position overlay geometry and the state machine that ties them
//! together.

pub mod autoscroll;
pub mod catalog;
pub mod machine;
pub mod overlay;
pub mod state;

pub use autoscroll::AutoscrollTimer;
pub use catalog::{ItemCatalog, MAX_ITEMS};
pub use machine::{EmptyCatalog, GalleryStateMachine, Phase, RenderRequest, Step, Transition};
pub use overlay::{Indicator, OverlayStrip};
pub use state::GalleryState;
