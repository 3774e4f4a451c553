//! Badge screen data
//!
//! The badge screen has no state machine of its own. Its profile is read
//! once, every field is fitted to its box, and the result is painted
//! whenever the badge screen becomes active.

pub mod fit;
pub mod layout;
pub mod profile;

pub use fit::{FitPolicy, FittedText};
pub use layout::{fit_badge, FittedBadge};
pub use profile::{BadgeProfile, DEFAULT_PROFILE, MAX_PROFILE_BYTES};
