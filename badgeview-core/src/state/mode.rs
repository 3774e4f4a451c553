//! Mode definition

use super::events::ModeEvent;

/// Active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Sampling the battery, warning when low
    #[default]
    BatteryCheck,
    /// Personal badge layout
    Badge,
    /// Image gallery
    Gallery,
    /// No images to show; nothing left to run
    Halted,
}

impl Mode {
    /// Check if this mode is terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, Mode::Halted)
    }

    /// Process an event and return the next mode
    ///
    /// Events that do not belong to the current mode leave it unchanged.
    pub fn transition(self, event: ModeEvent) -> Self {
        use Mode::*;
        use ModeEvent::*;

        match (self, event) {
            (BatteryCheck, BatteryChecked) => Badge,
            (Badge, BadgeDismissed) => Gallery,
            (Gallery, GalleryExited) => BatteryCheck,
            (Gallery, CatalogEmpty) => Halted,

            // Default: stay in current mode
            _ => self,
        }
    }
}
