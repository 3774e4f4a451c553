//! Events that end a mode

/// Events that trigger mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeEvent {
    /// Battery check finished, warning shown or not
    BatteryChecked,
    /// A navigation button left the badge screen
    BadgeDismissed,
    /// Back button left the gallery
    GalleryExited,
    /// Gallery found no images
    CatalogEmpty,
}
