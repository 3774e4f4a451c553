//! Panel backend trait
//!
//! Defines the interface between the renderer and a physical e-ink
//! controller.

use crate::framebuffer::FrameBuffer;

/// Panel backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// SPI transfer failed
    Bus,
    /// Control pin could not be driven or read
    Pin,
    /// Busy line did not release in time
    Timeout,
}

impl From<PanelError> for badgeview_core::traits::DisplayError {
    fn from(err: PanelError) -> Self {
        match err {
            PanelError::Bus | PanelError::Pin => Self::Communication,
            PanelError::Timeout => Self::Timeout,
        }
    }
}

/// E-ink panel backend
///
/// A refresh pushes the whole frame and blocks until the panel has
/// finished updating.
pub trait EinkPanel {
    /// Show `frame` with one full refresh
    fn refresh(
        &mut self,
        frame: &FrameBuffer,
    ) -> impl core::future::Future<Output = Result<(), PanelError>>;
}
