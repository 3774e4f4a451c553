//! Renderer trait for the e-ink panel
//!
//! Each render call paints a complete screen and commits one panel
//! refresh. The core never draws individual primitives.

use crate::badge::FittedBadge;
use crate::gallery::OverlayStrip;

/// Errors that can occur while painting or refreshing the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus error talking to the panel controller
    Communication,
    /// Panel stayed busy past the refresh timeout
    Timeout,
    /// Bitmap has the wrong size for its slot
    InvalidImage,
}

/// Text width measurement
///
/// Scales are fixed-point with two decimals (`100` = 1.00).
pub trait TextMetrics {
    /// Width in pixels of `text` rendered at `scale_x100`
    fn measure(&self, text: &str, scale_x100: u16) -> u32;
}

/// Data for one badge screen paint
#[derive(Debug, Clone, Copy)]
pub struct BadgeFrame<'a> {
    /// Fitted text for the four regions
    pub badge: &'a FittedBadge,
    /// 104×128 1-bit portrait, blank panel when absent
    pub portrait: Option<&'a [u8]>,
}

/// Data for one gallery screen paint
#[derive(Debug, Clone, Copy)]
pub struct GalleryFrame<'a> {
    /// 296×128 1-bit bitmap, blank screen when the load failed
    pub image: Option<&'a [u8]>,
    /// Position indicator strip, drawn when enabled
    pub overlay: Option<OverlayStrip>,
}

/// Full-screen renderer
pub trait Renderer: TextMetrics {
    /// Paint the badge layout and refresh
    fn render_badge(
        &mut self,
        frame: &BadgeFrame<'_>,
    ) -> impl core::future::Future<Output = Result<(), DisplayError>>;

    /// Paint one gallery item and refresh
    fn render_gallery(
        &mut self,
        frame: &GalleryFrame<'_>,
    ) -> impl core::future::Future<Output = Result<(), DisplayError>>;

    /// Paint a centred message and refresh
    fn render_warning(
        &mut self,
        message: &str,
    ) -> impl core::future::Future<Output = Result<(), DisplayError>>;
}
