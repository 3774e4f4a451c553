//! Position indicator strip
//!
//! One 8×8 px indicator per item in a column near the right edge,
//! vertically centred on the screen. Long catalogs run off the top and
//! bottom of the panel.

use super::state::GalleryState;

/// Left edge of the indicator column
pub const INDICATOR_X: i32 = 286;
/// Indicator edge length in pixels
pub const INDICATOR_SIZE: u32 = 8;
/// Vertical distance between indicator tops
pub const INDICATOR_PITCH: i32 = 10;
/// Screen row the strip is centred on
pub const STRIP_CENTER_Y: i32 = 64;

/// Overlay to draw over a gallery item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OverlayStrip {
    pub count: u16,
    pub current: u16,
}

/// One indicator square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Indicator {
    pub x: i32,
    pub y: i32,
    pub size: u32,
    /// Filled for the current item, outlined otherwise
    pub filled: bool,
}

impl OverlayStrip {
    /// Strip for `state`, or `None` when the overlay is switched off
    pub fn for_state(state: GalleryState, count: u16) -> Option<Self> {
        state.show_overlay.then_some(Self {
            count,
            current: state.current_item,
        })
    }

    /// Top of the first indicator
    pub fn top(&self) -> i32 {
        STRIP_CENTER_Y - i32::from(self.count) * INDICATOR_PITCH / 2
    }

    pub fn indicators(&self) -> impl Iterator<Item = Indicator> {
        let top = self.top();
        let current = self.current;
        (0..self.count).map(move |i| Indicator {
            x: INDICATOR_X,
            y: top + i32::from(i) * INDICATOR_PITCH,
            size: INDICATOR_SIZE,
            filled: i == current,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_when_disabled() {
        assert_eq!(OverlayStrip::for_state(GalleryState::new(1, false), 4), None);
    }

    #[test]
    fn test_geometry_centred() {
        let strip = OverlayStrip::for_state(GalleryState::new(1, true), 4).unwrap();
        let indicators: Vec<Indicator> = strip.indicators().collect();

        assert_eq!(indicators.len(), 4);
        assert_eq!(indicators[0].y, 44);
        assert_eq!(indicators[3].y, 74);
        assert!(indicators.iter().all(|i| i.x == INDICATOR_X && i.size == INDICATOR_SIZE));

        let filled: Vec<bool> = indicators.iter().map(|i| i.filled).collect();
        assert_eq!(filled, vec![false, true, false, false]);
    }

    #[test]
    fn test_long_strip_overflows() {
        let strip = OverlayStrip {
            count: 20,
            current: 0,
        };
        let last = strip.indicators().last().unwrap();
        assert!(strip.top() < 0);
        assert!(last.y > 128 - INDICATOR_SIZE as i32);
    }
}
