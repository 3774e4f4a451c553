//! Persisted gallery record

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest encoded size of a [`GalleryState`]
pub const MAX_ENCODED_STATE: usize = 8;

/// Gallery navigation record, written through on every change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GalleryState {
    /// Position in the catalog
    pub current_item: u16,
    /// Whether the position indicator strip is drawn
    pub show_overlay: bool,
}

impl GalleryState {
    pub const fn new(current_item: u16, show_overlay: bool) -> Self {
        Self {
            current_item,
            show_overlay,
        }
    }

    /// Pull `current_item` back into `[0, item_count)`
    ///
    /// Returns index 0 for an empty catalog.
    pub fn clamped(self, item_count: u16) -> Self {
        Self {
            current_item: self.current_item.min(item_count.saturating_sub(1)),
            ..self
        }
    }

    /// Step to the previous item, wrapping from the first to the last
    pub fn advance(&mut self, item_count: u16) {
        if item_count == 0 {
            return;
        }
        let count = u32::from(item_count);
        self.current_item = ((u32::from(self.current_item) + count - 1) % count) as u16;
    }

    /// Step to the next item, wrapping from the last to the first
    pub fn retreat(&mut self, item_count: u16) {
        if item_count == 0 {
            return;
        }
        let count = u32::from(item_count);
        self.current_item = ((u32::from(self.current_item) + 1) % count) as u16;
    }

    pub fn toggle_overlay(&mut self) {
        self.show_overlay = !self.show_overlay;
    }

    /// Encode with postcard
    #[cfg(feature = "serde")]
    pub fn encode<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], crate::traits::StoreError> {
        postcard::to_slice(self, buf).map_err(|_| crate::traits::StoreError::Encode)
    }

    /// Decode from postcard bytes
    #[cfg(feature = "serde")]
    pub fn decode(bytes: &[u8]) -> Result<Self, crate::traits::StoreError> {
        postcard::from_bytes(bytes).map_err(|_| crate::traits::StoreError::Corrupted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_is_first_item_without_overlay() {
        assert_eq!(GalleryState::default(), GalleryState::new(0, false));
    }

    #[test]
    fn test_wraparound() {
        let mut state = GalleryState::new(0, false);
        state.advance(5);
        assert_eq!(state.current_item, 4);
        state.retreat(5);
        assert_eq!(state.current_item, 0);

        let mut state = GalleryState::new(4, false);
        state.retreat(5);
        assert_eq!(state.current_item, 0);
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut state = GalleryState::new(0, false);
        state.advance(1);
        assert_eq!(state.current_item, 0);
        state.retreat(1);
        assert_eq!(state.current_item, 0);
    }

    #[test]
    fn test_clamp_on_shrunk_catalog() {
        let state = GalleryState::new(3, true);
        assert_eq!(state.clamped(5), state);
        assert_eq!(state.clamped(4), state);
        assert_eq!(state.clamped(2), GalleryState::new(1, true));
        assert_eq!(state.clamped(0), GalleryState::new(0, true));
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut state = GalleryState::new(2, false);
        state.toggle_overlay();
        assert!(state.show_overlay);
        state.toggle_overlay();
        assert_eq!(state, GalleryState::new(2, false));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_postcard_round_trip() {
        let state = GalleryState::new(3, true);
        let mut buf = [0u8; MAX_ENCODED_STATE];
        let bytes = state.encode(&mut buf).unwrap();
        assert_eq!(GalleryState::decode(bytes).unwrap(), state);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_decode_garbage() {
        assert!(GalleryState::decode(&[]).is_err());
    }

    proptest! {
        #[test]
        fn prop_navigation_stays_in_range(
            count in 1u16..=64,
            start in 0u16..64,
            moves in proptest::collection::vec(any::<bool>(), 0..200),
        ) {
            let mut state = GalleryState::new(start, false).clamped(count);
            for forward in moves {
                if forward {
                    state.retreat(count);
                } else {
                    state.advance(count);
                }
                prop_assert!(state.current_item < count);
            }
        }
    }
}
