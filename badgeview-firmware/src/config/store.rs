//! Flash-backed persistence
//!
//! Gallery state is stored postcard-encoded, the badge profile as plain
//! UTF-8. When flash holds no profile yet, the `badge.txt` compiled into
//! the image is served instead.

use defmt::*;

use badgeview_core::gallery::state::MAX_ENCODED_STATE;
use badgeview_core::gallery::GalleryState;
use badgeview_core::traits::{ProfileSource, StateStore, StoreError};
use badgeview_hal_rp2040::flash::{FlashError, Rp2040FlashStorage, StorageKey};
use badgeview_hal_rp2040::FlashStorageTrait;

use crate::assets::PROFILE_TEXT;

fn store_error(err: FlashError) -> StoreError {
    match err {
        FlashError::NotFound => StoreError::NotFound,
        FlashError::BufferTooSmall => StoreError::BufferTooSmall,
        FlashError::Flash | FlashError::Storage | FlashError::Full => StoreError::Io,
    }
}

/// Gallery state and profile storage in the flash partition
pub struct FlashStore<'d> {
    storage: Rp2040FlashStorage<'d>,
}

impl<'d> FlashStore<'d> {
    pub fn new(storage: Rp2040FlashStorage<'d>) -> Self {
        Self { storage }
    }

    fn embedded_profile(buf: &mut [u8]) -> Result<usize, StoreError> {
        if PROFILE_TEXT.is_empty() {
            return Err(StoreError::NotFound);
        }
        let bytes = PROFILE_TEXT.as_bytes();
        buf.get_mut(..bytes.len())
            .ok_or(StoreError::BufferTooSmall)?
            .copy_from_slice(bytes);
        debug!("Using embedded profile ({} bytes)", bytes.len());
        Ok(bytes.len())
    }
}

impl StateStore for FlashStore<'_> {
    async fn load(&mut self) -> Result<Option<GalleryState>, StoreError> {
        let mut buffer = [0u8; MAX_ENCODED_STATE];
        match self.storage.read(StorageKey::GalleryState, &mut buffer).await {
            Ok(len) => {
                debug!("Read {} bytes of gallery state from flash", len);
                GalleryState::decode(&buffer[..len]).map(Some)
            }
            Err(FlashError::NotFound) => Ok(None),
            Err(e) => {
                warn!("Gallery state read failed: {:?}", e);
                Err(store_error(e))
            }
        }
    }

    async fn save(&mut self, state: &GalleryState) -> Result<(), StoreError> {
        let mut buffer = [0u8; MAX_ENCODED_STATE];
        let bytes = state.encode(&mut buffer)?;
        self.storage
            .write(StorageKey::GalleryState, bytes)
            .await
            .map_err(store_error)
    }
}

impl ProfileSource for FlashStore<'_> {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, StoreError> {
        match self.storage.read(StorageKey::BadgeProfile, buf).await {
            Ok(len) => Ok(len),
            Err(FlashError::NotFound) => Self::embedded_profile(buf),
            Err(e) => Err(store_error(e)),
        }
    }

    async fn write(&mut self, text: &str) -> Result<(), StoreError> {
        self.storage
            .write(StorageKey::BadgeProfile, text.as_bytes())
            .await
            .map_err(store_error)?;
        info!("Saved badge profile to flash");
        Ok(())
    }
}
