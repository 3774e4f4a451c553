//! Persistent storage traits

use crate::gallery::GalleryState;

/// Errors from persistent storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// Nothing stored under the key
    NotFound,
    /// Flash read, write or erase failed
    Io,
    /// Stored bytes did not decode
    Corrupted,
    /// Value did not encode
    Encode,
    /// Stored value larger than the read buffer
    BufferTooSmall,
}

/// Storage for the gallery navigation record
///
/// Writes must be complete when the returned future resolves.
pub trait StateStore {
    /// Load the record, `Ok(None)` on first run
    fn load(
        &mut self,
    ) -> impl core::future::Future<Output = Result<Option<GalleryState>, StoreError>>;

    /// Overwrite the record
    fn save(
        &mut self,
        state: &GalleryState,
    ) -> impl core::future::Future<Output = Result<(), StoreError>>;
}

/// Storage for the five-line badge profile text
pub trait ProfileSource {
    /// Read the profile text into `buf`, [`StoreError::NotFound`] when absent
    fn read(
        &mut self,
        buf: &mut [u8],
    ) -> impl core::future::Future<Output = Result<usize, StoreError>>;

    /// Replace the profile text
    fn write(&mut self, text: &str) -> impl core::future::Future<Output = Result<(), StoreError>>;
}
