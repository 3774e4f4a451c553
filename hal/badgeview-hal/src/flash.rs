//! Flash storage abstractions
//!
//! Wear-levelled key-value storage for the gallery record and the
//! badge profile.

/// Storage keys
///
/// Each key holds one independently rewritable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StorageKey {
    /// Gallery navigation record (postcard)
    GalleryState = 0,
    /// Badge profile document (UTF-8 text)
    BadgeProfile = 1,
}

impl StorageKey {
    /// Get the key as a byte value
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a key from a byte value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(StorageKey::GalleryState),
            1 => Some(StorageKey::BadgeProfile),
            _ => None,
        }
    }
}

/// Errors from flash storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashError {
    /// Flash operation failed
    Flash,
    /// Storage layer failed
    Storage,
    /// Key not found
    NotFound,
    /// Buffer too small for the data
    BufferTooSmall,
    /// Storage is full
    Full,
}

/// Flash storage trait
///
/// Implementations handle wear levelling and data integrity. A write
/// has reached flash when its future resolves.
pub trait FlashStorage {
    /// Read a value by key into `buffer`, returning the byte count
    fn read(
        &mut self,
        key: StorageKey,
        buffer: &mut [u8],
    ) -> impl core::future::Future<Output = Result<usize, FlashError>>;

    /// Write a value by key
    fn write(
        &mut self,
        key: StorageKey,
        data: &[u8],
    ) -> impl core::future::Future<Output = Result<(), FlashError>>;
}

#[cfg(feature = "sequential-storage")]
impl sequential_storage::map::Key for StorageKey {
    fn serialize_into(
        &self,
        buffer: &mut [u8],
    ) -> Result<usize, sequential_storage::map::SerializationError> {
        if buffer.is_empty() {
            return Err(sequential_storage::map::SerializationError::BufferTooSmall);
        }
        buffer[0] = self.as_u8();
        Ok(1)
    }

    fn deserialize_from(
        buffer: &[u8],
    ) -> Result<(Self, usize), sequential_storage::map::SerializationError> {
        match buffer.first().copied().map(StorageKey::from_u8) {
            Some(Some(key)) => Ok((key, 1)),
            Some(None) => Err(sequential_storage::map::SerializationError::InvalidFormat),
            None => Err(sequential_storage::map::SerializationError::BufferTooSmall),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for value in 0..2u8 {
            let key = StorageKey::from_u8(value).unwrap();
            assert_eq!(key.as_u8(), value);
        }
        assert_eq!(StorageKey::from_u8(2), None);
    }

    #[test]
    fn test_keys_distinct() {
        assert_ne!(
            StorageKey::GalleryState.as_u8(),
            StorageKey::BadgeProfile.as_u8()
        );
    }
}
