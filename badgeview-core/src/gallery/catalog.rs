//! Per-session image catalog

use heapless::Vec;

use crate::traits::ImageSource;

/// Maximum catalog entries per session
pub const MAX_ITEMS: usize = 64;

/// File extension of gallery bitmaps
pub const IMAGE_EXTENSION: &str = ".bin";

/// Ordered list of gallery items, built once when the gallery opens
///
/// Holds the source index of every matching entry in source order.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    entries: Vec<u16, MAX_ITEMS>,
}

impl ItemCatalog {
    /// List the matching entries of `source`
    ///
    /// Entries past [`MAX_ITEMS`] are skipped.
    pub fn scan<S: ImageSource + ?Sized>(source: &S) -> Self {
        let mut entries = Vec::new();

        for index in 0..source.entry_count() {
            let Some(name) = source.entry_name(index) else {
                continue;
            };
            if !is_image_entry(name) {
                debug!("Skipping non-image entry {}", name);
                continue;
            }
            let Ok(index) = u16::try_from(index) else {
                break;
            };
            if entries.push(index).is_err() {
                warn!("Image catalog full, ignoring entries past {}", MAX_ITEMS);
                break;
            }
        }

        Self { entries }
    }

    /// Number of items
    pub fn len(&self) -> u16 {
        self.entries.len() as u16
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Source index of the item at catalog `position`
    pub fn source_index(&self, position: u16) -> Option<usize> {
        self.entries.get(usize::from(position)).map(|&i| usize::from(i))
    }
}

/// True for names ending in `.bin`, any case
pub fn is_image_entry(name: &str) -> bool {
    let ext = IMAGE_EXTENSION.as_bytes();
    let bytes = name.as_bytes();
    bytes.len() > ext.len() && bytes[bytes.len() - ext.len()..].eq_ignore_ascii_case(ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ImageError;

    struct Names(&'static [&'static str]);

    impl ImageSource for Names {
        fn entry_count(&self) -> usize {
            self.0.len()
        }

        fn entry_name(&self, index: usize) -> Option<&str> {
            self.0.get(index).copied()
        }

        fn load(&mut self, _index: usize, _buf: &mut [u8]) -> Result<usize, ImageError> {
            Err(ImageError::NotFound)
        }

        fn load_portrait(&mut self, _buf: &mut [u8]) -> Result<usize, ImageError> {
            Err(ImageError::NotFound)
        }
    }

    #[test]
    fn test_only_bitmaps_listed() {
        let source = Names(&["cat.bin", "readme.txt", "DOG.BIN", ".bin", "bird.bin"]);
        let catalog = ItemCatalog::scan(&source);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.source_index(0), Some(0));
        assert_eq!(catalog.source_index(1), Some(2));
        assert_eq!(catalog.source_index(2), Some(4));
        assert_eq!(catalog.source_index(3), None);
    }

    #[test]
    fn test_empty_source() {
        let catalog = ItemCatalog::scan(&Names(&[]));
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_capacity_limit() {
        static MANY: [&str; MAX_ITEMS + 3] = ["x.bin"; MAX_ITEMS + 3];
        let catalog = ItemCatalog::scan(&Names(&MANY));
        assert_eq!(usize::from(catalog.len()), MAX_ITEMS);
    }
}
