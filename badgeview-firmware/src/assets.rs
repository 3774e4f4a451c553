//! Assets compiled into the firmware image
//!
//! The build script validates `images/*.bin`, `badge.bin` and
//! `badge.txt` and generates the table below. Entries are sorted by
//! name.

use badgeview_core::traits::{ImageError, ImageSource};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/assets.rs"));
}

pub use generated::PROFILE_TEXT;

/// Read-only image directory backed by flash-resident statics
pub struct EmbeddedImages {
    images: &'static [(&'static str, &'static [u8])],
    portrait: Option<&'static [u8]>,
}

impl EmbeddedImages {
    pub fn new() -> Self {
        Self {
            images: generated::IMAGES,
            portrait: generated::PORTRAIT,
        }
    }
}

fn copy_into(data: &[u8], buf: &mut [u8]) -> Result<usize, ImageError> {
    buf.get_mut(..data.len())
        .ok_or(ImageError::BufferTooSmall)?
        .copy_from_slice(data);
    Ok(data.len())
}

impl ImageSource for EmbeddedImages {
    fn entry_count(&self) -> usize {
        self.images.len()
    }

    fn entry_name(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(|(name, _)| *name)
    }

    fn load(&mut self, index: usize, buf: &mut [u8]) -> Result<usize, ImageError> {
        let (_, data) = self.images.get(index).ok_or(ImageError::NotFound)?;
        copy_into(data, buf)
    }

    fn load_portrait(&mut self, buf: &mut [u8]) -> Result<usize, ImageError> {
        copy_into(self.portrait.ok_or(ImageError::NotFound)?, buf)
    }
}
