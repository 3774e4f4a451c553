//! Image source trait
//!
//! Gallery items and the badge portrait are raw 1-bit bitmaps,
//! row-major, most significant bit first, a set bit is black.

/// Full-screen image width in pixels
pub const IMAGE_WIDTH: u32 = 296;
/// Full-screen image height in pixels
pub const IMAGE_HEIGHT: u32 = 128;
/// Size of one full-screen image in bytes
pub const IMAGE_BYTES: usize = (IMAGE_WIDTH * IMAGE_HEIGHT / 8) as usize;

/// Badge portrait width in pixels
pub const PORTRAIT_WIDTH: u32 = 104;
/// Size of the badge portrait in bytes
pub const PORTRAIT_BYTES: usize = (PORTRAIT_WIDTH * IMAGE_HEIGHT / 8) as usize;

/// Errors from image loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImageError {
    /// No entry at that index, or no portrait
    NotFound,
    /// Entry size does not match the expected bitmap size
    WrongSize,
    /// Destination buffer too small
    BufferTooSmall,
    /// Underlying storage failed
    Io,
}

/// Listing and loading of bitmap entries
pub trait ImageSource {
    /// Number of entries, matching or not
    fn entry_count(&self) -> usize;

    /// Name of the entry at `index`
    fn entry_name(&self, index: usize) -> Option<&str>;

    /// Copy the entry at `index` into `buf`, returning the byte count
    fn load(&mut self, index: usize, buf: &mut [u8]) -> Result<usize, ImageError>;

    /// Copy the badge portrait into `buf`
    fn load_portrait(&mut self, buf: &mut [u8]) -> Result<usize, ImageError>;
}
