//! Landscape 1-bit frame buffer
//!
//! Row-major, 37 bytes per row, most significant bit leftmost. A set bit
//! is black ink, which is also the layout of the stored gallery images,
//! so a full-screen image is a plain copy.
//!
//! The UC8151 scans the other way round (128 px source lines along the
//! short edge, white = 1), so [`FrameBuffer::panel_column`] transposes
//! and inverts on the way out.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use badgeview_core::traits::images::{IMAGE_BYTES, IMAGE_HEIGHT, IMAGE_WIDTH};

pub const WIDTH: u32 = IMAGE_WIDTH;
pub const HEIGHT: u32 = IMAGE_HEIGHT;

/// Bytes per landscape row
pub const ROW_BYTES: usize = (WIDTH as usize).div_ceil(8);

/// Bytes per panel column (one source line)
pub const COLUMN_BYTES: usize = HEIGHT as usize / 8;

/// Bitmap does not match the requested blit size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitmapSizeError;

pub struct FrameBuffer {
    bytes: [u8; IMAGE_BYTES],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// A blank (white) frame
    pub const fn new() -> Self {
        Self {
            bytes: [0; IMAGE_BYTES],
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Set one pixel, ignoring anything off screen
    pub fn set_pixel(&mut self, x: u32, y: u32, black: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let index = y as usize * ROW_BYTES + x as usize / 8;
        let mask = 0x80 >> (x % 8);
        if black {
            self.bytes[index] |= mask;
        } else {
            self.bytes[index] &= !mask;
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.bytes[y as usize * ROW_BYTES + x as usize / 8] & (0x80 >> (x % 8)) != 0
    }

    /// Copy a 1-bit bitmap `width` pixels wide with its left edge at `x`
    ///
    /// The bitmap must cover the full screen height and `x` must be
    /// byte aligned.
    pub fn blit(&mut self, x: u32, width: u32, bitmap: &[u8]) -> Result<(), BitmapSizeError> {
        let src_row = (width as usize).div_ceil(8);
        if x % 8 != 0 || x + width > WIDTH || bitmap.len() != src_row * HEIGHT as usize {
            return Err(BitmapSizeError);
        }
        let offset = x as usize / 8;
        for (row, src) in bitmap.chunks_exact(src_row).enumerate() {
            let start = row * ROW_BYTES + offset;
            self.bytes[start..start + src_row].copy_from_slice(src);
        }
        Ok(())
    }

    /// Panel bytes for landscape column `x`, top pixel in the MSB of the
    /// first byte, white = 1
    pub fn panel_column(&self, x: u32) -> [u8; COLUMN_BYTES] {
        let mut column = [0xFF; COLUMN_BYTES];
        for (group, byte) in column.iter_mut().enumerate() {
            for bit in 0..8 {
                if self.pixel(x, group as u32 * 8 + bit) {
                    *byte &= !(0x80 >> bit);
                }
            }
        }
        column
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) {
                self.set_pixel(x, y, color.is_on());
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.bytes.fill(if color.is_on() { 0xFF } else { 0x00 });
        Ok(())
    }
}
