//! Scaled text on top of fixed bitmap fonts
//!
//! Layout code asks for text at a fractional scale of a nominal 24 px
//! glyph. The renderer maps each scale to the tallest ASCII mono font
//! that fits, so widths step rather than vary smoothly. Measurement uses
//! the same mapping, which keeps fitted text and painted text in
//! agreement.

use embedded_graphics::mono_font::ascii::{
    FONT_10X20, FONT_4X6, FONT_5X8, FONT_6X10, FONT_6X12, FONT_7X13, FONT_7X14, FONT_9X15,
    FONT_9X18,
};
use embedded_graphics::mono_font::MonoFont;

/// Glyph height at scale 1.00
pub const NOMINAL_GLYPH_HEIGHT: u32 = 24;

/// Fonts in ascending height
static FONTS: [&MonoFont<'static>; 9] = [
    &FONT_4X6,
    &FONT_5X8,
    &FONT_6X10,
    &FONT_6X12,
    &FONT_7X13,
    &FONT_7X14,
    &FONT_9X15,
    &FONT_9X18,
    &FONT_10X20,
];

/// Font used for `scale_x100`
pub fn font_for_scale(scale_x100: u16) -> &'static MonoFont<'static> {
    let target = NOMINAL_GLYPH_HEIGHT * u32::from(scale_x100) / 100;
    FONTS
        .iter()
        .rev()
        .find(|font| font.character_size.height <= target)
        .copied()
        .unwrap_or(FONTS[0])
}

/// Advance width of `text` in `font`
pub fn text_width(font: &MonoFont<'_>, text: &str) -> u32 {
    text.chars().count() as u32 * (font.character_size.width + font.character_spacing)
}

/// Greedy word wrap for a monospace font
///
/// Breaks at spaces where possible and hard-breaks words longer than a
/// line.
pub struct WordWrap<'t> {
    rest: &'t str,
    max_chars: usize,
}

impl<'t> WordWrap<'t> {
    pub fn new(text: &'t str, font: &MonoFont<'_>, max_width: u32) -> Self {
        let advance = font.character_size.width + font.character_spacing;
        Self {
            rest: text,
            max_chars: (max_width / advance.max(1)).max(1) as usize,
        }
    }
}

impl<'t> Iterator for WordWrap<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        let rest = self.rest.trim_start();
        if rest.is_empty() {
            self.rest = rest;
            return None;
        }

        // Byte offset just past `max_chars` characters
        let limit = match rest.char_indices().nth(self.max_chars) {
            Some((index, _)) => index,
            None => {
                self.rest = "";
                return Some(rest);
            }
        };

        let split = if rest[limit..].starts_with(' ') {
            limit
        } else {
            rest[..limit].rfind(' ').unwrap_or(limit)
        };
        let (line, tail) = rest.split_at(split);
        self.rest = tail;
        Some(line.trim_end())
    }
}
