//! Full-screen renderer
//!
//! Implements the core `Renderer` on top of a frame buffer and an
//! [`EinkPanel`]. Black is `BinaryColor::On`.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use badgeview_core::badge::layout::{
    COMPANY_Y, DETAILS_HEIGHT, DETAILS_SCALE_X100, DETAILS_TOP, DETAIL_TITLE, DETAIL_TITLE_Y,
    LEFT_PADDING, NAME_HEIGHT, NAME_TOP, NAME_Y, PORTRAIT_X, TEXT_WIDTH,
};
use badgeview_core::badge::{FittedBadge, FittedText};
use badgeview_core::gallery::OverlayStrip;
use badgeview_core::traits::images::PORTRAIT_WIDTH;
use badgeview_core::traits::{BadgeFrame, DisplayError, GalleryFrame, Renderer, TextMetrics};

use crate::backend::EinkPanel;
use crate::framebuffer::{FrameBuffer, HEIGHT, WIDTH};
use crate::text::{font_for_scale, text_width, WordWrap};

const BLACK: BinaryColor = BinaryColor::On;
const WHITE: BinaryColor = BinaryColor::Off;

/// Scale used for warning messages
pub const WARNING_SCALE_X100: u16 = 100;
/// Horizontal margin around warning text
pub const WARNING_MARGIN: u32 = 8;
const WARNING_LINE_GAP: i32 = 4;

/// Renderer painting into a borrowed frame buffer
pub struct EinkRenderer<'a, P> {
    panel: P,
    frame: &'a mut FrameBuffer,
}

impl<'a, P: EinkPanel> EinkRenderer<'a, P> {
    pub fn new(panel: P, frame: &'a mut FrameBuffer) -> Self {
        Self { panel, frame }
    }

    pub fn frame(&self) -> &FrameBuffer {
        self.frame
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    async fn commit(&mut self) -> Result<(), DisplayError> {
        self.panel.refresh(self.frame).await.map_err(DisplayError::from)
    }

    fn paint_badge(
        &mut self,
        badge: &FittedBadge,
        portrait: Option<&[u8]>,
    ) -> Result<(), DisplayError> {
        let frame = &mut *self.frame;
        frame.clear(BLACK).ok();

        let name_box = Size::new(TEXT_WIDTH, NAME_HEIGHT as u32);
        fill(frame, Rectangle::new(Point::new(1, NAME_TOP), name_box), WHITE);
        let details_box = Size::new(TEXT_WIDTH, DETAILS_HEIGHT as u32 - 1);
        fill(frame, Rectangle::new(Point::new(1, DETAILS_TOP), details_box), WHITE);

        draw_fitted(frame, &badge.company, Point::new(LEFT_PADDING, COMPANY_Y), WHITE);
        draw_fitted(frame, &badge.name, Point::new(badge.name_x, NAME_Y), BLACK);
        let title = Point::new(LEFT_PADDING, DETAIL_TITLE_Y);
        draw_text(frame, DETAIL_TITLE, DETAILS_SCALE_X100, title, BLACK);
        for (index, detail) in badge.details.iter().enumerate() {
            let origin = Point::new(LEFT_PADDING, FittedBadge::detail_y(index));
            draw_fitted(frame, detail, origin, BLACK);
        }

        let portrait_area = Rectangle::new(
            Point::new(PORTRAIT_X, 0),
            Size::new(PORTRAIT_WIDTH, HEIGHT),
        );
        match portrait {
            Some(bitmap) => frame
                .blit(PORTRAIT_X as u32, PORTRAIT_WIDTH, bitmap)
                .map_err(|_| DisplayError::InvalidImage)?,
            None => fill(frame, portrait_area, WHITE),
        }
        portrait_area
            .into_styled(PrimitiveStyle::with_stroke(BLACK, 1))
            .draw(frame)
            .ok();
        Ok(())
    }

    fn paint_gallery(
        &mut self,
        image: Option<&[u8]>,
        overlay: Option<OverlayStrip>,
    ) -> Result<(), DisplayError> {
        let frame = &mut *self.frame;
        match image {
            Some(bitmap) => frame
                .blit(0, WIDTH, bitmap)
                .map_err(|_| DisplayError::InvalidImage)?,
            None => {
                frame.clear(WHITE).ok();
            }
        }

        if let Some(strip) = overlay {
            let outlined = PrimitiveStyleBuilder::new()
                .stroke_color(BLACK)
                .stroke_width(1)
                .fill_color(WHITE)
                .build();
            let filled = PrimitiveStyle::with_fill(BLACK);
            for indicator in strip.indicators() {
                let square = Rectangle::new(
                    Point::new(indicator.x, indicator.y),
                    Size::new(indicator.size, indicator.size),
                );
                let style = if indicator.filled { filled } else { outlined };
                square.into_styled(style).draw(frame).ok();
            }
        }
        Ok(())
    }

    fn paint_warning(&mut self, message: &str) {
        let frame = &mut *self.frame;
        frame.clear(WHITE).ok();

        let font = font_for_scale(WARNING_SCALE_X100);
        let style = MonoTextStyle::new(font, BLACK);
        let placement = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();

        let max_width = WIDTH - 2 * WARNING_MARGIN;
        let line_height = font.character_size.height as i32 + WARNING_LINE_GAP;
        let lines = WordWrap::new(message, font, max_width).count() as i32;
        let first_y = HEIGHT as i32 / 2 - (lines - 1) * line_height / 2;

        for (index, line) in WordWrap::new(message, font, max_width).enumerate() {
            let centre = Point::new(WIDTH as i32 / 2, first_y + index as i32 * line_height);
            Text::with_text_style(line, centre, style, placement)
                .draw(frame)
                .ok();
        }
    }
}

fn fill(frame: &mut FrameBuffer, area: Rectangle, color: BinaryColor) {
    area.into_styled(PrimitiveStyle::with_fill(color)).draw(frame).ok();
}

fn draw_text(
    frame: &mut FrameBuffer,
    text: &str,
    scale_x100: u16,
    origin: Point,
    color: BinaryColor,
) {
    let style = MonoTextStyle::new(font_for_scale(scale_x100), color);
    Text::with_baseline(text, origin, style, Baseline::Middle)
        .draw(frame)
        .ok();
}

fn draw_fitted(frame: &mut FrameBuffer, fitted: &FittedText, origin: Point, color: BinaryColor) {
    draw_text(frame, &fitted.text, fitted.scale_x100, origin, color);
}

impl<P> TextMetrics for EinkRenderer<'_, P> {
    fn measure(&self, text: &str, scale_x100: u16) -> u32 {
        text_width(font_for_scale(scale_x100), text)
    }
}

impl<P: EinkPanel> Renderer for EinkRenderer<'_, P> {
    async fn render_badge(&mut self, frame: &BadgeFrame<'_>) -> Result<(), DisplayError> {
        self.paint_badge(frame.badge, frame.portrait)?;
        self.commit().await
    }

    async fn render_gallery(&mut self, frame: &GalleryFrame<'_>) -> Result<(), DisplayError> {
        self.paint_gallery(frame.image, frame.overlay)?;
        self.commit().await
    }

    async fn render_warning(&mut self, message: &str) -> Result<(), DisplayError> {
        self.paint_warning(message);
        self.commit().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::PanelError;
    use badgeview_core::badge::{fit_badge, BadgeProfile};
    use badgeview_core::gallery::GalleryState;
    use badgeview_core::traits::images::{IMAGE_BYTES, PORTRAIT_BYTES};
    use embassy_futures::block_on;

    #[derive(Default)]
    struct RecordingPanel {
        refreshes: Vec<Vec<u8>>,
        fail: Option<PanelError>,
    }

    impl EinkPanel for RecordingPanel {
        async fn refresh(&mut self, frame: &FrameBuffer) -> Result<(), PanelError> {
            if let Some(err) = self.fail {
                return Err(err);
            }
            self.refreshes.push(frame.as_bytes().to_vec());
            Ok(())
        }
    }

    fn black_pixels(frame: &FrameBuffer, area: Rectangle) -> usize {
        area.points()
            .filter(|p| frame.pixel(p.x as u32, p.y as u32))
            .count()
    }

    #[test]
    fn test_measure_matches_font() {
        let mut fb = FrameBuffer::new();
        let renderer = EinkRenderer::new(RecordingPanel::default(), &mut fb);
        // 0.50 maps to the 6×12 font
        assert_eq!(renderer.measure("Rust", 50), 24);
        assert_eq!(renderer.measure("Rust", 200), 40);
    }

    #[test]
    fn test_badge_layout() {
        let mut fb = FrameBuffer::new();
        let mut renderer = EinkRenderer::new(RecordingPanel::default(), &mut fb);
        let badge = fit_badge(&BadgeProfile::default_profile(), &renderer);
        let portrait = [0xFFu8; PORTRAIT_BYTES];
        let frame = BadgeFrame {
            badge: &badge,
            portrait: Some(&portrait),
        };
        block_on(renderer.render_badge(&frame)).unwrap();

        assert_eq!(renderer.panel().refreshes.len(), 1);
        let fb = renderer.frame();
        // Company band is black with white text
        assert!(fb.pixel(0, 0));
        assert!(fb.pixel(150, 2));
        // Name box is white at its corners
        assert!(!fb.pixel(2, NAME_TOP as u32 + 1));
        assert!(!fb.pixel(TEXT_WIDTH - 1, DETAILS_TOP as u32 + 1));
        // Portrait copied in
        assert!(fb.pixel(PORTRAIT_X as u32, 64));
        assert!(fb.pixel(WIDTH - 1, HEIGHT - 1));
        // Some ink inside the name box
        let name_box = Rectangle::new(
            Point::new(1, NAME_TOP),
            Size::new(TEXT_WIDTH, NAME_HEIGHT as u32),
        );
        assert!(black_pixels(fb, name_box) > 0);
    }

    #[test]
    fn test_badge_without_portrait() {
        let mut fb = FrameBuffer::new();
        let mut renderer = EinkRenderer::new(RecordingPanel::default(), &mut fb);
        let badge = fit_badge(&BadgeProfile::default_profile(), &renderer);
        let frame = BadgeFrame {
            badge: &badge,
            portrait: None,
        };
        block_on(renderer.render_badge(&frame)).unwrap();

        let fb = renderer.frame();
        assert!(!fb.pixel(PORTRAIT_X as u32 + 10, 64));
        // 1 px border
        assert!(fb.pixel(PORTRAIT_X as u32, 64));
        assert!(fb.pixel(WIDTH - 1, 0));
        assert!(!fb.pixel(WIDTH - 2, 1));
    }

    #[test]
    fn test_gallery_image_and_overlay() {
        let mut fb = FrameBuffer::new();
        let mut renderer = EinkRenderer::new(RecordingPanel::default(), &mut fb);
        let image = [0u8; IMAGE_BYTES];
        let overlay = OverlayStrip::for_state(GalleryState::new(1, true), 3);
        let frame = GalleryFrame {
            image: Some(&image),
            overlay,
        };
        block_on(renderer.render_gallery(&frame)).unwrap();

        let strip = overlay.unwrap();
        let squares: Vec<_> = strip.indicators().collect();
        let fb = renderer.frame();
        // Outlined: border black, centre white
        assert!(fb.pixel(squares[0].x as u32, squares[0].y as u32));
        assert!(!fb.pixel(squares[0].x as u32 + 3, squares[0].y as u32 + 3));
        // Current: filled
        assert!(fb.pixel(squares[1].x as u32 + 3, squares[1].y as u32 + 3));
    }

    #[test]
    fn test_gallery_blank_when_missing() {
        let mut fb = FrameBuffer::new();
        let mut renderer = EinkRenderer::new(RecordingPanel::default(), &mut fb);
        let frame = GalleryFrame {
            image: None,
            overlay: None,
        };
        block_on(renderer.render_gallery(&frame)).unwrap();
        assert!(renderer.frame().as_bytes().iter().all(|&b| b == 0));
        assert_eq!(renderer.panel().refreshes.len(), 1);
    }

    #[test]
    fn test_gallery_rejects_bad_bitmap() {
        let mut fb = FrameBuffer::new();
        let mut renderer = EinkRenderer::new(RecordingPanel::default(), &mut fb);
        let frame = GalleryFrame {
            image: Some(&[0u8; 12]),
            overlay: None,
        };
        assert_eq!(
            block_on(renderer.render_gallery(&frame)),
            Err(DisplayError::InvalidImage)
        );
        assert!(renderer.panel().refreshes.is_empty());
    }

    #[test]
    fn test_warning_centred() {
        let mut fb = FrameBuffer::new();
        let mut renderer = EinkRenderer::new(RecordingPanel::default(), &mut fb);
        block_on(renderer.render_warning("Battery low!!!")).unwrap();

        let fb = renderer.frame();
        let left = Rectangle::new(Point::zero(), Size::new(WIDTH / 2, HEIGHT));
        let right = Rectangle::new(Point::new(WIDTH as i32 / 2, 0), Size::new(WIDTH / 2, HEIGHT));
        assert!(black_pixels(fb, left) > 0);
        assert!(black_pixels(fb, right) > 0);
        assert!(!fb.pixel(0, 0));
    }

    #[test]
    fn test_long_warning_wrapped_on_screen() {
        let mut fb = FrameBuffer::new();
        let mut renderer = EinkRenderer::new(RecordingPanel::default(), &mut fb);
        let message = "No images found. Add 1-bit 296x128 .bin images and reflash.";
        block_on(renderer.render_warning(message)).unwrap();

        let fb = renderer.frame();
        let top = Rectangle::new(Point::zero(), Size::new(WIDTH, HEIGHT / 2));
        let bottom = Rectangle::new(Point::new(0, HEIGHT as i32 / 2), Size::new(WIDTH, HEIGHT / 2));
        assert!(black_pixels(fb, top) > 0);
        assert!(black_pixels(fb, bottom) > 0);
        // Margins stay clear
        let margin = Rectangle::new(Point::zero(), Size::new(WARNING_MARGIN, HEIGHT));
        assert_eq!(black_pixels(fb, margin), 0);
    }

    #[test]
    fn test_panel_errors_mapped() {
        let mut fb = FrameBuffer::new();
        let panel = RecordingPanel {
            fail: Some(PanelError::Timeout),
            ..Default::default()
        };
        let mut renderer = EinkRenderer::new(panel, &mut fb);
        assert_eq!(
            block_on(renderer.render_warning("x")),
            Err(DisplayError::Timeout)
        );
    }
}
