//! Badge screen layout
//!
//! ```text
//! ┌──────────────────────────────┬─────────────┐
//! │ Company            (30 px)   │             │
//! ├──────────────────────────────┤             │
//! │            Name    (36 px)   │  Portrait   │
//! ├──────────────────────────────┤  104×128    │
//! │ Specialist for     (60 px)   │             │
//! │ detail 1 / 2 / 3             │             │
//! └──────────────────────────────┴─────────────┘
//! ```
//!
//! Vertical positions are text centre lines.

use super::fit::{FitPolicy, FittedText};
use super::profile::{BadgeProfile, DETAIL_LINES};
use crate::traits::images::{IMAGE_HEIGHT, IMAGE_WIDTH, PORTRAIT_WIDTH};
use crate::traits::TextMetrics;

pub const SCREEN_WIDTH: i32 = IMAGE_WIDTH as i32;
pub const SCREEN_HEIGHT: i32 = IMAGE_HEIGHT as i32;

/// Left edge of the portrait panel
pub const PORTRAIT_X: i32 = SCREEN_WIDTH - PORTRAIT_WIDTH as i32;
/// Width available to the text boxes
pub const TEXT_WIDTH: u32 = IMAGE_WIDTH - PORTRAIT_WIDTH - 1;
pub const LEFT_PADDING: i32 = 5;

pub const COMPANY_HEIGHT: i32 = 30;
pub const COMPANY_SCALE_X100: u16 = 60;
pub const COMPANY_Y: i32 = COMPANY_HEIGHT / 2 + 1;

pub const DETAILS_HEIGHT: i32 = 60;
pub const DETAILS_SCALE_X100: u16 = 50;
pub const DETAILS_TOP: i32 = SCREEN_HEIGHT - DETAILS_HEIGHT;
pub const DETAIL_TITLE: &str = "Specialist for";
pub const DETAIL_TITLE_Y: i32 = DETAILS_TOP + 8;
/// Title plus three details share the box evenly
pub const DETAIL_LINE_PITCH: i32 = DETAILS_HEIGHT / (DETAIL_LINES as i32 + 1);

pub const NAME_TOP: i32 = COMPANY_HEIGHT + 1;
pub const NAME_HEIGHT: i32 = SCREEN_HEIGHT - COMPANY_HEIGHT - DETAILS_HEIGHT - 2;
pub const NAME_PADDING: u32 = 20;
pub const NAME_Y: i32 = NAME_HEIGHT / 2 + COMPANY_HEIGHT + 3;

pub const COMPANY_FIT: FitPolicy = FitPolicy::Truncate {
    scale_x100: COMPANY_SCALE_X100,
    max_width: TEXT_WIDTH,
};

pub const DETAIL_FIT: FitPolicy = FitPolicy::Truncate {
    scale_x100: DETAILS_SCALE_X100,
    max_width: TEXT_WIDTH,
};

pub const NAME_FIT: FitPolicy = FitPolicy::ShrinkToFit {
    start_x100: 200,
    step_x100: 1,
    min_x100: 10,
    max_width: TEXT_WIDTH - NAME_PADDING,
};

/// Badge text fitted to its boxes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FittedBadge {
    pub company: FittedText,
    pub name: FittedText,
    /// Left edge that centres the name in the text column
    pub name_x: i32,
    pub details: [FittedText; DETAIL_LINES],
}

impl FittedBadge {
    /// Centre line of detail `index` (0-based)
    pub fn detail_y(index: usize) -> i32 {
        DETAIL_TITLE_Y + DETAIL_LINE_PITCH * (index as i32 + 1)
    }
}

/// Fit every profile field to its box
pub fn fit_badge<M: TextMetrics + ?Sized>(profile: &BadgeProfile, metrics: &M) -> FittedBadge {
    let name = NAME_FIT.fit(&profile.name, metrics);
    let name_x = (TEXT_WIDTH.saturating_sub(name.width) / 2) as i32;

    FittedBadge {
        company: COMPANY_FIT.fit(&profile.company, metrics),
        name,
        name_x,
        details: [
            DETAIL_FIT.fit(&profile.details[0], metrics),
            DETAIL_FIT.fit(&profile.details[1], metrics),
            DETAIL_FIT.fit(&profile.details[2], metrics),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::fit::tests::FixedWidth;

    struct Wide;

    impl TextMetrics for Wide {
        fn measure(&self, text: &str, scale_x100: u16) -> u32 {
            text.len() as u32 * 10 * u32::from(scale_x100) / 100
        }
    }

    #[test]
    fn test_geometry() {
        assert_eq!(PORTRAIT_X, 192);
        assert_eq!(TEXT_WIDTH, 191);
        assert_eq!(NAME_HEIGHT, 36);
        assert_eq!(DETAIL_LINE_PITCH, 15);
        assert_eq!(FittedBadge::detail_y(2), DETAIL_TITLE_Y + 45);
        assert!(FittedBadge::detail_y(2) < SCREEN_HEIGHT);
    }

    #[test]
    fn test_default_profile_fits_untouched() {
        let badge = fit_badge(&BadgeProfile::default_profile(), &FixedWidth);
        assert_eq!(badge.company.text.as_str(), "My Company");
        assert_eq!(badge.name.scale_x100, 200);
        assert_eq!(badge.name_x, (191 - 108) / 2);
        assert_eq!(badge.details[2].text.as_str(), "-Eating");
    }

    #[test]
    fn test_long_company_truncated() {
        let profile = BadgeProfile::parse("International Business Machines Corporation\nX\n");
        let badge = fit_badge(&profile, &Wide);
        // 6 px per character at scale 0.60
        assert_eq!(badge.company.text.len(), 31);
        assert!(badge.company.width <= TEXT_WIDTH);
        assert!(badge.company.text.len() < profile.company.len());
        assert!(profile.company.starts_with(badge.company.text.as_str()));
    }
}
