//! Badger 2040 pin map
//!
//! Buttons are active high with the pull-downs enabled. The panel busy
//! line reads low while a refresh is in progress.

use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::PIN_10;
use embassy_rp::Peri;

pub const BUTTON_A: u8 = 12;
pub const BUTTON_B: u8 = 13;
pub const BUTTON_C: u8 = 14;
pub const BUTTON_UP: u8 = 15;
pub const BUTTON_DOWN: u8 = 11;

pub const LED: u8 = 25;
pub const ENABLE_3V3: u8 = 10;

pub const VBAT_SENSE: u8 = 29;
pub const REF_1V2: u8 = 28;
pub const VREF_POWER: u8 = 27;

pub const PANEL_CS: u8 = 17;
pub const PANEL_CLK: u8 = 18;
pub const PANEL_MOSI: u8 = 19;
pub const PANEL_DC: u8 = 20;
pub const PANEL_RESET: u8 = 21;
pub const PANEL_BUSY: u8 = 26;

/// Holds the 3V3 regulator on while the badge runs from battery
///
/// Releasing the line cuts power to everything but the RTC, so this is
/// the firmware's only way to switch itself off.
pub struct PowerHold<'d> {
    enable: Output<'d>,
}

impl<'d> PowerHold<'d> {
    /// Latch the regulator on
    pub fn engage(pin: Peri<'d, PIN_10>) -> Self {
        Self {
            enable: Output::new(pin, Level::High),
        }
    }

    /// Drop the regulator enable
    ///
    /// On USB power the board keeps running, so callers should still
    /// park afterwards.
    pub fn release(&mut self) {
        self.enable.set_low();
    }
}

