//! Badger 2040 adapters for the core traits
//!
//! Clock and ADC glue, plus the concrete types the controller runs on.

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::{Input, Output};
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Async, Spi};
use embassy_time::{Delay, Instant, Timer};

use badgeview_core::controller::ModeController;
use badgeview_core::traits::Clock;
use badgeview_display::{EinkRenderer, Uc8151};
use badgeview_drivers::input::GpioButtons;
use badgeview_drivers::sensor::{AdcReader, BatteryChannel, BatteryMonitor};

use crate::assets::EmbeddedImages;
use crate::config::FlashStore;

/// Monotonic clock on the embassy time driver
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }

    async fn pause(&mut self, ms: u32) {
        Timer::after_millis(u64::from(ms)).await;
    }
}

/// Blocking ADC with the battery and reference channels
pub struct BatteryAdc {
    adc: Adc<'static, Blocking>,
    battery: Channel<'static>,
    reference: Channel<'static>,
}

impl BatteryAdc {
    pub fn new(
        adc: Adc<'static, Blocking>,
        battery: Channel<'static>,
        reference: Channel<'static>,
    ) -> Self {
        Self {
            adc,
            battery,
            reference,
        }
    }
}

impl AdcReader for BatteryAdc {
    fn read(&mut self, channel: BatteryChannel) -> Result<u16, ()> {
        let channel = match channel {
            BatteryChannel::Battery => &mut self.battery,
            BatteryChannel::Reference => &mut self.reference,
        };
        self.adc.blocking_read(channel).map_err(|_| ())
    }
}

pub type Panel = Uc8151<
    Spi<'static, SPI0, Async>,
    Output<'static>,
    Output<'static>,
    Output<'static>,
    Input<'static>,
    Delay,
>;

pub type BadgeController = ModeController<
    EinkRenderer<'static, Panel>,
    GpioButtons<Input<'static>>,
    FlashStore<'static>,
    EmbeddedImages,
    BatteryMonitor<BatteryAdc, Output<'static>>,
    EmbassyClock,
>;
