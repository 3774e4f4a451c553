//! Badgeview - E-Ink Badge Firmware
//!
//! Firmware binary for the Pimoroni Badger 2040. Shows a personal badge
//! screen and a gallery of embedded images, checking the battery in
//! between.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::{self, Spi};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use badgeview_core::controller::{Board, Halt, ModeController};
use badgeview_display::{EinkRenderer, FrameBuffer, Uc8151};
use badgeview_drivers::input::GpioButtons;
use badgeview_drivers::sensor::BatteryMonitor;
use badgeview_hal_rp2040::flash::Rp2040FlashStorage;
use badgeview_hal_rp2040::pins::PowerHold;

mod assets;
mod board;
mod config;

use crate::assets::EmbeddedImages;
use crate::board::{BadgeController, BatteryAdc, EmbassyClock};
use crate::config::{load_settings, FlashStore};

/// UC8151 SPI clock
const PANEL_SPI_HZ: u32 = 12_000_000;

static FRAME: StaticCell<FrameBuffer> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Badgeview firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Keep the regulator on while running from battery
    let mut power = PowerHold::engage(p.PIN_10);
    let _led = Output::new(p.PIN_25, Level::High);
    info!("Peripherals initialized");

    let settings = load_settings();

    // UC8151 panel on SPI0
    let mut spi_config = spi::Config::default();
    spi_config.frequency = PANEL_SPI_HZ;
    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, spi_config);
    let panel = Uc8151::new(
        spi,
        Output::new(p.PIN_17, Level::High),
        Output::new(p.PIN_20, Level::Low),
        Output::new(p.PIN_21, Level::High),
        Input::new(p.PIN_26, Pull::Up),
        Delay,
    );
    let display = EinkRenderer::new(panel, FRAME.init(FrameBuffer::new()));

    // Buttons A, B, C, Up, Down
    let buttons = GpioButtons::new([
        Input::new(p.PIN_12, Pull::Down),
        Input::new(p.PIN_13, Pull::Down),
        Input::new(p.PIN_14, Pull::Down),
        Input::new(p.PIN_15, Pull::Down),
        Input::new(p.PIN_11, Pull::Down),
    ]);

    // Battery sense: divided VBAT on GPIO29, 1.24 V reference on GPIO28
    let adc = Adc::new_blocking(p.ADC, embassy_rp::adc::Config::default());
    let battery = BatteryMonitor::new(
        BatteryAdc::new(
            adc,
            Channel::new_pin(p.PIN_29, Pull::None),
            Channel::new_pin(p.PIN_28, Pull::None),
        ),
        Output::new(p.PIN_27, Level::Low),
    );

    let store = FlashStore::new(Rp2040FlashStorage::new(p.FLASH, p.DMA_CH1));

    let board = Board {
        display,
        buttons,
        store,
        images: EmbeddedImages::new(),
        battery,
        clock: EmbassyClock,
    };
    let mut controller: BadgeController = ModeController::new(board, settings);

    info!("Starting mode controller");
    match controller.run().await {
        Halt::NoImages => error!("Halted: no gallery images"),
    }

    // On battery this cuts power; on USB the core just idles
    power.release();
    loop {
        cortex_m::asm::wfi();
    }
}
