//! UC8151 e-ink controller driver
//!
//! Driver for the 296×128 black/white panel on the Badger 2040, over
//! SPI with separate data/command, reset and busy lines. The busy line
//! reads low while the controller is working.
//!
//! Every refresh is a full update using the OTP waveform, followed by
//! power off so the panel draws nothing between frames.

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::spi::SpiBus;

use crate::backend::{EinkPanel, PanelError};
use crate::framebuffer::{FrameBuffer, WIDTH};

/// Busy polling interval (ms)
const BUSY_POLL_MS: u32 = 5;

/// Longest a full refresh may keep the panel busy (ms)
pub const BUSY_TIMEOUT_MS: u32 = 5_000;

/// UC8151 commands
#[allow(dead_code)]
mod cmd {
    pub const PSR: u8 = 0x00;
    pub const PWR: u8 = 0x01;
    pub const POF: u8 = 0x02;
    pub const PFS: u8 = 0x03;
    pub const PON: u8 = 0x04;
    pub const BTST: u8 = 0x06;
    pub const DTM1: u8 = 0x10;
    pub const DSP: u8 = 0x11;
    pub const DRF: u8 = 0x12;
    pub const DTM2: u8 = 0x13;
    pub const PLL: u8 = 0x30;
    pub const TSE: u8 = 0x41;
    pub const CDI: u8 = 0x50;
    pub const TCON: u8 = 0x60;
    pub const TRES: u8 = 0x61;
}

/// Configuration written after every reset
const INIT_SEQUENCE: &[(u8, &[u8])] = &[
    // 128×296, OTP LUT, black/white, scan up, shift right
    (cmd::PSR, &[0x9F]),
    (cmd::PWR, &[0x03, 0x00, 0x2B, 0x2B, 0x2B]),
    (cmd::BTST, &[0x17, 0x17, 0x17]),
    (cmd::PFS, &[0x00]),
    // 100 Hz frame rate
    (cmd::PLL, &[0x3A]),
    (cmd::TSE, &[0x00]),
    (cmd::CDI, &[0x4C]),
    (cmd::TCON, &[0x22]),
    (cmd::TRES, &[0x80, 0x01, 0x28]),
];

/// UC8151 panel driver
pub struct Uc8151<SPI, CS, DC, RST, BUSY, DELAY> {
    spi: SPI,
    cs: CS,
    dc: DC,
    reset: RST,
    busy: BUSY,
    delay: DELAY,
}

impl<SPI, CS, DC, RST, BUSY, DELAY> Uc8151<SPI, CS, DC, RST, BUSY, DELAY>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    BUSY: InputPin,
    DELAY: DelayNs,
{
    pub fn new(spi: SPI, cs: CS, dc: DC, reset: RST, busy: BUSY, delay: DELAY) -> Self {
        Self {
            spi,
            cs,
            dc,
            reset,
            busy,
            delay,
        }
    }

    /// Hardware reset followed by the init sequence
    pub async fn init(&mut self) -> Result<(), PanelError> {
        self.reset.set_low().map_err(|_| PanelError::Pin)?;
        self.delay.delay_ms(10).await;
        self.reset.set_high().map_err(|_| PanelError::Pin)?;
        self.delay.delay_ms(10).await;
        self.wait_idle().await?;

        for (command, data) in INIT_SEQUENCE {
            self.command(*command, data).await?;
        }
        Ok(())
    }

    async fn command(&mut self, command: u8, data: &[u8]) -> Result<(), PanelError> {
        self.cs.set_low().map_err(|_| PanelError::Pin)?;
        let result = self.transfer(command, data).await;
        self.cs.set_high().map_err(|_| PanelError::Pin)?;
        result
    }

    async fn transfer(&mut self, command: u8, data: &[u8]) -> Result<(), PanelError> {
        self.dc.set_low().map_err(|_| PanelError::Pin)?;
        self.spi.write(&[command]).await.map_err(|_| PanelError::Bus)?;
        self.spi.flush().await.map_err(|_| PanelError::Bus)?;
        if !data.is_empty() {
            self.dc.set_high().map_err(|_| PanelError::Pin)?;
            self.spi.write(data).await.map_err(|_| PanelError::Bus)?;
            self.spi.flush().await.map_err(|_| PanelError::Bus)?;
        }
        Ok(())
    }

    async fn write_frame(&mut self, frame: &FrameBuffer) -> Result<(), PanelError> {
        self.cs.set_low().map_err(|_| PanelError::Pin)?;
        let result = self.stream_frame(frame).await;
        self.cs.set_high().map_err(|_| PanelError::Pin)?;
        result
    }

    async fn stream_frame(&mut self, frame: &FrameBuffer) -> Result<(), PanelError> {
        self.dc.set_low().map_err(|_| PanelError::Pin)?;
        self.spi.write(&[cmd::DTM2]).await.map_err(|_| PanelError::Bus)?;
        self.spi.flush().await.map_err(|_| PanelError::Bus)?;
        self.dc.set_high().map_err(|_| PanelError::Pin)?;
        for x in 0..WIDTH {
            let column = frame.panel_column(x);
            self.spi.write(&column).await.map_err(|_| PanelError::Bus)?;
        }
        self.spi.flush().await.map_err(|_| PanelError::Bus)
    }

    async fn draw(&mut self, frame: &FrameBuffer) -> Result<(), PanelError> {
        self.init().await?;
        self.command(cmd::PON, &[]).await?;
        self.wait_idle().await?;

        self.write_frame(frame).await?;
        self.command(cmd::DSP, &[]).await?;
        self.command(cmd::DRF, &[]).await?;
        self.wait_idle().await
    }

    async fn wait_idle(&mut self) -> Result<(), PanelError> {
        let mut waited = 0;
        while self.busy.is_low().map_err(|_| PanelError::Pin)? {
            if waited >= BUSY_TIMEOUT_MS {
                return Err(PanelError::Timeout);
            }
            self.delay.delay_ms(BUSY_POLL_MS).await;
            waited += BUSY_POLL_MS;
        }
        Ok(())
    }
}

impl<SPI, CS, DC, RST, BUSY, DELAY> EinkPanel for Uc8151<SPI, CS, DC, RST, BUSY, DELAY>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    BUSY: InputPin,
    DELAY: DelayNs,
{
    /// Draw `frame`, then power the charge pump off even if drawing failed
    async fn refresh(&mut self, frame: &FrameBuffer) -> Result<(), PanelError> {
        let drawn = self.draw(frame).await;
        let off = self.command(cmd::POF, &[]).await;
        drawn.and(off)
    }
}
