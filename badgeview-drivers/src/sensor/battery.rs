//! Battery monitor
//!
//! The battery reaches the ADC through a divide-by-three network. The
//! ADC reference is the (unregulated) supply, so a 1.24 V reference is
//! switched on and read alongside to recover the true scale. The
//! conversion to millivolts happens in the core.

use badgeview_core::traits::{BatteryReading, SensorError, VoltageSensor};
use embedded_hal::digital::OutputPin;

/// Conversions averaged per line
pub const SAMPLES_PER_READING: u32 = 4;

/// ADC line used by the monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryChannel {
    /// Divided battery voltage
    Battery,
    /// 1.24 V reference
    Reference,
}

/// ADC reader trait
pub trait AdcReader {
    /// Read one raw conversion from `channel`
    #[allow(clippy::result_unit_err)]
    fn read(&mut self, channel: BatteryChannel) -> Result<u16, ()>;
}

/// Battery monitor with a switched voltage reference
pub struct BatteryMonitor<ADC, EN> {
    adc: ADC,
    reference_enable: EN,
}

impl<ADC: AdcReader, EN: OutputPin> BatteryMonitor<ADC, EN> {
    pub fn new(adc: ADC, reference_enable: EN) -> Self {
        Self {
            adc,
            reference_enable,
        }
    }

    fn average(&mut self, channel: BatteryChannel) -> Result<u16, SensorError> {
        let mut total = 0u32;
        for _ in 0..SAMPLES_PER_READING {
            total += u32::from(
                self.adc
                    .read(channel)
                    .map_err(|_| SensorError::ConversionError)?,
            );
        }
        Ok((total / SAMPLES_PER_READING) as u16)
    }

    fn measure(&mut self) -> Result<BatteryReading, SensorError> {
        let vref_raw = self.average(BatteryChannel::Reference)?;
        let vbat_raw = self.average(BatteryChannel::Battery)?;
        Ok(BatteryReading { vbat_raw, vref_raw })
    }
}

impl<ADC: AdcReader, EN: OutputPin> VoltageSensor for BatteryMonitor<ADC, EN> {
    fn sample(&mut self) -> Result<BatteryReading, SensorError> {
        self.reference_enable
            .set_high()
            .map_err(|_| SensorError::ReferenceUnavailable)?;
        let reading = self.measure();
        // The reference draws current, never leave it on
        let released = self.reference_enable.set_low();
        let reading = reading?;
        released.map_err(|_| SensorError::ReferenceUnavailable)?;
        Ok(reading)
    }
}
