//! Battery guard
//!
//! The supply voltage is not known directly: it is recovered from the
//! 1.24 V reference read against the same ADC. The battery line goes
//! through a divide-by-three network.
//!
//! `vdd = 1240 mV × full_scale / vref_raw`
//! `vbat = 3 × vdd × vbat_raw / full_scale`
//!
//! The ADC full scale cancels out, leaving
//! `vbat_mv = 3720 × vbat_raw / vref_raw`.

use crate::config::BatteryLimits;
use crate::traits::{BatteryReading, SensorError};

/// Reference voltage (mV)
pub const REFERENCE_MV: u32 = 1240;

/// Battery divider gain
pub const DIVIDER_GAIN: u32 = 3;

/// Result of a battery check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryStatus {
    /// At or above the threshold
    Ok { millivolts: u32 },
    /// Below the threshold, warn the user
    Low { millivolts: u32 },
    /// Sample failed or was implausible
    Unknown,
}

impl BatteryStatus {
    pub fn is_low(&self) -> bool {
        matches!(self, BatteryStatus::Low { .. })
    }
}

/// Battery voltage in millivolts, `None` when the reference read zero
pub fn battery_millivolts(reading: BatteryReading) -> Option<u32> {
    if reading.vref_raw == 0 {
        return None;
    }
    Some(REFERENCE_MV * DIVIDER_GAIN * u32::from(reading.vbat_raw) / u32::from(reading.vref_raw))
}

/// Stateless low battery check
#[derive(Debug, Clone, Copy)]
pub struct BatteryGuard {
    limits: BatteryLimits,
}

impl BatteryGuard {
    pub fn new(limits: BatteryLimits) -> Self {
        Self { limits }
    }

    /// Classify one sample
    ///
    /// A failed sample is never reported as low.
    pub fn check(&self, sample: Result<BatteryReading, SensorError>) -> BatteryStatus {
        let Ok(reading) = sample else {
            return BatteryStatus::Unknown;
        };

        match battery_millivolts(reading) {
            Some(millivolts) if millivolts < self.limits.min_millivolts => {
                BatteryStatus::Low { millivolts }
            }
            Some(millivolts) => BatteryStatus::Ok { millivolts },
            None => BatteryStatus::Unknown,
        }
    }

    /// How long to keep the warning on screen
    pub fn warning_ms(&self) -> u32 {
        self.limits.warning_ms
    }
}
