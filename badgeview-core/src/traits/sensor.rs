//! Battery voltage sensing

/// Errors that can occur with voltage sensing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// ADC conversion error
    ConversionError,
    /// Reference enable line could not be driven
    ReferenceUnavailable,
}

/// One raw battery measurement
///
/// The battery is read through a divide-by-three network and the supply
/// is recovered from the 1.24 V reference, so both counts are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryReading {
    /// ADC count on the divided battery line
    pub vbat_raw: u16,
    /// ADC count on the 1.24 V reference
    pub vref_raw: u16,
}

/// Trait for the battery sense circuit
pub trait VoltageSensor {
    /// Take one battery and reference measurement
    fn sample(&mut self) -> Result<BatteryReading, SensorError>;
}
