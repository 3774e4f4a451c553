//! Sensor drivers

pub mod battery;

pub use battery::{AdcReader, BatteryChannel, BatteryMonitor};
