//! Battery protection
//!
//! Checked once per mode cycle, never per button tick.

pub mod battery;

pub use battery::{battery_millivolts, BatteryGuard, BatteryStatus};
