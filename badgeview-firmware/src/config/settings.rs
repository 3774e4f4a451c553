//! Build-time settings

use defmt::*;

use badgeview_core::config::{BatteryLimits, GalleryTiming, InputTiming, Settings};

include!(concat!(env!("OUT_DIR"), "/settings.rs"));

/// Settings from `badge.toml`, or the defaults if they do not validate
pub fn load_settings() -> Settings {
    match SETTINGS.validate() {
        Ok(()) => {
            info!(
                "Settings: idle {} ms, autoscroll {} ms, battery min {} mV",
                SETTINGS.gallery.idle_delay_ms,
                SETTINGS.gallery.autoscroll_period_ms,
                SETTINGS.battery.min_millivolts
            );
            SETTINGS
        }
        Err(e) => {
            warn!("Invalid settings ({:?}), using defaults", e);
            Settings::DEFAULT
        }
    }
}
