//! Settings type definitions

/// Lowest accepted battery threshold (mV)
pub const MIN_BATTERY_THRESHOLD_MV: u32 = 2000;

/// Highest accepted battery threshold (mV)
pub const MAX_BATTERY_THRESHOLD_MV: u32 = 3700;

/// Gallery autoscroll timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GalleryTiming {
    /// Quiet time after manual navigation before autoscroll resumes (ms)
    pub idle_delay_ms: u32,
    /// Interval between automatic advances once idle (ms)
    pub autoscroll_period_ms: u32,
}

impl GalleryTiming {
    pub const DEFAULT: Self = Self {
        idle_delay_ms: 28_000,
        autoscroll_period_ms: 8_000,
    };
}

impl Default for GalleryTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Button polling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputTiming {
    /// Delay between two button samples (ms)
    pub tick_ms: u32,
    /// A raw change must hold this long to be accepted (ms)
    pub debounce_ms: u32,
    /// Time allowed between the two presses of a button combination (ms)
    pub combo_ms: u32,
}

impl InputTiming {
    pub const DEFAULT: Self = Self {
        tick_ms: 20,
        debounce_ms: 30,
        combo_ms: 90,
    };
}

impl Default for InputTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Battery guard limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryLimits {
    /// Below this voltage the low battery warning is shown (mV)
    pub min_millivolts: u32,
    /// How long the warning stays up before control returns (ms)
    pub warning_ms: u32,
}

impl BatteryLimits {
    pub const DEFAULT: Self = Self {
        min_millivolts: 3200,
        warning_ms: 3_000,
    };
}

impl Default for BatteryLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    pub gallery: GalleryTiming,
    pub input: InputTiming,
    pub battery: BatteryLimits,
    /// How long the "no images" message is shown before halting (ms)
    pub no_images_warning_ms: u32,
}

impl Settings {
    pub const DEFAULT: Self = Self {
        gallery: GalleryTiming::DEFAULT,
        input: InputTiming::DEFAULT,
        battery: BatteryLimits::DEFAULT,
        no_images_warning_ms: 4_000,
    };

    /// Check that the settings describe a usable device
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.gallery.autoscroll_period_ms == 0 {
            return Err(SettingsError::ZeroAutoscrollPeriod);
        }
        if self.gallery.idle_delay_ms <= self.gallery.autoscroll_period_ms {
            return Err(SettingsError::IdleDelayTooShort);
        }
        if self.input.tick_ms == 0 {
            return Err(SettingsError::ZeroTick);
        }
        if self.input.combo_ms < self.input.tick_ms {
            return Err(SettingsError::ComboShorterThanTick);
        }
        if !(MIN_BATTERY_THRESHOLD_MV..=MAX_BATTERY_THRESHOLD_MV)
            .contains(&self.battery.min_millivolts)
        {
            return Err(SettingsError::BatteryThresholdOutOfRange);
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Settings validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Autoscroll period must be non-zero
    ZeroAutoscrollPeriod,
    /// Idle delay must be longer than the autoscroll period
    IdleDelayTooShort,
    /// Poll tick must be non-zero
    ZeroTick,
    /// Combination window must span at least one poll tick
    ComboShorterThanTick,
    /// Battery threshold outside the plausible LiPo/AAA range
    BatteryThresholdOutOfRange,
}
