//! GPIO buttons
//!
//! One input per button, active high with pull-downs. Debouncing is left
//! to the core tracker.

use badgeview_core::input::{Button, ButtonSet};
use badgeview_core::traits::ButtonSource;
use embedded_hal::digital::InputPin;

/// Button inputs in [`Button::ALL`] order
pub struct GpioButtons<P> {
    pins: [P; 5],
}

impl<P: InputPin> GpioButtons<P> {
    /// `pins` are A, B, C, Up, Down
    pub fn new(pins: [P; 5]) -> Self {
        Self { pins }
    }
}

impl<P: InputPin> ButtonSource for GpioButtons<P> {
    fn sample(&mut self) -> ButtonSet {
        let mut held = ButtonSet::EMPTY;
        for (button, pin) in Button::ALL.into_iter().zip(self.pins.iter_mut()) {
            // A pin that cannot be read counts as released
            if pin.is_high().unwrap_or(false) {
                held = held.with(button);
            }
        }
        held
    }
}
