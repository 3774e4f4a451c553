//! Button sampling trait

use crate::input::ButtonSet;

/// Instantaneous button state
///
/// Not an event queue: every call reports which buttons are held right
/// now. Debouncing and edge detection happen in the core.
pub trait ButtonSource {
    /// Buttons currently held down
    fn sample(&mut self) -> ButtonSet;
}
