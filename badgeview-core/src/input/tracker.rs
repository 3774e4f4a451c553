//! Debouncing and edge detection
//!
//! The whole button set is debounced as one value: a raw change has to
//! stay unchanged for the debounce time before it becomes the stable
//! state. A press edge is a button that is in the new stable state but
//! was not in the previous one, so a held button fires exactly once.

use super::buttons::ButtonSet;

/// Result of one tracker update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEdges {
    /// Buttons held after debouncing
    pub held: ButtonSet,
    /// Buttons that became held during this update
    pub pressed: ButtonSet,
}

impl ButtonEdges {
    /// True when nothing new was pressed
    pub fn is_quiet(&self) -> bool {
        self.pressed.is_empty()
    }
}

/// Debouncer and edge detector for a [`ButtonSet`]
#[derive(Debug, Clone)]
pub struct ButtonTracker {
    debounce_ms: u32,
    stable: ButtonSet,
    candidate: ButtonSet,
    candidate_since_ms: u64,
}

impl ButtonTracker {
    /// Create a tracker whose baseline is `initial`
    ///
    /// Buttons in the baseline are treated as already held, so a press
    /// that is still down when a screen starts never acts on it.
    pub fn new(initial: ButtonSet, now_ms: u64, debounce_ms: u32) -> Self {
        Self {
            debounce_ms,
            stable: initial,
            candidate: initial,
            candidate_since_ms: now_ms,
        }
    }

    /// Feed one raw sample
    pub fn update(&mut self, raw: ButtonSet, now_ms: u64) -> ButtonEdges {
        if raw != self.candidate {
            self.candidate = raw;
            self.candidate_since_ms = now_ms;
        }

        let settled = now_ms.saturating_sub(self.candidate_since_ms) >= u64::from(self.debounce_ms);
        let debounced = if settled { self.candidate } else { self.stable };

        let pressed = debounced.difference(self.stable);
        self.stable = debounced;

        ButtonEdges {
            held: debounced,
            pressed,
        }
    }

    /// Current debounced state
    pub fn held(&self) -> ButtonSet {
        self.stable
    }
}
