//! Gallery navigation state machine
//!
//! [`GalleryStateMachine::tick`] is a pure decision step: it consumes at
//! most one input action and the current time, updates the navigation
//! state, and returns the effects the caller must execute (persist
//! first, then render). It performs no I/O itself.

use crate::config::GalleryTiming;
use crate::input::GalleryAction;

use super::autoscroll::AutoscrollTimer;
use super::overlay::OverlayStrip;
use super::state::GalleryState;

/// The catalog had no items, so no session can start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmptyCatalog;

/// Session phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Showing the current item, waiting for input or autoscroll
    Idle,
    /// State changed, repaint and persist pending
    Transitioning,
    /// Back button pressed, session over
    Exited,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    None,
    OverlayToggled,
    Advanced,
    Retreated,
    Autoscrolled,
    Exited,
}

/// Paint request for one gallery item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderRequest {
    pub state: GalleryState,
    pub item_count: u16,
}

impl RenderRequest {
    /// Catalog position to show
    pub fn item(&self) -> u16 {
        self.state.current_item
    }

    /// Indicator strip, when enabled
    pub fn overlay(&self) -> Option<OverlayStrip> {
        OverlayStrip::for_state(self.state, self.item_count)
    }
}

/// Outcome of one tick
///
/// When both effects are present the caller persists before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    pub transition: Transition,
    pub persist: Option<GalleryState>,
    pub render: Option<RenderRequest>,
}

impl Step {
    const fn quiet(transition: Transition) -> Self {
        Self {
            transition,
            persist: None,
            render: None,
        }
    }
}

/// Gallery navigation state machine
///
/// Owns the navigation record and the autoscroll timer for one session.
#[derive(Debug, Clone)]
pub struct GalleryStateMachine {
    state: GalleryState,
    item_count: u16,
    phase: Phase,
    timer: AutoscrollTimer,
    timing: GalleryTiming,
}

impl GalleryStateMachine {
    /// Start a session from the stored record
    ///
    /// The record is clamped into the catalog and the first tick always
    /// renders. An empty catalog cannot start a session.
    pub fn new(
        stored: GalleryState,
        item_count: u16,
        timing: GalleryTiming,
        now_ms: u64,
    ) -> Result<Self, EmptyCatalog> {
        if item_count == 0 {
            return Err(EmptyCatalog);
        }

        Ok(Self {
            state: stored.clamped(item_count),
            item_count,
            phase: Phase::Transitioning,
            timer: AutoscrollTimer::starting_at(now_ms, timing.idle_delay_ms),
            timing,
        })
    }

    /// Process one tick
    ///
    /// Rules in priority order: overlay toggle, advance, retreat, exit,
    /// then autoscroll when no action arrived.
    pub fn tick(&mut self, action: Option<GalleryAction>, now_ms: u64) -> Step {
        if self.phase == Phase::Exited {
            return Step::quiet(Transition::None);
        }

        let transition = match action {
            Some(GalleryAction::ToggleOverlay) => {
                self.state.toggle_overlay();
                Transition::OverlayToggled
            }
            Some(GalleryAction::Advance) => {
                self.state.advance(self.item_count);
                self.timer.restart(now_ms, self.timing.idle_delay_ms);
                Transition::Advanced
            }
            Some(GalleryAction::Retreat) => {
                self.state.retreat(self.item_count);
                self.timer.restart(now_ms, self.timing.idle_delay_ms);
                Transition::Retreated
            }
            Some(GalleryAction::Exit) => {
                self.phase = Phase::Exited;
                return Step::quiet(Transition::Exited);
            }
            None if self.timer.is_due(now_ms) => {
                self.state.advance(self.item_count);
                self.timer.restart(now_ms, self.timing.autoscroll_period_ms);
                Transition::Autoscrolled
            }
            None => Transition::None,
        };

        if transition != Transition::None {
            self.phase = Phase::Transitioning;
        }

        if self.phase != Phase::Transitioning {
            return Step::quiet(transition);
        }

        self.phase = Phase::Idle;
        Step {
            transition,
            persist: Some(self.state),
            render: Some(RenderRequest {
                state: self.state,
                item_count: self.item_count,
            }),
        }
    }

    pub fn state(&self) -> GalleryState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn item_count(&self) -> u16 {
        self.item_count
    }

    pub fn timer(&self) -> AutoscrollTimer {
        self.timer
    }

    pub fn is_exited(&self) -> bool {
        self.phase == Phase::Exited
    }
}
