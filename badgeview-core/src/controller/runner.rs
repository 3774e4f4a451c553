//! Top-level loop

use crate::badge::FittedBadge;
use crate::config::Settings;
use crate::input::ButtonTracker;
use crate::safety::{BatteryGuard, BatteryStatus};
use crate::state::{Mode, ModeEvent};
use crate::traits::images::{IMAGE_BYTES, PORTRAIT_BYTES};
use crate::traits::{
    ButtonSource, Clock, ImageSource, ProfileSource, Renderer, StateStore, VoltageSensor,
};

use super::board::Board;

/// Shown when the battery is below the threshold
pub const BATTERY_LOW_MESSAGE: &str = "Battery low!!!";

/// Shown when the gallery has nothing to show
pub const NO_IMAGES_MESSAGE: &str =
    "No images found. Add 1-bit 296x128 .bin images to the firmware images folder and reflash.";

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Halt {
    /// The gallery catalog was empty
    NoImages,
}

/// Cooperative loop over the badge, gallery and battery check
pub struct ModeController<D, B, S, I, V, C> {
    pub(super) board: Board<D, B, S, I, V, C>,
    pub(super) settings: Settings,
    pub(super) mode: Mode,
    pub(super) guard: BatteryGuard,
    /// Fitted on first badge entry, kept for the process lifetime
    pub(super) badge: Option<FittedBadge>,
    pub(super) portrait: [u8; PORTRAIT_BYTES],
    pub(super) has_portrait: bool,
    pub(super) image: [u8; IMAGE_BYTES],
}

impl<D, B, S, I, V, C> ModeController<D, B, S, I, V, C>
where
    D: Renderer,
    B: ButtonSource,
    S: StateStore + ProfileSource,
    I: ImageSource,
    V: VoltageSensor,
    C: Clock,
{
    pub fn new(board: Board<D, B, S, I, V, C>, settings: Settings) -> Self {
        Self {
            board,
            settings,
            mode: Mode::default(),
            guard: BatteryGuard::new(settings.battery),
            badge: None,
            portrait: [0; PORTRAIT_BYTES],
            has_portrait: false,
            image: [0; IMAGE_BYTES],
        }
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn board(&self) -> &Board<D, B, S, I, V, C> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board<D, B, S, I, V, C> {
        &mut self.board
    }

    /// Run until the loop can no longer continue
    ///
    /// Under normal operation this never returns.
    pub async fn run(&mut self) -> Halt {
        info!("Mode controller started");
        loop {
            if self.step().await.is_terminal() {
                return Halt::NoImages;
            }
        }
    }

    /// Run the active mode to its exit condition and switch to the next
    pub async fn step(&mut self) -> Mode {
        let event = match self.mode {
            Mode::BatteryCheck => self.check_battery().await,
            Mode::Badge => self.show_badge().await,
            Mode::Gallery => self.run_gallery().await,
            Mode::Halted => return Mode::Halted,
        };

        let next = self.mode.transition(event);
        debug!("Mode {:?} -> {:?} on {:?}", self.mode, next, event);
        self.mode = next;
        next
    }

    async fn check_battery(&mut self) -> ModeEvent {
        let sample = self.board.battery.sample();
        if let Err(e) = sample {
            warn!("Battery sample failed: {:?}", e);
        }

        match self.guard.check(sample) {
            BatteryStatus::Ok { millivolts } => {
                info!("Battery at {} mV", millivolts);
            }
            BatteryStatus::Low { millivolts } => {
                warn!("Battery low: {} mV", millivolts);
                self.show_warning(BATTERY_LOW_MESSAGE).await;
                self.board.clock.pause(self.guard.warning_ms()).await;
            }
            BatteryStatus::Unknown => {
                warn!("Battery voltage unknown, skipping check");
            }
        }

        ModeEvent::BatteryChecked
    }

    pub(super) async fn show_warning(&mut self, message: &str) {
        if let Err(e) = self.board.display.render_warning(message).await {
            warn!("Failed to show warning: {:?}", e);
        }
    }

    /// Start edge detection from the buttons held right now
    pub(super) fn track_buttons(&mut self) -> ButtonTracker {
        ButtonTracker::new(
            self.board.buttons.sample(),
            self.board.clock.now_ms(),
            self.settings.input.debounce_ms,
        )
    }
}
