//! Badge screen session

use crate::badge::{fit_badge, BadgeProfile, DEFAULT_PROFILE, MAX_PROFILE_BYTES};
use crate::input::badge_dismissed;
use crate::state::ModeEvent;
use crate::traits::images::PORTRAIT_BYTES;
use crate::traits::{
    BadgeFrame, ButtonSource, Clock, ImageError, ImageSource, ProfileSource, Renderer,
    StateStore, StoreError, VoltageSensor,
};

use super::runner::ModeController;

impl<D, B, S, I, V, C> ModeController<D, B, S, I, V, C>
where
    D: Renderer,
    B: ButtonSource,
    S: StateStore + ProfileSource,
    I: ImageSource,
    V: VoltageSensor,
    C: Clock,
{
    /// Paint the badge once, then wait for a navigation button
    pub(super) async fn show_badge(&mut self) -> ModeEvent {
        if self.badge.is_none() {
            self.prepare_badge().await;
        }

        if let Some(badge) = &self.badge {
            let frame = BadgeFrame {
                badge,
                portrait: self.has_portrait.then_some(&self.portrait[..]),
            };
            if let Err(e) = self.board.display.render_badge(&frame).await {
                warn!("Failed to render badge: {:?}", e);
            }
        }

        let mut tracker = self.track_buttons();
        loop {
            self.board.clock.pause(self.settings.input.tick_ms).await;
            let edges = tracker.update(self.board.buttons.sample(), self.board.clock.now_ms());
            if badge_dismissed(&edges) {
                info!("Leaving badge");
                return ModeEvent::BadgeDismissed;
            }
        }
    }

    async fn prepare_badge(&mut self) {
        let profile = self.load_profile().await;
        self.badge = Some(fit_badge(&profile, &self.board.display));

        self.has_portrait = match self.board.images.load_portrait(&mut self.portrait) {
            Ok(PORTRAIT_BYTES) => true,
            Ok(len) => {
                warn!("Portrait has {} bytes, expected {}", len, PORTRAIT_BYTES);
                false
            }
            Err(ImageError::NotFound) => {
                debug!("No badge portrait");
                false
            }
            Err(e) => {
                warn!("Failed to load portrait: {:?}", e);
                false
            }
        };
    }

    /// Read the profile, writing the default document first if none exists
    async fn load_profile(&mut self) -> BadgeProfile {
        match self.read_profile().await {
            Ok(profile) => return profile,
            Err(StoreError::NotFound) => {
                info!("No badge profile stored, writing default");
                if let Err(e) = self.board.store.write(DEFAULT_PROFILE).await {
                    warn!("Failed to store default profile: {:?}", e);
                }
            }
            Err(e) => {
                warn!("Failed to read badge profile: {:?}, using default", e);
                return BadgeProfile::default_profile();
            }
        }

        self.read_profile().await.unwrap_or_else(|e| {
            warn!("Default profile unreadable: {:?}", e);
            BadgeProfile::default_profile()
        })
    }

    async fn read_profile(&mut self) -> Result<BadgeProfile, StoreError> {
        let mut buffer = [0u8; MAX_PROFILE_BYTES];
        let len = self.board.store.read(&mut buffer).await?;
        let text = core::str::from_utf8(&buffer[..len]).map_err(|_| StoreError::Corrupted)?;
        Ok(BadgeProfile::parse(text))
    }
}
