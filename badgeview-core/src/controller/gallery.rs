//! Gallery session
//!
//! Effect executor for [`GalleryStateMachine`]: samples buttons, feeds
//! the machine, then persists and renders whatever the tick asked for.

use crate::gallery::{GalleryState, GalleryStateMachine, ItemCatalog, Step, Transition};
use crate::input::GalleryInput;
use crate::state::ModeEvent;
use crate::traits::images::IMAGE_BYTES;
use crate::traits::{
    ButtonSource, Clock, GalleryFrame, ImageError, ImageSource, ProfileSource, Renderer,
    StateStore, VoltageSensor,
};

use super::runner::{ModeController, NO_IMAGES_MESSAGE};

impl<D, B, S, I, V, C> ModeController<D, B, S, I, V, C>
where
    D: Renderer,
    B: ButtonSource,
    S: StateStore + ProfileSource,
    I: ImageSource,
    V: VoltageSensor,
    C: Clock,
{
    /// Run one gallery session until the back button
    pub(super) async fn run_gallery(&mut self) -> ModeEvent {
        let catalog = ItemCatalog::scan(&self.board.images);
        if catalog.is_empty() {
            return self.halt_without_images().await;
        }
        info!("Gallery opened with {} images", catalog.len());

        let stored = self.load_gallery_state().await;
        let now = self.board.clock.now_ms();
        let Ok(mut machine) =
            GalleryStateMachine::new(stored, catalog.len(), self.settings.gallery, now)
        else {
            return self.halt_without_images().await;
        };

        let mut tracker = self.track_buttons();
        let mut input = GalleryInput::new(self.settings.input.combo_ms);
        loop {
            let now = self.board.clock.now_ms();
            let edges = tracker.update(self.board.buttons.sample(), now);
            let step = machine.tick(input.update(&edges, now), now);

            log_transition(step.transition, machine.state());
            self.execute(&catalog, step).await;

            if machine.is_exited() {
                return ModeEvent::GalleryExited;
            }

            self.board.clock.pause(self.settings.input.tick_ms).await;
        }
    }

    async fn halt_without_images(&mut self) -> ModeEvent {
        error!("No images in catalog");
        self.show_warning(NO_IMAGES_MESSAGE).await;
        self.board
            .clock
            .pause(self.settings.no_images_warning_ms)
            .await;
        ModeEvent::CatalogEmpty
    }

    async fn load_gallery_state(&mut self) -> GalleryState {
        match self.board.store.load().await {
            Ok(Some(state)) => {
                debug!("Loaded gallery state {:?}", state);
                state
            }
            Ok(None) => {
                debug!("No gallery state stored, starting at first image");
                GalleryState::default()
            }
            Err(e) => {
                warn!("Failed to load gallery state: {:?}, using defaults", e);
                GalleryState::default()
            }
        }
    }

    /// Persist, then render
    async fn execute(&mut self, catalog: &ItemCatalog, step: Step) {
        if let Some(state) = step.persist {
            if let Err(e) = self.board.store.save(&state).await {
                warn!("Failed to save gallery state: {:?}", e);
            }
        }

        let Some(request) = step.render else {
            return;
        };

        let loaded = match catalog.source_index(request.item()) {
            Some(index) => self.board.images.load(index, &mut self.image),
            None => Err(ImageError::NotFound),
        }
        .and_then(|len| match len {
            IMAGE_BYTES => Ok(()),
            _ => Err(ImageError::WrongSize),
        });
        let image = match loaded {
            Ok(()) => Some(&self.image[..]),
            Err(e) => {
                warn!("Failed to load image {}: {:?}", request.item(), e);
                None
            }
        };

        let frame = GalleryFrame {
            image,
            overlay: request.overlay(),
        };
        if let Err(e) = self.board.display.render_gallery(&frame).await {
            warn!("Failed to render gallery: {:?}", e);
        }
    }
}

fn log_transition(transition: Transition, state: GalleryState) {
    match transition {
        Transition::None => {}
        Transition::OverlayToggled => info!("Overlay toggled: {}", state.show_overlay),
        Transition::Advanced => info!("Previous image: {}", state.current_item),
        Transition::Retreated => info!("Next image: {}", state.current_item),
        Transition::Autoscrolled => info!("Autoscroll to image {}", state.current_item),
        Transition::Exited => info!("Leaving gallery"),
    }
}

#[cfg(test)]
mod tests {
    use crate::controller::mock::*;
    use crate::gallery::GalleryState;
    use crate::input::Button;
    use crate::state::Mode;
    use crate::traits::Clock;
    use embassy_futures::block_on;

    fn gallery_controller(rig: Rig) -> TestController {
        let mut controller = controller(rig);
        controller.mode = Mode::Gallery;
        controller
    }

    fn shown_images(controller: &TestController) -> Vec<Option<u8>> {
        controller
            .board()
            .display
            .frames
            .iter()
            .filter_map(|f| match f {
                Frame::Gallery { image, .. } => Some(*image),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_navigation_scenario() {
        let mut rig = Rig::with_images(5);
        rig.store.state = Some(GalleryState::new(0, false));
        rig.buttons.press(Button::A, 100, 200);
        rig.buttons.press(Button::Down, 400, 500);
        rig.buttons.press(Button::C, 700, 800);
        rig.buttons.press(Button::B, 1_000, 1_100);
        let mut controller = gallery_controller(rig);

        assert_eq!(block_on(controller.step()), Mode::BatteryCheck);

        let saves: Vec<u16> = controller
            .board()
            .store
            .saves
            .iter()
            .map(|s| s.current_item)
            .collect();
        assert_eq!(saves, vec![0, 1, 2, 1]);
        assert_eq!(shown_images(&controller), vec![Some(0), Some(1), Some(2), Some(1)]);
        assert_eq!(controller.board().store.state, Some(GalleryState::new(1, false)));
    }

    #[test]
    fn test_overlay_toggle_combination() {
        let mut rig = Rig::with_images(3);
        rig.buttons.press(Button::A, 100, 200);
        rig.buttons.press(Button::C, 100, 200);
        rig.buttons.press(Button::B, 400, 500);
        let mut controller = gallery_controller(rig);

        block_on(controller.step());

        let frames = &controller.board().display.frames;
        assert_eq!(
            frames.last(),
            Some(&Frame::Gallery {
                image: Some(0),
                overlay: Some((3, 0)),
            })
        );
        assert_eq!(controller.board().store.state, Some(GalleryState::new(0, true)));
    }

    #[test]
    fn test_staggered_combination_does_not_navigate() {
        let mut rig = Rig::with_images(5);
        rig.store.state = Some(GalleryState::new(2, false));
        rig.buttons.press(Button::A, 100, 400);
        rig.buttons.press(Button::C, 160, 400);
        rig.buttons.press(Button::B, 600, 700);
        let mut controller = gallery_controller(rig);

        block_on(controller.step());

        assert_eq!(
            controller.board().store.saves,
            vec![GalleryState::new(2, false), GalleryState::new(2, true)]
        );
        assert_eq!(shown_images(&controller), vec![Some(2), Some(2)]);
    }

    #[test]
    fn test_autoscroll_in_session() {
        let mut rig = Rig::with_images(4);
        rig.store.state = Some(GalleryState::new(1, false));
        rig.buttons.press(Button::B, 40_000, 40_100);
        let mut controller = gallery_controller(rig);

        block_on(controller.step());

        // Idle delay at 28 s, then one period later at 36 s
        assert_eq!(shown_images(&controller), vec![Some(1), Some(0), Some(3)]);
    }

    #[test]
    fn test_load_failure_falls_back_to_first_image() {
        let mut rig = Rig::with_images(3);
        rig.store.state = Some(GalleryState::new(2, true));
        rig.store.fail_load = true;
        rig.buttons.press(Button::B, 100, 200);
        let mut controller = gallery_controller(rig);

        block_on(controller.step());
        assert_eq!(shown_images(&controller), vec![Some(0)]);
    }

    #[test]
    fn test_save_failure_does_not_stop_session() {
        let mut rig = Rig::with_images(3);
        rig.store.fail_save = true;
        rig.buttons.press(Button::A, 100, 200);
        rig.buttons.press(Button::B, 400, 500);
        let mut controller = gallery_controller(rig);

        assert_eq!(block_on(controller.step()), Mode::BatteryCheck);
        assert_eq!(shown_images(&controller), vec![Some(0), Some(1)]);
    }

    #[test]
    fn test_shrunk_catalog_clamps_stored_index() {
        let mut rig = Rig::with_images(2);
        rig.store.state = Some(GalleryState::new(3, true));
        rig.buttons.press(Button::B, 100, 200);
        let mut controller = gallery_controller(rig);

        block_on(controller.step());
        assert_eq!(controller.board().store.saves[0], GalleryState::new(1, true));
    }

    #[test]
    fn test_broken_image_rendered_blank() {
        let mut rig = Rig::with_images(2);
        rig.images.broken = Some(0);
        rig.buttons.press(Button::B, 100, 200);
        let mut controller = gallery_controller(rig);

        block_on(controller.step());
        assert_eq!(shown_images(&controller), vec![None]);
    }

    #[test]
    fn test_truncated_image_rendered_blank() {
        let mut rig = Rig::with_images(2);
        rig.images.truncated = Some(1);
        rig.buttons.press(Button::Down, 100, 200);
        rig.buttons.press(Button::B, 400, 500);
        let mut controller = gallery_controller(rig);

        block_on(controller.step());
        assert_eq!(shown_images(&controller), vec![Some(0), None]);
    }

    #[test]
    fn test_non_image_entries_skipped() {
        let mut rig = Rig::with_images(0);
        rig.images.names = vec!["notes.txt".into(), "cat.bin".into()];
        rig.buttons.press(Button::B, 100, 200);
        let mut controller = gallery_controller(rig);

        block_on(controller.step());
        // First byte of each mock image is its source index
        assert_eq!(shown_images(&controller), vec![Some(1)]);
        assert!(controller.board().clock.now_ms() < 1_000);
    }
}
