//! Per-screen button mapping
//!
//! Gallery: A+C together toggles the overlay, C or UP advances, A or
//! DOWN retreats, B leaves. Badge: any of A, C, UP or DOWN leaves.
//!
//! A and C double as halves of the toggle combination, so their single
//! press actions are held back by [`GalleryInput`] until the button is
//! released or the combination window runs out.

use super::buttons::{Button, ButtonSet};
use super::tracker::ButtonEdges;

/// Gallery input actions in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GalleryAction {
    /// Show or hide the position indicator strip
    ToggleOverlay,
    /// Step to the previous catalog entry
    Advance,
    /// Step to the next catalog entry
    Retreat,
    /// Leave the gallery
    Exit,
}

const TOGGLE_COMBO: ButtonSet = ButtonSet::single(Button::A).with(Button::C);
const ADVANCE_BUTTONS: ButtonSet = ButtonSet::single(Button::C).with(Button::Up);
const RETREAT_BUTTONS: ButtonSet = ButtonSet::single(Button::A).with(Button::Down);
const EXIT_BUTTONS: ButtonSet = ButtonSet::single(Button::B);
const BADGE_EXIT_BUTTONS: ButtonSet = ButtonSet::single(Button::A)
    .with(Button::C)
    .with(Button::Up)
    .with(Button::Down);

impl GalleryAction {
    /// Pick at most one action from this tick's edges
    ///
    /// The combination wins over the single buttons it is made of, so a
    /// dual press never also navigates.
    pub fn from_edges(edges: &ButtonEdges) -> Option<Self> {
        if edges.is_quiet() {
            return None;
        }

        if edges.held.contains_all(TOGGLE_COMBO) && edges.pressed.intersects(TOGGLE_COMBO) {
            Some(GalleryAction::ToggleOverlay)
        } else if edges.pressed.intersects(ADVANCE_BUTTONS) {
            Some(GalleryAction::Advance)
        } else if edges.pressed.intersects(RETREAT_BUTTONS) {
            Some(GalleryAction::Retreat)
        } else if edges.pressed.intersects(EXIT_BUTTONS) {
            Some(GalleryAction::Exit)
        } else {
            None
        }
    }
}

/// Single press action of one half of the toggle combination
#[derive(Debug, Clone, Copy)]
struct PendingHalf {
    button: Button,
    action: GalleryAction,
    since_ms: u64,
}

/// Gallery action picker that holds back A and C for the combination
///
/// A press of A or C starts a window of `combo_ms`. If the other half
/// arrives inside it only [`GalleryAction::ToggleOverlay`] is reported.
/// Otherwise the held-back action fires when the button is released or
/// the window closes, whichever comes first. UP, DOWN and B act at once.
#[derive(Debug, Clone)]
pub struct GalleryInput {
    combo_ms: u32,
    pending: Option<PendingHalf>,
}

impl GalleryInput {
    pub fn new(combo_ms: u32) -> Self {
        Self {
            combo_ms,
            pending: None,
        }
    }

    /// Pick at most one action from this tick's edges
    pub fn update(&mut self, edges: &ButtonEdges, now_ms: u64) -> Option<GalleryAction> {
        if edges.held.contains_all(TOGGLE_COMBO) && edges.pressed.intersects(TOGGLE_COMBO) {
            self.pending = None;
            return Some(GalleryAction::ToggleOverlay);
        }

        let due = self.pending.and_then(|half| {
            let released = !edges.held.contains(half.button);
            let expired = now_ms.saturating_sub(half.since_ms) >= u64::from(self.combo_ms);
            (released || expired).then_some(half.action)
        });
        if due.is_some() {
            self.pending = None;
        }

        let halves = edges.pressed.intersection(TOGGLE_COMBO);
        if let Some(button) = [Button::C, Button::A].into_iter().find(|b| halves.contains(*b)) {
            let action = if button == Button::C {
                GalleryAction::Advance
            } else {
                GalleryAction::Retreat
            };
            self.pending = Some(PendingHalf {
                button,
                action,
                since_ms: now_ms,
            });
        }

        let others = ButtonEdges {
            held: edges.held,
            pressed: edges.pressed.difference(TOGGLE_COMBO),
        };
        due.or_else(|| GalleryAction::from_edges(&others))
    }
}

/// True when the badge screen should be left
pub fn badge_dismissed(edges: &ButtonEdges) -> bool {
    edges.pressed.intersects(BADGE_EXIT_BUTTONS)
}
