//! Text fitting
//!
//! Two policies behind one interface. `Truncate` keeps the scale and
//! drops trailing characters; `ShrinkToFit` keeps every character and
//! lowers the scale in fixed steps.

use crate::traits::TextMetrics;

use super::profile::{to_field, Field};

/// How a string is made to fit its box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FitPolicy {
    /// Remove the last character until the width is at most `max_width`
    Truncate { scale_x100: u16, max_width: u32 },
    /// Step the scale down from `start_x100` until the width is below
    /// `max_width` or `min_x100` is reached
    ShrinkToFit {
        start_x100: u16,
        step_x100: u16,
        min_x100: u16,
        max_width: u32,
    },
}

/// A string ready to draw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FittedText {
    pub text: Field,
    pub scale_x100: u16,
    /// Measured width at `scale_x100`
    pub width: u32,
}

impl FitPolicy {
    pub fn fit<M: TextMetrics + ?Sized>(&self, text: &str, metrics: &M) -> FittedText {
        match *self {
            FitPolicy::Truncate {
                scale_x100,
                max_width,
            } => truncate(text, scale_x100, max_width, metrics),
            FitPolicy::ShrinkToFit {
                start_x100,
                step_x100,
                min_x100,
                max_width,
            } => shrink(text, start_x100, step_x100.max(1), min_x100, max_width, metrics),
        }
    }
}

fn truncate<M: TextMetrics + ?Sized>(
    text: &str,
    scale_x100: u16,
    max_width: u32,
    metrics: &M,
) -> FittedText {
    let mut text = to_field(text);
    let mut width = metrics.measure(&text, scale_x100);

    while width > max_width && text.pop().is_some() {
        width = metrics.measure(&text, scale_x100);
    }

    FittedText {
        text,
        scale_x100,
        width,
    }
}

fn shrink<M: TextMetrics + ?Sized>(
    text: &str,
    start_x100: u16,
    step_x100: u16,
    min_x100: u16,
    max_width: u32,
    metrics: &M,
) -> FittedText {
    let text = to_field(text);
    let mut scale_x100 = start_x100;
    let mut width = metrics.measure(&text, scale_x100);

    while width >= max_width && scale_x100 > min_x100 {
        scale_x100 = scale_x100.saturating_sub(step_x100).max(min_x100);
        width = metrics.measure(&text, scale_x100);
    }

    FittedText {
        text,
        scale_x100,
        width,
    }
}
