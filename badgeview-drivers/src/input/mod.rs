//! Input drivers

pub mod buttons;

pub use buttons::GpioButtons;
