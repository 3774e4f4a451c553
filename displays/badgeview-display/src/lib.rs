//! E-ink display stack for the Badgeview firmware
//!
//! ```text
//! badgeview-core ──Renderer──▶ EinkRenderer ──FrameBuffer──▶ EinkPanel (UC8151)
//! ```
//!
//! The renderer paints whole screens into a landscape 1-bit frame buffer
//! with `embedded-graphics`, then hands the buffer to the panel for one
//! full refresh.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod framebuffer;
pub mod renderer;
pub mod text;
pub mod uc8151;

pub use backend::{EinkPanel, PanelError};
pub use framebuffer::{BitmapSizeError, FrameBuffer};
pub use renderer::EinkRenderer;
pub use uc8151::Uc8151;
