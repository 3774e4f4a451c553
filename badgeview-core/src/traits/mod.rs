//! Collaborator traits
//!
//! These traits define the interface between the control loop and the
//! hardware-specific implementations. Every screen, storage and sensor
//! access the core makes goes through one of them.

pub mod clock;
pub mod display;
pub mod images;
pub mod input;
pub mod sensor;
pub mod storage;

pub use clock::Clock;
pub use display::{BadgeFrame, DisplayError, GalleryFrame, Renderer, TextMetrics};
pub use images::{ImageError, ImageSource};
pub use input::ButtonSource;
pub use sensor::{BatteryReading, SensorError, VoltageSensor};
pub use storage::{ProfileSource, StateStore, StoreError};
