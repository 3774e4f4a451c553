//! In-memory collaborators for controller tests

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::Settings;
use crate::gallery::GalleryState;
use crate::input::{Button, ButtonSet};
use crate::traits::images::{IMAGE_BYTES, PORTRAIT_BYTES};
use crate::traits::{
    BadgeFrame, BatteryReading, ButtonSource, Clock, DisplayError, GalleryFrame, ImageError,
    ImageSource, ProfileSource, Renderer, SensorError, StateStore, StoreError, TextMetrics,
    VoltageSensor,
};

use super::{Board, ModeController};

pub type TestController = ModeController<
    RecordingRenderer,
    ScriptedButtons,
    MemoryStore,
    MockImages,
    MockBattery,
    MockClock,
>;

/// What the renderer was asked to paint
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Badge { name: String, portrait: bool },
    /// First image byte and overlay `(count, current)`
    Gallery {
        image: Option<u8>,
        overlay: Option<(u16, u16)>,
    },
    Warning(String),
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Frame>,
}

impl TextMetrics for RecordingRenderer {
    fn measure(&self, text: &str, scale_x100: u16) -> u32 {
        text.chars().count() as u32 * 6 * u32::from(scale_x100) / 100
    }
}

impl Renderer for RecordingRenderer {
    async fn render_badge(&mut self, frame: &BadgeFrame<'_>) -> Result<(), DisplayError> {
        self.frames.push(Frame::Badge {
            name: frame.badge.name.text.as_str().into(),
            portrait: frame.portrait.is_some(),
        });
        Ok(())
    }

    async fn render_gallery(&mut self, frame: &GalleryFrame<'_>) -> Result<(), DisplayError> {
        self.frames.push(Frame::Gallery {
            image: frame.image.map(|bytes| bytes[0]),
            overlay: frame.overlay.map(|o| (o.count, o.current)),
        });
        Ok(())
    }

    async fn render_warning(&mut self, message: &str) -> Result<(), DisplayError> {
        self.frames.push(Frame::Warning(message.into()));
        Ok(())
    }
}

/// Simulated monotonic time, advanced only by `pause`
#[derive(Clone)]
pub struct MockClock {
    now: Rc<Cell<u64>>,
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    async fn pause(&mut self, ms: u32) {
        self.now.set(self.now.get() + u64::from(ms));
    }
}

/// Buttons held during fixed time windows
pub struct ScriptedButtons {
    now: Rc<Cell<u64>>,
    windows: Vec<(Button, u64, u64)>,
}

impl ScriptedButtons {
    /// Hold `button` from `start_ms` until just before `end_ms`
    pub fn press(&mut self, button: Button, start_ms: u64, end_ms: u64) {
        self.windows.push((button, start_ms, end_ms));
    }
}

impl ButtonSource for ScriptedButtons {
    fn sample(&mut self) -> ButtonSet {
        let now = self.now.get();
        self.windows
            .iter()
            .filter(|(_, start, end)| (*start..*end).contains(&now))
            .map(|(button, _, _)| *button)
            .collect()
    }
}

#[derive(Default)]
pub struct MemoryStore {
    pub state: Option<GalleryState>,
    pub saves: Vec<GalleryState>,
    pub profile: Option<String>,
    pub profile_writes: usize,
    pub fail_load: bool,
    pub fail_save: bool,
}

impl StateStore for MemoryStore {
    async fn load(&mut self) -> Result<Option<GalleryState>, StoreError> {
        if self.fail_load {
            return Err(StoreError::Io);
        }
        Ok(self.state)
    }

    async fn save(&mut self, state: &GalleryState) -> Result<(), StoreError> {
        if self.fail_save {
            return Err(StoreError::Io);
        }
        self.saves.push(*state);
        self.state = Some(*state);
        Ok(())
    }
}

impl ProfileSource for MemoryStore {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, StoreError> {
        let profile = self.profile.as_ref().ok_or(StoreError::NotFound)?;
        let bytes = profile.as_bytes();
        if bytes.len() > buf.len() {
            return Err(StoreError::BufferTooSmall);
        }
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(bytes.len())
    }

    async fn write(&mut self, text: &str) -> Result<(), StoreError> {
        self.profile = Some(text.into());
        self.profile_writes += 1;
        Ok(())
    }
}

/// Images whose first byte is their source index
#[derive(Default)]
pub struct MockImages {
    pub names: Vec<String>,
    pub portrait: bool,
    pub broken: Option<usize>,
    /// Entry that loads one byte short
    pub truncated: Option<usize>,
}

impl ImageSource for MockImages {
    fn entry_count(&self) -> usize {
        self.names.len()
    }

    fn entry_name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    fn load(&mut self, index: usize, buf: &mut [u8]) -> Result<usize, ImageError> {
        if self.broken == Some(index) {
            return Err(ImageError::Io);
        }
        if index >= self.names.len() {
            return Err(ImageError::NotFound);
        }
        if buf.len() < IMAGE_BYTES {
            return Err(ImageError::BufferTooSmall);
        }
        buf[..IMAGE_BYTES].fill(0);
        buf[0] = index as u8;
        if self.truncated == Some(index) {
            return Ok(IMAGE_BYTES - 1);
        }
        Ok(IMAGE_BYTES)
    }

    fn load_portrait(&mut self, buf: &mut [u8]) -> Result<usize, ImageError> {
        if !self.portrait {
            return Err(ImageError::NotFound);
        }
        buf[..PORTRAIT_BYTES].fill(0xFF);
        Ok(PORTRAIT_BYTES)
    }
}

/// Queued readings, then a healthy 4.0 V
#[derive(Default)]
pub struct MockBattery {
    pub readings: VecDeque<Result<BatteryReading, SensorError>>,
}

impl VoltageSensor for MockBattery {
    fn sample(&mut self) -> Result<BatteryReading, SensorError> {
        self.readings.pop_front().unwrap_or(Ok(BatteryReading {
            vbat_raw: 4000,
            vref_raw: 3720,
        }))
    }
}

/// Collaborators before they are handed to the controller
pub struct Rig {
    pub display: RecordingRenderer,
    pub buttons: ScriptedButtons,
    pub store: MemoryStore,
    pub images: MockImages,
    pub battery: MockBattery,
    pub clock: MockClock,
}

impl Rig {
    pub fn new() -> Self {
        let now = Rc::new(Cell::new(0));
        Self {
            display: RecordingRenderer::default(),
            buttons: ScriptedButtons {
                now: now.clone(),
                windows: Vec::new(),
            },
            store: MemoryStore::default(),
            images: MockImages::default(),
            battery: MockBattery::default(),
            clock: MockClock { now },
        }
    }

    pub fn with_images(count: usize) -> Self {
        let mut rig = Self::new();
        rig.images.names = (0..count).map(|i| format!("image-{i}.bin")).collect();
        rig
    }
}

pub fn controller(rig: Rig) -> TestController {
    ModeController::new(
        Board {
            display: rig.display,
            buttons: rig.buttons,
            store: rig.store,
            images: rig.images,
            battery: rig.battery,
            clock: rig.clock,
        },
        Settings::DEFAULT,
    )
}
