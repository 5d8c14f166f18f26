//! Input abstraction layer.
//!
//! Pointer events from the host are normalized into [`InputEvent`] and folded
//! into a [`PointerState`] that the per-frame logic reads.

use strive_core::PointerSample;

/// A normalized pointer event, already in device pixels relative to the
/// canvas' top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start).
    PointerDown { x: f64, y: f64 },

    /// Pointer moved, pressed or not.
    PointerMove { x: f64, y: f64 },

    /// Pointer released.
    PointerUp { x: f64, y: f64 },
}

impl InputEvent {
    pub fn from_pointer_down(x: f64, y: f64) -> Self {
        Self::PointerDown { x, y }
    }

    pub fn from_pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(x: f64, y: f64) -> Self {
        Self::PointerUp { x, y }
    }

    pub fn sample(&self) -> PointerSample {
        match *self {
            Self::PointerDown { x, y } | Self::PointerMove { x, y } | Self::PointerUp { x, y } => {
                PointerSample::new(x, y)
            }
        }
    }

    pub fn is_release(&self) -> bool {
        matches!(self, Self::PointerUp { .. })
    }
}

/// The latest pointer facts: where it is and whether it is held down.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// `None` until the first event arrives.
    pub sample: Option<PointerSample>,
    pub pressed: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the state.
    pub fn apply(&mut self, event: &InputEvent) {
        self.sample = Some(event.sample());
        match event {
            InputEvent::PointerDown { .. } => self.pressed = true,
            InputEvent::PointerUp { .. } => self.pressed = false,
            InputEvent::PointerMove { .. } => {}
        }
    }
}
