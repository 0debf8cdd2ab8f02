/// Input events the orrery understands.
/// Pointer coordinates are screen pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A press began at (x, y).
    PointerDown { x: f32, y: f32 },
    /// The cursor moved to (x, y), pressed or not.
    PointerMove { x: f32, y: f32 },
    /// A press ended at (x, y).
    PointerUp { x: f32, y: f32 },
    /// Wheel scroll. Positive zooms out.
    Wheel { delta: f32 },
    /// The host viewport changed size (pixels).
    Resize { width: f32, height: f32 },
    /// Pause button.
    TogglePause,
    /// Orbit guides button.
    ToggleOrbits,
    /// Info panel close button.
    Dismiss,
}

impl InputEvent {
    pub const CUSTOM_TOGGLE_PAUSE: u32 = 1;
    pub const CUSTOM_TOGGLE_ORBITS: u32 = 2;
    pub const CUSTOM_DISMISS: u32 = 3;
    /// Viewport resize, `a` = width, `b` = height.
    pub const CUSTOM_RESIZE: u32 = 99;

    /// Decode a UI event sent as `(kind, a, b, c)`. Unknown kinds give `None`.
    pub fn from_custom(kind: u32, a: f32, b: f32, _c: f32) -> Option<Self> {
        match kind {
            Self::CUSTOM_TOGGLE_PAUSE => Some(InputEvent::TogglePause),
            Self::CUSTOM_TOGGLE_ORBITS => Some(InputEvent::ToggleOrbits),
            Self::CUSTOM_DISMISS => Some(InputEvent::Dismiss),
            Self::CUSTOM_RESIZE => Some(InputEvent::Resize { width: a, height: b }),
            _ => None,
        }
    }
}

/// A queue of input events.
/// The host pushes events as they arrive; the loop drains them once per tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
