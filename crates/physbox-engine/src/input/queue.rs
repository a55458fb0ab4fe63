use glam::Vec2;

/// Pointer buttons, numbered the way DOM `MouseEvent.button` numbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
    Other(u8),
}

impl MouseButton {
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => MouseButton::Primary,
            1 => MouseButton::Middle,
            2 => MouseButton::Secondary,
            n => MouseButton::Other(n),
        }
    }
}

/// Keys the engine distinguishes. Letters are stored uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Digit(u8),
    Letter(char),
    Other(u32),
}

impl Key {
    /// Map a DOM `keyCode` (also the ASCII code for digits and letters).
    pub fn from_code(code: u32) -> Self {
        match code {
            32 => Key::Space,
            48..=57 => Key::Digit((code - 48) as u8),
            65..=90 => Key::Letter(char::from(code as u8)),
            // Lowercase ASCII, as sent by native backends.
            97..=122 => Key::Letter(char::from(code as u8).to_ascii_uppercase()),
            other => Key::Other(other),
        }
    }
}

/// Input event types the engine understands.
/// Generic, with no game-specific semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The window was closed or the host asked the game to stop.
    Quit,
    /// A button was pressed at world coordinates (x, y).
    ButtonDown { button: MouseButton, x: f32, y: f32 },
    /// A button was released at world coordinates (x, y).
    ButtonUp { button: MouseButton, x: f32, y: f32 },
    /// The cursor moved to world coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// Wheel scrolled; positive is away from the user.
    Wheel { delta: f32 },
    /// A key was pressed.
    KeyDown { key: Key },
    /// A key was released.
    KeyUp { key: Key },
}

impl InputEvent {
    /// World position carried by the event, if any.
    pub fn position(&self) -> Option<Vec2> {
        match *self {
            InputEvent::ButtonDown { x, y, .. }
            | InputEvent::ButtonUp { x, y, .. }
            | InputEvent::PointerMove { x, y } => Some(Vec2::new(x, y)),
            _ => None,
        }
    }
}

/// A queue of input events plus the last known pointer position.
/// The host writes events into the queue; the runner drains it each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
    pointer: Vec2,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
            pointer: Vec2::ZERO,
        }
    }

    /// Push a new input event. Events carrying coordinates also move the
    /// tracked pointer.
    pub fn push(&mut self, event: InputEvent) {
        if let Some(pos) = event.position() {
            self.pointer = pos;
        }
        self.events.push(event);
    }

    /// Current pointer position in world coordinates.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Move the pointer without queuing an event (polling backends).
    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    /// The pointer position is kept.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
