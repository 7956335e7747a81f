//! Input event model
//!
//! Hosts translate their native input (DOM events, native shell events, scripted
//! scenario steps) into [`Event`] values and hand them to widgets.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    pub const POINTER_ENTER: EventType = 4;
    pub const POINTER_LEAVE: EventType = 5;
    /// Click on a target (pointer down + up on the same element)
    pub const CLICK: EventType = 6;
    pub const TOUCH_START: EventType = 7;
    pub const TOUCH_MOVE: EventType = 8;
    pub const TOUCH_END: EventType = 9;
    pub const FOCUS: EventType = 10;
    pub const BLUR: EventType = 11;
    pub const KEY_DOWN: EventType = 20;
    pub const SCROLL: EventType = 30;
    /// Animated scroll reached its target
    pub const SCROLL_END: EventType = 31;
    pub const RESIZE: EventType = 40;
    /// Intersection ratio of the target with the viewport changed
    pub const VISIBILITY: EventType = 41;
    /// A host timer fired
    pub const TIMER: EventType = 50;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    /// Host-assigned element id
    pub target: u64,
    pub data: EventData,
    /// Host timestamp in milliseconds
    pub timestamp: u64,
    pub propagation_stopped: bool,
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
    },
    Touch {
        x: f32,
        y: f32,
    },
    Key {
        key: KeyCode,
    },
    Scroll {
        offset_x: f32,
        offset_y: f32,
    },
    Resize {
        width: f32,
        height: f32,
    },
    Visibility {
        /// Fraction of the target inside the viewport (0.0 to 1.0)
        ratio: f32,
    },
    Timer {
        /// Raw timer key as handed out by the host scheduler
        id: u64,
    },
    None,
}

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const TAB: KeyCode = KeyCode(0x09);
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
    pub const SPACE: KeyCode = KeyCode(0x20);

    // Arrow keys
    pub const LEFT: KeyCode = KeyCode(0x25);
    pub const UP: KeyCode = KeyCode(0x26);
    pub const RIGHT: KeyCode = KeyCode(0x27);
    pub const DOWN: KeyCode = KeyCode(0x28);

    // Navigation keys
    pub const HOME: KeyCode = KeyCode(0x24);
    pub const END: KeyCode = KeyCode(0x23);

    // Unknown/unmapped key
    pub const UNKNOWN: KeyCode = KeyCode(0);

    /// Map a DOM `KeyboardEvent.key` value to a key code.
    ///
    /// Unmapped names yield [`KeyCode::UNKNOWN`].
    pub fn from_key_name(name: &str) -> KeyCode {
        match name {
            "Tab" => KeyCode::TAB,
            "Enter" => KeyCode::ENTER,
            "Escape" | "Esc" => KeyCode::ESCAPE,
            " " | "Space" => KeyCode::SPACE,
            "ArrowLeft" | "Left" => KeyCode::LEFT,
            "ArrowUp" | "Up" => KeyCode::UP,
            "ArrowRight" | "Right" => KeyCode::RIGHT,
            "ArrowDown" | "Down" => KeyCode::DOWN,
            "Home" => KeyCode::HOME,
            "End" => KeyCode::END,
            _ => KeyCode::UNKNOWN,
        }
    }
}

impl Event {
    /// Create an event with no payload
    pub fn new(event_type: EventType, target: u64) -> Self {
        Self {
            event_type,
            target,
            data: EventData::None,
            timestamp: 0,
            propagation_stopped: false,
        }
    }

    pub fn pointer(event_type: EventType, target: u64, x: f32, y: f32) -> Self {
        Self {
            data: EventData::Pointer { x, y },
            ..Self::new(event_type, target)
        }
    }

    pub fn touch(event_type: EventType, target: u64, x: f32, y: f32) -> Self {
        Self {
            data: EventData::Touch { x, y },
            ..Self::new(event_type, target)
        }
    }

    pub fn key_down(target: u64, key: KeyCode) -> Self {
        Self {
            data: EventData::Key { key },
            ..Self::new(event_types::KEY_DOWN, target)
        }
    }

    pub fn resize(width: f32, height: f32) -> Self {
        Self {
            data: EventData::Resize { width, height },
            ..Self::new(event_types::RESIZE, 0)
        }
    }

    pub fn visibility(target: u64, ratio: f32) -> Self {
        Self {
            data: EventData::Visibility { ratio },
            ..Self::new(event_types::VISIBILITY, target)
        }
    }

    pub fn timer(id: u64) -> Self {
        Self {
            data: EventData::Timer { id },
            ..Self::new(event_types::TIMER, 0)
        }
    }

    /// Builder-style timestamp setter
    pub fn at(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Horizontal coordinate for pointer and touch events
    pub fn x(&self) -> Option<f32> {
        match self.data {
            EventData::Pointer { x, .. } | EventData::Touch { x, .. } => Some(x),
            _ => None,
        }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}
