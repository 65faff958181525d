//! Keyboard input event types.
//!
//! Platform-independent key events routed to a focused slider. Only the
//! navigation keys a slider responds to are modeled individually; anything
//! else maps to [`KeyCode::Unknown`] and is ignored by the interaction
//! layer.

/// Type of keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventType {
    /// Key was pressed down (including auto-repeat).
    KeyDown,
    /// Key was released.
    KeyUp,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key is pressed.
    pub shift: bool,
    /// Control key is pressed.
    pub ctrl: bool,
    /// Alt key is pressed (Option on macOS).
    pub alt: bool,
    /// Meta/Super key is pressed (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers pressed.
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Returns true if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Physical key codes a slider cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Tab,
    Space,
    Enter,
    Escape,
    /// Key not recognized or not mapped.
    Unknown,
}

/// A keyboard input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The physical key that was pressed.
    pub key_code: KeyCode,
    /// Current state of modifier keys.
    pub modifiers: Modifiers,
    /// Type of event (down or up).
    pub event_type: KeyEventType,
}

impl KeyEvent {
    pub fn new(key_code: KeyCode, modifiers: Modifiers, event_type: KeyEventType) -> Self {
        Self {
            key_code,
            modifiers,
            event_type,
        }
    }

    /// Creates a key down event with no modifiers.
    pub fn key_down(key_code: KeyCode) -> Self {
        Self::new(key_code, Modifiers::NONE, KeyEventType::KeyDown)
    }

    /// Creates a key down event with modifiers.
    pub fn key_down_with_modifiers(key_code: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(key_code, modifiers, KeyEventType::KeyDown)
    }

    /// Creates a key up event with no modifiers.
    pub fn key_up(key_code: KeyCode) -> Self {
        Self::new(key_code, Modifiers::NONE, KeyEventType::KeyUp)
    }

    /// Returns true if this is a key down event.
    pub fn is_key_down(&self) -> bool {
        self.event_type == KeyEventType::KeyDown
    }
}
