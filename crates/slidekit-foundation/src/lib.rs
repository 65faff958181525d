//! Platform-independent input event types for Slidekit.
//!
//! Hosts translate their windowing layer's raw pointer, touch, and keyboard
//! events into these types and feed them to the interaction layer. Nothing
//! here depends on a particular platform or event loop.

pub mod gesture_constants;
pub mod input;

pub use input::{
    DragEvent, KeyCode, KeyEvent, KeyEventType, Modifiers, PointerButton, PointerButtons,
    PointerEvent, PointerEventKind, TouchEvent, TouchPhase,
};

pub mod prelude {
    pub use crate::input::{
        DragEvent, KeyCode, KeyEvent, KeyEventType, Modifiers, PointerButton, PointerButtons,
        PointerEvent, PointerEventKind, TouchEvent, TouchPhase,
    };
}
