pub mod key;
pub mod pointer;
pub mod touch;

pub use key::{KeyCode, KeyEvent, KeyEventType, Modifiers};
pub use pointer::{PointerButton, PointerButtons, PointerEvent, PointerEventKind};
pub use touch::{TouchEvent, TouchPhase};

use slidekit_core::Point;

/// A pointer or touch event viewed as one step of a drag gesture.
///
/// The slider accepts a drag only from a primary-button pointer or a
/// single-point touch with no modifier keys held; everything else is a
/// defined no-op. [`DragEvent::is_valid`] encodes that rule so the
/// interaction layer filters events before any state is touched.
#[derive(Clone, Debug)]
pub enum DragEvent {
    Pointer(PointerEvent),
    Touch(TouchEvent),
}

impl DragEvent {
    pub fn modifiers(&self) -> Modifiers {
        match self {
            DragEvent::Pointer(event) => event.modifiers,
            DragEvent::Touch(event) => event.modifiers,
        }
    }

    /// Position driving the drag: the pointer position, or the first changed
    /// touch point. `None` for a touch event with no points.
    pub fn position(&self) -> Option<Point> {
        match self {
            DragEvent::Pointer(event) => Some(event.position),
            DragEvent::Touch(event) => event.primary_point(),
        }
    }

    /// Whether this event may start or continue a slider drag.
    pub fn is_valid(&self) -> bool {
        if self.modifiers().any() {
            return false;
        }
        match self {
            DragEvent::Pointer(event) => match event.kind {
                PointerEventKind::Down | PointerEventKind::Move => {
                    event.buttons.contains(PointerButton::Primary)
                }
                PointerEventKind::Up | PointerEventKind::Cancel => false,
            },
            DragEvent::Touch(event) => match event.phase {
                TouchPhase::Start | TouchPhase::Move => event.primary_point().is_some(),
                TouchPhase::End | TouchPhase::Cancel => false,
            },
        }
    }

    /// True for the initiating event subtype (`Down`/`Start`).
    pub fn is_start(&self) -> bool {
        match self {
            DragEvent::Pointer(event) => event.kind == PointerEventKind::Down,
            DragEvent::Touch(event) => event.phase == TouchPhase::Start,
        }
    }
}

impl From<PointerEvent> for DragEvent {
    fn from(event: PointerEvent) -> Self {
        DragEvent::Pointer(event)
    }
}

impl From<TouchEvent> for DragEvent {
    fn from(event: TouchEvent) -> Self {
        DragEvent::Touch(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_pointer_down_is_valid() {
        let event = PointerEvent::down(Point::new(10.0, 10.0));
        assert!(DragEvent::from(event).is_valid());
    }

    #[test]
    fn secondary_button_is_rejected() {
        let event = PointerEvent::down(Point::new(10.0, 10.0))
            .with_buttons(PointerButtons::new().with(PointerButton::Secondary));
        assert!(!DragEvent::from(event).is_valid());
    }

    #[test]
    fn modifier_qualified_events_are_rejected() {
        let event = PointerEvent::down(Point::new(10.0, 10.0)).with_modifiers(Modifiers {
            shift: true,
            ..Modifiers::NONE
        });
        assert!(!DragEvent::from(event).is_valid());

        let touch = TouchEvent::start(Point::new(10.0, 10.0)).with_modifiers(Modifiers {
            alt: true,
            ..Modifiers::NONE
        });
        assert!(!DragEvent::from(touch).is_valid());
    }

    #[test]
    fn release_events_never_continue_a_drag() {
        let up = PointerEvent::up(Point::new(10.0, 10.0));
        assert!(!DragEvent::from(up).is_valid());
    }

    #[test]
    fn empty_touch_has_no_position() {
        let touch = TouchEvent::new(TouchPhase::Move, Vec::new());
        let event = DragEvent::from(touch);
        assert_eq!(event.position(), None);
        assert!(!event.is_valid());
    }
}
