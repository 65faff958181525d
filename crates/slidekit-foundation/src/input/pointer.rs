//! Mouse/stylus pointer event types.

use slidekit_core::Point;

use super::key::Modifiers;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
    Secondary = 1,
    Middle = 2,
    Back = 3,
    Forward = 4,
}

/// Bitset of pointer buttons held during an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerButtons(u8);

impl PointerButtons {
    pub const NONE: Self = Self(0);

    pub fn new() -> Self {
        Self::NONE
    }

    pub fn with(mut self, button: PointerButton) -> Self {
        self.insert(button);
        self
    }

    pub fn insert(&mut self, button: PointerButton) {
        self.0 |= 1 << (button as u8);
    }

    pub fn remove(&mut self, button: PointerButton) {
        self.0 &= !(1 << (button as u8));
    }

    pub fn contains(&self, button: PointerButton) -> bool {
        (self.0 & (1 << (button as u8))) != 0
    }
}

impl Default for PointerButtons {
    fn default() -> Self {
        Self::NONE
    }
}

/// A pointer event in window coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    pub buttons: PointerButtons,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            kind,
            position,
            buttons: PointerButtons::NONE,
            modifiers: Modifiers::NONE,
        }
    }

    /// Primary-button press at `position`.
    pub fn down(position: Point) -> Self {
        Self::new(PointerEventKind::Down, position)
            .with_buttons(PointerButtons::new().with(PointerButton::Primary))
    }

    /// Continuation move with the primary button still held.
    pub fn moved(position: Point) -> Self {
        Self::new(PointerEventKind::Move, position)
            .with_buttons(PointerButtons::new().with(PointerButton::Primary))
    }

    pub fn up(position: Point) -> Self {
        Self::new(PointerEventKind::Up, position)
    }

    pub fn cancel(position: Point) -> Self {
        Self::new(PointerEventKind::Cancel, position)
    }

    pub fn with_buttons(mut self, buttons: PointerButtons) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_bitset_round_trips() {
        let mut buttons = PointerButtons::new()
            .with(PointerButton::Primary)
            .with(PointerButton::Middle);
        assert!(buttons.contains(PointerButton::Primary));
        assert!(buttons.contains(PointerButton::Middle));
        assert!(!buttons.contains(PointerButton::Secondary));

        buttons.remove(PointerButton::Primary);
        assert!(!buttons.contains(PointerButton::Primary));
        assert!(buttons.contains(PointerButton::Middle));
    }

    #[test]
    fn down_events_carry_the_primary_button() {
        let event = PointerEvent::down(Point::new(3.0, 4.0));
        assert_eq!(event.kind, PointerEventKind::Down);
        assert!(event.buttons.contains(PointerButton::Primary));
        assert!(!event.modifiers.any());
    }
}
