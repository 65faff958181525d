//! Slider interaction state.

use slidekit_core::{SliderValue, Thumb};

/// Input channel driving the current interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modality {
    Pointer,
    Touch,
    Keyboard,
}

/// The subset of modalities that owns window-level continuation listeners
/// while active. Keyboard interaction never registers global listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContinuationModality {
    Pointer,
    Touch,
}

impl From<ContinuationModality> for Modality {
    fn from(modality: ContinuationModality) -> Self {
        match modality {
            ContinuationModality::Pointer => Modality::Pointer,
            ContinuationModality::Touch => Modality::Touch,
        }
    }
}

/// Transient record of an in-progress interaction.
///
/// `dragging` is the visual drag flag: false on the initiating down/start
/// event, true once movement (or keyboard repeat) is under way. Hosts use it
/// to suppress value-change easing mid-gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSession {
    pub modality: Modality,
    pub thumb: Thumb,
    pub dragging: bool,
}

/// Complete slider state: the value pair plus the active session, if any.
///
/// `session` is `None` exactly when no drag or keyboard repeat is active.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SliderState {
    pub values: SliderValue,
    pub session: Option<DragSession>,
}

impl SliderState {
    pub fn idle(values: SliderValue) -> Self {
        Self {
            values,
            session: None,
        }
    }

    /// The thumb currently being dragged, if the visual drag flag is set.
    pub fn dragging(&self) -> Option<Thumb> {
        self.session
            .filter(|session| session.dragging)
            .map(|session| session.thumb)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging().is_some()
    }

    pub fn modality(&self) -> Option<Modality> {
        self.session.map(|session| session.modality)
    }
}
