//! Discrete actions consumed by the slider reducer.
//!
//! The action set is a closed enum: every interaction the slider supports is
//! one of these variants, so the reducer has no catch-all arm and malformed
//! action kinds cannot exist.

use slidekit_core::{GeometrySnapshot, SliderValue, Thumb};

use crate::state::ContinuationModality;

/// Subtype of a drag update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    /// The initiating down/start event.
    Start,
    /// A continuation move event.
    Move,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderAction {
    /// Pointer or touch drag update. The target thumb is the session's thumb
    /// for continuations, or the thumb nearest the cursor on start.
    Drag {
        phase: DragPhase,
        modality: ContinuationModality,
        snapshot: GeometrySnapshot,
    },
    /// Step the addressed thumb up by one `step`. `dragging` marks a
    /// continuous keyboard repeat (pseudo-drag).
    Increment { thumb: Thumb, dragging: bool },
    /// Step the addressed thumb down by one `step`.
    Decrement { thumb: Thumb, dragging: bool },
    /// Set the addressed thumb to exactly `min`.
    JumpToMin { thumb: Thumb },
    /// Set the addressed thumb to exactly `max`.
    JumpToMax { thumb: Thumb },
    /// End the active session, keeping the current values.
    Stop,
    /// Programmatic value replacement; a no-op when unchanged.
    SetValue { values: SliderValue },
}
