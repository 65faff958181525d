//! The slider state machine: a pure transition function over
//! ([`SliderState`], [`SliderAction`]).
//!
//! One reducer drives both the one-thumb and two-thumb variants; one-thumb
//! sliders simply never address [`Thumb::Second`]. All transitions clamp or
//! no-op on edge-case input; nothing in here panics.

use slidekit_core::{resolve, SliderRange, SliderValue, Thumb};

use crate::action::{DragPhase, SliderAction};
use crate::state::{DragSession, Modality, SliderState};

/// Relative ordering policy for the two thumbs of a range slider.
///
/// The default imposes no ordering: the thumbs may cross freely and callers
/// that care can interpret the pair as an unordered interval.
/// [`CrossingPolicy::PreventCrossing`] clamps the moved thumb at the other
/// thumb's current value, keeping `first <= second`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CrossingPolicy {
    #[default]
    Unconstrained,
    PreventCrossing,
}

/// Applies `action` to `state`, producing the next state.
///
/// Pure and synchronous; a transition is never partially applied. A no-op
/// action (for example [`SliderAction::SetValue`] with the current values)
/// returns the input state unchanged.
pub fn reduce(
    range: &SliderRange,
    policy: CrossingPolicy,
    state: SliderState,
    action: SliderAction,
) -> SliderState {
    match action {
        SliderAction::Drag {
            phase,
            modality,
            snapshot,
        } => {
            let value = resolve(range, &snapshot);
            let (thumb, dragging) = match phase {
                DragPhase::Start => (state.values.nearest_thumb(value), false),
                DragPhase::Move => match state.session {
                    Some(session) => (session.thumb, true),
                    None => {
                        log::trace!("ignoring drag continuation with no active session");
                        return state;
                    }
                },
            };
            SliderState {
                values: move_thumb(state.values, thumb, value, policy),
                session: Some(DragSession {
                    modality: modality.into(),
                    thumb,
                    dragging,
                }),
            }
        }
        SliderAction::Increment { thumb, dragging } => {
            step_thumb(range, policy, state, thumb, range.step(), dragging)
        }
        SliderAction::Decrement { thumb, dragging } => {
            step_thumb(range, policy, state, thumb, -range.step(), dragging)
        }
        SliderAction::JumpToMin { thumb } => SliderState {
            values: move_thumb(state.values, thumb, range.min(), policy),
            session: None,
        },
        SliderAction::JumpToMax { thumb } => SliderState {
            values: move_thumb(state.values, thumb, range.max(), policy),
            session: None,
        },
        SliderAction::Stop => SliderState {
            values: state.values,
            session: None,
        },
        SliderAction::SetValue { values } => {
            let snapped = SliderValue::new(range.snap(values.first), range.snap(values.second));
            if snapped == state.values {
                return state;
            }
            SliderState {
                values: snapped,
                session: state.session,
            }
        }
    }
}

fn step_thumb(
    range: &SliderRange,
    policy: CrossingPolicy,
    state: SliderState,
    thumb: Thumb,
    delta: f32,
    dragging: bool,
) -> SliderState {
    let value = range.clamp(state.values.get(thumb) + delta);
    SliderState {
        values: move_thumb(state.values, thumb, value, policy),
        session: dragging.then_some(DragSession {
            modality: Modality::Keyboard,
            thumb,
            dragging: true,
        }),
    }
}

/// Writes `value` into the addressed thumb, applying the crossing policy.
fn move_thumb(values: SliderValue, thumb: Thumb, value: f32, policy: CrossingPolicy) -> SliderValue {
    let value = match (policy, thumb) {
        (CrossingPolicy::Unconstrained, _) => value,
        (CrossingPolicy::PreventCrossing, Thumb::First) => value.min(values.second),
        (CrossingPolicy::PreventCrossing, Thumb::Second) => value.max(values.first),
    };
    values.with_thumb(thumb, value)
}
