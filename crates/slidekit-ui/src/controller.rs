//! Host-facing slider controller.
//!
//! The controller sits between the host's event plumbing and the reducer: it
//! filters raw events, tracks keyboard repeat timing, owns the window
//! listener guard for the active drag session, and exposes the current state
//! for rendering. One controller drives one slider.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_time::Instant;

use slidekit_core::{
    DefaultValue, GeometrySnapshot, Rect, SliderRange, SliderValue, TextDirection, Thumb,
};
use slidekit_foundation::gesture_constants::KEYBOARD_DRAG_THRESHOLD;
use slidekit_foundation::{DragEvent, KeyCode, KeyEvent, PointerEvent, TouchEvent};

use crate::action::{DragPhase, SliderAction};
use crate::reducer::{reduce, CrossingPolicy};
use crate::semantics::{default_value_text, ThumbSemantics, ValueTextFn};
use crate::state::{ContinuationModality, Modality, SliderState};
use crate::window_listeners::{
    register_pointer_listeners, register_touch_listeners, WindowListenerGuard,
};

/// Pre-processing hook invoked with the raw event before the slider reacts.
pub type EventHook<E> = Rc<dyn Fn(&E)>;

/// Optional host hooks, called before internal processing. Internal
/// processing is still skipped when the range is disabled, so a hook sees
/// every raw event while the slider itself stays inert.
#[derive(Clone, Default)]
pub struct SliderHooks {
    pub on_key_down: Option<EventHook<KeyEvent>>,
    pub on_key_up: Option<EventHook<KeyEvent>>,
    pub on_pointer_down: Option<EventHook<PointerEvent>>,
    pub on_touch_start: Option<EventHook<TouchEvent>>,
}

/// Configuration for a [`SliderController`].
pub struct SliderOptions {
    pub range: SliderRange,
    /// Initial value; both thumbs start at `range.min()` when omitted.
    pub default_value: Option<DefaultValue>,
    pub text_direction: TextDirection,
    pub crossing_policy: CrossingPolicy,
    /// Accessibility value formatter; plain number formatting when omitted.
    pub value_text: Option<ValueTextFn>,
    pub hooks: SliderHooks,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            range: SliderRange::default(),
            default_value: None,
            text_direction: TextDirection::Ltr,
            crossing_policy: CrossingPolicy::default(),
            value_text: None,
            hooks: SliderHooks::default(),
        }
    }
}

struct ControllerShared {
    range: Cell<SliderRange>,
    policy: CrossingPolicy,
    text_direction: TextDirection,
    state: Cell<SliderState>,
    track: Cell<Option<Rect>>,
    last_key_down: Cell<Option<Instant>>,
    guard: RefCell<Option<(ContinuationModality, WindowListenerGuard)>>,
}

impl ControllerShared {
    fn dispatch(shared: &Rc<Self>, action: SliderAction) -> bool {
        let range = shared.range.get();
        let previous = shared.state.get();
        let next = reduce(&range, shared.policy, previous, action);
        shared.state.set(next);
        Self::sync_listeners(shared);
        let changed = next != previous;
        if changed {
            log::trace!("slider state {previous:?} -> {next:?}");
        }
        changed
    }

    /// Processes a raw pointer/touch event as a drag update. Invalid gestures
    /// (non-primary buttons, modifier keys, empty touches) and events before
    /// the track has been measured are defined no-ops.
    fn drag(shared: &Rc<Self>, event: &DragEvent) {
        let range = shared.range.get();
        if range.is_disabled() {
            return;
        }
        let Some(track) = shared.track.get() else {
            return;
        };
        if !event.is_valid() {
            log::trace!("ignoring drag event: {event:?}");
            return;
        }
        let Some(cursor) = event.position() else {
            return;
        };

        let snapshot = GeometrySnapshot::new(
            track,
            cursor,
            range.is_vertical(),
            range.is_reversed(shared.text_direction),
        );
        let phase = if event.is_start() {
            DragPhase::Start
        } else {
            DragPhase::Move
        };
        let modality = match event {
            DragEvent::Pointer(_) => ContinuationModality::Pointer,
            DragEvent::Touch(_) => ContinuationModality::Touch,
        };
        Self::dispatch(
            shared,
            SliderAction::Drag {
                phase,
                modality,
                snapshot,
            },
        );
    }

    /// Keeps the window listener registration in step with the session
    /// modality: registered while a pointer/touch session is active, released
    /// on every path back to idle. Keyboard sessions register nothing.
    fn sync_listeners(shared: &Rc<Self>) {
        let target = match shared.state.get().modality() {
            Some(Modality::Pointer) => Some(ContinuationModality::Pointer),
            Some(Modality::Touch) => Some(ContinuationModality::Touch),
            Some(Modality::Keyboard) | None => None,
        };

        let mut guard = shared.guard.borrow_mut();
        if guard.as_ref().map(|(modality, _)| *modality) == target {
            return;
        }
        *guard = None;
        match target {
            Some(ContinuationModality::Pointer) => {
                let on_move = {
                    let shared = Rc::clone(shared);
                    move |event: &PointerEvent| {
                        Self::drag(&shared, &DragEvent::Pointer(*event));
                    }
                };
                let on_up = {
                    let shared = Rc::clone(shared);
                    move |_: &PointerEvent| {
                        Self::dispatch(&shared, SliderAction::Stop);
                    }
                };
                *guard = Some((
                    ContinuationModality::Pointer,
                    register_pointer_listeners(on_move, on_up),
                ));
            }
            Some(ContinuationModality::Touch) => {
                let on_move = {
                    let shared = Rc::clone(shared);
                    move |event: &TouchEvent| {
                        Self::drag(&shared, &DragEvent::Touch(event.clone()));
                    }
                };
                let on_end = {
                    let shared = Rc::clone(shared);
                    move |_: &TouchEvent| {
                        Self::dispatch(&shared, SliderAction::Stop);
                    }
                };
                *guard = Some((
                    ContinuationModality::Touch,
                    register_touch_listeners(on_move, on_end),
                ));
            }
            None => {}
        }
    }
}

/// The interaction state of one slider.
///
/// Values move only through the reducer; the controller owns the session
/// lifecycle around it. Dropping the controller mid-drag releases the window
/// listeners.
pub struct SliderController {
    shared: Rc<ControllerShared>,
    hooks: SliderHooks,
    value_text: ValueTextFn,
}

impl SliderController {
    pub fn new(options: SliderOptions) -> Self {
        let SliderOptions {
            range,
            default_value,
            text_direction,
            crossing_policy,
            value_text,
            hooks,
        } = options;

        let initial = default_value
            .map(DefaultValue::resolve)
            .unwrap_or_else(|| SliderValue::splat(range.min()));
        // the value invariant holds from the very first render
        let initial = SliderValue::new(range.snap(initial.first), range.snap(initial.second));

        Self {
            shared: Rc::new(ControllerShared {
                range: Cell::new(range),
                policy: crossing_policy,
                text_direction,
                state: Cell::new(SliderState::idle(initial)),
                track: Cell::new(None),
                last_key_down: Cell::new(None),
                guard: RefCell::new(None),
            }),
            hooks,
            value_text: value_text.unwrap_or_else(|| Rc::new(default_value_text)),
        }
    }

    pub fn range(&self) -> SliderRange {
        self.shared.range.get()
    }

    /// Replaces the per-interaction configuration between interactions.
    ///
    /// Current values re-snap onto the new range so the value invariant
    /// holds, and an active session ends when the new range is disabled.
    pub fn set_range(&self, range: SliderRange) {
        self.shared.range.set(range);
        let state = self.shared.state.get();
        let values = SliderValue::new(range.snap(state.values.first), range.snap(state.values.second));
        let session = if range.is_disabled() {
            None
        } else {
            state.session
        };
        self.shared.state.set(SliderState { values, session });
        ControllerShared::sync_listeners(&self.shared);
    }

    /// Records the track's bounding rect, the measurement attachment point
    /// the host refreshes whenever the track element moves or resizes.
    pub fn set_track_rect(&self, rect: Rect) {
        self.shared.track.set(Some(rect));
    }

    pub fn track_rect(&self) -> Option<Rect> {
        self.shared.track.get()
    }

    /// Snapshot of the full interaction state, including the active session.
    pub fn state(&self) -> SliderState {
        self.shared.state.get()
    }

    pub fn values(&self) -> SliderValue {
        self.shared.state.get().values
    }

    /// One-thumb convenience accessor.
    pub fn value(&self) -> f32 {
        self.values().first
    }

    /// The thumb currently in a visual drag (pointer, touch, or keyboard
    /// repeat), if any.
    pub fn dragging(&self) -> Option<Thumb> {
        self.shared.state.get().dragging()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging().is_some()
    }

    pub fn semantics(&self, thumb: Thumb) -> ThumbSemantics {
        let range = self.shared.range.get();
        ThumbSemantics::new(
            range.min(),
            range.max(),
            self.values().get(thumb),
            self.value_text.clone(),
        )
    }

    // ------------------------------------------------------------------
    // Event handler bindings for the interactive element
    // ------------------------------------------------------------------

    pub fn handle_pointer_down(&self, event: &PointerEvent) {
        if let Some(hook) = &self.hooks.on_pointer_down {
            hook(event);
        }
        ControllerShared::drag(&self.shared, &DragEvent::Pointer(*event));
    }

    pub fn handle_touch_start(&self, event: &TouchEvent) {
        if let Some(hook) = &self.hooks.on_touch_start {
            hook(event);
        }
        ControllerShared::drag(&self.shared, &DragEvent::Touch(event.clone()));
    }

    /// Key-down binding for the focusable element of `thumb`.
    pub fn handle_key_down(&self, thumb: Thumb, event: &KeyEvent) {
        if let Some(hook) = &self.hooks.on_key_down {
            hook(event);
        }
        let shared = &self.shared;
        if shared.range.get().is_disabled() {
            return;
        }

        let is_increment = matches!(event.key_code, KeyCode::ArrowUp | KeyCode::ArrowRight);
        let is_decrement = matches!(event.key_code, KeyCode::ArrowDown | KeyCode::ArrowLeft);
        let is_minimum = event.key_code == KeyCode::Home;
        let is_maximum = event.key_code == KeyCode::End;
        if event.modifiers.any() || (!is_increment && !is_decrement && !is_minimum && !is_maximum)
        {
            if event.key_code == KeyCode::Tab {
                // focus is about to leave; a stale pseudo-drag must not survive
                ControllerShared::dispatch(shared, SliderAction::Stop);
            }
            return;
        }

        if is_minimum {
            ControllerShared::dispatch(shared, SliderAction::JumpToMin { thumb });
            return;
        }
        if is_maximum {
            ControllerShared::dispatch(shared, SliderAction::JumpToMax { thumb });
            return;
        }

        // Arrow taps within the repeat threshold read as one continuous
        // motion, which mimics pointer dragging so the host skips the value
        // easing it would otherwise animate per keypress.
        let now = Instant::now();
        let dragging = shared
            .last_key_down
            .get()
            .is_some_and(|last| now.duration_since(last) < KEYBOARD_DRAG_THRESHOLD);
        shared.last_key_down.set(Some(now));

        let action = if is_increment {
            SliderAction::Increment { thumb, dragging }
        } else {
            SliderAction::Decrement { thumb, dragging }
        };
        ControllerShared::dispatch(shared, action);
    }

    /// Key-up binding; ends keyboard repeat tracking and any keyboard
    /// pseudo-drag.
    pub fn handle_key_up(&self, event: &KeyEvent) {
        if let Some(hook) = &self.hooks.on_key_up {
            hook(event);
        }
        self.shared.last_key_down.set(None);
        if self.shared.state.get().modality() == Some(Modality::Keyboard) {
            ControllerShared::dispatch(&self.shared, SliderAction::Stop);
        }
    }

    // ------------------------------------------------------------------
    // Action dispatch surface
    // ------------------------------------------------------------------

    pub fn increment(&self, thumb: Thumb) -> bool {
        if self.shared.range.get().is_disabled() {
            return false;
        }
        ControllerShared::dispatch(
            &self.shared,
            SliderAction::Increment {
                thumb,
                dragging: false,
            },
        )
    }

    pub fn decrement(&self, thumb: Thumb) -> bool {
        if self.shared.range.get().is_disabled() {
            return false;
        }
        ControllerShared::dispatch(
            &self.shared,
            SliderAction::Decrement {
                thumb,
                dragging: false,
            },
        )
    }

    pub fn jump_to_min(&self, thumb: Thumb) -> bool {
        if self.shared.range.get().is_disabled() {
            return false;
        }
        ControllerShared::dispatch(&self.shared, SliderAction::JumpToMin { thumb })
    }

    pub fn jump_to_max(&self, thumb: Thumb) -> bool {
        if self.shared.range.get().is_disabled() {
            return false;
        }
        ControllerShared::dispatch(&self.shared, SliderAction::JumpToMax { thumb })
    }

    /// Starts (or continues) a drag from a raw event, applying the same
    /// validity filtering as the element bindings.
    pub fn begin_drag(&self, event: &DragEvent) {
        ControllerShared::drag(&self.shared, event);
    }

    /// Ends the active session, keeping the current values.
    pub fn stop(&self) {
        ControllerShared::dispatch(&self.shared, SliderAction::Stop);
    }

    /// Programmatic value replacement. Returns false when the (snapped)
    /// values equal the current state, in which case nothing changes.
    pub fn set_value(&self, values: impl Into<SliderValue>) -> bool {
        ControllerShared::dispatch(
            &self.shared,
            SliderAction::SetValue {
                values: values.into(),
            },
        )
    }
}

impl Drop for SliderController {
    fn drop(&mut self) {
        // continuation closures hold the shared state alive through the
        // registry, so the guard must be released here, not in ControllerShared
        self.shared.guard.borrow_mut().take();
    }
}
