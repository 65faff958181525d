//! Slider interaction core for Slidekit.
//!
//! This crate turns raw pointer, touch, and keyboard events into slider
//! value changes. The pieces:
//!
//! - [`reducer`]: the pure state machine over ([`SliderState`],
//!   [`SliderAction`]).
//! - [`window_listeners`]: the scoped window-level continuation listener
//!   registry used while a drag is active.
//! - [`SliderController`]: the host-facing object wiring the two together,
//!   with event handler bindings, an action dispatch surface, and the
//!   accessibility value contract.
//!
//! Rendering is entirely up to the host; the controller only reports values,
//! the dragging indicator, and per-thumb semantics.

mod action;
mod controller;
mod reducer;
mod semantics;
mod state;
pub mod window_listeners;

pub use action::{DragPhase, SliderAction};
pub use controller::{EventHook, SliderController, SliderHooks, SliderOptions};
pub use reducer::{reduce, CrossingPolicy};
pub use semantics::{default_value_text, ThumbSemantics, ValueTextFn};
pub use state::{ContinuationModality, DragSession, Modality, SliderState};

pub mod prelude {
    pub use crate::controller::{SliderController, SliderHooks, SliderOptions};
    pub use crate::reducer::CrossingPolicy;
    pub use crate::state::{Modality, SliderState};
    pub use slidekit_core::prelude::*;
    pub use slidekit_foundation::prelude::*;
}
