//! Slider range configuration and eager validation.
//!
//! A [`SliderRange`] is the immutable per-interaction configuration of a
//! slider: the value bounds, the stepping granularity, the orientation, and
//! whether the control is disabled. Misconfiguration is a programmer error
//! and is rejected at construction time rather than silently corrected.

use thiserror::Error;

use crate::geometry::TextDirection;

pub const DEFAULT_SLIDER_MIN: f32 = 0.0;
pub const DEFAULT_SLIDER_MAX: f32 = 100.0;
pub const DEFAULT_SLIDER_STEP: f32 = 1.0;

/// Relative tolerance when checking that `step` divides `max - min`.
/// Accounts for decimal steps like 0.1 that are not exact in binary.
const STEP_DIVISIBILITY_TOLERANCE: f32 = 1e-3;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RangeError {
    #[error("slider step must be a positive number, got {step}")]
    NonPositiveStep { step: f32 },
    #[error("slider min ({min}) must be less than max ({max})")]
    EmptyRange { min: f32, max: f32 },
    #[error("slider step ({step}) must evenly divide the range {min}..{max}")]
    StepMismatch { min: f32, max: f32, step: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    min: f32,
    max: f32,
    step: f32,
    vertical: bool,
    disabled: bool,
}

impl SliderRange {
    /// Creates a horizontal, enabled range after validating the bounds and
    /// step. `step` must be positive and evenly divide `max - min`.
    pub fn new(min: f32, max: f32, step: f32) -> Result<Self, RangeError> {
        if !(step > 0.0) {
            return Err(RangeError::NonPositiveStep { step });
        }
        if !(min < max) {
            return Err(RangeError::EmptyRange { min, max });
        }
        let steps = (max - min) / step;
        if (steps - steps.round()).abs() > STEP_DIVISIBILITY_TOLERANCE {
            return Err(RangeError::StepMismatch { min, max, step });
        }

        Ok(Self {
            min,
            max,
            step,
            vertical: false,
            disabled: false,
        })
    }

    pub fn with_vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn is_vertical(&self) -> bool {
        self.vertical
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Number of step intervals between `min` and `max`.
    pub fn step_count(&self) -> f32 {
        (self.span() / self.step).abs()
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Snaps `value` to the nearest multiple of `step` from `min`, clamped to
    /// the range. Ties resolve toward the larger step index.
    pub fn snap(&self, value: f32) -> f32 {
        let stepped = self.min + ((value - self.min) / self.step + 0.5).floor() * self.step;
        self.clamp(stepped)
    }

    /// Whether increasing value maps to decreasing screen position: vertical
    /// tracks grow upward, and horizontal tracks follow the text direction.
    pub fn is_reversed(&self, direction: TextDirection) -> bool {
        self.vertical || direction == TextDirection::Rtl
    }
}

impl Default for SliderRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_SLIDER_MIN,
            max: DEFAULT_SLIDER_MAX,
            step: DEFAULT_SLIDER_STEP,
            vertical: false,
            disabled: false,
        }
    }
}
