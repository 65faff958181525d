//! Slider value model.
//!
//! The value is always an ordered pair of thumb positions. A one-thumb
//! slider reads the first component and leaves the second untouched, so the
//! same state machine drives both variants.

/// Addresses one of the two thumbs of a range slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Thumb {
    First,
    Second,
}

impl Thumb {
    pub fn other(self) -> Self {
        match self {
            Thumb::First => Thumb::Second,
            Thumb::Second => Thumb::First,
        }
    }
}

/// Ordered pair of thumb values.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SliderValue {
    pub first: f32,
    pub second: f32,
}

impl SliderValue {
    pub const fn new(first: f32, second: f32) -> Self {
        Self { first, second }
    }

    /// Both thumbs at the same position; the one-thumb initial state.
    pub const fn splat(value: f32) -> Self {
        Self {
            first: value,
            second: value,
        }
    }

    pub fn get(self, thumb: Thumb) -> f32 {
        match thumb {
            Thumb::First => self.first,
            Thumb::Second => self.second,
        }
    }

    pub fn with_thumb(self, thumb: Thumb, value: f32) -> Self {
        match thumb {
            Thumb::First => Self {
                first: value,
                second: self.second,
            },
            Thumb::Second => Self {
                first: self.first,
                second: value,
            },
        }
    }

    /// The thumb whose value is closest to `target`. Equidistant targets
    /// resolve to [`Thumb::First`].
    pub fn nearest_thumb(self, target: f32) -> Thumb {
        if (target - self.first).abs() <= (target - self.second).abs() {
            Thumb::First
        } else {
            Thumb::Second
        }
    }
}

impl From<f32> for SliderValue {
    fn from(value: f32) -> Self {
        Self::splat(value)
    }
}

impl From<(f32, f32)> for SliderValue {
    fn from((first, second): (f32, f32)) -> Self {
        Self::new(first, second)
    }
}

/// Initial slider value: a literal, or a closure evaluated once when the
/// controller is created.
pub enum DefaultValue {
    Value(SliderValue),
    Lazy(Box<dyn FnOnce() -> SliderValue>),
}

impl DefaultValue {
    pub fn resolve(self) -> SliderValue {
        match self {
            DefaultValue::Value(value) => value,
            DefaultValue::Lazy(compute) => compute(),
        }
    }
}

impl From<SliderValue> for DefaultValue {
    fn from(value: SliderValue) -> Self {
        DefaultValue::Value(value)
    }
}

impl From<f32> for DefaultValue {
    fn from(value: f32) -> Self {
        DefaultValue::Value(SliderValue::splat(value))
    }
}

impl From<(f32, f32)> for DefaultValue {
    fn from(value: (f32, f32)) -> Self {
        DefaultValue::Value(value.into())
    }
}

impl std::fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefaultValue::Value(value) => f.debug_tuple("Value").field(value).finish(),
            DefaultValue::Lazy(_) => f.debug_tuple("Lazy").finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_thumb_replaces_only_the_addressed_component() {
        let values = SliderValue::new(10.0, 90.0);
        assert_eq!(
            values.with_thumb(Thumb::First, 25.0),
            SliderValue::new(25.0, 90.0)
        );
        assert_eq!(
            values.with_thumb(Thumb::Second, 25.0),
            SliderValue::new(10.0, 25.0)
        );
    }

    #[test]
    fn nearest_thumb_picks_the_closer_value() {
        let values = SliderValue::new(10.0, 90.0);
        assert_eq!(values.nearest_thumb(0.0), Thumb::First);
        assert_eq!(values.nearest_thumb(80.0), Thumb::Second);
    }

    #[test]
    fn nearest_thumb_tie_prefers_first() {
        let values = SliderValue::new(40.0, 60.0);
        assert_eq!(values.nearest_thumb(50.0), Thumb::First);
    }

    #[test]
    fn lazy_default_is_computed_on_resolve() {
        let default = DefaultValue::Lazy(Box::new(|| SliderValue::splat(42.0)));
        assert_eq!(default.resolve(), SliderValue::splat(42.0));
    }

    #[test]
    fn literal_defaults_convert_from_plain_numbers() {
        assert_eq!(
            DefaultValue::from(20.0).resolve(),
            SliderValue::splat(20.0)
        );
        assert_eq!(
            DefaultValue::from((10.0, 30.0)).resolve(),
            SliderValue::new(10.0, 30.0)
        );
    }
}
