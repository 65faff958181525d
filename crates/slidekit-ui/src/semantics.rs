//! Accessibility value contract for the rendering layer.
//!
//! The renderer exposes each thumb with slider role semantics: the range
//! bounds, the current value, and a human-readable value text. The numeric
//! value handed to the formatter is always a clamped, stepped value.

use std::fmt;
use std::rc::Rc;

/// Formats a slider value for assistive technology.
pub type ValueTextFn = Rc<dyn Fn(f32) -> String>;

/// Plain-number formatting, the default when the host supplies no formatter.
pub fn default_value_text(value: f32) -> String {
    value.to_string()
}

/// Per-thumb semantics snapshot for the rendering layer.
#[derive(Clone)]
pub struct ThumbSemantics {
    pub min: f32,
    pub max: f32,
    pub now: f32,
    value_text: ValueTextFn,
}

impl ThumbSemantics {
    pub fn new(min: f32, max: f32, now: f32, value_text: ValueTextFn) -> Self {
        Self {
            min,
            max,
            now,
            value_text,
        }
    }

    pub fn value_text(&self) -> String {
        (self.value_text)(self.now)
    }
}

impl fmt::Debug for ThumbSemantics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThumbSemantics")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("now", &self.now)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_formatting_drops_trailing_zeroes() {
        assert_eq!(default_value_text(50.0), "50");
        assert_eq!(default_value_text(0.5), "0.5");
    }

    #[test]
    fn custom_formatter_receives_the_current_value() {
        let semantics =
            ThumbSemantics::new(0.0, 100.0, 30.0, Rc::new(|value| format!("{value} percent")));
        assert_eq!(semantics.value_text(), "30 percent");
    }
}
