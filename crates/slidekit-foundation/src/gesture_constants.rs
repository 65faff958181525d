//! Shared gesture constants for consistent pointer/keyboard handling.

use web_time::Duration;

/// Maximum gap between consecutive arrow key-downs for the movement to count
/// as a continuous keyboard drag.
///
/// Holding an arrow key produces repeats well under this threshold, so each
/// repeat keeps the pseudo-drag state alive; the host uses that state to
/// suppress value-change easing the same way it does for pointer drags.
/// Discrete taps arrive further apart and stay ordinary stepped updates.
pub const KEYBOARD_DRAG_THRESHOLD: Duration = Duration::from_millis(100);
