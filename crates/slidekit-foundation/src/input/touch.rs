//! Touch event types.
//!
//! The slider reacts to single-point drags only: the first changed touch
//! point drives the gesture and any additional points are ignored.

use slidekit_core::Point;
use smallvec::SmallVec;

use super::key::Modifiers;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// A touch event carrying the changed touch points for this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub points: SmallVec<[Point; 2]>,
    pub modifiers: Modifiers,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            phase,
            points: points.into_iter().collect(),
            modifiers: Modifiers::NONE,
        }
    }

    /// Single-point touch start at `position`.
    pub fn start(position: Point) -> Self {
        Self::new(TouchPhase::Start, [position])
    }

    /// Single-point touch move at `position`.
    pub fn moved(position: Point) -> Self {
        Self::new(TouchPhase::Move, [position])
    }

    pub fn end() -> Self {
        Self::new(TouchPhase::End, [])
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// The point driving a single-point drag: the first changed touch.
    pub fn primary_point(&self) -> Option<Point> {
        self.points.first().copied()
    }
}
