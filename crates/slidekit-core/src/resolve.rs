//! Track-position resolver.
//!
//! Converts a raw cursor/touch position plus the track's bounding rect into
//! a stepped value within the configured range. Pure and idempotent; the
//! interaction layer calls it on every drag update.

use crate::geometry::{Point, Rect};
use crate::range::SliderRange;

/// Ephemeral resolver input captured at the moment of a drag event.
///
/// `reversed` is derived by the caller as "vertical, or the ambient text
/// direction is right-to-left" (see [`SliderRange::is_reversed`]): on those
/// axes increasing value corresponds to decreasing screen position, so the
/// resolved value is mirrored across the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometrySnapshot {
    pub track: Rect,
    pub cursor: Point,
    pub vertical: bool,
    pub reversed: bool,
}

impl GeometrySnapshot {
    pub fn new(track: Rect, cursor: Point, vertical: bool, reversed: bool) -> Self {
        Self {
            track,
            cursor,
            vertical,
            reversed,
        }
    }
}

/// Resolves the cursor position in `snapshot` to a value in
/// `[range.min(), range.max()]`, snapped to the nearest step.
///
/// Drags outside the track clamp to the nearest edge. A degenerate track
/// (zero or negative size along the active axis) resolves to `range.min()`;
/// hosts hit this transiently before the first layout pass.
pub fn resolve(range: &SliderRange, snapshot: &GeometrySnapshot) -> f32 {
    let (track_size, track_position, cursor_position) = if snapshot.vertical {
        (snapshot.track.height, snapshot.track.y, snapshot.cursor.y)
    } else {
        (snapshot.track.width, snapshot.track.x, snapshot.cursor.x)
    };
    if track_size <= 0.0 {
        return range.min();
    }

    let distance = (cursor_position - track_position).clamp(0.0, track_size);
    let fraction = distance / track_size;
    let raw = fraction * range.span() + range.min();
    let rounded = nearest(raw, range.min(), range.span(), range.step_count());

    if snapshot.reversed {
        // On a reversed axis the cursor fraction counts from the max end.
        range.min() + range.max() - rounded
    } else {
        rounded
    }
}

/// Rounds `value` to the nearest of `steps + 1` evenly spaced points across
/// the range. Ties resolve toward the larger step index.
fn nearest(value: f32, min: f32, span: f32, steps: f32) -> f32 {
    let fraction = (value - min) / span;
    let stepped = (fraction * steps + 0.5).floor() / steps;
    min + stepped * span
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal(track: Rect, x: f32) -> GeometrySnapshot {
        GeometrySnapshot::new(track, Point::new(x, 0.0), false, false)
    }

    #[test]
    fn midpoint_of_percentage_track_resolves_to_fifty() {
        let range = SliderRange::new(0.0, 100.0, 1.0).unwrap();
        let track = Rect::new(40.0, 0.0, 200.0, 16.0);
        let snapshot = horizontal(track, 140.0);
        assert_eq!(resolve(&range, &snapshot), 50.0);
    }

    #[test]
    fn fractional_step_snaps_to_nearest_point() {
        let range = SliderRange::new(0.0, 1.0, 0.25).unwrap();
        let track = Rect::new(0.0, 0.0, 100.0, 16.0);
        // fraction 0.6 sits between 0.5 and 0.75, closer to 0.5
        assert_eq!(resolve(&range, &horizontal(track, 60.0)), 0.5);
    }

    #[test]
    fn tie_between_step_points_resolves_upward() {
        let range = SliderRange::new(0.0, 1.0, 0.25).unwrap();
        let track = Rect::new(0.0, 0.0, 160.0, 16.0);
        // fraction 0.625 is exactly between the 0.5 and 0.75 points
        assert_eq!(resolve(&range, &horizontal(track, 100.0)), 0.75);
    }

    #[test]
    fn positions_outside_the_track_clamp_to_the_edges() {
        let range = SliderRange::new(0.0, 100.0, 1.0).unwrap();
        let track = Rect::new(40.0, 0.0, 200.0, 16.0);
        assert_eq!(resolve(&range, &horizontal(track, -500.0)), 0.0);
        assert_eq!(resolve(&range, &horizontal(track, 10_000.0)), 100.0);
    }

    #[test]
    fn vertical_track_top_is_max_bottom_is_min() {
        let range = SliderRange::new(0.0, 100.0, 1.0).unwrap().with_vertical(true);
        let track = Rect::new(0.0, 50.0, 16.0, 300.0);
        let top = GeometrySnapshot::new(track, Point::new(0.0, 50.0), true, true);
        let bottom = GeometrySnapshot::new(track, Point::new(0.0, 350.0), true, true);
        assert_eq!(resolve(&range, &top), 100.0);
        assert_eq!(resolve(&range, &bottom), 0.0);
    }

    #[test]
    fn reversed_mirrors_across_the_value_range() {
        let range = SliderRange::new(-100.0, 100.0, 25.0).unwrap();
        let track = Rect::new(0.0, 0.0, 400.0, 16.0);
        for x in [0.0, 55.0, 130.0, 200.0, 317.0, 400.0] {
            let forward = GeometrySnapshot::new(track, Point::new(x, 0.0), false, false);
            let mirrored = GeometrySnapshot::new(track, Point::new(x, 0.0), false, true);
            assert_eq!(
                resolve(&range, &mirrored),
                range.min() + range.max() - resolve(&range, &forward)
            );
        }
    }

    #[test]
    fn output_is_in_range_and_on_a_step_point() {
        let range = SliderRange::new(0.0, 1.0, 0.25).unwrap();
        let track = Rect::new(25.0, 0.0, 173.0, 16.0);
        let mut x = -50.0;
        while x < 300.0 {
            let value = resolve(&range, &horizontal(track, x));
            assert!((range.min()..=range.max()).contains(&value));
            let offset = (value - range.min()) / range.step();
            assert!((offset - offset.round()).abs() < 1e-4);
            x += 3.7;
        }
    }

    #[test]
    fn resolver_is_idempotent() {
        let range = SliderRange::new(0.0, 100.0, 5.0).unwrap();
        let track = Rect::new(12.0, 8.0, 250.0, 16.0);
        let snapshot = horizontal(track, 97.0);
        assert_eq!(resolve(&range, &snapshot), resolve(&range, &snapshot));
    }

    #[test]
    fn degenerate_track_resolves_to_min() {
        let range = SliderRange::new(0.0, 100.0, 1.0).unwrap();
        let track = Rect::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(resolve(&range, &horizontal(track, 50.0)), 0.0);
    }
}
