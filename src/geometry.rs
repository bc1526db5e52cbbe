//! Picker geometry and the position ↔ color-component mappings.
//!
//! The picker is built from two independent rectangles: a vertical hue
//! track (a 1D control embedded in a 2D rect — only the vertical axis
//! carries information) and a saturation/value plane. Pointer positions
//! are clamped to the owning rectangle before being scaled, so transient
//! drag positions outside the rect saturate at the edges instead of
//! producing out-of-range components.
//!
//! Positions are in the same coordinate space as the rectangle; forward
//! mappings work on the clamped offset from the rectangle's origin, and
//! inverse mappings return points offset from that origin.

use kurbo::{Point, Rect};

/// Layout of the two picker regions.
///
/// Rectangles must have non-negative size. Zero-size rectangles are valid
/// but inert: mapping through them collapses to a constant instead of
/// dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickerGeometry {
    /// Vertical hue track; hue 0 at the top edge, 360 at the bottom.
    pub hue_track: Rect,
    /// Saturation/value plane; saturation grows rightward, value downward
    /// from 1 at the top to 0 at the bottom.
    pub sv_plane: Rect,
}

impl PickerGeometry {
    pub fn new(hue_track: Rect, sv_plane: Rect) -> Self {
        Self {
            hue_track,
            sv_plane,
        }
    }
}

impl Default for PickerGeometry {
    /// The layout the original picker ships with: a 30×300 hue track to
    /// the right of a 400×300 saturation/value plane.
    fn default() -> Self {
        Self {
            hue_track: Rect::new(420.0, 0.0, 450.0, 300.0),
            sv_plane: Rect::new(0.0, 0.0, 400.0, 300.0),
        }
    }
}

/// Clamp a point to the rectangle's bounds on both axes.
fn clamp_to_rect(pos: Point, rect: Rect) -> Point {
    Point::new(pos.x.clamp(rect.x0, rect.x1), pos.y.clamp(rect.y0, rect.y1))
}

/// Map a pointer position on the hue track to a hue in degrees.
///
/// Only the vertical axis carries information; the horizontal coordinate
/// is ignored. The position is clamped to the track first, so the result
/// is in [0.0, 360.0] — exactly 360.0 at the bottom edge, which wraps to
/// 0 when fed through an HSV conversion. A zero-height track maps every
/// position to hue 0.
pub fn position_to_hue(pos: Point, track: Rect) -> f64 {
    if track.height() == 0.0 {
        return 0.0;
    }
    let y = pos.y.clamp(track.y0, track.y1) - track.y0;
    y / track.height() * 360.0
}

/// Inverse of [`position_to_hue`]: the indicator position for a hue.
///
/// The indicator sits on the track's left edge (the horizontal axis
/// carries no information). Hue is taken modulo 360.
pub fn hue_to_position(hue: f64, track: Rect) -> Point {
    let y = hue.rem_euclid(360.0) / 360.0 * track.height();
    Point::new(track.x0, track.y0 + y)
}

/// Map a pointer position on the saturation/value plane to (S, V).
///
/// The position is clamped to the plane first: saturation is the
/// horizontal fraction, value the inverted vertical fraction (1 at the
/// top). Degenerate width or height yields S = 0 or V = 1 respectively.
pub fn position_to_sat_val(pos: Point, plane: Rect) -> (f64, f64) {
    let clamped = clamp_to_rect(pos, plane);
    let s = if plane.width() == 0.0 {
        0.0
    } else {
        (clamped.x - plane.x0) / plane.width()
    };
    let v = if plane.height() == 0.0 {
        1.0
    } else {
        1.0 - (clamped.y - plane.y0) / plane.height()
    };
    (s, v)
}

/// Inverse of [`position_to_sat_val`]: the indicator position for (S, V).
///
/// Saturation and value are clamped to 0.0–1.0 so the indicator never
/// leaves the plane.
pub fn sat_val_to_position(s: f64, v: f64, plane: Rect) -> Point {
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);
    Point::new(
        plane.x0 + s * plane.width(),
        plane.y0 + (1.0 - v) * plane.height(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_track_maps_vertically() {
        let track = Rect::new(0.0, 0.0, 30.0, 300.0);
        assert_eq!(position_to_hue(Point::new(5.0, 150.0), track), 180.0);
        assert_eq!(hue_to_position(180.0, track), Point::new(0.0, 150.0));
    }

    #[test]
    fn hue_ignores_horizontal_axis() {
        let track = Rect::new(0.0, 0.0, 30.0, 300.0);
        let hue = position_to_hue(Point::new(-1000.0, 75.0), track);
        assert_eq!(hue, 90.0);
        assert_eq!(hue, position_to_hue(Point::new(1000.0, 75.0), track));
    }

    #[test]
    fn hue_clamps_to_track() {
        let track = Rect::new(0.0, 0.0, 30.0, 300.0);
        assert_eq!(position_to_hue(Point::new(5.0, -40.0), track), 0.0);
        assert_eq!(position_to_hue(Point::new(5.0, 999.0), track), 360.0);
    }

    #[test]
    fn hue_respects_track_origin() {
        let track = Rect::new(420.0, 100.0, 450.0, 400.0);
        assert_eq!(position_to_hue(Point::new(430.0, 250.0), track), 180.0);
        assert_eq!(hue_to_position(180.0, track), Point::new(420.0, 250.0));
    }

    #[test]
    fn degenerate_track_maps_to_zero_hue() {
        let track = Rect::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(position_to_hue(Point::new(12.0, 34.0), track), 0.0);
        assert_eq!(hue_to_position(180.0, track), Point::new(0.0, 0.0));
    }

    #[test]
    fn hue_to_position_wraps_hue() {
        let track = Rect::new(0.0, 0.0, 30.0, 300.0);
        assert_eq!(hue_to_position(-90.0, track), hue_to_position(270.0, track));
        assert_eq!(hue_to_position(360.0, track), Point::new(0.0, 0.0));
    }

    #[test]
    fn sat_val_plane_maps_both_axes() {
        let plane = Rect::new(0.0, 0.0, 400.0, 300.0);
        let (s, v) = position_to_sat_val(Point::new(200.0, 75.0), plane);
        assert_eq!((s, v), (0.5, 0.75));
        assert_eq!(
            sat_val_to_position(0.5, 0.75, plane),
            Point::new(200.0, 75.0)
        );
    }

    #[test]
    fn sat_val_clamps_before_scaling() {
        let plane = Rect::new(0.0, 0.0, 400.0, 300.0);
        let (s, v) = position_to_sat_val(Point::new(-50.0, 1000.0), plane);
        assert_eq!((s, v), (0.0, 0.0));
        let (s, v) = position_to_sat_val(Point::new(1000.0, -50.0), plane);
        assert_eq!((s, v), (1.0, 1.0));
    }

    #[test]
    fn degenerate_plane_defaults() {
        let plane = Rect::new(10.0, 10.0, 10.0, 10.0);
        let (s, v) = position_to_sat_val(Point::new(0.0, 0.0), plane);
        assert_eq!((s, v), (0.0, 1.0));
    }

    #[test]
    fn sat_val_to_position_clamps_components() {
        let plane = Rect::new(0.0, 0.0, 400.0, 300.0);
        assert_eq!(
            sat_val_to_position(-0.5, 2.0, plane),
            Point::new(0.0, 0.0)
        );
        assert_eq!(
            sat_val_to_position(1.5, -1.0, plane),
            Point::new(400.0, 300.0)
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn rect() -> impl Strategy<Value = Rect> {
            (
                -500.0_f64..=500.0,
                -500.0_f64..=500.0,
                1.0_f64..=1000.0,
                1.0_f64..=1000.0,
            )
                .prop_map(|(x, y, w, h)| Rect::new(x, y, x + w, y + h))
        }

        proptest! {
            #[test]
            fn hue_mapping_round_trips(hue in 0.0_f64..360.0, track in rect()) {
                let pos = hue_to_position(hue, track);
                let recovered = position_to_hue(pos, track);
                prop_assert!((recovered - hue).abs() < 1e-9, "{} vs {}", recovered, hue);
            }

            #[test]
            fn sat_val_mapping_round_trips(
                s in 0.0_f64..=1.0,
                v in 0.0_f64..=1.0,
                plane in rect(),
            ) {
                let pos = sat_val_to_position(s, v, plane);
                let (s2, v2) = position_to_sat_val(pos, plane);
                prop_assert!((s2 - s).abs() < 1e-9, "s: {} vs {}", s2, s);
                prop_assert!((v2 - v).abs() < 1e-9, "v: {} vs {}", v2, v);
            }

            #[test]
            fn mapped_components_always_in_range(
                x in -2000.0_f64..=2000.0,
                y in -2000.0_f64..=2000.0,
                track in rect(),
                plane in rect(),
            ) {
                let pos = Point::new(x, y);
                let hue = position_to_hue(pos, track);
                prop_assert!((0.0..=360.0).contains(&hue), "hue {}", hue);
                let (s, v) = position_to_sat_val(pos, plane);
                prop_assert!((0.0..=1.0).contains(&s), "s {}", s);
                prop_assert!((0.0..=1.0).contains(&v), "v {}", v);
            }
        }
    }
}
