//! Picker interaction state machine.
//!
//! Tracks which region (hue track or saturation/value plane) captured the
//! pointer and keeps the current HSV state in sync with drag positions.
//! The picker returns values instead of firing callbacks: the hosting UI
//! shell decides what to do with a changed color or an ended interaction
//! (repaint, notify listeners, update material parameters).
//!
//! Protocol: pointer-down inside a region begins an interaction bound to
//! that region's axis and immediately applies the position, like a click
//! that doubles as the first drag sample. Pointer-move while captured
//! remaps the captured axis only. Pointer-up or capture loss ends the
//! interaction. There are no timeouts and no intermediate states.

use kurbo::Point;

use crate::color::Color;
use crate::geometry::{position_to_hue, position_to_sat_val, sat_val_to_position, PickerGeometry};

/// Which picker region a drag is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Hue,
    SaturationValue,
}

/// Interaction state: idle, or captured by one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Interacting(Axis),
}

/// Color picker state: geometry, current HSV + alpha, interaction state.
///
/// Holds no resources and no references to the hosting UI; cloning is
/// cheap and every value is recomputable from the fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Picker {
    geometry: PickerGeometry,
    /// Degrees. Kept as mapped, in [0.0, 360.0]: a drag to the track
    /// bottom reads 360 so the indicator stays there instead of snapping
    /// back to the top; color derivation wraps it to 0.
    hue: f64,
    saturation: f64,
    value: f64,
    alpha: f64,
    interaction: Interaction,
}

impl Default for Picker {
    fn default() -> Self {
        Self::new(PickerGeometry::default())
    }
}

impl Picker {
    /// A picker over the given geometry, starting at opaque white
    /// (hue 0, saturation 0, value 1) and idle.
    pub fn new(geometry: PickerGeometry) -> Self {
        Self {
            geometry,
            hue: 0.0,
            saturation: 0.0,
            value: 1.0,
            alpha: 1.0,
            interaction: Interaction::Idle,
        }
    }

    pub fn geometry(&self) -> PickerGeometry {
        self.geometry
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn is_interacting(&self) -> bool {
        self.interaction != Interaction::Idle
    }

    /// Current hue in degrees, as mapped from the track (may be exactly
    /// 360 at the bottom edge).
    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// The color for the current HSV state, with the preserved alpha.
    pub fn color(&self) -> Color {
        Color::from_hsv(self.hue, self.saturation, self.value).with_alpha(self.alpha)
    }

    /// Indicator position on the hue track.
    pub fn hue_indicator(&self) -> Point {
        // Scale the raw 0..=360 value directly so the bottom edge does
        // not wrap to the top mid-drag.
        let track = self.geometry.hue_track;
        Point::new(track.x0, track.y0 + self.hue / 360.0 * track.height())
    }

    /// Indicator position on the saturation/value plane.
    pub fn sv_indicator(&self) -> Point {
        sat_val_to_position(self.saturation, self.value, self.geometry.sv_plane)
    }

    /// Begin an interaction if `pos` hits one of the picker regions.
    ///
    /// The hue track wins when the regions overlap, matching the original
    /// widget's hit order. On a hit the position is applied immediately
    /// and the recomputed color is returned; a miss leaves the picker
    /// idle and returns `None`.
    pub fn pointer_down(&mut self, pos: Point) -> Option<Color> {
        if self.geometry.hue_track.contains(pos) {
            self.interaction = Interaction::Interacting(Axis::Hue);
        } else if self.geometry.sv_plane.contains(pos) {
            self.interaction = Interaction::Interacting(Axis::SaturationValue);
        } else {
            return None;
        }
        self.pointer_move(pos)
    }

    /// Apply a pointer position to the captured axis.
    ///
    /// Returns the recomputed color, or `None` when no interaction is in
    /// progress. Positions outside the captured region are clamped by the
    /// mapping, so a drag can leave the rectangle without losing capture.
    pub fn pointer_move(&mut self, pos: Point) -> Option<Color> {
        match self.interaction {
            Interaction::Idle => None,
            Interaction::Interacting(Axis::Hue) => {
                self.hue = position_to_hue(pos, self.geometry.hue_track);
                Some(self.color())
            }
            Interaction::Interacting(Axis::SaturationValue) => {
                let (s, v) = position_to_sat_val(pos, self.geometry.sv_plane);
                self.saturation = s;
                self.value = v;
                Some(self.color())
            }
        }
    }

    /// End the current interaction. Returns whether one was in progress,
    /// so the shell knows whether to raise its interaction-end
    /// notification.
    pub fn pointer_up(&mut self) -> bool {
        let was_interacting = self.is_interacting();
        self.interaction = Interaction::Idle;
        was_interacting
    }

    /// Capture loss ends an interaction the same way pointer-up does.
    pub fn capture_lost(&mut self) -> bool {
        self.pointer_up()
    }

    /// Set the current color directly, repositioning both indicators via
    /// the inverse mappings. Alpha is preserved for subsequent drags.
    pub fn set_color(&mut self, color: Color) {
        let (h, s, v) = color.to_hsv();
        self.hue = h;
        self.saturation = s;
        self.value = v;
        self.alpha = color.a();
    }

    /// Replace the picker geometry, keeping the current color state. The
    /// indicators land at the equivalent positions in the new rects.
    pub fn set_geometry(&mut self, geometry: PickerGeometry) {
        self.geometry = geometry;
    }
}
