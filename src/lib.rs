//! # chromapick
//!
//! Color space conversions and picker-state mapping for color picker
//! widgets.
//!
//! The crate is the engine-independent core of a rectangular color
//! picker: a [`Color`] type converting among Hex, integer RGB, HSV, CMYK,
//! and HSL; the position ↔ component mappings for a vertical hue track
//! and a saturation/value plane; and a [`Picker`] state machine that
//! routes pointer events to the right region. Rendering, layout, and
//! event delivery belong to the hosting UI shell — the core only returns
//! values for the shell to act on.
//!
//! All conversions pivot through linear RGBA and are total: out-of-range
//! numeric inputs are clamped or wrapped, never rejected. The one
//! fallible operation is hex parsing, which reports [`ParseHexError`]
//! instead of guessing a color.
//!
//! ## Usage
//!
//! ```rust
//! use chromapick::{Color, Picker, PickerGeometry};
//! use kurbo::{Point, Rect};
//!
//! let geometry = PickerGeometry::new(
//!     Rect::new(420.0, 0.0, 450.0, 300.0), // hue track
//!     Rect::new(0.0, 0.0, 400.0, 300.0),   // saturation/value plane
//! );
//! let mut picker = Picker::new(geometry);
//!
//! // Wire pointer events from the shell:
//! if let Some(color) = picker.pointer_down(Point::new(200.0, 75.0)) {
//!     assert_eq!(color.to_hex(), Color::from_hsv(0.0, 0.5, 0.75).to_hex());
//! }
//! picker.pointer_up();
//! ```

mod color;
mod error;
mod geometry;
mod math;
mod picker;

pub use color::{Color, ColorFormat};
pub use error::ParseHexError;
pub use geometry::{
    hue_to_position, position_to_hue, position_to_sat_val, sat_val_to_position, PickerGeometry,
};
pub use picker::{Axis, Interaction, Picker};
