//! Clock geometry for an analog dial.
//!
//! Two pure engines live here: [`time::compute_hand_angles`] turns a
//! wall-clock sample into hand rotations, and [`layout::compute_dial_spec`]
//! turns a radius into every primitive needed to draw the face. Neither
//! knows about windows, timers or storage.

pub mod geometry;
pub mod layout;
pub mod macros;
pub mod style;
pub mod time;

pub use geometry::{Degrees, Point, Segment};
pub use layout::{
    DialSpec, HandGeometry, HandKind, Numeral, Radius, TickKind, TickMark, compute_dial_spec,
    radius_for_area,
};
pub use style::{ColorRole, StyleConstants, StyleError};
pub use time::{HandAngles, WallClockSample, compute_hand_angles};
