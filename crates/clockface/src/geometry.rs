use derive_more::{Deref, Display, From, Into};
use serde::Serialize;

/// A position in surface coordinates: x grows rightwards, y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point `distance` away from the origin along a clock bearing,
    /// measured clockwise from 12 o'clock.
    pub fn on_bearing(distance: f64, bearing: Degrees) -> Self {
        let theta = bearing.to_radians();
        Self::new(distance * theta.sin(), -distance * theta.cos())
    }
}

/// An angle in degrees, clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Display, Deref, From, Into)]
#[serde(transparent)]
pub struct Degrees(f64);

crate::impl_scalar_newtype!(Degrees);

impl Degrees {
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }
}

/// A straight stroke between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    /// A segment from the origin pointing straight at 12 o'clock.
    ///
    /// Hands and ticks are described in this unrotated frame; the renderer
    /// applies their rotation as a transform on the whole stroke.
    pub fn upright(from: f64, to: f64) -> Self {
        Self {
            start: Point::new(0.0, -from),
            end: Point::new(0.0, -to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn bearing_follows_clock_directions() {
        let twelve = Point::on_bearing(10.0, Degrees::new(0.0));
        assert!(close(twelve.x, 0.0) && close(twelve.y, -10.0));

        let three = Point::on_bearing(10.0, Degrees::new(90.0));
        assert!(close(three.x, 10.0) && close(three.y, 0.0));

        let six = Point::on_bearing(10.0, Degrees::new(180.0));
        assert!(close(six.x, 0.0) && close(six.y, 10.0));
    }

    #[test]
    fn upright_segment_points_up() {
        let seg = Segment::upright(0.0, 75.0);
        assert_eq!(seg.start, Point::new(0.0, 0.0));
        assert_eq!(seg.end, Point::new(0.0, -75.0));
    }
}
