use crate::geometry::{Degrees, Point, Segment};
use crate::style::{ColorRole, StyleConstants};
use crate::time::HandAngles;
use derive_more::{Deref, Display, Into};
use serde::Serialize;
use strum::{Display as StrumDisplay, EnumIter, IntoEnumIterator};

pub const TICK_COUNT: u32 = 60;
pub const TICKS_PER_HOUR_MARK: u32 = 5;
pub const NUMERAL_COUNT: u32 = 12;
pub const DEGREES_PER_TICK: f64 = 360.0 / TICK_COUNT as f64;
pub const DEGREES_PER_NUMERAL: f64 = 360.0 / NUMERAL_COUNT as f64;

/// Dial radius in pixels. Zero, negative and non-finite inputs collapse to
/// `0.0`, which lays out the all-floor geometry.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Display, Deref, Into)]
#[serde(transparent)]
pub struct Radius(f64);

impl Radius {
    pub fn new(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            log::debug!("Clamping unusable radius {} to 0", value);
            Self(0.0)
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Radius {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Radius of the largest dial that fits a `width` × `height` area.
pub fn radius_for_area(width: f64, height: f64) -> Radius {
    Radius::new(width.min(height) / 2.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, StrumDisplay)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TickKind {
    Hour,
    Minute,
}

impl TickKind {
    pub fn for_index(index: u32) -> Self {
        if index % TICKS_PER_HOUR_MARK == 0 {
            Self::Hour
        } else {
            Self::Minute
        }
    }

    pub fn color(&self) -> ColorRole {
        match self {
            Self::Hour => ColorRole::Primary,
            Self::Minute => ColorRole::Secondary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickMark {
    pub index: u32,
    pub kind: TickKind,
    pub length: f64,
    pub width: f64,
    /// Distance from the dial center to the middle of the tick.
    pub radial_offset: f64,
    pub rotation: Degrees,
    pub color: ColorRole,
}

impl TickMark {
    /// The tick in the unrotated frame, centered on `radial_offset`.
    pub fn segment(&self) -> Segment {
        let half = self.length / 2.0;
        Segment::upright(self.radial_offset - half, self.radial_offset + half)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Numeral {
    pub value: u32,
    pub font_size: f64,
    pub radial_offset: f64,
    pub rotation: Degrees,
}

impl Numeral {
    pub fn label(&self) -> String {
        self.value.to_string()
    }

    /// Where the glyph is centered, relative to the dial center. The glyph
    /// itself is never rotated.
    pub fn position(&self) -> Point {
        Point::on_bearing(self.radial_offset, self.rotation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, StrumDisplay)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    pub fn angle(&self, angles: &HandAngles) -> Degrees {
        match self {
            Self::Hour => angles.hour,
            Self::Minute => angles.minute,
            Self::Second => angles.second,
        }
    }

    pub fn color(&self) -> ColorRole {
        match self {
            Self::Hour => ColorRole::HourHand,
            Self::Minute => ColorRole::MinuteHand,
            Self::Second => ColorRole::SecondHand,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandGeometry {
    pub kind: HandKind,
    pub length: f64,
    pub width: f64,
    pub color: ColorRole,
}

impl HandGeometry {
    /// From the center straight up to the tip; rotate by [`Self::rotation`]
    /// when drawing.
    pub fn segment(&self) -> Segment {
        Segment::upright(0.0, self.length)
    }

    pub fn rotation(&self, angles: &HandAngles) -> Degrees {
        self.kind.angle(angles)
    }
}

/// Everything needed to paint one dial at one radius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DialSpec {
    pub radius: Radius,
    /// Multiplier applied to tick sizes; above 1.0 only on small dials.
    pub tick_scale: f64,
    pub dial_stroke_width: f64,
    pub ticks: Vec<TickMark>,
    pub numerals_visible: bool,
    pub numerals: Vec<Numeral>,
    pub hands: Vec<HandGeometry>,
    pub pin_diameter: f64,
}

impl DialSpec {
    pub fn hand(&self, kind: HandKind) -> Option<&HandGeometry> {
        self.hands.iter().find(|h| h.kind == kind)
    }

    /// Centerline of the drawn ring. The ring is pulled in by half its width
    /// so its outer edge lands on the radius and stays inside the surface.
    pub fn ring_radius(&self) -> f64 {
        (self.radius.get() - self.dial_stroke_width / 2.0).max(0.0)
    }

    /// The stroke actually painted for `tick`.
    ///
    /// `radial_offset` is measured against a ring centered on the radius.
    /// The drawn ring sits half a stroke further in (see [`Self::ring_radius`]),
    /// so the tick moves in by the same amount and ends on the ring's inner
    /// edge instead of overlapping it.
    pub fn tick_segment(&self, tick: &TickMark) -> Segment {
        let inset = self.dial_stroke_width / 2.0;
        let seg = tick.segment();
        Segment::upright(
            (-seg.start.y - inset).max(0.0),
            (-seg.end.y - inset).max(0.0),
        )
    }
}

pub fn compute_dial_spec(radius: Radius, style: &StyleConstants) -> DialSpec {
    let r = radius.get();
    let small = r < style.hide_numbers_threshold;
    let tick_scale = if small { style.small_clock_scale } else { 1.0 };

    let dial_stroke_width = style.dial_stroke.at(r);

    let ticks = (0..TICK_COUNT)
        .map(|index| {
            let kind = TickKind::for_index(index);
            let stroke = match kind {
                TickKind::Hour => &style.hour_tick,
                TickKind::Minute => &style.minute_tick,
            };
            let length = stroke.length.at_scaled(r, tick_scale);
            let width = stroke.width.at_scaled(r, tick_scale);

            TickMark {
                index,
                kind,
                length,
                width,
                radial_offset: (r - dial_stroke_width / 2.0 - length / 2.0).max(0.0),
                rotation: Degrees::new(f64::from(index) * DEGREES_PER_TICK),
                color: kind.color(),
            }
        })
        .collect();

    let numerals = if small {
        Vec::new()
    } else {
        (1..=NUMERAL_COUNT)
            .map(|value| Numeral {
                value,
                font_size: style.numeral_font.at(r),
                radial_offset: r * style.numeral_offset_ratio,
                rotation: Degrees::new(f64::from(value) * DEGREES_PER_NUMERAL),
            })
            .collect()
    };

    let hands = HandKind::iter()
        .map(|kind| {
            let stroke = match kind {
                HandKind::Hour => &style.hour_hand,
                HandKind::Minute => &style.minute_hand,
                HandKind::Second => &style.second_hand,
            };
            HandGeometry {
                kind,
                length: stroke.length.at(r),
                width: stroke.width.at(r),
                color: kind.color(),
            }
        })
        .collect();

    DialSpec {
        radius,
        tick_scale,
        dial_stroke_width,
        ticks,
        numerals_visible: !small,
        numerals,
        hands,
        pin_diameter: style.pin.at(r),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{WallClockSample, compute_hand_angles};

    fn dial_at(radius: f64) -> DialSpec {
        compute_dial_spec(Radius::new(radius), &StyleConstants::default())
    }

    #[test]
    fn test_radius_sanitizing() {
        assert_eq!(Radius::new(150.0).get(), 150.0);
        assert_eq!(Radius::new(0.0).get(), 0.0);
        assert_eq!(Radius::new(-20.0).get(), 0.0);
        assert_eq!(Radius::new(f64::NAN).get(), 0.0);
        assert_eq!(Radius::new(f64::INFINITY).get(), 0.0);
    }

    #[test]
    fn test_radius_for_area_uses_short_side() {
        assert_eq!(radius_for_area(300.0, 400.0).get(), 150.0);
        assert_eq!(radius_for_area(500.0, 200.0).get(), 100.0);
    }

    #[test]
    fn test_tick_layout() {
        let dial = dial_at(150.0);
        assert_eq!(dial.ticks.len(), 60);
        assert_eq!(dial.tick_scale, 1.0);

        let hour_ticks: Vec<u32> = dial
            .ticks
            .iter()
            .filter(|t| t.kind == TickKind::Hour)
            .map(|t| t.index)
            .collect();
        assert_eq!(hour_ticks, vec![0, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55]);

        let three = &dial.ticks[15];
        assert_eq!(three.rotation.get(), 90.0);
        assert_eq!(three.color, ColorRole::Primary);
        assert_eq!(dial.ticks[1].color, ColorRole::Secondary);
    }

    #[test]
    fn test_tick_sits_inside_dial_stroke() {
        let dial = dial_at(150.0);
        for tick in &dial.ticks {
            let expected = 150.0 - dial.dial_stroke_width / 2.0 - tick.length / 2.0;
            assert_eq!(tick.radial_offset, expected);
            let outer = -tick.segment().end.y;
            assert!((outer - (150.0 - dial.dial_stroke_width / 2.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_drawn_ticks_end_on_ring_inner_edge() {
        for radius in [40.0, 75.0, 150.0, 250.0] {
            let dial = dial_at(radius);
            let ring_inner = dial.ring_radius() - dial.dial_stroke_width / 2.0;
            assert!((ring_inner - (radius - dial.dial_stroke_width)).abs() < 1e-9);

            for tick in &dial.ticks {
                let seg = dial.tick_segment(tick);
                let inner = -seg.start.y;
                let outer = -seg.end.y;
                assert!(
                    (outer - ring_inner).abs() < 1e-9,
                    "tick {} at r={} ends at {} but the ring starts at {}",
                    tick.index,
                    radius,
                    outer,
                    ring_inner
                );
                assert!((outer - inner - tick.length).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_drawn_ticks_never_cross_center() {
        for radius in [0.0, 0.5, 2.0] {
            let dial = dial_at(radius);
            assert!(dial.ring_radius() >= 0.0);
            for tick in &dial.ticks {
                let seg = dial.tick_segment(tick);
                assert!(seg.start.y <= 0.0 && seg.end.y <= 0.0);
            }
        }
    }

    #[test]
    fn test_numerals_orbit_upright() {
        let dial = dial_at(150.0);
        assert!(dial.numerals_visible);
        assert_eq!(dial.numerals.len(), 12);
        assert_eq!(dial.numerals[0].label(), "1");
        assert_eq!(dial.numerals[11].label(), "12");
        assert_eq!(dial.numerals[11].rotation.get(), 360.0);

        let three = dial.numerals[2].position();
        assert!((three.x - 112.5).abs() < 1e-9);
        assert!(three.y.abs() < 1e-9);

        let twelve = dial.numerals[11].position();
        assert!(twelve.x.abs() < 1e-9);
        assert!((twelve.y + 112.5).abs() < 1e-9);
    }

    #[test]
    fn test_hands_follow_angles() {
        let dial = dial_at(150.0);
        let angles = compute_hand_angles(WallClockSample::new(9, 0, 15));
        let rotations: Vec<f64> = dial.hands.iter().map(|h| h.rotation(&angles).get()).collect();
        assert_eq!(rotations, vec![270.0, 1.5, 90.0]);

        let hour = dial.hand(HandKind::Hour).unwrap();
        assert_eq!(hour.segment(), Segment::upright(0.0, 75.0));
        assert_eq!(hour.color, ColorRole::HourHand);
    }

    #[test]
    fn test_degenerate_radius_yields_floor_geometry() {
        let style = StyleConstants::default();
        for radius in [0.0, -5.0, f64::NAN, f64::NEG_INFINITY] {
            let dial = dial_at(radius);
            assert_eq!(dial.radius.get(), 0.0);
            assert_eq!(dial.dial_stroke_width, style.dial_stroke.min);
            assert_eq!(dial.pin_diameter, style.pin.min);
            assert!(!dial.numerals_visible);
            assert_eq!(dial.ticks[0].length, style.hour_tick.length.min);
            assert_eq!(dial.ticks[1].width, style.minute_tick.width.min);
            assert_eq!(dial.hand(HandKind::Second).unwrap().length, style.second_hand.length.min);
            assert!(dial.ticks.iter().all(|t| t.radial_offset >= 0.0));
        }
    }
}
