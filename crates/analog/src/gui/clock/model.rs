use clockface::{
    DialSpec, HandAngles, Point, Radius, StyleConstants, WallClockSample, compute_dial_spec,
    compute_hand_angles, radius_for_area,
};

/// What the drawing area paints: the latest sample and the dial laid out
/// for the current size. Both are replaced wholesale when their inputs
/// change.
pub struct ClockState {
    pub sample: WallClockSample,
    pub angles: HandAngles,
    pub style: StyleConstants,
    pub dial: DialSpec,
    pub center: Point,
}

impl ClockState {
    pub fn new(sample: WallClockSample, style: StyleConstants, radius: Radius) -> Self {
        Self {
            sample,
            angles: compute_hand_angles(sample),
            dial: compute_dial_spec(radius, &style),
            style,
            center: Point::new(radius.get(), radius.get()),
        }
    }

    /// Returns whether the hands moved.
    pub fn tick(&mut self, sample: WallClockSample) -> bool {
        if sample == self.sample {
            return false;
        }
        self.sample = sample;
        self.angles = compute_hand_angles(sample);
        true
    }

    /// Fits the dial into a `width` × `height` area. Returns whether the
    /// dial had to be laid out again.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        self.center = Point::new(width / 2.0, height / 2.0);
        let radius = radius_for_area(width, height);
        if radius == self.dial.radius {
            return false;
        }
        log::debug!("Dial radius {} -> {}", self.dial.radius, radius);
        self.dial = compute_dial_spec(radius, &self.style);
        true
    }

    pub fn set_style(&mut self, style: StyleConstants) -> bool {
        if style == self.style {
            return false;
        }
        self.style = style;
        self.dial = compute_dial_spec(self.dial.radius, &self.style);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ClockState {
        ClockState::new(
            WallClockSample::new(3, 30, 0),
            StyleConstants::default(),
            Radius::new(150.0),
        )
    }

    #[test]
    fn test_tick_only_reports_changes() {
        let mut state = state();
        assert_eq!(state.angles.hour.get(), 105.0);
        assert!(!state.tick(WallClockSample::new(3, 30, 0)));
        assert!(state.tick(WallClockSample::new(3, 30, 1)));
        assert_eq!(state.angles.second.get(), 6.0);
        assert_eq!(state.sample.to_string(), "3:30:01 AM");
    }

    #[test]
    fn test_resize_recomputes_only_on_new_radius() {
        let mut state = state();
        assert!(!state.resize(300.0, 300.0));
        assert!(!state.resize(300.0, 420.0));
        assert_eq!(state.center, Point::new(150.0, 210.0));

        assert!(state.resize(100.0, 100.0));
        assert_eq!(state.dial.radius.get(), 50.0);
        assert!(!state.dial.numerals_visible);
    }

    #[test]
    fn test_style_change_replaces_dial() {
        let mut state = state();
        assert!(!state.set_style(StyleConstants::default()));

        let style = StyleConstants {
            hide_numbers_threshold: 200.0,
            ..Default::default()
        };
        assert!(state.set_style(style));
        assert!(!state.dial.numerals_visible);
        assert_eq!(state.dial.radius.get(), 150.0);
    }
}
