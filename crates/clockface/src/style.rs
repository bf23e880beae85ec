use serde::{Deserialize, Serialize};
use strum::Display as StrumDisplay;
use thiserror::Error;

/// Which palette entry a primitive is painted with. The core only names the
/// role; the rendering surface decides the concrete color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, StrumDisplay)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ColorRole {
    Primary,
    Secondary,
    HourHand,
    MinuteHand,
    SecondHand,
}

/// A size proportional to the radius with a pixel floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scaled {
    pub ratio: f64,
    pub min: f64,
}

impl Scaled {
    pub const fn new(ratio: f64, min: f64) -> Self {
        Self { ratio, min }
    }

    pub fn at(&self, radius: f64) -> f64 {
        self.at_scaled(radius, 1.0)
    }

    pub fn at_scaled(&self, radius: f64, scale: f64) -> f64 {
        (radius * self.ratio * scale).max(self.min)
    }
}

/// Length and width of a stroked primitive (a tick or a hand).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub length: Scaled,
    pub width: Scaled,
}

impl StrokeStyle {
    pub const fn new(length: Scaled, width: Scaled) -> Self {
        Self { length, width }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConstants {
    /// Below this radius numerals are hidden and ticks are enlarged.
    pub hide_numbers_threshold: f64,
    /// Tick multiplier used below `hide_numbers_threshold`.
    pub small_clock_scale: f64,
    pub dial_stroke: Scaled,
    pub hour_tick: StrokeStyle,
    pub minute_tick: StrokeStyle,
    pub numeral_font: Scaled,
    pub numeral_offset_ratio: f64,
    pub hour_hand: StrokeStyle,
    pub minute_hand: StrokeStyle,
    pub second_hand: StrokeStyle,
    pub pin: Scaled,
}

impl Default for StyleConstants {
    fn default() -> Self {
        Self {
            hide_numbers_threshold: 75.0,
            small_clock_scale: 1.5,
            dial_stroke: Scaled::new(0.015, 1.0),
            hour_tick: StrokeStyle::new(Scaled::new(0.1, 4.0), Scaled::new(0.02, 1.5)),
            minute_tick: StrokeStyle::new(Scaled::new(0.05, 2.0), Scaled::new(0.007, 0.5)),
            numeral_font: Scaled::new(0.15, 8.0),
            numeral_offset_ratio: 0.75,
            hour_hand: StrokeStyle::new(Scaled::new(0.5, 3.0), Scaled::new(0.02, 2.0)),
            minute_hand: StrokeStyle::new(Scaled::new(0.7, 4.0), Scaled::new(0.015, 1.5)),
            second_hand: StrokeStyle::new(Scaled::new(0.8, 4.5), Scaled::new(0.007, 0.7)),
            pin: Scaled::new(0.03, 3.0),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum StyleError {
    #[error("Style value `{field}` must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("small_clock_scale must be at least 1.0, got {0}")]
    ScaleBelowOne(f64),
    #[error("Hour ticks must be strictly longer and wider than minute ticks")]
    TickOrdering,
}

impl StyleConstants {
    fn named_values(&self) -> [(&'static str, f64); 29] {
        [
            ("hide_numbers_threshold", self.hide_numbers_threshold),
            ("small_clock_scale", self.small_clock_scale),
            ("dial_stroke.ratio", self.dial_stroke.ratio),
            ("dial_stroke.min", self.dial_stroke.min),
            ("hour_tick.length.ratio", self.hour_tick.length.ratio),
            ("hour_tick.length.min", self.hour_tick.length.min),
            ("hour_tick.width.ratio", self.hour_tick.width.ratio),
            ("hour_tick.width.min", self.hour_tick.width.min),
            ("minute_tick.length.ratio", self.minute_tick.length.ratio),
            ("minute_tick.length.min", self.minute_tick.length.min),
            ("minute_tick.width.ratio", self.minute_tick.width.ratio),
            ("minute_tick.width.min", self.minute_tick.width.min),
            ("numeral_font.ratio", self.numeral_font.ratio),
            ("numeral_font.min", self.numeral_font.min),
            ("numeral_offset_ratio", self.numeral_offset_ratio),
            ("hour_hand.length.ratio", self.hour_hand.length.ratio),
            ("hour_hand.length.min", self.hour_hand.length.min),
            ("hour_hand.width.ratio", self.hour_hand.width.ratio),
            ("hour_hand.width.min", self.hour_hand.width.min),
            ("minute_hand.length.ratio", self.minute_hand.length.ratio),
            ("minute_hand.length.min", self.minute_hand.length.min),
            ("minute_hand.width.ratio", self.minute_hand.width.ratio),
            ("minute_hand.width.min", self.minute_hand.width.min),
            ("second_hand.length.ratio", self.second_hand.length.ratio),
            ("second_hand.length.min", self.second_hand.length.min),
            ("second_hand.width.ratio", self.second_hand.width.ratio),
            ("second_hand.width.min", self.second_hand.width.min),
            ("pin.ratio", self.pin.ratio),
            ("pin.min", self.pin.min),
        ]
    }

    /// Rejects styles the layout engine cannot honour: zero, negative or
    /// non-finite sizes, a shrinking small-clock scale, or hour ticks that do
    /// not dominate minute ticks.
    pub fn validate(&self) -> Result<(), StyleError> {
        if let Some((field, value)) = self
            .named_values()
            .into_iter()
            .find(|(_, v)| !(v.is_finite() && *v > 0.0))
        {
            return Err(StyleError::NotPositive { field, value });
        }

        if self.small_clock_scale < 1.0 {
            return Err(StyleError::ScaleBelowOne(self.small_clock_scale));
        }

        let (hour, minute) = (&self.hour_tick, &self.minute_tick);
        let dominates = hour.length.ratio > minute.length.ratio
            && hour.length.min > minute.length.min
            && hour.width.ratio > minute.width.ratio
            && hour.width.min > minute.width.min;
        if !dominates {
            return Err(StyleError::TickOrdering);
        }

        Ok(())
    }
}
