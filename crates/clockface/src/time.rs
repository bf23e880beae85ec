use crate::geometry::Degrees;
use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Local wall-clock time reduced to what the dial shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WallClockSample {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl WallClockSample {
    /// Builds a sample without validating it. Callers own the input range:
    /// hour in `0..24`, minute and second in `0..60`.
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        debug_assert!(hour < 24 && minute < 60 && second < 60);
        Self {
            hour,
            minute,
            second,
        }
    }

    pub fn from_time<T: Timelike>(time: &T) -> Self {
        // Leap seconds surface as second 59 with a nanosecond overflow, so
        // `second()` already stays below 60.
        Self::new(time.hour(), time.minute(), time.second())
    }

    pub fn now() -> Self {
        Self::from_time(&Local::now())
    }

    /// Hour label as printed on a 12-hour face (`0` and `12` both read 12).
    pub fn display_hour(&self) -> u32 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    pub fn meridiem(&self) -> &'static str {
        if self.hour < 12 { "AM" } else { "PM" }
    }
}

/// The digital readout: `h:mm:ss AM`, hour without padding.
impl fmt::Display for WallClockSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02}:{:02} {}",
            self.display_hour(),
            self.minute,
            self.second,
            self.meridiem()
        )
    }
}

/// Hand rotations, clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct HandAngles {
    pub hour: Degrees,
    pub minute: Degrees,
    pub second: Degrees,
}

/// Translates a sample into hand angles.
///
/// The hour hand creeps with the minute and the minute hand creeps with the
/// second; the second hand moves in whole steps. The hour term uses
/// `hour % 12` as is, so midnight and noon both sit at 0°.
pub fn compute_hand_angles(sample: WallClockSample) -> HandAngles {
    let hour = f64::from(sample.hour % 12);
    let minute = f64::from(sample.minute);
    let second = f64::from(sample.second);

    HandAngles {
        hour: Degrees::new(hour * 360.0 / 12.0 + minute * 30.0 / 60.0),
        minute: Degrees::new(minute * 360.0 / 60.0 + second * 6.0 / 60.0),
        second: Degrees::new(second * 360.0 / 60.0),
    }
}
