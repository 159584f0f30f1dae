//! Turning an instant into the strings shown on the clock face.

use chrono::{DateTime, Local, Timelike, Utc};

use crate::prefs::{TimeFormat, TimezoneChoice};

/// Source of the current instant.
pub trait TimeSource {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the host system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Ante or post meridiem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

/// Hour, minute and second as they appear on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTime {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    /// `"AM"`/`"PM"` in 12-hour mode, empty in 24-hour mode.
    pub meridiem: &'static str,
}

impl RenderedTime {
    /// Build the display strings from a wall-clock hour (0-23), minute and second.
    pub fn from_hms(hour: u32, minute: u32, second: u32, format: TimeFormat) -> Self {
        let (display_hour, meridiem) = match format {
            TimeFormat::TwentyFourHour => (hour, ""),
            TimeFormat::TwelveHour => {
                let (h, m) = to_twelve_hour(hour);
                (h, m.as_str())
            }
        };

        Self {
            hours: pad_number(display_hour),
            minutes: pad_number(minute),
            seconds: pad_number(second),
            meridiem,
        }
    }
}

/// Left-pad a number with a zero to two characters.
pub fn pad_number(n: u32) -> String {
    format!("{n:02}")
}

/// Convert a 0-23 hour into a 1-12 hour plus meridiem.
pub fn to_twelve_hour(hour: u32) -> (u32, Meridiem) {
    let meridiem = if hour < 12 { Meridiem::Am } else { Meridiem::Pm };
    match hour % 12 {
        0 => (12, meridiem),
        h => (h, meridiem),
    }
}

/// Render `instant` in the requested zone and format.
pub fn render_time(
    instant: DateTime<Utc>,
    format: TimeFormat,
    zone: TimezoneChoice,
) -> RenderedTime {
    let (hour, minute, second) = match zone {
        TimezoneChoice::Local => {
            let t = instant.with_timezone(&Local);
            (t.hour(), t.minute(), t.second())
        }
        TimezoneChoice::Named(tz) => {
            let t = instant.with_timezone(&tz);
            (t.hour(), t.minute(), t.second())
        }
    };
    RenderedTime::from_hms(hour, minute, second, format)
}
