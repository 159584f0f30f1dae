//! User-facing display preferences.

use std::fmt;
use std::str::FromStr;

use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::ClockError;

/// Time format for the clock display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl TimeFormat {
    /// Toggle between 12-hour and 24-hour format.
    pub fn toggle(self) -> Self {
        match self {
            TimeFormat::TwelveHour => TimeFormat::TwentyFourHour,
            TimeFormat::TwentyFourHour => TimeFormat::TwelveHour,
        }
    }

    pub fn is_24_hour(self) -> bool {
        self == TimeFormat::TwentyFourHour
    }

    /// Label for the control that switches away from this format.
    pub fn toggle_label(self) -> &'static str {
        match self {
            TimeFormat::TwelveHour => "Switch to 24-Hour",
            TimeFormat::TwentyFourHour => "Switch to 12-Hour",
        }
    }
}

/// Color theme for the whole screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Toggle between light and dark.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Label for the control that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }
}

/// Which zone the clock renders in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimezoneChoice {
    /// Whatever zone the host system is configured with.
    #[default]
    Local,
    /// An explicit IANA zone.
    Named(Tz),
}

impl TimezoneChoice {
    /// Sentinel accepted by [`FromStr`] for the host zone.
    pub const LOCAL: &'static str = "local";

    /// Human readable label shown next to the clock.
    pub fn label(&self) -> &'static str {
        match self {
            TimezoneChoice::Local => "Local time",
            TimezoneChoice::Named(tz) => tz.name(),
        }
    }
}

impl FromStr for TimezoneChoice {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == Self::LOCAL {
            return Ok(TimezoneChoice::Local);
        }
        trimmed
            .parse::<Tz>()
            .map(TimezoneChoice::Named)
            .map_err(|_| ClockError::InvalidTimezone(s.to_string()))
    }
}

impl fmt::Display for TimezoneChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimezoneChoice::Local => f.write_str(Self::LOCAL),
            TimezoneChoice::Named(tz) => f.write_str(tz.name()),
        }
    }
}

/// Display state toggled by the user. Never persisted; every run starts
/// from the configured defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayPreferences {
    pub time_format: TimeFormat,
    pub timezone: TimezoneChoice,
    pub theme: Theme,
}
