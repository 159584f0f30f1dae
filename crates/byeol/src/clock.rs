//! Clock state: preferences, the values on screen and the timers that
//! refresh them.

use std::time::{Duration, Instant};

use byeol_core::{
    DelayedAction, DisplayPreferences, SystemTimeSource, Theme, Ticker, TimeFormat, TimeSource,
    TimezoneChoice, next_wakeup, render_time,
};
use log::{debug, info};

/// Time between clock ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// How long a changed field stays highlighted.
pub const MARKER_DURATION: Duration = Duration::from_millis(500);

/// The three numeric fields of the clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Hours,
    Minutes,
    Seconds,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Hours, Field::Minutes, Field::Seconds];
}

/// Text of one field plus its transient "updated" marker.
#[derive(Debug, Clone, Default)]
pub struct DisplayField {
    pub text: String,
    pub updated: bool,
    clear_marker: DelayedAction,
}

impl DisplayField {
    /// Replace the text if it changed, highlighting the field and
    /// rescheduling the highlight's removal. Returns true on change.
    fn set(&mut self, text: String, now: Instant) -> bool {
        if self.text == text {
            return false;
        }
        self.text = text;
        self.updated = true;
        self.clear_marker.schedule(now, MARKER_DURATION);
        true
    }

    fn poll_marker(&mut self, now: Instant) -> bool {
        if self.clear_marker.take_if_due(now) {
            self.updated = false;
            return true;
        }
        false
    }

    pub fn marker_deadline(&self) -> Option<Instant> {
        self.clear_marker.deadline()
    }
}

#[cfg(test)]
impl DisplayField {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }
}

/// Everything the UI shows that the controller writes.
#[derive(Debug, Clone)]
pub struct ClockDisplay {
    pub hours: DisplayField,
    pub minutes: DisplayField,
    pub seconds: DisplayField,
    /// Empty in 24-hour mode.
    pub meridiem: &'static str,
    pub format_label: &'static str,
    pub theme_label: &'static str,
    pub dark: bool,
    pub zone_label: &'static str,
}

impl ClockDisplay {
    fn new(prefs: &DisplayPreferences) -> Self {
        Self {
            hours: DisplayField::default(),
            minutes: DisplayField::default(),
            seconds: DisplayField::default(),
            meridiem: "",
            format_label: prefs.time_format.toggle_label(),
            theme_label: prefs.theme.toggle_label(),
            dark: prefs.theme.is_dark(),
            zone_label: prefs.timezone.label(),
        }
    }

    pub fn field(&self, field: Field) -> &DisplayField {
        match field {
            Field::Hours => &self.hours,
            Field::Minutes => &self.minutes,
            Field::Seconds => &self.seconds,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut DisplayField {
        match field {
            Field::Hours => &mut self.hours,
            Field::Minutes => &mut self.minutes,
            Field::Seconds => &mut self.seconds,
        }
    }
}

/// Owns the display preferences and keeps [`ClockDisplay`] in sync with
/// the current time.
#[derive(Debug)]
pub struct ClockController<T = SystemTimeSource> {
    prefs: DisplayPreferences,
    /// Zones offered by the selector, in cycling order.
    zones: Vec<TimezoneChoice>,
    display: ClockDisplay,
    ticker: Ticker,
    source: T,
}

impl<T: TimeSource> ClockController<T> {
    /// Create the controller and render the first tick immediately.
    pub fn new(
        prefs: DisplayPreferences,
        zones: Vec<TimezoneChoice>,
        source: T,
        now: Instant,
    ) -> Self {
        let mut controller = Self {
            display: ClockDisplay::new(&prefs),
            prefs,
            zones,
            ticker: Ticker::new(TICK_PERIOD, now),
            source,
        };
        controller.tick(now);
        controller
    }

    pub fn prefs(&self) -> &DisplayPreferences {
        &self.prefs
    }

    pub fn display(&self) -> &ClockDisplay {
        &self.display
    }

    /// Read the time source and write the formatted time to the display.
    pub fn tick(&mut self, now: Instant) {
        let rendered = render_time(
            self.source.now(),
            self.prefs.time_format,
            self.prefs.timezone,
        );
        self.display.meridiem = rendered.meridiem;

        let values = [rendered.hours, rendered.minutes, rendered.seconds];
        for (field, text) in Field::ALL.into_iter().zip(values) {
            self.display.field_mut(field).set(text, now);
        }
    }

    /// Run whatever is due at `now`: expired markers, then the clock tick.
    /// Returns true when the display changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = self.poll_markers(now);
        if self.ticker.fire(now) {
            self.tick(now);
            changed = true;
        }
        changed
    }

    /// Clear every marker whose delay has elapsed.
    pub fn poll_markers(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for field in Field::ALL {
            changed |= self.display.field_mut(field).poll_marker(now);
        }
        changed
    }

    /// Earliest instant at which [`Self::poll`] has work to do.
    pub fn next_deadline(&self) -> Instant {
        let markers = Field::ALL.map(|f| self.display.field(f).marker_deadline());
        next_wakeup(markers.into_iter().chain([Some(self.ticker.deadline())]))
            .unwrap_or_else(|| self.ticker.deadline())
    }

    pub fn set_format(&mut self, format: TimeFormat, now: Instant) {
        self.prefs.time_format = format;
        self.display.format_label = format.toggle_label();
        info!("event=format_changed format={format:?}");
        self.tick(now);
    }

    pub fn toggle_format(&mut self, now: Instant) {
        self.set_format(self.prefs.time_format.toggle(), now);
    }

    pub fn set_timezone(&mut self, zone: TimezoneChoice, now: Instant) {
        self.prefs.timezone = zone;
        self.display.zone_label = zone.label();
        info!("event=timezone_changed zone={zone}");
        self.tick(now);
    }

    /// Select the next zone of the selector list, wrapping around.
    pub fn next_timezone(&mut self, now: Instant) {
        self.step_timezone(1, now);
    }

    /// Select the previous zone of the selector list, wrapping around.
    pub fn previous_timezone(&mut self, now: Instant) {
        self.step_timezone(-1, now);
    }

    fn step_timezone(&mut self, delta: isize, now: Instant) {
        if self.zones.is_empty() {
            return;
        }
        let len = self.zones.len() as isize;
        let next = match self.zones.iter().position(|z| *z == self.prefs.timezone) {
            Some(current) => (current as isize + delta).rem_euclid(len),
            None => 0,
        };
        self.set_timezone(self.zones[next as usize], now);
    }

    /// Switch theme. The time itself does not need re-rendering.
    pub fn set_theme(&mut self, theme: Theme) {
        self.prefs.theme = theme;
        self.display.dark = theme.is_dark();
        self.display.theme_label = theme.toggle_label();
        debug!("event=theme_changed theme={theme:?}");
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.prefs.theme.toggle());
    }
}
