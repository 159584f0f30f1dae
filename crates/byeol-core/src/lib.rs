//! Core types for the byeol clock application.
//!
//! Holds the display preferences, the time formatting rules shared by the
//! clock view, and the small scheduling primitives that drive the
//! once-per-second clock tick and the per-frame particle animation.

mod error;
mod prefs;
mod schedule;
mod time;

pub use error::ClockError;
pub use prefs::{DisplayPreferences, Theme, TimeFormat, TimezoneChoice};
pub use schedule::{DelayedAction, FrameSource, Ticker, next_wakeup};
pub use time::{
    Meridiem, RenderedTime, SystemTimeSource, TimeSource, pad_number, render_time, to_twelve_hour,
};
