//! Error types for the clock core.

use thiserror::Error;

/// Errors raised while applying clock preferences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    /// The timezone is neither `local` nor a known IANA identifier.
    #[error("invalid timezone `{0}`: expected \"local\" or an IANA zone such as \"Asia/Seoul\"")]
    InvalidTimezone(String),
}
