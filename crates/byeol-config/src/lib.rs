//! Configuration for the byeol clock application.
//!
//! Settings come from an optional TOML file and are then overridden by
//! command line flags. The file is only ever read; toggles made while the
//! clock runs are not written back.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{
    Config, DEFAULT_TIMEZONES, LogSettings, Overrides, ParticleSettings, default_config_path,
    default_log_dir,
};
