//! Configuration errors.

use std::io;
use std::path::PathBuf;

use byeol_core::ClockError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file `{path}`")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Timezone(#[from] ClockError),

    #[error("particle frame rate must be between 1 and {max}, got {fps}")]
    FrameRate { fps: u32, max: u32 },
}
