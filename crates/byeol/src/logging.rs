//! File logging.
//!
//! The terminal belongs to the clock face, so log records go to a rotating
//! file under the platform data directory.

use std::fs;
use std::path::Path;

use byeol_config::LogSettings;
use color_eyre::eyre::{WrapErr, eyre};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;

const LOG_FILE_BASENAME: &str = "byeol";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Start logging into `log_dir`. The returned handle must be kept alive
/// for buffered records to be flushed.
pub fn init(settings: &LogSettings, log_dir: &Path) -> color_eyre::Result<Option<LoggerHandle>> {
    if !settings.enabled {
        return Ok(None);
    }
    let level = normalize_level(&settings.level)?;

    fs::create_dir_all(log_dir)
        .wrap_err_with(|| format!("failed to create log directory `{}`", log_dir.display()))?;

    let handle = Logger::try_with_str(level)?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .wrap_err("failed to start logger")?;

    info!(
        "event=logging_ready level={level} dir={} version={}",
        log_dir.display(),
        env!("CARGO_PKG_VERSION")
    );
    Ok(Some(handle))
}

fn normalize_level(level: &str) -> color_eyre::Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(eyre!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_level() {
        assert_eq!(normalize_level("INFO").unwrap(), "info");
        assert_eq!(normalize_level(" warning ").unwrap(), "warn");
        assert!(normalize_level("loud").is_err());
    }

    #[test]
    fn test_disabled_logging_is_a_no_op() {
        let settings = LogSettings {
            enabled: false,
            level: "nonsense".into(),
        };
        let dir = std::env::temp_dir().join("byeol-logging-disabled");
        assert!(init(&settings, &dir).unwrap().is_none());
        assert!(!dir.exists());
    }
}
