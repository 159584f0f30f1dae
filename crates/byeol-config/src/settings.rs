//! Config file schema, loading and command line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use byeol_core::{DisplayPreferences, Theme, TimeFormat, TimezoneChoice};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::ConfigError;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Highest accepted particle frame rate.
const MAX_FPS: u32 = 240;

/// Zones offered by the selector when the config file lists none.
pub const DEFAULT_TIMEZONES: &[&str] = &[
    "local",
    "UTC",
    "America/New_York",
    "America/Los_Angeles",
    "Europe/London",
    "Europe/Paris",
    "Asia/Kolkata",
    "Asia/Seoul",
    "Asia/Tokyo",
    "Australia/Sydney",
];

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "byeol")
}

/// `config.toml` inside the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Directory for rotated log files.
pub fn default_log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join("logs"))
}

/// Particle background settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
    pub enabled: bool,
    /// Animation frames per second.
    pub fps: u32,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            fps: 60,
        }
    }
}

/// File logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub enabled: bool,
    /// One of trace, debug, info, warn, error.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".into(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub time_format: TimeFormat,
    /// `local` or an IANA zone.
    pub timezone: String,
    pub theme: Theme,
    /// Zones the selector cycles through.
    pub timezones: Vec<String>,
    pub particles: ParticleSettings,
    pub log: LogSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_format: TimeFormat::default(),
            timezone: TimezoneChoice::LOCAL.into(),
            theme: Theme::default(),
            timezones: DEFAULT_TIMEZONES.iter().map(|s| s.to_string()).collect(),
            particles: ParticleSettings::default(),
            log: LogSettings::default(),
        }
    }
}

/// Values given on the command line. `None` keeps the file's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub time_format: Option<TimeFormat>,
    pub timezone: Option<String>,
    pub theme: Option<Theme>,
    pub particles_enabled: Option<bool>,
    pub fps: Option<u32>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load the config file.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::read(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    /// Parse TOML `contents`; `path` is only used in error messages.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply command line overrides on top of the file values.
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(format) = overrides.time_format {
            self.time_format = format;
        }
        if let Some(timezone) = overrides.timezone {
            self.timezone = timezone;
        }
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        if let Some(enabled) = overrides.particles_enabled {
            self.particles.enabled = enabled;
        }
        if let Some(fps) = overrides.fps {
            self.particles.fps = fps;
        }
        if let Some(level) = overrides.log_level {
            self.log.level = level;
        }
    }

    /// Check every value that can only be rejected at runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timezone.parse::<TimezoneChoice>()?;
        for zone in &self.timezones {
            zone.parse::<TimezoneChoice>()?;
        }
        if self.particles.fps == 0 || self.particles.fps > MAX_FPS {
            return Err(ConfigError::FrameRate {
                fps: self.particles.fps,
                max: MAX_FPS,
            });
        }
        Ok(())
    }

    /// Starting display preferences.
    pub fn preferences(&self) -> Result<DisplayPreferences, ConfigError> {
        Ok(DisplayPreferences {
            time_format: self.time_format,
            timezone: self.timezone.parse()?,
            theme: self.theme,
        })
    }

    /// Parsed selector entries, with the starting zone guaranteed present
    /// and duplicates removed.
    pub fn timezone_choices(&self) -> Result<Vec<TimezoneChoice>, ConfigError> {
        let mut choices: Vec<TimezoneChoice> = Vec::with_capacity(self.timezones.len() + 1);
        let initial: TimezoneChoice = self.timezone.parse()?;
        for zone in &self.timezones {
            let choice: TimezoneChoice = zone.parse()?;
            if !choices.contains(&choice) {
                choices.push(choice);
            }
        }
        if !choices.contains(&initial) {
            choices.insert(0, initial);
        }
        Ok(choices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> Config {
        Config::parse(contents, Path::new("test.toml")).unwrap()
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(parse(""), Config::default());
    }

    #[test]
    fn test_partial_file() {
        let config = parse(
            r#"
            time_format = "24h"
            theme = "dark"
            timezone = "Asia/Seoul"

            [particles]
            fps = 30
            "#,
        );
        assert_eq!(config.time_format, TimeFormat::TwentyFourHour);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.timezone, "Asia/Seoul");
        assert_eq!(config.particles.fps, 30);
        assert!(config.particles.enabled);
        assert_eq!(config.log, LogSettings::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_toml_is_a_parse_error() {
        let err = Config::parse("time_format = \"13h\"", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_unknown_timezone_is_rejected() {
        let config = parse(r#"timezones = ["UTC", "Nowhere/Atlantis"]"#);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Timezone(_))
        ));
    }

    #[test]
    fn test_frame_rate_bounds() {
        let mut config = Config::default();
        config.particles.fps = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FrameRate { fps: 0, .. })
        ));
        config.particles.fps = MAX_FPS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_win() {
        let mut config = parse(r#"theme = "dark""#);
        config.apply(Overrides {
            time_format: Some(TimeFormat::TwentyFourHour),
            theme: Some(Theme::Light),
            timezone: Some("Europe/Paris".into()),
            particles_enabled: Some(false),
            ..Default::default()
        });
        assert_eq!(config.theme, Theme::Light);
        assert!(!config.particles.enabled);

        let prefs = config.preferences().unwrap();
        assert_eq!(prefs.time_format, TimeFormat::TwentyFourHour);
        assert_eq!(prefs.timezone.to_string(), "Europe/Paris");
    }

    #[test]
    fn test_timezone_choices_include_initial_zone() {
        let config = parse(
            r#"
            timezone = "Asia/Tokyo"
            timezones = ["local", "UTC", "UTC"]
            "#,
        );
        let choices = config.timezone_choices().unwrap();
        let names: Vec<String> = choices.iter().map(|c| c.to_string()).collect();
        assert_eq!(names, ["Asia/Tokyo", "local", "UTC"]);
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Read { ref source, .. } if source.kind() == std::io::ErrorKind::NotFound
        ));
    }
}
