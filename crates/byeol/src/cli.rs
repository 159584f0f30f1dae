//! Command line arguments.

use std::path::PathBuf;

use byeol_config::Overrides;
use byeol_core::{Theme, TimeFormat};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "byeol",
    version,
    about = "A terminal clock with timezones and a drifting particle background"
)]
pub struct Cli {
    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Zone to start in: "local" or an IANA name such as "Asia/Seoul"
    #[arg(short = 'z', long, value_name = "ZONE")]
    pub timezone: Option<String>,

    /// Start in 24-hour format
    #[arg(long = "24h", conflicts_with = "twelve_hour")]
    pub twenty_four_hour: bool,

    /// Start in 12-hour format
    #[arg(long = "12h")]
    pub twelve_hour: bool,

    /// Start with the dark theme
    #[arg(long, conflicts_with = "light")]
    pub dark: bool,

    /// Start with the light theme
    #[arg(long)]
    pub light: bool,

    /// Disable the particle background
    #[arg(long)]
    pub no_particles: bool,

    /// Particle animation frames per second
    #[arg(long, value_name = "N")]
    pub fps: Option<u32>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Config overrides for every flag that was given.
    pub fn overrides(&self) -> Overrides {
        let time_format = if self.twenty_four_hour {
            Some(TimeFormat::TwentyFourHour)
        } else if self.twelve_hour {
            Some(TimeFormat::TwelveHour)
        } else {
            None
        };
        let theme = if self.dark {
            Some(Theme::Dark)
        } else if self.light {
            Some(Theme::Light)
        } else {
            None
        };

        Overrides {
            time_format,
            timezone: self.timezone.clone(),
            theme,
            particles_enabled: self.no_particles.then_some(false),
            fps: self.fps,
            log_level: self.log_level.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_override_nothing() {
        let cli = Cli::try_parse_from(["byeol"]).unwrap();
        assert_eq!(cli.overrides(), Overrides::default());
    }

    #[test]
    fn test_flags_map_to_overrides() {
        let cli = Cli::try_parse_from([
            "byeol",
            "--24h",
            "--dark",
            "-z",
            "Asia/Seoul",
            "--no-particles",
            "--fps",
            "30",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.time_format, Some(TimeFormat::TwentyFourHour));
        assert_eq!(overrides.theme, Some(Theme::Dark));
        assert_eq!(overrides.timezone.as_deref(), Some("Asia/Seoul"));
        assert_eq!(overrides.particles_enabled, Some(false));
        assert_eq!(overrides.fps, Some(30));
    }

    #[test]
    fn test_conflicting_flags() {
        assert!(Cli::try_parse_from(["byeol", "--24h", "--12h"]).is_err());
        assert!(Cli::try_parse_from(["byeol", "--dark", "--light"]).is_err());
    }
}
