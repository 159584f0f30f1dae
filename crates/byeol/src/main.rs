mod app;
mod cli;
mod clock;
mod logging;
mod ui;

use std::time::Instant;

use byeol_config::{Config, default_log_dir};
use clap::Parser;
use log::{error, info};

use crate::app::App;
use crate::cli::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply(cli.overrides());

    let _logger = match default_log_dir() {
        Some(dir) => logging::init(&config.log, &dir)?,
        None => None,
    };
    info!("event=config_loaded path={:?}", cli.config);
    if let Err(err) = config.validate() {
        error!("event=config_invalid error={err}");
        return Err(err.into());
    }

    let app = App::new(&config, Instant::now())?;
    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}
