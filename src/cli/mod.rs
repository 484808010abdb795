pub mod config;
pub mod dashboard;
pub mod feed;
pub mod invite;
pub mod programs;

use std::path::Path;

use anyhow::{Context, Result};
use fitmarket::config::Settings;
use fitmarket::gateway::HttpGateway;

/// Load settings and build the HTTP gateway for a command.
pub fn setup(config_path: Option<&str>) -> Result<(Settings, HttpGateway)> {
    let settings =
        Settings::load(config_path.map(Path::new)).context("Failed to load configuration")?;
    let gateway = HttpGateway::from_settings(&settings);
    Ok((settings, gateway))
}
