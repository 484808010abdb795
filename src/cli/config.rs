use anyhow::Result;
use fitmarket::config::Settings;

pub fn run(config_path: Option<&str>) -> Result<()> {
    let (settings, _gateway) = super::setup(config_path)?;

    println!("gateway_url:  {}", settings.gateway_url);
    println!(
        "api_token:    {}",
        if settings.api_token.is_some() { "set" } else { "not set" }
    );
    println!("timeout_secs: {}", settings.timeout_secs);
    println!("cache db:     {}", settings.db_path().display());
    if let Some(path) = Settings::default_path() {
        println!("config file:  {}", path.display());
    }

    Ok(())
}
