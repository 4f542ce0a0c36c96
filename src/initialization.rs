use std::env;
use log::info;
use crate::config::{load_config, Config};
use crate::errors::ConfigError;
use crate::logging::setup_logger;

/// Resolves and loads configuration, starts logging and returns the configuration
///
/// The configuration file is taken from `SMARTFARMING_CONFIG` (default `config.toml`) and the
/// OpenWeather api key in it may be overridden by `OPENWEATHER_API_KEY`.
pub fn config() -> Result<Config, ConfigError> {
    let config_path = env::var("SMARTFARMING_CONFIG").unwrap_or("config.toml".to_string());

    let mut config = load_config(&config_path)?;
    config.weather_api.api_key = resolve_api_key(
        &config.weather_api.api_key,
        env::var("OPENWEATHER_API_KEY").ok(),
    )?;

    setup_logger(&config.general)?;

    // Print version
    println!("smartfarming version: {}", env!("CARGO_PKG_VERSION"));
    info!("Smart Farming Backend starting, config from {}", config_path);

    Ok(config)
}

/// Picks the api key from environment if given, otherwise from the configuration file
///
/// # Arguments
///
/// * 'from_file' - api key as given in the configuration file
/// * 'from_env' - api key as given in the environment, if any
fn resolve_api_key(from_file: &str, from_env: Option<String>) -> Result<String, ConfigError> {
    let api_key = match from_env {
        Some(key) if !key.trim().is_empty() => key.trim().to_string(),
        _ => from_file.trim().to_string(),
    };

    if api_key.is_empty() {
        Err(ConfigError::from("no OpenWeather api key given in config or OPENWEATHER_API_KEY"))
    } else {
        Ok(api_key)
    }
}
