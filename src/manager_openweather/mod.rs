pub mod errors;
pub mod models;

use std::time::Duration;
use log::info;
use reqwest::Client;
use serde_json::Value;
use crate::manager_openweather::errors::WeatherError;
use crate::manager_openweather::models::{FullWeather, WeatherReading};


/// Struct for fetching current weather from OpenWeather
pub struct OpenWeather {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeather {
    /// Returns an OpenWeather struct ready for fetching current weather
    ///
    /// # Arguments
    ///
    /// * 'base_url' - url to the current weather endpoint
    /// * 'api_key' - OpenWeather access credential
    /// * 'timeout' - max time to wait for a complete response
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<OpenWeather, WeatherError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Retrieves current weather for the given coordinates in metric units.
    /// Coordinates are passed on as is, OpenWeather decides what to make of them.
    ///
    /// Transport problems, non-success statuses and bodies that aren't json at all end up
    /// as `WeatherError::Request`, while json missing any of the mapped fields gives
    /// `WeatherError::Format`. City and country are optional and default to empty strings.
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude of the location
    /// * 'lon' - longitude of the location
    pub async fn current_weather(&self, lat: f64, lon: f64) -> Result<WeatherReading, WeatherError> {
        let req = self.client
            .get(&self.base_url)
            .query(&[("lat", lat), ("lon", lon)])
            .query(&[("appid", self.api_key.as_str()), ("units", "metric")])
            .send().await?
            .error_for_status()?;

        let body = req.text().await?;
        let json: Value = serde_json::from_str(&body)
            .map_err(|e| WeatherError::Request(e.to_string()))?;

        let full: FullWeather = serde_json::from_value(json)
            .map_err(|e| WeatherError::Format(e.to_string()))?;

        let description = full.weather
            .into_iter()
            .next()
            .map(|c| c.description)
            .ok_or_else(|| WeatherError::Format("empty weather list".to_string()))?;

        let reading = WeatherReading {
            temp: full.main.temp,
            feels_like: full.main.feels_like,
            temp_min: full.main.temp_min,
            temp_max: full.main.temp_max,
            humidity: full.main.humidity,
            pressure: full.main.pressure,
            wind_speed: full.wind.speed,
            description,
            city: full.name.unwrap_or_default(),
            country: full.sys.and_then(|s| s.country).unwrap_or_default(),
        };
        info!("weather at {}/{}: {:?}", lat, lon, reading);

        Ok(reading)
    }
}
