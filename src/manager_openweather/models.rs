use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Deserialize)]
pub struct Main {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: Number,
    pub pressure: Number,
}

#[derive(Deserialize)]
pub struct Wind {
    pub speed: f64,
}

#[derive(Deserialize)]
pub struct Condition {
    pub description: String,
}

#[derive(Deserialize)]
pub struct Sys {
    pub country: Option<String>,
}

#[derive(Deserialize)]
pub struct FullWeather {
    pub main: Main,
    pub wind: Wind,
    pub weather: Vec<Condition>,
    pub name: Option<String>,
    pub sys: Option<Sys>,
}

/// Simplified current weather as handed out by the `/weather` endpoint
///
/// Humidity and pressure keep whatever number form OpenWeather used, integer or fractional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: Number,
    pub pressure: Number,
    pub wind_speed: f64,
    pub description: String,
    pub city: String,
    pub country: String,
}
