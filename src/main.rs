mod config;
mod errors;
mod handlers;
mod initialization;
mod logging;
mod manager_openweather;

use std::sync::Arc;
use std::time::Duration;
use actix_web::{web, App, HttpServer};
use log::info;
use crate::errors::UnrecoverableError;
use crate::handlers::routes;
use crate::initialization::config;
use crate::manager_openweather::OpenWeather;

struct AppState {
    weather: Arc<OpenWeather>,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;

    let weather = Arc::new(OpenWeather::new(
        &config.weather_api.base_url,
        &config.weather_api.api_key,
        Duration::from_secs(config.weather_api.timeout_secs),
    )?);

    info!("listening on {}:{}", config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState { weather: weather.clone() }))
            .configure(routes)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
