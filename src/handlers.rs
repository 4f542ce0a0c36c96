use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::json;
use crate::manager_openweather::errors::WeatherError;
use crate::AppState;

#[derive(Deserialize, Debug)]
struct Coordinates {
    lat: f64,
    lon: f64,
}

#[derive(Serialize)]
struct Detail {
    detail: String,
}

/// Registers all services together with the query error handling
///
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error))
        .service(weather)
        .service(gps)
        .service(health);
}

// lat=56.2233&lon=15.6584
#[get("/weather")]
async fn weather(params: web::Query<Coordinates>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    // Detached so that the upstream call runs to its end even if the caller goes away
    let ow = data.weather.clone();
    let (lat, lon) = (params.lat, params.lon);
    let result = match tokio::spawn(async move { ow.current_weather(lat, lon).await }).await {
        Ok(result) => result,
        Err(e) => Err(WeatherError::Request(e.to_string())),
    };

    match result {
        Ok(reading) => HttpResponse::Ok().json(reading),
        Err(WeatherError::Request(e)) => {
            error!("weather request failed: {}", e);
            HttpResponse::InternalServerError().json(Detail {
                detail: format!("Weather API request failed: {}", e),
            })
        },
        Err(WeatherError::Format(e)) => {
            error!("unexpected weather response: {}", e);
            HttpResponse::InternalServerError().json(Detail {
                detail: "Unexpected response format from weather API".to_string(),
            })
        },
    }
}

#[get("/gps")]
async fn gps() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Send lat/lon from frontend; backend does not generate GPS itself"
    }))
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "message": "Smart Farming backend is running!"
    }))
}

/// Turns missing or malformed query parameters into a 422 with a detail message
///
fn query_error(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    error!("bad query for {}: {}", req.path(), detail);

    InternalError::from_response(err, HttpResponse::UnprocessableEntity().json(Detail { detail })).into()
}
