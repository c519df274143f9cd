//! Weather record handlers.
//!
//! ```text
//! POST /weather/{city}
//! GET  /weather
//! ```

use actix_web::{HttpResponse, get, post, web};
use tracing::info;
use weather_core::{NewWeatherRecord, WeatherRecord};

use crate::error::{ApiError, ErrorBody, UpstreamErrorBody};
use crate::state::AppState;

/// Register the weather routes on an app or scope.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_weather_record).service(list_weather_records);
}

/// Fetch current weather for a city and store it.
///
/// Makes exactly one provider call; a row is written only when it succeeds.
#[utoipa::path(
    post,
    path = "/weather/{city}",
    tag = "Weather",
    params(("city" = String, Path, description = "City name, as understood by OpenWeather")),
    responses(
        (status = 201, description = "Weather record stored", body = WeatherRecord),
        (status = 400, description = "OpenWeather API key is not configured", body = ErrorBody),
        (status = 404, description = "City unknown to the provider (any provider status is forwarded)", body = UpstreamErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    operation_id = "createWeatherRecord"
)]
#[post("/weather/{city}")]
pub async fn create_weather_record(
    state: web::Data<AppState>,
    city: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let city = city.into_inner();
    let provider = state.provider().ok_or_else(ApiError::missing_api_key)?;

    let observation = provider.current_weather(&city).await?;
    let record = NewWeatherRecord::from_observation(&city, &observation)?;
    let stored = state.store().insert(&record).await?;

    info!(id = stored.id, city = %stored.city, "weather record stored");
    Ok(HttpResponse::Created().json(stored))
}

/// List every stored record, most recent first.
#[utoipa::path(
    get,
    path = "/weather",
    tag = "Weather",
    responses(
        (status = 200, description = "Weather records, newest first", body = [WeatherRecord]),
        (status = 500, description = "Database query failed", body = ErrorBody)
    ),
    operation_id = "listWeatherRecords"
)]
#[get("/weather")]
pub async fn list_weather_records(
    state: web::Data<AppState>,
) -> Result<web::Json<Vec<WeatherRecord>>, ApiError> {
    let records = state.store().list_recent_first().await?;
    Ok(web::Json(records))
}
