use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Longest description the `weather_data` table accepts.
pub const MAX_DESCRIPTION_CHARS: usize = 255;

/// Fractional digits kept for temperatures.
const TEMPERATURE_SCALE: u32 = 2;

/// Current conditions as reported by a weather provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub description: Option<String>,
}

/// A row about to be appended to `weather_data`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWeatherRecord {
    pub city: String,
    pub temperature: Decimal,
    pub feels_like: Decimal,
    pub humidity: i32,
    pub description: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RecordError {
    #[error("{field} is not a finite number: {value}")]
    NonFinite { field: &'static str, value: f64 },
}

impl NewWeatherRecord {
    /// Shape a provider observation into a storable row.
    ///
    /// The city is lowercased, temperatures are rounded to two decimals and
    /// the description is cut to [`MAX_DESCRIPTION_CHARS`].
    pub fn from_observation(city: &str, observation: &CurrentWeather) -> Result<Self, RecordError> {
        Ok(Self {
            city: city.to_lowercase(),
            temperature: to_decimal("temperature", observation.temperature_c)?,
            feels_like: to_decimal("feels_like", observation.feels_like_c)?,
            humidity: i32::from(observation.humidity_pct),
            description: observation
                .description
                .as_deref()
                .map(|d| d.chars().take(MAX_DESCRIPTION_CHARS).collect()),
        })
    }
}

fn to_decimal(field: &'static str, value: f64) -> Result<Decimal, RecordError> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp(TEMPERATURE_SCALE))
        .ok_or(RecordError::NonFinite { field, value })
}

/// A stored weather observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct WeatherRecord {
    #[schema(example = 1)]
    pub id: i32,

    /// Lowercased city name as requested.
    #[schema(example = "london")]
    pub city: String,

    /// Temperature in °C.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 15.23)]
    pub temperature: Decimal,

    /// Apparent temperature in °C.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 14.8)]
    pub feels_like: Decimal,

    /// Relative humidity, percent.
    #[schema(example = 72)]
    pub humidity: i32,

    #[schema(example = "nublado")]
    pub description: Option<String>,

    /// Insertion time assigned by the database. The column only has a
    /// default, so rows written by other clients may carry `NULL`.
    #[serde(rename = "timestamp")]
    #[sqlx(rename = "timestamp")]
    pub recorded_at: Option<DateTime<Utc>>,
}
