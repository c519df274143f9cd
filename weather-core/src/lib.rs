//! Core library for the weather records service.
//!
//! This crate defines:
//! - Configuration loading (file + environment)
//! - The OpenWeather client behind the [`WeatherProvider`] abstraction
//! - Shared domain models (observations, stored records)
//! - Append-only persistence behind the [`WeatherStore`] abstraction
//!
//! It is used by `weather-server`, but can also be reused by other binaries.

pub mod config;
pub mod model;
pub mod provider;
pub mod store;

pub use config::{Config, DatabaseConfig, ProviderConfig};
pub use model::{CurrentWeather, NewWeatherRecord, RecordError, WeatherRecord};
pub use provider::{ConfigError, FetchError, WeatherProvider, provider_from_config};
pub use store::{PgWeatherStore, StoreError, WeatherStore};
