use crate::model::{NewWeatherRecord, WeatherRecord};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod postgres;

pub use postgres::PgWeatherStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error")]
    Database(#[from] sqlx::Error),

    #[error("invalid database configuration: {0}")]
    Config(String),
}

/// Append-only persistence for weather records.
#[async_trait]
pub trait WeatherStore: Send + Sync + Debug {
    /// Create the `weather_data` table if it does not exist yet. Idempotent.
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    /// Insert one row and return it with its generated id and timestamp.
    async fn insert(&self, record: &NewWeatherRecord) -> Result<WeatherRecord, StoreError>;

    /// Every stored record, most recent first.
    async fn list_recent_first(&self) -> Result<Vec<WeatherRecord>, StoreError>;
}
