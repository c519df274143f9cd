use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::debug;

use crate::{
    config::DatabaseConfig,
    model::{NewWeatherRecord, WeatherRecord},
    store::{StoreError, WeatherStore},
};

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS weather_data (
    id SERIAL PRIMARY KEY,
    city VARCHAR(100) NOT NULL,
    temperature NUMERIC(5, 2) NOT NULL,
    feels_like NUMERIC(5, 2) NOT NULL,
    humidity INTEGER NOT NULL,
    description VARCHAR(255),
    timestamp TIMESTAMPTZ DEFAULT NOW()
)
"#;

const INSERT_RECORD: &str = r#"
INSERT INTO weather_data (city, temperature, feels_like, humidity, description)
VALUES ($1, $2, $3, $4, $5)
RETURNING id, city, temperature, feels_like, humidity, description, timestamp
"#;

const SELECT_ALL: &str = r#"
SELECT id, city, temperature, feels_like, humidity, description, timestamp
FROM weather_data
ORDER BY timestamp DESC NULLS LAST, id DESC
"#;

/// [`WeatherStore`] backed by a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgWeatherStore {
    pool: PgPool,
}

impl PgWeatherStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build the pool without opening a connection. Connections are made on
    /// first use, so the service can start while the database is down.
    ///
    /// Without `config.url` the standard `PG*` environment variables apply.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let options = match &config.url {
            Some(url) => url
                .parse::<PgConnectOptions>()
                .map_err(|e| StoreError::Config(e.to_string()))?,
            None => PgConnectOptions::new(),
        };

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy_with(options);

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl WeatherStore for PgWeatherStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    async fn insert(&self, record: &NewWeatherRecord) -> Result<WeatherRecord, StoreError> {
        let stored = sqlx::query_as::<_, WeatherRecord>(INSERT_RECORD)
            .bind(&record.city)
            .bind(record.temperature)
            .bind(record.feels_like)
            .bind(record.humidity)
            .bind(record.description.as_deref())
            .fetch_one(&self.pool)
            .await?;

        debug!(id = stored.id, city = %stored.city, "inserted weather record");
        Ok(stored)
    }

    async fn list_recent_first(&self) -> Result<Vec<WeatherRecord>, StoreError> {
        let records = sqlx::query_as::<_, WeatherRecord>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }
}
