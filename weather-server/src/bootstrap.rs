use tracing::{error, info};
use weather_core::WeatherStore;

/// Make sure the `weather_data` table exists.
///
/// Failures are logged, not returned: the table may already exist, and a real
/// schema problem will show up on the first read or write.
pub async fn bootstrap(store: &dyn WeatherStore) {
    match store.ensure_schema().await {
        Ok(()) => info!("table \"weather_data\" verified/created"),
        Err(err) => error!(error = ?err, "failed to create table \"weather_data\""),
    }
}
