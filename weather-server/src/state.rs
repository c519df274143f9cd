use std::sync::Arc;

use tracing::warn;
use weather_core::{Config, WeatherProvider, WeatherStore, provider_from_config};

/// Everything a request handler needs, built once at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    store: Arc<dyn WeatherStore>,
    provider: Option<Arc<dyn WeatherProvider>>,
}

impl AppState {
    pub fn new(store: Arc<dyn WeatherStore>, provider: Option<Arc<dyn WeatherProvider>>) -> Self {
        Self { store, provider }
    }

    /// Wire the OpenWeather provider from `config`. A missing key does not
    /// prevent startup; writes will answer 400 until one is configured.
    pub fn from_config(config: &Config, store: Arc<dyn WeatherStore>) -> Self {
        let provider = match provider_from_config(config) {
            Ok(provider) => Some(Arc::new(provider) as Arc<dyn WeatherProvider>),
            Err(err) => {
                warn!(error = %err, "weather lookups are disabled");
                None
            }
        };

        Self::new(store, provider)
    }

    pub fn store(&self) -> &dyn WeatherStore {
        self.store.as_ref()
    }

    pub fn provider(&self) -> Option<&dyn WeatherProvider> {
        self.provider.as_deref()
    }
}
