use crate::{Config, model::CurrentWeather, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Why a provider lookup did not produce observations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The provider answered with a non-success status.
    #[error("weather provider responded with status {status}: {message}")]
    Upstream { status: u16, message: String },

    /// The request never completed (DNS, refused connection, timeout, broken body).
    #[error("failed to reach weather provider")]
    Transport(#[source] reqwest::Error),

    /// The provider answered successfully with a payload we cannot read.
    #[error("failed to parse weather provider response")]
    Decode(#[source] serde_json::Error),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("OpenWeather API key is not configured. Set OPENWEATHER_API_KEY or [openweather].api_key.")]
    MissingApiKey,
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for `city`. Every call reaches the network.
    async fn current_weather(&self, city: &str) -> Result<CurrentWeather, FetchError>;
}

/// Construct the OpenWeather provider from config, honouring endpoint overrides.
pub fn provider_from_config(config: &Config) -> Result<OpenWeatherProvider, ConfigError> {
    let api_key = config.openweather_api_key().ok_or(ConfigError::MissingApiKey)?;

    let mut provider = OpenWeatherProvider::new(api_key.to_owned());
    if let Some(ow) = &config.openweather {
        if let Some(base_url) = &ow.base_url {
            provider = provider.with_base_url(base_url.clone());
        }
        if let Some(lang) = &ow.lang {
            provider = provider.with_lang(lang.clone());
        }
    }

    Ok(provider)
}
