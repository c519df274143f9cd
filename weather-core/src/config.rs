use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

/// Port the HTTP service listens on when nothing else is configured.
pub const DEFAULT_PORT: u16 = 3001;

/// Locale requested from OpenWeather for condition descriptions.
pub const DEFAULT_LANG: &str = "pt_br";

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// OpenWeather credentials and endpoint overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub api_key: String,

    /// Alternative API root, e.g. a local stub server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

/// Connection settings for the PostgreSQL pool.
///
/// When `url` is absent the pool falls back to the libpq environment
/// variables (`PGHOST`, `PGUSER`, `PGDATABASE`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// Top-level service configuration.
///
/// Example TOML:
/// ```toml
/// port = 3001
///
/// [openweather]
/// api_key = "..."
///
/// [database]
/// url = "postgres://localhost/weather"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openweather: Option<ProviderConfig>,

    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            openweather: None,
            database: DatabaseConfig::default(),
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

impl Config {
    /// Load config from `path`, or from the platform config directory when no
    /// path is given. A missing default file yields the built-in defaults; a
    /// missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::config_file_path()?;
                if !path.exists() {
                    return Ok(Self::default());
                }
                Self::load_from(&path)
            }
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Path to the default config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-server")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Apply `PORT`, `OPENWEATHER_API_KEY` and `DATABASE_URL` from the process
    /// environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|name| std::env::var(name).ok())
    }

    /// Same as [`Config::apply_env`] with an injectable variable lookup.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT value: {port:?}"))?;
        }

        match lookup("OPENWEATHER_API_KEY") {
            Some(api_key) if api_key.trim().is_empty() => {
                warn!("ignoring blank OPENWEATHER_API_KEY");
            }
            Some(api_key) => self.set_openweather_api_key(api_key),
            None => {}
        }

        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = Some(url);
        }

        Ok(())
    }

    /// Set or replace the OpenWeather key, keeping any endpoint overrides.
    pub fn set_openweather_api_key(&mut self, api_key: String) {
        self.openweather
            .get_or_insert_with(ProviderConfig::default)
            .api_key = api_key;
    }

    /// Returns the OpenWeather API key, if a non-blank one is present.
    pub fn openweather_api_key(&self) -> Option<&str> {
        self.openweather
            .as_ref()
            .map(|cfg| cfg.api_key.trim())
            .filter(|key| !key.is_empty())
    }

    pub fn is_openweather_configured(&self) -> bool {
        self.openweather_api_key().is_some()
    }
}
