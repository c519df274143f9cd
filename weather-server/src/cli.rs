use std::{path::PathBuf, sync::Arc};

use actix_web::{HttpServer, web};
use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use weather_core::{Config, PgWeatherStore, WeatherStore};
use weather_server::{AppState, api_doc, bootstrap, build_app};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather records HTTP service")]
pub struct Cli {
    /// Path to a TOML config file; defaults to the platform config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP service (default).
    Serve {
        /// Listen port; overrides PORT and the config file.
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the OpenAPI document as JSON and exit.
    Openapi,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load(self.config.as_deref())?;
        config.apply_env()?;

        match self.command.unwrap_or(Command::Serve { port: None }) {
            Command::Serve { port } => {
                if let Some(port) = port {
                    config.port = port;
                }
                serve(config).await
            }
            Command::Openapi => {
                let json = api_doc(config.port)
                    .to_pretty_json()
                    .context("Failed to serialize OpenAPI document")?;
                println!("{json}");
                Ok(())
            }
        }
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let store: Arc<dyn WeatherStore> = Arc::new(
        PgWeatherStore::connect_lazy(&config.database)
            .context("Failed to configure database pool")?,
    );

    let state = web::Data::new(AppState::from_config(&config, store.clone()));
    let openapi = api_doc(config.port);
    let port = config.port;

    let server = HttpServer::new(move || build_app(state.clone(), openapi.clone()))
        .bind(("0.0.0.0", port))
        .with_context(|| format!("Failed to bind port {port}"))?;

    info!(port, "server listening");
    info!("API docs available at http://localhost:{port}/api-docs/");

    actix_web::rt::spawn(async move {
        bootstrap(store.as_ref()).await;
    });

    server.run().await.context("HTTP server failed")
}
