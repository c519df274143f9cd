//! Binary crate for the `weather-server` HTTP service.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and loading configuration
//! - Logging setup
//! - Binding the HTTP listener and running the startup bootstrap

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }

    match dotenv {
        Err(e) if !e.not_found() => warn!(error = %e, "failed to load .env file"),
        _ => {}
    }

    let cmd = cli::Cli::parse();
    cmd.run().await
}
