//! # Ping/Pong Server
//!
//! A small HTTP API server built with Rust, Axum, and Tokio that answers
//! liveness and health probes with fixed JSON payloads.
//!
//! ## Endpoints
//! - `GET /ping` returns `{"message":"pong"}`
//! - `GET /health` returns `{"message":"ok"}`
//!
//! ## Architecture
//! - `server`: route table and listener setup
//! - `config`: environment variable configuration
//! - `routes`: HTTP route handlers
//! - `models`: response payloads
//! - `error`: startup errors
//!
//! ## Environment Setup
//! Optional variables, read from the environment or a `.env` file:
//! - `SERVER_HOST` (default `0.0.0.0`)
//! - `PORT` or `SERVER_PORT` (default `3000`)
//! - `RUST_LOG` (default `info`)
//!
//! ## Running the Server
//! ```bash
//! cargo run
//! curl http://localhost:3000/ping
//! ```

mod config;
mod error;
mod models;
mod routes;
mod server;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Application entry point.
///
/// Loads `.env`, initializes the tracing subscriber, reads configuration and
/// serves until the process is terminated. Startup failures (bad config, port
/// in use) are returned as errors instead of panicking.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false) // Don't show module targets for cleaner output
                .compact(),
        )
        .init();

    tracing::info!("🏁 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    tracing::info!("🏗️  Build profile: {}", if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    });

    let config = Config::from_env()?;
    tracing::debug!("Loaded configuration: {:?}", config);

    server::start(&config).await?;
    Ok(())
}
