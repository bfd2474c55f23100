//! # Server Module
//!
//! HTTP server setup and route configuration.

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::Config;
use crate::error::ServerError;
use crate::routes::health::{health, ping};

/// Builds the route table.
///
/// Only `GET /ping` and `GET /health` are registered. Anything else gets the
/// axum defaults: 404 for unknown paths, 405 for a known path with another method.
pub fn build_router() -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new().layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            ),
        )
}

/// Binds the configured address and serves the router until the process exits.
pub async fn start(config: &Config) -> Result<(), ServerError> {
    let app = build_router();

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!("🚀 Server starting...");
    tracing::info!("📡 Listening on http://{}", addr);
    tracing::info!("🏓 Ping available at http://{}/ping", addr);
    tracing::info!("🏥 Health check available at http://{}/health", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
