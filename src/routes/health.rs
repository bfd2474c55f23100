use axum::{http::StatusCode, response::Json};

use crate::models::{HealthResponse, PingResponse};

/// Liveness endpoint handler.
///
/// # Route
/// - **Method**: GET
/// - **Path**: `/ping`
///
/// # Response Format
/// ```json
/// {
///   "message": "pong"
/// }
/// ```
///
/// Query string and body are ignored; the handler always answers **200 OK**.
///
/// # Examples
/// ```bash
/// curl http://localhost:3000/ping
/// # Response: {"message":"pong"}
/// ```
pub async fn ping() -> (StatusCode, Json<PingResponse>) {
    tracing::debug!("ping served");
    (StatusCode::OK, Json(PingResponse::new()))
}

/// Health check endpoint handler.
///
/// Same contract as [`ping`], answering `{"message":"ok"}` on `GET /health`.
/// Suitable for load balancer checks and container liveness/readiness probes.
pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("health served");
    (StatusCode::OK, Json(HealthResponse::new()))
}
