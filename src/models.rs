//! Response Models
//!
//! JSON payloads returned by the health routes.

use serde::Serialize;

/// Body of `GET /ping`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PingResponse {
    pub message: String,
}

impl PingResponse {
    pub fn new() -> Self {
        Self { message: "pong".to_string() }
    }
}

impl Default for PingResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub message: String,
}

impl HealthResponse {
    pub fn new() -> Self {
        Self { message: "ok".to_string() }
    }
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self::new()
    }
}
