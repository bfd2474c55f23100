// # Routes Module
//
// - HTTP route handlers for the server.
// - Handlers are registered in `server.rs` through `build_router`.

/// Liveness and health check endpoints
pub mod health;
