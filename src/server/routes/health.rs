//! Health Routes
//!
//! Health check endpoints for monitoring and orchestrators.
//!
//! - GET /health/live - Liveness check (process is alive)
//! - GET /health/ready - Readiness check (inventory backend reachable)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::server::dto::HealthResponse;
use crate::server::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 when the inventory backend answers its count request.
/// The dashboard still works without it, on demo data.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if backend_reachable(&state).await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let backend_ok = backend_reachable(&state).await;

    Json(HealthResponse {
        status: if backend_ok { "healthy" } else { "degraded" }.to_string(),
        backend: if backend_ok { "ok" } else { "unreachable" }.to_string(),
        backend_url: state.config.backend.base_url.clone(),
        demo_mode: state.config.demo.enabled,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn backend_reachable(state: &AppState) -> bool {
    state.controller.lock().await.check_api_connection().await
}
