//! Response bodies of the JSON endpoints

use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or degraded
    pub status: String,
    /// Backend status: ok or unreachable
    pub backend: String,
    /// Backend base URL
    pub backend_url: String,
    /// Whether demo mode is announced
    pub demo_mode: bool,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
