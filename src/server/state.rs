//! Application State
//!
//! Shared state accessible by all dashboard handlers. The controller sits
//! behind one async mutex, so UI operations run one at a time in arrival
//! order.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::dashboard::DashboardController;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Dashboard controller owning the UI state
    pub controller: Arc<Mutex<DashboardController>>,
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(controller: DashboardController, config: Config) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
