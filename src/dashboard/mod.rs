//! Dashboard
//!
//! UI state and the controller that drives it.
//!
//! - [`state`]: current section, product list, counters, alerts, modal
//! - [`charts`]: the sales and inventory chart configurations
//! - [`demo`]: sample data used when the backend is unreachable
//! - [`controller`]: the dashboard operations

pub mod charts;
pub mod controller;
pub mod demo;
pub mod state;

pub use charts::{ChartConfig, ChartHandle, ChartState};
pub use controller::DashboardController;
pub use state::{
    Alert, AlertKind, DashboardStats, DataSource, ProductsView, Section, UiState, UnknownSection,
};
