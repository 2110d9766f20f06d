//! # Inventory Dashboard
//!
//! Web dashboard for a retail inventory REST backend: headline counters,
//! a weekly sales chart, a searchable product table and add/delete forms.
//! When the backend cannot be reached the dashboard keeps working on
//! sample data ("demo mode").
//!
//! ## Modules
//!
//! - [`models`]: Products, categories and the add-product form
//! - [`client`]: Inventory backend client
//! - [`dashboard`]: UI state and the controller that drives it
//! - [`render`]: HTML for the page, built with maud
//! - [`server`]: Axum routes exposing the controller to the browser
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use inventory_dashboard::client::{HttpInventoryClient, InventoryClientConfig};
//! use inventory_dashboard::dashboard::{DashboardController, UiState};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpInventoryClient::new(InventoryClientConfig::default())?;
//!     let mut controller = DashboardController::new(Arc::new(client), UiState::new(false, ""));
//!
//!     controller.initialize().await;
//!     println!("{} products", controller.state().stats.total_products);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod render;
pub mod server;

pub use client::{ClientError, HttpInventoryClient, InventoryApi, InventoryClientConfig};
pub use config::{Config, ConfigError};
pub use dashboard::{DashboardController, Section, UiState};
pub use models::{Category, NewProduct, Product, ProductForm, StockStatus};
pub use server::{build_router, serve, AppState, ServerError};
