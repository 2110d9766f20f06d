//! Dashboard Controller
//!
//! Owns the [`UiState`] and performs every dashboard operation against the
//! inventory backend. Backend failures never propagate: reads fall back to
//! demo data and writes over an unreachable backend are applied to the
//! in-memory list and reported as demo-mode successes.

use std::sync::Arc;

use super::charts::ChartState;
use super::demo;
use super::state::{
    Alert, AlertKind, DataSource, ProductsView, Section, UiState, DEMO_NOTICE_TIMEOUT,
};
use crate::client::InventoryApi;
use crate::models::ProductForm;

pub const MSG_PRODUCT_ADDED: &str = "Product added successfully!";
pub const MSG_PRODUCT_ADDED_DEMO: &str = "Product added successfully! (Demo mode)";
pub const MSG_PRODUCT_FIELDS_REQUIRED: &str = "SKU and name are required.";
pub const MSG_PRODUCT_ADD_ERROR: &str = "Error adding product. Please try again.";
pub const MSG_PRODUCT_DELETED: &str = "Product deleted successfully!";
pub const MSG_PRODUCT_DELETED_DEMO: &str = "Product deleted successfully! (Demo mode)";
pub const MSG_PRODUCT_DELETE_FAILED: &str = "Failed to delete product";
pub const MSG_EDIT_UNAVAILABLE: &str = "Edit functionality will be implemented in the full version.";
pub const MSG_DEMO_NOTICE: &str = "This is a frontend demo with sample data. For the complete system with backend API, view the repository.";

/// Drives the dashboard UI state
pub struct DashboardController {
    api: Arc<dyn InventoryApi>,
    state: UiState,
}

impl DashboardController {
    pub fn new(api: Arc<dyn InventoryApi>, state: UiState) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut UiState {
        &mut self.state
    }

    /// Initial load: announce demo mode, load the dashboard counters and
    /// build both charts with placeholder data.
    pub async fn initialize(&mut self) {
        if self.state.demo_mode {
            self.state.alerts.push(Alert {
                kind: AlertKind::Info,
                message: MSG_DEMO_NOTICE.to_string(),
                dismiss_after: DEMO_NOTICE_TIMEOUT,
                demo_notice: true,
            });
        }

        self.load_dashboard_data().await;

        if self.state.charts.is_none() {
            self.state.charts = Some(ChartState::with_placeholders());
        }

        tracing::info!(demo_mode = self.state.demo_mode, "Dashboard initialized");
    }

    /// Make `section` the only visible panel and load its data
    pub async fn show_section(&mut self, section: Section) {
        tracing::debug!(%section, "Showing section");
        self.state.current_section = section;

        match section {
            Section::Products => self.reload_products().await,
            Section::Dashboard => self.load_dashboard_data().await,
            Section::Inventory | Section::Sales | Section::Reports => {}
        }
    }

    /// Refresh the dashboard counters and charts.
    ///
    /// Only the product count comes from the backend; sales and stock
    /// counters are fixed placeholders.
    pub async fn load_dashboard_data(&mut self) {
        let stats = &mut self.state.stats;

        match self.api.product_count().await {
            Ok(count) => {
                stats.total_products = count;
                stats.total_products_source = DataSource::Backend;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load product count, using demo value");
                stats.total_products = demo::FALLBACK_PRODUCT_COUNT;
                stats.total_products_source = DataSource::Demo;
            }
        }

        stats.todays_sales = demo::PLACEHOLDER_TODAYS_SALES;
        stats.low_stock_items = demo::PLACEHOLDER_LOW_STOCK;
        stats.out_of_stock = demo::PLACEHOLDER_OUT_OF_STOCK;
        stats.refreshed_at = Some(chrono::Utc::now());

        if let Some(charts) = self.state.charts.as_mut() {
            charts.update();
        }
    }

    /// Fetch the product list, filtered by `search_term` when it is
    /// non-empty. The term is sent as typed, whitespace included, and
    /// remembered for later reloads.
    pub async fn load_products(&mut self, search_term: Option<&str>) {
        self.state.search_term = search_term.unwrap_or_default().to_string();
        self.reload_products().await;
    }

    /// Fetch the product list using the remembered search term
    pub async fn reload_products(&mut self) {
        let term = self.state.search_term.clone();
        let search = Some(term.as_str()).filter(|t| !t.is_empty());

        match self.api.list_products(search).await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "Loaded products");
                self.state.products = products;
                self.state.products_view = ProductsView::Loaded(DataSource::Backend);
            }
            Err(e) if e.is_transport() => {
                tracing::warn!(error = %e, "Error loading products, showing sample data");
                self.state.products = demo::sample_products();
                self.state.products_view = ProductsView::Loaded(DataSource::Demo);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load products");
                self.state.products_view = ProductsView::Failed;
            }
        }
    }

    /// Show the add-product modal with an empty form
    pub fn open_add_product_modal(&mut self) {
        self.state.add_product_modal.open = true;
        self.state.add_product_modal.form = ProductForm::default();
    }

    pub fn close_add_product_modal(&mut self) {
        self.state.add_product_modal.open = false;
    }

    /// Submit the add-product form
    pub async fn save_product(&mut self, form: &ProductForm) {
        if form.sku.trim().is_empty() || form.name.trim().is_empty() {
            self.state.add_product_modal.form = form.clone();
            self.state.push_alert(AlertKind::Warning, MSG_PRODUCT_FIELDS_REQUIRED);
            return;
        }

        let product = form.to_new_product();

        match self.api.create_product(&product).await {
            Ok(()) => {
                tracing::info!(sku = %product.sku, "Product created");
                self.state.push_alert(AlertKind::Success, MSG_PRODUCT_ADDED);
                self.close_add_product_modal();
                self.reload_products().await;
            }
            Err(e) if e.is_transport() => {
                tracing::warn!(error = %e, sku = %product.sku, "Error adding product, keeping it locally");
                self.state.push_alert(AlertKind::Danger, MSG_PRODUCT_ADD_ERROR);

                let id = demo::next_local_id(&self.state.products);
                self.state.products.push(product.into_demo_product(id));
                self.close_add_product_modal();
                self.state.push_alert(AlertKind::Success, MSG_PRODUCT_ADDED_DEMO);
            }
            Err(e) => {
                let message = match &e {
                    crate::client::ClientError::Api { message, .. } => message.clone(),
                    other => other.to_string(),
                };
                tracing::error!(error = %e, sku = %product.sku, "Backend rejected product");
                self.state.add_product_modal.form = form.clone();
                self.state
                    .push_alert(AlertKind::Danger, format!("Failed to add product: {}", message));
            }
        }
    }

    /// Editing is not offered; tell the user so
    pub fn edit_product(&mut self, id: u64) {
        tracing::debug!(id, "Edit requested");
        self.state.push_alert(AlertKind::Info, MSG_EDIT_UNAVAILABLE);
    }

    /// Delete a product. Without `confirmed` this only asks the user for
    /// confirmation; the request is sent once they confirm.
    pub async fn delete_product(&mut self, id: u64, confirmed: bool) {
        if !confirmed {
            self.state.pending_delete = Some(id);
            return;
        }
        self.state.pending_delete = None;

        match self.api.delete_product(id).await {
            Ok(()) => {
                tracing::info!(id, "Product deleted");
                self.state.push_alert(AlertKind::Success, MSG_PRODUCT_DELETED);
                self.reload_products().await;
            }
            Err(e) if e.is_transport() => {
                tracing::warn!(error = %e, id, "Error deleting product, removing it locally");
                self.state.products.retain(|p| p.id != id);
                self.state.push_alert(AlertKind::Success, MSG_PRODUCT_DELETED_DEMO);
            }
            Err(e) => {
                tracing::error!(error = %e, id, "Backend refused delete");
                self.state.push_alert(AlertKind::Danger, MSG_PRODUCT_DELETE_FAILED);
            }
        }
    }

    /// Dismiss a pending delete confirmation
    pub fn cancel_delete(&mut self) {
        self.state.pending_delete = None;
    }

    /// Whether the backend answers the product count request
    pub async fn check_api_connection(&self) -> bool {
        self.api.product_count().await.is_ok()
    }
}
