//! Dashboard UI State
//!
//! Everything the dashboard displays lives in [`UiState`]. The controller
//! mutates it, the render functions read it.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::charts::ChartState;
use crate::models::{Product, ProductForm};

/// How long an ordinary alert stays on screen
pub const ALERT_TIMEOUT: Duration = Duration::from_secs(5);

/// How long the demo-mode notice stays on screen
pub const DEMO_NOTICE_TIMEOUT: Duration = Duration::from_secs(10);

/// A named, mutually exclusive UI panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Products,
    Inventory,
    Sales,
    Reports,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Dashboard,
        Section::Products,
        Section::Inventory,
        Section::Sales,
        Section::Reports,
    ];

    /// Identifier used in URLs and as the DOM id of the panel
    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Products => "products",
            Section::Inventory => "inventory",
            Section::Sales => "sales",
            Section::Reports => "reports",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Products => "Products",
            Section::Inventory => "Inventory",
            Section::Sales => "Sales",
            Section::Reports => "Reports",
        }
    }

    /// Font Awesome icon for the nav link
    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "fa-tachometer-alt",
            Section::Products => "fa-box",
            Section::Inventory => "fa-warehouse",
            Section::Sales => "fa-shopping-cart",
            Section::Reports => "fa-chart-bar",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section '{0}'")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Where the displayed data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Backend,
    Demo,
}

/// Counters shown in the dashboard cards
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_products: u64,
    pub total_products_source: DataSource,
    pub todays_sales: f64,
    pub low_stock_items: u32,
    pub out_of_stock: u32,
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            total_products: 0,
            total_products_source: DataSource::Demo,
            todays_sales: 0.0,
            low_stock_items: 0,
            out_of_stock: 0,
            refreshed_at: None,
        }
    }
}

/// What the product table shows
#[derive(Debug, Clone, PartialEq)]
pub enum ProductsView {
    /// Nothing requested yet
    NotLoaded,
    /// The in-memory list, from the backend or demo data
    Loaded(DataSource),
    /// The backend answered the list request with an error status
    Failed,
}

/// Bootstrap alert flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
    Info,
    Warning,
}

impl AlertKind {
    pub fn css(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Danger => "danger",
            AlertKind::Info => "info",
            AlertKind::Warning => "warning",
        }
    }
}

/// A transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    pub dismiss_after: Duration,
    /// Shows the "view the repository" demo banner instead of plain text
    pub demo_notice: bool,
}

impl Alert {
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            dismiss_after: ALERT_TIMEOUT,
            demo_notice: false,
        }
    }
}

/// State of the add-product modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    pub open: bool,
    /// Values to show in the form; reset whenever the modal opens
    pub form: ProductForm,
}

/// All dashboard UI state
#[derive(Debug, Clone)]
pub struct UiState {
    pub current_section: Section,
    pub products: Vec<Product>,
    pub products_view: ProductsView,
    pub search_term: String,
    pub stats: DashboardStats,
    /// Built once by `initialize`
    pub charts: Option<ChartState>,
    pub alerts: Vec<Alert>,
    pub add_product_modal: ModalState,
    /// Product awaiting delete confirmation
    pub pending_delete: Option<u64>,
    pub demo_mode: bool,
    /// Link shown in the demo-mode notice
    pub repository_url: String,
}

impl UiState {
    pub fn new(demo_mode: bool, repository_url: impl Into<String>) -> Self {
        Self {
            current_section: Section::Dashboard,
            products: Vec::new(),
            products_view: ProductsView::NotLoaded,
            search_term: String::new(),
            stats: DashboardStats::default(),
            charts: None,
            alerts: Vec::new(),
            add_product_modal: ModalState::default(),
            pending_delete: None,
            demo_mode,
            repository_url: repository_url.into(),
        }
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.current_section == section
    }

    pub fn push_alert(&mut self, kind: AlertKind, message: impl Into<String>) {
        self.alerts.push(Alert::new(kind, message));
    }

    /// Hand out queued alerts; each alert is displayed once
    pub fn take_alerts(&mut self) -> Vec<Alert> {
        std::mem::take(&mut self.alerts)
    }

    pub fn product(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}
