//! Dashboard Charts
//!
//! The sales and inventory charts, kept as Chart.js configurations. The
//! browser builds one Chart.js instance per config when the page loads and
//! afterwards only applies updates, so a chart is created exactly once.

use serde::Serialize;

/// Weekday labels for the sales chart
pub const SALES_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Placeholder weekly sales figures
pub const PLACEHOLDER_SALES: [f64; 7] = [1200.0, 1900.0, 3000.0, 2500.0, 2200.0, 3000.0, 2800.0];

/// Labels for the inventory breakdown chart
pub const INVENTORY_LABELS: [&str; 3] = ["In Stock", "Low Stock", "Out of Stock"];

/// Placeholder inventory breakdown
pub const PLACEHOLDER_INVENTORY: [f64; 3] = [85.0, 12.0, 3.0];

/// Chart.js configuration object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Doughnut,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    pub background_color: ColorSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

/// One color for the whole dataset, or one per data point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    PerPoint(Vec<String>),
}

/// A chart and the number of in-place updates applied to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartHandle {
    /// DOM id of the canvas
    pub canvas_id: &'static str,
    pub revision: u64,
    pub config: ChartConfig,
}

impl ChartHandle {
    fn new(canvas_id: &'static str, config: ChartConfig) -> Self {
        Self {
            canvas_id,
            revision: 0,
            config,
        }
    }

    /// Mark the chart as updated in place
    pub fn update(&mut self) {
        self.revision += 1;
    }
}

/// Both dashboard charts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartState {
    pub sales: ChartHandle,
    pub inventory: ChartHandle,
}

impl ChartState {
    /// Build both charts with placeholder datasets
    pub fn with_placeholders() -> Self {
        Self {
            sales: ChartHandle::new("salesChart", sales_config()),
            inventory: ChartHandle::new("inventoryChart", inventory_config()),
        }
    }

    /// Refresh both charts in place
    pub fn update(&mut self) {
        self.sales.update();
        self.inventory.update();
    }
}

fn sales_config() -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: SALES_LABELS.iter().map(|l| l.to_string()).collect(),
            datasets: vec![Dataset {
                label: Some("Sales ($)".to_string()),
                data: PLACEHOLDER_SALES.to_vec(),
                border_color: Some("#3498db".to_string()),
                background_color: ColorSpec::Single("rgba(52, 152, 219, 0.1)".to_string()),
                tension: Some(0.4),
            }],
        },
        options: serde_json::json!({
            "responsive": true,
            "plugins": { "legend": { "display": false } },
            "scales": { "y": { "beginAtZero": true } }
        }),
    }
}

fn inventory_config() -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: INVENTORY_LABELS.iter().map(|l| l.to_string()).collect(),
            datasets: vec![Dataset {
                label: None,
                data: PLACEHOLDER_INVENTORY.to_vec(),
                border_color: None,
                background_color: ColorSpec::PerPoint(vec![
                    "#27ae60".to_string(),
                    "#f39c12".to_string(),
                    "#e74c3c".to_string(),
                ]),
                tension: None,
            }],
        },
        options: serde_json::json!({
            "responsive": true,
            "plugins": { "legend": { "position": "bottom" } }
        }),
    }
}
