//! Dashboard section: counter cards and the two charts

use maud::{html, Markup};

use super::format_currency;
use crate::dashboard::{ChartHandle, DataSource, UiState};

pub fn dashboard_section(state: &UiState) -> Markup {
    let stats = &state.stats;

    html! {
        div.d-flex.justify-content-between.align-items-center.mb-4 {
            h2 { "Dashboard" }
            @if let Some(at) = stats.refreshed_at {
                small.text-muted { "Updated " (at.format("%H:%M:%S").to_string()) }
            }
        }
        div.row.mb-4 {
            (stat_card("Total Products", "totalProducts", "primary", "fa-box",
                html! { (stats.total_products) },
                stats.total_products_source == DataSource::Demo))
            (stat_card("Today's Sales", "todaysSales", "success", "fa-dollar-sign",
                html! { (format_currency(stats.todays_sales)) }, false))
            (stat_card("Low Stock Items", "lowStockItems", "warning", "fa-exclamation-triangle",
                html! { (stats.low_stock_items) }, false))
            (stat_card("Out of Stock", "outOfStock", "danger", "fa-times-circle",
                html! { (stats.out_of_stock) }, false))
        }
        @if let Some(charts) = &state.charts {
            div.row {
                div.col-md-8.mb-4 {
                    (chart_card("Weekly Sales", &charts.sales))
                }
                div.col-md-4.mb-4 {
                    (chart_card("Inventory Status", &charts.inventory))
                }
            }
        }
    }
}

fn stat_card(
    title: &str,
    value_id: &str,
    color: &str,
    icon: &str,
    value: Markup,
    sample_data: bool,
) -> Markup {
    html! {
        div.col-md-3.mb-3 {
            div class=(format!("card text-white bg-{}", color)) {
                div.card-body.d-flex.justify-content-between.align-items-center {
                    div {
                        h6.card-title { (title) }
                        h3.mb-0 id=(value_id) { (value) }
                        @if sample_data {
                            small.text-white-50 { "sample data" }
                        }
                    }
                    i class=(format!("fas {} fa-2x", icon)) {}
                }
            }
        }
    }
}

fn chart_card(title: &str, chart: &ChartHandle) -> Markup {
    // Serializing plain chart configs cannot fail
    let config = serde_json::to_string(&chart.config).unwrap_or_default();

    html! {
        div.card {
            div.card-header { (title) }
            div.card-body {
                canvas id=(chart.canvas_id) data-chart=(config) data-revision=(chart.revision) {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::DashboardStats;

    fn state_with(total: u64, source: DataSource) -> UiState {
        let mut state = UiState::new(false, "");
        state.stats = DashboardStats {
            total_products: total,
            total_products_source: source,
            todays_sales: 2340.50,
            low_stock_items: 12,
            out_of_stock: 3,
            refreshed_at: None,
        };
        state
    }

    #[test]
    fn test_counters_render() {
        let html = dashboard_section(&state_with(42, DataSource::Backend)).into_string();
        assert!(html.contains(r#"<h3 class="mb-0" id="totalProducts">42</h3>"#));
        assert!(html.contains(r#"<h3 class="mb-0" id="todaysSales">$2,340.50</h3>"#));
        assert!(html.contains(r#"<h3 class="mb-0" id="lowStockItems">12</h3>"#));
        assert!(html.contains(r#"<h3 class="mb-0" id="outOfStock">3</h3>"#));
        assert!(!html.contains("sample data"));
    }

    #[test]
    fn test_fallback_count_is_marked() {
        let html = dashboard_section(&state_with(156, DataSource::Demo)).into_string();
        assert!(html.contains(r#"id="totalProducts">156</h3>"#));
        assert!(html.contains("sample data"));
    }
}
