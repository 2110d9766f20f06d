//! Page Rendering
//!
//! Declarative markup for the dashboard: every function takes UI state and
//! returns [`Markup`], so pages can be checked without a browser. Chart.js,
//! Bootstrap and Font Awesome are referenced from their CDNs and do the
//! drawing client side.

mod alerts;
mod dashboard;
mod modal;
mod nav;
mod products;

pub use alerts::alert_stack;
pub use products::{product_rows, products_section};

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::dashboard::{Alert, Section, UiState};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/js/bootstrap.bundle.min.js";
const FONT_AWESOME_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";
const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js";

/// Builds charts from their `data-chart` configs and removes alerts once
/// their timeout has passed.
const PAGE_SCRIPT: &str = r#"
document.querySelectorAll('canvas[data-chart]').forEach(function (canvas) {
    new Chart(canvas.getContext('2d'), JSON.parse(canvas.dataset.chart));
});
document.querySelectorAll('[data-dismiss-after]').forEach(function (alert) {
    setTimeout(function () {
        if (alert.parentNode) {
            alert.parentNode.removeChild(alert);
        }
    }, parseInt(alert.dataset.dismissAfter, 10));
});
"#;

/// Render the whole dashboard page
pub fn page(state: &UiState, alerts: &[Alert]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Retail Inventory Dashboard" }
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
                link rel="stylesheet" href=(FONT_AWESOME_CSS);
                script src=(CHART_JS) {}
            }
            body {
                div.container-fluid {
                    div.row {
                        (nav::sidebar(state))
                        main.col-md-9.ms-sm-auto.col-lg-10.px-md-4.py-4 {
                            @for section in Section::ALL {
                                div.content-section id=(section.id()) style=[hidden_style(state, section)] {
                                    (section_body(state, section))
                                }
                            }
                        }
                    }
                }
                (modal::add_product_modal(state))
                (modal::delete_confirmation(state))
                (alert_stack(alerts, &state.repository_url))
                script src=(BOOTSTRAP_JS) {}
                script { (PreEscaped(PAGE_SCRIPT)) }
            }
        }
    }
}

fn hidden_style(state: &UiState, section: Section) -> Option<&'static str> {
    (!state.is_visible(section)).then_some("display: none")
}

fn section_body(state: &UiState, section: Section) -> Markup {
    match section {
        Section::Dashboard => dashboard::dashboard_section(state),
        Section::Products => products_section(state),
        Section::Inventory | Section::Sales | Section::Reports => placeholder_section(section),
    }
}

fn placeholder_section(section: Section) -> Markup {
    html! {
        h2.mb-4 { (section.title()) }
        div.card {
            div.card-body.text-muted {
                "This section is not available yet."
            }
        }
    }
}

/// Format a dollar amount with thousands separators, e.g. `$2,340.50`
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{AlertKind, ChartState};

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(2340.5), "$2,340.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-45.1), "-$45.10");
    }

    #[test]
    fn test_exactly_one_section_visible() {
        let mut state = UiState::new(false, "");
        state.current_section = Section::Products;

        let html = page(&state, &[]).into_string();
        assert_eq!(html.matches(r#"class="content-section""#).count(), 5);
        assert_eq!(html.matches("display: none").count(), 4);
        assert!(html.contains(r#"<div class="content-section" id="products">"#));
    }

    #[test]
    fn test_page_embeds_charts_once_initialized() {
        let mut state = UiState::new(false, "");
        let html = page(&state, &[]).into_string();
        assert!(!html.contains("data-chart="));
        assert!(!html.contains(r#"id="salesChart""#));

        state.charts = Some(ChartState::with_placeholders());
        let html = page(&state, &[]).into_string();
        assert!(html.contains(r#"id="salesChart""#));
        assert!(html.contains(r#"id="inventoryChart""#));
        assert_eq!(html.matches("data-chart=").count(), 2);
    }

    #[test]
    fn test_page_includes_alerts() {
        let state = UiState::new(false, "");
        let alerts = vec![Alert::new(AlertKind::Success, "Product added successfully!")];

        let html = page(&state, &alerts).into_string();
        assert!(html.contains("alert-success"));
        assert!(html.contains("Product added successfully!"));
        assert!(html.contains(r#"data-dismiss-after="5000""#));
    }
}
