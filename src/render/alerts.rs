//! Floating alerts

use maud::{html, Markup};

use crate::dashboard::Alert;

/// Alerts pinned to the top right, stacked, each removed client side
/// after its timeout
pub fn alert_stack(alerts: &[Alert], repository_url: &str) -> Markup {
    html! {
        @for (index, alert) in alerts.iter().enumerate() {
            @let top = 20 + index * 70;
            div class=(format!("alert alert-{} alert-dismissible fade show position-fixed", alert.kind.css()))
                style=(format!("top: {}px; right: 20px; z-index: 9999; max-width: 600px;", top))
                data-dismiss-after=(alert.dismiss_after.as_millis().to_string()) {
                @if alert.demo_notice {
                    strong { "Live Demo Mode" }
                    br;
                    (alert.message)
                    @if !repository_url.is_empty() {
                        " "
                        a.alert-link href=(repository_url) target="_blank" { "View the repository" }
                    }
                } @else {
                    (alert.message)
                }
                button.btn-close type="button" data-bs-dismiss="alert" aria-label="Close" {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::state::DEMO_NOTICE_TIMEOUT;
    use crate::dashboard::AlertKind;

    #[test]
    fn test_alerts_stack() {
        let alerts = vec![
            Alert::new(AlertKind::Danger, "Error adding product. Please try again."),
            Alert::new(AlertKind::Success, "Product added successfully! (Demo mode)"),
        ];

        let html = alert_stack(&alerts, "").into_string();
        assert!(html.contains("alert alert-danger"));
        assert!(html.contains("top: 20px"));
        assert!(html.contains("top: 90px"));
        assert!(html.contains("(Demo mode)"));
    }

    #[test]
    fn test_demo_notice_links_repository() {
        let mut notice = Alert::new(AlertKind::Info, "Sample data only.");
        notice.demo_notice = true;
        notice.dismiss_after = DEMO_NOTICE_TIMEOUT;

        let html = alert_stack(&[notice], "https://example.com/repo").into_string();
        assert!(html.contains("Live Demo Mode"));
        assert!(html.contains(r#"href="https://example.com/repo""#));
        assert!(html.contains(r#"data-dismiss-after="10000""#));
    }
}
