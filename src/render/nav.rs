//! Sidebar navigation

use maud::{html, Markup};

use crate::dashboard::{Section, UiState};

/// Sidebar with one link per section; the visible section is active
pub fn sidebar(state: &UiState) -> Markup {
    html! {
        nav.col-md-3.col-lg-2.d-md-block.bg-dark.sidebar.min-vh-100 {
            div.position-sticky.pt-3 {
                a.d-flex.align-items-center.px-3.mb-3.text-white.text-decoration-none href="/" {
                    i.fas.fa-store.me-2 {}
                    span.fs-5 { "Retail Inventory" }
                }
                ul.nav.flex-column {
                    @for section in Section::ALL {
                        li.nav-item {
                            a.nav-link.text-white.active[state.is_visible(section)]
                                href=(format!("/sections/{}", section.id())) {
                                i class=(format!("fas {} me-2", section.icon())) {}
                                (section.title())
                            }
                        }
                    }
                }
                @if state.demo_mode {
                    div.px-3.mt-4 {
                        span.badge.bg-info { "Demo mode" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_follows_section() {
        let mut state = UiState::new(false, "");
        state.current_section = Section::Sales;

        let html = sidebar(&state).into_string();
        assert_eq!(html.matches("active").count(), 1);
        assert!(html.contains(r#"class="nav-link text-white active" href="/sections/sales""#));
        assert!(!html.contains("Demo mode"));
    }
}
