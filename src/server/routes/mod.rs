//! Dashboard Routes
//!
//! Route handlers organized by functionality. Page handlers run one
//! controller operation and answer with the full page; form posts redirect
//! back to `/` so a reload never resubmits them.

pub mod charts;
pub mod health;
pub mod pages;
pub mod products;

use maud::Markup;

use crate::dashboard::DashboardController;
use crate::render;

/// Render the page, consuming queued alerts
pub(crate) fn render_page(controller: &mut DashboardController) -> Markup {
    let alerts = controller.state_mut().take_alerts();
    render::page(controller.state(), &alerts)
}
