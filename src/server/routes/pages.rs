//! Page Routes
//!
//! - GET / - Current page
//! - GET /sections/:name - Switch section

use axum::extract::{Path, State};
use maud::Markup;
use std::sync::Arc;

use super::render_page;
use crate::dashboard::Section;
use crate::server::error::{ServerError, ServerResult};
use crate::server::state::AppState;

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Markup {
    let mut controller = state.controller.lock().await;
    render_page(&mut controller)
}

/// GET /sections/:name
pub async fn show_section(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ServerResult<Markup> {
    let section: Section = name
        .parse()
        .map_err(|e: crate::dashboard::UnknownSection| ServerError::NotFound(e.to_string()))?;

    let mut controller = state.controller.lock().await;
    controller.show_section(section).await;
    Ok(render_page(&mut controller))
}
