//! Chart Routes
//!
//! - GET /api/charts - Current chart configs, for updating the Chart.js
//!   instances in place

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::dashboard::ChartState;
use crate::server::error::{ServerError, ServerResult};
use crate::server::state::AppState;

/// GET /api/charts
pub async fn get_charts(State(state): State<Arc<AppState>>) -> ServerResult<Json<ChartState>> {
    let controller = state.controller.lock().await;

    controller
        .state()
        .charts
        .clone()
        .map(Json)
        .ok_or_else(|| ServerError::NotFound("Charts are not initialized".to_string()))
}
