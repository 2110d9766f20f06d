//! Product Routes
//!
//! - GET /products?search= - List or search products
//! - GET /products/new - Open the add-product modal
//! - POST /products/new/cancel - Close it
//! - POST /products - Save a new product
//! - GET /products/:id/delete - Ask for delete confirmation
//! - POST /products/:id/delete - Delete once confirmed
//! - POST /products/delete/cancel - Drop the pending confirmation
//! - POST /products/:id/edit - Edit (informational only)

use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Form,
};
use maud::Markup;
use serde::Deserialize;
use std::sync::Arc;

use super::render_page;
use crate::dashboard::Section;
use crate::models::ProductForm;
use crate::server::error::{ServerError, ServerResult};
use crate::server::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub confirm: String,
}

/// GET /products
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Markup {
    let mut controller = state.controller.lock().await;
    controller.state_mut().current_section = Section::Products;
    controller.load_products(params.search.as_deref()).await;
    render_page(&mut controller)
}

/// GET /products/new
pub async fn new_product(State(state): State<Arc<AppState>>) -> Markup {
    let mut controller = state.controller.lock().await;
    controller.state_mut().current_section = Section::Products;
    controller.open_add_product_modal();
    render_page(&mut controller)
}

/// POST /products/new/cancel
pub async fn cancel_new_product(State(state): State<Arc<AppState>>) -> Redirect {
    state.controller.lock().await.close_add_product_modal();
    Redirect::to("/")
}

/// POST /products
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ProductForm>,
) -> Redirect {
    state.controller.lock().await.save_product(&form).await;
    Redirect::to("/")
}

/// GET /products/:id/delete
pub async fn confirm_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ServerResult<Markup> {
    let id = parse_id(&id)?;

    let mut controller = state.controller.lock().await;
    controller.delete_product(id, false).await;
    Ok(render_page(&mut controller))
}

/// POST /products/:id/delete
///
/// Anything but `confirm=yes` asks again.
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<DeleteForm>,
) -> ServerResult<Redirect> {
    let id = parse_id(&id)?;
    let confirmed = form.confirm == "yes";
    state.controller.lock().await.delete_product(id, confirmed).await;
    Ok(Redirect::to("/"))
}

/// POST /products/delete/cancel
pub async fn cancel_delete(State(state): State<Arc<AppState>>) -> Redirect {
    state.controller.lock().await.cancel_delete();
    Redirect::to("/")
}

/// POST /products/:id/edit
pub async fn edit_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ServerResult<Redirect> {
    let id = parse_id(&id)?;
    state.controller.lock().await.edit_product(id);
    Ok(Redirect::to("/"))
}

fn parse_id(raw: &str) -> ServerResult<u64> {
    raw.parse()
        .map_err(|_| ServerError::Validation(format!("Invalid product id '{}'", raw)))
}
