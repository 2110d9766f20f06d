//! Dashboard HTTP Server
//!
//! Serves the dashboard page and the form endpoints that drive it, built
//! with Axum.
//!
//! # Endpoints
//!
//! ## Pages
//! - `GET /` - Dashboard page
//! - `GET /sections/:name` - Switch to a section
//!
//! ## Products
//! - `GET /products?search=` - List or search products
//! - `GET /products/new` - Open the add-product modal
//! - `POST /products/new/cancel` - Close the modal
//! - `POST /products` - Save a product
//! - `GET /products/:id/delete` - Ask for delete confirmation
//! - `POST /products/:id/delete` - Delete a product
//! - `POST /products/delete/cancel` - Cancel a pending delete
//! - `POST /products/:id/edit` - Edit a product
//!
//! ## Charts
//! - `GET /api/charts` - Chart configs as JSON
//!
//! ## Health
//! - `GET /health/live` - Liveness check
//! - `GET /health/ready` - Readiness check
//! - `GET /health` - Full health status

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the dashboard router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let product_routes = Router::new()
        .route(
            "/",
            get(routes::products::list_products).post(routes::products::create_product),
        )
        .route("/new", get(routes::products::new_product))
        .route("/new/cancel", post(routes::products::cancel_new_product))
        .route(
            "/:id/delete",
            get(routes::products::confirm_delete).post(routes::products::delete_product),
        )
        .route("/delete/cancel", post(routes::products::cancel_delete))
        .route("/:id/edit", post(routes::products::edit_product));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::pages::index))
        .route("/sections/:name", get(routes::pages::show_section))
        .nest("/products", product_routes)
        .route("/api/charts", get(routes::charts::get_charts))
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Initialize the dashboard and serve it until a shutdown signal arrives
pub async fn serve(state: AppState) -> Result<(), ServerError> {
    state.controller.lock().await.initialize().await;

    let addr = state.config.server.addr();
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Inventory dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Inventory dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::{FakeInventory, Mode};
    use crate::config::Config;
    use crate::dashboard::demo::sample_products;
    use crate::dashboard::DashboardController;
    use crate::dashboard::UiState;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    async fn create_test_app(mode: Mode) -> (Router, Arc<FakeInventory>) {
        let fake = Arc::new(FakeInventory::new(mode, sample_products()[..3].to_vec()));
        let mut controller = DashboardController::new(fake.clone(), UiState::new(false, ""));
        controller.initialize().await;

        let router = build_router(AppState::new(controller, Config::default()));
        (router, fake)
    }

    async fn send_get(app: &Router, uri: &str) -> Response {
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn assert_redirects_home(response: &Response) {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _fake) = create_test_app(Mode::Online).await;
        assert_eq!(send_get(&app, "/health/live").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_follows_backend() {
        let (app, fake) = create_test_app(Mode::Online).await;
        assert_eq!(send_get(&app, "/health/ready").await.status(), StatusCode::OK);

        fake.set_mode(Mode::Offline);
        assert_eq!(
            send_get(&app, "/health/ready").await.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _fake) = create_test_app(Mode::Offline).await;

        let response = send_get(&app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let health: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(health["status"], "degraded");
        assert_eq!(health["backend"], "unreachable");
        assert_eq!(health["backend_url"], "http://localhost:8080/api");
    }

    #[tokio::test]
    async fn test_index_shows_dashboard() {
        let (app, _fake) = create_test_app(Mode::Online).await;

        let response = send_get(&app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Retail Inventory"));
        assert!(html.contains(r#"<h3 class="mb-0" id="totalProducts">3</h3>"#));
        assert!(html.contains(r#"<div class="content-section" id="dashboard">"#));
    }

    #[tokio::test]
    async fn test_unknown_section_is_not_found() {
        let (app, _fake) = create_test_app(Mode::Online).await;
        assert_eq!(send_get(&app, "/sections/billing").await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_products_section_offline_shows_samples() {
        let (app, _fake) = create_test_app(Mode::Offline).await;

        let html = body_text(send_get(&app, "/sections/products").await).await;
        assert!(html.contains(r#"<div class="content-section" id="products">"#));
        assert!(html.contains("PLANT001"));
        assert!(html.contains("showing sample data"));
    }

    #[tokio::test]
    async fn test_search_is_forwarded() {
        let (app, fake) = create_test_app(Mode::Online).await;

        let html = body_text(send_get(&app, "/products?search=gaming%20mouse").await).await;
        assert!(html.contains(r#"value="gaming mouse""#));
        assert_eq!(
            fake.searches.lock().unwrap().last(),
            Some(&Some("gaming mouse".to_string()))
        );
    }

    #[tokio::test]
    async fn test_add_product_flow() {
        let (app, fake) = create_test_app(Mode::Online).await;

        let html = body_text(send_get(&app, "/products/new").await).await;
        assert!(html.contains("Add New Product"));

        let response = post_form(
            &app,
            "/products",
            "sku=LAMP001&name=Desk+Lamp&description=&unit_price=29.99&cost_price=12.50\
             &min_stock_level=&max_stock_level=&reorder_point=",
        )
        .await;
        assert_redirects_home(&response);
        assert_eq!(fake.created.lock().unwrap()[0].sku, "LAMP001");

        let html = body_text(send_get(&app, "/").await).await;
        assert!(html.contains("Product added successfully!"));
        assert!(html.contains("Desk Lamp"));
        assert!(!html.contains("Add New Product"));

        // Alerts are shown once
        let html = body_text(send_get(&app, "/").await).await;
        assert!(!html.contains("Product added successfully!"));
    }

    #[tokio::test]
    async fn test_add_product_requires_sku_and_name() {
        let (app, fake) = create_test_app(Mode::Online).await;
        send_get(&app, "/products/new").await;

        let response = post_form(&app, "/products", "sku=&name=Desk+Lamp&unit_price=5").await;
        assert_redirects_home(&response);
        assert!(fake.created.lock().unwrap().is_empty());

        let html = body_text(send_get(&app, "/").await).await;
        assert!(html.contains("alert-warning"));
        assert!(html.contains("SKU and name are required."));
        assert!(html.contains(r#"name="name" value="Desk Lamp""#));
    }

    #[tokio::test]
    async fn test_rejected_product_keeps_form_values() {
        let (app, fake) = create_test_app(Mode::Online).await;
        send_get(&app, "/products/new").await;
        fake.set_mode(Mode::Rejecting);

        let response = post_form(&app, "/products", "sku=LAPTOP001&name=Desk+Lamp&unit_price=5").await;
        assert_redirects_home(&response);

        let html = body_text(send_get(&app, "/").await).await;
        assert!(html.contains("Failed to add product: SKU already exists"));
        assert!(html.contains(r#"name="sku" value="LAPTOP001""#));
        assert!(html.contains(r#"name="unit_price" value="5""#));

        let html = body_text(send_get(&app, "/products/new").await).await;
        assert!(html.contains(r#"name="sku" value="""#));
    }

    #[tokio::test]
    async fn test_invalid_product_id() {
        let (app, _fake) = create_test_app(Mode::Online).await;

        let response = post_form(&app, "/products/abc/edit", "").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_add_product_offline_is_kept_locally() {
        let (app, _fake) = create_test_app(Mode::Offline).await;
        send_get(&app, "/sections/products").await;

        let response = post_form(&app, "/products", "sku=LAMP001&name=Desk+Lamp&unit_price=5").await;
        assert_redirects_home(&response);

        let html = body_text(send_get(&app, "/").await).await;
        assert!(html.contains("Error adding product. Please try again."));
        assert!(html.contains("Product added successfully! (Demo mode)"));
        assert!(html.contains("LAMP001"));
    }

    #[tokio::test]
    async fn test_cancel_add_product() {
        let (app, _fake) = create_test_app(Mode::Online).await;
        send_get(&app, "/products/new").await;

        assert_redirects_home(&post_form(&app, "/products/new/cancel", "").await);
        let html = body_text(send_get(&app, "/").await).await;
        assert!(!html.contains("Add New Product"));
    }

    #[tokio::test]
    async fn test_delete_flow() {
        let (app, fake) = create_test_app(Mode::Online).await;
        send_get(&app, "/sections/products").await;

        let html = body_text(send_get(&app, "/products/2/delete").await).await;
        assert!(html.contains("Are you sure you want to delete this product?"));
        assert_eq!(fake.products.lock().unwrap().len(), 3);

        assert_redirects_home(&post_form(&app, "/products/2/delete", "confirm=yes").await);
        assert!(fake.products.lock().unwrap().iter().all(|p| p.id != 2));

        let html = body_text(send_get(&app, "/").await).await;
        assert!(html.contains("Product deleted successfully!"));
        assert!(!html.contains("MOUSE001"));
    }

    #[tokio::test]
    async fn test_cancel_delete() {
        let (app, fake) = create_test_app(Mode::Online).await;
        send_get(&app, "/products/1/delete").await;

        assert_redirects_home(&post_form(&app, "/products/delete/cancel", "").await);
        let html = body_text(send_get(&app, "/").await).await;
        assert!(!html.contains("Are you sure"));
        assert_eq!(fake.products.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_edit_shows_info() {
        let (app, _fake) = create_test_app(Mode::Online).await;

        assert_redirects_home(&post_form(&app, "/products/1/edit", "").await);
        let html = body_text(send_get(&app, "/").await).await;
        assert!(html.contains("Edit functionality will be implemented in the full version."));
        assert!(html.contains("alert-info"));
    }

    #[tokio::test]
    async fn test_charts_json() {
        let (app, _fake) = create_test_app(Mode::Online).await;

        let response = send_get(&app, "/api/charts").await;
        assert_eq!(response.status(), StatusCode::OK);

        let charts: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(charts["sales"]["canvas_id"], "salesChart");
        assert_eq!(charts["sales"]["config"]["type"], "line");
        assert_eq!(charts["inventory"]["config"]["type"], "doughnut");
    }
}
