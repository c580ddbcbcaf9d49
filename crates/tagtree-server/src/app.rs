//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/", get(handlers::pages::get_index))
        .route("/pages/{name}", get(handlers::pages::get_page))
        .route("/api/pages", get(handlers::pages::list_pages));

    security::with_security_headers(router)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
