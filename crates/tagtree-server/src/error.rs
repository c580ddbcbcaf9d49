//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tagtree_site::SiteError;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No bundled page has this name.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// A page failed to render.
    #[error("Render error: {0}")]
    Render(String),
}

impl From<SiteError> for ServerError {
    fn from(err: SiteError) -> Self {
        match err {
            SiteError::UnknownPage(name) => Self::PageNotFound(name),
            SiteError::Render(e) => Self::Render(e.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PageNotFound(name) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "page": name}),
            ),
            Self::Render(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": message}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
