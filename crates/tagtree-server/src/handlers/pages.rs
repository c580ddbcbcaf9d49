//! Page endpoints.
//!
//! `GET /` and `GET /pages/{name}` answer with full HTML documents;
//! `GET /api/pages` lists the bundled pages as JSON.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::Html;
use serde::Serialize;
use tagtree_site::{Page, render_page};

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/pages.
#[derive(Serialize)]
pub(crate) struct PagesResponse {
    /// Application version.
    version: String,
    /// Bundled pages in index order.
    pages: Vec<PageEntry>,
}

/// Single entry of [`PagesResponse`].
#[derive(Serialize)]
struct PageEntry {
    name: &'static str,
    title: &'static str,
    path: String,
}

impl From<Page> for PageEntry {
    fn from(page: Page) -> Self {
        Self {
            name: page.name(),
            title: page.title(),
            path: format!("/pages/{}", page.name()),
        }
    }
}

/// Handle GET /.
pub(crate) async fn get_index(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ServerError> {
    render(&state, Page::Index)
}

/// Handle GET /pages/{name}.
pub(crate) async fn get_page(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ServerError> {
    let page: Page = name.parse()?;
    render(&state, page)
}

/// Handle GET /api/pages.
pub(crate) async fn list_pages(State(state): State<Arc<AppState>>) -> Json<PagesResponse> {
    Json(PagesResponse {
        version: state.version.clone(),
        pages: Page::ALL.into_iter().map(PageEntry::from).collect(),
    })
}

fn render(state: &AppState, page: Page) -> Result<Html<String>, ServerError> {
    render_page(&state.site, page).map(Html).map_err(|e| {
        tracing::error!(page = %page, error = %e, "Failed to render page");
        ServerError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_page_entry_serialization() {
        let json = serde_json::to_value(PageEntry::from(Page::Login)).unwrap();

        assert_eq!(json["name"], "login");
        assert_eq!(json["title"], "Login");
        assert_eq!(json["path"], "/pages/login");
    }
}
