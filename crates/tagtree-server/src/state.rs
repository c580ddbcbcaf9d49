//! Application state.

use tagtree_config::SiteConfig;

/// State shared across all handlers.
#[derive(Debug)]
pub struct AppState {
    /// Site-wide page settings.
    pub site: SiteConfig,
    /// Application version.
    pub version: String,
}
