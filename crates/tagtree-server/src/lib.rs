//! HTTP server for the bundled tagtree pages.
//!
//! Serves every [`Page`](tagtree_site::Page) as a complete HTML document:
//! - `GET /`: index page linking to the others
//! - `GET /pages/{name}`: a single page
//! - `GET /api/pages`: JSON listing of page names and titles
//!
//! # Quick Start
//!
//! ```ignore
//! use tagtree_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 7878,
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use tagtree_config::SiteConfig;

pub use app::create_router;
pub use error::ServerError;
pub use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Site-wide page settings.
    pub site: SiteConfig,
    /// Application version, reported by `GET /api/pages`.
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
            site: SiteConfig::default(),
            version: String::new(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener fails.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        site: config.site,
        version: config.version,
    });

    let app = create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from a loaded `tagtree.toml`.
#[must_use]
pub fn server_config_from_config(
    config: &tagtree_config::Config,
    version: String,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        site: config.site.clone(),
        version,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_server_config_from_config() {
        let mut config = tagtree_config::Config::default();
        config.server.host = "0.0.0.0".to_owned();
        config.server.port = 9000;
        config.site.title = "Docs".to_owned();

        let server = server_config_from_config(&config, "1.2.3".to_owned());

        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 9000);
        assert_eq!(server.site.title, "Docs");
        assert_eq!(server.version, "1.2.3");
    }

    #[test]
    fn test_default_matches_config_defaults() {
        let server = ServerConfig::default();
        let config = tagtree_config::Config::default();

        assert_eq!(server.host, config.server.host);
        assert_eq!(server.port, config.server.port);
    }
}
