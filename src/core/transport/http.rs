//! HTTP transport implementation.
//!
//! Binds a TCP listener and serves the API router on it.

use tracing::info;

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::ApiServer;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Run the HTTP transport until the server stops.
    pub async fn run(self, server: ApiServer) -> TransportResult<()> {
        let addr = self.address();
        let app = server.router();

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if server.config().http.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Resources: GET|POST /foo, /bar, /baz");
        info!("  → Health:    GET /health");

        axum::serve(listener, app).await?;

        Ok(())
    }
}
