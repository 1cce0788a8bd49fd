//! API server and router assembly.
//!
//! Each domain exposes its own `routes()`; this module merges them with the
//! root and health endpoints and wraps the result in the HTTP middleware
//! stack. **Adding a new resource does NOT require modifying the
//! transport.**

use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use super::config::Config;
use crate::domains::{bar, baz, foo, validation::to_iso_string};

/// The API server.
///
/// Holds the configuration and builds the router. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct ApiServer {
    config: Arc<Config>,
}

impl ApiServer {
    /// Create a new API server with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Build the full application router.
    pub fn router(&self) -> Router {
        info!("Building router for {} v{}", self.name(), self.version());

        let mut app = Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_check))
            .merge(foo::routes())
            .merge(bar::routes())
            .merge(baz::routes())
            .fallback(not_found)
            .layer(TraceLayer::new_for_http());

        if self.config.http.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }
}

/// Root handler.
async fn root_handler() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to the API" }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": to_iso_string(&chrono::Utc::now())
    }))
}

async fn not_found(uri: axum::http::Uri) -> impl IntoResponse {
    warn!("No route for {}", uri.path());
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get, post, send};
    use axum::body::Body;
    use http::{Method, Request, header};

    #[tokio::test]
    async fn test_root() {
        let res = get("/").await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.json(), json!({ "message": "Welcome to the API" }));
    }

    #[tokio::test]
    async fn test_health() {
        let res = get("/health").await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.json()["status"], "healthy");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let res = get("/qux").await;
        assert_eq!(res.status, StatusCode::NOT_FOUND);
        assert_eq!(res.json(), json!({ "error": "Not found" }));
    }

    #[tokio::test]
    async fn test_malformed_json_body() {
        let res = post("/bar", "application/json", "{\"title\":".to_string()).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        let error = res.json()["error"].as_str().unwrap().to_string();
        assert!(error.starts_with("Invalid request body: "), "{error}");
    }

    #[tokio::test]
    async fn test_form_body_is_decoded() {
        let res = post(
            "/baz",
            "application/x-www-form-urlencoded",
            "data=plain".to_string(),
        )
        .await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.json(), json!({ "error": "Data must be a valid object" }));

        let res = post(
            "/bar",
            "application/x-www-form-urlencoded",
            "description=d".to_string(),
        )
        .await;
        assert_eq!(res.json(), json!({ "error": "Title is required" }));
    }

    #[tokio::test]
    async fn test_wrong_method() {
        let request = Request::builder()
            .method(Method::DELETE)
            .uri("/baz")
            .body(Body::empty())
            .unwrap();
        let res = send(ApiServer::new(Config::default()).router(), request).await;
        assert_eq!(res.status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_cors_header_follows_config() {
        let request = || {
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "http://example.com")
                .body(Body::empty())
                .unwrap()
        };

        let res = send(ApiServer::new(Config::default()).router(), request()).await;
        assert_eq!(res.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), Some("*"));

        let mut config = Config::default();
        config.http.enable_cors = false;
        let res = send(ApiServer::new(config).router(), request()).await;
        assert_eq!(res.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), None);
    }

    #[test]
    fn test_server_identity() {
        let server = ApiServer::new(Config::default());
        assert_eq!(server.name(), "sample-resource-api");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }
}
