//! Helpers for driving the router in tests.

use axum::{Router, body::Body};
use bytes::Bytes;
use http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::core::{ApiServer, Config};

/// A fully buffered response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }

    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.body).expect("response body should be UTF-8")
    }

    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn content_type(&self) -> &str {
        self.header(header::CONTENT_TYPE).unwrap_or_default()
    }
}

/// Send a request through a router.
pub async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = tokio_test::assert_ok!(router.oneshot(request).await);
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body,
    }
}

fn app() -> Router {
    ApiServer::new(Config::default()).router()
}

pub async fn get(uri: &str) -> TestResponse {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app(), request).await
}

pub async fn post_json(uri: &str, body: Value) -> TestResponse {
    post(uri, "application/json", body.to_string()).await
}

pub async fn post_form(uri: &str, body: &str) -> TestResponse {
    post(uri, "application/x-www-form-urlencoded", body.to_string()).await
}

pub async fn post(uri: &str, content_type: &str, body: String) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();
    send(app(), request).await
}
