//! HTTP handlers for `/foo`.

use axum::{Json, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use tracing::{info, instrument};

use super::service::{self, FooQuery, GreetingResponse};
use crate::core::{
    Result,
    transport::{QueryParams, RequestBody},
};

/// `GET /foo` - greet the caller.
#[instrument(skip_all)]
pub async fn get_foo(
    QueryParams(query): QueryParams<FooQuery>,
) -> Result<Json<GreetingResponse>> {
    let greeting = service::validate_greeting(&query)?;
    info!("Greeting {}", greeting.name);

    Ok(Json(service::greet(greeting, Utc::now())))
}

/// `POST /foo` - register a user's preferences.
#[instrument(skip_all)]
pub async fn post_foo(RequestBody(body): RequestBody) -> Result<impl IntoResponse> {
    let registration = service::validate_registration(&body)?;
    info!(
        preferences = registration.preferences.len(),
        "Registering user"
    );

    Ok((
        StatusCode::CREATED,
        Json(service::register(registration, Utc::now())),
    ))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{get, post_form, post_json};
    use http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_with_name() {
        let res = get("/foo?name=John").await;
        assert_eq!(res.status, StatusCode::OK);

        let body = res.json();
        assert_eq!(body["message"], "Hello, John!");
        assert!(body["age"].is_null());
        assert_eq!(body["details"], "Age not provided");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_get_with_name_and_age() {
        let res = get("/foo?name=John&age=30").await;
        assert_eq!(res.status, StatusCode::OK);

        let body = res.json();
        assert_eq!(body["age"], 30);
        assert_eq!(body["details"], "You are 30 years old");
    }

    #[tokio::test]
    async fn test_get_errors() {
        let res = get("/foo").await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.json(), json!({ "error": "Name parameter is required" }));

        let res = get("/foo?name=John&age=invalid").await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.json(), json!({ "error": "Age must be a valid number" }));
    }

    #[tokio::test]
    async fn test_post_registration() {
        let res = post_json(
            "/foo",
            json!({
                "email": "john@example.com",
                "preferences": { "theme": "dark", "notifications": true },
            }),
        )
        .await;
        assert_eq!(res.status, StatusCode::CREATED);

        let body = res.json();
        assert_eq!(body["message"], "Data received successfully");
        assert_eq!(body["user"]["email"], "john@example.com");
        assert_eq!(body["user"]["preferences"]["theme"], "dark");
        assert_eq!(body["user"]["preferences"]["notifications"], true);
        assert!(body["user"]["registeredAt"].is_string());
    }

    #[tokio::test]
    async fn test_post_errors() {
        let res = post_json("/foo", json!({ "preferences": { "theme": "dark" } })).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.json(), json!({ "error": "Email is required" }));

        let res = post_json("/foo", json!({ "email": "john@example.com" })).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            res.json(),
            json!({ "error": "Preferences must be a valid object" })
        );
    }

    #[tokio::test]
    async fn test_post_form_with_nested_preferences() {
        let res = post_form(
            "/foo",
            "email=john%40example.com&preferences%5Btheme%5D=dark&preferences[lang]=en",
        )
        .await;
        assert_eq!(res.status, StatusCode::CREATED);

        let body = res.json();
        assert_eq!(body["user"]["email"], "john@example.com");
        assert_eq!(
            body["user"]["preferences"],
            json!({ "theme": "dark", "lang": "en" })
        );
    }

    #[tokio::test]
    async fn test_post_form_flat_preferences_rejected() {
        let res = post_form("/foo", "email=john%40example.com&preferences=dark").await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            res.json(),
            json!({ "error": "Preferences must be a valid object" })
        );
    }

    #[tokio::test]
    async fn test_get_repeated_name_uses_first() {
        let res = get("/foo?name=John&name=Jane").await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.json()["message"], "Hello, John!");
    }
}
