//! Foo service: greetings and user registration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domains::validation::{
    ValidationError, as_object, is_present, parse_integer, present_param, to_iso_string,
};

/// Query parameters for `GET /foo`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FooQuery {
    pub name: Option<String>,
    pub age: Option<String>,
}

/// A validated greeting request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub name: String,
    pub age: Option<i64>,
}

/// Response body for `GET /foo`.
#[derive(Debug, Clone, Serialize)]
pub struct GreetingResponse {
    pub message: String,
    pub age: Option<i64>,
    pub details: String,
    pub timestamp: String,
}

/// A validated registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub email: Value,
    pub preferences: Map<String, Value>,
}

/// Response body for `POST /foo`.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationResponse {
    pub message: &'static str,
    pub user: RegisteredUser,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub email: Value,
    pub preferences: Map<String, Value>,
    pub registered_at: String,
}

/// Validate `GET /foo` parameters.
pub fn validate_greeting(query: &FooQuery) -> Result<Greeting, ValidationError> {
    let name = present_param(query.name.as_deref())
        .ok_or_else(|| ValidationError::missing_parameter("name", "Name"))?;

    let age = present_param(query.age.as_deref())
        .map(|raw| parse_integer(raw).ok_or_else(|| ValidationError::invalid_number("age", "Age")))
        .transpose()?;

    Ok(Greeting {
        name: name.to_string(),
        age,
    })
}

/// Build the greeting. An age of zero reads as "not provided".
pub fn greet(greeting: Greeting, now: DateTime<Utc>) -> GreetingResponse {
    let details = match greeting.age {
        Some(age) if age != 0 => format!("You are {age} years old"),
        _ => "Age not provided".to_string(),
    };

    GreetingResponse {
        message: format!("Hello, {}!", greeting.name),
        age: greeting.age,
        details,
        timestamp: to_iso_string(&now),
    }
}

/// Validate a `POST /foo` body.
pub fn validate_registration(
    body: &Map<String, Value>,
) -> Result<Registration, ValidationError> {
    let email = body.get("email");
    if !is_present(email) {
        return Err(ValidationError::missing_field("email", "Email"));
    }

    let preferences = as_object(body.get("preferences"))
        .ok_or_else(|| ValidationError::invalid_object("preferences", "Preferences"))?;

    Ok(Registration {
        email: email.cloned().unwrap_or(Value::Null),
        preferences: preferences.clone(),
    })
}

/// Acknowledge a registration.
pub fn register(registration: Registration, now: DateTime<Utc>) -> RegistrationResponse {
    RegistrationResponse {
        message: "Data received successfully",
        user: RegisteredUser {
            email: registration.email,
            preferences: registration.preferences,
            registered_at: to_iso_string(&now),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn query(name: Option<&str>, age: Option<&str>) -> FooQuery {
        FooQuery {
            name: name.map(str::to_string),
            age: age.map(str::to_string),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_greeting_without_age() {
        let greeting = validate_greeting(&query(Some("John"), None)).unwrap();
        let response = greet(greeting, now());
        assert_eq!(response.message, "Hello, John!");
        assert_eq!(response.age, None);
        assert_eq!(response.details, "Age not provided");
        assert_eq!(response.timestamp, "2024-06-01T12:00:00.000Z");
    }

    #[test]
    fn test_greeting_with_age() {
        let greeting = validate_greeting(&query(Some("John"), Some("30"))).unwrap();
        let response = greet(greeting, now());
        assert_eq!(response.age, Some(30));
        assert_eq!(response.details, "You are 30 years old");
    }

    #[test]
    fn test_greeting_zero_age() {
        let greeting = validate_greeting(&query(Some("Baby"), Some("0"))).unwrap();
        let response = greet(greeting, now());
        assert_eq!(response.age, Some(0));
        assert_eq!(response.details, "Age not provided");
    }

    #[test]
    fn test_empty_age_is_absent() {
        let greeting = validate_greeting(&query(Some("John"), Some(""))).unwrap();
        assert_eq!(greeting.age, None);
    }

    #[test]
    fn test_greeting_errors() {
        let err = validate_greeting(&query(None, Some("30"))).unwrap_err();
        assert_eq!(err.to_string(), "Name parameter is required");

        let err = validate_greeting(&query(Some("John"), Some("invalid"))).unwrap_err();
        assert_eq!(err.to_string(), "Age must be a valid number");
    }

    #[test]
    fn test_registration() {
        let body = json!({
            "email": "john@example.com",
            "preferences": { "theme": "dark", "notifications": true },
        });
        let registration = validate_registration(body.as_object().unwrap()).unwrap();
        let response = register(registration, now());

        assert_eq!(response.message, "Data received successfully");
        assert_eq!(response.user.email, "john@example.com");
        assert_eq!(response.user.preferences["theme"], "dark");
        assert_eq!(response.user.registered_at, "2024-06-01T12:00:00.000Z");
    }

    #[test]
    fn test_registration_errors() {
        let cases = [
            (json!({ "preferences": {} }), "Email is required"),
            (json!({ "email": "", "preferences": {} }), "Email is required"),
            (json!({ "email": "a@b.c" }), "Preferences must be a valid object"),
            (
                json!({ "email": "a@b.c", "preferences": "invalid" }),
                "Preferences must be a valid object",
            ),
            (
                json!({ "email": "a@b.c", "preferences": ["dark"] }),
                "Preferences must be a valid object",
            ),
        ];

        for (body, message) in cases {
            let err = validate_registration(body.as_object().unwrap()).unwrap_err();
            assert_eq!(err.to_string(), message);
        }
    }
}
