//! Query string extraction.
//!
//! A repeated key keeps its first value (`?id=1&id=2` reads `id` as `"1"`).
//! Failures render as JSON errors like every other rejection.

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::core::Error;

/// Query parameters deserialized into `T`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        decode_query(parts.uri.query().unwrap_or_default()).map(Self)
    }
}

/// Decode a raw query string into `T`, keeping the first value of each key.
pub fn decode_query<T: DeserializeOwned>(query: &str) -> Result<T, Error> {
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(query).map_err(|e| Error::invalid_query(e.to_string()))?;

    let mut fields = Map::new();
    for (key, value) in pairs {
        fields.entry(key).or_insert(Value::String(value));
    }

    serde_json::from_value(Value::Object(fields)).map_err(|e| Error::invalid_query(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Lookup {
        id: Option<String>,
        format: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    struct Paged {
        #[allow(dead_code)]
        page: u32,
    }

    #[test]
    fn test_first_value_wins() {
        let lookup: Lookup = decode_query("id=1&id=2&format=xml").unwrap();
        assert_eq!(lookup.id.as_deref(), Some("1"));
        assert_eq!(lookup.format.as_deref(), Some("xml"));
    }

    #[test]
    fn test_missing_and_unknown_keys() {
        let lookup: Lookup = decode_query("other=1").unwrap();
        assert!(lookup.id.is_none());
        assert!(lookup.format.is_none());

        let lookup: Lookup = decode_query("").unwrap();
        assert!(lookup.id.is_none());
    }

    #[test]
    fn test_percent_decoding() {
        let lookup: Lookup = decode_query("id=a%20b&format=j+s").unwrap();
        assert_eq!(lookup.id.as_deref(), Some("a b"));
        assert_eq!(lookup.format.as_deref(), Some("j s"));
    }

    #[test]
    fn test_type_mismatch_is_invalid_query() {
        let err = decode_query::<Paged>("page=2").unwrap_err();
        assert!(matches!(err, Error::InvalidQuery(_)));
    }
}
