//! Baz service: resource lookup and payload processing.
//!
//! Both operations are pure apart from reading the clock, which callers pass
//! in explicitly so results can be checked deterministically.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::formats::{Format, supported_formats};
use super::record::ResourceRecord;
use crate::domains::validation::{
    ValidationError, as_object, is_present, parse_timestamp, present_param, to_iso_string,
};

/// Message used when the client sent no timestamp.
pub const NO_TIMESTAMP: &str = "No request timestamp provided";

/// Query parameters for `GET /baz`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BazQuery {
    pub id: Option<String>,
    pub format: Option<String>,
}

/// A validated lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub id: String,
    pub format: Format,
}

/// A validated processing request.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRequest {
    pub data: Map<String, Value>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Response body for `POST /baz`.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessResponse {
    pub success: bool,
    pub message: &'static str,
    pub result: Map<String, Value>,
}

/// Validate `GET /baz` parameters.
///
/// `format` falls back to json only when the parameter is missing
/// altogether; an empty value is an unsupported format.
pub fn validate_lookup(query: &BazQuery) -> Result<LookupRequest, ValidationError> {
    let id = present_param(query.id.as_deref())
        .ok_or_else(|| ValidationError::missing_parameter("id", "ID"))?;

    let format = match query.format.as_deref() {
        None => Format::DEFAULT,
        Some(name) => Format::from_name(name)
            .ok_or_else(|| ValidationError::unsupported_format(supported_formats()))?,
    };

    Ok(LookupRequest {
        id: id.to_string(),
        format,
    })
}

/// Validate a `POST /baz` body.
pub fn validate_process(body: &Map<String, Value>) -> Result<ProcessRequest, ValidationError> {
    let data = as_object(body.get("data"))
        .ok_or_else(|| ValidationError::invalid_object("data", "Data"))?;

    let raw_timestamp = body.get("timestamp");
    let timestamp = match raw_timestamp {
        Some(value) if is_present(raw_timestamp) => Some(
            parse_timestamp(value)
                .ok_or_else(|| ValidationError::invalid_date("timestamp", "Timestamp"))?,
        ),
        _ => None,
    };

    Ok(ProcessRequest {
        data: data.clone(),
        timestamp,
    })
}

/// Build the resource record and pick its format.
pub fn lookup(request: &LookupRequest, now: DateTime<Utc>) -> ResourceRecord {
    debug!(id = %request.id, format = request.format.name(), "Building resource record");
    ResourceRecord::build_at(&request.id, now)
}

/// Augment the client's data with processing metadata.
///
/// Client keys keep their position. The metadata keys are appended, or
/// replace a client value of the same name in place.
pub fn process(request: ProcessRequest, now: DateTime<Utc>) -> ProcessResponse {
    let mut result = request.data;

    let (request_timestamp, processing_time) = match request.timestamp {
        Some(sent_at) => {
            let elapsed = now.timestamp_millis() - sent_at.timestamp_millis();
            (
                Value::String(to_iso_string(&sent_at)),
                Value::String(format!("{elapsed}ms")),
            )
        }
        None => (Value::Null, Value::String(NO_TIMESTAMP.to_string())),
    };

    result.insert("processed".to_string(), Value::Bool(true));
    result.insert("requestTimestamp".to_string(), request_timestamp);
    result.insert(
        "serverTimestamp".to_string(),
        Value::String(to_iso_string(&now)),
    );
    result.insert("processingTime".to_string(), processing_time);

    ProcessResponse {
        success: true,
        message: "Data processed successfully",
        result,
    }
}
