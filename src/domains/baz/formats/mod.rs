//! Output formats for the `/baz` resource.
//!
//! Each format lives in its own file and implements [`FormatRenderer`].
//! The closed set of formats is listed once in `registry.rs`, which is also
//! what the validator uses to reject unknown format names.
//!
//! ## Adding a New Format
//!
//! 1. Create a new file (e.g., `yaml.rs`) implementing `FormatRenderer`
//! 2. Export it here
//! 3. Add a variant to `Format` in `registry.rs`

mod html;
mod json;
mod registry;
mod text;
mod xml;

pub use html::HtmlFormat;
pub use json::JsonFormat;
pub use registry::{Format, supported_formats};
pub use text::TextFormat;
pub use xml::XmlFormat;

use axum::{
    Json,
    http::header,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use thiserror::Error;

/// Trait implemented by every output format.
pub trait FormatRenderer {
    /// Name clients pass in the `format` query parameter.
    const NAME: &'static str;

    /// Content type of the rendered body.
    const CONTENT_TYPE: &'static str;

    /// Render a record, already converted to its JSON form.
    fn render(value: &Value) -> Result<RenderedBody, RenderError>;
}

/// Errors that can occur while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The record could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing into the output buffer failed.
    #[error("Formatting failed: {0}")]
    Format(#[from] std::fmt::Error),

    /// The format needs a keyed record but got something else.
    #[error("{format} rendering requires an object, got {found}")]
    NotAnObject {
        format: &'static str,
        found: &'static str,
    },
}

/// A rendered body before it is attached to a response.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedBody {
    /// Structured JSON, sent through the JSON serializer.
    Json(Value),

    /// Pre-rendered text.
    Text(String),
}

/// A rendered body together with its content type.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub body: RenderedBody,
    pub content_type: &'static str,
}

impl IntoResponse for Rendered {
    fn into_response(self) -> Response {
        match self.body {
            RenderedBody::Json(value) => Json(value).into_response(),
            RenderedBody::Text(text) => {
                ([(header::CONTENT_TYPE, self.content_type)], text).into_response()
            }
        }
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
