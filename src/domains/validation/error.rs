//! Validation error types.

use http::StatusCode;
use serde_json::{Value, json};
use thiserror::Error;

/// Errors produced while validating request parameters or bodies.
///
/// Every variant is terminal for the request: handlers return it as-is and
/// the HTTP layer turns it into a JSON body with [`ValidationError::to_body`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A single field failed validation.
    #[error("{message}")]
    Field {
        /// Name of the offending field, as it appears on the wire.
        field: &'static str,
        /// Client-facing message.
        message: String,
    },

    /// The requested output format is not in the format registry.
    #[error("Unsupported format")]
    UnsupportedFormat {
        supported_formats: Vec<&'static str>,
    },

    /// The requested category does not exist in the catalog.
    #[error("Category not found")]
    CategoryNotFound {
        available_categories: Vec<&'static str>,
    },
}

impl ValidationError {
    /// `"<Label> parameter is required"`, used for query parameters.
    pub fn missing_parameter(field: &'static str, label: &str) -> Self {
        Self::field(field, format!("{label} parameter is required"))
    }

    /// `"<Label> is required"`, used for body fields.
    pub fn missing_field(field: &'static str, label: &str) -> Self {
        Self::field(field, format!("{label} is required"))
    }

    /// `"<Label> must be a valid number"`.
    pub fn invalid_number(field: &'static str, label: &str) -> Self {
        Self::field(field, format!("{label} must be a valid number"))
    }

    /// `"<Label> must be a valid object"`.
    pub fn invalid_object(field: &'static str, label: &str) -> Self {
        Self::field(field, format!("{label} must be a valid object"))
    }

    /// `"<Label> must be a valid array"`.
    pub fn invalid_array(field: &'static str, label: &str) -> Self {
        Self::field(field, format!("{label} must be a valid array"))
    }

    /// `"<Label> must be a valid date string"`.
    pub fn invalid_date(field: &'static str, label: &str) -> Self {
        Self::field(field, format!("{label} must be a valid date string"))
    }

    /// Create an "unsupported format" error listing the allowed formats.
    pub fn unsupported_format(supported_formats: Vec<&'static str>) -> Self {
        Self::UnsupportedFormat { supported_formats }
    }

    /// Create a "category not found" error listing the known categories.
    pub fn category_not_found(available_categories: Vec<&'static str>) -> Self {
        Self::CategoryNotFound {
            available_categories,
        }
    }

    fn field(field: &'static str, message: String) -> Self {
        Self::Field { field, message }
    }

    /// Name of the field this error refers to.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Field { field, .. } => *field,
            Self::UnsupportedFormat { .. } => "format",
            Self::CategoryNotFound { .. } => "category",
        }
    }

    /// HTTP status for this error.
    ///
    /// An unknown category is a well-formed request for something that does
    /// not exist, so it maps to 404; everything else is a 400.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::CategoryNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// JSON body sent to the client.
    pub fn to_body(&self) -> Value {
        match self {
            Self::Field { message, .. } => json!({ "error": message }),
            Self::UnsupportedFormat { supported_formats } => json!({
                "error": self.to_string(),
                "supportedFormats": supported_formats,
            }),
            Self::CategoryNotFound {
                available_categories,
            } => json!({
                "error": self.to_string(),
                "availableCategories": available_categories,
            }),
        }
    }
}
