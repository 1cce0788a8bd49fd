//! The resource record served by `GET /baz`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domains::validation::to_iso_string;

/// A mock resource derived from its id.
///
/// Field order is part of the wire format: the text, html and xml renderers
/// all emit fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
}

impl ResourceRecord {
    /// Build the record for `id`, stamped with the current time.
    pub fn build(id: &str) -> Self {
        Self::build_at(id, Utc::now())
    }

    /// Build the record for `id`, stamped with `created_at`.
    pub fn build_at(id: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            name: format!("Resource {id}"),
            description: format!("This is resource {id}"),
            created_at: to_iso_string(&created_at),
        }
    }
}
