//! Bar service: catalog listing and resource publishing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::catalog::{CatalogItem, Category, category_names, find_category};
use crate::domains::validation::{
    ValidationError, is_present, parse_integer, present_param, to_iso_string,
};

/// Upper bound for generated resource ids.
pub const MAX_RESOURCE_ID: u32 = 10_000;

/// Query parameters for `GET /bar`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BarQuery {
    pub category: Option<String>,
    pub limit: Option<String>,
}

/// A validated listing request.
#[derive(Debug)]
pub struct Listing {
    pub category: &'static Category,
    pub limit: i64,
}

/// Response body for `GET /bar`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub category: &'static str,
    pub total_items: usize,
    pub limit: i64,
    pub items: Vec<CatalogItem>,
}

/// A validated publication.
#[derive(Debug, Clone, PartialEq)]
pub struct Publication {
    pub title: Value,
    pub description: Value,
    pub tags: Vec<Value>,
}

/// Response body for `POST /bar`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedResource {
    pub id: u32,
    pub title: Value,
    pub description: Value,
    pub tags: Vec<Value>,
    pub created_at: String,
    pub status: &'static str,
}

/// Validate `GET /bar` parameters.
///
/// The category is resolved before the limit is parsed, so an unknown
/// category wins over a malformed limit.
pub fn validate_listing(query: &BarQuery) -> Result<Listing, ValidationError> {
    let name = present_param(query.category.as_deref())
        .ok_or_else(|| ValidationError::missing_parameter("category", "Category"))?;

    let category = find_category(name)
        .ok_or_else(|| ValidationError::category_not_found(category_names()))?;

    let limit = match present_param(query.limit.as_deref()) {
        Some(raw) => {
            parse_integer(raw).ok_or_else(|| ValidationError::invalid_number("limit", "Limit"))?
        }
        None => category.items.len() as i64,
    };

    Ok(Listing { category, limit })
}

/// List the items of a category, cut at `limit`.
pub fn list(listing: &Listing) -> ListingResponse {
    let items = listing.category.items;
    let end = slice_end(items.len(), listing.limit);

    ListingResponse {
        category: listing.category.name,
        total_items: items.len(),
        limit: listing.limit,
        items: items[..end].to_vec(),
    }
}

/// End index for a limit: negative limits count back from the end.
fn slice_end(len: usize, limit: i64) -> usize {
    if limit < 0 {
        let back = usize::try_from(limit.unsigned_abs()).unwrap_or(usize::MAX);
        len.saturating_sub(back)
    } else {
        usize::try_from(limit).unwrap_or(usize::MAX).min(len)
    }
}

/// Validate a `POST /bar` body.
pub fn validate_publication(body: &Map<String, Value>) -> Result<Publication, ValidationError> {
    let title = body.get("title");
    if !is_present(title) {
        return Err(ValidationError::missing_field("title", "Title"));
    }

    let description = body.get("description");
    if !is_present(description) {
        return Err(ValidationError::missing_field("description", "Description"));
    }

    let tags = body
        .get("tags")
        .and_then(Value::as_array)
        .ok_or_else(|| ValidationError::invalid_array("tags", "Tags"))?;

    Ok(Publication {
        title: title.cloned().unwrap_or(Value::Null),
        description: description.cloned().unwrap_or(Value::Null),
        tags: tags.clone(),
    })
}

/// Generate an id for a newly published resource.
pub fn next_resource_id() -> u32 {
    fastrand::u32(1..=MAX_RESOURCE_ID)
}

/// Publish a resource under `id`.
pub fn publish(publication: Publication, id: u32, now: DateTime<Utc>) -> PublishedResource {
    PublishedResource {
        id,
        title: publication.title,
        description: publication.description,
        tags: publication.tags,
        created_at: to_iso_string(&now),
        status: "published",
    }
}
