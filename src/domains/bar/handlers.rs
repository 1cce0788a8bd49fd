//! HTTP handlers for `/bar`.

use axum::{Json, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use tracing::{info, instrument};

use super::service::{self, BarQuery, ListingResponse};
use crate::core::{
    Result,
    transport::{QueryParams, RequestBody},
};

/// `GET /bar` - list the items of a category.
#[instrument(skip_all)]
pub async fn get_bar(
    QueryParams(query): QueryParams<BarQuery>,
) -> Result<Json<ListingResponse>> {
    let listing = service::validate_listing(&query)?;
    info!(
        "Listing category {} (limit {})",
        listing.category.name, listing.limit
    );

    Ok(Json(service::list(&listing)))
}

/// `POST /bar` - publish a new resource.
#[instrument(skip_all)]
pub async fn post_bar(RequestBody(body): RequestBody) -> Result<impl IntoResponse> {
    let publication = service::validate_publication(&body)?;
    let id = service::next_resource_id();
    info!(id, tags = publication.tags.len(), "Publishing resource");

    Ok((
        StatusCode::CREATED,
        Json(service::publish(publication, id, Utc::now())),
    ))
}
