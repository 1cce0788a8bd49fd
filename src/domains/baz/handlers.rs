//! HTTP handlers for `/baz`.

use axum::{Json, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use tracing::{info, instrument};

use super::formats::Rendered;
use super::service::{self, BazQuery};
use crate::core::{
    Result,
    transport::{QueryParams, RequestBody},
};

/// `GET /baz` - render a resource in the requested format.
#[instrument(skip_all)]
pub async fn get_baz(
    QueryParams(query): QueryParams<BazQuery>,
) -> Result<Rendered> {
    let request = service::validate_lookup(&query)?;
    let record = service::lookup(&request, Utc::now());

    info!("Rendering resource {} as {}", request.id, request.format.name());
    Ok(request.format.render(&record)?)
}

/// `POST /baz` - process a data payload.
#[instrument(skip_all)]
pub async fn post_baz(RequestBody(body): RequestBody) -> Result<impl IntoResponse> {
    let request = service::validate_process(&body)?;

    info!(
        fields = request.data.len(),
        timestamped = request.timestamp.is_some(),
        "Processing data payload"
    );
    let response = service::process(request, Utc::now());

    Ok((StatusCode::CREATED, Json(response)))
}
