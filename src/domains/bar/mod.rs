//! Bar domain module.
//!
//! `GET /bar` lists items from a fixed in-memory catalog, `POST /bar`
//! publishes a mock resource.

mod catalog;
mod handlers;
mod service;

pub use catalog::{CatalogItem, Category, category_names, find_category};
pub use handlers::{get_bar, post_bar};
pub use service::{
    BarQuery, Listing, ListingResponse, MAX_RESOURCE_ID, Publication, PublishedResource, list,
    next_resource_id, publish, validate_listing, validate_publication,
};

use axum::{Router, routing::get};

/// Routes served by this domain.
pub fn routes() -> Router {
    Router::new().route("/bar", get(get_bar).post(post_bar))
}
