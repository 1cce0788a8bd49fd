//! Baz domain module.
//!
//! `GET /baz` builds a mock resource record from an id and renders it in one
//! of several formats; `POST /baz` stamps a client payload with processing
//! metadata.
//!
//! ## Architecture
//!
//! - `formats/` - One renderer per output format, plus the format registry
//! - `record.rs` - The resource record and its builder
//! - `service.rs` - Validation and processing, free of HTTP concerns
//! - `handlers.rs` - axum handlers

pub mod formats;
mod handlers;
mod record;
mod service;

pub use formats::{Format, supported_formats};
pub use handlers::{get_baz, post_baz};
pub use record::ResourceRecord;
pub use service::{
    BazQuery, LookupRequest, ProcessRequest, ProcessResponse, lookup, process, validate_lookup,
    validate_process,
};

use axum::{Router, routing::get};

/// Routes served by this domain.
pub fn routes() -> Router {
    Router::new().route("/baz", get(get_baz).post(post_baz))
}
