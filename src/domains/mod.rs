//! Domains module containing business logic organized by resource.
//!
//! Each resource module keeps its validation and response building in a
//! `service` that knows nothing about HTTP, and exposes thin axum handlers
//! plus a `routes()` function that the server merges into its router.

pub mod bar;
pub mod baz;
pub mod foo;
pub mod validation;
