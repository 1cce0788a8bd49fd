//! Transport layer for the API server.
//!
//! The server speaks plain HTTP. This module owns everything between the
//! socket and the domain handlers: listener configuration, bind/serve
//! errors, query string and request body decoding.

mod body;
mod config;
mod error;
pub mod http;
mod query;

pub use body::{RequestBody, decode_body};
pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::HttpTransport;
pub use query::{QueryParams, decode_query};
