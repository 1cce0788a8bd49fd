//! Sample Resource API Library
//!
//! This crate provides a small HTTP API serving mock resources under `/foo`,
//! `/bar` and `/baz`, with parameter validation and multi-format rendering.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   router assembly and the HTTP transport
//! - **domains**: Business logic organized by resource
//!   - **validation**: Shared validation rules and error taxonomy
//!   - **foo**: Greetings and user registration
//!   - **bar**: Catalog listing and resource publishing
//!   - **baz**: Resource rendering (json, text, html, xml) and payload processing
//!
//! # Example
//!
//! ```rust,no_run
//! use sample_resource_api::core::{ApiServer, Config, HttpTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = HttpTransport::new(config.http.clone());
//!     transport.run(ApiServer::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use crate::core::{ApiServer, Config, Error, Result};
