//! Foo domain module.
//!
//! `GET /foo` greets a named caller, `POST /foo` acknowledges a user
//! registration.

mod handlers;
mod service;

pub use handlers::{get_foo, post_foo};
pub use service::{
    FooQuery, Greeting, GreetingResponse, RegisteredUser, Registration, RegistrationResponse,
    greet, register, validate_greeting, validate_registration,
};

use axum::{Router, routing::get};

/// Routes served by this domain.
pub fn routes() -> Router {
    Router::new().route("/foo", get(get_foo).post(post_foo))
}
