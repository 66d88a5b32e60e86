//! # innkeep-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** under `/api/v1/hotels`
//! - Publish its `OpenAPI` document at `/api/v1/openapi.json`
//! - Decode query strings, path ids and bodies into domain inputs; every
//!   decode failure becomes a validation error with a JSON `detail` body
//! - Map application results into HTTP responses (status code + JSON)
//!
//! ## Dependency rule
//! Depends on `innkeep-app` (for port traits and services) and `innkeep-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
