//! # restwire-axum
//!
//! HTTP dispatch layer built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Bind the CRUD verb set of a resource handler to routes under the
//!   versioned API prefix (`/api/v0.1/<name>`, `/api/v0.1/<name>/{id}`)
//! - Resolve the response serialization from the `format` query parameter
//! - Decode request bodies into the string-keyed mapping handlers consume
//! - Fold every outcome into the uniform response envelope with the
//!   matching HTTP status
//!
//! ## Dependency rule
//! Depends on `restwire-core` for the handler contract, envelope, and
//! format registry. Never leaks axum types into the contract: handlers
//! stay plain Rust traits.

#[allow(clippy::missing_errors_doc)]
pub mod dispatch;
pub mod error;
pub mod register;
pub mod response;
pub mod state;
