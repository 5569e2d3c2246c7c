//! # restwire-core
//!
//! Contract layer for the restwire resource dispatch pipeline.
//!
//! ## Responsibilities
//! - Define the [`ResourceHandler`] capability that pluggable handlers implement
//! - Define the uniform response [`Envelope`] written by every endpoint
//! - Define the [`Format`] registry mapping the `format` query parameter to
//!   an encode/decode strategy
//! - Define [`RequestContext`], the inert per-request value handed to handlers
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and no HTTP types.
//! The axum layer (`restwire-axum`) maps requests onto these contracts;
//! handler implementations (e.g. `restwire-memory`) only ever see this crate.

pub mod context;
pub mod envelope;
pub mod error;
pub mod format;
pub mod handler;

pub use context::RequestContext;
pub use envelope::Envelope;
pub use error::HandlerError;
pub use format::{Format, FormatError};
pub use handler::{ResourceData, ResourceHandler};
