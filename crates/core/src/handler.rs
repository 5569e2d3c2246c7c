//! Contract between the dispatch layer and resource implementations.

use std::future::Future;

use serde::Serialize;

use crate::context::RequestContext;
use crate::error::HandlerError;

/// Decoded request body handed to create and update operations.
///
/// Always a string-keyed mapping regardless of the wire format the client
/// selected.
pub type ResourceData = serde_json::Map<String, serde_json::Value>;

/// A CRUD-style backend for one resource collection.
///
/// Implementations own storage and business rules; the dispatch layer owns
/// HTTP. Registering a handler mounts the full verb set for its collection,
/// so every operation must be implemented even if only to fail.
///
/// Operations resolve to `Ok(Some(resource))` when there is a representation
/// to return, `Ok(None)` when the operation succeeded without one, and
/// `Err` when it failed. The error message travels to the client verbatim.
pub trait ResourceHandler {
    /// Representation returned to clients.
    type Resource: Serialize + Send;

    /// Collection name used as the URL path segment.
    ///
    /// Read once at registration time; later changes have no effect on
    /// routing.
    fn resource_name(&self) -> &str;

    /// Store a new resource built from `data`.
    fn create_resource(
        &self,
        ctx: &RequestContext,
        data: ResourceData,
    ) -> impl Future<Output = Result<Option<Self::Resource>, HandlerError>> + Send;

    /// Fetch the resource identified by `id`.
    fn read_resource(
        &self,
        ctx: &RequestContext,
        id: &str,
    ) -> impl Future<Output = Result<Option<Self::Resource>, HandlerError>> + Send;

    /// Replace or amend the resource identified by `id` with `data`.
    fn update_resource(
        &self,
        ctx: &RequestContext,
        id: &str,
        data: ResourceData,
    ) -> impl Future<Output = Result<Option<Self::Resource>, HandlerError>> + Send;

    /// Remove the resource identified by `id`.
    fn delete_resource(
        &self,
        ctx: &RequestContext,
        id: &str,
    ) -> impl Future<Output = Result<Option<Self::Resource>, HandlerError>> + Send;
}
