//! Route registration for resource handlers.

use axum::Router;
use axum::routing::{get, post};

use restwire_core::ResourceHandler;

use crate::dispatch;
use crate::state::ResourceState;

/// Version prefix under which every resource collection is mounted.
pub const API_PREFIX: &str = "/api/v0.1";

/// Build the routes for one resource handler.
///
/// The handler's name is read once, here. The collection path takes POST;
/// the item path takes GET, PUT, PATCH, and DELETE, with PUT and PATCH
/// sharing the update dispatcher.
pub fn resource_routes<H>(handler: H) -> Router
where
    H: ResourceHandler + Send + Sync + 'static,
{
    let name = handler.resource_name().to_string();
    tracing::debug!(resource = %name, "registering resource routes");
    let collection = format!("{API_PREFIX}/{name}");
    let item = format!("{collection}/{{id}}");

    Router::new()
        .route(&collection, post(dispatch::create::<H>))
        .route(
            &item,
            get(dispatch::read::<H>)
                .put(dispatch::update::<H>)
                .patch(dispatch::update::<H>)
                .delete(dispatch::delete::<H>),
        )
        .with_state(ResourceState::new(handler))
}

/// Mount a resource handler's routes onto an existing router.
///
/// Each handler owns its route set. Resource names must be unique per
/// router; merging a second handler with the same name panics.
pub fn register_resource_handler<H>(router: Router, handler: H) -> Router
where
    H: ResourceHandler + Send + Sync + 'static,
{
    router.merge(resource_routes(handler))
}
