//! Shared dispatch state for axum handlers.

use std::sync::Arc;

use restwire_core::ResourceHandler;

/// State carried by every route of one registered resource.
///
/// Generic over the handler type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the handler itself does not need to be `Clone`;
/// only the `Arc` wrapper is cloned.
pub struct ResourceState<H> {
    /// The externally supplied CRUD backend.
    pub handler: Arc<H>,
}

impl<H> Clone for ResourceState<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<H> ResourceState<H>
where
    H: ResourceHandler + Send + Sync + 'static,
{
    /// Wrap a handler for route registration.
    pub fn new(handler: H) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }
}
