//! # restwire-memory
//!
//! In-memory resource handler for demo deployments and tests.
//!
//! Stores each resource as the data mapping it was created from, keyed by a
//! server-assigned UUID under the `id` field. Nothing survives a restart.
//!
//! ## Dependency rule
//! Depends on `restwire-core` only; knows nothing about HTTP.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use restwire_core::{HandlerError, RequestContext, ResourceData, ResourceHandler};

/// A resource collection held in a mutex-guarded map.
///
/// One instance serves one collection; the name given at construction
/// becomes the URL path segment when the handler is registered.
pub struct MemoryResourceHandler {
    name: String,
    items: Mutex<HashMap<String, ResourceData>>,
}

impl MemoryResourceHandler {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Mutex::new(HashMap::new()),
        }
    }

    fn items(&self) -> Result<MutexGuard<'_, HashMap<String, ResourceData>>, HandlerError> {
        self.items
            .lock()
            .map_err(|_| HandlerError::new("resource store poisoned"))
    }
}

impl ResourceHandler for MemoryResourceHandler {
    type Resource = ResourceData;

    fn resource_name(&self) -> &str {
        &self.name
    }

    async fn create_resource(
        &self,
        _ctx: &RequestContext,
        mut data: ResourceData,
    ) -> Result<Option<Self::Resource>, HandlerError> {
        let id = uuid::Uuid::new_v4().to_string();
        // Server-assigned: a client-supplied id field is overwritten.
        data.insert("id".to_string(), serde_json::Value::String(id.clone()));
        self.items()?.insert(id, data.clone());
        Ok(Some(data))
    }

    async fn read_resource(
        &self,
        _ctx: &RequestContext,
        id: &str,
    ) -> Result<Option<Self::Resource>, HandlerError> {
        self.items()?
            .get(id)
            .cloned()
            .map(Some)
            .ok_or_else(|| HandlerError::new(format!("no resource with id {id}")))
    }

    async fn update_resource(
        &self,
        _ctx: &RequestContext,
        id: &str,
        mut data: ResourceData,
    ) -> Result<Option<Self::Resource>, HandlerError> {
        let mut items = self.items()?;
        match items.get_mut(id) {
            Some(stored) => {
                data.insert("id".to_string(), serde_json::Value::String(id.to_string()));
                *stored = data.clone();
                Ok(Some(data))
            }
            None => Err(HandlerError::new(format!("no resource with id {id}"))),
        }
    }

    async fn delete_resource(
        &self,
        _ctx: &RequestContext,
        id: &str,
    ) -> Result<Option<Self::Resource>, HandlerError> {
        self.items()?
            .remove(id)
            .map(Some)
            .ok_or_else(|| HandlerError::new(format!("no resource with id {id}")))
    }
}
