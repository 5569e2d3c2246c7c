//! Per-request context handed to resource handlers.

use std::collections::HashMap;

/// Request-scoped values a handler may consult.
///
/// Carries the path parameters extracted by the routing layer. Handlers
/// receive their resource id as an explicit argument; the context exists
/// for everything else a deployment might route on.
#[derive(Debug, Default)]
pub struct RequestContext {
    params: HashMap<String, String>,
}

impl RequestContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a path parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Look up a path parameter by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}
