//! Failure type reported by resource handlers.

/// Error returned by a resource-handler operation.
///
/// Handlers report failures as a plain message; the dispatch layer folds
/// the message into the response envelope verbatim, so it should read as a
/// complete sentence fragment (for example `"no resource with id 42"`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message carried into the response envelope.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
