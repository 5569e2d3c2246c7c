//! Envelope-to-HTTP response mapping.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use restwire_core::{Envelope, Format};

/// A response envelope paired with the status and format to write it with.
///
/// This is the single exit point of every dispatch path: success, handler
/// failure, format rejection, and decode failure all funnel through it, so
/// each request produces exactly one envelope write.
pub struct EnvelopeResponse {
    status: StatusCode,
    format: Format,
    envelope: Envelope,
}

impl EnvelopeResponse {
    /// Build a success envelope, with `result` carrying the serialized
    /// resource when the handler returned one.
    #[must_use]
    pub fn success(status: StatusCode, format: Format, result: Option<serde_json::Value>) -> Self {
        Self {
            status,
            format,
            envelope: Envelope::success(result),
        }
    }

    /// Build a failure envelope carrying `error` verbatim.
    #[must_use]
    pub fn failure(status: StatusCode, format: Format, error: impl Into<String>) -> Self {
        Self {
            status,
            format,
            envelope: Envelope::failure(error),
        }
    }
}

impl IntoResponse for EnvelopeResponse {
    fn into_response(self) -> Response {
        match self.format.encode(&self.envelope) {
            Ok(body) => (
                self.status,
                [(header::CONTENT_TYPE, self.format.content_type())],
                body,
            )
                .into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to encode response envelope");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
