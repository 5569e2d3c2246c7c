//! Dispatch failure to envelope response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use restwire_core::{Format, FormatError, HandlerError};

use crate::response::EnvelopeResponse;

/// Failure raised somewhere along the dispatch pipeline.
///
/// Every variant terminates the request with a failure envelope; the
/// message reaches the client verbatim.
pub enum DispatchError {
    /// The `format` query parameter names no registered format.
    UnsupportedFormat(FormatError),
    /// The request body could not be decoded into a data mapping.
    MalformedBody(Format, serde_json::Error),
    /// The delegated handler call failed.
    Handler(Format, HandlerError),
    /// The resource returned by the handler could not be serialized.
    UnencodableResource(Format, serde_json::Error),
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        let (status, format, message) = match self {
            // The requested format cannot encode anything, so the failure
            // envelope falls back to the default format.
            Self::UnsupportedFormat(err) => (
                StatusCode::NOT_IMPLEMENTED,
                Format::default(),
                err.to_string(),
            ),
            Self::MalformedBody(format, err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format, err.to_string())
            }
            Self::Handler(format, err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format,
                err.message().to_string(),
            ),
            Self::UnencodableResource(format, err) => {
                tracing::error!(error = %err, "failed to serialize resource for envelope");
                (StatusCode::INTERNAL_SERVER_ERROR, format, err.to_string())
            }
        };

        tracing::debug!(status = %status, error = %message, "dispatch failed");
        EnvelopeResponse::failure(status, format, message).into_response()
    }
}
