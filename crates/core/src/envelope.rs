//! The uniform response envelope written by every endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform success/failure wrapper around every response body.
///
/// Failures carry the error text; successes carry the serialized resource
/// when the handler produced one. Fields are declared in lexical order so
/// the serialized object is byte-stable: `{"error":…,"success":false}` on
/// failure, `{"result":…,"success":true}` on success.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Human-readable failure message, present only when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Serialized resource, present only on success and only when the
    /// handler produced one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Whether the request succeeded.
    pub success: bool,
}

impl Envelope {
    /// Success envelope carrying the serialized resource, if any.
    #[must_use]
    pub fn success(result: Option<Value>) -> Self {
        Self {
            error: None,
            result,
            success: true,
        }
    }

    /// Failure envelope carrying the error message.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            result: None,
            success: false,
        }
    }
}
