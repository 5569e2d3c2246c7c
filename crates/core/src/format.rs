//! Response-format registry — maps the `format` query parameter to an
//! encode/decode strategy.

use serde::Serialize;

use crate::handler::ResourceData;

/// Serialization strategy selected by the `format` query parameter.
///
/// The set of supported formats is fixed at startup; [`Format::resolve`]
/// is the registry lookup. JSON is the only registered format and the
/// default when the parameter is absent or empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// JSON encoding served as `application/json`.
    #[default]
    Json,
}

impl Format {
    /// Resolve the `format` query parameter against the registry.
    ///
    /// Absent or empty selects the default. Lookup is case-sensitive and
    /// exact: `"json"` resolves, anything else is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::NotImplemented`] when the value names no
    /// registered format.
    pub fn resolve(param: Option<&str>) -> Result<Self, FormatError> {
        match param {
            None | Some("") => Ok(Self::default()),
            Some("json") => Ok(Self::Json),
            Some(other) => Err(FormatError::NotImplemented(other.to_string())),
        }
    }

    /// Identifier under which this format is registered.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
        }
    }

    /// Content type matching this format's encoding.
    #[must_use]
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }

    /// Encode a value with this format's serializer.
    ///
    /// # Errors
    ///
    /// Returns the serializer error when the value cannot be encoded.
    pub fn encode<T: Serialize>(self, value: &T) -> Result<Vec<u8>, serde_json::Error> {
        match self {
            Self::Json => serde_json::to_vec(value),
        }
    }

    /// Decode a request body into the string-keyed data mapping handed to
    /// create/update operations.
    ///
    /// # Errors
    ///
    /// Returns the decoder error when the body is not a JSON object.
    pub fn decode(self, body: &[u8]) -> Result<ResourceData, serde_json::Error> {
        match self {
            Self::Json => serde_json::from_slice(body),
        }
    }
}

/// Rejection produced by [`Format::resolve`].
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The requested identifier names no registered format.
    #[error("Format not implemented: {0}")]
    NotImplemented(String),
}
