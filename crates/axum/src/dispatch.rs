//! Verb dispatchers bridging HTTP requests to resource handler calls.
//!
//! Each dispatcher runs the same linear pipeline: resolve the response
//! format, decode the body where the verb carries one, delegate to the
//! handler, and fold the outcome into an envelope response. The failure
//! exits (unsupported format, malformed body, handler error) are terminal
//! and mutually exclusive per request.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use restwire_core::{Format, RequestContext, ResourceData, ResourceHandler};

use crate::error::DispatchError;
use crate::response::EnvelopeResponse;
use crate::state::ResourceState;

/// Query parameters recognized by every dispatcher.
#[derive(Deserialize)]
pub struct FormatQuery {
    /// Response serialization selector; absent or empty means the default.
    pub format: Option<String>,
}

impl FormatQuery {
    fn resolve(&self) -> Result<Format, DispatchError> {
        Format::resolve(self.format.as_deref()).map_err(DispatchError::UnsupportedFormat)
    }
}

/// `POST /api/v0.1/{resource}`
pub async fn create<H>(
    State(state): State<ResourceState<H>>,
    Query(query): Query<FormatQuery>,
    body: Bytes,
) -> Result<EnvelopeResponse, DispatchError>
where
    H: ResourceHandler + Send + Sync + 'static,
{
    let format = query.resolve()?;
    let data = decode_body(format, &body)?;
    let ctx = RequestContext::new();
    let resource = state
        .handler
        .create_resource(&ctx, data)
        .await
        .map_err(|err| DispatchError::Handler(format, err))?;
    Ok(EnvelopeResponse::success(
        StatusCode::CREATED,
        format,
        resource_value(format, resource)?,
    ))
}

/// `GET /api/v0.1/{resource}/{id}`
pub async fn read<H>(
    State(state): State<ResourceState<H>>,
    Path(id): Path<String>,
    Query(query): Query<FormatQuery>,
) -> Result<EnvelopeResponse, DispatchError>
where
    H: ResourceHandler + Send + Sync + 'static,
{
    let format = query.resolve()?;
    let ctx = RequestContext::new().with_param("id", id.clone());
    let resource = state
        .handler
        .read_resource(&ctx, &id)
        .await
        .map_err(|err| DispatchError::Handler(format, err))?;
    Ok(EnvelopeResponse::success(
        StatusCode::OK,
        format,
        resource_value(format, resource)?,
    ))
}

/// `PUT|PATCH /api/v0.1/{resource}/{id}`
pub async fn update<H>(
    State(state): State<ResourceState<H>>,
    Path(id): Path<String>,
    Query(query): Query<FormatQuery>,
    body: Bytes,
) -> Result<EnvelopeResponse, DispatchError>
where
    H: ResourceHandler + Send + Sync + 'static,
{
    let format = query.resolve()?;
    let data = decode_body(format, &body)?;
    let ctx = RequestContext::new().with_param("id", id.clone());
    let resource = state
        .handler
        .update_resource(&ctx, &id, data)
        .await
        .map_err(|err| DispatchError::Handler(format, err))?;
    Ok(EnvelopeResponse::success(
        StatusCode::OK,
        format,
        resource_value(format, resource)?,
    ))
}

/// `DELETE /api/v0.1/{resource}/{id}`
pub async fn delete<H>(
    State(state): State<ResourceState<H>>,
    Path(id): Path<String>,
    Query(query): Query<FormatQuery>,
) -> Result<EnvelopeResponse, DispatchError>
where
    H: ResourceHandler + Send + Sync + 'static,
{
    let format = query.resolve()?;
    let ctx = RequestContext::new().with_param("id", id.clone());
    let resource = state
        .handler
        .delete_resource(&ctx, &id)
        .await
        .map_err(|err| DispatchError::Handler(format, err))?;
    Ok(EnvelopeResponse::success(
        StatusCode::OK,
        format,
        resource_value(format, resource)?,
    ))
}

/// Decode a request body into the mapping handed to create/update.
fn decode_body(format: Format, body: &[u8]) -> Result<ResourceData, DispatchError> {
    format
        .decode(body)
        .map_err(|err| DispatchError::MalformedBody(format, err))
}

/// Serialize the handler's resource for the envelope `result` field.
///
/// `None` stays `None`; the success envelope then renders without a
/// `result` key.
fn resource_value<T: Serialize>(
    format: Format,
    resource: Option<T>,
) -> Result<Option<serde_json::Value>, DispatchError> {
    resource
        .map(serde_json::to_value)
        .transpose()
        .map_err(|err| DispatchError::UnencodableResource(format, err))
}
