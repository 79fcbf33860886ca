//! HTTP-style request envelope.
//!
//! Events carry the request body under `body`, either as a JSON object
//! (non-proxy API Gateway integrations) or as a JSON-encoded string (proxy
//! integrations). Processed batches always answer with status 200 and the
//! serialized [`OptInResponse`](crate::OptInResponse) as the body.

use crate::errors::{OptInError, Result};
use crate::request::OptInRequest;
use crate::service::OptInServiceTrait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Status returned for every request that passed validation.
pub const STATUS_OK: u16 = 200;

/// Envelope returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    /// Error envelope with `{"message": ...}` as the body.
    pub fn from_error(err: &OptInError) -> Self {
        Self {
            status_code: err.status_code(),
            body: json!({ "message": err.to_string() }).to_string(),
        }
    }
}

/// Pull the request body out of an event.
pub fn extract_request(event: &Value) -> Result<OptInRequest> {
    match event.get("body") {
        None | Some(Value::Null) => Err(OptInError::MissingOrEmptyInput),
        Some(Value::String(text)) => OptInRequest::from_json(text),
        Some(body) => OptInRequest::from_value(body.clone()),
    }
}

/// Run one event through the service.
///
/// Validation failures are returned as errors; use
/// [`HandlerResponse::from_error`] to turn them into a response when the
/// transport needs one.
pub async fn handle_event<S: OptInServiceTrait>(
    service: &S,
    event: &Value,
) -> Result<HandlerResponse> {
    let request = extract_request(event)?;
    let response = service.opt_in(request).await?;
    let body = serde_json::to_string(&response).map_err(OptInError::SerializeResponse)?;

    Ok(HandlerResponse {
        status_code: STATUS_OK,
        body,
    })
}
