//! Recognition of JSON-RPC response envelopes.
//!
//! A response body is either a result envelope, whose `result` member goes to
//! the result serializer, or an error envelope, whose message becomes a
//! [`RemoteJsonError`].

use serde_json::Value;

use crate::error::{json_kind, CallError};
use crate::remote::RemoteJsonError;
use crate::serializer::{field, JsonSerializer};

/// A classified response body.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonRpcResponse<'a> {
    /// The `result` member; `null` when the member is missing.
    Result(&'a Value),
    Error(RemoteJsonError),
}

/// Classifies a parsed response body.
///
/// The body is an error envelope when its `error` member is present and not
/// `null`. The message is taken from `error.message`, or from `error` itself
/// when the server sent a bare string, and is passed through verbatim.
pub fn classify_response(body: &Value) -> Result<JsonRpcResponse<'_>, CallError> {
    if !body.is_object() {
        return Err(CallError::Malformed(format!(
            "expected an object, found {}",
            json_kind(body)
        )));
    }
    match field(body, "error") {
        Value::Null => Ok(JsonRpcResponse::Result(field(body, "result"))),
        Value::String(message) => Ok(JsonRpcResponse::Error(RemoteJsonError::new(
            message.as_str(),
        ))),
        error => match field(error, "message") {
            Value::String(message) => Ok(JsonRpcResponse::Error(RemoteJsonError::new(
                message.as_str(),
            ))),
            other => Err(CallError::Malformed(format!(
                "error member has no message string (found {})",
                json_kind(other)
            ))),
        },
    }
}

/// Decodes a parsed response body with the result serializer, or fails with
/// the server's error.
pub fn decode_response<S>(serializer: &S, body: &Value) -> Result<Option<S::Value>, CallError>
where
    S: JsonSerializer + ?Sized,
{
    match classify_response(body)? {
        JsonRpcResponse::Result(result) => Ok(serializer.from_json(result)?),
        JsonRpcResponse::Error(err) => Err(CallError::Remote(err)),
    }
}
