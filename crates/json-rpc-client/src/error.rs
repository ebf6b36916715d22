//! Error types for decoding and for remote calls.

use serde_json::Value;
use thiserror::Error;

use crate::remote::RemoteJsonError;

/// A host JSON value did not have the shape a serializer expects.
///
/// Decoding fails fast: a serializer never hands back a partially built value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("expected {expected}, found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },
    #[error("null element at index {index}")]
    NullElement { index: usize },
    #[error("null value for member {key:?}")]
    NullMember { key: String },
    #[error("number {value} is out of range for {target}")]
    OutOfRange { value: String, target: &'static str },
    #[error("unknown constant {name:?} for {target}")]
    UnknownConstant { name: String, target: &'static str },
    #[error("at index {index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: Box<DecodeError>,
    },
    #[error("at member {key:?}: {source}")]
    Member {
        key: String,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Shape mismatch between what a serializer expects and what it was given.
    pub fn unexpected(expected: &'static str, found: &Value) -> Self {
        DecodeError::UnexpectedShape {
            expected,
            found: json_kind(found),
        }
    }

    /// Wraps a fault raised while decoding the array slot at `index`.
    pub fn at_index(self, index: usize) -> Self {
        DecodeError::Element {
            index,
            source: Box::new(self),
        }
    }

    /// Wraps a fault raised while decoding the object member `key`.
    pub fn at_member(self, key: &str) -> Self {
        DecodeError::Member {
            key: key.to_owned(),
            source: Box::new(self),
        }
    }

    /// The innermost fault, with index/member context stripped.
    pub fn root_cause(&self) -> &DecodeError {
        match self {
            DecodeError::Element { source, .. } | DecodeError::Member { source, .. } => {
                source.root_cause()
            }
            other => other,
        }
    }
}

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Failure delivered to a caller's failure channel.
#[derive(Debug, Error)]
pub enum CallError {
    /// The server answered with a well-formed error envelope.
    #[error(transparent)]
    Remote(#[from] RemoteJsonError),
    #[error("failed to decode result: {0}")]
    Decode(#[from] DecodeError),
    #[error("response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl CallError {
    /// The remote error signal, when this failure came from the server.
    pub fn as_remote(&self) -> Option<&RemoteJsonError> {
        match self {
            CallError::Remote(err) => Some(err),
            _ => None,
        }
    }
}

/// JSON type name used in error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
