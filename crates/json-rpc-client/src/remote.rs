//! Remote error signal.

use thiserror::Error;

/// Failure reported when the server returned a well-formed JSON error
/// response.
///
/// Only the message from that response is kept; every other detail of the
/// envelope is left out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RemoteJsonError {
    message: String,
}

impl RemoteJsonError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_passes_through_unchanged() {
        let err = RemoteJsonError::new("  not found\n");
        assert_eq!(err.message(), "  not found\n");
        assert_eq!(err.to_string(), "  not found\n");
        assert_eq!(err.into_message(), "  not found\n");
    }
}
