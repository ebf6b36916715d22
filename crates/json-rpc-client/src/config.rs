//! Client call configuration.

use serde::{Deserialize, Serialize};

/// JSON-RPC protocol flavor used for request envelopes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtocolVersion {
    /// `{"version":"1.1",...}`
    #[default]
    #[serde(rename = "1.1")]
    V1_1,
    /// `{"jsonrpc":"2.0",...}`
    #[serde(rename = "2.0")]
    V2_0,
}

impl ProtocolVersion {
    /// The version member written at the start of every request envelope.
    pub fn envelope_member(self) -> (&'static str, &'static str) {
        match self {
            ProtocolVersion::V1_1 => ("version", "1.1"),
            ProtocolVersion::V2_0 => ("jsonrpc", "2.0"),
        }
    }
}

/// Settings shared by every call a generated proxy makes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallConfig {
    pub version: ProtocolVersion,
}

impl CallConfig {
    pub fn new(version: ProtocolVersion) -> Self {
        Self { version }
    }
}
