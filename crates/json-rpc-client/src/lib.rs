//! JSON serializers and response handling for generated JSON-RPC client stubs.
//!
//! Every value that crosses the wire goes through a [`JsonSerializer`]: the
//! request side appends JSON text to a `String`, the response side reads an
//! already parsed [`serde_json::Value`]. Container serializers are built by
//! composing element serializers, so a generated stub only ever needs one
//! serializer per user-defined type.
//!
//! When the server answers with a well-formed error envelope instead of a
//! result, the failure surfaces as a [`RemoteJsonError`] carrying the server's
//! message verbatim.

pub mod call;
pub mod config;
pub mod error;
pub mod remote;
pub mod response;
pub mod serializer;

pub use call::{dispatch_response, AsyncCallback, FnCallback, RequestBuilder};
pub use config::{CallConfig, ProtocolVersion};
pub use error::{CallError, DecodeError, DecodeResult};
pub use remote::RemoteJsonError;
pub use response::{classify_response, decode_response, JsonRpcResponse};
pub use serializer::{
    escape_string, escape_string_into, field, print_json_array, to_json_string, ArrayView,
    BTreeMapSerializer, BoolSerializer, Collection, CollectionSerializer, DequeSerializer,
    EnumSerializer, HashMapSerializer, JsonEnum, JsonNumber, JsonSerializer, ListSerializer,
    MapCollection, NumberSerializer, ObjectMapSerializer, ObjectWriter, SetSerializer,
    SortedSetSerializer, StringBTreeMapSerializer, StringHashMapSerializer, StringMapSerializer,
    StringSerializer, JS_NULL,
};
