//! The serializer contract and its stock implementations.
//!
//! A [`JsonSerializer`] converts one value type in both directions: it appends
//! JSON text to an output buffer and reads a value back out of a parsed
//! [`serde_json::Value`]. The absent value (`None`) always travels as the bare
//! token [`JS_NULL`]; that rule lives in the provided methods of the trait so
//! every implementation applies it the same way.

mod collection;
mod enums;
mod escape;
mod map;
mod object;
mod primitive;

use std::sync::Arc;

use serde_json::Value;

use crate::error::{DecodeError, DecodeResult};

pub use collection::{
    print_json_array, Collection, CollectionSerializer, DequeSerializer, ListSerializer,
    SetSerializer, SortedSetSerializer,
};
pub use enums::{EnumSerializer, JsonEnum};
pub use escape::{escape_string, escape_string_into};
pub use map::{
    BTreeMapSerializer, HashMapSerializer, MapCollection, ObjectMapSerializer,
    StringBTreeMapSerializer, StringHashMapSerializer, StringMapSerializer,
};
pub use object::{field, ObjectWriter};
pub use primitive::{BoolSerializer, JsonNumber, NumberSerializer, StringSerializer};

/// JSON text for an absent value.
pub const JS_NULL: &str = "null";

/// Converter between JSON and a Rust value representation.
///
/// Implementors supply [`print_value`](Self::print_value) and
/// [`decode_value`](Self::decode_value) for present values; callers use
/// [`print_json`](Self::print_json) and [`from_json`](Self::from_json), which
/// add the absent-value handling.
///
/// Serializers hold no per-call state and are reused across conversions.
pub trait JsonSerializer {
    type Value;

    /// Appends one self-contained JSON fragment for `value`. No separators.
    fn print_value(&self, out: &mut String, value: &Self::Value);

    /// Reads a present value out of `json`, which is never `null` here.
    fn decode_value(&self, json: &Value) -> DecodeResult<Self::Value>;

    /// Appends the JSON text for `value`, or [`JS_NULL`] when it is absent.
    fn print_json(&self, out: &mut String, value: Option<&Self::Value>) {
        match value {
            Some(value) => self.print_value(out, value),
            None => out.push_str(JS_NULL),
        }
    }

    /// Builds a new value from `json`, or `None` when `json` is `null`.
    fn from_json(&self, json: &Value) -> DecodeResult<Option<Self::Value>> {
        if json.is_null() {
            return Ok(None);
        }
        self.decode_value(json).map(Some)
    }
}

impl<S: JsonSerializer + ?Sized> JsonSerializer for &S {
    type Value = S::Value;

    fn print_value(&self, out: &mut String, value: &Self::Value) {
        (**self).print_value(out, value)
    }

    fn decode_value(&self, json: &Value) -> DecodeResult<Self::Value> {
        (**self).decode_value(json)
    }
}

impl<S: JsonSerializer + ?Sized> JsonSerializer for Box<S> {
    type Value = S::Value;

    fn print_value(&self, out: &mut String, value: &Self::Value) {
        (**self).print_value(out, value)
    }

    fn decode_value(&self, json: &Value) -> DecodeResult<Self::Value> {
        (**self).decode_value(json)
    }
}

impl<S: JsonSerializer + ?Sized> JsonSerializer for Arc<S> {
    type Value = S::Value;

    fn print_value(&self, out: &mut String, value: &Self::Value) {
        (**self).print_value(out, value)
    }

    fn decode_value(&self, json: &Value) -> DecodeResult<Self::Value> {
        (**self).decode_value(json)
    }
}

/// Serializes `value` into a fresh string.
pub fn to_json_string<S: JsonSerializer + ?Sized>(
    serializer: &S,
    value: Option<&S::Value>,
) -> String {
    let mut out = String::new();
    serializer.print_json(&mut out, value);
    out
}

/// Length/index access to a host JSON array.
///
/// Container serializers read arrays only through this view.
#[derive(Debug, Clone, Copy)]
pub struct ArrayView<'a> {
    slots: &'a [Value],
}

impl<'a> ArrayView<'a> {
    /// Views `json` as an array; any other shape is a decoding fault.
    pub fn of(json: &'a Value) -> DecodeResult<Self> {
        match json {
            Value::Array(slots) => Ok(Self { slots }),
            other => Err(DecodeError::unexpected("array", other)),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a Value> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'a, Value> {
        self.slots.iter()
    }
}
