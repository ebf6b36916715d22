//! Enum constants as JSON strings.

use std::fmt;
use std::marker::PhantomData;

use serde_json::Value;

use super::escape::escape_string_into;
use super::JsonSerializer;
use crate::error::{DecodeError, DecodeResult};

/// A fieldless enum whose constants travel by name.
pub trait JsonEnum: Sized {
    /// Enum name used in error messages.
    const NAME: &'static str;

    fn constant_name(&self) -> &'static str;

    fn from_constant_name(name: &str) -> Option<Self>;
}

pub struct EnumSerializer<E> {
    kind: PhantomData<fn() -> E>,
}

impl<E> EnumSerializer<E> {
    pub const fn new() -> Self {
        Self { kind: PhantomData }
    }
}

impl<E> Default for EnumSerializer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for EnumSerializer<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EnumSerializer<E> {}

impl<E: JsonEnum> fmt::Debug for EnumSerializer<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnumSerializer<{}>", E::NAME)
    }
}

impl<E: JsonEnum> JsonSerializer for EnumSerializer<E> {
    type Value = E;

    fn print_value(&self, out: &mut String, value: &E) {
        escape_string_into(out, value.constant_name());
    }

    fn decode_value(&self, json: &Value) -> DecodeResult<E> {
        let Value::String(name) = json else {
            return Err(DecodeError::unexpected("string", json));
        };
        E::from_constant_name(name).ok_or_else(|| DecodeError::UnknownConstant {
            name: name.clone(),
            target: E::NAME,
        })
    }
}
