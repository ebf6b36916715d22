//! Leaf serializers for strings, booleans and numbers.

use std::fmt::{self, Write};
use std::marker::PhantomData;

use serde_json::{Number, Value};

use super::escape::escape_string_into;
use super::JsonSerializer;
use crate::error::{DecodeError, DecodeResult};

/// `String` as a JSON string literal.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringSerializer;

impl JsonSerializer for StringSerializer {
    type Value = String;

    fn print_value(&self, out: &mut String, value: &String) {
        escape_string_into(out, value);
    }

    fn decode_value(&self, json: &Value) -> DecodeResult<String> {
        match json {
            Value::String(s) => Ok(s.clone()),
            other => Err(DecodeError::unexpected("string", other)),
        }
    }
}

/// `bool` as `true` / `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolSerializer;

impl JsonSerializer for BoolSerializer {
    type Value = bool;

    fn print_value(&self, out: &mut String, value: &bool) {
        out.push_str(if *value { "true" } else { "false" });
    }

    fn decode_value(&self, json: &Value) -> DecodeResult<bool> {
        json.as_bool()
            .ok_or_else(|| DecodeError::unexpected("boolean", json))
    }
}

/// A Rust numeric type with a JSON number representation.
pub trait JsonNumber: Copy {
    /// Type name used in error messages.
    const NAME: &'static str;

    fn write_json(self, out: &mut String);

    /// `None` when `number` does not fit this type.
    fn read_json(number: &Number) -> Option<Self>;

    /// Reads a value this type writes as a JSON string. Only floats do,
    /// for their non-finite values.
    fn read_text(_text: &str) -> Option<Self> {
        None
    }
}

macro_rules! signed_number {
    ($($t:ty),*) => {$(
        impl JsonNumber for $t {
            const NAME: &'static str = stringify!($t);

            fn write_json(self, out: &mut String) {
                let _ = write!(out, "{self}");
            }

            fn read_json(number: &Number) -> Option<Self> {
                number.as_i64().and_then(|n| <$t>::try_from(n).ok())
            }
        }
    )*};
}

macro_rules! unsigned_number {
    ($($t:ty),*) => {$(
        impl JsonNumber for $t {
            const NAME: &'static str = stringify!($t);

            fn write_json(self, out: &mut String) {
                let _ = write!(out, "{self}");
            }

            fn read_json(number: &Number) -> Option<Self> {
                number.as_u64().and_then(|n| <$t>::try_from(n).ok())
            }
        }
    )*};
}

signed_number!(i8, i16, i32, i64);
unsigned_number!(u8, u16, u32, u64);

const NAN: &str = "NaN";
const INFINITY: &str = "Infinity";
const NEG_INFINITY: &str = "-Infinity";

// JSON numbers cannot hold NaN or the infinities; those travel as strings.
fn write_non_finite(out: &mut String, value: f64) {
    let text = if value.is_nan() {
        NAN
    } else if value.is_sign_positive() {
        INFINITY
    } else {
        NEG_INFINITY
    };
    out.push('"');
    out.push_str(text);
    out.push('"');
}

fn read_non_finite(text: &str) -> Option<f64> {
    match text {
        NAN => Some(f64::NAN),
        INFINITY => Some(f64::INFINITY),
        NEG_INFINITY => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

impl JsonNumber for f64 {
    const NAME: &'static str = "f64";

    fn write_json(self, out: &mut String) {
        match Number::from_f64(self) {
            Some(n) => {
                let _ = write!(out, "{n}");
            }
            None => write_non_finite(out, self),
        }
    }

    fn read_json(number: &Number) -> Option<Self> {
        number.as_f64()
    }

    fn read_text(text: &str) -> Option<Self> {
        read_non_finite(text)
    }
}

impl JsonNumber for f32 {
    const NAME: &'static str = "f32";

    // Goes through the shortest decimal that reads back as this f32, so
    // 0.1f32 prints as 0.1 rather than its widened f64 digits.
    fn write_json(self, out: &mut String) {
        if !self.is_finite() {
            return write_non_finite(out, f64::from(self));
        }
        let shortest = self.to_string().parse::<f64>().unwrap_or(f64::from(self));
        shortest.write_json(out)
    }

    fn read_json(number: &Number) -> Option<Self> {
        let wide = number.as_f64()?;
        let narrow = wide as f32;
        narrow.is_finite().then_some(narrow)
    }

    fn read_text(text: &str) -> Option<Self> {
        read_non_finite(text).map(|value| value as f32)
    }
}

/// Any [`JsonNumber`] as a JSON number.
///
/// Float NaN and infinities are written as the strings `"NaN"`,
/// `"Infinity"` and `"-Infinity"`, and read back from them.
pub struct NumberSerializer<N> {
    kind: PhantomData<fn() -> N>,
}

impl<N> NumberSerializer<N> {
    pub const fn new() -> Self {
        Self { kind: PhantomData }
    }
}

impl<N> Default for NumberSerializer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Clone for NumberSerializer<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for NumberSerializer<N> {}

impl<N: JsonNumber> fmt::Debug for NumberSerializer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NumberSerializer<{}>", N::NAME)
    }
}

impl<N: JsonNumber> JsonSerializer for NumberSerializer<N> {
    type Value = N;

    fn print_value(&self, out: &mut String, value: &N) {
        value.write_json(out);
    }

    fn decode_value(&self, json: &Value) -> DecodeResult<N> {
        match json {
            Value::Number(number) => N::read_json(number).ok_or_else(|| DecodeError::OutOfRange {
                value: number.to_string(),
                target: N::NAME,
            }),
            Value::String(text) => {
                N::read_text(text).ok_or_else(|| DecodeError::unexpected("number", json))
            }
            other => Err(DecodeError::unexpected("number", other)),
        }
    }
}
