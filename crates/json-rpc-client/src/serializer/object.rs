//! Helpers for per-type serializers that map a struct onto a JSON object.

use serde_json::Value;

use super::escape::escape_string_into;
use super::JsonSerializer;

/// Writes the members of one JSON object, managing braces and separators.
///
/// ```
/// use json_rpc_client::{NumberSerializer, ObjectWriter, StringSerializer};
///
/// let mut out = String::new();
/// let name = "ada".to_string();
/// let mut obj = ObjectWriter::new(&mut out);
/// obj.member("name", &StringSerializer, Some(&name));
/// obj.member("age", &NumberSerializer::<u32>::new(), None);
/// obj.finish();
/// assert_eq!(out, r#"{"name":"ada","age":null}"#);
/// ```
#[derive(Debug)]
pub struct ObjectWriter<'a> {
    out: &'a mut String,
    first: bool,
}

impl<'a> ObjectWriter<'a> {
    pub fn new(out: &'a mut String) -> Self {
        out.push('{');
        Self { out, first: true }
    }

    /// Appends `"key":` followed by the serializer's text for `value`.
    pub fn member<S>(&mut self, key: &str, serializer: &S, value: Option<&S::Value>) -> &mut Self
    where
        S: JsonSerializer + ?Sized,
    {
        self.key(key);
        serializer.print_json(self.out, value);
        self
    }

    /// Like [`member`](Self::member), but leaves the member out when `value`
    /// is absent.
    pub fn optional_member<S>(
        &mut self,
        key: &str,
        serializer: &S,
        value: Option<&S::Value>,
    ) -> &mut Self
    where
        S: JsonSerializer + ?Sized,
    {
        if value.is_some() {
            self.member(key, serializer, value);
        }
        self
    }

    /// Appends `"key":` followed by pre-rendered JSON text.
    pub fn raw_member(&mut self, key: &str, json: &str) -> &mut Self {
        self.key(key);
        self.out.push_str(json);
        self
    }

    pub fn finish(self) {
        self.out.push('}');
    }

    fn key(&mut self, key: &str) {
        if self.first {
            self.first = false;
        } else {
            self.out.push(',');
        }
        escape_string_into(self.out, key);
        self.out.push(':');
    }
}

/// Reads the member `key` of a JSON object. A missing member, or a `json`
/// that is not an object, reads as `null`.
pub fn field<'a>(json: &'a Value, key: &str) -> &'a Value {
    static NULL: Value = Value::Null;
    json.get(key).unwrap_or(&NULL)
}
