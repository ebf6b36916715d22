//! Serializers for maps.
//!
//! String-keyed maps travel as JSON objects. Maps with any other key type
//! travel as an array of `[key,value]` pairs, since JSON object keys can only
//! be strings.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use serde_json::Value;

use super::escape::escape_string_into;
use super::{ArrayView, JsonSerializer};
use crate::error::{DecodeError, DecodeResult};

/// A map kind that decoding can build one entry at a time.
pub trait MapCollection<K, V> {
    fn with_capacity(capacity: usize) -> Self;

    fn insert_entry(&mut self, key: K, value: V);
}

impl<K: Eq + Hash, V> MapCollection<K, V> for HashMap<K, V> {
    fn with_capacity(capacity: usize) -> Self {
        HashMap::with_capacity(capacity)
    }

    fn insert_entry(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Ord, V> MapCollection<K, V> for BTreeMap<K, V> {
    fn with_capacity(_capacity: usize) -> Self {
        BTreeMap::new()
    }

    fn insert_entry(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

/// Serializer for a map `M` from `String` to values handled by `S`.
pub struct StringMapSerializer<S, M> {
    value: S,
    kind: PhantomData<fn() -> M>,
}

pub type StringHashMapSerializer<S> =
    StringMapSerializer<S, HashMap<String, <S as JsonSerializer>::Value>>;

pub type StringBTreeMapSerializer<S> =
    StringMapSerializer<S, BTreeMap<String, <S as JsonSerializer>::Value>>;

impl<S, M> StringMapSerializer<S, M> {
    pub const fn new(value: S) -> Self {
        Self {
            value,
            kind: PhantomData,
        }
    }
}

impl<S: Clone, M> Clone for StringMapSerializer<S, M> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<S: fmt::Debug, M> fmt::Debug for StringMapSerializer<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringMapSerializer")
            .field("value", &self.value)
            .finish()
    }
}

impl<S, M> JsonSerializer for StringMapSerializer<S, M>
where
    S: JsonSerializer,
    M: MapCollection<String, S::Value>,
    for<'a> &'a M: IntoIterator<Item = (&'a String, &'a S::Value)>,
{
    type Value = M;

    fn print_value(&self, out: &mut String, map: &M) {
        out.push('{');
        for (i, (key, value)) in map.into_iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            escape_string_into(out, key);
            out.push(':');
            self.value.print_json(out, Some(value));
        }
        out.push('}');
    }

    fn decode_value(&self, json: &Value) -> DecodeResult<M> {
        let Value::Object(members) = json else {
            return Err(DecodeError::unexpected("object", json));
        };
        let mut out = M::with_capacity(members.len());
        for (key, slot) in members {
            let value = self
                .value
                .from_json(slot)
                .map_err(|err| err.at_member(key))?
                .ok_or_else(|| DecodeError::NullMember { key: key.clone() })?;
            out.insert_entry(key.clone(), value);
        }
        Ok(out)
    }
}

/// Serializer for a map `M` with keys handled by `K` and values by `V`.
///
/// The JSON form is `[[key,value],...]` in the map's iteration order.
pub struct ObjectMapSerializer<K, V, M> {
    key: K,
    value: V,
    kind: PhantomData<fn() -> M>,
}

pub type HashMapSerializer<K, V> = ObjectMapSerializer<
    K,
    V,
    HashMap<<K as JsonSerializer>::Value, <V as JsonSerializer>::Value>,
>;

pub type BTreeMapSerializer<K, V> = ObjectMapSerializer<
    K,
    V,
    BTreeMap<<K as JsonSerializer>::Value, <V as JsonSerializer>::Value>,
>;

impl<K, V, M> ObjectMapSerializer<K, V, M> {
    pub const fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            kind: PhantomData,
        }
    }
}

impl<K: Clone, V: Clone, M> Clone for ObjectMapSerializer<K, V, M> {
    fn clone(&self) -> Self {
        Self::new(self.key.clone(), self.value.clone())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, M> fmt::Debug for ObjectMapSerializer<K, V, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectMapSerializer")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

impl<K, V, M> ObjectMapSerializer<K, V, M>
where
    K: JsonSerializer,
    V: JsonSerializer,
{
    fn decode_pair(&self, json: &Value) -> DecodeResult<(K::Value, V::Value)> {
        let pair = ArrayView::of(json)?;
        let (Some(key), Some(value), 2) = (pair.get(0), pair.get(1), pair.len()) else {
            return Err(DecodeError::unexpected("[key,value] pair", json));
        };
        let key = self
            .key
            .from_json(key)
            .map_err(|err| err.at_index(0))?
            .ok_or(DecodeError::NullElement { index: 0 })?;
        let value = self
            .value
            .from_json(value)
            .map_err(|err| err.at_index(1))?
            .ok_or(DecodeError::NullElement { index: 1 })?;
        Ok((key, value))
    }
}

impl<K, V, M> JsonSerializer for ObjectMapSerializer<K, V, M>
where
    K: JsonSerializer,
    V: JsonSerializer,
    M: MapCollection<K::Value, V::Value>,
    for<'a> &'a M: IntoIterator<Item = (&'a K::Value, &'a V::Value)>,
{
    type Value = M;

    fn print_value(&self, out: &mut String, map: &M) {
        out.push('[');
        for (i, (key, value)) in map.into_iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push('[');
            self.key.print_json(out, Some(key));
            out.push(',');
            self.value.print_json(out, Some(value));
            out.push(']');
        }
        out.push(']');
    }

    fn decode_value(&self, json: &Value) -> DecodeResult<M> {
        let pairs = ArrayView::of(json)?;
        let mut out = M::with_capacity(pairs.len());
        for (index, slot) in pairs.iter().enumerate() {
            let (key, value) = self.decode_pair(slot).map_err(|err| err.at_index(index))?;
            out.insert_entry(key, value);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializer::{to_json_string, ListSerializer, NumberSerializer, StringSerializer};
    use serde_json::json;

    #[test]
    fn string_map_as_object() {
        let ser = StringBTreeMapSerializer::new(NumberSerializer::<i32>::new());
        let map = BTreeMap::from([("b\"".to_string(), 2), ("a".to_string(), 1)]);
        assert_eq!(to_json_string(&ser, Some(&map)), r#"{"a":1,"b\"":2}"#);
        assert_eq!(ser.from_json(&json!({"a": 1, "b\"": 2})).unwrap(), Some(map));
        assert_eq!(to_json_string(&ser, Some(&BTreeMap::new())), "{}");
    }

    #[test]
    fn string_map_rejects_null_values_and_bad_shapes() {
        let ser = StringHashMapSerializer::new(StringSerializer);
        assert_eq!(
            ser.from_json(&json!({"k": null})).unwrap_err(),
            DecodeError::NullMember {
                key: "k".to_string()
            }
        );
        assert_eq!(
            ser.from_json(&json!({"k": 1})).unwrap_err().to_string(),
            "at member \"k\": expected string, found number"
        );
        assert!(ser.from_json(&json!([])).is_err());
        assert_eq!(ser.from_json(&Value::Null).unwrap(), None);
    }

    #[test]
    fn object_map_as_pairs() {
        let ser = BTreeMapSerializer::new(
            NumberSerializer::<u32>::new(),
            ListSerializer::new(StringSerializer),
        );
        let map = BTreeMap::from([(2, vec!["x".to_string()]), (1, Vec::new())]);
        let text = to_json_string(&ser, Some(&map));
        assert_eq!(text, r#"[[1,[]],[2,["x"]]]"#);
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(ser.from_json(&parsed).unwrap(), Some(map));
    }

    #[test]
    fn object_map_rejects_malformed_pairs() {
        let ser = HashMapSerializer::new(StringSerializer, StringSerializer);
        assert_eq!(
            ser.from_json(&json!([["a"]])).unwrap_err(),
            DecodeError::UnexpectedShape {
                expected: "[key,value] pair",
                found: "array"
            }
            .at_index(0)
        );
        assert_eq!(
            ser.from_json(&json!([["a", "b"], [null, "c"]])).unwrap_err(),
            DecodeError::NullElement { index: 0 }.at_index(1)
        );
    }
}
