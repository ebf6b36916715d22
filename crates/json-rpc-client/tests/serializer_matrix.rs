//! Serializer contract matrix: null symmetry, string escaping, container
//! round-trips and nesting.

use std::collections::{BTreeSet, HashSet, VecDeque};

use json_rpc_client::{
    escape_string, to_json_string, BoolSerializer, DequeSerializer, JsonSerializer,
    ListSerializer, NumberSerializer, SetSerializer, SortedSetSerializer, StringSerializer,
    JS_NULL,
};
use proptest::prelude::*;
use serde_json::{json, Value};

fn reparse(text: &str) -> Value {
    serde_json::from_str(text).expect("serializer output must be valid JSON")
}

fn round_trip<S: JsonSerializer>(ser: &S, value: &S::Value) -> Option<S::Value> {
    let text = to_json_string(ser, Some(value));
    ser.from_json(&reparse(&text)).expect("decode")
}

// ---------------------------------------------------------------------------
// Null symmetry
// ---------------------------------------------------------------------------

#[test]
fn absent_prints_null_for_every_serializer() {
    assert_eq!(to_json_string(&StringSerializer, None), JS_NULL);
    assert_eq!(to_json_string(&BoolSerializer, None), JS_NULL);
    assert_eq!(to_json_string(&NumberSerializer::<f64>::new(), None), JS_NULL);
    assert_eq!(to_json_string(&ListSerializer::new(StringSerializer), None), JS_NULL);
    assert_eq!(
        to_json_string(&SetSerializer::new(NumberSerializer::<u8>::new()), None),
        JS_NULL
    );
}

#[test]
fn host_null_is_absent_for_every_serializer() {
    assert!(StringSerializer.from_json(&Value::Null).unwrap().is_none());
    assert!(BoolSerializer.from_json(&Value::Null).unwrap().is_none());
    assert!(ListSerializer::new(BoolSerializer)
        .from_json(&Value::Null)
        .unwrap()
        .is_none());
    assert!(SortedSetSerializer::new(StringSerializer)
        .from_json(&Value::Null)
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

#[test]
fn escape_string_newline_example() {
    assert_eq!(escape_string("b\nb"), "\"b\\nb\"");
}

proptest! {
    #[test]
    fn escaped_strings_parse_back(s in any::<String>()) {
        let back: String = serde_json::from_str(&escape_string(&s)).unwrap();
        prop_assert_eq!(back, s);
    }

    #[test]
    fn string_serializer_round_trips(s in any::<String>()) {
        prop_assert_eq!(round_trip(&StringSerializer, &s), Some(s));
    }

    #[test]
    fn list_round_trip_keeps_order(items in prop::collection::vec(any::<i64>(), 0..32)) {
        let ser = ListSerializer::new(NumberSerializer::<i64>::new());
        prop_assert_eq!(round_trip(&ser, &items), Some(items));
    }

    #[test]
    fn set_round_trip_dedups(items in prop::collection::vec(0u8..8, 0..32)) {
        let ser = SetSerializer::new(NumberSerializer::<u8>::new());
        let mut out = String::new();
        json_rpc_client::print_json_array(&mut out, ser.element(), &items);
        let decoded = ser.from_json(&reparse(&out)).unwrap().unwrap();
        let expected: HashSet<u8> = items.iter().copied().collect();
        prop_assert!(decoded.len() <= items.len());
        prop_assert_eq!(decoded, expected);
    }
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

#[test]
fn set_with_duplicates_shrinks() {
    let ser = SetSerializer::new(NumberSerializer::<i32>::new());
    let source = json!([1, 2, 2, 3]);
    let set = ser.from_json(&source).unwrap().unwrap();
    assert_eq!(set.len(), 3);
    assert!(set.len() < source.as_array().unwrap().len());
    assert_eq!(set, HashSet::from([1, 2, 3]));
}

#[test]
fn empty_collections() {
    assert_eq!(
        to_json_string(&ListSerializer::new(StringSerializer), Some(&Vec::new())),
        "[]"
    );
    assert_eq!(
        to_json_string(
            &SetSerializer::new(StringSerializer),
            Some(&HashSet::new())
        ),
        "[]"
    );
    assert_eq!(
        to_json_string(
            &DequeSerializer::new(BoolSerializer),
            Some(&VecDeque::new())
        ),
        "[]"
    );
    assert!(SortedSetSerializer::new(StringSerializer)
        .from_json(&json!([]))
        .unwrap()
        .unwrap()
        .is_empty());
}

#[test]
fn list_of_strings_round_trip() {
    let ser = ListSerializer::new(StringSerializer);
    let items = vec!["a,b".to_string(), "]".to_string(), "\"".to_string()];
    let text = to_json_string(&ser, Some(&items));
    assert_eq!(text, r#"["a,b","]","\""]"#);
    assert_eq!(ser.from_json(&reparse(&text)).unwrap(), Some(items));
}

#[test]
fn deque_keeps_order() {
    let ser = DequeSerializer::new(NumberSerializer::<u16>::new());
    let items = VecDeque::from([9, 8, 7]);
    assert_eq!(to_json_string(&ser, Some(&items)), "[9,8,7]");
    assert_eq!(round_trip(&ser, &items), Some(items));
}

#[test]
fn nested_list_of_lists() {
    let ser = ListSerializer::new(ListSerializer::new(NumberSerializer::<i32>::new()));
    let value = ser.from_json(&json!([[1, 2], [], [3]])).unwrap().unwrap();
    assert_eq!(value.len(), 3);
    assert_eq!(value[0].len(), 2);
    assert_eq!(value[1].len(), 0);
    assert_eq!(value[2].len(), 1);
    assert_eq!(to_json_string(&ser, Some(&value)), "[[1,2],[],[3]]");
}

#[test]
fn nested_list_of_sorted_sets() {
    let ser = ListSerializer::new(SortedSetSerializer::new(StringSerializer));
    let value = ser
        .from_json(&json!([["b", "a", "b"], []]))
        .unwrap()
        .unwrap();
    assert_eq!(
        value,
        vec![
            BTreeSet::from(["a".to_string(), "b".to_string()]),
            BTreeSet::new()
        ]
    );
    assert_eq!(to_json_string(&ser, Some(&value)), r#"[["a","b"],[]]"#);
}

#[test]
fn three_levels_deep() {
    let ser = ListSerializer::new(ListSerializer::new(ListSerializer::new(BoolSerializer)));
    let source = json!([[[true], []], [[false, true]]]);
    let value = ser.from_json(&source).unwrap().unwrap();
    assert_eq!(reparse(&to_json_string(&ser, Some(&value))), source);
}
