//! Serializers for collections of values, built from an element serializer.

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use serde_json::Value;

use super::{ArrayView, JsonSerializer};
use crate::error::{DecodeError, DecodeResult};

/// A collection kind that decoding can build one element at a time.
///
/// Insertion follows the collection's own semantics: sets drop duplicates
/// according to their element equality.
pub trait Collection<T> {
    fn with_capacity(capacity: usize) -> Self;

    fn insert_item(&mut self, item: T);
}

impl<T> Collection<T> for Vec<T> {
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    fn insert_item(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> Collection<T> for VecDeque<T> {
    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    fn insert_item(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T: Eq + Hash> Collection<T> for HashSet<T> {
    fn with_capacity(capacity: usize) -> Self {
        HashSet::with_capacity(capacity)
    }

    fn insert_item(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T: Ord> Collection<T> for BTreeSet<T> {
    fn with_capacity(_capacity: usize) -> Self {
        BTreeSet::new()
    }

    fn insert_item(&mut self, item: T) {
        self.insert(item);
    }
}

/// Appends `items` as a JSON array, delegating each element to `element`.
///
/// Any iterable of elements is accepted, independent of the collection kind
/// the array decodes into.
pub fn print_json_array<S, I>(out: &mut String, element: &S, items: I)
where
    S: JsonSerializer + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<S::Value>,
{
    out.push('[');
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        element.print_json(out, Some(item.borrow()));
    }
    out.push(']');
}

/// Serializer for a collection `C` of values handled by `S`.
///
/// Serializes to a JSON array in the collection's iteration order. Decoding
/// reads the array slots in ascending index order and inserts each decoded
/// element into a fresh `C`. A `null` slot is a fault, since `C` has no way
/// to hold an absent element.
pub struct CollectionSerializer<S, C> {
    element: S,
    kind: PhantomData<fn() -> C>,
}

/// Order-preserving `Vec` of elements.
pub type ListSerializer<S> = CollectionSerializer<S, Vec<<S as JsonSerializer>::Value>>;

/// `HashSet` of elements; duplicates in the array collapse on decode.
pub type SetSerializer<S> = CollectionSerializer<S, HashSet<<S as JsonSerializer>::Value>>;

/// `BTreeSet` of elements; serializes in ascending order.
pub type SortedSetSerializer<S> =
    CollectionSerializer<S, BTreeSet<<S as JsonSerializer>::Value>>;

pub type DequeSerializer<S> = CollectionSerializer<S, VecDeque<<S as JsonSerializer>::Value>>;

impl<S, C> CollectionSerializer<S, C> {
    pub const fn new(element: S) -> Self {
        Self {
            element,
            kind: PhantomData,
        }
    }

    pub fn element(&self) -> &S {
        &self.element
    }
}

impl<S: Clone, C> Clone for CollectionSerializer<S, C> {
    fn clone(&self) -> Self {
        Self::new(self.element.clone())
    }
}

impl<S: fmt::Debug, C> fmt::Debug for CollectionSerializer<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionSerializer")
            .field("element", &self.element)
            .finish()
    }
}

impl<S, C> JsonSerializer for CollectionSerializer<S, C>
where
    S: JsonSerializer,
    C: Collection<S::Value>,
    for<'a> &'a C: IntoIterator<Item = &'a S::Value>,
{
    type Value = C;

    fn print_value(&self, out: &mut String, value: &C) {
        print_json_array(out, &self.element, value);
    }

    fn decode_value(&self, json: &Value) -> DecodeResult<C> {
        let array = ArrayView::of(json)?;
        let mut out = C::with_capacity(array.len());
        for (index, slot) in array.iter().enumerate() {
            let item = self
                .element
                .from_json(slot)
                .map_err(|err| err.at_index(index))?
                .ok_or(DecodeError::NullElement { index })?;
            out.insert_item(item);
        }
        Ok(out)
    }
}
