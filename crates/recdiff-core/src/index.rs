//! Re-indexing of a collection by a key field.
//!
//! Each entry is filed under the value of its key field. Entries that lack
//! the field, and entries that are not records at all, share the single
//! [`EntryKey::Missing`] slot. When two entries land on the same key the
//! later one wins but keeps the position of the first.

use std::collections::HashMap;

use recdiff_types::{Collection, Value};

/// The identity of a collection entry under a key field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntryKey {
    /// The entry has no value for the key field.
    Missing,
    /// The key field's value in string form.
    Present(String),
}

impl EntryKey {
    /// Compute the key of `entry` under `key_field`.
    ///
    /// Primitive key values compare by their string form, so `1` and `"1"`
    /// correlate. Structured key values compare by their compact JSON text.
    pub fn of(entry: &Value, key_field: &str) -> Self {
        match entry.as_record().and_then(|r| r.get(key_field)) {
            None => EntryKey::Missing,
            Some(Value::Primitive(p)) => EntryKey::Present(p.to_key_string()),
            Some(other) => EntryKey::Present(other.to_json_string()),
        }
    }
}

/// A collection looked up by key, iterated in first-insertion order.
#[derive(Debug)]
pub struct KeyedIndex<'a> {
    order: Vec<EntryKey>,
    entries: HashMap<EntryKey, &'a Value>,
}

impl<'a> KeyedIndex<'a> {
    /// Index `collection` by `key_field`.
    ///
    /// Without a key field nothing is indexed.
    pub fn build(collection: &'a Collection, key_field: Option<&str>) -> Self {
        let mut index = Self {
            order: Vec::new(),
            entries: HashMap::new(),
        };
        let Some(key_field) = key_field else {
            return index;
        };

        for entry in collection {
            let key = EntryKey::of(entry, key_field);
            if index.entries.insert(key.clone(), entry).is_none() {
                index.order.push(key);
            }
        }
        index
    }

    pub fn get(&self, key: &EntryKey) -> Option<&'a Value> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate `(key, entry)` pairs in the order keys were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&EntryKey, &'a Value)> + '_ {
        self.order
            .iter()
            .filter_map(move |key| self.entries.get(key).map(|entry| (key, *entry)))
    }
}
