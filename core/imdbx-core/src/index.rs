//! Record indexes: flat (key → record) and nested (key → ordering → record).
//!
//! Both keep insertion order, so iteration and scan results are deterministic and follow
//! the order of the source file. Lookups by key are O(1); scans are O(total records).

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Entry;
use thiserror::Error;

use crate::record::{FlatRecord, NestedRecord, TsvRecord};

/// Insertion-ordered map with the ahash hasher.
pub type OrderedMap<K, V> = IndexMap<K, V, ahash::RandomState>;

/// Scan result of a flat index: key → matching record.
pub type Matches<'a, R> = OrderedMap<&'a str, &'a R>;

/// Scan result of a nested index: primary key → ordering → matching record.
pub type NestedMatches<'a, R> = OrderedMap<&'a str, OrderedMap<i32, &'a R>>;

/// A key (or key pair) was inserted twice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate key {key}")]
pub struct DuplicateKeyError {
    pub key: String,
}

/// Index topology a loader builds. Insert-only; no update or delete.
pub trait RecordIndex: Default {
    type Record: TsvRecord;
    type Key;

    /// Key(s) of a freshly parsed record, taken before any transform.
    fn key_of(record: &Self::Record) -> Self::Key;

    /// Inserts `record` under `key`, rejecting a key that is already present.
    fn insert(&mut self, key: Self::Key, record: Self::Record) -> Result<(), DuplicateKeyError>;

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ===== Flat =====

/// Single-level index: unique string key → record.
pub struct FlatIndex<R> {
    entries: OrderedMap<String, R>,
}

impl<R> FlatIndex<R> {
    pub fn new() -> Self {
        Self {
            entries: OrderedMap::default(),
        }
    }

    /// Exact lookup; `None` when the key is absent.
    pub fn get(&self, key: &str) -> Option<&R> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &R)> {
        self.entries.iter().map(|(key, record)| (key.as_str(), record))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &R> {
        self.entries.values()
    }

    /// Every record whose `field` contains `query`, ignoring case.
    pub fn search_text<F>(&self, query: &str, field: F) -> Matches<'_, R>
    where
        F: Fn(&R) -> &str,
    {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|(_, record)| field(*record).to_lowercase().contains(&needle))
            .map(|(key, record)| (key.as_str(), record))
            .collect()
    }

    /// Every record whose `field` equals `value`.
    pub fn find_by<V, F>(&self, value: &V, field: F) -> Matches<'_, R>
    where
        V: PartialEq + ?Sized,
        F: Fn(&R) -> &V,
    {
        self.entries
            .iter()
            .filter(|(_, record)| field(*record) == value)
            .map(|(key, record)| (key.as_str(), record))
            .collect()
    }

    fn try_insert(&mut self, key: String, record: R) -> Result<(), DuplicateKeyError> {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Err(DuplicateKeyError {
                key: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(record);
                Ok(())
            }
        }
    }
}

impl<R> Default for FlatIndex<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: FlatRecord> RecordIndex for FlatIndex<R> {
    type Record = R;
    type Key = String;

    fn key_of(record: &R) -> String {
        record.key().to_string()
    }

    fn insert(&mut self, key: String, record: R) -> Result<(), DuplicateKeyError> {
        self.try_insert(key, record)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<R: fmt::Debug> fmt::Debug for FlatIndex<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

// ===== Nested =====

/// Two-level index: primary key → ordering → record.
pub struct NestedIndex<R> {
    entries: OrderedMap<String, OrderedMap<i32, R>>,
    records: usize,
}

impl<R> NestedIndex<R> {
    pub fn new() -> Self {
        Self {
            entries: OrderedMap::default(),
            records: 0,
        }
    }

    /// All records of one primary key, in insertion order; `None` when the key is absent.
    pub fn get(&self, primary: &str) -> Option<&OrderedMap<i32, R>> {
        self.entries.get(primary)
    }

    /// Exact lookup by (primary, ordering).
    pub fn get_entry(&self, primary: &str, ordering: i32) -> Option<&R> {
        self.entries.get(primary)?.get(&ordering)
    }

    pub fn contains_key(&self, primary: &str) -> bool {
        self.entries.contains_key(primary)
    }

    /// Total number of records across all primary keys.
    pub fn len(&self) -> usize {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records == 0
    }

    /// Number of distinct primary keys.
    pub fn primary_len(&self) -> usize {
        self.entries.len()
    }

    /// Primary keys with their inner maps, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OrderedMap<i32, R>)> {
        self.entries.iter().map(|(key, inner)| (key.as_str(), inner))
    }

    /// Every record flattened as (primary, ordering, record).
    pub fn records(&self) -> impl Iterator<Item = (&str, i32, &R)> {
        self.entries.iter().flat_map(|(key, inner)| {
            inner
                .iter()
                .map(move |(ordering, record)| (key.as_str(), *ordering, record))
        })
    }

    /// Every record whose `field` equals `value`, keeping the two-level keying.
    pub fn find_by<V, F>(&self, value: &V, field: F) -> NestedMatches<'_, R>
    where
        V: PartialEq + ?Sized,
        F: Fn(&R) -> &V,
    {
        let mut matches = NestedMatches::default();
        for (key, ordering, record) in self.records() {
            if field(record) == value {
                matches
                    .entry(key)
                    .or_default()
                    .insert(ordering, record);
            }
        }
        matches
    }

    fn try_insert(
        &mut self,
        primary: String,
        ordering: i32,
        record: R,
    ) -> Result<(), DuplicateKeyError> {
        if self.get_entry(&primary, ordering).is_some() {
            return Err(DuplicateKeyError {
                key: format!("{primary}, {ordering}"),
            });
        }
        // inner map is created on first sight of a primary key
        self.entries
            .entry(primary)
            .or_default()
            .insert(ordering, record);
        self.records += 1;
        Ok(())
    }
}

impl<R> Default for NestedIndex<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: NestedRecord> RecordIndex for NestedIndex<R> {
    type Record = R;
    type Key = (String, i32);

    fn key_of(record: &R) -> (String, i32) {
        (record.primary_key().to_string(), record.ordering())
    }

    fn insert(
        &mut self,
        (primary, ordering): (String, i32),
        record: R,
    ) -> Result<(), DuplicateKeyError> {
        self.try_insert(primary, ordering, record)
    }

    fn len(&self) -> usize {
        self.records
    }
}

impl<R: fmt::Debug> fmt::Debug for NestedIndex<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
