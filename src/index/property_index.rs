//! B-Tree based secondary property index
//!
//! Maps (property key, value) to the set of element identifiers holding that
//! value. One index exists per explicitly created key; the store keeps every
//! created index in sync on each property write, replacement and removal, so
//! index-based lookups never observe a half-applied mutation.

use crate::graph::PropertyValue;
use rustc_hash::FxHashSet;
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;
use tracing::debug;

/// Index over the values of a single property key
#[derive(Debug, Clone, Default)]
pub struct PropertyIndex {
    /// Value -> set of element ids (vertex or edge, per owning manager)
    index: BTreeMap<PropertyValue, FxHashSet<u64>>,
}

impl PropertyIndex {
    pub fn new() -> Self {
        Self {
            index: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, value: PropertyValue, element: u64) {
        self.index.entry(value).or_default().insert(element);
    }

    pub fn remove(&mut self, value: &PropertyValue, element: u64) {
        if let Some(elements) = self.index.get_mut(value) {
            elements.remove(&element);
            if elements.is_empty() {
                self.index.remove(value);
            }
        }
    }

    pub fn get(&self, value: &PropertyValue) -> Vec<u64> {
        self.index
            .get(value)
            .map(|elements| elements.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn range<R>(&self, range: R) -> Vec<u64>
    where
        R: std::ops::RangeBounds<PropertyValue>,
    {
        let mut result = Vec::new();
        for (_, elements) in self.index.range(range) {
            result.extend(elements.iter().copied());
        }
        result
    }
}

/// All secondary indices for one element namespace (vertices or edges)
///
/// Interior locking keeps each index update a narrow critical section; the
/// store calls in while already holding `&mut self`, concurrent readers only
/// ever take the read lock.
#[derive(Debug, Default)]
pub struct PropertyIndexManager {
    indices: RwLock<HashMap<String, PropertyIndex>>,
}

impl PropertyIndexManager {
    pub fn new() -> Self {
        Self {
            indices: RwLock::new(HashMap::new()),
        }
    }

    /// Create an index for a key; existing values are backfilled by the store
    pub fn create_index(&self, key: impl Into<String>) {
        let key = key.into();
        debug!(key = %key, "creating property index");
        let mut indices = self.indices.write().unwrap();
        indices.entry(key).or_default();
    }

    /// Drop the index for a key
    pub fn drop_index(&self, key: &str) {
        debug!(key = %key, "dropping property index");
        let mut indices = self.indices.write().unwrap();
        indices.remove(key);
    }

    /// Whether an index exists for a key
    pub fn has_index(&self, key: &str) -> bool {
        self.indices.read().unwrap().contains_key(key)
    }

    /// Keys currently indexed
    pub fn indexed_keys(&self) -> Vec<String> {
        self.indices.read().unwrap().keys().cloned().collect()
    }

    /// Record a value for an element; no-op when the key is not indexed
    pub fn index_insert(&self, key: &str, value: PropertyValue, element: u64) {
        let mut indices = self.indices.write().unwrap();
        if let Some(index) = indices.get_mut(key) {
            index.insert(value, element);
        }
    }

    /// Forget a value for an element; no-op when the key is not indexed
    pub fn index_remove(&self, key: &str, value: &PropertyValue, element: u64) {
        let mut indices = self.indices.write().unwrap();
        if let Some(index) = indices.get_mut(key) {
            index.remove(value, element);
        }
    }

    /// Elements whose `key` property equals `value`
    pub fn lookup(&self, key: &str, value: &PropertyValue) -> Vec<u64> {
        self.indices
            .read()
            .unwrap()
            .get(key)
            .map(|index| index.get(value))
            .unwrap_or_default()
    }
}
