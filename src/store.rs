//! Per-list configuration – a key/value store scoped by list identity. The
//! store survives page breaks within one run, so event listeners can keep
//! running totals or page counters across pages.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

/// Key/value state attached to one list.
#[derive(Debug, Clone, Default)]
pub struct Store {
    entries: BTreeMap<String, Value>,
}

impl Store {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

/// The per-list configuration handle: currently the store alone.
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    pub store: Store,
}

/// Resolves or creates configurations keyed by list identity.
#[derive(Debug, Default)]
pub struct ConfigRegistry {
    entries: HashMap<String, Configuration>,
}

impl ConfigRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the configuration for a list id, creating it on first use.
    /// Successive activations for the same id — one per page the list spans
    /// — yield the same entry.
    pub fn activate(&mut self, list_id: &str) -> &mut Configuration {
        self.entries.entry(list_id.to_string()).or_default()
    }

    pub fn get(&self, list_id: &str) -> Option<&Configuration> {
        self.entries.get(list_id)
    }
}
