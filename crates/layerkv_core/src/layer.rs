//! Transaction layers.
//!
//! A layer holds the uncommitted deltas of exactly one `begin`. Each key maps
//! to a tagged entry so a deletion recorded inside the transaction is
//! distinguishable from a key the transaction never touched.

use std::collections::HashMap;

/// A pending write recorded in a transaction layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerEntry {
    /// The key was set to this value within the transaction.
    Set(String),
    /// The key was deleted within the transaction.
    ///
    /// A `Deleted` entry shadows any value in lower layers or the base
    /// store; it is not the same as the key being absent from the layer.
    Deleted,
}

/// The uncommitted deltas of one open transaction.
///
/// Layers are owned exclusively by the store's transaction stack. A layer is
/// created empty by `begin` and destroyed as a unit by the matching `commit`
/// or `rollback`.
#[derive(Debug, Clone, Default)]
pub struct TransactionLayer {
    entries: HashMap<String, LayerEntry>,
}

impl TransactionLayer {
    /// Creates a new empty layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a set, overwriting any prior entry for the key, including a
    /// prior `Deleted` marker.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), LayerEntry::Set(value.into()));
    }

    /// Records a deletion, overwriting any prior entry for the key.
    pub fn mark_deleted(&mut self, key: impl Into<String>) {
        self.entries.insert(key.into(), LayerEntry::Deleted);
    }

    /// Looks up the entry for a key, if this layer touched it.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&LayerEntry> {
        self.entries.get(key)
    }

    /// Absorbs a child layer's entries, overwriting matching keys.
    ///
    /// Both `Set` and `Deleted` markers propagate unchanged so this layer
    /// retains what the child intended even for keys it never touched
    /// itself. Cost is proportional to the child's entry count.
    pub fn absorb(&mut self, child: TransactionLayer) {
        for (key, entry) in child.entries {
            self.entries.insert(key, entry);
        }
    }

    /// Consumes the layer, yielding its entries for application elsewhere.
    pub fn into_entries(self) -> impl Iterator<Item = (String, LayerEntry)> {
        self.entries.into_iter()
    }

    /// Returns the number of keys this layer has touched.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the layer has touched any key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
