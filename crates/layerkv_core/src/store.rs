//! The transactional store.

use crate::error::{StoreError, StoreResult};
use crate::layer::{LayerEntry, TransactionLayer};
use std::collections::HashMap;
use tracing::{debug, trace};

/// An in-memory key-value store with nested transactions.
///
/// The store owns a committed base map and a stack of transaction layers.
/// With no open transaction it behaves as a plain map. `begin` pushes a new
/// layer; all writes then target the top layer until it is closed by
/// `commit` or `rollback`.
///
/// Reads scan the stack from the innermost layer outward and fall back to
/// the base store, so a transaction sees its own uncommitted writes layered
/// over the committed state (read-your-writes). A deletion recorded in an
/// inner layer shadows any value beneath it.
///
/// Committing an inner transaction merges its deltas into the parent layer;
/// only committing the outermost transaction touches the base store.
/// Rollback discards exactly the top layer.
///
/// The store assumes exclusive access by one logical session. Callers that
/// need cross-thread sharing must add their own synchronization.
///
/// # Example
///
/// ```rust
/// use layerkv_core::TransactionalStore;
///
/// let mut store = TransactionalStore::new();
/// store.set("k", "committed");
///
/// store.begin();
/// store.set("k", "pending");
/// assert_eq!(store.get("k"), Some("pending"));
///
/// store.rollback().unwrap();
/// assert_eq!(store.get("k"), Some("committed"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransactionalStore {
    /// Committed state. Mutated only by an outermost commit or by direct
    /// writes when no transaction is open.
    base: HashMap<String, String>,
    /// Open transactions, index 0 = outermost, last = innermost/active.
    stack: Vec<TransactionLayer>,
}

impl TransactionalStore {
    /// Creates a new empty store with no open transaction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new nested transaction.
    ///
    /// Subsequent writes target the new layer until it is closed. Nesting
    /// depth is bounded only by memory.
    pub fn begin(&mut self) {
        self.stack.push(TransactionLayer::new());
        trace!(depth = self.stack.len(), "transaction begun");
    }

    /// Sets a key to a value.
    ///
    /// Writes into the active transaction layer if one is open, otherwise
    /// directly into the committed base store.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        match self.stack.last_mut() {
            Some(layer) => layer.set(key, value),
            None => {
                self.base.insert(key.into(), value.into());
            }
        }
    }

    /// Looks up the effective value for a key.
    ///
    /// Scans open layers from innermost to outermost; the first layer that
    /// touched the key decides the result, and a recorded deletion yields
    /// `None` regardless of what lower layers or the base store contain.
    /// Keys untouched by any layer fall back to the base store. Cost is
    /// proportional to the nesting depth, not the key count.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        for layer in self.stack.iter().rev() {
            match layer.entry(key) {
                Some(LayerEntry::Set(value)) => return Some(value),
                Some(LayerEntry::Deleted) => return None,
                None => {}
            }
        }
        self.base.get(key).map(String::as_str)
    }

    /// Checks whether a key is currently visible.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Deletes a key, returning whether it was visible beforehand.
    ///
    /// With an open transaction this records a deletion marker in the top
    /// layer unconditionally, so it is idempotent and always succeeds. With
    /// no transaction the key is removed from the base store if present.
    /// The returned flag reflects visibility per [`get`](Self::get)
    /// semantics immediately before the call.
    pub fn delete(&mut self, key: &str) -> bool {
        let existed = self.contains_key(key);
        match self.stack.last_mut() {
            Some(layer) => layer.mark_deleted(key),
            None => {
                self.base.remove(key);
            }
        }
        existed
    }

    /// Commits the innermost open transaction.
    ///
    /// If it was the outermost, its entries are applied to the base store:
    /// sets insert, deletions remove (removing an absent key is fine).
    /// Otherwise its entries merge into the parent layer, overwriting
    /// matching keys; deletion markers propagate unchanged so the parent
    /// keeps the child's intent. Fails with
    /// [`StoreError::NoActiveTransaction`] if no transaction is open, in
    /// which case nothing is mutated.
    pub fn commit(&mut self) -> StoreResult<()> {
        let layer = self.stack.pop().ok_or(StoreError::NoActiveTransaction)?;
        let depth = self.stack.len();
        match self.stack.last_mut() {
            Some(parent) => {
                debug!(
                    entries = layer.len(),
                    depth,
                    "inner commit merged into parent layer"
                );
                parent.absorb(layer);
            }
            None => {
                debug!(entries = layer.len(), "outermost commit applied to base");
                for (key, entry) in layer.into_entries() {
                    match entry {
                        LayerEntry::Set(value) => {
                            self.base.insert(key, value);
                        }
                        LayerEntry::Deleted => {
                            self.base.remove(&key);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Rolls back the innermost open transaction, discarding its deltas.
    ///
    /// No other layer and no base-store entry is affected. Fails with
    /// [`StoreError::NoActiveTransaction`] if no transaction is open, in
    /// which case nothing is mutated.
    pub fn rollback(&mut self) -> StoreResult<()> {
        let layer = self.stack.pop().ok_or(StoreError::NoActiveTransaction)?;
        debug!(
            entries = layer.len(),
            depth = self.stack.len(),
            "transaction rolled back"
        );
        drop(layer);
        Ok(())
    }

    /// Returns the current transaction nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Checks whether any transaction is open.
    #[must_use]
    pub fn in_transaction(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Returns the number of committed keys in the base store.
    ///
    /// Pending transaction layers are not counted.
    #[must_use]
    pub fn base_len(&self) -> usize {
        self.base.len()
    }

    /// Checks whether the committed base store is empty.
    #[must_use]
    pub fn is_base_empty(&self) -> bool {
        self.base.is_empty()
    }
}
