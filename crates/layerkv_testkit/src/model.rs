//! A naive reference model for differential testing.
//!
//! [`NaiveStore`] implements the same observable contract as
//! `layerkv_core::TransactionalStore` with the opposite strategy: every
//! `begin` clones the entire visible state instead of tracking deltas.
//! Correct but O(keys) per begin, which is exactly why it makes a good
//! oracle — the two implementations share no mechanism.

use layerkv_core::{StoreError, StoreResult};
use std::collections::HashMap;

/// A snapshot-per-begin transactional store.
///
/// `snapshots[0]` is the committed state and always present; each open
/// transaction is a full copy of the state it started from, stacked on top.
/// The top snapshot is the current visible view, so reads and writes are
/// plain map operations on it.
#[derive(Debug, Clone)]
pub struct NaiveStore {
    snapshots: Vec<HashMap<String, String>>,
}

impl NaiveStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshots: vec![HashMap::new()],
        }
    }

    fn top(&self) -> &HashMap<String, String> {
        self.snapshots.last().expect("committed snapshot always present")
    }

    fn top_mut(&mut self) -> &mut HashMap<String, String> {
        self.snapshots.last_mut().expect("committed snapshot always present")
    }

    /// Opens a new transaction by copying the current visible state.
    pub fn begin(&mut self) {
        let copy = self.top().clone();
        self.snapshots.push(copy);
    }

    /// Sets a key in the current view.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.top_mut().insert(key.into(), value.into());
    }

    /// Looks up a key in the current view.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.top().get(key).map(String::as_str)
    }

    /// Deletes a key from the current view, returning prior visibility.
    pub fn delete(&mut self, key: &str) -> bool {
        self.top_mut().remove(key).is_some()
    }

    /// Commits the innermost transaction: its full view replaces the state
    /// it started from.
    pub fn commit(&mut self) -> StoreResult<()> {
        if self.snapshots.len() == 1 {
            return Err(StoreError::NoActiveTransaction);
        }
        let view = self.snapshots.pop().expect("checked above");
        *self.top_mut() = view;
        Ok(())
    }

    /// Rolls back the innermost transaction by dropping its view.
    pub fn rollback(&mut self) -> StoreResult<()> {
        if self.snapshots.len() == 1 {
            return Err(StoreError::NoActiveTransaction);
        }
        self.snapshots.pop();
        Ok(())
    }

    /// Returns the current transaction nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.snapshots.len() - 1
    }
}

impl Default for NaiveStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_set_get_delete() {
        let mut store = NaiveStore::new();
        store.set("k", "v");
        assert_eq!(store.get("k"), Some("v"));
        assert!(store.delete("k"));
        assert_eq!(store.get("k"), None);
        assert!(!store.delete("k"));
    }

    #[test]
    fn naive_nested_commit_and_rollback() {
        let mut store = NaiveStore::new();
        store.set("k", "base");

        store.begin();
        store.set("k", "outer");
        store.begin();
        store.delete("k");
        assert_eq!(store.get("k"), None);

        store.rollback().unwrap();
        assert_eq!(store.get("k"), Some("outer"));

        store.commit().unwrap();
        assert_eq!(store.get("k"), Some("outer"));
        assert_eq!(store.depth(), 0);
    }

    #[test]
    fn naive_close_without_begin_fails() {
        let mut store = NaiveStore::new();
        assert_eq!(store.commit(), Err(StoreError::NoActiveTransaction));
        assert_eq!(store.rollback(), Err(StoreError::NoActiveTransaction));
    }
}
