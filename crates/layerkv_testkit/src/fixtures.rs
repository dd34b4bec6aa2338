//! Test fixtures and store helpers.

use layerkv_core::TransactionalStore;

/// Creates a store pre-populated with the given committed entries.
pub fn store_with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> TransactionalStore
where
    K: Into<String>,
    V: Into<String>,
{
    let mut store = TransactionalStore::new();
    for (key, value) in entries {
        store.set(key, value);
    }
    store
}

/// Creates a store with `depth` empty transactions already open.
pub fn store_at_depth(depth: usize) -> TransactionalStore {
    let mut store = TransactionalStore::new();
    for _ in 0..depth {
        store.begin();
    }
    store
}
