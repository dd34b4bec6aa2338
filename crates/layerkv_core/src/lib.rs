//! # LayerKV Core
//!
//! An in-memory key-value store with nested transactions.
//!
//! This crate provides:
//! - A committed base map with a stack of transaction layers on top
//! - Read-your-writes isolation with fallback to outer layers and the base
//! - Deletion markers that shadow values without losing "never touched"
//! - Layer-local merge on inner commit, base application on outermost commit
//!
//! ## Example
//!
//! ```rust
//! use layerkv_core::TransactionalStore;
//!
//! let mut store = TransactionalStore::new();
//!
//! store.begin();
//! store.set("answer", "42");
//! assert_eq!(store.get("answer"), Some("42"));
//!
//! store.begin();
//! store.delete("answer");
//! assert_eq!(store.get("answer"), None);
//! store.rollback().unwrap();
//!
//! assert_eq!(store.get("answer"), Some("42"));
//! store.commit().unwrap();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod layer;
mod store;

pub use error::{StoreError, StoreResult};
pub use layer::{LayerEntry, TransactionLayer};
pub use store::TransactionalStore;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
