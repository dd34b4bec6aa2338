//! Error types for LayerKV core.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in LayerKV store operations.
///
/// Missing keys are a normal outcome represented as `Option::None`, not an
/// error. Every error leaves the store valid and usable.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StoreError {
    /// `commit` or `rollback` was called with no open transaction.
    #[error("no active transaction")]
    NoActiveTransaction,
}
