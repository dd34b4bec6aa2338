//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random keys, values, and operation
//! sequences against the store contract.

use proptest::prelude::*;

/// One operation against a store.
///
/// `Commit` and `Rollback` are legal even with no open transaction; the
/// store answers them with an error and must stay unchanged, so generated
/// sequences deliberately include them at depth zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// `set(key, value)`.
    Set(String, String),
    /// `get(key)`.
    Get(String),
    /// `delete(key)`.
    Delete(String),
    /// `begin()`.
    Begin,
    /// `commit()`.
    Commit,
    /// `rollback()`.
    Rollback,
}

/// Strategy for generating keys.
///
/// A small alphabet keeps collisions frequent so layered shadowing actually
/// gets exercised.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e][0-9]?").expect("invalid key regex")
}

/// Strategy for generating values.
pub fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,8}").expect("invalid value regex")
}

/// Strategy for generating a single operation.
pub fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (key_strategy(), value_strategy()).prop_map(|(k, v)| Op::Set(k, v)),
        3 => key_strategy().prop_map(Op::Get),
        2 => key_strategy().prop_map(Op::Delete),
        2 => Just(Op::Begin),
        2 => Just(Op::Commit),
        1 => Just(Op::Rollback),
    ]
}

/// Strategy for generating an operation sequence.
pub fn op_sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op_strategy(), 0..max_len)
}
