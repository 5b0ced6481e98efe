//! Mover integration tests
//!
//! Drops applied end to end against an `InMemory` store, including the
//! rebalance fallback for gaps with no room left.
