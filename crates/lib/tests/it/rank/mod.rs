//! Rank key and codec integration tests
//!
//! Example-based tests pin exact keys for the documented boundary cases;
//! property tests cover betweenness and narrowing over arbitrary keys.
