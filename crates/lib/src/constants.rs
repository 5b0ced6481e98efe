//! Constants used throughout the boardrank library.
//!
//! This module provides central definitions for the rank key alphabet and the
//! fixed keys the engine hands out without consulting the codec.

/// Lowest character a rank key may contain (`'0'`, codepoint 48).
pub const MIN_CHAR: u8 = b'0';

/// Highest character a rank key may contain (`'z'`, codepoint 122).
pub const MAX_CHAR: u8 = b'z';

/// Number of distinct characters in the rank key alphabet.
pub const RADIX: u32 = (MAX_CHAR - MIN_CHAR) as u32 + 1;

/// Key assigned to an item dropped into a container with no other items.
pub const EMPTY_CONTAINER_KEY: &str = "a";

/// Default longest key length before a container is reported as due for a rebalance.
pub const DEFAULT_MAX_KEY_LEN: usize = 32;
