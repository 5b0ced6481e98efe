//! Rank keys and the codec that generates them.
//!
//! A [`RankKey`] is a non-empty string over the alphabet `'0'..='z'`. Keys
//! compare with plain lexicographic (codepoint-wise) ordering, so any storage
//! layer that can sort strings can sort siblings. The codec in [`codec`]
//! produces a key strictly between two existing keys, which lets a moved item
//! be re-ranked without touching its siblings.
//!
//! # Example
//!
//! ```
//! use boardrank::rank::{self, RankKey};
//!
//! let a = RankKey::parse("a")?;
//! let c = RankKey::parse("c")?;
//! let b = rank::insert(Some(&a), Some(&c))?.into_key().unwrap();
//!
//! assert!(a < b && b < c);
//! # Ok::<(), boardrank::rank::RankError>(())
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{EMPTY_CONTAINER_KEY, MAX_CHAR, MIN_CHAR};

pub mod codec;
pub mod errors;

pub use codec::{Insertion, insert, insert_str};
pub use errors::RankError;

/// An opaque, lexicographically comparable order key.
///
/// Ordering is the derived `String` ordering, which for this ASCII alphabet is
/// exactly codepoint-wise comparison.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RankKey(String);

impl RankKey {
    /// Parses a rank key, validating that it is non-empty and uses only the key alphabet.
    pub fn parse(key: impl Into<String>) -> Result<Self, RankError> {
        let key = key.into();
        validate(&key)?;
        Ok(Self(key))
    }

    /// Wraps bytes produced by the codec, which only emits alphabet characters.
    pub(crate) fn from_generated(bytes: Vec<u8>) -> Self {
        debug_assert!(!bytes.is_empty());
        debug_assert!(bytes.iter().all(|b| (MIN_CHAR..=MAX_CHAR).contains(b)));
        // Alphabet bytes are ASCII
        Self(bytes.into_iter().map(char::from).collect())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the key's raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of characters in the key.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `key` would parse as a rank key.
    pub fn is_valid(key: &str) -> bool {
        validate(key).is_ok()
    }
}

/// The fixed key handed to the first item of an otherwise empty container.
pub fn empty_container_key() -> RankKey {
    RankKey::from_generated(EMPTY_CONTAINER_KEY.as_bytes().to_vec())
}

fn validate(key: &str) -> Result<(), RankError> {
    if key.is_empty() {
        return Err(RankError::EmptyKey);
    }
    match key
        .char_indices()
        .find(|(_, c)| !c.is_ascii() || !(MIN_CHAR..=MAX_CHAR).contains(&(*c as u8)))
    {
        Some((offset, character)) => Err(RankError::InvalidCharacter {
            key: key.to_string(),
            character,
            offset,
        }),
        None => Ok(()),
    }
}

/// Compares two keys the way siblings are ordered.
///
/// The empty string sorts before everything, matching its role as the open
/// lower bound.
pub fn compare(a: &str, b: &str) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}

impl fmt::Display for RankKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RankKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for RankKey {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RankKey {
    type Error = RankError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for RankKey {
    type Error = RankError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<RankKey> for String {
    fn from(key: RankKey) -> Self {
        key.0
    }
}

impl PartialEq<str> for RankKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RankKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
