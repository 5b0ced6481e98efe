//! Character-by-character bisection between two rank keys.
//!
//! Positions are walked left to right. A missing lower character reads as
//! [`MIN_CHAR`] and a missing upper character as [`MAX_CHAR`]. Shared
//! characters pass through; the first position with room strictly between
//! the two characters receives their midpoint and ends the key. When the two
//! characters are adjacent codepoints there is no room, so the lower
//! character is emitted and the walk continues one position further, where
//! the key has sorted strictly below the upper bound and only the lower bound
//! still constrains it.

use tracing::{debug, warn};

use super::{RankError, RankKey};
use crate::constants::{MAX_CHAR, MIN_CHAR};

/// Outcome of a codec insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion {
    /// A key strictly between the bounds.
    Placed(RankKey),
    /// No key fits between the bounds. Carries the lower bound unchanged
    /// (`None` when the lower bound was open).
    Exhausted { prev: Option<RankKey> },
}

impl Insertion {
    /// True when a key strictly between the bounds was produced.
    pub fn is_placed(&self) -> bool {
        matches!(self, Insertion::Placed(_))
    }

    /// The placed key, if any.
    pub fn key(&self) -> Option<&RankKey> {
        match self {
            Insertion::Placed(key) => Some(key),
            Insertion::Exhausted { .. } => None,
        }
    }

    /// Consumes the insertion, returning the placed key, if any.
    pub fn into_key(self) -> Option<RankKey> {
        match self {
            Insertion::Placed(key) => Some(key),
            Insertion::Exhausted { .. } => None,
        }
    }
}

/// Computes a key strictly between `prev` and `next`.
///
/// `None` on either side means that side is unbounded. When both bounds are
/// given, `prev` must sort strictly before `next`.
///
/// # Errors
/// Returns [`RankError::InvalidBounds`] if `prev >= next`.
///
/// # Examples
///
/// ```
/// use boardrank::rank::{RankKey, insert};
///
/// // Fully open bounds produce the midpoint of the alphabet.
/// assert_eq!(insert(None, None)?.into_key().unwrap(), "U");
///
/// // Adjacent codepoints extend the key by one character.
/// let a = RankKey::parse("a")?;
/// let b = RankKey::parse("b")?;
/// assert_eq!(insert(Some(&a), Some(&b))?.into_key().unwrap(), "aU");
/// # Ok::<(), boardrank::rank::RankError>(())
/// ```
pub fn insert(prev: Option<&RankKey>, next: Option<&RankKey>) -> Result<Insertion, RankError> {
    if let (Some(prev), Some(next)) = (prev, next) {
        if prev >= next {
            return Err(RankError::InvalidBounds {
                prev: prev.clone(),
                next: next.clone(),
            });
        }
    }

    let lower = prev.map(RankKey::as_bytes).unwrap_or_default();
    let upper = next.map(RankKey::as_bytes).unwrap_or_default();
    let generated = bisect(lower, upper);

    if let Some(next) = next {
        if generated.as_slice() >= next.as_bytes() {
            warn!(
                prev = prev.map(RankKey::as_str).unwrap_or(""),
                next = next.as_str(),
                "No rank key fits between bounds"
            );
            return Ok(Insertion::Exhausted {
                prev: prev.cloned(),
            });
        }
    }

    let key = RankKey::from_generated(generated);
    debug!(
        prev = prev.map(RankKey::as_str).unwrap_or(""),
        next = next.map(RankKey::as_str).unwrap_or(""),
        key = key.as_str(),
        "Generated rank key"
    );
    Ok(Insertion::Placed(key))
}

/// String form of [`insert`], where `""` denotes an open bound.
///
/// Non-empty bounds are validated against the key alphabet.
pub fn insert_str(prev: &str, next: &str) -> Result<Insertion, RankError> {
    let prev = (!prev.is_empty()).then(|| RankKey::parse(prev)).transpose()?;
    let next = (!next.is_empty()).then(|| RankKey::parse(next)).transpose()?;
    insert(prev.as_ref(), next.as_ref())
}

/// Walks both bounds and returns the generated key bytes.
///
/// Terminates once both inputs are exhausted at the latest, since
/// `MIN_CHAR` and `MAX_CHAR` always leave room for a midpoint.
fn bisect(prev: &[u8], next: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(prev.len().max(next.len()) + 1);
    // Set once the output sorts strictly below `next`; from then on only
    // `prev` bounds the remaining characters.
    let mut below_next = false;

    for i in 0.. {
        let p = prev.get(i).copied().unwrap_or(MIN_CHAR);
        let n = if below_next {
            MAX_CHAR
        } else {
            next.get(i).copied().unwrap_or(MAX_CHAR)
        };

        if p == n {
            out.push(p);
            continue;
        }

        let mid = ((u16::from(p) + u16::from(n)) / 2) as u8;
        if mid == p || mid == n {
            out.push(p);
            below_next = true;
            continue;
        }

        out.push(mid);
        break;
    }

    out
}
