//! Even respacing of a container's rank keys.
//!
//! Repeated inserts into the same gap grow keys by roughly one character per
//! five bisections, and a gap closed by tied or `'0'`-terminated neighbors
//! cannot be split at all. Rebalancing rewrites every key in a container to
//! evenly spaced keys of a uniform, minimal width, restoring room between and
//! around all siblings.

use tracing::info;

use crate::constants::{MIN_CHAR, RADIX};
use crate::item::Orderable;
use crate::rank::RankKey;
use crate::store::KeyUpdate;

/// Returns `count` strictly increasing, evenly spaced keys.
///
/// Keys share a width `w`, the smallest with `RADIX^w >= 2 * (count + 1)`,
/// before trailing `'0'` characters are trimmed. The first key is above the
/// smallest possible key and the last is below the largest key of width `w`,
/// so there is room to insert before, between and after all of them. Any
/// `usize` count fits in a `u128` key space of at most eleven characters.
///
/// # Examples
///
/// ```
/// use boardrank::rebalance::spread;
///
/// let keys = spread(3);
/// assert_eq!(keys.len(), 3);
/// assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
/// ```
pub fn spread(count: usize) -> Vec<RankKey> {
    if count == 0 {
        return Vec::new();
    }

    let radix = u128::from(RADIX);
    let slots = count as u128 + 1;

    let mut width = 1usize;
    let mut space = radix;
    while space < slots * 2 {
        width += 1;
        space *= radix;
    }

    // At least 2, so consecutive keys never collide
    let step = space / slots;
    (1..=count as u128)
        .map(|slot| encode(slot * step, width))
        .collect()
}

/// Respaces an already sorted container.
///
/// Returns an update for every item whose key changes, in sibling order.
pub fn respace<T: Orderable>(siblings: &[T]) -> Vec<KeyUpdate> {
    let keys = spread(siblings.len());
    let updates: Vec<KeyUpdate> = siblings
        .iter()
        .zip(keys)
        .filter(|(item, key)| item.pos() != key)
        .map(|(item, key)| KeyUpdate::new(item.id(), item.container(), key))
        .collect();

    if let Some(first) = siblings.first() {
        info!(
            container = first.container(),
            items = siblings.len(),
            changed = updates.len(),
            "Respaced container"
        );
    }
    updates
}

fn encode(mut value: u128, width: usize) -> RankKey {
    let radix = u128::from(RADIX);
    let mut digits = vec![MIN_CHAR; width];
    for digit in digits.iter_mut().rev() {
        *digit = MIN_CHAR + (value % radix) as u8;
        value /= radix;
    }
    // A key ending in MIN_CHAR leaves no room directly below it
    while digits.last() == Some(&MIN_CHAR) {
        digits.pop();
    }
    RankKey::from_generated(digits)
}
