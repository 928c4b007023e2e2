//! Inverse BWT via LF-mapping
//!
//! Row 0 is the rotation that starts with the sentinel, so `bwt[0]` is the
//! last text symbol. Each LF step `row = C[c] + rank[row]` moves one symbol
//! further back in the text, until the sentinel row is reached.

extern crate alloc;
use alloc::vec::Vec;

use crate::bwt::SENTINEL;
use crate::error::{BwtError, Result};
use crate::first_column::FirstColumnMap;
use crate::rank::RankIndex;

/// Reconstruct the original text (without sentinel) from a BWT string.
///
/// # Example
/// ```
/// use alice_bwt::bwt::transform;
/// use alice_bwt::inverse::invert_bwt;
///
/// let bwt = transform(b"banana").unwrap();
/// assert_eq!(invert_bwt(&bwt).unwrap(), b"banana");
/// ```
pub fn invert_bwt(bwt: &[u8]) -> Result<Vec<u8>> {
    let ranks = RankIndex::build(bwt);
    let first = FirstColumnMap::from_totals(ranks.totals());
    invert_with(bwt, &ranks, &first)
}

/// Same as [`invert_bwt`], reusing already built rank structures.
pub fn invert_with(bwt: &[u8], ranks: &RankIndex, first: &FirstColumnMap) -> Result<Vec<u8>> {
    let sentinels = ranks.total(SENTINEL);
    if sentinels != 1 {
        tracing::warn!(sentinels, len = bwt.len(), "rejecting BWT without a unique sentinel");
        return Err(BwtError::CorruptBwt { sentinels });
    }

    let expected = bwt.len() - 1;
    let mut reversed = Vec::with_capacity(expected);
    let mut row = 0;

    // LF(sentinel row) == 0, so the walk always returns to the sentinel;
    // a valid BWT gets there after exactly `expected` steps.
    while reversed.len() < expected {
        let c = bwt[row];
        if c == SENTINEL {
            break;
        }
        reversed.push(c);
        let start = first.start(c).ok_or(BwtError::BrokenCycle {
            recovered: reversed.len(),
            expected,
        })?;
        row = start + ranks.rank(row);
    }

    if reversed.len() != expected || bwt[row] != SENTINEL {
        tracing::warn!(recovered = reversed.len(), expected, "LF walk did not close");
        return Err(BwtError::BrokenCycle {
            recovered: reversed.len(),
            expected,
        });
    }

    reversed.reverse();
    tracing::debug!(len = reversed.len(), "BWT inverted");
    Ok(reversed)
}
