//! Burrows-Wheeler Transform (BWT)
//!
//! Forward half of the pipeline: suffix array, then the last column of the
//! sorted rotation matrix read off in suffix-array order.

extern crate alloc;
use alloc::vec::Vec;

use crate::error::{BwtError, Result};

/// Sentinel character (lexicographically smallest)
pub const SENTINEL: u8 = 0;

/// Reject text that already carries the sentinel.
#[inline]
pub fn validate_text(text: &[u8]) -> Result<()> {
    match text.iter().position(|&c| c == SENTINEL) {
        Some(position) => Err(BwtError::SentinelInText { position }),
        None => Ok(()),
    }
}

/// Build Suffix Array using naive sorting
/// O(N log^2 N) - SA-IS would be a drop-in replacement producing the same order.
///
/// The suffix starting at `text.len()` is the sentinel-only suffix; it is
/// modelled as the empty slice, which sorts before every other suffix.
///
/// # Example
/// ```
/// use alice_bwt::bwt::build_suffix_array;
///
/// let sa = build_suffix_array(b"banana").unwrap();
/// assert_eq!(sa, vec![6, 5, 3, 1, 0, 4, 2]);
/// ```
pub fn build_suffix_array(text: &[u8]) -> Result<Vec<usize>> {
    validate_text(text)?;
    let n = text.len();

    // Include position n for the sentinel
    let mut sa: Vec<usize> = (0..=n).collect();

    // Distinct lengths plus the unique sentinel make every suffix distinct,
    // so an unstable sort is deterministic here.
    sa.sort_unstable_by(|&a, &b| text[a..].cmp(&text[b..]));

    tracing::trace!(len = sa.len(), "suffix array built");
    Ok(sa)
}

/// Build BWT from text and suffix array
/// BWT[i] = text[SA[i] - 1] (or sentinel if SA[i] == 0)
///
/// `sa` must be the suffix array of `text`.
#[inline]
pub fn build_bwt(text: &[u8], sa: &[usize]) -> Vec<u8> {
    sa.iter()
        .map(|&idx| if idx == 0 { SENTINEL } else { text[idx - 1] })
        .collect()
}

/// Suffix array and BWT in one go.
///
/// # Example
/// ```
/// use alice_bwt::bwt::{transform, SENTINEL};
///
/// let bwt = transform(b"abaaba").unwrap();
/// assert_eq!(bwt, [b'a', b'b', b'b', b'a', SENTINEL, b'a', b'a']);
/// ```
pub fn transform(text: &[u8]) -> Result<Vec<u8>> {
    let sa = build_suffix_array(text)?;
    let bwt = build_bwt(text, &sa);
    tracing::debug!(text_len = text.len(), bwt_len = bwt.len(), "BWT built");
    Ok(bwt)
}

/// Render a BWT string with the sentinel shown as `$`.
#[cfg(feature = "std")]
pub fn display(bwt: &[u8]) -> String {
    bwt.iter()
        .map(|&c| if c == SENTINEL { '$' } else { c as char })
        .collect()
}
