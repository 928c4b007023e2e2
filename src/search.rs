//! FM-Index Pattern Counting
//!
//! **Core Algorithm**: Backward Search
//! - Process pattern from right to left
//! - Use LF-mapping: `new_pos = C[c] + Occ(c, old_pos)`
//! - Complexity: O(M) where M = pattern length (occurrence table)
//!
//! Two interchangeable counters share that skeleton:
//! - [`count_by_occurrence`]: O(1) rank lookups in the cumulative table
//! - [`count_by_scan`]: no table; locates the first/last matching row inside
//!   the current range and maps them through the per-row ranks

extern crate alloc;
use alloc::vec::Vec;
use core::ops::Range;

use crate::bwt::{transform, SENTINEL};
use crate::error::{BwtError, Result};
use crate::first_column::FirstColumnMap;
use crate::inverse::invert_with;
use crate::rank::{OccurrenceTable, RankIndex};

/// Reject patterns backward search cannot answer; split off the last symbol.
#[inline]
fn split_pattern(pattern: &[u8]) -> Result<(u8, &[u8])> {
    if let Some(position) = pattern.iter().position(|&c| c == SENTINEL) {
        return Err(BwtError::SentinelInPattern { position });
    }
    match pattern.split_last() {
        Some((&last, rest)) => Ok((last, rest)),
        None => Err(BwtError::EmptyPattern),
    }
}

/// Backward search with the cumulative occurrence table.
///
/// Returns the suffix-array rows `[left, right)` prefixed by `pattern`;
/// an empty range when a symbol is absent or the range collapses.
pub fn search_by_occurrence(
    first: &FirstColumnMap,
    occ: &OccurrenceTable,
    pattern: &[u8],
) -> Result<Range<usize>> {
    let (last, rest) = split_pattern(pattern)?;
    let Some(mut range) = first.get(last) else {
        return Ok(0..0);
    };

    for &c in rest.iter().rev() {
        let Some(start) = first.start(c) else {
            return Ok(0..0);
        };
        let left = start + occ.occurrences_before(c, range.start);
        let right = start + occ.occurrences_before(c, range.end);
        if right <= left {
            return Ok(0..0);
        }
        range = left..right;
    }
    Ok(range)
}

/// Backward search using only the per-row ranks.
///
/// Each step walks `[left, right)` from both ends to the first and last row
/// holding `c`; their ranks bound the new range. O(M × range width) worst case.
pub fn search_by_scan(
    bwt: &[u8],
    ranks: &RankIndex,
    first: &FirstColumnMap,
    pattern: &[u8],
) -> Result<Range<usize>> {
    let (last, rest) = split_pattern(pattern)?;
    let Some(mut range) = first.get(last) else {
        return Ok(0..0);
    };

    for &c in rest.iter().rev() {
        let Some(start) = first.start(c) else {
            return Ok(0..0);
        };
        let window = &bwt[range.clone()];
        let Some(lo) = window.iter().position(|&x| x == c) else {
            return Ok(0..0);
        };
        // Some row in the window holds c, so rposition finds at least `lo`.
        let hi = window.iter().rposition(|&x| x == c).unwrap_or(lo);

        let left = start + ranks.rank(range.start + lo);
        let right = start + ranks.rank(range.start + hi) + 1;
        range = left..right;
    }
    Ok(range)
}

/// Count occurrences of `pattern` (overlapping) via the occurrence table.
pub fn count_by_occurrence(
    first: &FirstColumnMap,
    occ: &OccurrenceTable,
    pattern: &[u8],
) -> Result<usize> {
    search_by_occurrence(first, occ, pattern).map(|r| r.len())
}

/// Count occurrences of `pattern` (overlapping) via rank scanning.
pub fn count_by_scan(
    bwt: &[u8],
    ranks: &RankIndex,
    first: &FirstColumnMap,
    pattern: &[u8],
) -> Result<usize> {
    search_by_scan(bwt, ranks, first, pattern).map(|r| r.len())
}

/// Count `pattern` in the text behind `bwt`, scanning variant.
///
/// # Example
/// ```
/// use alice_bwt::bwt::transform;
/// use alice_bwt::search::count_matches;
///
/// let bwt = transform(b"banana").unwrap();
/// assert_eq!(count_matches(&bwt, b"ana").unwrap(), 2);
/// ```
pub fn count_matches(bwt: &[u8], pattern: &[u8]) -> Result<usize> {
    let ranks = RankIndex::build(bwt);
    let first = FirstColumnMap::from_totals(ranks.totals());
    count_by_scan(bwt, &ranks, &first, pattern)
}

/// Count `pattern` in the text behind `bwt`, occurrence-table variant.
///
/// # Example
/// ```
/// use alice_bwt::bwt::transform;
/// use alice_bwt::search::count_matches_2;
///
/// let bwt = transform(b"abaaba").unwrap();
/// assert_eq!(count_matches_2(&bwt, b"aba").unwrap(), 2);
/// ```
pub fn count_matches_2(bwt: &[u8], pattern: &[u8]) -> Result<usize> {
    let ranks = RankIndex::build(bwt);
    let first = FirstColumnMap::from_totals(ranks.totals());
    let occ = OccurrenceTable::build(bwt);
    count_by_occurrence(&first, &occ, pattern)
}

/// Build options for [`BwtIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    /// Build the cumulative occurrence table (O(N × σ) words) for O(M) counting.
    /// Without it, counting falls back to rank scanning.
    pub occurrence_table: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            occurrence_table: true,
        }
    }
}

/// BWT string plus the rank structures both consumers share.
///
/// Built once; inversion and counting reuse the same [`RankIndex`] and
/// [`FirstColumnMap`].
#[derive(Debug, Clone)]
pub struct BwtIndex {
    bwt: Vec<u8>,
    ranks: RankIndex,
    first: FirstColumnMap,
    occ: Option<OccurrenceTable>,
}

impl BwtIndex {
    /// Build index from text with the default configuration.
    ///
    /// # Example
    /// ```
    /// use alice_bwt::BwtIndex;
    ///
    /// let index = BwtIndex::build(b"abracadabra").unwrap();
    /// assert_eq!(index.count(b"abra").unwrap(), 2);
    /// assert_eq!(index.count(b"a").unwrap(), 5);
    /// assert_eq!(index.invert().unwrap(), b"abracadabra");
    /// ```
    pub fn build(text: &[u8]) -> Result<Self> {
        Self::build_with(text, IndexConfig::default())
    }

    /// Build index from text.
    ///
    /// # Complexity
    /// - Time: O(N log^2 N) with naive SA, plus O(N × σ) for the occurrence table
    /// - Space: O(N) for BWT + ranks, O(N × σ) for the occurrence table
    pub fn build_with(text: &[u8], config: IndexConfig) -> Result<Self> {
        let bwt = transform(text)?;
        Ok(Self::from_bwt_unchecked(bwt, config))
    }

    /// Index an existing BWT string.
    ///
    /// The string must carry exactly one sentinel; a string that passes this
    /// check but is not a real BWT is only detected by [`BwtIndex::invert`].
    pub fn from_bwt(bwt: Vec<u8>, config: IndexConfig) -> Result<Self> {
        let sentinels = bwt.iter().filter(|&&c| c == SENTINEL).count();
        if sentinels != 1 {
            tracing::warn!(sentinels, len = bwt.len(), "rejecting BWT without a unique sentinel");
            return Err(BwtError::CorruptBwt { sentinels });
        }
        Ok(Self::from_bwt_unchecked(bwt, config))
    }

    fn from_bwt_unchecked(bwt: Vec<u8>, config: IndexConfig) -> Self {
        let ranks = RankIndex::build(&bwt);
        let first = FirstColumnMap::from_totals(ranks.totals());
        let occ = config
            .occurrence_table
            .then(|| OccurrenceTable::build(&bwt));

        tracing::debug!(
            rows = bwt.len(),
            symbols = first.iter().count(),
            occurrence_table = occ.is_some(),
            "BWT index built"
        );
        Self {
            bwt,
            ranks,
            first,
            occ,
        }
    }

    /// Count occurrences of a pattern
    ///
    /// O(M) with the occurrence table, rank scanning otherwise.
    #[inline]
    pub fn count(&self, pattern: &[u8]) -> Result<usize> {
        self.search_range(pattern).map(|r| r.len())
    }

    /// Count through rank scanning, regardless of configuration.
    pub fn count_scan(&self, pattern: &[u8]) -> Result<usize> {
        count_by_scan(&self.bwt, &self.ranks, &self.first, pattern)
    }

    /// Check if pattern exists in text
    #[inline]
    pub fn contains(&self, pattern: &[u8]) -> Result<bool> {
        self.search_range(pattern).map(|r| !r.is_empty())
    }

    /// Get the range in suffix array for a pattern
    pub fn search_range(&self, pattern: &[u8]) -> Result<Range<usize>> {
        match &self.occ {
            Some(occ) => search_by_occurrence(&self.first, occ, pattern),
            None => search_by_scan(&self.bwt, &self.ranks, &self.first, pattern),
        }
    }

    /// Reconstruct the indexed text.
    pub fn invert(&self) -> Result<Vec<u8>> {
        invert_with(&self.bwt, &self.ranks, &self.first)
    }

    #[inline]
    pub fn bwt(&self) -> &[u8] {
        &self.bwt
    }

    #[inline]
    pub fn rank_index(&self) -> &RankIndex {
        &self.ranks
    }

    #[inline]
    pub fn first_column(&self) -> &FirstColumnMap {
        &self.first
    }

    #[inline]
    pub fn occurrence_table(&self) -> Option<&OccurrenceTable> {
        self.occ.as_ref()
    }

    /// BWT length (text + sentinel)
    #[inline]
    pub fn len(&self) -> usize {
        self.bwt.len()
    }

    /// True only for the index of an empty text (sentinel row only).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bwt.len() <= 1
    }

    /// Original text length (excluding sentinel)
    pub fn text_len(&self) -> usize {
        self.bwt.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCAN_ONLY: IndexConfig = IndexConfig {
        occurrence_table: false,
    };

    #[test]
    fn test_backward_search() {
        let index = BwtIndex::build(b"mississippi").unwrap();

        assert_eq!(index.count(b"issi").unwrap(), 2);
        assert_eq!(index.count(b"mississippi").unwrap(), 1);
        assert_eq!(index.count(b"xyz").unwrap(), 0);
    }

    #[test]
    fn test_scenarios() {
        let cases: [(&[u8], &[u8], usize); 5] = [
            (b"abaaba", b"aba", 2),
            (b"banana", b"ana", 2),
            (b"aaaa", b"aa", 3),
            (b"abc", b"z", 0),
            (b"", b"a", 0),
        ];
        for (text, pattern, expected) in cases {
            let bwt = transform(text).unwrap();
            assert_eq!(count_matches(&bwt, pattern).unwrap(), expected);
            assert_eq!(count_matches_2(&bwt, pattern).unwrap(), expected);
        }
    }

    #[test]
    fn test_count_single_char() {
        let index = BwtIndex::build(b"abracadabra").unwrap();

        assert_eq!(index.count(b"a").unwrap(), 5);
        assert_eq!(index.count(b"b").unwrap(), 2);
        assert_eq!(index.count(b"r").unwrap(), 2);
        assert_eq!(index.count(b"c").unwrap(), 1);
        assert_eq!(index.count(b"d").unwrap(), 1);
        assert_eq!(index.count(b"z").unwrap(), 0);
    }

    #[test]
    fn test_absent_symbol_mid_pattern() {
        let index = BwtIndex::build(b"abracadabra").unwrap();

        assert_eq!(index.count(b"azra").unwrap(), 0);
        assert_eq!(index.count_scan(b"azra").unwrap(), 0);
        assert_eq!(index.count(b"zabra").unwrap(), 0);
    }

    #[test]
    fn test_range_collapse() {
        // Every symbol present, but "ca" followed by "b" never occurs.
        let index = BwtIndex::build(b"abracadabra").unwrap();
        assert_eq!(index.count(b"cab").unwrap(), 0);
        assert_eq!(index.count_scan(b"cab").unwrap(), 0);
    }

    #[test]
    fn test_contains() {
        let index = BwtIndex::build(b"hello world").unwrap();

        assert!(index.contains(b"hello").unwrap());
        assert!(index.contains(b"world").unwrap());
        assert!(index.contains(b"o w").unwrap());
        assert!(!index.contains(b"xyz").unwrap());
    }

    #[test]
    fn test_search_range() {
        // Rows: $, a$, aaba$, aba$, abaaba$, ba$, baaba$
        let index = BwtIndex::build(b"abaaba").unwrap();
        assert_eq!(index.search_range(b"aba").unwrap(), 3..5);
        assert_eq!(index.search_range(b"b").unwrap(), 5..7);
        assert!(index.search_range(b"bb").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_patterns() {
        let index = BwtIndex::build(b"banana").unwrap();

        assert_eq!(index.count(b"").unwrap_err(), BwtError::EmptyPattern);
        assert_eq!(index.count_scan(b"").unwrap_err(), BwtError::EmptyPattern);
        assert_eq!(
            index.count(b"na\0").unwrap_err(),
            BwtError::SentinelInPattern { position: 2 }
        );
        assert!(index.contains(b"\0").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_scan_only_config() {
        let index = BwtIndex::build_with(b"banana", SCAN_ONLY).unwrap();

        assert!(index.occurrence_table().is_none());
        assert_eq!(index.count(b"ana").unwrap(), 2);
        assert_eq!(index.count(b"nab").unwrap(), 0);
    }

    #[test]
    fn test_from_bwt() {
        let bwt = transform(b"tomorrow_and_tomorrow").unwrap();
        let index = BwtIndex::from_bwt(bwt, IndexConfig::default()).unwrap();

        assert_eq!(index.count(b"tomorrow").unwrap(), 2);
        assert_eq!(index.invert().unwrap(), b"tomorrow_and_tomorrow");
    }

    #[test]
    fn test_from_bwt_rejects_corrupt() {
        let err = BwtIndex::from_bwt(b"abc".to_vec(), IndexConfig::default()).unwrap_err();
        assert_eq!(err, BwtError::CorruptBwt { sentinels: 0 });
    }

    #[test]
    fn test_empty_text() {
        let index = BwtIndex::build(b"").unwrap();

        assert!(index.is_empty());
        assert_eq!(index.len(), 1);
        assert_eq!(index.text_len(), 0);
        assert_eq!(index.count(b"a").unwrap(), 0);
        assert_eq!(index.invert().unwrap(), b"");
    }

    #[test]
    fn test_variants_agree() {
        let mut text = Vec::new();
        for _ in 0..50 {
            text.extend_from_slice(b"the quick brown fox jumps over the lazy dog ");
        }
        let index = BwtIndex::build(&text).unwrap();

        for pattern in [&b"the"[..], b"o", b"fox j", b"dog the", b"zz", b"he q"] {
            assert_eq!(
                index.count(pattern).unwrap(),
                index.count_scan(pattern).unwrap()
            );
        }
        assert_eq!(index.count(b"the").unwrap(), 100);
        assert_eq!(index.count(b"fox").unwrap(), 50);
    }
}
