//! First column of the sorted rotation matrix.
//!
//! Every symbol owns one contiguous block of rows `[start, end)`. Blocks are
//! stacked in byte order, so the sentinel (0x00) always owns row 0.

use core::ops::Range;

use crate::rank::ALPHABET;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstColumnMap {
    /// ranges[c] = (start, end) for every symbol present in the BWT
    ranges: [Option<(usize, usize)>; ALPHABET],
    len: usize,
}

impl FirstColumnMap {
    /// Accumulate `totals` in symbol order. Zero totals get no entry.
    pub fn from_totals(totals: &[usize; ALPHABET]) -> Self {
        let mut ranges = [None; ALPHABET];
        let mut start = 0;
        for (c, &count) in totals.iter().enumerate() {
            if count > 0 {
                ranges[c] = Some((start, start + count));
                start += count;
            }
        }
        Self { ranges, len: start }
    }

    /// Rows whose first column holds `c`; `None` if `c` never occurs.
    #[inline]
    pub fn get(&self, c: u8) -> Option<Range<usize>> {
        self.ranges[c as usize].map(|(start, end)| start..end)
    }

    /// Row where the block of `c` begins (the C-table value).
    #[inline]
    pub fn start(&self, c: u8) -> Option<usize> {
        self.ranges[c as usize].map(|(start, _)| start)
    }

    #[inline]
    pub fn contains(&self, c: u8) -> bool {
        self.ranges[c as usize].is_some()
    }

    /// Present symbols with their blocks, in row order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Range<usize>)> + '_ {
        self.ranges
            .iter()
            .enumerate()
            .filter_map(|(c, r)| r.map(|(start, end)| (c as u8, start..end)))
    }

    /// Total rows covered (= BWT length).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bwt::{transform, SENTINEL};
    use crate::rank::RankIndex;

    fn first_of(text: &[u8]) -> FirstColumnMap {
        let bwt = transform(text).unwrap();
        FirstColumnMap::from_totals(RankIndex::build(&bwt).totals())
    }

    #[test]
    fn test_abaaba_blocks() {
        let first = first_of(b"abaaba");

        assert_eq!(first.get(SENTINEL), Some(0..1));
        assert_eq!(first.get(b'a'), Some(1..5));
        assert_eq!(first.get(b'b'), Some(5..7));
        assert_eq!(first.get(b'c'), None);
        assert_eq!(first.start(b'b'), Some(5));
        assert_eq!(first.len(), 7);
    }

    #[test]
    fn test_partition() {
        let text = b"the quick brown fox jumps over the lazy dog";
        let first = first_of(text);

        let mut next = 0;
        for (_, range) in first.iter() {
            assert_eq!(range.start, next);
            assert!(range.end > range.start);
            next = range.end;
        }
        assert_eq!(next, text.len() + 1);
    }

    #[test]
    fn test_widths_match_totals() {
        let bwt = transform(b"mississippi").unwrap();
        let ranks = RankIndex::build(&bwt);
        let first = FirstColumnMap::from_totals(ranks.totals());

        for (c, range) in first.iter() {
            assert_eq!(range.len(), ranks.total(c));
        }
        assert!(!first.contains(b'x'));
    }

    #[test]
    fn test_empty_totals() {
        let first = FirstColumnMap::from_totals(&[0; ALPHABET]);
        assert!(first.is_empty());
        assert_eq!(first.iter().count(), 0);
    }
}
