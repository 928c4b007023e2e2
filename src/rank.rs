//! Rank Support over a BWT string
//!
//! Two artifacts, both indexed directly by byte value:
//! - [`RankIndex`]: per-row occurrence rank + total counts (LF-mapping, scan search)
//! - [`OccurrenceTable`]: cumulative counts per symbol (O(1) rank for backward search)

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

/// Number of distinct byte symbols
pub const ALPHABET: usize = 256;

/// Per-row ranks and per-symbol totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankIndex {
    /// ranks[i] = occurrences of bwt[i] in bwt[0..i]
    ranks: Vec<usize>,
    /// totals[c] = occurrences of c in the whole BWT
    totals: [usize; ALPHABET],
}

impl RankIndex {
    /// Single pass over the BWT.
    pub fn build(bwt: &[u8]) -> Self {
        let mut totals = [0usize; ALPHABET];
        let mut ranks = Vec::with_capacity(bwt.len());

        for &c in bwt {
            ranks.push(totals[c as usize]);
            totals[c as usize] += 1;
        }

        Self { ranks, totals }
    }

    /// 0-based rank of the symbol stored at `row`.
    #[inline]
    pub fn rank(&self, row: usize) -> usize {
        self.ranks[row]
    }

    #[inline]
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    #[inline]
    pub fn total(&self, c: u8) -> usize {
        self.totals[c as usize]
    }

    #[inline]
    pub fn totals(&self) -> &[usize; ALPHABET] {
        &self.totals
    }

    /// Number of rows covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// Cumulative occurrence counts: `column(c)[i]` = occurrences of `c` in `bwt[0..=i]`.
///
/// Only symbols that occur in the BWT get a column; columns are stored
/// back to back in one allocation and addressed through `slots`.
///
/// Space: O(N × distinct symbols) words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceTable {
    /// slots[c] = column number of symbol c, if present
    slots: [Option<usize>; ALPHABET],
    /// Flattened columns, each `len` long
    counts: Vec<usize>,
    len: usize,
}

impl OccurrenceTable {
    pub fn build(bwt: &[u8]) -> Self {
        let len = bwt.len();
        let mut slots = [None; ALPHABET];
        let mut distinct = 0;
        for &c in bwt {
            if slots[c as usize].is_none() {
                slots[c as usize] = Some(distinct);
                distinct += 1;
            }
        }

        let mut counts = vec![0usize; distinct * len];
        let mut running = vec![0usize; distinct];
        for (row, &c) in bwt.iter().enumerate() {
            if let Some(slot) = slots[c as usize] {
                running[slot] += 1;
            }
            for (slot, &count) in running.iter().enumerate() {
                counts[slot * len + row] = count;
            }
        }

        tracing::debug!(rows = len, symbols = distinct, "occurrence table built");
        Self { slots, counts, len }
    }

    /// Occurrences of `c` in `bwt[0..=row]`.
    #[inline]
    pub fn occurrences_through(&self, c: u8, row: usize) -> usize {
        match self.slots[c as usize] {
            Some(slot) => self.counts[slot * self.len + row],
            None => 0,
        }
    }

    /// Occurrences of `c` in `bwt[0..row]`.
    ///
    /// Row 0 has nothing before it; that virtual row -1 counts zero for every symbol.
    #[inline]
    pub fn occurrences_before(&self, c: u8, row: usize) -> usize {
        if row == 0 {
            0
        } else {
            self.occurrences_through(c, row - 1)
        }
    }

    /// Cumulative column for `c`, if `c` occurs at all.
    pub fn column(&self, c: u8) -> Option<&[usize]> {
        self.slots[c as usize].map(|slot| &self.counts[slot * self.len..(slot + 1) * self.len])
    }

    /// Number of rows covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Table size in bytes (approximate)
    pub fn size_bytes(&self) -> usize {
        self.counts.len() * core::mem::size_of::<usize>()
            + ALPHABET * core::mem::size_of::<Option<usize>>()
    }
}
