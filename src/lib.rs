//! # ALICE-BWT
//!
//! **Burrows-Wheeler Transform + FM-Index counting**
//!
//! > "Counting implies no scanning. Count(Pattern) -> O(Pattern_Length) once the BWT exists."
//!
//! ## Pipeline
//!
//! ```text
//! text ─► suffix array ─► BWT ─► RankIndex + FirstColumnMap ─┬─► inverse (LF walk)
//!                                                            └─► backward search
//! ```
//!
//! - **Sentinel**: `0x00`, smallest symbol, appended implicitly, rejected in input
//! - **Fixed alphabet**: per-symbol tables are `[_; 256]` arrays, O(1) lookups
//! - **Two counters**: occurrence table (O(M)) or rank scan (no extra memory)
//!
//! ## Performance
//!
//! | Operation | Time | Space |
//! |-----------|------|-------|
//! | Build | O(N log² N) (comparison sort) | O(N) |
//! | Occurrence table | O(N × σ) | O(N × σ) |
//! | Count | **O(M)** | O(1) |
//! | Invert | O(N) | O(N) |
//!
//! ## Example
//!
//! ```
//! use alice_bwt::{bwt, BwtIndex};
//!
//! let bwt = bwt::transform(b"abaaba").unwrap();
//! assert_eq!(bwt::display(&bwt), "abba$aa");
//!
//! let index = BwtIndex::build(b"abaaba").unwrap();
//! assert_eq!(index.count(b"aba").unwrap(), 2);
//! assert_eq!(index.count(b"z").unwrap(), 0);
//! assert_eq!(index.invert().unwrap(), b"abaaba");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bwt;
pub mod error;
pub mod fenwick;
pub mod first_column;
pub mod inverse;
pub mod rank;
pub mod search;

pub use error::{BwtError, Result};
pub use fenwick::FenwickTree;
pub use first_column::FirstColumnMap;
pub use inverse::invert_bwt;
pub use rank::{OccurrenceTable, RankIndex};
pub use search::{count_matches, count_matches_2, BwtIndex, IndexConfig};

/// Version
pub const VERSION: &str = "0.1.0";
