//! Error types for BWT construction, inversion and search.

use thiserror::Error;

/// Failures surfaced by this crate.
///
/// Absent pattern symbols and empty search ranges are not errors: counting
/// simply returns zero for them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BwtError {
    /// Text contains the reserved sentinel byte.
    #[error("invalid input: sentinel byte found in text at offset {position}")]
    SentinelInText { position: usize },

    /// Pattern contains the reserved sentinel byte.
    #[error("invalid input: sentinel byte found in pattern at offset {position}")]
    SentinelInPattern { position: usize },

    /// Pattern has no symbols.
    #[error("invalid input: pattern is empty")]
    EmptyPattern,

    /// 1-based index outside `[1, len]`.
    #[error("invalid input: index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Range with `left > right`.
    #[error("invalid input: range [{left}, {right}] is reversed")]
    InvalidRange { left: usize, right: usize },

    /// BWT string does not carry exactly one sentinel.
    #[error("corrupt BWT: expected exactly one sentinel, found {sentinels}")]
    CorruptBwt { sentinels: usize },

    /// LF-mapping walk hit the sentinel (or ran out of steps) too early.
    #[error("corrupt BWT: LF walk recovered {recovered} of {expected} symbols")]
    BrokenCycle { recovered: usize, expected: usize },
}

impl BwtError {
    /// Caller handed in something this crate rejects up front.
    pub fn is_invalid_input(&self) -> bool {
        !self.is_corrupt()
    }

    /// BWT string was not produced by [`crate::bwt::transform`].
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::CorruptBwt { .. } | Self::BrokenCycle { .. })
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, BwtError>;
