//! Error taxonomy
//!
//! Only structural misconfiguration is an error. Gameplay input (out-of-bounds positions,
//! non-adjacent or no-op swaps) degrades to `false` / an empty effect list instead.

/// Errors raised when building a tile generator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("tile alphabet is empty")]
    EmptyAlphabet,

    #[error("tile alphabet needs at least 2 distinct symbols, got {distinct}")]
    DegenerateAlphabet { distinct: usize },
}

/// Errors raised when building a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("row {row} has {len} cells, expected {width}")]
    RaggedRow { row: usize, len: usize, width: usize },
}
