//! Error taxonomy for board validation, solving and pattern database I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Every way a library call in this crate can fail.
#[derive(Debug, Error)]
pub enum TaquinError {
    /// Board side length `n` is outside the supported range `[2, 4]`.
    #[error("invalid board size {n} (must be in 2..=4)")]
    InvalidSize { n: usize },

    /// The tile vector's length does not equal `n * n`.
    #[error("wrong state length: expected {expected} tiles, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// The tile vector is not a permutation of `0..n*n`.
    #[error("state is not a permutation of 0..{len}: missing value {first_missing}")]
    NotPermutation { len: usize, first_missing: usize },

    /// A board string token could not be parsed as a tile value.
    #[error("invalid board token: {token:?}")]
    InvalidToken { token: String },

    /// The state fails the inversion-parity solvability test.
    #[error("board state is unsolvable")]
    Unsolvable,

    /// A pattern database file the solver needs was not found on disk.
    #[error("pattern database not found: {}", path.display())]
    MissingPdb { path: PathBuf },

    /// A pattern database file's length is not a multiple of 9 bytes.
    #[error("corrupt pattern database {}: length {len} is not a multiple of 9", path.display())]
    CorruptPdb { path: PathBuf, len: u64 },

    /// Underlying I/O failure while reading or writing a pattern database.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TaquinError>;
