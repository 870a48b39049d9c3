//! Error types for idxset

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading an IDX file
#[derive(Error, Debug)]
pub enum IdxError {
    /// Path does not carry a `.idxN` suffix with a numeric rank
    #[error("invalid IDX suffix in path {path:?}, expected `.idx1`, `.idx2` or `.idx3`")]
    InvalidSuffix { path: PathBuf },

    /// Suffix parsed to a rank outside 1..=3
    #[error("unsupported IDX rank {rank}, expected 1, 2 or 3")]
    UnsupportedRank { rank: u32 },

    /// The file could not be found
    #[error("IDX file not found: {path:?}")]
    FileNotFound { path: PathBuf },

    /// Any other I/O failure while opening or reading
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// End of input reached while reading a header field
    #[error("truncated IDX header: missing {field}")]
    TruncatedHeader { field: &'static str },

    /// End of input reached before every element was read
    #[error("truncated IDX data at item {item}, element {element}")]
    TruncatedData { item: usize, element: usize },

    /// Declared shape does not fit in memory
    #[error("cannot allocate {items} items of [{rows} x {cols}] elements")]
    AllocationFailed { items: u32, rows: u32, cols: u32 },
}

/// Error for accessing items of a loaded set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// Item index is not below the item count
    #[error("item index {index} out of bounds for set of {len} items")]
    IndexOutOfBounds { index: usize, len: usize },
}
