//! idxset - typed decoding of IDX binary datasets
//!
//! IDX is the big-endian array format the MNIST dataset is distributed in.
//! A file holds a small header followed by `items * rows * cols` fixed-size
//! elements. This crate reads such a file into an [`ItemSet`], converting
//! each element from its on-disk type to the type the caller wants to work
//! with.
//!
//! # Features
//!
//! - Rank (1 to 3) inferred from the `.idxN` path suffix
//! - Host-independent big-endian decoding of every multi-byte value
//! - Storage and target element types chosen independently (`u8` on disk,
//!   `f32` in memory, ...)
//! - Every failure returned as an [`IdxError`], never a panic or exit
//! - Optional `ndarray` conversion behind the `ndarray` feature
//!
//! # Example
//!
//! ```no_run
//! use idxset::load;
//!
//! let images = load::<u8, f32, _>("mnist/train-images.idx3-ubyte")?;
//! let labels = load::<u8, u8, _>("mnist/train-labels.idx1-ubyte")?;
//!
//! let (count, rows, cols) = images.shape();
//! assert_eq!(labels.len(), count as usize);
//!
//! let first = images.item(0)?;
//! assert_eq!(first.len(), (rows * cols) as usize);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod parser;
pub mod types;

#[cfg(feature = "ndarray")]
pub mod ndarray_ext;

// Re-export common types at crate root
pub use error::{AccessError, IdxError};
pub use parser::{Endian, Rank, Scalar, load, read};
pub use types::{DType, IdxHeader, ItemSet, Items};

#[cfg(feature = "ndarray")]
pub use ndarray_ext::NdarrayError;
