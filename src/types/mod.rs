//! Core types for decoded IDX data

mod dtype;
mod header;
mod item_set;

pub use dtype::DType;
pub use header::{FIELD_SIZE, IdxHeader};
pub use item_set::{ItemSet, Items};
