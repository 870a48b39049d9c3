//! IDX header

use super::DType;

/// Size in bytes of every header field
pub const FIELD_SIZE: usize = 4;

/// Header fields read from the front of an IDX file
///
/// Dimensions the rank does not declare stay at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdxHeader {
    pub magic: u32,
    pub items: u32,
    pub rows: u32,
    pub cols: u32,
}

impl IdxHeader {
    /// Element type named by the magic number, if it is a known code
    ///
    /// Informational only: loading never checks it.
    pub fn declared_dtype(&self) -> Option<DType> {
        DType::from_u8((self.magic >> 8) as u8)
    }

    /// Rank named by the lowest byte of the magic number
    pub fn declared_rank(&self) -> u8 {
        self.magic as u8
    }

    /// `(items, rows, cols)`
    pub fn shape(&self) -> (u32, u32, u32) {
        (self.items, self.rows, self.cols)
    }

    /// Number of elements in one item
    pub fn item_len(&self) -> u64 {
        self.rows as u64 * self.cols as u64
    }
}
