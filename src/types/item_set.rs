//! Decoded item sets

use super::IdxHeader;
use crate::error::AccessError;

/// A fully decoded IDX file: `I` items of `R * C` elements each
///
/// Elements live in one contiguous buffer in item-major, row-major order.
/// There is no way to mutate a set once it is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSet<T> {
    header: IdxHeader,
    item_len: usize,
    data: Vec<T>,
}

impl<T> ItemSet<T> {
    /// Caller guarantees `data.len() == items * rows * cols`
    pub(crate) fn from_parts(header: IdxHeader, data: Vec<T>) -> Self {
        let item_len = header.rows as usize * header.cols as usize;
        debug_assert_eq!(data.len(), header.items as usize * item_len);
        Self {
            header,
            item_len,
            data,
        }
    }

    /// `(items, rows, cols)`
    pub fn shape(&self) -> (u32, u32, u32) {
        self.header.shape()
    }

    /// Magic number as stored in the file
    pub fn magic(&self) -> u32 {
        self.header.magic
    }

    pub fn header(&self) -> &IdxHeader {
        &self.header
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.header.items as usize
    }

    pub fn is_empty(&self) -> bool {
        self.header.items == 0
    }

    /// Number of elements per item (`rows * cols`)
    pub fn item_len(&self) -> usize {
        self.item_len
    }

    /// Elements of item `index`, row-major
    pub fn item(&self, index: usize) -> Result<&[T], AccessError> {
        if index >= self.len() {
            return Err(AccessError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        let start = index * self.item_len;
        Ok(&self.data[start..start + self.item_len])
    }

    /// Iterate over every item in file order
    pub fn items(&self) -> Items<'_, T> {
        Items { set: self, next: 0 }
    }

    /// All elements of all items as one flat slice
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Bytes held by the decoded elements
    pub fn footprint(&self) -> usize {
        self.data.len() * std::mem::size_of::<T>()
    }
}

/// Iterator over the items of an [`ItemSet`]
#[derive(Debug, Clone)]
pub struct Items<'a, T> {
    set: &'a ItemSet<T>,
    next: usize,
}

impl<'a, T> Iterator for Items<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.set.item(self.next).ok()?;
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.set.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Items<'_, T> {}
