//! ndarray integration for decoded item sets
//!
//! Item sets convert to `(items, rows, cols)` arrays, single items to
//! `(rows, cols)` views borrowing the set's buffer.
//!
//! Enable with the `ndarray` feature flag.

use crate::error::AccessError;
use crate::types::ItemSet;
use ndarray::{Array3, ArrayView2, ShapeError};

/// Error type for ndarray conversions
#[derive(Debug, thiserror::Error)]
pub enum NdarrayError {
    /// Item index is not below the item count
    #[error(transparent)]
    Access(#[from] AccessError),
    /// Shape doesn't match data length
    #[error("shape {shape:?} doesn't match data length {data_len}: {source}")]
    ShapeMismatch {
        shape: (u32, u32, u32),
        data_len: usize,
        source: ShapeError,
    },
}

impl<T: Clone> ItemSet<T> {
    /// Copy into an owned `(items, rows, cols)` array
    pub fn to_ndarray(&self) -> Result<Array3<T>, NdarrayError> {
        self.clone().into_ndarray()
    }

    /// Move the element buffer into an `(items, rows, cols)` array
    pub fn into_ndarray(self) -> Result<Array3<T>, NdarrayError> {
        let shape = self.shape();
        let dims = (shape.0 as usize, shape.1 as usize, shape.2 as usize);
        let data = self.into_vec();
        let data_len = data.len();

        Array3::from_shape_vec(dims, data).map_err(|source| NdarrayError::ShapeMismatch {
            shape,
            data_len,
            source,
        })
    }
}

impl<T> ItemSet<T> {
    /// Zero-copy `(rows, cols)` view of item `index`
    pub fn item_view(&self, index: usize) -> Result<ArrayView2<'_, T>, NdarrayError> {
        let item = self.item(index)?;
        let shape = self.shape();

        ArrayView2::from_shape((shape.1 as usize, shape.2 as usize), item).map_err(|source| {
            NdarrayError::ShapeMismatch {
                shape,
                data_len: item.len(),
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IdxHeader;
    use ndarray::array;

    fn set_2x2x3() -> ItemSet<f32> {
        let header = IdxHeader {
            magic: 0x0D03,
            items: 2,
            rows: 2,
            cols: 3,
        };
        ItemSet::from_parts(header, (0..12).map(|v| v as f32).collect())
    }

    #[test]
    fn to_ndarray_shape() {
        let arr = set_2x2x3().to_ndarray().unwrap();
        assert_eq!(arr.shape(), &[2, 2, 3]);
        assert_eq!(arr[[1, 0, 2]], 8.0);
    }

    #[test]
    fn item_view_rows_and_cols() {
        let set = set_2x2x3();
        let view = set.item_view(1).unwrap();
        assert_eq!(view, array![[6.0f32, 7.0, 8.0], [9.0, 10.0, 11.0]]);
    }

    #[test]
    fn item_view_out_of_bounds() {
        let set = set_2x2x3();
        assert!(matches!(
            set.item_view(2),
            Err(NdarrayError::Access(AccessError::IndexOutOfBounds {
                index: 2,
                len: 2
            }))
        ));
    }
}
