use crate::algebra::{CompressedView, FloatT, SparseFormatError, StorageOrder, TagError};

/// Caller supplied sparse data in a single compressed orientation.
///
/// The input only borrows the caller's arrays.  Its contents are copied
/// into matrix-owned storage when the matrix is initialized.
#[derive(Debug, Clone, Copy)]
pub struct CompressedInput<'a, T = f64> {
    /// orientation of the supplied data
    pub order: StorageOrder,
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// nonzero values, length `nnz`
    pub values: &'a [T],
    /// bucket pointers, length `m+1` for row order or `n+1` for column order
    pub offsets: &'a [usize],
    /// secondary indices, length `nnz`
    pub indices: &'a [usize],
}

impl<'a, T> CompressedInput<'a, T>
where
    T: FloatT,
{
    pub fn new(
        order: StorageOrder,
        m: usize,
        n: usize,
        values: &'a [T],
        offsets: &'a [usize],
        indices: &'a [usize],
    ) -> Self {
        Self {
            order,
            m,
            n,
            values,
            offsets,
            indices,
        }
    }

    /// Same as [`new`](CompressedInput::new), with the orientation given
    /// as one of the tags `'r'`, `'R'`, `'c'` or `'C'`.
    pub fn with_tag(
        tag: char,
        m: usize,
        n: usize,
        values: &'a [T],
        offsets: &'a [usize],
        indices: &'a [usize],
    ) -> Result<Self, TagError> {
        let order = StorageOrder::try_from(tag)?;
        Ok(Self::new(order, m, n, values, offsets, indices))
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn as_view(&self) -> CompressedView<'a, T> {
        CompressedView::new(
            self.order,
            self.m,
            self.n,
            self.offsets,
            self.indices,
            self.values,
        )
    }

    /// Check that the input data is correctly formatted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        self.as_view().check_format()
    }
}
