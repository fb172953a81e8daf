#![allow(non_snake_case)]

use crate::algebra::{FloatT, SparseFormatError, StorageOrder};
use itertools::Itertools;
use std::iter::zip;
use std::ops::Range;

/// Borrowed view of an `m x n` sparse matrix in compressed row or
/// compressed column format.
///
/// Nonzeros are grouped into buckets along the primary axis (rows for
/// [`StorageOrder::Row`], columns for [`StorageOrder::Col`]).  Bucket `k`
/// occupies the range `offsets[k]..offsets[k+1]` of `indices` and `values`,
/// with `indices` holding the secondary axis position of each entry.
///
/// __Example usage__ : To view the 2 x 2 matrix
/// ```text
/// A = [4.  2.]
///     [0.  3.]
/// ```
///
/// ```no_run
/// use equilsparse::algebra::{CompressedView, StorageOrder};
///
/// let A = CompressedView::new(
///    StorageOrder::Row,
///    2,                    // m
///    2,                    // n
///    &[0, 2, 3],           // offsets
///    &[0, 1, 1],           // indices
///    &[4., 2., 3.],        // values
///  );
///
/// assert!(A.check_format().is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CompressedView<'a, T = f64> {
    /// compression order
    pub order: StorageOrder,
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// bucket pointer array, length `primary + 1`
    pub offsets: &'a [usize],
    /// secondary axis index of each entry
    pub indices: &'a [usize],
    /// nonzero values
    pub values: &'a [T],
}

/// Mutable counterpart of [`CompressedView`].  Only the values are mutable,
/// so the sparsity pattern cannot be altered through this view.
#[derive(Debug)]
pub struct CompressedViewMut<'a, T = f64> {
    /// compression order
    pub order: StorageOrder,
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// bucket pointer array, length `primary + 1`
    pub offsets: &'a [usize],
    /// secondary axis index of each entry
    pub indices: &'a [usize],
    /// nonzero values
    pub values: &'a mut [T],
}

/// Adjoint of a compressed view
#[derive(Debug, Clone, Copy)]
pub struct Adjoint<'a, M> {
    pub src: &'a M,
}

impl<'a, T> CompressedView<'a, T>
where
    T: FloatT,
{
    /// `CompressedView` constructor.  No format checks are made; use
    /// [`check_format`](CompressedView::check_format) on untrusted data.
    pub fn new(
        order: StorageOrder,
        m: usize,
        n: usize,
        offsets: &'a [usize],
        indices: &'a [usize],
        values: &'a [T],
    ) -> Self {
        Self {
            order,
            m,
            n,
            offsets,
            indices,
            values,
        }
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// number of buckets along the primary axis
    pub fn nbuckets(&self) -> usize {
        self.order.dims(self.m, self.n).0
    }

    /// dimension of the secondary axis
    pub fn secondary_dim(&self) -> usize {
        self.order.dims(self.m, self.n).1
    }

    /// range of entries belonging to bucket `k`
    #[inline]
    pub fn bucket_range(&self, k: usize) -> Range<usize> {
        self.offsets[k]..self.offsets[k + 1]
    }

    /// transpose
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }

    /// Iterate over all entries as `(row, col, value)` triples,
    /// in storage order.
    pub fn triplets(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.nbuckets()).flat_map(move |k| {
            let rng = self.bucket_range(k);
            zip(&self.indices[rng.clone()], &self.values[rng]).map(move |(&j, &v)| {
                match self.order {
                    StorageOrder::Row => (k, j, v),
                    StorageOrder::Col => (j, k, v),
                }
            })
        })
    }

    /// Check that the view data is correctly formatted.
    ///
    /// Requires `offsets` of length `primary + 1` starting at zero, ending at
    /// `nnz` and nondecreasing, and every index within the secondary dimension.
    /// Indices are __not__ required to be sorted within each bucket.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.indices.len() != self.values.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.offsets.len() != self.nbuckets() + 1 {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.offsets[0] != 0 || self.offsets[self.nbuckets()] != self.values.len() {
            return Err(SparseFormatError::BadOffsets);
        }

        //check for offset monotonicity
        if self.offsets.iter().tuple_windows().any(|(a, b)| a > b) {
            return Err(SparseFormatError::BadOffsets);
        }

        //check for index values out of bounds
        let sdim = self.secondary_dim();
        if !self.indices.iter().all(|&j| j < sdim) {
            return Err(SparseFormatError::BadIndex);
        }

        Ok(())
    }
}

impl<'a, T> CompressedViewMut<'a, T>
where
    T: FloatT,
{
    /// `CompressedViewMut` constructor.  No format checks are made.
    pub fn new(
        order: StorageOrder,
        m: usize,
        n: usize,
        offsets: &'a [usize],
        indices: &'a [usize],
        values: &'a mut [T],
    ) -> Self {
        Self {
            order,
            m,
            n,
            offsets,
            indices,
            values,
        }
    }

    /// immutable reborrow
    pub fn as_view(&self) -> CompressedView<'_, T> {
        CompressedView::new(
            self.order,
            self.m,
            self.n,
            self.offsets,
            self.indices,
            &*self.values,
        )
    }

    /// number of buckets along the primary axis
    pub fn nbuckets(&self) -> usize {
        self.order.dims(self.m, self.n).0
    }

    /// Split the value array into one disjoint mutable slice per bucket.
    pub(crate) fn buckets_mut(&mut self) -> Vec<&mut [T]> {
        let nb = self.nbuckets();
        let mut out = Vec::with_capacity(nb);
        let mut rest: &mut [T] = &mut *self.values;
        for k in 0..nb {
            let len = self.offsets[k + 1] - self.offsets[k];
            let (head, tail) = std::mem::take(&mut rest).split_at_mut(len);
            out.push(head);
            rest = tail;
        }
        out
    }
}
