use crate::algebra::*;

/// Owned dual compressed storage of an `m x n` sparse matrix.
///
/// All three buffers hold two copies of the matrix back to back.  The first
/// half is in the orientation supplied by the caller (`order`), the second
/// half in the opposite orientation:
///
/// - `values`  : length `2*nnz`, `[0, nnz)` first half, `[nnz, 2*nnz)` second half
/// - `indices` : length `2*nnz`, secondary index of each value
/// - `offsets` : length `m+n+2`, first half pointers then second half pointers
///
/// Both halves always describe the same set of logical entries.
#[derive(Debug, Clone)]
pub struct DualStorage<T> {
    pub(crate) order: StorageOrder,
    pub(crate) m: usize,
    pub(crate) n: usize,
    pub(crate) nnz: usize,
    pub(crate) values: Vec<T>,
    pub(crate) indices: Vec<usize>,
    pub(crate) offsets: Vec<usize>,
}

impl<T> DualStorage<T>
where
    T: FloatT,
{
    /// Allocate dual storage and populate both halves from a single view.
    /// The source must already have passed a format check.
    pub(crate) fn build(src: &CompressedView<'_, T>) -> Self {
        let (m, n, nnz) = (src.m, src.n, src.nnz());
        let order = src.order;

        let mut values = vec![T::zero(); 2 * nnz];
        let mut indices = vec![0; 2 * nnz];
        let mut offsets = vec![0; m + n + 2];

        let split = src.nbuckets() + 1;
        let (v1, v2) = values.split_at_mut(nnz);
        let (i1, i2) = indices.split_at_mut(nnz);
        let (o1, o2) = offsets.split_at_mut(split);

        src.copy_into(o1, i1, v1);
        src.transpose_into(o2, i2, v2);

        Self {
            order,
            m,
            n,
            nnz,
            values,
            indices,
            offsets,
        }
    }

    // length of the first half of the offsets buffer
    fn split(&self) -> usize {
        self.order.dims(self.m, self.n).0 + 1
    }

    /// view of the first half, in the caller supplied orientation
    pub fn first_half(&self) -> CompressedView<'_, T> {
        let split = self.split();
        CompressedView::new(
            self.order,
            self.m,
            self.n,
            &self.offsets[..split],
            &self.indices[..self.nnz],
            &self.values[..self.nnz],
        )
    }

    /// view of the second half, in the derived orientation
    pub fn second_half(&self) -> CompressedView<'_, T> {
        let split = self.split();
        CompressedView::new(
            self.order.flip(),
            self.m,
            self.n,
            &self.offsets[split..],
            &self.indices[self.nnz..],
            &self.values[self.nnz..],
        )
    }

    /// mutable views of both halves at once
    pub(crate) fn halves_mut(&mut self) -> (CompressedViewMut<'_, T>, CompressedViewMut<'_, T>) {
        let split = self.split();
        let (o1, o2) = self.offsets.split_at(split);
        let (i1, i2) = self.indices.split_at(self.nnz);
        let (v1, v2) = self.values.split_at_mut(self.nnz);
        let first = CompressedViewMut::new(self.order, self.m, self.n, o1, i1, v1);
        let second = CompressedViewMut::new(self.order.flip(), self.m, self.n, o2, i2, v2);
        (first, second)
    }

    /// the compressed row half
    pub fn row_view(&self) -> CompressedView<'_, T> {
        match self.order {
            StorageOrder::Row => self.first_half(),
            StorageOrder::Col => self.second_half(),
        }
    }

    /// the compressed column half
    pub fn col_view(&self) -> CompressedView<'_, T> {
        match self.order {
            StorageOrder::Row => self.second_half(),
            StorageOrder::Col => self.first_half(),
        }
    }

    /// `y = a*op(A)*x + b*y`, always traversing the half whose
    /// buckets run along the output axis
    pub(crate) fn gemv(&self, shape: MatrixShape, y: &mut [T], x: &[T], a: T, b: T) {
        match shape {
            MatrixShape::N => self.row_view().gemv(y, x, a, b),
            MatrixShape::T => self.col_view().t().gemv(y, x, a, b),
        }
    }

    /// `A = Diagonal(d)*A*Diagonal(e)` applied to both halves
    pub(crate) fn mult_diag(&mut self, d: &[T], e: &[T]) {
        let (mut first, mut second) = self.halves_mut();
        first.lrscale(d, e);
        second.lrscale(d, e);
    }

    /// scale every physical value by `c`
    pub(crate) fn scale(&mut self, c: T) {
        self.values.scale(c);
    }
}
