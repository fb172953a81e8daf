use crate::algebra::parallel::for_each_indexed_mut;
use crate::algebra::*;
use std::iter::zip;

// The logical matrix A is m x n regardless of the view order.  A product
// whose output axis is the view's bucket axis is a gather (one contiguous
// dot product per output entry).  The other orientation is a scatter.

impl<T: FloatT> MatrixVectorMultiply for CompressedView<'_, T> {
    type T = T;

    fn gemv(&self, y: &mut [T], x: &[T], a: T, b: T) {
        assert_eq!(x.len(), self.n);
        assert_eq!(y.len(), self.m);
        match self.order {
            StorageOrder::Row => _bucket_axpby(self, y, x, a, b),
            StorageOrder::Col => _scatter_axpby(self, y, x, a, b),
        }
    }
}

impl<T: FloatT> MatrixVectorMultiply for Adjoint<'_, CompressedView<'_, T>> {
    type T = T;

    fn gemv(&self, y: &mut [T], x: &[T], a: T, b: T) {
        assert_eq!(x.len(), self.src.m);
        assert_eq!(y.len(), self.src.n);
        match self.src.order {
            StorageOrder::Row => _scatter_axpby(self.src, y, x, a, b),
            StorageOrder::Col => _bucket_axpby(self.src, y, x, a, b),
        }
    }
}

impl<T: FloatT> MatrixDiagScale for CompressedViewMut<'_, T> {
    type T = T;

    // NB: the factor is always formed as l[row] * r[col] so that
    // row and column compressed copies of the same entry stay
    // bitwise identical after scaling
    fn lrscale(&mut self, l: &[T], r: &[T]) {
        assert_eq!(l.len(), self.m);
        assert_eq!(r.len(), self.n);
        assert_eq!(self.values.len(), self.offsets[self.nbuckets()]);

        let order = self.order;
        let offsets = self.offsets;
        let indices = self.indices;
        let mut buckets = self.buckets_mut();

        for_each_indexed_mut(&mut buckets, |k, vals| {
            let idx = &indices[offsets[k]..offsets[k + 1]];
            match order {
                StorageOrder::Row => {
                    for (v, &col) in zip(vals.iter_mut(), idx) {
                        *v *= l[k] * r[col];
                    }
                }
                StorageOrder::Col => {
                    for (v, &row) in zip(vals.iter_mut(), idx) {
                        *v *= l[row] * r[k];
                    }
                }
            }
        });
    }
}

// y[k] = a * <bucket k, x> + b * y[k].  y has one entry per bucket
#[allow(non_snake_case)]
fn _bucket_axpby<T: FloatT>(A: &CompressedView<'_, T>, y: &mut [T], x: &[T], a: T, b: T) {
    assert_eq!(y.len(), A.nbuckets());
    assert_eq!(x.len(), A.secondary_dim());

    let (offsets, indices, values) = (A.offsets, A.indices, A.values);

    for_each_indexed_mut(y, |k, yk| {
        let rng = offsets[k]..offsets[k + 1];
        let mut acc = T::zero();
        for (&j, &v) in zip(&indices[rng.clone()], &values[rng]) {
            acc += v * x[j];
        }
        //NB: b == 0 must overwrite y, even if y holds NaN
        *yk = if b == T::zero() {
            a * acc
        } else {
            a * acc + b * (*yk)
        };
    });
}

// y[j] += a * v * x[k] for every entry v = (k, j).  y has
// one entry per secondary index
#[allow(non_snake_case)]
fn _scatter_axpby<T: FloatT>(A: &CompressedView<'_, T>, y: &mut [T], x: &[T], a: T, b: T) {
    assert_eq!(y.len(), A.secondary_dim());
    assert_eq!(x.len(), A.nbuckets());

    //first do the b*y part
    if b == T::zero() {
        y.fill(T::zero());
    } else if b == T::one() {
    } else {
        y.scale(b);
    }

    // if a is zero, we're done
    if a == T::zero() {
        return;
    }

    for (k, &xk) in x.iter().enumerate() {
        let rng = A.bucket_range(k);
        let ax = a * xk;
        for (&j, &v) in zip(&A.indices[rng.clone()], &A.values[rng]) {
            y[j] += v * ax;
        }
    }
}
