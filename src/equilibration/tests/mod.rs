#![allow(non_snake_case)]
use crate::algebra::*;
use crate::matrix::DualStorage;

mod settings;

// A =
//[ 1.0   -2.0    ⋅  ]
//[  ⋅     3.0  -4.0 ]
//[ 0.5     ⋅   10.0 ]
//[  ⋅      ⋅     ⋅  ]
pub(super) fn test_storage_4x3(order: StorageOrder) -> DualStorage<f64> {
    let (offsets, indices, values): (Vec<usize>, Vec<usize>, Vec<f64>) = match order {
        StorageOrder::Row => (
            vec![0, 2, 4, 6, 6],
            vec![0, 1, 1, 2, 0, 2],
            vec![1., -2., 3., -4., 0.5, 10.],
        ),
        StorageOrder::Col => (
            vec![0, 2, 4, 6],
            vec![0, 2, 0, 1, 1, 2],
            vec![1., 0.5, -2., 3., -4., 10.],
        ),
    };
    let src = CompressedView::new(order, 4, 3, &offsets, &indices, &values);
    DualStorage::build(&src)
}

pub(super) fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len());
    a.iter().zip(b).fold(0., |acc, (x, y)| f64::max(acc, (x - y).abs()))
}

pub(super) fn to_dense(A: &DualStorage<f64>) -> Vec<Vec<f64>> {
    let mut dense = vec![vec![0.; A.n]; A.m];
    for (i, j, v) in A.row_view().triplets() {
        dense[i][j] = v;
    }
    dense
}
