#![allow(non_snake_case)]

mod common;
use common::*;
use equilsparse::{algebra::*, equilibration::*, matrix::*};

fn to_dense(A: &SparseMatrix<'_, f64>) -> Vec<Vec<f64>> {
    let mut dense = vec![vec![0.; A.ncols()]; A.nrows()];
    for (i, j, v) in A.row_view().unwrap().triplets() {
        dense[i][j] = v;
    }
    dense
}

fn equilibrated(R: &RandomSparse, order: StorageOrder) -> (Vec<Vec<f64>>, Vec<f64>, Vec<f64>) {
    let (co, ci, cv) = R.to_csc();
    let input = match order {
        StorageOrder::Row => {
            CompressedInput::new(order, R.m, R.n, &R.values, &R.offsets, &R.indices)
        }
        StorageOrder::Col => CompressedInput::new(order, R.m, R.n, &cv, &co, &ci),
    };
    let mut A = SparseMatrix::new(input);
    A.init().unwrap();

    let mut d = vec![0.; R.m];
    let mut e = vec![0.; R.n];
    A.equil(&mut d, &mut e).unwrap();
    (to_dense(&A), d, e)
}

#[test]
fn test_equil_factorization() {
    init_logging();

    for (seed, &(m, n)) in [(10, 6), (6, 10), (50, 50)].iter().enumerate() {
        let R = RandomSparse::new(m, n, 0.3, 10 + seed as u64);

        for order in [StorageOrder::Row, StorageOrder::Col] {
            let (dense, d, e) = equilibrated(&R, order);

            assert!(d.iter().chain(&e).all(|&v| v > 0. && v.is_finite()));

            for i in 0..m {
                for j in 0..n {
                    let expected = d[i] * R.dense[i][j] * e[j];
                    assert!((dense[i][j] - expected).abs() < 1e-10);
                    // zeros stay zero and signs are preserved
                    assert_eq!(dense[i][j] == 0., R.dense[i][j] == 0.);
                    assert_eq!(dense[i][j] < 0., R.dense[i][j] < 0.);
                }
            }
        }
    }
}

#[test]
fn test_equil_balanced_rows() {
    // after the final sweep every nonempty row has the same sum of squares
    let R = RandomSparse::new(30, 20, 0.25, 42);
    let (dense, _, _) = equilibrated(&R, StorageOrder::Row);

    let sums: Vec<f64> = dense
        .iter()
        .map(|row| row.iter().map(|v| v * v).sum())
        .filter(|&s: &f64| s > 0.)
        .collect();
    let lo = sums.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = sums.iter().copied().fold(0., f64::max);
    assert!(hi - lo < 1e-10 * hi);

    // and the scaled frobenius norm is one
    let fro: f64 = sums.iter().sum::<f64>().sqrt();
    assert!((fro / f64::sqrt(20.) - 1.).abs() < 1e-10);
}

#[test]
fn test_equil_scale_invariance() {
    let k = 1000.;
    let R = RandomSparse::new(15, 12, 0.3, 5);
    let mut Rs = RandomSparse::new(15, 12, 0.3, 5);
    Rs.values.scale(k);
    for row in Rs.dense.iter_mut() {
        row.scale(k);
    }

    let (dense, d, e) = equilibrated(&R, StorageOrder::Row);
    let (dense_s, ds, es) = equilibrated(&Rs, StorageOrder::Row);
    for (a, b) in dense.iter().zip(&dense_s) {
        assert!(max_abs_diff(a, b) < 1e-10);
    }

    // the scalings absorb the factor k
    for i in 0..15 {
        for j in 0..12 {
            if R.dense[i][j] != 0. {
                let expected = d[i] * e[j] / k;
                assert!((ds[i] * es[j] - expected).abs() <= 1e-10 * expected);
            }
        }
    }
}

#[test]
fn test_equil_then_mul() {
    let R = RandomSparse::new(8, 5, 0.5, 77);
    let input = CompressedInput::new(StorageOrder::Row, 8, 5, &R.values, &R.offsets, &R.indices);
    let mut A = SparseMatrix::new(input);
    A.init().unwrap();

    let mut d = vec![0.; 8];
    let mut e = vec![0.; 5];
    A.equil(&mut d, &mut e).unwrap();

    // y = diag(d)*A0*diag(e)*x
    let x = RandomSparse::vector(5, 1);
    let mut y = vec![0.; 8];
    A.mul(MatrixShape::N, 1., &x, 0., &mut y).unwrap();

    let ex: Vec<f64> = x.iter().zip(&e).map(|(xj, ej)| xj * ej).collect();
    let mut yref = vec![0.; 8];
    R.gemv(false, &mut yref, &ex, 1., 0.);
    for (yi, di) in yref.iter_mut().zip(&d) {
        *yi *= di;
    }

    assert!(max_abs_diff(&y, &yref) < 1e-10);
}

#[test]
fn test_equil_with_settings() {
    let R = RandomSparse::new(20, 20, 0.3, 9);
    let input = CompressedInput::new(StorageOrder::Row, 20, 20, &R.values, &R.offsets, &R.indices);
    let mut A = SparseMatrix::new(input);
    A.set_settings(
        EquilibrationSettingsBuilder::default()
            .sinkhorn_max_iter(500)
            .sinkhorn_tol(1e-6)
            .normalize_norm(NormType::Two)
            .build()
            .unwrap(),
    );
    A.init().unwrap();

    let mut d = vec![0.; 20];
    let mut e = vec![0.; 20];
    let info = A.equil(&mut d, &mut e).unwrap();
    assert!(info.sinkhorn.iterations <= 500);
    assert!(info.sinkhorn.residual.is_some());

    let nrm = A.norm_estimate(NormType::Two).unwrap();
    assert!((nrm - 1.).abs() < 1e-3);
}

#[test]
fn test_equil_errors() {
    let values = [1., 2.];
    let offsets = [0, 1, 2];
    let indices = [0, 1];
    let mut A = SparseMatrix::from_parts('r', 2, 2, 2, &values, &offsets, &indices).unwrap();

    let mut d = vec![0.; 2];
    let mut e = vec![0.; 2];
    assert_eq!(A.equil(&mut d, &mut e), Err(SparseMatrixError::NotInitialized));

    A.init().unwrap();
    let mut short = vec![0.; 1];
    assert_eq!(
        A.equil(&mut short, &mut e),
        Err(SparseMatrixError::IncompatibleDimension)
    );
    assert_eq!(&A.values()[..2], values);

    assert!(A.equil(&mut d, &mut e).is_ok());
}

#[test]
#[cfg_attr(debug_assertions, should_panic)]
fn test_equil_one_norm() {
    let values = [1., 2.];
    let offsets = [0, 1, 2];
    let indices = [0, 1];
    let mut A = SparseMatrix::from_parts('r', 2, 2, 2, &values, &offsets, &indices).unwrap();
    A.init().unwrap();

    let mut settings = EquilibrationSettings::default();
    settings.normalize_norm = NormType::One;
    A.set_settings(settings);

    let mut d = vec![0.; 2];
    let mut e = vec![0.; 2];
    assert_eq!(
        A.equil(&mut d, &mut e),
        Err(SparseMatrixError::UnsupportedNorm(NormType::One))
    );
}
