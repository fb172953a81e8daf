#![allow(non_snake_case)]
use crate::algebra::*;
use crate::matrix::{DualStorage, SparseMatrixError};
use log::trace;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Parameters of the power iteration used for 2-norm estimates
#[derive(Debug, Clone, Copy)]
pub(crate) struct PowerIterParams<T> {
    pub max_iter: u32,
    pub tol: T,
    pub seed: u64,
}

/// Estimate a norm of the matrix held in `A`.
///
/// - `Two` : power iteration estimate of the largest singular value.
/// - `Frobenius` : 2-norm of the logical nonzeros divided by
///   `sqrt(min(m,n))`, i.e. the root mean energy per row or column of the
///   shorter dimension rather than the literal Frobenius norm.
///
/// The 1-norm treats rows and columns differently and is rejected.
pub(crate) fn norm_estimate<T: FloatT>(
    kind: NormType,
    A: &DualStorage<T>,
    params: &PowerIterParams<T>,
) -> Result<T, SparseMatrixError> {
    match kind {
        NormType::Two => Ok(norm2_est(A, params)),
        NormType::Frobenius => Ok(scaled_frobenius(A)),
        NormType::One => Err(SparseMatrixError::UnsupportedNorm(kind)),
    }
}

fn scaled_frobenius<T: FloatT>(A: &DualStorage<T>) -> T {
    let mindim = usize::min(A.m, A.n);
    if mindim == 0 {
        return T::zero();
    }
    // each logical entry exactly once
    let vals = A.first_half().values;
    vals.norm() / T::sqrt(mindim.as_T())
}

fn norm2_est<T: FloatT>(A: &DualStorage<T>, params: &PowerIterParams<T>) -> T {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(params.seed);
    let mut x: Vec<T> = (0..A.n).map(|_| rng.gen::<f64>().as_T()).collect();
    let mut y = vec![T::zero(); A.m];

    let mut norm_est = T::zero();

    for k in 0..params.max_iter {
        let norm_est_last = norm_est;

        // x := A'*A*x
        A.gemv(MatrixShape::N, &mut y, &x, T::one(), T::zero());
        A.gemv(MatrixShape::T, &mut x, &y, T::one(), T::zero());

        let normx = x.normalize();
        if normx == T::zero() {
            return T::zero();
        }
        norm_est = T::sqrt(normx);

        trace!("norm estimate iteration {}: {:e}", k + 1, norm_est);

        if T::abs(norm_est_last - norm_est) < params.tol * norm_est {
            break;
        }
    }
    norm_est
}
