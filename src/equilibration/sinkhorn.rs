#![allow(non_snake_case)]
use crate::algebra::*;
use crate::matrix::DualStorage;
use log::{trace, warn};

/// Progress report from a Sinkhorn-Knopp run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinkhornInfo<T> {
    /// number of sweeps performed
    pub iterations: u32,
    /// relative column aggregate imbalance after the final sweep.  Only
    /// computed when an early exit tolerance is configured.
    pub residual: Option<T>,
}

/// Sinkhorn-Knopp scaling of a nonnegative matrix `A`.
///
/// Starting from `d = 1`, `e = 1`, each sweep performs
/// ```text
/// e := m ./ (A' * d)
/// d := n ./ (A  * e)
/// ```
/// so that after a sweep every row of `diag(d)*A*diag(e)` sums to `n` and
/// the column sums approach `m`.  Rows or columns with a zero sum keep a
/// unit scaling.
///
/// Runs for `max_iter` sweeps, or fewer if `tol > 0` and the largest
/// relative deviation of a nonempty column sum from `m` falls below `tol`.
pub(crate) fn sinkhorn_knopp<T: FloatT>(
    A: &DualStorage<T>,
    d: &mut [T],
    e: &mut [T],
    max_iter: u32,
    tol: T,
) -> SinkhornInfo<T> {
    assert_eq!(d.len(), A.m);
    assert_eq!(e.len(), A.n);

    let mf: T = A.m.as_T();
    let nf: T = A.n.as_T();

    d.set(T::one());
    e.set(T::one());

    // column sums are only formed when an early exit is possible
    let mut work = if tol > T::zero() { vec![T::zero(); A.n] } else { Vec::new() };
    let mut residual = None;
    let mut iterations = 0;

    for k in 0..max_iter {
        iterations = k + 1;

        // e := m ./ (A' * d)
        A.gemv(MatrixShape::T, e, d, T::one(), T::zero());
        e.scalarop(|x| safe_ratio(mf, x));

        // d := n ./ (A * e)
        A.gemv(MatrixShape::N, d, e, T::one(), T::zero());
        d.scalarop(|x| safe_ratio(nf, x));

        if tol > T::zero() {
            let res = column_imbalance(A, d, e, &mut work, mf);
            trace!("sinkhorn sweep {}: column imbalance = {:e}", iterations, res);
            residual = Some(res);
            if res < tol {
                break;
            }
        }
    }

    if let Some(res) = residual {
        if res >= tol {
            warn!(
                "sinkhorn-knopp stopped at {} sweeps with column imbalance {:e} (tol = {:e})",
                iterations, res, tol
            );
        }
    }

    SinkhornInfo {
        iterations,
        residual,
    }
}

#[inline]
fn safe_ratio<T: FloatT>(target: T, x: T) -> T {
    if x > T::zero() {
        target / x
    } else {
        T::one()
    }
}

// max_j |e_j * (A'd)_j - m| / m over columns with nonzero sums
fn column_imbalance<T: FloatT>(A: &DualStorage<T>, d: &[T], e: &[T], work: &mut [T], mf: T) -> T {
    A.gemv(MatrixShape::T, work, d, T::one(), T::zero());
    work.iter()
        .zip(e)
        .filter(|&(&s, _)| s > T::zero())
        .fold(T::zero(), |acc, (&s, &ej)| T::max(acc, T::abs(s * ej - mf) / mf))
}
