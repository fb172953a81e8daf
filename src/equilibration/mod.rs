//! Sinkhorn-Knopp equilibration of dual compressed storage.
//!
//! Equilibration computes a row scaling `d` and column scaling `e` and
//! overwrites the stored matrix with
//!
//! ```text
//! A := diag(d) * A * diag(e) / normA
//! ```
//!
//! with `d` and `e` each divided by `sqrt(normA)` on exit, so that the
//! stored matrix always equals `diag(d) * A_orig * diag(e)` for the
//! returned scalings.

#![allow(non_snake_case)]

mod normest;
mod settings;
mod signs;
mod sinkhorn;

pub use settings::*;
pub use signs::*;
pub use sinkhorn::SinkhornInfo;

use crate::algebra::*;
use crate::matrix::{DualStorage, SparseMatrixError};
use log::debug;
use normest::{norm_estimate, PowerIterParams};
use sinkhorn::sinkhorn_knopp;

#[cfg(test)]
mod tests;

/// Summary of a completed equilibration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibrationInfo<T> {
    /// Sinkhorn-Knopp progress
    pub sinkhorn: SinkhornInfo<T>,
    /// norm of the scaled matrix before the final normalization
    pub norm_a: T,
}

impl<T: FloatT> EquilibrationSettings<T> {
    pub(crate) fn power_iter_params(&self) -> PowerIterParams<T> {
        PowerIterParams {
            max_iter: self.normest_max_iter,
            tol: self.normest_tol,
            seed: self.normest_seed,
        }
    }
}

/// Estimate a norm of the stored matrix, as used for the final
/// normalization step of equilibration.
pub(crate) fn estimate_norm<T: FloatT>(
    kind: NormType,
    A: &DualStorage<T>,
    settings: &EquilibrationSettings<T>,
) -> Result<T, SparseMatrixError> {
    norm_estimate(kind, A, &settings.power_iter_params())
}

pub(crate) fn equilibrate<T: FloatT>(
    A: &mut DualStorage<T>,
    d: &mut [T],
    e: &mut [T],
    settings: &EquilibrationSettings<T>,
) -> Result<EquilibrationInfo<T>, SparseMatrixError> {
    // norms are checked before anything is modified
    for norm in [settings.equilibrate_norm, settings.normalize_norm] {
        debug_assert!(norm != NormType::One, "unsupported norm for equilibration: {}", norm);
        if norm == NormType::One {
            return Err(SparseMatrixError::UnsupportedNorm(norm));
        }
    }
    if d.len() != A.m || e.len() != A.n {
        return Err(SparseMatrixError::IncompatibleDimension);
    }

    // A := f(|A|) with the signs set aside, f = |.|^2 or |.|
    let (forward, backward) = SignTransform::pair_for(settings.equilibrate_norm);
    let signs = SignBits::extract_and_transform(&mut A.values, forward);

    let sinkhorn = sinkhorn_knopp(
        A,
        d,
        e,
        settings.sinkhorn_max_iter,
        settings.sinkhorn_tol,
    );

    // A := sign(A) .* f^{-1}(A)
    signs.restore_with_sign(&mut A.values, backward);
    drop(signs);

    // scalings were learned on squared magnitudes
    if settings.is_squared() {
        d.sqrt();
        e.sqrt();
    }

    A.mult_diag(d, e);

    // rescale to unit norm, keeping A = diag(d) * A_orig * diag(e)
    let norm_a = estimate_norm(settings.normalize_norm, A, settings)?;
    if norm_a > T::zero() && norm_a.is_finite() {
        A.scale(norm_a.recip());
        let s = T::recip(T::sqrt(norm_a));
        d.scale(s);
        e.scale(s);
    }

    debug!(
        "equilibrated {} x {} matrix: norm A = {:e}, norm d = {:e}, norm e = {:e}, sinkhorn sweeps = {}",
        A.m,
        A.n,
        norm_a,
        d.norm(),
        e.norm(),
        sinkhorn.iterations
    );

    Ok(EquilibrationInfo { sinkhorn, norm_a })
}
