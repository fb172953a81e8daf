use super::{CompressedInput, DualStorage, SparseMatrixError};
use crate::algebra::*;
use crate::equilibration::{self, EquilibrationInfo, EquilibrationSettings};
use log::debug;

/// Sparse `m x n` matrix held in both compressed row and compressed column
/// form.
///
/// A matrix is created uninitialized around borrowed caller data, and
/// must be initialized exactly once with [`init`](SparseMatrix::init)
/// before it can be multiplied or equilibrated.
///
/// __Example usage__ : To build and multiply the 2 x 2 matrix
/// ```text
/// A = [4.  2.]
///     [0.  3.]
/// ```
///
/// ```
/// use equilsparse::algebra::{MatrixShape, StorageOrder};
/// use equilsparse::matrix::{CompressedInput, SparseMatrix};
///
/// let values = [4., 2., 3.];
/// let offsets = [0, 2, 3];
/// let indices = [0, 1, 1];
/// let input = CompressedInput::new(StorageOrder::Row, 2, 2, &values, &offsets, &indices);
///
/// let mut A = SparseMatrix::new(input);
/// A.init().unwrap();
///
/// let mut y = [0.; 2];
/// A.mul(MatrixShape::N, 1., &[1., 1.], 0., &mut y).unwrap();
/// assert_eq!(y, [6., 3.]);
/// ```
#[derive(Debug)]
pub struct SparseMatrix<'a, T: FloatT = f64> {
    input: CompressedInput<'a, T>,
    storage: Option<DualStorage<T>>,
    settings: EquilibrationSettings<T>,
}

impl<'a, T> SparseMatrix<'a, T>
where
    T: FloatT,
{
    /// Create an uninitialized matrix around caller data, with default
    /// equilibration settings.
    pub fn new(input: CompressedInput<'a, T>) -> Self {
        Self {
            input,
            storage: None,
            settings: EquilibrationSettings::default(),
        }
    }

    /// Create an uninitialized matrix from raw compressed arrays.
    ///
    /// `tag` is one of `'r'`, `'R'` (compressed row data, `offsets` of length
    /// `m+1`) or `'c'`, `'C'` (compressed column data, `offsets` of length
    /// `n+1`).  `nnz` must agree with the lengths of `values` and `indices`.
    pub fn from_parts(
        tag: char,
        m: usize,
        n: usize,
        nnz: usize,
        values: &'a [T],
        offsets: &'a [usize],
        indices: &'a [usize],
    ) -> Result<Self, SparseMatrixError> {
        if values.len() != nnz || indices.len() != nnz {
            return Err(SparseFormatError::IncompatibleDimension.into());
        }
        let input = CompressedInput::with_tag(tag, m, n, values, offsets, indices)?;
        Ok(Self::new(input))
    }

    /// A new uninitialized matrix referencing the same caller data and
    /// settings as `self`.  Any storage built by `self` is not shared.
    pub fn fresh_copy(&self) -> Self {
        Self {
            input: self.input,
            storage: None,
            settings: self.settings.clone(),
        }
    }

    /// Build the dual compressed storage from the caller data.
    ///
    /// Fails with [`AlreadyInitialized`](SparseMatrixError::AlreadyInitialized)
    /// on a second call, leaving the existing storage untouched, and with a
    /// [`Format`](SparseMatrixError::Format) error if the caller data is
    /// malformed.
    pub fn init(&mut self) -> Result<(), SparseMatrixError> {
        if self.storage.is_some() {
            return Err(SparseMatrixError::AlreadyInitialized);
        }

        let src = self.input.as_view();
        src.check_format()?;
        self.storage = Some(DualStorage::build(&src));

        debug!(
            "initialized {} x {} sparse matrix, nnz = {}, {:?} order",
            self.input.m,
            self.input.n,
            self.input.nnz(),
            self.input.order
        );
        Ok(())
    }

    /// General matrix-vector multiply `y := alpha*op(A)*x + beta*y`, with
    /// `op(A) = A` for [`MatrixShape::N`] and `op(A) = A'` for
    /// [`MatrixShape::T`].
    ///
    /// For `N`, `x` must have length `n` and `y` length `m`.  For `T` the
    /// lengths are swapped.  With `beta = 0` the prior contents of `y` are
    /// ignored.
    pub fn mul(
        &self,
        trans: MatrixShape,
        alpha: T,
        x: &[T],
        beta: T,
        y: &mut [T],
    ) -> Result<(), SparseMatrixError> {
        let storage = self.storage()?;

        let (xlen, ylen) = match trans {
            MatrixShape::N => (storage.n, storage.m),
            MatrixShape::T => (storage.m, storage.n),
        };
        if x.len() != xlen || y.len() != ylen {
            return Err(SparseMatrixError::IncompatibleDimension);
        }

        storage.gemv(trans, y, x, alpha, beta);
        Ok(())
    }

    /// Equilibrate the matrix in place.
    ///
    /// On success `d` (length `m`) and `e` (length `n`) hold row and
    /// column scalings such that the stored matrix equals
    /// `diag(d) * A_orig * diag(e)` and has unit norm in the configured
    /// normalization norm.
    ///
    /// # Panics
    /// In debug builds, panics if the settings request 1-norm equilibration
    /// or normalization.  Release builds return
    /// [`UnsupportedNorm`](SparseMatrixError::UnsupportedNorm) instead.
    pub fn equil(
        &mut self,
        d: &mut [T],
        e: &mut [T],
    ) -> Result<EquilibrationInfo<T>, SparseMatrixError> {
        let storage = self
            .storage
            .as_mut()
            .ok_or(SparseMatrixError::NotInitialized)?;
        equilibration::equilibrate(storage, d, e, &self.settings)
    }

    /// Estimate a norm of the current matrix data.  Supports
    /// [`NormType::Two`] and [`NormType::Frobenius`].
    pub fn norm_estimate(&self, kind: NormType) -> Result<T, SparseMatrixError> {
        equilibration::estimate_norm(kind, self.storage()?, &self.settings)
    }

    fn storage(&self) -> Result<&DualStorage<T>, SparseMatrixError> {
        self.storage.as_ref().ok_or(SparseMatrixError::NotInitialized)
    }

    /// equilibration settings
    pub fn settings(&self) -> &EquilibrationSettings<T> {
        &self.settings
    }

    /// replace the equilibration settings
    pub fn set_settings(&mut self, settings: EquilibrationSettings<T>) {
        self.settings = settings;
    }

    /// number of rows
    pub fn nrows(&self) -> usize {
        self.input.m
    }

    /// number of columns
    pub fn ncols(&self) -> usize {
        self.input.n
    }

    /// number of logical nonzeros
    pub fn nnz(&self) -> usize {
        self.input.nnz()
    }

    /// orientation of the caller supplied data
    pub fn order(&self) -> StorageOrder {
        self.input.order
    }

    pub fn is_initialized(&self) -> bool {
        self.storage.is_some()
    }

    /// The full value buffer of length `2*nnz`: the caller supplied
    /// orientation first, the derived orientation second.  Empty before
    /// initialization.
    pub fn values(&self) -> &[T] {
        match &self.storage {
            Some(s) => &s.values,
            None => &[],
        }
    }

    /// The full index buffer of length `2*nnz`.  Empty before initialization.
    pub fn indices(&self) -> &[usize] {
        match &self.storage {
            Some(s) => &s.indices,
            None => &[],
        }
    }

    /// The full offset buffer of length `m+n+2`.  Empty before initialization.
    pub fn offsets(&self) -> &[usize] {
        match &self.storage {
            Some(s) => &s.offsets,
            None => &[],
        }
    }

    /// compressed row view of the stored matrix
    pub fn row_view(&self) -> Option<CompressedView<'_, T>> {
        self.storage.as_ref().map(|s| s.row_view())
    }

    /// compressed column view of the stored matrix
    pub fn col_view(&self) -> Option<CompressedView<'_, T>> {
        self.storage.as_ref().map(|s| s.col_view())
    }
}
