use crate::algebra::{NormType, SparseFormatError, TagError};
use thiserror::Error;

/// Error type returned by sparse matrix operations.
///
/// Usage errors leave the matrix unchanged, so a caller may correct the
/// call sequence and try again.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SparseMatrixError {
    /// `init` was called on a matrix that is already initialized
    #[error("Matrix is already initialized")]
    AlreadyInitialized,
    /// an operation requiring storage was called before `init`
    #[error("Matrix is not initialized")]
    NotInitialized,
    /// vector arguments have the wrong length
    #[error("Vector dimensions are incompatible with the matrix")]
    IncompatibleDimension,
    /// the requested norm is not supported by the operation
    #[error("Unsupported norm: {0}")]
    UnsupportedNorm(NormType),
    /// an orientation tag could not be parsed
    #[error(transparent)]
    Tag(#[from] TagError),
    /// the supplied compressed data is malformed
    #[error("Bad sparse input: {0}")]
    Format(#[from] SparseFormatError),
}
