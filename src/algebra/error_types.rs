use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
/// Error type returned by sparse matrix format checks.
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    #[error("Bad offset values")]
    /// Offset array is not a valid monotone pointer array
    BadOffsets,
    #[error("Index value exceeds the matrix secondary dimension")]
    /// Index value exceeds the matrix secondary dimension
    BadIndex,
}

/// Error type returned when parsing single character orientation tags.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TagError {
    #[error("Bad storage order tag '{0}' (expected one of r, R, c, C)")]
    /// Unrecognized storage order tag
    BadOrder(char),
    #[error("Bad transpose tag '{0}' (expected one of n, N, t, T)")]
    /// Unrecognized transpose tag
    BadShape(char),
}
