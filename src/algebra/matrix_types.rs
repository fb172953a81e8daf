use crate::algebra::TagError;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Matrix orientation marker for matrix-vector products
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum MatrixShape {
    /// Normal matrix orientation
    N,
    /// Transposed matrix orientation
    T,
}

impl TryFrom<char> for MatrixShape {
    type Error = TagError;

    /// Accepts the BLAS-style tags `'n'`, `'N'`, `'t'` and `'T'`.
    fn try_from(tag: char) -> Result<Self, Self::Error> {
        match tag {
            'n' | 'N' => Ok(MatrixShape::N),
            't' | 'T' => Ok(MatrixShape::T),
            _ => Err(TagError::BadShape(tag)),
        }
    }
}

/// Compression order of a sparse matrix view.
///
/// `Row` views group nonzeros by row and store column indices.  `Col`
/// views group nonzeros by column and store row indices.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum StorageOrder {
    /// Compressed sparse row
    Row,
    /// Compressed sparse column
    Col,
}

impl StorageOrder {
    /// The opposite compression order
    pub fn flip(self) -> Self {
        match self {
            StorageOrder::Row => StorageOrder::Col,
            StorageOrder::Col => StorageOrder::Row,
        }
    }

    /// (primary, secondary) dimensions of an `m x n` matrix in this order
    pub fn dims(self, m: usize, n: usize) -> (usize, usize) {
        match self {
            StorageOrder::Row => (m, n),
            StorageOrder::Col => (n, m),
        }
    }
}

impl TryFrom<char> for StorageOrder {
    type Error = TagError;

    /// Accepts the tags `'r'`, `'R'`, `'c'` and `'C'`.
    fn try_from(tag: char) -> Result<Self, Self::Error> {
        match tag {
            'r' | 'R' => Ok(StorageOrder::Row),
            'c' | 'C' => Ok(StorageOrder::Col),
            _ => Err(TagError::BadOrder(tag)),
        }
    }
}

/// Matrix norms used for equilibration and normalization
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NormType {
    /// 1-norm
    One,
    /// 2-norm (spectral norm for matrices)
    Two,
    /// Frobenius norm
    Frobenius,
}

impl fmt::Display for NormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NormType::One => "1-norm",
            NormType::Two => "2-norm",
            NormType::Frobenius => "Frobenius norm",
        };
        write!(f, "{}", s)
    }
}
