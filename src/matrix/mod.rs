//! Sparse matrix handle with dual compressed storage.
//!
//! A [`SparseMatrix`] keeps every nonzero twice, once in compressed row and
//! once in compressed column form, so that both `A*x` and `A'*x` are
//! computed as gathers along contiguous buckets.

mod error;
mod input;
mod sparse;
mod storage;

pub use error::*;
pub use input::*;
pub use sparse::*;
pub(crate) use storage::DualStorage;
