//! Equilsparse algebra module.
//!
//! __NB__: Users will not ordinarily need to interact with this crate except for
//! defining scalar types, orientation tags and borrowed [`CompressedView`]s of
//! matrix data.
//!
//! All floating point calculations are represented internally on values
//! implementing the [`FloatT`] trait, with implementations provided for f32
//! and f64 native types.

// first import and flatten the solver's collection
// of core numeric types and matrix / vector traits.

mod error_types;
mod floats;
mod math_traits;
mod matrix_types;
pub(crate) mod parallel;
mod vecmath;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_types::*;

// sparse compressed row / column views
mod compressed;
pub use compressed::*;

#[cfg(test)]
mod tests;
