//!  __equilsparse__ is a sparse matrix backend for first order solvers that
//!  work on a data matrix $A \in \mathbb{R}^{m \times n}$ through repeated
//!  products with both $A$ and $A^\top$.
//!
//! Every nonzero of $A$ is stored twice, once in compressed sparse row and
//! once in compressed sparse column form, so that
//!
//! $$
//! y \leftarrow \alpha A x + \beta y \quad \text{and} \quad
//! y \leftarrow \alpha A^\top x + \beta y
//! $$
//!
//! are both computed as gathers over contiguous memory.
//!
//! ## Features
//!
//! * __Dual storage__: a single compressed row or compressed column input is
//! copied once and transposed once.  Both halves always describe the same
//! logical entries.
//!
//! * __Equilibration__: Sinkhorn-Knopp scaling computes diagonal $D$ and $E$
//! such that $D A E$ has balanced row and column magnitudes, followed by a
//! normalization to unit norm.  The stored matrix is overwritten in place.
//!
//! * __Norm estimates__: power iteration estimates of $\|A\|_2$ and a
//! scaled Frobenius norm.
//!
//! * __Parallel kernels__: with the `rayon` feature enabled, products and
//! scalings are split across row or column buckets.
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod algebra;
pub mod equilibration;
pub mod matrix;
