use super::FloatT;

/// Elementwise and reduction operations on slices of
/// [`FloatT`](crate::algebra::FloatT), as needed for the scaling vectors
/// and value buffers of a sparse matrix.
pub trait VectorMath {
    type T;

    /// `self[i] = op(self[i])`
    fn scalarop(&mut self, op: impl Fn(Self::T) -> Self::T) -> &mut Self;

    /// fill with `c`
    fn set(&mut self, c: Self::T) -> &mut Self;

    /// multiply every entry by `c`
    fn scale(&mut self, c: Self::T) -> &mut Self;

    /// elementwise square root
    fn sqrt(&mut self) -> &mut Self;

    /// Scale to unit 2-norm and return the original norm.  A zero vector
    /// is left as it is and zero is returned.
    fn normalize(&mut self) -> Self::T;

    fn dot(&self, y: &Self) -> Self::T;

    /// sum of squares
    fn sumsq(&self) -> Self::T;

    /// 2-norm
    fn norm(&self) -> Self::T;
}

/// Matrix-vector products for matrices of [`FloatT`](crate::algebra::FloatT)
pub trait MatrixVectorMultiply {
    type T: FloatT;

    /// General matrix-vector multiply.  Produces `y = a*self*x + b*y`
    fn gemv(&self, y: &mut [Self::T], x: &[Self::T], a: Self::T, b: Self::T);
}

/// In-place diagonal scaling of matrix data
pub trait MatrixDiagScale {
    type T: FloatT;

    /// Left and right multiply the matrix by diagonal matrices,
    /// producing `A = Diagonal(l)*A*Diagonal(r)`
    fn lrscale(&mut self, l: &[Self::T], r: &[Self::T]);
}
