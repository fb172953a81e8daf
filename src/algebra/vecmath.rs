use super::{FloatT, VectorMath};
use std::iter::zip;

// reductions are split into blocks of this size and the
// partial sums combined, which bounds rounding growth on
// long value buffers
const BLOCK: usize = 128;

impl<T: FloatT> VectorMath for [T] {
    type T = T;

    fn scalarop(&mut self, op: impl Fn(T) -> T) -> &mut Self {
        self.iter_mut().for_each(|v| *v = op(*v));
        self
    }

    fn set(&mut self, c: T) -> &mut Self {
        self.fill(c);
        self
    }

    fn scale(&mut self, c: T) -> &mut Self {
        self.iter_mut().for_each(|v| *v *= c);
        self
    }

    fn sqrt(&mut self) -> &mut Self {
        self.scalarop(T::sqrt)
    }

    fn normalize(&mut self) -> T {
        let nrm = self.norm();
        if nrm > T::zero() {
            self.scale(nrm.recip());
        }
        nrm
    }

    fn dot(&self, y: &[T]) -> T {
        assert_eq!(self.len(), y.len());
        zip(self.chunks(BLOCK), y.chunks(BLOCK))
            .map(|(a, b)| zip(a, b).fold(T::zero(), |acc, (&ai, &bi)| acc + ai * bi))
            .fold(T::zero(), |acc, part| acc + part)
    }

    fn sumsq(&self) -> T {
        self.dot(self)
    }

    fn norm(&self) -> T {
        self.sumsq().sqrt()
    }
}
