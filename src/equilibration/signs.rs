//! Bit-packed sign storage for temporarily sign-free matrix data.
//!
//! Sinkhorn-Knopp scaling needs a nonnegative matrix.  The sign of every
//! stored value is packed into one bit of a side buffer, the value is
//! replaced by a nonnegative transform of its magnitude, and the sign is
//! restored later together with an inverse transform.

use crate::algebra::parallel::{for_each_chunk_mut, for_each_chunk_mut_with};
use crate::algebra::{FloatT, NormType};

const BITS: usize = u8::BITS as usize;

/// Elementwise transforms applied around the sign codec
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum SignTransform {
    /// `x -> x^2`
    Square,
    /// `x -> |x|`
    Abs,
    /// `x -> sqrt(x)`
    Sqrt,
    /// `x -> x`
    Identity,
}

impl SignTransform {
    #[inline]
    pub fn apply<T: FloatT>(self, x: T) -> T {
        match self {
            SignTransform::Square => x * x,
            SignTransform::Abs => x.abs(),
            SignTransform::Sqrt => x.sqrt(),
            SignTransform::Identity => x,
        }
    }

    /// (forward, backward) transform pair for equilibration in `norm`.
    ///
    /// 2-norm and Frobenius equilibration works on squared magnitudes, so
    /// the backward transform takes the square root.  Any other norm works
    /// on absolute values directly.
    pub fn pair_for(norm: NormType) -> (SignTransform, SignTransform) {
        match norm {
            NormType::Two | NormType::Frobenius => (SignTransform::Square, SignTransform::Sqrt),
            _ => (SignTransform::Abs, SignTransform::Identity),
        }
    }
}

/// Packed sign bits, one per value.  A set bit marks a negative value.
#[derive(Debug, Clone)]
pub struct SignBits {
    bits: Vec<u8>,
    len: usize,
}

impl SignBits {
    /// Record the sign of every entry of `values`, then overwrite each entry
    /// with `transform(|v|)`.
    ///
    /// Whole bytes (8 values) are processed in bulk, the final `len % 8`
    /// values individually.
    pub fn extract_and_transform<T: FloatT>(values: &mut [T], transform: SignTransform) -> Self {
        let len = values.len();
        let nfull = len / BITS;
        let mut bits = vec![0u8; (len + BITS - 1) / BITS];

        let (bulk, tail) = values.split_at_mut(nfull * BITS);
        let (bulk_bits, tail_bits) = bits.split_at_mut(nfull);

        for_each_chunk_mut(bulk, BITS, bulk_bits, |chunk, byte| {
            *byte = extract_byte(chunk, transform);
        });

        if let Some(byte) = tail_bits.first_mut() {
            *byte = extract_tail(tail, transform);
        }

        Self { bits, len }
    }

    /// Apply `transform` to every entry of `values` and then restore the
    /// recorded sign.
    ///
    /// # Panics
    /// Panics if `values` is not the same length as the data the signs were
    /// extracted from.
    pub fn restore_with_sign<T: FloatT>(&self, values: &mut [T], transform: SignTransform) {
        assert_eq!(values.len(), self.len);

        let nfull = self.len / BITS;
        let (bulk, tail) = values.split_at_mut(nfull * BITS);
        let (bulk_bits, tail_bits) = self.bits.split_at(nfull);

        for_each_chunk_mut_with(bulk, BITS, bulk_bits, |chunk, &byte| {
            restore_byte(chunk, byte, transform);
        });

        if let Some(&byte) = tail_bits.first() {
            restore_tail(tail, byte, transform);
        }
    }

    /// number of recorded signs
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// size of the packed buffer in bytes
    pub fn nbytes(&self) -> usize {
        self.bits.len()
    }

    /// true if entry `i` was negative
    pub fn is_negative(&self, i: usize) -> bool {
        assert!(i < self.len);
        (self.bits[i / BITS] >> (i % BITS)) & 1 == 1
    }
}

#[inline]
fn extract_byte<T: FloatT>(chunk: &mut [T], transform: SignTransform) -> u8 {
    debug_assert_eq!(chunk.len(), BITS);
    let mut byte = 0u8;
    for (bit, v) in chunk.iter_mut().enumerate() {
        byte |= u8::from(*v < T::zero()) << bit;
        *v = transform.apply(v.abs());
    }
    byte
}

fn extract_tail<T: FloatT>(tail: &mut [T], transform: SignTransform) -> u8 {
    debug_assert!(tail.len() < BITS);
    let mut byte = 0u8;
    for (bit, v) in tail.iter_mut().enumerate() {
        if *v < T::zero() {
            byte |= 1 << bit;
        }
        *v = transform.apply(v.abs());
    }
    byte
}

#[inline]
fn restore_byte<T: FloatT>(chunk: &mut [T], byte: u8, transform: SignTransform) {
    debug_assert_eq!(chunk.len(), BITS);
    for (bit, v) in chunk.iter_mut().enumerate() {
        let x = transform.apply(*v);
        *v = if (byte >> bit) & 1 == 1 { -x } else { x };
    }
}

fn restore_tail<T: FloatT>(tail: &mut [T], byte: u8, transform: SignTransform) {
    debug_assert!(tail.len() < BITS);
    for (bit, v) in tail.iter_mut().enumerate() {
        *v = transform.apply(*v);
        if byte & (1 << bit) != 0 {
            *v = -*v;
        }
    }
}
