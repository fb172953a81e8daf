#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Random sparse test matrix held as both compressed row arrays
/// and a dense row-major copy
pub struct RandomSparse {
    pub m: usize,
    pub n: usize,
    pub offsets: Vec<usize>,
    pub indices: Vec<usize>,
    pub values: Vec<f64>,
    pub dense: Vec<Vec<f64>>,
}

impl RandomSparse {
    pub fn new(m: usize, n: usize, density: f64, seed: u64) -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut dense = vec![vec![0.; n]; m];
        let mut offsets = vec![0];
        let mut indices = vec![];
        let mut values = vec![];

        for (i, row) in dense.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                if rng.gen_bool(density) {
                    // keep magnitudes away from zero so that signs are meaningful
                    let mag = rng.gen_range(0.1..10.0);
                    *v = if rng.gen_bool(0.5) { -mag } else { mag };
                    indices.push(j);
                    values.push(*v);
                }
            }
            debug_assert_eq!(offsets.len(), i + 1);
            offsets.push(values.len());
        }

        Self {
            m,
            n,
            offsets,
            indices,
            values,
            dense,
        }
    }

    /// compressed column arrays of the same matrix
    pub fn to_csc(&self) -> (Vec<usize>, Vec<usize>, Vec<f64>) {
        let mut offsets = vec![0];
        let mut indices = vec![];
        let mut values = vec![];
        for j in 0..self.n {
            for i in 0..self.m {
                if self.dense[i][j] != 0. {
                    indices.push(i);
                    values.push(self.dense[i][j]);
                }
            }
            offsets.push(values.len());
        }
        (offsets, indices, values)
    }

    /// y = a*op(A)*x + b*y computed densely
    pub fn gemv(&self, trans: bool, y: &mut [f64], x: &[f64], a: f64, b: f64) {
        let ylen = if trans { self.n } else { self.m };
        for k in 0..ylen {
            let s: f64 = if trans {
                (0..self.m).map(|i| self.dense[i][k] * x[i]).sum()
            } else {
                (0..self.n).map(|j| self.dense[k][j] * x[j]).sum()
            };
            y[k] = a * s + b * y[k];
        }
    }

    /// random vector of length len
    pub fn vector(len: usize, seed: u64) -> Vec<f64> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect()
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len());
    a.iter().zip(b).fold(0., |acc, (x, y)| f64::max(acc, (x - y).abs()))
}
