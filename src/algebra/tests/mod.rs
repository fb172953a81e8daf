
// largest absolute elementwise difference
pub(super) fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len());
    a.iter().zip(b).fold(0., |acc, (x, y)| f64::max(acc, (x - y).abs()))
}
