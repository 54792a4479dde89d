// This module contains the flat-buffer kernels shared by Matrix and Vector.
// Callers are responsible for shape checks; every kernel here assumes
// its inputs already have compatible lengths.

/// Combines two equally sized buffers element by element into a fresh buffer.
pub(crate) fn internal_combine<F>(lhs: &[f64], rhs: &[f64], op: F) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64,
{
    debug_assert_eq!(lhs.len(), rhs.len());
    lhs.iter().zip(rhs).map(|(&x, &y)| op(x, y)).collect()
}

/// Maps every element of a buffer into a fresh buffer.
pub(crate) fn internal_map<F>(values: &[f64], f: F) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    values.iter().map(|&x| f(x)).collect()
}

/// Sum of pairwise products, accumulated in index order.
pub(crate) fn internal_dot(lhs: &[f64], rhs: &[f64]) -> f64 {
    debug_assert_eq!(lhs.len(), rhs.len());
    let mut sum = 0.0;
    for (x, y) in lhs.iter().zip(rhs) {
        sum += x * y;
    }
    sum
}

/// Scans in storage order seeded with the first element.
/// Returns None for an empty buffer.
pub(crate) fn internal_max(values: &[f64]) -> Option<f64> {
    let (&first, rest) = values.split_first()?;
    let mut max = first;
    for &val in rest {
        if val > max {
            max = val;
        }
    }
    Some(max)
}

pub(crate) fn internal_min(values: &[f64]) -> Option<f64> {
    let (&first, rest) = values.split_first()?;
    let mut min = first;
    for &val in rest {
        if val < min {
            min = val;
        }
    }
    Some(min)
}

/// Row-major product of an `m x n` buffer with an `n x p` buffer.
/// The inner sum runs over `k` ascending.
pub(crate) fn internal_matmul(
    lhs: &[f64],
    rhs: &[f64],
    m: usize,
    n: usize,
    p: usize,
) -> Vec<f64> {
    debug_assert_eq!(lhs.len(), m * n);
    debug_assert_eq!(rhs.len(), n * p);
    let mut out = vec![0.0; m * p];
    for i in 0..m {
        for j in 0..p {
            let mut sum = 0.0;
            for k in 0..n {
                sum += lhs[i * n + k] * rhs[k * p + j];
            }
            out[i * p + j] = sum;
        }
    }
    out
}

/// Row-major transpose of a `rows x cols` buffer.
pub(crate) fn internal_transpose(values: &[f64], rows: usize, cols: usize) -> Vec<f64> {
    debug_assert_eq!(values.len(), rows * cols);
    let mut out = vec![0.0; rows * cols];
    for i in 0..rows {
        for j in 0..cols {
            out[j * rows + i] = values[i * cols + j];
        }
    }
    out
}
