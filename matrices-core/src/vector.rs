use crate::error::{MatricesError, Result};
use crate::format::{cell_width, write_cells, DEFAULT_PRECISION};
use crate::matrix::Matrix;
use crate::ops;
use crate::random::{draw, RandomSource};
use crate::traits::Field;
use std::fmt;

/// A fixed-length sequence of `f64` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    len: usize,
    values: Vec<f64>,
}

impl Vector {
    pub fn zeros(len: usize) -> Self {
        Self::filled(len, 0.0)
    }

    pub fn filled(len: usize, value: f64) -> Self {
        log::trace!("Allocating vector of length {}", len);
        Self {
            len,
            values: vec![value; len],
        }
    }

    /// Creates a new Vector whose elements are drawn from `rng` in index order.
    pub fn random<R: RandomSource + ?Sized>(len: usize, rng: &mut R) -> Self {
        log::trace!("Drawing random vector of length {}", len);
        Self {
            len,
            values: draw(rng, len),
        }
    }

    pub fn from_values(values: Vec<f64>) -> Self {
        log::trace!("Wrapping vector of length {}", values.len());
        Self {
            len: values.len(),
            values,
        }
    }

    /// Returns the number of elements in the vector.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Always 1; a vector is viewed as a single row.
    pub fn rows(&self) -> usize {
        1
    }

    pub fn cols(&self) -> usize {
        self.len
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Converts into a `1 x len` row matrix.
    pub fn into_matrix(self) -> Matrix {
        Matrix::from_parts(1, self.len, self.values)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(MatricesError::OutOfBounds(format!(
                "index {} outside vector of length {}",
                index, self.len
            )))
        }
    }

    pub fn at(&self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        Ok(self.values[index])
    }

    /// Sets the element at `index`. On error the vector is left untouched.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        self.check_index(index)?;
        self.values[index] = value;
        Ok(())
    }

    fn check_same_len(&self, other: &Vector, what: &str) -> Result<()> {
        if self.len != other.len {
            return Err(MatricesError::DimensionMismatch(format!(
                "Cannot {} vectors of lengths {} and {}",
                what, self.len, other.len
            )));
        }
        Ok(())
    }

    fn combine<F>(&self, other: &Vector, op: F) -> Result<Vector>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.check_same_len(other, "combine")?;
        Ok(Vector::from_values(ops::internal_combine(
            &self.values,
            &other.values,
            op,
        )))
    }

    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.combine(other, |x, y| x + y)
    }

    pub fn sub(&self, other: &Vector) -> Result<Vector> {
        self.combine(other, |x, y| x - y)
    }

    /// Computes the dot product, summing in index order.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_same_len(other, "take dot product of")?;
        Ok(ops::internal_dot(&self.values, &other.values))
    }

    pub fn apply<F>(&self, f: F) -> Vector
    where
        F: Fn(f64) -> f64,
    {
        Vector::from_values(ops::internal_map(&self.values, f))
    }

    pub fn max(&self) -> Result<f64> {
        ops::internal_max(&self.values)
            .ok_or_else(|| MatricesError::EmptyField("cannot take max of empty vector".to_string()))
    }

    pub fn min(&self) -> Result<f64> {
        ops::internal_min(&self.values)
            .ok_or_else(|| MatricesError::EmptyField("cannot take min of empty vector".to_string()))
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Vector::from_values(values)
    }
}

impl Field for Vector {
    fn shape(&self) -> Vec<usize> {
        vec![self.len]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max = match self.max() {
            Ok(max) => max,
            Err(_) => return f.write_str("empty Vector"),
        };
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        f.write_str("[ ")?;
        write_cells(f, &self.values, cell_width(max), precision)?;
        f.write_str(" ]")
    }
}

#[cfg(test)]
mod tests {
    use crate::{Field, MatricesError, Vector};

    #[test]
    fn test_vector_zeros() {
        let v = Vector::zeros(4);
        assert_eq!(v.len(), 4);
        assert_eq!(v.shape(), vec![4]);
        assert_eq!((v.rows(), v.cols()), (1, 4));
        assert_eq!(v.values(), &[0.0; 4]);
    }

    #[test]
    fn test_vector_at_set() {
        let mut v = Vector::zeros(3);
        v.set(2, -1.5).unwrap();
        assert_eq!(v.at(2), Ok(-1.5));
        assert!(matches!(v.at(3), Err(MatricesError::OutOfBounds(_))));
        assert!(matches!(v.set(3, 1.0), Err(MatricesError::OutOfBounds(_))));
        assert_eq!(v.values(), &[0.0, 0.0, -1.5]);
    }

    #[test]
    fn test_vector_add_sub() {
        let a = Vector::from(vec![1.0, 2.0, 3.0]);
        let b = Vector::from(vec![3.0, 2.0, 1.0]);
        assert_eq!(a.add(&b).unwrap().values(), &[4.0, 4.0, 4.0]);
        assert_eq!(a.sub(&b).unwrap().values(), &[-2.0, 0.0, 2.0]);
        assert!(matches!(
            a.add(&Vector::zeros(2)),
            Err(MatricesError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_vector_dot() {
        let a = Vector::from(vec![1.0, 2.0, 3.0]);
        let b = Vector::from(vec![4.0, 5.0, 6.0]);
        assert_eq!(a.dot(&b), Ok(32.0));
        match a.dot(&Vector::zeros(4)).err().unwrap() {
            MatricesError::DimensionMismatch(msg) => assert!(msg.contains("lengths 3 and 4")),
            _ => panic!("Expected DimensionMismatch error"),
        }
    }

    #[test]
    fn test_vector_dot_empty() {
        assert_eq!(Vector::zeros(0).dot(&Vector::zeros(0)), Ok(0.0));
    }

    #[test]
    fn test_vector_apply() {
        let a = Vector::from(vec![1.0, 4.0, 9.0]);
        assert_eq!(a.apply(f64::sqrt).values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_vector_max_min() {
        let a = Vector::from(vec![2.0, 8.0, -3.0]);
        assert_eq!(a.max(), Ok(8.0));
        assert_eq!(a.min(), Ok(-3.0));
        assert!(matches!(Vector::zeros(0).max(), Err(MatricesError::EmptyField(_))));
        assert!(matches!(Vector::zeros(0).min(), Err(MatricesError::EmptyField(_))));
    }

    #[test]
    fn test_vector_into_matrix() {
        let m = Vector::from(vec![1.0, 2.0]).into_matrix();
        assert_eq!(m.dims(), (1, 2));
        assert_eq!(m.at(0, 1), Ok(2.0));
    }

    #[test]
    fn test_vector_display() {
        assert_eq!(Vector::zeros(0).to_string(), "empty Vector");
        let v = Vector::from(vec![1.0, 10.0, 2.25]);
        assert_eq!(v.to_string(), "[    1.00  10.00   2.25 ]");
        assert_eq!(format!("{:.1}", Vector::from(vec![0.5])), "[    0.5 ]");
    }
}
