use crate::error::{MatricesError, Result};
use crate::format::{cell_width, write_cells, DEFAULT_PRECISION};
use crate::ops;
use crate::random::{draw, RandomSource};
use crate::traits::Field;
use crate::vector::Vector;
use std::fmt;

/// A dense matrix of `f64` values stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>, // values[row * cols + col]
}

impl Matrix {
    /// Creates a new Matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    /// Creates a new Matrix with every element set to `value`.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        let len = Self::infallible_len(rows, cols);
        log::trace!("Allocating {}x{} matrix", rows, cols);
        Self {
            rows,
            cols,
            values: vec![value; len],
        }
    }

    /// Creates a new Matrix whose elements are drawn from `rng` in storage order.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    pub fn random<R: RandomSource + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let len = Self::infallible_len(rows, cols);
        log::trace!("Drawing {}x{} random matrix", rows, cols);
        Self {
            rows,
            cols,
            values: draw(rng, len),
        }
    }

    /// Creates the `n x n` identity matrix.
    ///
    /// # Panics
    /// Panics if `n * n` overflows `usize`.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.values[i * n + i] = 1.0;
        }
        m
    }

    /// Creates a new Matrix from raw data, assuming row-major order.
    /// Takes ownership of `values` without copying.
    pub fn from_values(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self> {
        let expected = element_count(rows, cols)?;
        if values.len() != expected {
            return Err(MatricesError::DimensionMismatch(format!(
                "Data length ({}) does not match dimensions ({}x{})",
                values.len(),
                rows,
                cols
            )));
        }
        log::trace!("Wrapping {}x{} matrix", rows, cols);
        Ok(Self { rows, cols, values })
    }

    // Same contract as `Vec` capacity overflow.
    fn infallible_len(rows: usize, cols: usize) -> usize {
        match element_count(rows, cols) {
            Ok(len) => len,
            Err(err) => panic!("{}", err),
        }
    }

    /// Caller guarantees `values.len() == rows * cols`.
    pub(crate) fn from_parts(rows: usize, cols: usize, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), rows * cols);
        Self { rows, cols, values }
    }

    // --- Getters ---
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the dimensions of the matrix as (rows, columns).
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns a slice view of the row-major data.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(MatricesError::OutOfBounds(format!(
                "({}, {}) outside {}x{} matrix",
                row, col, self.rows, self.cols
            )))
        }
    }

    /// Gets the element at the specified row and column.
    pub fn at(&self, row: usize, col: usize) -> Result<f64> {
        let idx = self.offset(row, col)?;
        Ok(self.values[idx])
    }

    /// Sets the element at the specified row and column.
    /// On error the matrix is left untouched.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let idx = self.offset(row, col)?;
        self.values[idx] = value;
        Ok(())
    }

    /// Copies row `row` into a new Vector.
    pub fn row(&self, row: usize) -> Result<Vector> {
        if row >= self.rows {
            return Err(MatricesError::OutOfBounds(format!(
                "row {} outside {}x{} matrix",
                row, self.rows, self.cols
            )));
        }
        let start = row * self.cols;
        Ok(Vector::from(self.values[start..start + self.cols].to_vec()))
    }

    /// Copies column `col` into a new Vector.
    pub fn col(&self, col: usize) -> Result<Vector> {
        if col >= self.cols {
            return Err(MatricesError::OutOfBounds(format!(
                "column {} outside {}x{} matrix",
                col, self.rows, self.cols
            )));
        }
        let values = (0..self.rows)
            .map(|r| self.values[r * self.cols + col])
            .collect::<Vec<_>>();
        Ok(Vector::from(values))
    }

    fn combine<F>(&self, other: &Matrix, op: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.dims() != other.dims() {
            return Err(MatricesError::DimensionMismatch(format!(
                "Cannot combine {}x{} matrix with {}x{} matrix",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            values: ops::internal_combine(&self.values, &other.values, op),
        })
    }

    /// Elementwise sum.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.combine(other, |x, y| x + y)
    }

    /// Elementwise difference.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        self.combine(other, |x, y| x - y)
    }

    /// Returns a new Matrix with `f` applied to every element.
    pub fn apply<F>(&self, f: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            values: ops::internal_map(&self.values, f),
        }
    }

    /// Performs the matrix product `self * other`.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` unless `self.cols() == other.rows()`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(MatricesError::DimensionMismatch(format!(
                "Cannot multiply {}x{} matrix by {}x{} matrix: inner dimensions differ",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        log::debug!(
            "Multiplying {}x{} by {}x{}",
            self.rows,
            self.cols,
            other.rows,
            other.cols
        );
        Ok(Matrix {
            rows: self.rows,
            cols: other.cols,
            values: ops::internal_matmul(
                &self.values,
                &other.values,
                self.rows,
                self.cols,
                other.cols,
            ),
        })
    }

    /// Performs the matrix-vector product `self * v`.
    pub fn mul_vector(&self, v: &Vector) -> Result<Vector> {
        if self.cols != v.len() {
            return Err(MatricesError::DimensionMismatch(format!(
                "Cannot multiply {}x{} matrix by vector of length {}",
                self.rows,
                self.cols,
                v.len()
            )));
        }
        log::debug!("Multiplying {}x{} by vector", self.rows, self.cols);
        let values = ops::internal_matmul(&self.values, v.values(), self.rows, self.cols, 1);
        Ok(Vector::from(values))
    }

    pub fn transpose(&self) -> Matrix {
        log::debug!("Transposing {}x{}", self.rows, self.cols);
        Matrix {
            rows: self.cols,
            cols: self.rows,
            values: ops::internal_transpose(&self.values, self.rows, self.cols),
        }
    }

    /// Returns the largest element.
    pub fn max(&self) -> Result<f64> {
        ops::internal_max(&self.values).ok_or_else(|| {
            MatricesError::EmptyField(format!(
                "cannot take max of empty {}x{} matrix",
                self.rows, self.cols
            ))
        })
    }

    /// Returns the smallest element.
    pub fn min(&self) -> Result<f64> {
        ops::internal_min(&self.values).ok_or_else(|| {
            MatricesError::EmptyField(format!(
                "cannot take min of empty {}x{} matrix",
                self.rows, self.cols
            ))
        })
    }
}

/// Number of elements in a `rows x cols` matrix.
fn element_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols).ok_or_else(|| {
        MatricesError::DimensionMismatch(format!(
            "Dimensions ({}x{}) overflow the addressable element count",
            rows, cols
        ))
    })
}

impl Field for Matrix {
    fn shape(&self) -> Vec<usize> {
        vec![self.rows, self.cols]
    }
}

// Cells are sized from the maximum only, so negative or mixed-magnitude
// values can render wider than their column.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max = match self.max() {
            Ok(max) => max,
            Err(_) => return f.write_str("empty Matrix"),
        };
        let width = cell_width(max);
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        for (r, row) in self.values.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            f.write_str("| ")?;
            write_cells(f, row, width, precision)?;
            f.write_str(" |")?;
        }
        Ok(())
    }
}
