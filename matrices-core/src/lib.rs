//! # Matrices Core Library
//!
//! Dense `f64` matrices and vectors with elementwise arithmetic, matrix
//! multiplication, transposition, reductions and column-aligned rendering.
//!
//! All arithmetic allocates a fresh result; operands are never modified.
//! Every fallible operation returns [`MatricesError`].

// Declare modules
pub mod error;
pub mod format;
pub mod matrix;
mod ops; // Flat-buffer kernels shared by Matrix and Vector
pub mod random;
pub mod traits;
pub mod vector;

// Re-export public types
pub use error::{MatricesError, Result};
pub use matrix::Matrix;
pub use random::RandomSource;
pub use traits::Field;
pub use vector::Vector;
