use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatricesError {
    #[error("Index out of bounds: {0}")]
    OutOfBounds(String),

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Empty field: {0}")]
    EmptyField(String),
}

pub type Result<T> = std::result::Result<T, MatricesError>;
