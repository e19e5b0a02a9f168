use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Errors returned by vector similarity operations.
pub enum SimilarityError {
    /// The two vectors have different dimensions and cannot be compared.
    #[error("vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension of the left-hand vector.
        expected: usize,
        /// Dimension of the right-hand vector.
        actual: usize,
    },
}
