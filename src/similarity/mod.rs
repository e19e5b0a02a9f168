//! Cosine similarity over query and document embeddings.
//!
//! Vectors are compared in full `f32` precision. Degenerate (zero-norm)
//! vectors score `0.0` rather than propagating `NaN`; see [`cosine_similarity`].

mod error;


pub use error::SimilarityError;

/// Dot product of two equal-length vectors.
pub fn dot(a: &[f32], b: &[f32]) -> Result<f32, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

/// Euclidean norm.
pub fn norm(a: &[f32]) -> f32 {
    a.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity in `[-1.0, 1.0]`.
///
/// If either vector has zero norm (including the empty vector) the similarity
/// is defined as `0.0`: a degenerate embedding is never similar to anything,
/// so it can only clear a non-positive threshold.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, SimilarityError> {
    let dot = dot(a, b)?;

    let norm_a = norm(a);
    let norm_b = norm(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot / (norm_a * norm_b))
}
