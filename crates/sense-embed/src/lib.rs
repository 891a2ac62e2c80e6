//! Sentence embeddings for comparing a passage against sense definitions.
//!
//! The pipeline only needs two operations from an embedding provider: turn a
//! short text into a fixed-length vector, and compare two vectors by cosine
//! similarity. [`SentenceEncoder`] captures the first; [`cosine_similarity`]
//! is the second. Two implementations ship here:
//!
//! - [`OnnxEncoder`] runs a local transformer model through ONNX Runtime with
//!   mean pooling and L2 normalization. The session is loaded once and
//!   encode calls are serialized behind an internal lock, so a single
//!   instance can be shared across threads.
//! - [`HashEncoder`] is a deterministic bag-of-words fallback built on
//!   feature hashing. It needs no model files, which makes it the encoder of
//!   choice for tests and for environments without a downloaded model; texts
//!   sharing words land near each other, nothing more is promised.
//!
//! Encoding failures are surfaced as [`EncodeError`] so callers can degrade
//! gracefully instead of aborting an analysis.

mod hash;
mod onnx;

pub use hash::HashEncoder;
pub use onnx::OnnxEncoder;

use thiserror::Error;

/// Errors from loading an embedding model or encoding text with it.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to load embedding model: {0}")]
    Model(String),
    #[error("tokenization failed: {0}")]
    Tokenize(String),
    #[error("inference failed: {0}")]
    Inference(String),
    #[error("unexpected model output: {0}")]
    Output(String),
}

/// Maps a short text to a fixed-length vector. Implementations must be safe
/// to share across threads; the pipeline holds one instance for the process
/// lifetime.
pub trait SentenceEncoder: Send + Sync {
    fn encode(&self, text: &str) -> Result<Vec<f32>, EncodeError>;
}

/// Cosine similarity between two vectors. Mismatched lengths and zero
/// vectors yield 0.0 rather than an error.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

/// Scale a vector to unit length in place; zero vectors are left untouched.
pub(crate) fn normalize(vec: &mut [f32]) {
    let norm = vec.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm == 0.0 {
        return;
    }
    for value in vec {
        *value /= norm;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_of_identical_vectors() {
        let v = vec![0.5, -0.25, 1.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_of_orthogonal_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn cosine_handles_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn normalize_produces_unit_length() {
        let mut v = vec![3.0, 4.0];
        normalize(&mut v);
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);

        let mut zero = vec![0.0, 0.0];
        normalize(&mut zero);
        assert_eq!(zero, vec![0.0, 0.0]);
    }
}
