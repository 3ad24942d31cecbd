//! Embedding — pluggable sentence-embedding backends behind one trait.
//!
//! Default: `OllamaEmbedder` (all-MiniLM sentence model served by Ollama).
//! Opt-in: `HashedEmbedder` (pure-Rust, deterministic, lexical only; tests and offline runs).
//!
//! `AppState` holds an `Arc<dyn Embedder>`, chosen at startup via `EMBEDDING_BACKEND`.

use async_trait::async_trait;
use thiserror::Error;

pub mod hashed;
pub mod ollama;

pub use hashed::HashedEmbedder;
pub use ollama::OllamaEmbedder;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Embedding API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Embedding backend returned no vectors")]
    EmptyResponse,

    #[error("Cannot compare vectors of dimension {left} and {right}")]
    DimensionMismatch { left: usize, right: usize },
}

/// A sentence embedder. Implement this to swap backends without touching the scorer.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Short backend name, surfaced on `/health`.
    fn name(&self) -> &str;
}

/// Cosine similarity of two vectors, in [-1, 1].
///
/// A zero-length (all zeros) vector has no direction; its similarity to anything is 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, EmbeddingError> {
    if a.len() != b.len() {
        return Err(EmbeddingError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }
    Ok((dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0))
}
