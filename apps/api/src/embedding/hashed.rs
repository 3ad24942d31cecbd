use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::embedding::{Embedder, EmbeddingError};

/// Matches all-MiniLM-L6-v2 so either backend produces comparable shapes.
pub const DEFAULT_DIMENSIONS: usize = 384;

/// Bag-of-words embedder using signed feature hashing.
///
/// Each lowercased alphanumeric token is hashed into one of `dimensions` buckets
/// with a ±1 sign taken from the same digest; the result is L2-normalized.
/// Texts sharing vocabulary land close together and identical texts are identical.
///
/// This measures word overlap, not meaning: paraphrases and related topics score
/// no higher than unrelated prose, so the template similarity it yields is not a
/// semantic signal. Use it for tests and offline runs; production uses Ollama.
#[derive(Debug, Clone)]
pub struct HashedEmbedder {
    dimensions: usize,
}

impl Default for HashedEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

impl HashedEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    pub fn embed_sync(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; self.dimensions];

        for token in text
            .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
            .filter(|t| !t.is_empty())
        {
            let (bucket, sign) = self.bucket(&token.to_lowercase());
            vector[bucket] += sign;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }

    fn bucket(&self, token: &str) -> (usize, f32) {
        let digest = Sha256::digest(token.as_bytes());
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        let index = (u64::from_le_bytes(head) % self.dimensions as u64) as usize;
        let sign = if digest[8] & 1 == 0 { 1.0 } else { -1.0 };
        (index, sign)
    }
}

#[async_trait]
impl Embedder for HashedEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self.embed_sync(text))
    }

    fn name(&self) -> &str {
        "hashed"
    }
}
