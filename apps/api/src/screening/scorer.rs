//! Fraud scoring — template similarity plus keyword-stuffing penalty, thresholded
//! into a risk tier.
//!
//! fraud_score = max(0, |skills| − 5) × 10 + similarity × 50
//!
//! Both terms are weak proxies: many matched skills suggests keyword stuffing,
//! closeness to a generic template sentence suggests boilerplate.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::embedding::{cosine_similarity, Embedder, EmbeddingError};
use crate::models::candidate::RiskTier;

pub const TEMPLATE: &str =
    "Experienced software engineer with strong skills in Python Java and machine learning";

/// Skill counts up to this many carry no penalty.
pub const SKILL_ALLOWANCE: usize = 5;
pub const PENALTY_PER_EXTRA_SKILL: f64 = 10.0;
pub const SIMILARITY_WEIGHT: f64 = 50.0;
pub const FAKE_ABOVE: f64 = 60.0;
pub const SUSPICIOUS_ABOVE: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub similarity: f64,
    pub fraud_score: f64,
    pub risk: RiskTier,
}

pub fn fraud_score(skill_count: usize, similarity: f64) -> f64 {
    let excess = skill_count.saturating_sub(SKILL_ALLOWANCE) as f64;
    excess * PENALTY_PER_EXTRA_SKILL + similarity * SIMILARITY_WEIGHT
}

/// Thresholds are strict: exactly 30.0 is GENUINE, exactly 60.0 is SUSPICIOUS.
pub fn classify(fraud_score: f64) -> RiskTier {
    if fraud_score > FAKE_ABOVE {
        RiskTier::Fake
    } else if fraud_score > SUSPICIOUS_ABOVE {
        RiskTier::Suspicious
    } else {
        RiskTier::Genuine
    }
}

/// Scores documents against the template sentence. The template vector is
/// embedded on first use and reused for the life of the process.
pub struct Scorer {
    embedder: Arc<dyn Embedder>,
    template: OnceCell<Vec<f32>>,
}

impl Scorer {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self {
            embedder,
            template: OnceCell::new(),
        }
    }

    pub fn embedder_name(&self) -> &str {
        self.embedder.name()
    }

    pub async fn score(&self, text: &str, skill_count: usize) -> Result<ScoreBreakdown, EmbeddingError> {
        let template = self
            .template
            .get_or_try_init(|| self.embedder.embed(TEMPLATE))
            .await?;
        let document = self.embedder.embed(text).await?;

        let similarity = cosine_similarity(&document, template)?;
        let fraud_score = fraud_score(skill_count, similarity);
        let risk = classify(fraud_score);

        debug!(similarity, fraud_score, %risk, skill_count, "Scored document");
        Ok(ScoreBreakdown {
            similarity,
            fraud_score,
            risk,
        })
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
