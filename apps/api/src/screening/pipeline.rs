//! The screening pipeline: mine → score → persist → verify.
//!
//! Stages run sequentially for one document. Text extraction happens before this
//! point so the pipeline can be driven from plain text in tests.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::candidate::{CandidateRecord, RiskTier};
use crate::screening::miner::mine_features;
use crate::screening::scorer::round2;
use crate::screening::verifier::find_github_handle;
use crate::state::AppState;

/// Response body of `POST /upload`.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    pub skills: BTreeSet<String>,
    pub companies: BTreeSet<String>,
    pub similarity: f64,
    pub fraud_score: f64,
    pub risk: RiskTier,
    pub github_verified_skills: BTreeSet<String>,
    pub github_missing_skills: BTreeSet<String>,
    pub github_confidence: f64,
}

/// Screens already-extracted résumé text and stores the classification under `id`.
pub async fn screen_text(state: &AppState, id: &str, text: &str) -> Result<ScreeningReport, AppError> {
    let mined = mine_features(text, state.recognizer.as_ref());
    let breakdown = state.scorer.score(text, mined.skills.len()).await?;

    let record = CandidateRecord {
        id: id.to_string(),
        skills: mined.skills,
        companies: mined.companies,
        fraud_score: breakdown.fraud_score,
        risk: breakdown.risk,
    };
    // Persist first: a duplicate id must not spend a rate-limited GitHub call.
    state.store.insert(&record).await?;

    let username = find_github_handle(text).unwrap_or_else(|| state.config.github_username.clone());
    let verification = state.verifier.verify(&username, &record.skills).await;

    info!(
        id,
        skills = record.skills.len(),
        companies = record.companies.len(),
        fraud_score = breakdown.fraud_score,
        risk = %breakdown.risk,
        github_user = %username,
        github_confidence = verification.confidence,
        "Screened resume"
    );

    Ok(ScreeningReport {
        skills: record.skills,
        companies: record.companies,
        similarity: round2(breakdown.similarity),
        fraud_score: round2(breakdown.fraud_score),
        risk: breakdown.risk,
        github_verified_skills: verification.verified,
        github_missing_skills: verification.missing,
        github_confidence: verification.confidence,
    })
}
