//! Cross-checks claimed skills against a public GitHub profile.
//!
//! Verification is best-effort. Any failure fetching the repository list is
//! logged and treated as "no repositories", so an outage and a profile with
//! no matching work look the same to the caller.

use std::collections::BTreeSet;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::screening::scorer::round2;

const USER_AGENT: &str = concat!("screener/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VerificationResult {
    pub verified: BTreeSet<String>,
    pub missing: BTreeSet<String>,
    /// |verified| / max(1, |claimed|), rounded to 2 decimals.
    pub confidence: f64,
}

/// The subset of a GitHub repository object the matcher reads.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[async_trait]
pub trait ProfileVerifier: Send + Sync {
    async fn verify(&self, username: &str, skills: &BTreeSet<String>) -> VerificationResult;
}

pub struct GithubVerifier {
    client: Client,
    api_url: String,
}

impl GithubVerifier {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(timeout)
                .user_agent(USER_AGENT)
                .build()?,
            api_url: api_url.into(),
        })
    }

    fn repos_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/repos",
            self.api_url.trim_end_matches('/'),
            username
        )
    }

    async fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>, reqwest::Error> {
        self.client
            .get(self.repos_url(username))
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Repository>>()
            .await
    }
}

#[async_trait]
impl ProfileVerifier for GithubVerifier {
    async fn verify(&self, username: &str, skills: &BTreeSet<String>) -> VerificationResult {
        if skills.is_empty() {
            return VerificationResult::default();
        }

        let repos = match self.fetch_repositories(username).await {
            Ok(repos) => repos,
            Err(e) => {
                warn!(username, "GitHub lookup failed, treating as no repositories: {e}");
                Vec::new()
            }
        };

        debug!(username, repos = repos.len(), "Fetched GitHub repositories");
        match_repositories(&repos, skills)
    }
}

/// A skill is verified when it appears as a substring of any repository's
/// lowercased "name description". No word boundaries: "ai" matches "main".
pub fn match_repositories(repos: &[Repository], skills: &BTreeSet<String>) -> VerificationResult {
    let haystacks: Vec<String> = repos
        .iter()
        .map(|r| format!("{} {}", r.name, r.description.as_deref().unwrap_or("")).to_lowercase())
        .collect();

    let (verified, missing): (BTreeSet<String>, BTreeSet<String>) = skills
        .iter()
        .cloned()
        .partition(|skill| haystacks.iter().any(|h| h.contains(skill.as_str())));

    let confidence = round2(verified.len() as f64 / skills.len().max(1) as f64);
    VerificationResult {
        verified,
        missing,
        confidence,
    }
}

/// Finds a `github.com/<handle>` link in résumé text.
pub fn find_github_handle(text: &str) -> Option<String> {
    // ASCII folding keeps byte offsets aligned with `text`.
    let lower = text.to_ascii_lowercase();
    lower.match_indices("github.com/").find_map(|(idx, marker)| {
        let rest = &text[idx + marker.len()..];
        let handle: String = rest
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect();
        let valid = !handle.is_empty()
            && handle.len() <= 39
            && !handle.starts_with('-')
            && !handle.ends_with('-');
        valid.then_some(handle)
    })
}
