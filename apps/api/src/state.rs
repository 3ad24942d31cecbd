use std::sync::Arc;

use crate::config::Config;
use crate::screening::entities::EntityRecognizer;
use crate::screening::scorer::Scorer;
use crate::screening::verifier::ProfileVerifier;
use crate::store::CandidateStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Every service is built once in `main` before the listener starts.
#[derive(Clone)]
pub struct AppState {
    /// Postgres when `DATABASE_URL` is set, in-memory otherwise.
    pub store: Arc<dyn CandidateStore>,
    /// Owns the embedder and the cached template vector.
    pub scorer: Arc<Scorer>,
    pub recognizer: Arc<dyn EntityRecognizer>,
    pub verifier: Arc<dyn ProfileVerifier>,
    pub config: Config,
}

#[cfg(test)]
pub mod test_support {
    use std::collections::BTreeSet;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::config::EmbeddingBackend;
    use crate::embedding::HashedEmbedder;
    use crate::screening::entities::HeuristicRecognizer;
    use crate::screening::verifier::{match_repositories, Repository, VerificationResult};
    use crate::store::MemoryCandidateStore;

    /// Serves a fixed repository list and remembers which usernames were asked for.
    pub struct RecordingVerifier {
        repos: Vec<Repository>,
        usernames: Mutex<Vec<String>>,
    }

    impl RecordingVerifier {
        pub fn with_repos(repos: &[(&str, Option<&str>)]) -> Self {
            Self {
                repos: repos
                    .iter()
                    .map(|(name, description)| Repository {
                        name: name.to_string(),
                        description: description.map(String::from),
                    })
                    .collect(),
                usernames: Mutex::new(Vec::new()),
            }
        }

        pub fn usernames(&self) -> Vec<String> {
            self.usernames.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProfileVerifier for RecordingVerifier {
        async fn verify(&self, username: &str, skills: &BTreeSet<String>) -> VerificationResult {
            self.usernames.lock().unwrap().push(username.to_string());
            match_repositories(&self.repos, skills)
        }
    }

    pub fn test_config() -> Config {
        Config {
            database_url: None,
            embedding_backend: EmbeddingBackend::Hashed,
            ollama_url: "http://localhost:11434".to_string(),
            embedding_model: "all-minilm".to_string(),
            github_api_url: "http://127.0.0.1:9".to_string(),
            github_username: "fallback-user".to_string(),
            github_timeout_secs: 1,
            max_upload_bytes: 1024 * 1024,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }

    pub fn test_state(verifier: Arc<dyn ProfileVerifier>) -> AppState {
        AppState {
            store: Arc::new(MemoryCandidateStore::new()),
            scorer: Arc::new(Scorer::new(Arc::new(HashedEmbedder::default()))),
            recognizer: Arc::new(HeuristicRecognizer),
            verifier,
            config: test_config(),
        }
    }
}
