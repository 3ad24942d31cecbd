use anyhow::{bail, Context, Result};

const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
/// Profile checked when the résumé carries no GitHub link of its own.
const DEFAULT_GITHUB_USERNAME: &str = "haripadpatar";
const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
const DEFAULT_EMBEDDING_MODEL: &str = "all-minilm";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Which embedding backend the scorer talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmbeddingBackend {
    /// Local feature-hashing embedder. Lexical overlap only; for tests and offline runs.
    Hashed,
    /// Ollama `/api/embed` endpoint serving a sentence model.
    #[default]
    Ollama,
}

impl std::str::FromStr for EmbeddingBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hashed" => Ok(EmbeddingBackend::Hashed),
            "ollama" => Ok(EmbeddingBackend::Ollama),
            other => bail!("unknown embedding backend '{other}' (expected 'hashed' or 'ollama')"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// When unset, candidates are kept in memory for the lifetime of the process.
    pub database_url: Option<String>,
    pub embedding_backend: EmbeddingBackend,
    pub ollama_url: String,
    pub embedding_model: String,
    pub github_api_url: String,
    pub github_username: String,
    pub github_timeout_secs: u64,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            embedding_backend: optional_env("EMBEDDING_BACKEND")
                .map(|v| v.parse::<EmbeddingBackend>())
                .transpose()
                .context("EMBEDDING_BACKEND is invalid")?
                .unwrap_or_default(),
            ollama_url: env_or("OLLAMA_URL", DEFAULT_OLLAMA_URL),
            embedding_model: env_or("EMBEDDING_MODEL", DEFAULT_EMBEDDING_MODEL),
            github_api_url: env_or("GITHUB_API_URL", DEFAULT_GITHUB_API_URL),
            github_username: env_or("GITHUB_USERNAME", DEFAULT_GITHUB_USERNAME),
            github_timeout_secs: env_or("GITHUB_TIMEOUT_SECS", "10")
                .parse::<u64>()
                .context("GITHUB_TIMEOUT_SECS must be a whole number of seconds")?,
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("MAX_UPLOAD_BYTES must be a byte count")?
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}
