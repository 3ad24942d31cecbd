mod config;
mod db;
mod embedding;
mod errors;
mod models;
mod routes;
mod screening;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, EmbeddingBackend};
use crate::db::create_pool;
use crate::embedding::{Embedder, HashedEmbedder, OllamaEmbedder};
use crate::routes::build_router;
use crate::screening::entities::HeuristicRecognizer;
use crate::screening::scorer::Scorer;
use crate::screening::verifier::GithubVerifier;
use crate::state::AppState;
use crate::store::{CandidateStore, MemoryCandidateStore, PgCandidateStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting screener v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn CandidateStore> = match &config.database_url {
        Some(url) => Arc::new(PgCandidateStore::new(create_pool(url).await?)),
        None => {
            warn!("DATABASE_URL not set; candidates will be kept in memory only");
            Arc::new(MemoryCandidateStore::new())
        }
    };

    let embedder: Arc<dyn Embedder> = match config.embedding_backend {
        EmbeddingBackend::Hashed => Arc::new(HashedEmbedder::default()),
        EmbeddingBackend::Ollama => Arc::new(OllamaEmbedder::new(
            config.ollama_url.clone(),
            config.embedding_model.clone(),
        )?),
    };
    info!(
        "Embedding backend: {} (model: {})",
        embedder.name(),
        config.embedding_model
    );

    let verifier = GithubVerifier::new(
        config.github_api_url.clone(),
        Duration::from_secs(config.github_timeout_secs),
    )?;
    info!(
        "GitHub verifier initialized (fallback user: {})",
        config.github_username
    );

    let state = AppState {
        store,
        scorer: Arc::new(Scorer::new(embedder)),
        recognizer: Arc::new(HeuristicRecognizer),
        verifier: Arc::new(verifier),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
