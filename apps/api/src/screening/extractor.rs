//! PDF text extraction. Parsing is CPU-bound and runs on the blocking pool.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF could not be parsed: {0}")]
    Malformed(String),

    #[error("extraction task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Extracts the text of every page, concatenated in page order.
pub async fn extract_text(pdf: Bytes) -> Result<String, ExtractError> {
    let size = pdf.len();
    let text = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&pdf).map_err(|e| ExtractError::Malformed(e.to_string()))
    })
    .await??;

    debug!(bytes = size, chars = text.len(), "Extracted PDF text");
    Ok(text)
}
