//! Axum route handlers for the screening API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::candidate::CandidateRecord;
use crate::screening::extractor::{extract_text, ExtractError};
use crate::screening::pipeline::{screen_text, ScreeningReport};
use crate::state::AppState;

/// Multipart field carrying the résumé.
const FILE_FIELD: &str = "file";

/// POST /upload
///
/// Accepts a multipart PDF upload, screens it, stores the classification under
/// the uploaded filename and returns the full report.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScreeningReport>, AppError> {
    let (filename, pdf) = read_pdf_field(&mut multipart).await?;
    info!(filename = %filename, bytes = pdf.len(), "Received resume upload");

    let text = extract_text(pdf).await.map_err(|e| match e {
        ExtractError::Malformed(reason) => {
            warn!(filename = %filename, "PDF extraction failed: {reason}");
            AppError::UnprocessableEntity("The uploaded file could not be read as a PDF".to_string())
        }
        ExtractError::Join(e) => AppError::Internal(e.into()),
    })?;

    let report = screen_text(&state, &filename, &text).await?;
    Ok(Json(report))
}

/// GET /candidates
///
/// Returns every screened candidate, oldest first.
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateRecord>>, AppError> {
    let candidates = state.store.list().await?;
    Ok(Json(candidates))
}

/// Finds the `file` field, rejecting non-PDF filenames before the body is read.
async fn read_pdf_field(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("Uploaded file has no filename".to_string()))?;
        if !filename.to_lowercase().ends_with(".pdf") {
            return Err(AppError::Validation("Only PDF allowed".to_string()));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read uploaded file: {e}")))?;
        return Ok((filename, data));
    }

    Err(AppError::Validation(format!(
        "Multipart field '{FILE_FIELD}' is required"
    )))
}
