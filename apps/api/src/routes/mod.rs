pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/upload",
            post(handlers::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/candidates", get(handlers::handle_list_candidates))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::models::candidate::{CandidateRecord, RiskTier};
    use crate::state::test_support::{test_state, RecordingVerifier};

    const BOUNDARY: &str = "screener-test-boundary";

    fn multipart_request(field: &str, filename: &str, content: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_non_pdf_upload_is_rejected() {
        let state = test_state(Arc::new(RecordingVerifier::with_repos(&[])));
        let app = build_router(state.clone());

        let response = app
            .oneshot(multipart_request("file", "resume.docx", b"not relevant"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(state.store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_field_is_rejected() {
        let app = build_router(test_state(Arc::new(RecordingVerifier::with_repos(&[]))));

        let response = app
            .oneshot(multipart_request("attachment", "resume.pdf", b"%PDF"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unparseable_pdf_is_unprocessable() {
        let state = test_state(Arc::new(RecordingVerifier::with_repos(&[])));
        let app = build_router(state.clone());

        let response = app
            .oneshot(multipart_request("file", "Resume.PDF", b"garbage bytes"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(state.store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_candidates_lists_stored_records() {
        let state = test_state(Arc::new(RecordingVerifier::with_repos(&[])));
        state
            .store
            .insert(&CandidateRecord {
                id: "jane.pdf".to_string(),
                skills: BTreeSet::from(["python".to_string(), "sql".to_string()]),
                companies: BTreeSet::from(["Initech Corp".to_string()]),
                fraud_score: 42.0,
                risk: RiskTier::Suspicious,
            })
            .await
            .unwrap();

        let response = build_router(state)
            .oneshot(
                Request::builder()
                    .uri("/candidates")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(
            body,
            serde_json::json!([{
                "id": "jane.pdf",
                "skills": ["python", "sql"],
                "companies": ["Initech Corp"],
                "fraud_score": 42.0,
                "risk": "SUSPICIOUS"
            }])
        );
    }

    #[tokio::test]
    async fn test_health_reports_backends() {
        let app = build_router(test_state(Arc::new(RecordingVerifier::with_repos(&[]))));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["embedding_backend"], "hashed");
        assert_eq!(body["store_backend"], "memory");
    }
}
