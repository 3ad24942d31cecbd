use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::models::candidate::{CandidateRecord, CandidateRow};
use crate::store::{CandidateStore, StoreError};

/// Postgres SQLSTATE for unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone)]
pub struct PgCandidateStore {
    pool: PgPool,
}

impl PgCandidateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateStore for PgCandidateStore {
    async fn insert(&self, record: &CandidateRecord) -> Result<(), StoreError> {
        let skills: Vec<&str> = record.skills.iter().map(String::as_str).collect();
        let companies: Vec<&str> = record.companies.iter().map(String::as_str).collect();

        let result = sqlx::query(
            r#"
            INSERT INTO candidates (id, skills, companies, fraud_score, risk)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&record.id)
        .bind(&skills)
        .bind(&companies)
        .bind(record.fraud_score)
        .bind(record.risk.as_str())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                debug!(id = %record.id, "Candidate row committed");
                Ok(())
            }
            Err(sqlx::Error::Database(db_err))
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) =>
            {
                Err(StoreError::Duplicate(record.id.clone()))
            }
            Err(e) => Err(StoreError::Database(e)),
        }
    }

    async fn list(&self) -> Result<Vec<CandidateRecord>, StoreError> {
        let rows = sqlx::query_as::<_, CandidateRow>(
            "SELECT id, skills, companies, fraud_score, risk FROM candidates ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let id = row.id.clone();
                CandidateRecord::try_from(row).map_err(|reason| StoreError::CorruptRow { id, reason })
            })
            .collect()
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
