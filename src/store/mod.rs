//! Persistence for contact submissions.

use crate::models::submission::Submission;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Wraps the pool. Submissions are create-and-forget: this service never
/// reads them back.
#[derive(Clone)]
pub struct ContactStore {
    pool: SqlitePool,
}

impl ContactStore {
    pub fn new(pool: SqlitePool) -> Self {
        ContactStore { pool }
    }

    /// Insert one row for a submission.
    pub async fn create(&self, submission: &Submission) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO contacts (id, created_at, fullname, email, service, message) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(Uuid::new_v4())
        .bind(Utc::now())
        .bind(&submission.fullname)
        .bind(&submission.email)
        .bind(&submission.service)
        .bind(&submission.message)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
