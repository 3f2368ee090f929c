use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;
use thiserror::Error;
use tracing::info;

use crate::database::models::Question;

/// Errors from the question store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Query error: {0}")]
    QueryError(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Storage collaborator for question records: bulk-insert, bulk-delete-by-id,
/// plus the read side the admin panel uses to pick rows for deletion.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Persist all given records. An empty input is a no-op.
    async fn insert_all(&self, questions: Vec<Question>) -> Result<(), StoreError>;

    /// Delete every record whose id appears in `ids`. Unknown ids are
    /// ignored; duplicates are passed through unchanged.
    async fn delete_by_ids(&self, ids: &[i64]) -> Result<(), StoreError>;

    async fn list_all(&self) -> Result<Vec<Question>, StoreError>;

    /// Connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// PostgreSQL-backed store
pub struct PgQuestionStore {
    pool: PgPool,
}

impl PgQuestionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the questions table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS questions (
                id BIGSERIAL PRIMARY KEY,
                question_text TEXT NOT NULL,
                option_a TEXT NOT NULL,
                option_b TEXT NOT NULL,
                option_c TEXT NOT NULL,
                option_d TEXT NOT NULL,
                correct_answer TEXT NOT NULL,
                category TEXT NOT NULL,
                difficulty TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl QuestionStore for PgQuestionStore {
    async fn insert_all(&self, questions: Vec<Question>) -> Result<(), StoreError> {
        if questions.is_empty() {
            return Ok(());
        }

        let count = questions.len();
        let mut builder = sqlx::QueryBuilder::<sqlx::Postgres>::new(
            "INSERT INTO questions (question_text, option_a, option_b, option_c, option_d, \
             correct_answer, category, difficulty) ",
        );
        builder.push_values(questions, |mut row, q| {
            row.push_bind(q.question_text)
                .push_bind(q.option_a)
                .push_bind(q.option_b)
                .push_bind(q.option_c)
                .push_bind(q.option_d)
                .push_bind(q.correct_answer)
                .push_bind(q.category)
                .push_bind(q.difficulty);
        });
        builder.build().execute(&self.pool).await?;

        info!("Inserted {} question(s)", count);
        Ok(())
    }

    async fn delete_by_ids(&self, ids: &[i64]) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ANY($1)")
            .bind(ids.to_vec())
            .execute(&self.pool)
            .await?;

        info!("Deleted {} question(s)", result.rows_affected());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question_text, option_a, option_b, option_c, option_d, \
             correct_answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// In-memory store used by the integration tests and for running the API
/// locally without Postgres. Assigns ids the way BIGSERIAL would.
#[derive(Default)]
pub struct MemoryQuestionStore {
    rows: Mutex<Vec<Question>>,
    next_id: AtomicI64,
}

impl MemoryQuestionStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(0),
        }
    }
}

#[async_trait]
impl QuestionStore for MemoryQuestionStore {
    async fn insert_all(&self, questions: Vec<Question>) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().expect("store lock poisoned");
        for mut q in questions {
            q.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
            rows.push(q);
        }
        Ok(())
    }

    async fn delete_by_ids(&self, ids: &[i64]) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().expect("store lock poisoned");
        rows.retain(|q| q.id.map(|id| !ids.contains(&id)).unwrap_or(true));
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        let rows = self.rows.lock().expect("store lock poisoned");
        Ok(rows.clone())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
