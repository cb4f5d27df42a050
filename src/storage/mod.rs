use anyhow::{anyhow, Context as _, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use std::path::Path;
use std::str::FromStr;
use uuid::Uuid;

/// Default timeout for individual SQLite queries.
/// Prevents a hung query from blocking the server indefinitely.
const QUERY_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Execute a future with the standard query timeout.
async fn with_timeout<T>(fut: impl std::future::Future<Output = Result<T>>) -> Result<T> {
    match tokio::time::timeout(QUERY_TIMEOUT, fut).await {
        Ok(result) => result,
        Err(_) => Err(anyhow!(
            "database query timed out after {}s",
            QUERY_TIMEOUT.as_secs()
        )),
    }
}

/// A stored task.
///
/// On the wire the id is `_id` and the text is `task`, matching the
/// document ids and field names the API's existing clients expect.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct TaskRow {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "task")]
    pub text: String,
    pub completed: bool,
    /// Internal bookkeeping only — never serialized to clients.
    #[serde(skip)]
    pub created_at: String,
}

#[derive(Clone)]
pub struct TaskStore {
    pool: SqlitePool,
}

impl TaskStore {
    /// Open (or create) the task database under `data_dir`.
    pub async fn new(data_dir: &Path) -> Result<Self> {
        tokio::fs::create_dir_all(data_dir).await?;
        let db_path = data_dir.join("tickd.db");
        let opts =
            SqliteConnectOptions::from_str(&format!("sqlite://{}?mode=rwc", db_path.display()))?
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .create_if_missing(true);

        let pool = SqlitePool::connect_with(opts).await?;
        Self::migrate(&pool).await?;
        Ok(Self { pool })
    }

    async fn migrate(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS tasks (
                 id TEXT PRIMARY KEY,
                 text TEXT NOT NULL,
                 completed INTEGER NOT NULL DEFAULT 0,
                 created_at TEXT NOT NULL
             )",
        )
        .execute(pool)
        .await
        .context("Failed to create tasks table")?;
        Ok(())
    }

    /// Insert a new task and return the stored row with its assigned id.
    pub async fn insert(&self, text: &str, completed: bool) -> Result<TaskRow> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        with_timeout(async {
            sqlx::query("INSERT INTO tasks (id, text, completed, created_at) VALUES (?, ?, ?, ?)")
                .bind(&id)
                .bind(text)
                .bind(completed)
                .bind(&now)
                .execute(&self.pool)
                .await?;
            Ok(())
        })
        .await?;

        self.get(&id)
            .await?
            .ok_or_else(|| anyhow!("task not found after insert"))
    }

    pub async fn get(&self, id: &str) -> Result<Option<TaskRow>> {
        with_timeout(async {
            Ok(sqlx::query_as("SELECT * FROM tasks WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?)
        })
        .await
    }

    /// Full scan. Rows come back in insertion (rowid) order; the API contract
    /// leaves ordering unspecified, so callers must not rely on it.
    pub async fn list_all(&self) -> Result<Vec<TaskRow>> {
        with_timeout(async {
            Ok(sqlx::query_as("SELECT * FROM tasks ORDER BY rowid")
                .fetch_all(&self.pool)
                .await?)
        })
        .await
    }

    /// Remove the task with the given id.
    ///
    /// Idempotent by contract: deleting an id that does not exist succeeds,
    /// indistinguishable from deleting one that did.
    pub async fn delete_by_id(&self, id: &str) -> Result<()> {
        with_timeout(async {
            sqlx::query("DELETE FROM tasks WHERE id = ?")
                .bind(id)
                .execute(&self.pool)
                .await?;
            Ok(())
        })
        .await
    }

    pub async fn count(&self) -> Result<u64> {
        with_timeout(async {
            let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
                .fetch_one(&self.pool)
                .await?;
            Ok(row.0 as u64)
        })
        .await
    }
}
