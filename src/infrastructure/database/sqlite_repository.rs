use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::{Administrator, Repository, VisitorDetails, VisitorRecord};

#[derive(sqlx::FromRow)]
struct AdministratorRow {
    id: i64,
    username: String,
    password_hash: String,
}

impl From<AdministratorRow> for Administrator {
    fn from(r: AdministratorRow) -> Self {
        Administrator {
            id: r.id,
            username: r.username,
            password_hash: r.password_hash,
        }
    }
}

#[derive(sqlx::FromRow)]
struct VisitorRow {
    id: i64,
    first_name: String,
    last_name: String,
    reason: String,
    visited_at: DateTime<Utc>,
}

impl From<VisitorRow> for VisitorRecord {
    fn from(r: VisitorRow) -> Self {
        VisitorRecord {
            id: r.id,
            first_name: r.first_name,
            last_name: r.last_name,
            reason: r.reason,
            visited_at: r.visited_at,
        }
    }
}

const VISITOR_COLUMNS: &str = "id, first_name, last_name, reason, visited_at";

pub fn create_sqlite_repository(pool: SqlitePool) -> impl Repository {
    // ---
    SqliteRepository::new(pool)
}

pub struct SqliteRepository {
    // ---
    pool: SqlitePool,
}

impl SqliteRepository {
    // ---
    pub fn new(pool: SqlitePool) -> Self {
        // ---
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Repository for SqliteRepository {
    // ---
    async fn create_admin(&self, username: &str, password_hash: &str) -> Result<Administrator> {
        // ---
        let id = sqlx::query("INSERT INTO administrators (username, password_hash) VALUES (?1, ?2)")
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(Administrator {
            id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        })
    }

    async fn get_admin_by_username(&self, username: &str) -> Result<Option<Administrator>> {
        // ---
        let row = sqlx::query_as::<_, AdministratorRow>(
            "SELECT id, username, password_hash FROM administrators WHERE username = ?1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Administrator::from))
    }

    async fn list_visitors(&self) -> Result<Vec<VisitorRecord>> {
        // ---
        let rows = sqlx::query_as::<_, VisitorRow>(&format!(
            "SELECT {VISITOR_COLUMNS} FROM visitor_records ORDER BY visited_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(VisitorRecord::from).collect())
    }

    async fn get_visitor(&self, id: i64) -> Result<Option<VisitorRecord>> {
        // ---
        let row = sqlx::query_as::<_, VisitorRow>(&format!(
            "SELECT {VISITOR_COLUMNS} FROM visitor_records WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(VisitorRecord::from))
    }

    async fn insert_visitor(
        &self,
        details: &VisitorDetails,
        visited_at: DateTime<Utc>,
    ) -> Result<VisitorRecord> {
        // ---
        let id = sqlx::query(
            "INSERT INTO visitor_records (first_name, last_name, reason, visited_at)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&details.first_name)
        .bind(&details.last_name)
        .bind(&details.reason)
        .bind(visited_at)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(VisitorRecord {
            id,
            first_name: details.first_name.clone(),
            last_name: details.last_name.clone(),
            reason: details.reason.clone(),
            visited_at,
        })
    }

    async fn update_visitor(
        &self,
        id: i64,
        details: &VisitorDetails,
    ) -> Result<Option<VisitorRecord>> {
        // ---
        // visited_at is immutable once assigned.
        let row = sqlx::query_as::<_, VisitorRow>(&format!(
            "UPDATE visitor_records SET first_name = ?1, last_name = ?2, reason = ?3
             WHERE id = ?4
             RETURNING {VISITOR_COLUMNS}"
        ))
        .bind(&details.first_name)
        .bind(&details.last_name)
        .bind(&details.reason)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(VisitorRecord::from))
    }

    async fn delete_visitor(&self, id: i64) -> Result<bool> {
        // ---
        let result = sqlx::query("DELETE FROM visitor_records WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_visitors(&self) -> Result<i64> {
        // ---
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM visitor_records")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn count_visitors_between(
        &self,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<i64> {
        // ---
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM visitor_records WHERE visited_at >= ?1 AND visited_at < ?2",
        )
        .bind(from)
        .bind(until)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn count_visitors_since(&self, since: DateTime<Utc>) -> Result<i64> {
        // ---
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM visitor_records WHERE visited_at >= ?1")
                .bind(since)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<()> {
        // ---
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
