use super::models::{Administrator, VisitorDetails, VisitorRecord};
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Abstraction for administrator and visitor persistence.
#[async_trait::async_trait]
pub trait Repository: Send + Sync {
    // ---
    /// Create an administrator with an already hashed password.
    async fn create_admin(&self, username: &str, password_hash: &str) -> Result<Administrator>;

    /// Get administrator by username.
    async fn get_admin_by_username(&self, username: &str) -> Result<Option<Administrator>>;

    /// All visitor records, newest first.
    async fn list_visitors(&self) -> Result<Vec<VisitorRecord>>;

    /// Get a visitor record by ID.
    async fn get_visitor(&self, id: i64) -> Result<Option<VisitorRecord>>;

    /// Insert a visitor record with the given arrival time.
    async fn insert_visitor(
        &self,
        details: &VisitorDetails,
        visited_at: DateTime<Utc>,
    ) -> Result<VisitorRecord>;

    /// Overwrite name and reason of an existing record. `None` when the ID is unknown.
    async fn update_visitor(
        &self,
        id: i64,
        details: &VisitorDetails,
    ) -> Result<Option<VisitorRecord>>;

    /// Delete a record. Returns `false` when the ID is unknown.
    async fn delete_visitor(&self, id: i64) -> Result<bool>;

    /// Count of all visitor records.
    async fn count_visitors(&self) -> Result<i64>;

    /// Count of records with `from <= visited_at < until`.
    async fn count_visitors_between(&self, from: DateTime<Utc>, until: DateTime<Utc>)
        -> Result<i64>;

    /// Count of records with `visited_at >= since`.
    async fn count_visitors_since(&self, since: DateTime<Utc>) -> Result<i64>;

    /// Round-trip to the store, used by the full health check.
    async fn ping(&self) -> Result<()>;
}

/// Type alias for any backend that implements Repository.
pub type RepositoryPtr = Arc<dyn Repository>;
