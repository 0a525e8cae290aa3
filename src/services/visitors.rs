//! Visitor record operations.

use crate::domain::{MetricsPtr, RepositoryPtr, VisitorDetails, VisitorRecord};
use crate::error::{AppError, AppResult};
use chrono::Utc;
use validator::Validate;

#[derive(Clone)]
pub struct VisitorService {
    repository: RepositoryPtr,
    metrics: MetricsPtr,
}

impl VisitorService {
    // ---
    pub fn new(repository: RepositoryPtr, metrics: MetricsPtr) -> Self {
        Self {
            repository,
            metrics,
        }
    }

    /// All visitors, newest first.
    pub async fn list_visitors(&self) -> AppResult<Vec<VisitorRecord>> {
        Ok(self.repository.list_visitors().await?)
    }

    pub async fn get_visitor(&self, id: i64) -> AppResult<VisitorRecord> {
        self.repository
            .get_visitor(id)
            .await?
            .ok_or(AppError::NotFound(id))
    }

    /// Record a new visit stamped with the current UTC time.
    pub async fn add_visitor(&self, details: &VisitorDetails) -> AppResult<VisitorRecord> {
        // ---
        let details = validated(details)?;
        let record = self.repository.insert_visitor(&details, Utc::now()).await?;

        self.metrics.record_visitor_created();
        tracing::info!(id = record.id, "Visitor added");
        Ok(record)
    }

    /// Replace names and reason. The visit time is left untouched.
    ///
    /// An unknown ID is reported before the submitted fields are checked.
    pub async fn edit_visitor(&self, id: i64, details: &VisitorDetails) -> AppResult<VisitorRecord> {
        // ---
        self.get_visitor(id).await?;
        let details = validated(details)?;
        let record = self
            .repository
            .update_visitor(id, &details)
            .await?
            .ok_or(AppError::NotFound(id))?;

        self.metrics.record_visitor_updated();
        tracing::info!(id, "Visitor updated");
        Ok(record)
    }

    /// Remove a record permanently.
    pub async fn delete_visitor(&self, id: i64) -> AppResult<()> {
        // ---
        if !self.repository.delete_visitor(id).await? {
            return Err(AppError::NotFound(id));
        }

        self.metrics.record_visitor_deleted();
        tracing::info!(id, "Visitor deleted");
        Ok(())
    }
}

/// Trim every field, then enforce the non-empty and length rules.
fn validated(details: &VisitorDetails) -> AppResult<VisitorDetails> {
    let details = details.trimmed();
    details
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(details)
}
