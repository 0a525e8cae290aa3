use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// The privileged account that manages visitor records.
#[derive(Clone, Serialize)]
pub struct Administrator {
    // ---
    pub id: i64,
    pub username: String,

    /// Argon2 PHC string; never serialized.
    #[serde(skip)]
    pub password_hash: String,
}

impl fmt::Debug for Administrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Administrator")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// One logged visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorRecord {
    // ---
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub reason: String,

    /// Arrival time, assigned at creation and never changed afterwards.
    pub visited_at: DateTime<Utc>,
}

/// The editable part of a visitor record, as submitted by the add/edit forms.
///
/// The original form field names (`ad`, `soyad`, `sebep`) are accepted as
/// aliases. Missing fields deserialize to empty strings so that they are
/// reported by validation rather than by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct VisitorDetails {
    // ---
    #[serde(default, alias = "ad")]
    #[validate(length(min = 1, max = 100, message = "first name must be 1-100 characters"))]
    pub first_name: String,

    #[serde(default, alias = "soyad")]
    #[validate(length(min = 1, max = 100, message = "last name must be 1-100 characters"))]
    pub last_name: String,

    #[serde(default, alias = "sebep")]
    #[validate(length(min = 1, max = 200, message = "reason must be 1-200 characters"))]
    pub reason: String,
}

impl VisitorDetails {
    // ---
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        // ---
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            reason: reason.into(),
        }
    }

    /// Returns a copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        // ---
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            reason: self.reason.trim().to_string(),
        }
    }
}

/// Aggregate visitor counts. The three counts overlap: today's visitors are
/// also part of `last_7_days` and `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorStats {
    // ---
    pub total: i64,
    pub today: i64,
    pub last_7_days: i64,
}
