use super::models::Administrator;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Identity bound to a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    // ---
    pub admin_id: i64,
    pub username: String,

    /// Unix timestamp (seconds) after which the session is no longer valid.
    pub expires_at: i64,
}

impl SessionInfo {
    // ---
    /// Session for `admin` issued at `now` (Unix seconds), valid for `ttl`.
    ///
    /// Lifetimes beyond the `i64` range saturate to a session that never expires.
    pub fn issue(admin: &Administrator, now: i64, ttl: Duration) -> Self {
        // ---
        let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
        Self {
            admin_id: admin.id,
            username: admin.username.clone(),
            expires_at: now.saturating_add(ttl_secs),
        }
    }

    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.expires_at
    }
}

/// Server-side session storage: opaque token to administrator identity.
///
/// Implementations own the expiry policy. An expired session must be
/// reported as absent by `get`.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    // ---
    /// Open a session for `admin` and return its token.
    async fn create(&self, admin: &Administrator) -> Result<String>;

    /// Look up a live session.
    async fn get(&self, token: &str) -> Result<Option<SessionInfo>>;

    /// Remove a session. Unknown tokens are not an error.
    async fn destroy(&self, token: &str) -> Result<()>;

    /// Backend connectivity check.
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// Type alias for any backend that implements SessionStore.
pub type SessionStorePtr = Arc<dyn SessionStore>;
