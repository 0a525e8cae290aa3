use crate::domain::{Administrator, SessionInfo, SessionStore};
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use uuid::Uuid;

/// Process-local session store.
///
/// Sessions do not survive a restart. Expired entries are dropped lazily,
/// on lookup and whenever a new session is created.
pub struct MemorySessionStore {
    // ---
    sessions: Mutex<HashMap<String, SessionInfo>>,
    ttl: Duration,
}

impl MemorySessionStore {
    // ---
    pub fn new(ttl: Duration) -> Self {
        // ---
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, SessionInfo>>> {
        self.sessions
            .lock()
            .map_err(|_| anyhow!("session map lock poisoned"))
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }
}

#[async_trait::async_trait]
impl SessionStore for MemorySessionStore {
    // ---
    async fn create(&self, admin: &Administrator) -> Result<String> {
        // ---
        let token = Uuid::new_v4().to_string();
        let now = chrono::Utc::now().timestamp();
        let info = SessionInfo::issue(admin, now, self.ttl);

        let mut sessions = self.lock()?;
        sessions.retain(|_, s| !s.is_expired(now));
        sessions.insert(token.clone(), info);

        tracing::info!("Created session for user: {}", admin.username);
        Ok(token)
    }

    async fn get(&self, token: &str) -> Result<Option<SessionInfo>> {
        // ---
        let now = chrono::Utc::now().timestamp();
        let mut sessions = self.lock()?;

        match sessions.get(token) {
            Some(info) if info.is_expired(now) => {
                sessions.remove(token);
                Ok(None)
            }
            Some(info) => Ok(Some(info.clone())),
            None => Ok(None),
        }
    }

    async fn destroy(&self, token: &str) -> Result<()> {
        // ---
        self.lock()?.remove(token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    fn admin() -> Administrator {
        Administrator {
            id: 7,
            username: "admin".to_string(),
            password_hash: String::new(),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_identity() {
        // ---
        let store = MemorySessionStore::new(Duration::from_secs(60));

        let token = store.create(&admin()).await.unwrap();
        let info = store.get(&token).await.unwrap().expect("session should exist");

        assert_eq!(info.admin_id, 7);
        assert_eq!(info.username, "admin");
    }

    #[tokio::test]
    async fn tokens_are_unique_per_login() {
        // ---
        let store = MemorySessionStore::new(Duration::from_secs(60));

        let a = store.create(&admin()).await.unwrap();
        let b = store.create(&admin()).await.unwrap();

        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn destroy_invalidates_token() {
        // ---
        let store = MemorySessionStore::new(Duration::from_secs(60));

        let token = store.create(&admin()).await.unwrap();
        store.destroy(&token).await.unwrap();

        assert!(store.get(&token).await.unwrap().is_none());
        // Destroying again is not an error.
        store.destroy(&token).await.unwrap();
    }

    #[tokio::test]
    async fn expired_sessions_are_absent() {
        // ---
        let store = MemorySessionStore::new(Duration::ZERO);

        let token = store.create(&admin()).await.unwrap();

        assert!(store.get(&token).await.unwrap().is_none());
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn huge_ttl_keeps_session_alive() {
        // ---
        let store = MemorySessionStore::new(Duration::from_secs(u64::MAX));

        let token = store.create(&admin()).await.unwrap();
        assert!(store.get(&token).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn unknown_token_is_absent() {
        // ---
        let store = MemorySessionStore::new(Duration::from_secs(60));
        assert!(store.get("not-a-token").await.unwrap().is_none());
    }
}
