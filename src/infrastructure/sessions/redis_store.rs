//! Session storage in Redis with a native key TTL.

use crate::domain::{Administrator, SessionInfo, SessionStore};
use anyhow::{Context, Result};
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};
use std::time::Duration;
use uuid::Uuid;

// ---

/// Stores each session as `session:{token}` holding the JSON-encoded
/// [`SessionInfo`], expiring after the configured TTL.
pub struct RedisSessionStore {
    // ---
    client: Client,
    ttl: Duration,
}

impl RedisSessionStore {
    // ---
    pub fn new(client: Client, ttl: Duration) -> Self {
        // ---
        Self { client, ttl }
    }

    /// Creates a new multiplexed Redis connection.
    async fn get_conn(&self) -> Result<MultiplexedConnection> {
        // ---
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|err| {
                tracing::error!("Failed to connect to Redis: {:?}", err);
                err
            })
            .context("Redis connection failed")
    }
}

fn redis_key(token: &str) -> String {
    format!("session:{token}")
}

#[async_trait::async_trait]
impl SessionStore for RedisSessionStore {
    // ---
    async fn create(&self, admin: &Administrator) -> Result<String> {
        // ---
        let token = Uuid::new_v4().to_string();
        let ttl_secs = self.ttl.as_secs();

        let info = SessionInfo::issue(admin, chrono::Utc::now().timestamp(), self.ttl);
        let session_json =
            serde_json::to_string(&info).context("Failed to serialize session data")?;

        // Redis rejects SETEX with a zero TTL.
        let mut conn = self.get_conn().await?;
        conn.set_ex::<_, _, ()>(redis_key(&token), session_json, ttl_secs.max(1))
            .await
            .context("Failed to store session in Redis")?;

        tracing::info!("Created session for user: {}", admin.username);
        Ok(token)
    }

    async fn get(&self, token: &str) -> Result<Option<SessionInfo>> {
        // ---
        let mut conn = self.get_conn().await?;
        let raw: Option<String> = conn
            .get(redis_key(token))
            .await
            .context("Failed to read session from Redis")?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        let info: SessionInfo =
            serde_json::from_str(&raw).context("Failed to deserialize session data")?;
        if info.is_expired(chrono::Utc::now().timestamp()) {
            return Ok(None);
        }

        Ok(Some(info))
    }

    async fn destroy(&self, token: &str) -> Result<()> {
        // ---
        let mut conn = self.get_conn().await?;
        conn.del::<_, ()>(redis_key(token))
            .await
            .context("Failed to delete session from Redis")?;

        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        // ---
        let mut conn = self.get_conn().await?;
        let _: String = conn.ping().await.context("Redis PING failed")?;
        Ok(())
    }
}
