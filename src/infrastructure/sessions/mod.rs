mod memory;
mod redis_store;

pub use memory::MemorySessionStore;
pub use redis_store::RedisSessionStore;

use crate::config::{SessionBackend, SessionConfig};
use crate::domain::SessionStorePtr;
use std::sync::Arc;

/// Builds the session store selected by configuration.
pub fn create_session_store(config: &SessionConfig) -> anyhow::Result<SessionStorePtr> {
    // ---
    match &config.backend {
        SessionBackend::Memory => {
            tracing::info!("Using in-memory session store");
            Ok(Arc::new(MemorySessionStore::new(config.ttl)))
        }
        SessionBackend::Redis { url } => {
            tracing::info!("Using Redis session store");
            let client = redis::Client::open(url.as_str())?;
            Ok(Arc::new(RedisSessionStore::new(client, config.ttl)))
        }
    }
}
